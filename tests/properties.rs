use quickcheck::QuickCheck;
use thompson::{automata::Automaton, BuildNfa, Pipeline};

mod common;
use common::{accepts, words, Regex, ALPHABET};

const TESTS: u64 = 200;

fn check(property: fn(Regex) -> bool) {
	QuickCheck::new().tests(TESTS).quickcheck(property)
}

fn same_language(a: &Automaton, b: &Automaton) -> bool {
	words(&ALPHABET, 5)
		.iter()
		.all(|word| accepts(a, word) == accepts(b, word))
}

#[test]
fn thompson_single_finish() {
	fn property(Regex(ast): Regex) -> bool {
		let nfa = ast.build_nfa().unwrap();
		nfa.single_finish().is_ok() && nfa.start() == 0
	}

	check(property)
}

#[test]
fn epsilon_elimination() {
	fn property(Regex(ast): Regex) -> bool {
		let nfa = ast.build_nfa().unwrap();
		let mut epsilon_free = nfa.clone();
		epsilon_free.remove_epsilon_transitions();

		epsilon_free.is_epsilon_free()
			&& epsilon_free.len() == nfa.len()
			&& nfa.finishes().is_subset(epsilon_free.finishes())
			&& same_language(&nfa, &epsilon_free)
	}

	check(property)
}

#[test]
fn determinization() {
	fn property(Regex(ast): Regex) -> bool {
		let stages = Pipeline::new().complete(false).run(&ast).unwrap();
		let dfa = &stages.dfa;

		dfa.automaton.is_deterministic()
			&& dfa.subsets.len() == dfa.automaton.len()
			&& dfa.subset(dfa.automaton.start())
				== Some(&[stages.epsilon_free.start()].into_iter().collect())
			&& same_language(&stages.epsilon_free, &dfa.automaton)
	}

	check(property)
}

#[test]
fn completion() {
	fn property(Regex(ast): Regex) -> bool {
		let stages = Pipeline::new().with_alphabet(ALPHABET).run(&ast).unwrap();
		let complete = stages.result();
		let alphabet = ALPHABET.into_iter().collect();

		let sink_is_rejecting = match stages.sink {
			Some(sink) => {
				!complete.is_finish(sink) && complete.len() == stages.dfa.automaton.len() + 1
			}
			None => complete == &stages.dfa.automaton,
		};

		complete.is_complete(&alphabet)
			&& sink_is_rejecting
			&& same_language(&stages.nfa, complete)
	}

	check(property)
}

#[test]
fn text_round_trip() {
	fn property(Regex(ast): Regex) -> bool {
		let stages = Pipeline::new().run(&ast).unwrap();

		let round_trips = [
			&stages.nfa,
			&stages.epsilon_free,
			&stages.dfa.automaton,
			stages.result(),
		]
		.into_iter()
		.all(|aut| {
			let written = aut.to_text().unwrap();
			let parsed: Automaton = written.parse().unwrap();
			parsed == *aut && parsed.to_string() == written
		});

		round_trips
	}

	check(property)
}
