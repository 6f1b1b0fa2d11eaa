use thompson::{automata::Automaton, compile, Ast, BuildNfa, Pipeline};

mod common;
use common::{accepts, words, ALPHABET};

#[test]
fn atom() {
	let nfa = Ast::atom('a').build_nfa().unwrap();
	assert_eq!(nfa.start(), 0);
	assert_eq!(nfa.single_finish(), Ok(1));
	assert_eq!(nfa.to_string(), "0\n\n1\n\n0 1 a\n");
}

#[test]
fn concatenation() {
	let nfa = Ast::concat(Ast::atom('a'), Ast::atom('b'))
		.build_nfa()
		.unwrap();
	assert_eq!(nfa.len(), 4);
	assert_eq!(nfa.finishes().len(), 1);
	assert_eq!(nfa.to_string(), "0\n\n3\n\n0 1 a\n1 2\n2 3 b\n");
}

#[test]
fn kleene_star() {
	let nfa = Ast::star(Ast::atom('a')).build_nfa().unwrap();
	assert_eq!(nfa.start(), 0);
	assert_eq!(nfa.single_finish(), Ok(0));
	assert_eq!(nfa.to_string(), "0\n\n0\n\n0 1\n1 2 a\n2 0\n");
}

#[test]
fn epsilon_cycle() {
	let mut aut: Automaton = "0\n\n1\n\n0 1\n1 0\n".parse().unwrap();
	aut.remove_epsilon_transitions();
	assert!(aut.is_finish(0));
	assert!(aut.is_finish(1));
	assert_eq!(aut.transition_count(), 0);
}

#[test]
fn every_stage_golden() {
	// (a|b)*b
	let ast = Ast::concat(
		Ast::star(Ast::alt(Ast::atom('a'), Ast::atom('b'))),
		Ast::atom('b'),
	);

	let stages = Pipeline::new().run(&ast).unwrap();

	assert_eq!(
		stages.nfa.to_string(),
		"0\n\n8\n\n0 1\n1 3\n1 5\n2 0\n3 4 a\n4 2\n5 6 b\n6 2\n7 8 b\n0 7\n"
			.parse::<Automaton>()
			.unwrap()
			.to_string()
	);

	let dfa = &stages.dfa;
	assert_eq!(
		dfa.automaton.to_string(),
		"0\n\n2\n\n0 1 a\n0 2 b\n1 1 a\n1 2 b\n2 1 a\n2 2 b\n"
	);
	assert_eq!(stages.sink, None);
	assert!(stages.result().is_complete(&['a', 'b'].into_iter().collect()));
}

#[test]
fn empty_word_only() {
	let dfa = compile(&Ast::star(Ast::epsilon())).unwrap();
	assert_eq!(dfa.to_string(), "0\n\n0\n\n");
	assert!(accepts(&dfa, ""));
	assert!(!accepts(&dfa, "a"));
}

#[test]
fn language() {
	// a(b|c)*
	let ast = Ast::concat(
		Ast::atom('a'),
		Ast::star(Ast::alt(Ast::atom('b'), Ast::atom('c'))),
	);

	let dfa = compile(&ast).unwrap();
	assert!(dfa.is_complete(&dfa.alphabet()));

	for word in words(&ALPHABET, 5) {
		let expected = word.starts_with('a') && !word[1..].contains('a');
		assert_eq!(accepts(&dfa, &word), expected, "word {word:?}");
	}
}

#[test]
fn dot_output() {
	use thompson::automata::dot::DotDisplay;

	let nfa = Ast::star(Ast::atom('a')).build_nfa().unwrap();
	let dot = nfa.dot().to_string();

	assert!(dot.starts_with("digraph {\n"));
	assert!(dot.contains("\tq0 [label = \"0\", shape = doublecircle]\n"));
	assert!(dot.contains("\tq0 -> q1 [label = \"ε\"]\n"));
	assert!(dot.contains("\tq1 -> q2 [label = \"a\"]\n"));
}

#[test]
fn space_symbol() {
	let stages = Pipeline::new().run(&Ast::word("a b")).unwrap();

	for aut in [&stages.nfa, &stages.epsilon_free, stages.result()] {
		let written = aut.to_text().unwrap();
		let parsed: Automaton = written.parse().unwrap();
		assert_eq!(&parsed, aut);
		assert!(parsed.alphabet().contains(&' '));
	}

	assert!(accepts(stages.result(), "a b"));
	assert!(!accepts(stages.result(), "ab"));
}
