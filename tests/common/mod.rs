#![allow(dead_code)]
use std::collections::BTreeSet;

use quickcheck::{Arbitrary, Gen};
use thompson::{
	automata::{Automaton, Vertex},
	Ast,
};

pub const ALPHABET: [char; 3] = ['a', 'b', 'c'];

/// Reference acceptor, following epsilon transitions.
pub fn accepts(aut: &Automaton, word: &str) -> bool {
	let mut states = aut.epsilon_closure(aut.start());

	for c in word.chars() {
		let next: BTreeSet<Vertex> = states
			.iter()
			.flat_map(|q| aut.successors(*q, Some(c)))
			.collect();
		states = aut.epsilon_closure_of(next);
	}

	states.iter().any(|q| aut.is_finish(*q))
}

/// Returns every word over `alphabet` of length at most `max_len`.
pub fn words(alphabet: &[char], max_len: usize) -> Vec<String> {
	let mut result = vec![String::new()];
	let mut last = vec![String::new()];

	for _ in 0..max_len {
		last = last
			.iter()
			.flat_map(|w| {
				alphabet.iter().map(move |c| {
					let mut w = w.clone();
					w.push(*c);
					w
				})
			})
			.collect();
		result.extend(last.iter().cloned());
	}

	result
}

/// Randomly generated expression over [`ALPHABET`], with epsilon atoms.
#[derive(Debug, Clone)]
pub struct Regex(pub Ast);

impl Regex {
	fn generate(g: &mut Gen, depth: u32) -> Ast {
		let kind = if depth == 0 { 0 } else { u8::arbitrary(g) % 4 };

		match kind {
			0 => {
				let symbols = [Some('a'), Some('b'), Some('c'), None];
				Ast::Atom(*g.choose(&symbols).unwrap())
			}
			1 => Ast::concat(Self::generate(g, depth - 1), Self::generate(g, depth - 1)),
			2 => Ast::alt(Self::generate(g, depth - 1), Self::generate(g, depth - 1)),
			_ => Ast::star(Self::generate(g, depth - 1)),
		}
	}
}

impl Arbitrary for Regex {
	fn arbitrary(g: &mut Gen) -> Self {
		Self(Self::generate(g, 4))
	}

	fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
		let children = match &self.0 {
			Ast::Atom(_) => Vec::new(),
			Ast::Concatenation(l, r) | Ast::Alternation(l, r) => {
				vec![(**l).clone(), (**r).clone()]
			}
			Ast::KleeneStar(e) => vec![(**e).clone()],
		};

		Box::new(children.into_iter().map(Self))
	}
}
