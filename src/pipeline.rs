use std::collections::BTreeSet;

use log::debug;

use crate::{
	automata::{Automaton, Determinized, Error, Vertex},
	Ast, BuildNfa,
};

/// Regular expression to complete deterministic automaton pipeline.
///
/// By default the four stages are run, and the deterministic automaton is
/// completed over the symbols it uses.
#[derive(Debug, Clone)]
pub struct Pipeline {
	alphabet: BTreeSet<char>,
	complete: bool,
}

impl Default for Pipeline {
	fn default() -> Self {
		Self {
			alphabet: BTreeSet::new(),
			complete: true,
		}
	}
}

/// Output of every stage of a [`Pipeline`].
#[derive(Debug, Clone)]
pub struct Stages {
	/// Thompson automaton, with epsilon transitions.
	pub nfa: Automaton,

	/// Thompson automaton after epsilon elimination.
	pub epsilon_free: Automaton,

	/// Partial deterministic automaton.
	pub dfa: Determinized,

	/// Complete deterministic automaton, if the completion stage was run.
	pub complete: Option<Automaton>,

	/// Sink added by the completion stage, if any.
	pub sink: Option<Vertex>,
}

impl Stages {
	/// Returns the automaton produced by the last stage.
	pub fn result(&self) -> &Automaton {
		self.complete.as_ref().unwrap_or(&self.dfa.automaton)
	}

	pub fn into_result(self) -> Automaton {
		self.complete.unwrap_or(self.dfa.automaton)
	}
}

impl Pipeline {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds the given symbols to the completion alphabet.
	///
	/// The complete automaton will have a transition for every such symbol,
	/// even if it does not appear in the expression.
	pub fn with_alphabet(mut self, symbols: impl IntoIterator<Item = char>) -> Self {
		self.alphabet.extend(symbols);
		self
	}

	/// Enables or disables the completion stage.
	pub fn complete(mut self, complete: bool) -> Self {
		self.complete = complete;
		self
	}

	pub fn run(&self, ast: &Ast) -> Result<Stages, Error> {
		let nfa = ast.build_nfa()?;
		debug!(
			"thompson construction: {} vertices, {} transitions",
			nfa.len(),
			nfa.transition_count()
		);

		let mut epsilon_free = nfa.clone();
		epsilon_free.remove_epsilon_transitions();

		let dfa = epsilon_free.determinize();

		let (complete, sink) = if self.complete {
			let mut alphabet = dfa.automaton.alphabet();
			alphabet.extend(&self.alphabet);

			let mut complete = dfa.automaton.clone();
			let sink = complete.complete_over(&alphabet)?;
			(Some(complete), sink)
		} else {
			(None, None)
		};

		Ok(Stages {
			nfa,
			epsilon_free,
			dfa,
			complete,
			sink,
		})
	}
}

/// Compiles the given expression into a complete deterministic automaton.
pub fn compile(ast: &Ast) -> Result<Automaton, Error> {
	Ok(Pipeline::default().run(ast)?.into_result())
}
