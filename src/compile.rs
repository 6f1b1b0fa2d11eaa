use log::trace;

use crate::{
	automata::{Automaton, Composition, Error, EPSILON},
	Ast,
};

/// Thompson construction.
pub trait BuildNfa {
	/// Builds an automaton, with epsilon transitions, recognizing the same
	/// language as `self`.
	///
	/// The automaton has exactly one finish vertex. Its start vertex is `0`.
	fn build_nfa(&self) -> Result<Automaton, Error>;
}

impl BuildNfa for Ast {
	fn build_nfa(&self) -> Result<Automaton, Error> {
		let nfa = match self {
			Self::Atom(symbol) => {
				let mut nfa = Automaton::new(0);
				let finish = nfa.new_vertex()?;
				nfa.add_finish(finish)?;
				nfa.add_transition(nfa.start(), finish, *symbol)?;
				nfa
			}
			Self::Concatenation(left, right) => {
				let mut nfa = left.build_nfa()?;
				let right = right.build_nfa()?;

				let left_finish = nfa.single_finish()?;
				let right_start = right.start();

				let shift = nfa.compose(right, Composition::Disjoint)?;

				nfa.remove_finish(left_finish)?;
				nfa.add_transition(left_finish, shift.apply(right_start)?, EPSILON)?;
				nfa
			}
			Self::Alternation(left, right) => {
				let mut nfa = Automaton::new(0);
				let finish = nfa.new_vertex()?;
				nfa.add_finish(finish)?;

				for child in [left, right] {
					let child = child.build_nfa()?;
					let child_start = child.start();
					let child_finish = child.single_finish()?;

					let shift = nfa.compose(child, Composition::Disjoint)?;

					nfa.add_transition(nfa.start(), shift.apply(child_start)?, EPSILON)?;
					nfa.remove_finish(shift.apply(child_finish)?)?;
					nfa.add_transition(shift.apply(child_finish)?, finish, EPSILON)?;
				}

				nfa
			}
			Self::KleeneStar(inner) => {
				let mut nfa = Automaton::new(0);
				nfa.add_finish(nfa.start())?;

				let child = inner.build_nfa()?;
				let child_start = child.start();
				let child_finish = child.single_finish()?;

				let shift = nfa.compose(child, Composition::Disjoint)?;

				nfa.remove_finish(shift.apply(child_finish)?)?;
				nfa.add_transition(nfa.start(), shift.apply(child_start)?, EPSILON)?;
				nfa.add_transition(shift.apply(child_finish)?, nfa.start(), EPSILON)?;
				nfa
			}
		};

		trace!("`{self}`: {} vertices", nfa.len());
		Ok(nfa)
	}
}
