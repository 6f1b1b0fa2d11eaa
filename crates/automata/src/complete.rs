use std::collections::BTreeSet;

use log::debug;

use crate::{Automaton, Error, Vertex};

impl Automaton {
	/// Makes the transition function total over the automaton's own alphabet.
	///
	/// See [`Self::complete_over`].
	pub fn complete(&mut self) -> Result<Option<Vertex>, Error> {
		let alphabet = self.alphabet();
		self.complete_over(&alphabet)
	}

	/// Makes the transition function total over the given alphabet by adding
	/// a non-finish sink vertex, looping on every symbol, and a transition to
	/// the sink for every missing `(vertex, symbol)` pair.
	///
	/// Returns the sink, or `None` if no transition was missing, in which case
	/// the automaton is left untouched. Fails, leaving the automaton
	/// untouched, if no fresh vertex identifier is left for the sink.
	///
	/// The automaton is expected to be deterministic.
	pub fn complete_over(&mut self, alphabet: &BTreeSet<char>) -> Result<Option<Vertex>, Error> {
		let missing: Vec<(Vertex, char)> = self
			.transition_map()
			.iter()
			.flat_map(|(q, transitions)| {
				alphabet
					.iter()
					.filter(|c| !transitions.contains_key(&Some(**c)))
					.map(move |c| (*q, *c))
			})
			.collect();

		if missing.is_empty() {
			return Ok(None);
		}

		let sink = self.new_vertex()?;
		debug!(
			"completion: {} missing transitions redirected to sink {sink}",
			missing.len()
		);

		for (q, c) in missing {
			self.insert_transition(q, Some(c), sink)
		}

		for &c in alphabet {
			self.insert_transition(sink, Some(c), sink)
		}

		Ok(Some(sink))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn adds_sink() {
		let mut aut = Automaton::new(0);
		aut.add_vertex(1);
		aut.add_finish(1).unwrap();
		aut.add_transition(0, 1, Some('a')).unwrap();
		aut.add_transition(1, 0, Some('b')).unwrap();

		let sink = aut.complete().unwrap();
		assert_eq!(sink, Some(2));
		assert!(!aut.is_finish(2));
		assert!(aut.is_complete(&aut.alphabet()));
		assert_eq!(
			aut.transitions().collect::<Vec<_>>(),
			[
				(0, Some('a'), 1),
				(0, Some('b'), 2),
				(1, Some('a'), 2),
				(1, Some('b'), 0),
				(2, Some('a'), 2),
				(2, Some('b'), 2)
			]
		);
	}

	#[test]
	fn already_complete() {
		let mut aut = Automaton::new(0);
		aut.add_finish(0).unwrap();
		aut.add_transition(0, 0, Some('a')).unwrap();

		let before = aut.clone();
		assert_eq!(aut.complete(), Ok(None));
		assert_eq!(aut, before);
	}

	#[test]
	fn empty_alphabet() {
		let mut aut = Automaton::new(0);
		assert_eq!(aut.complete(), Ok(None));
		assert_eq!(aut.len(), 1);
	}

	#[test]
	fn extended_alphabet() {
		let mut aut = Automaton::new(0);
		aut.add_transition(0, 0, Some('a')).unwrap();

		let alphabet: BTreeSet<char> = ['a', 'b'].into_iter().collect();
		assert_eq!(aut.complete_over(&alphabet), Ok(Some(1)));
		assert!(aut.is_complete(&alphabet));
		assert_eq!(aut.successors(0, Some('b')).collect::<Vec<_>>(), [1]);
	}

	#[test]
	fn no_identifier_left_for_sink() {
		let mut aut: Automaton = "4294967295\n\n\n4294967295 0 a\n".parse().unwrap();
		let before = aut.clone();

		let err = aut.complete().unwrap_err();
		assert_eq!(err, Error::VertexOverflow(Vertex::MAX, 1));
		assert_eq!(aut, before);
	}
}
