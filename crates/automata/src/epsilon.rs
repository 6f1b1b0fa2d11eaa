use std::collections::BTreeSet;

use log::{debug, trace};

use crate::{Automaton, Vertex, EPSILON};

impl Automaton {
	/// Returns the set of vertices reachable from `q` using only epsilon
	/// transitions, `q` included.
	pub fn epsilon_closure(&self, q: Vertex) -> BTreeSet<Vertex> {
		self.epsilon_closure_of(Some(q))
	}

	/// Returns the union of the epsilon closures of the given vertices.
	pub fn epsilon_closure_of(&self, qs: impl IntoIterator<Item = Vertex>) -> BTreeSet<Vertex> {
		let mut closure = BTreeSet::new();
		let mut stack: Vec<_> = qs.into_iter().collect();

		while let Some(q) = stack.pop() {
			if closure.insert(q) {
				stack.extend(self.successors(q, EPSILON).filter(|r| !closure.contains(r)))
			}
		}

		closure
	}

	/// Removes every epsilon transition, preserving the recognized language.
	///
	/// Each vertex receives every non-epsilon transition of its epsilon
	/// closure, and becomes a finish if its closure contains a finish. Closures
	/// are all computed on the original automaton before any transition is
	/// added or removed.
	pub fn remove_epsilon_transitions(&mut self) -> &mut Self {
		let mut new_finishes = Vec::new();
		let mut new_transitions = Vec::new();

		for q in self.vertices() {
			let closure = self.epsilon_closure(q);
			trace!("epsilon closure of {q}: {closure:?}");

			if !self.is_finish(q) && closure.iter().any(|r| self.is_finish(*r)) {
				new_finishes.push(q);
			}

			for r in closure.into_iter().filter(|r| *r != q) {
				for (symbol, targets) in self.transition_map().get(&r).into_iter().flatten() {
					if symbol.is_some() {
						new_transitions.extend(targets.iter().map(|target| (q, *symbol, *target)))
					}
				}
			}
		}

		debug!(
			"epsilon elimination: {} new finishes, {} copied transitions",
			new_finishes.len(),
			new_transitions.len()
		);

		self.finishes_mut().extend(new_finishes);
		for (source, symbol, target) in new_transitions {
			self.insert_transition(source, symbol, target)
		}

		self.remove_symbol(EPSILON);
		self
	}
}
