//! Subset (powerset) construction.
use std::collections::{BTreeMap, BTreeSet, VecDeque};

use log::{debug, trace};

use crate::{Automaton, Symbol, Vertex};

/// Deterministic automaton built by [`Automaton::determinize`].
///
/// Vertex `i` of the deterministic automaton stands for the set of vertices
/// `subsets[i]` of the source automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Determinized {
	pub automaton: Automaton,
	pub subsets: Vec<BTreeSet<Vertex>>,
}

impl Determinized {
	/// Returns the source vertices the given deterministic vertex stands for.
	pub fn subset(&self, q: Vertex) -> Option<&BTreeSet<Vertex>> {
		self.subsets.get(q as usize)
	}

	pub fn into_automaton(self) -> Automaton {
		self.automaton
	}
}

/// Assigns deterministic vertex identifiers to source vertex sets.
///
/// Two sets receive the same identifier iff they are equal.
#[derive(Default)]
struct Subsets {
	map: BTreeMap<BTreeSet<Vertex>, Vertex>,
	list: Vec<BTreeSet<Vertex>>,
}

impl Subsets {
	/// Returns the identifier of the given set, and `true` if it is new.
	fn insert(&mut self, set: BTreeSet<Vertex>) -> (Vertex, bool) {
		match self.map.get(&set) {
			Some(q) => (*q, false),
			None => {
				let q = self.list.len() as Vertex;
				self.list.push(set.clone());
				self.map.insert(set, q);
				(q, true)
			}
		}
	}
}

impl Automaton {
	/// Computes the deterministic transitions of the given vertex set: for each
	/// symbol, the union of the (epsilon closed) targets of every vertex.
	fn determinize_transitions_for(
		&self,
		states: &BTreeSet<Vertex>,
	) -> BTreeMap<char, BTreeSet<Vertex>> {
		let mut map: BTreeMap<char, BTreeSet<Vertex>> = BTreeMap::new();

		for &q in states {
			for (symbol, targets) in self.transition_map().get(&q).into_iter().flatten() {
				if let Some(c) = symbol {
					map.entry(*c)
						.or_default()
						.extend(self.epsilon_closure_of(targets.iter().copied()));
				}
			}
		}

		map
	}

	/// Turns this automaton into an equivalent deterministic automaton.
	///
	/// The automaton is expected to be epsilon free, but epsilon transitions
	/// are followed if any. Deterministic vertices are numbered in the order
	/// they are discovered, starting with `0` for the start vertex. The result
	/// is partial: no transition is added for a symbol leading nowhere.
	pub fn determinize(&self) -> Determinized {
		let mut subsets = Subsets::default();
		let mut transitions: Vec<(Vertex, Symbol, Vertex)> = Vec::new();
		let mut finishes = Vec::new();

		let (initial_state, _) = subsets.insert(self.epsilon_closure(self.start()));
		let mut queue = VecDeque::from([initial_state]);

		while let Some(det_q) = queue.pop_front() {
			let states = subsets.list[det_q as usize].clone();
			trace!("expanding {det_q} = {states:?}");

			if states.iter().any(|q| self.is_finish(*q)) {
				finishes.push(det_q);
			}

			for (c, next_states) in self.determinize_transitions_for(&states) {
				let (det_r, is_new) = subsets.insert(next_states);
				if is_new {
					queue.push_back(det_r)
				}

				transitions.push((det_q, Some(c), det_r));
			}
		}

		let mut automaton = Automaton::new(initial_state);
		for q in 1..(subsets.list.len() as Vertex) {
			automaton.add_vertex(q);
		}

		automaton.finishes_mut().extend(finishes);
		for (source, symbol, target) in transitions {
			automaton.insert_transition(source, symbol, target)
		}

		debug!(
			"subset construction: {} vertices -> {} vertices",
			self.len(),
			automaton.len()
		);

		Determinized {
			automaton,
			subsets: subsets.list,
		}
	}
}
