use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ErrorKind, Symbol, Vertex, EPSILON};

/// Graph operation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("vertex {0} not found")]
	VertexNotFound(Vertex),

	#[error("vertex {0} is not a finish")]
	NotAFinish(Vertex),

	#[error("transition {from} -> {to} ({}) not found", DisplaySymbol(.symbol))]
	TransitionNotFound {
		from: Vertex,
		to: Vertex,
		symbol: Symbol,
	},

	#[error("number of finishes is {0} != 1")]
	NotSingleFinish(usize),

	#[error("vertex identifier overflow ({0} + {1})")]
	VertexOverflow(Vertex, u32),
}

impl Error {
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::VertexNotFound(_) | Self::NotAFinish(_) | Self::TransitionNotFound { .. } => {
				ErrorKind::NotFound
			}
			Self::NotSingleFinish(_) => ErrorKind::InvariantViolation,
			Self::VertexOverflow(_, _) => ErrorKind::Overflow,
		}
	}
}

struct DisplaySymbol<'a>(&'a Symbol);

impl<'a> std::fmt::Display for DisplaySymbol<'a> {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self.0 {
			Some(c) => write!(f, "`{c}`"),
			None => f.write_str("epsilon"),
		}
	}
}

/// Outgoing transitions of a vertex, by symbol.
pub type Transitions = BTreeMap<Symbol, BTreeSet<Vertex>>;

/// Vertex renumbering applied to an automaton imported with
/// [`Automaton::compose`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Shift(pub u32);

impl Shift {
	/// Shifts the given vertex, failing if the result is not a valid
	/// identifier.
	pub fn apply(&self, q: Vertex) -> Result<Vertex, Error> {
		q.checked_add(self.0).ok_or(Error::VertexOverflow(q, self.0))
	}
}

/// Vertex identity policy used when importing an automaton into another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composition {
	/// Renumber the imported vertices past the greatest vertex of the
	/// receiver, so that no vertex is shared.
	Disjoint,

	/// Identical vertex identifiers denote the same vertex.
	Shared,
}

/// Finite automaton with a single start vertex.
///
/// The same structure is used for every stage of the pipeline: with epsilon
/// transitions, without, deterministic or not. Every vertex is a key of the
/// transition map, even without outgoing transitions, so that iterating over
/// the map iterates over the vertices in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Automaton {
	start: Vertex,
	finishes: BTreeSet<Vertex>,
	transitions: BTreeMap<Vertex, Transitions>,
}

impl Automaton {
	/// Creates a new automaton with a single (start) vertex.
	pub fn new(start: Vertex) -> Self {
		let mut transitions = BTreeMap::new();
		transitions.insert(start, Transitions::new());

		Self {
			start,
			finishes: BTreeSet::new(),
			transitions,
		}
	}

	/// Returns the start vertex.
	pub fn start(&self) -> Vertex {
		self.start
	}

	/// Returns the set of finish vertices.
	pub fn finishes(&self) -> &BTreeSet<Vertex> {
		&self.finishes
	}

	/// Returns an iterator over the vertices, in ascending order.
	pub fn vertices(&self) -> impl '_ + DoubleEndedIterator<Item = Vertex> {
		self.transitions.keys().copied()
	}

	/// Returns the number of vertices.
	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	pub fn contains(&self, q: Vertex) -> bool {
		self.transitions.contains_key(&q)
	}

	/// Returns the greatest vertex identifier.
	pub fn max_vertex(&self) -> Vertex {
		// the start vertex is always present.
		self.transitions
			.last_key_value()
			.map(|(q, _)| *q)
			.unwrap_or(self.start)
	}

	/// Adds the given vertex, if not already present.
	pub fn add_vertex(&mut self, q: Vertex) -> Vertex {
		self.transitions.entry(q).or_default();
		q
	}

	/// Returns the identifier following the greatest vertex.
	fn next_vertex(&self) -> Result<Vertex, Error> {
		Shift(1).apply(self.max_vertex())
	}

	/// Adds a fresh vertex, greater than every other vertex.
	pub fn new_vertex(&mut self) -> Result<Vertex, Error> {
		let q = self.next_vertex()?;
		Ok(self.add_vertex(q))
	}

	pub fn is_finish(&self, q: Vertex) -> bool {
		self.finishes.contains(&q)
	}

	/// Sets the given vertex as a finish.
	///
	/// Returns `true` if it was not already a finish.
	pub fn add_finish(&mut self, q: Vertex) -> Result<bool, Error> {
		if self.contains(q) {
			Ok(self.finishes.insert(q))
		} else {
			Err(Error::VertexNotFound(q))
		}
	}

	pub fn remove_finish(&mut self, q: Vertex) -> Result<(), Error> {
		if self.finishes.remove(&q) {
			Ok(())
		} else {
			Err(Error::NotAFinish(q))
		}
	}

	/// Returns the only finish vertex.
	///
	/// Fails if there is no finish, or more than one.
	pub fn single_finish(&self) -> Result<Vertex, Error> {
		let mut finishes = self.finishes.iter();
		match (finishes.next(), finishes.next()) {
			(Some(q), None) => Ok(*q),
			_ => Err(Error::NotSingleFinish(self.finishes.len())),
		}
	}

	/// Adds a transition from `source` to `target`.
	///
	/// Returns `true` if the transition was not already present.
	pub fn add_transition(
		&mut self,
		source: Vertex,
		target: Vertex,
		symbol: Symbol,
	) -> Result<bool, Error> {
		if !self.contains(target) {
			return Err(Error::VertexNotFound(target));
		}

		let transitions = self
			.transitions
			.get_mut(&source)
			.ok_or(Error::VertexNotFound(source))?;

		Ok(transitions.entry(symbol).or_default().insert(target))
	}

	pub fn remove_transition(
		&mut self,
		source: Vertex,
		target: Vertex,
		symbol: Symbol,
	) -> Result<(), Error> {
		let not_found = Error::TransitionNotFound {
			from: source,
			to: target,
			symbol,
		};

		let transitions = self.transitions.get_mut(&source).ok_or(not_found.clone())?;
		let targets = transitions.get_mut(&symbol).ok_or(not_found.clone())?;

		if targets.remove(&target) {
			if targets.is_empty() {
				transitions.remove(&symbol);
			}

			Ok(())
		} else {
			Err(not_found)
		}
	}

	/// Returns the outgoing transitions of the given vertex.
	pub fn transitions_from(&self, q: Vertex) -> Result<&Transitions, Error> {
		self.transitions.get(&q).ok_or(Error::VertexNotFound(q))
	}

	/// Returns the targets of the transitions from `q` labeled `symbol`.
	pub fn successors(&self, q: Vertex, symbol: Symbol) -> impl '_ + Iterator<Item = Vertex> {
		self.transitions
			.get(&q)
			.and_then(|transitions| transitions.get(&symbol))
			.into_iter()
			.flatten()
			.copied()
	}

	/// Returns an iterator over every `(source, symbol, target)` transition, in
	/// canonical order.
	pub fn transitions(&self) -> impl '_ + Iterator<Item = (Vertex, Symbol, Vertex)> {
		self.transitions.iter().flat_map(|(source, transitions)| {
			transitions.iter().flat_map(move |(symbol, targets)| {
				targets.iter().map(move |target| (*source, *symbol, *target))
			})
		})
	}

	/// Returns the number of transitions.
	pub fn transition_count(&self) -> usize {
		self.transitions
			.values()
			.flat_map(BTreeMap::values)
			.map(BTreeSet::len)
			.sum()
	}

	/// Returns every (non epsilon) symbol labeling a transition.
	pub fn alphabet(&self) -> BTreeSet<char> {
		self.transitions
			.values()
			.flat_map(BTreeMap::keys)
			.filter_map(|symbol| *symbol)
			.collect()
	}

	pub fn is_epsilon_free(&self) -> bool {
		self.transitions
			.values()
			.all(|transitions| !transitions.contains_key(&EPSILON))
	}

	/// Checks that the automaton is epsilon free and that every vertex has at
	/// most one transition per symbol.
	pub fn is_deterministic(&self) -> bool {
		self.is_epsilon_free()
			&& self
				.transitions
				.values()
				.flat_map(BTreeMap::values)
				.all(|targets| targets.len() <= 1)
	}

	/// Checks that every vertex has exactly one transition per symbol of the
	/// given alphabet.
	pub fn is_complete(&self, alphabet: &BTreeSet<char>) -> bool {
		self.is_deterministic()
			&& self.transitions.values().all(|transitions| {
				alphabet
					.iter()
					.all(|c| transitions.get(&Some(*c)).map_or(false, |t| t.len() == 1))
			})
	}

	/// Adds the given `other` automaton to `self`, mapping the other automaton
	/// vertices in the process.
	///
	/// The start vertex of `other` is imported as a regular vertex.
	pub fn mapped_union(&mut self, other: Automaton, f: impl Fn(Vertex) -> Vertex) {
		for (q, transitions) in other.transitions {
			let this_transitions = self.transitions.entry(f(q)).or_default();
			for (symbol, targets) in transitions {
				this_transitions
					.entry(symbol)
					.or_default()
					.extend(targets.into_iter().map(&f));
			}
		}

		// every target is a key of `other.transitions`, hence already added.
		self.finishes.extend(other.finishes.into_iter().map(f));
	}

	/// Adds the given `other` automaton to `self`, shifting every vertex of
	/// `other` by `shift`.
	///
	/// Fails, leaving `self` untouched, if a shifted vertex would overflow.
	pub fn add_shifted(&mut self, other: Automaton, shift: Shift) -> Result<(), Error> {
		shift.apply(other.max_vertex())?;
		// no vertex of `other` exceeds its maximum.
		self.mapped_union(other, |q| q + shift.0);
		Ok(())
	}

	/// Imports `other` into `self` according to the given policy.
	///
	/// Returns the shift applied to the vertices of `other`.
	pub fn compose(&mut self, other: Automaton, policy: Composition) -> Result<Shift, Error> {
		let shift = match policy {
			Composition::Disjoint => Shift(self.next_vertex()?),
			Composition::Shared => Shift(0),
		};

		self.add_shifted(other, shift)?;
		Ok(shift)
	}

	/// Removes every transition labeled `symbol`.
	pub(crate) fn remove_symbol(&mut self, symbol: Symbol) {
		for transitions in self.transitions.values_mut() {
			transitions.remove(&symbol);
		}
	}

	pub(crate) fn transition_map(&self) -> &BTreeMap<Vertex, Transitions> {
		&self.transitions
	}

	pub(crate) fn finishes_mut(&mut self) -> &mut BTreeSet<Vertex> {
		&mut self.finishes
	}

	/// Adds a transition between two vertices known to be in the automaton.
	pub(crate) fn insert_transition(&mut self, source: Vertex, symbol: Symbol, target: Vertex) {
		debug_assert!(self.contains(source) && self.contains(target));
		self.transitions
			.entry(source)
			.or_default()
			.entry(symbol)
			.or_default()
			.insert(target);
	}
}
