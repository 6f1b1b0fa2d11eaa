//! Vertex labels.
//!
//! Automata only handle integer vertices. Text documents may name vertices
//! with arbitrary whitespace-free strings instead: a [`Labels`] table interns
//! those names into vertex identifiers.
use std::collections::HashMap;

use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Vertex;

/// Label interning table.
///
/// Labels are assigned consecutive vertex identifiers, starting from `0`, in
/// the order they are first interned.
#[derive(Educe, Clone)]
#[educe(Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Labels {
	names: Vec<String>,

	#[educe(Debug(ignore))]
	#[educe(PartialEq(ignore))]
	index: HashMap<String, Vertex>,
}

impl Labels {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	/// Returns the vertex of the given label, allocating one if necessary.
	pub fn intern(&mut self, label: &str) -> Vertex {
		match self.index.get(label) {
			Some(q) => *q,
			None => {
				let q = self.names.len() as Vertex;
				self.names.push(label.to_owned());
				self.index.insert(label.to_owned(), q);
				q
			}
		}
	}

	/// Returns the vertex of the given label, if any.
	pub fn get(&self, label: &str) -> Option<Vertex> {
		self.index.get(label).copied()
	}

	/// Returns the label of the given vertex, if any.
	pub fn label(&self, q: Vertex) -> Option<&str> {
		self.names.get(q as usize).map(String::as_str)
	}

	/// Returns an iterator over the `(vertex, label)` pairs, by vertex.
	pub fn iter(&self) -> impl '_ + Iterator<Item = (Vertex, &str)> {
		self.names
			.iter()
			.enumerate()
			.map(|(q, name)| (q as Vertex, name.as_str()))
	}
}
