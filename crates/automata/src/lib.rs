//! This library provides the finite automaton graph used by the [`thompson`]
//! crate, along with the transformations turning a Thompson automaton into a
//! complete deterministic automaton:
//!
//! - epsilon elimination ([`Automaton::remove_epsilon_transitions`]),
//! - subset construction ([`Automaton::determinize`]),
//! - completion ([`Automaton::complete`]).
//!
//! Automata can be written and read back using a canonical text format
//! (see the [`text`] module), which is used for golden-output testing.
//!
//! [`thompson`]: <https://crates.io/crates/thompson>
mod automaton;
pub use automaton::*;

mod epsilon;

pub mod subset;
pub use subset::Determinized;

mod complete;

pub mod label;
pub use label::Labels;

pub mod text;
pub use text::Labelled;

#[cfg(feature = "dot")]
pub mod dot;

/// Vertex identifier, unique within one automaton.
pub type Vertex = u32;

/// Transition symbol.
///
/// `None` is the epsilon marker, and comes before every character.
pub type Symbol = Option<char>;

/// Epsilon marker, labeling transitions that read no character.
pub const EPSILON: Symbol = None;

/// Error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// An operation references a vertex, finish or transition absent from the
	/// automaton.
	NotFound,

	/// An automaton does not have the expected shape.
	InvariantViolation,

	/// A text document is not a valid automaton, or an automaton cannot be
	/// written as one.
	MalformedInput,

	/// The vertex identifier space is exhausted.
	Overflow,
}
