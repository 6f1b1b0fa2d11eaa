//! Canonical text format.
//!
//! A document is made of three sections:
//!
//! ```text
//! <start>
//!
//! <finish>
//! <finish>
//!
//! <source> <target> <symbol>
//! <source> <target>
//! ```
//!
//! The first line holds the start vertex. After a blank line, the finish
//! vertices are listed one per line, until the next blank line. Every
//! remaining line is a transition, whose symbol is omitted for epsilon
//! transitions. Vertices are registered as they are mentioned.
//!
//! The fields of a transition are separated by a single space, and the symbol
//! is the rest of the line: `0 1  ` is a transition on the space character.
//! Line breaks (`\n` and `\r`) cannot be used as symbols.
//!
//! A vertex that is neither the start nor a finish, and without any incoming
//! or outgoing transition, is never mentioned in the document. It is lost
//! when the document is read back.
//!
//! Automata are always written in the same order (ascending vertices, then
//! symbols with epsilon first, then targets), so that two structurally
//! identical automata are written the same way.
use std::{
	collections::{BTreeMap, BTreeSet},
	fmt,
	str::FromStr,
};

use crate::{Automaton, ErrorKind, Labels, Symbol, Vertex, EPSILON};

/// Text format error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("missing start vertex")]
	MissingStart,

	#[error("line {line}: expected a blank line")]
	ExpectedBlankLine { line: usize },

	#[error("line {line}: expected {expected}, found {found} field(s)")]
	FieldCount {
		line: usize,
		expected: &'static str,
		found: usize,
	},

	#[error("line {line}: invalid vertex `{id}`")]
	InvalidVertex { line: usize, id: String },

	#[error("line {line}: invalid symbol `{symbol}`")]
	InvalidSymbol { line: usize, symbol: String },

	#[error("symbol {0:?} cannot be written")]
	UnwritableSymbol(char),

	#[error("label {0:?} cannot be written")]
	UnwritableLabel(String),
}

impl Error {
	pub fn kind(&self) -> ErrorKind {
		ErrorKind::MalformedInput
	}
}

fn single_field(line: usize, text: &str) -> Result<&str, Error> {
	let mut fields = text.split_whitespace();
	match (fields.next(), fields.next()) {
		(Some(id), None) => Ok(id),
		_ => Err(Error::FieldCount {
			line,
			expected: "a single vertex",
			found: text.split_whitespace().count(),
		}),
	}
}

fn parse_symbol(line: usize, text: &str) -> Result<Symbol, Error> {
	let mut chars = text.chars();
	match (chars.next(), chars.next()) {
		(Some(c), None) => Ok(Some(c)),
		_ => Err(Error::InvalidSymbol {
			line,
			symbol: text.to_owned(),
		}),
	}
}

/// Parses a document, using `vertex` to turn identifiers into vertices.
fn parse_with(
	input: &str,
	mut vertex: impl FnMut(usize, &str) -> Result<Vertex, Error>,
) -> Result<Automaton, Error> {
	let mut lines = input.lines().enumerate().map(|(i, text)| (i + 1, text));

	let (n, text) = lines.next().ok_or(Error::MissingStart)?;
	if text.trim().is_empty() {
		return Err(Error::MissingStart);
	}

	let start = vertex(n, single_field(n, text)?)?;
	let mut result = Automaton::new(start);

	match lines.next() {
		None => return Ok(result),
		Some((_, "")) => (),
		Some((line, _)) => return Err(Error::ExpectedBlankLine { line }),
	}

	loop {
		match lines.next() {
			None => return Ok(result),
			Some((_, "")) => break,
			Some((n, text)) => {
				let q = result.add_vertex(vertex(n, single_field(n, text)?)?);
				result.finishes_mut().insert(q);
			}
		}
	}

	for (n, text) in lines {
		if text.trim().is_empty() {
			continue;
		}

		let mut fields = text.splitn(3, ' ');
		let (source, target, symbol) = match (fields.next(), fields.next(), fields.next()) {
			(Some(source), Some(target), None) => (source, target, EPSILON),
			(Some(source), Some(target), Some(symbol)) => (source, target, parse_symbol(n, symbol)?),
			_ => {
				return Err(Error::FieldCount {
					line: n,
					expected: "`<source> <target>[ <symbol>]`",
					found: 1,
				})
			}
		};

		let source = result.add_vertex(vertex(n, source)?);
		let target = result.add_vertex(vertex(n, target)?);
		result.insert_transition(source, symbol, target);
	}

	Ok(result)
}

fn check_symbol(symbol: Symbol) -> Result<(), Error> {
	match symbol {
		Some(c @ ('\n' | '\r')) => Err(Error::UnwritableSymbol(c)),
		_ => Ok(()),
	}
}

fn check_label(label: &str) -> Result<(), Error> {
	if label.is_empty() || label.contains(char::is_whitespace) {
		Err(Error::UnwritableLabel(label.to_owned()))
	} else {
		Ok(())
	}
}

fn write_transition(
	f: &mut fmt::Formatter,
	source: impl fmt::Display,
	target: impl fmt::Display,
	symbol: Symbol,
) -> fmt::Result {
	match symbol {
		Some(c) => writeln!(f, "{source} {target} {c}"),
		None => writeln!(f, "{source} {target}"),
	}
}

impl Automaton {
	/// Writes the automaton in the text format.
	///
	/// Unlike [`ToString::to_string`], fails if a transition symbol cannot be
	/// written.
	pub fn to_text(&self) -> Result<String, Error> {
		for (_, symbol, _) in self.transitions() {
			check_symbol(symbol)?;
		}

		Ok(self.to_string())
	}
}

/// Writes the automaton in the text format.
///
/// Transitions on line breaks are written as is, giving a document that does
/// not read back to the same automaton. Use [`Automaton::to_text`] to detect
/// them.
impl fmt::Display for Automaton {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, "{}", self.start())?;
		writeln!(f)?;

		for q in self.finishes() {
			writeln!(f, "{q}")?;
		}

		writeln!(f)?;

		for (source, symbol, target) in self.transitions() {
			write_transition(f, source, target, symbol)?;
		}

		Ok(())
	}
}

impl FromStr for Automaton {
	type Err = Error;

	/// Parses a document whose vertices are non-negative integers.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_with(s, |line, id| {
			id.parse().map_err(|_| Error::InvalidVertex {
				line,
				id: id.to_owned(),
			})
		})
	}
}

/// Automaton whose vertices are named by string labels.
///
/// Every vertex of the automaton is expected to have a label. Unlabeled
/// vertices are written using their numeric identifier.
///
/// Two labelled automata are equal when they have the same structure up to
/// vertex labels, whatever identifiers the labels were interned to.
#[derive(Debug, Clone)]
pub struct Labelled {
	pub automaton: Automaton,
	pub labels: Labels,
}

impl Labelled {
	/// Creates a new automaton with a single (start) vertex.
	pub fn new(start: &str) -> Self {
		let mut labels = Labels::new();
		let q = labels.intern(start);
		Self {
			automaton: Automaton::new(q),
			labels,
		}
	}

	/// Returns the vertex with the given label, adding it if necessary.
	pub fn vertex(&mut self, label: &str) -> Vertex {
		let q = self.labels.intern(label);
		self.automaton.add_vertex(q)
	}

	/// Returns the name of the given vertex.
	pub fn name(&self, q: Vertex) -> String {
		match self.labels.label(q) {
			Some(label) => label.to_owned(),
			None => q.to_string(),
		}
	}

	/// Adds `other` to `self`: vertices with identical labels are the same
	/// vertex.
	///
	/// The start vertex of `other` is imported as a regular vertex.
	pub fn merge(&mut self, other: Labelled) {
		let mapping: BTreeMap<Vertex, Vertex> = other
			.automaton
			.vertices()
			.map(|q| (q, self.vertex(&other.name(q))))
			.collect();

		self.automaton
			.mapped_union(other.automaton, |q| mapping.get(&q).copied().unwrap_or(q))
	}

	/// Writes the automaton in the text format.
	///
	/// Fails if a transition symbol or a vertex label cannot be written.
	pub fn to_text(&self) -> Result<String, Error> {
		for q in self.automaton.vertices() {
			check_label(&self.name(q))?;
		}

		self.automaton.to_text()?;
		Ok(self.to_string())
	}

	fn names(&self, vertices: impl IntoIterator<Item = Vertex>) -> BTreeSet<String> {
		vertices.into_iter().map(|q| self.name(q)).collect()
	}

	/// Transitions, in label order.
	fn named_transitions(&self) -> BTreeSet<(String, Symbol, String)> {
		self.automaton
			.transitions()
			.map(|(source, symbol, target)| (self.name(source), symbol, self.name(target)))
			.collect()
	}
}

impl PartialEq for Labelled {
	fn eq(&self, other: &Self) -> bool {
		self.name(self.automaton.start()) == other.name(other.automaton.start())
			&& self.names(self.automaton.vertices()) == other.names(other.automaton.vertices())
			&& self.names(self.automaton.finishes().iter().copied())
				== other.names(other.automaton.finishes().iter().copied())
			&& self.named_transitions() == other.named_transitions()
	}
}

impl Eq for Labelled {}

impl fmt::Display for Labelled {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, "{}", self.name(self.automaton.start()))?;
		writeln!(f)?;

		for q in self.names(self.automaton.finishes().iter().copied()) {
			writeln!(f, "{q}")?;
		}

		writeln!(f)?;

		for (source, symbol, target) in self.named_transitions() {
			write_transition(f, source, target, symbol)?;
		}

		Ok(())
	}
}

impl FromStr for Labelled {
	type Err = Error;

	/// Parses a document whose vertices are arbitrary whitespace-free labels.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut labels = Labels::new();
		let automaton = parse_with(s, |_, id| Ok(labels.intern(id)))?;
		Ok(Self { automaton, labels })
	}
}
