//! Graphviz DOT rendering, for debugging.
use std::fmt;

use crate::{Automaton, Labelled, Symbol, Vertex};

pub trait DotDisplay {
	fn dot(&self) -> DotDisplayed<Self> {
		DotDisplayed(self)
	}

	fn dot_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result;
}

pub struct DotDisplayed<'a, T: ?Sized>(pub &'a T);

impl<'a, T: ?Sized + DotDisplay> fmt::Display for DotDisplayed<'a, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.dot_fmt(f)
	}
}

struct DotLabel(Symbol);

impl fmt::Display for DotLabel {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self.0 {
			Some('"') => f.write_str("\\\""),
			Some('\\') => f.write_str("\\\\"),
			Some(c) if c.is_ascii_graphic() => fmt::Display::fmt(&c, f),
			Some(c) => write!(f, "\\\\u{{{:x}}}", c as u32),
			None => f.write_str("ε"),
		}
	}
}

fn write_graph(
	aut: &Automaton,
	f: &mut fmt::Formatter,
	name: impl Fn(Vertex) -> String,
) -> fmt::Result {
	writeln!(f, "digraph {{")?;
	writeln!(f, "\tstart [shape = point]")?;

	for q in aut.vertices() {
		let shape = if aut.is_finish(q) {
			"doublecircle"
		} else {
			"circle"
		};

		writeln!(f, "\tq{q} [label = \"{}\", shape = {shape}]", name(q))?;
	}

	writeln!(f, "\tstart -> q{}", aut.start())?;

	for (source, symbol, target) in aut.transitions() {
		writeln!(
			f,
			"\tq{source} -> q{target} [label = \"{}\"]",
			DotLabel(symbol)
		)?;
	}

	write!(f, "}}")
}

impl DotDisplay for Automaton {
	fn dot_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write_graph(self, f, |q| q.to_string())
	}
}

impl DotDisplay for Labelled {
	fn dot_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write_graph(&self.automaton, f, |q| {
			self.name(q).replace('\\', "\\\\").replace('"', "\\\"")
		})
	}
}
