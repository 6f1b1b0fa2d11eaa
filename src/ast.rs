use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::automata::{Symbol, EPSILON};

/// Regular expression abstract syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Ast {
	/// Single symbol, or the empty word if the symbol is [`EPSILON`].
	Atom(Symbol),

	/// `left` followed by `right`.
	Concatenation(Box<Self>, Box<Self>),

	/// `left` or `right`.
	Alternation(Box<Self>, Box<Self>),

	/// Kleene closure.
	KleeneStar(Box<Self>),
}

impl Ast {
	pub fn atom(c: char) -> Self {
		Self::Atom(Some(c))
	}

	/// Expression matching only the empty word.
	pub fn epsilon() -> Self {
		Self::Atom(EPSILON)
	}

	pub fn concat(left: Self, right: Self) -> Self {
		Self::Concatenation(Box::new(left), Box::new(right))
	}

	pub fn alt(left: Self, right: Self) -> Self {
		Self::Alternation(Box::new(left), Box::new(right))
	}

	pub fn star(inner: Self) -> Self {
		Self::KleeneStar(Box::new(inner))
	}

	/// Left-nested concatenation of the given expressions.
	///
	/// Returns `None` if the iterator is empty.
	pub fn concat_all(items: impl IntoIterator<Item = Self>) -> Option<Self> {
		items.into_iter().reduce(Self::concat)
	}

	/// Left-nested alternation of the given expressions.
	///
	/// Returns `None` if the iterator is empty.
	pub fn alt_all(items: impl IntoIterator<Item = Self>) -> Option<Self> {
		items.into_iter().reduce(Self::alt)
	}

	/// Concatenation of the characters of `s`.
	///
	/// The empty string gives [`Ast::epsilon`].
	pub fn word(s: &str) -> Self {
		Self::concat_all(s.chars().map(Self::atom)).unwrap_or_else(Self::epsilon)
	}

	/// Returns the number of nodes in the tree.
	pub fn size(&self) -> usize {
		match self {
			Self::Atom(_) => 1,
			Self::Concatenation(l, r) | Self::Alternation(l, r) => 1 + l.size() + r.size(),
			Self::KleeneStar(e) => 1 + e.size(),
		}
	}

	/// Display this regular expression as a sub expression.
	///
	/// This will enclose it between parenthesis if necessary.
	pub fn display_sub(&self, parent: Precedence) -> DisplaySub<'_> {
		DisplaySub(self, parent)
	}

	fn precedence(&self) -> Precedence {
		match self {
			Self::Atom(_) | Self::KleeneStar(_) => Precedence::Atom,
			Self::Concatenation(_, _) => Precedence::Concatenation,
			Self::Alternation(_, _) => Precedence::Alternation,
		}
	}
}

/// Operator binding strength, from loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Alternation,
	Concatenation,
	Atom,
}

impl fmt::Display for Ast {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Atom(Some(c)) => fmt_char(*c, f),
			Self::Atom(None) => write!(f, "ε"),
			Self::Concatenation(l, r) => write!(
				f,
				"{}{}",
				l.display_sub(Precedence::Concatenation),
				r.display_sub(Precedence::Atom)
			),
			Self::Alternation(l, r) => write!(
				f,
				"{}|{}",
				l.display_sub(Precedence::Alternation),
				r.display_sub(Precedence::Concatenation)
			),
			Self::KleeneStar(e) => write!(f, "{}*", e.display_sub(Precedence::Atom)),
		}
	}
}

/// Display the inner regular expression as a sub expression.
///
/// This will enclose it between parenthesis if necessary.
pub struct DisplaySub<'a>(&'a Ast, Precedence);

impl<'a> fmt::Display for DisplaySub<'a> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if self.0.precedence() >= self.1 {
			self.0.fmt(f)
		} else {
			write!(f, "({})", self.0)
		}
	}
}

fn fmt_char(c: char, f: &mut fmt::Formatter) -> fmt::Result {
	match c {
		'(' | ')' | '*' | '|' | '\\' | 'ε' => write!(f, "\\{c}"),
		'\t' => write!(f, "\\t"),
		'\n' => write!(f, "\\n"),
		'\r' => write!(f, "\\r"),
		_ => fmt::Display::fmt(&c, f),
	}
}
