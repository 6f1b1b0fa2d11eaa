//! This library turns regular expression syntax trees into finite automata
//! through the classical pipeline:
//!
//! 1. Thompson construction ([`BuildNfa`]), producing an automaton with
//!    epsilon transitions and a single finish vertex;
//! 2. epsilon elimination;
//! 3. subset construction, producing a deterministic automaton;
//! 4. completion, adding a sink vertex to make the transition function
//!    total.
//!
//! Parsing regular expressions is out of scope: the syntax tree ([`Ast`]) is
//! built directly.
//!
//! ```
//! use thompson::{Ast, Pipeline};
//!
//! // a(b|c)*
//! let ast = Ast::concat(
//! 	Ast::atom('a'),
//! 	Ast::star(Ast::alt(Ast::atom('b'), Ast::atom('c'))),
//! );
//!
//! let stages = Pipeline::new().run(&ast).unwrap();
//! assert!(stages.result().is_complete(&stages.result().alphabet()));
//! ```
pub use thompson_automata as automata;
pub use thompson_automata::{Error, ErrorKind};

mod ast;
pub use ast::*;

mod compile;
pub use compile::*;

mod pipeline;
pub use pipeline::*;
