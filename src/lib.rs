//! # minic
//!
//! Front end for the MiniC language: a lexer and a recursive descent
//! parser producing a visitor-traversable syntax tree.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST → Visitor consumers
//! ```
//!
//! 1. [`parser::lexer`] — tokenises source text with maximal-munch
//!    scanning; comments are elided, the stream ends with `Eof`.
//! 2. [`parser::parse`] — recursive descent with precedence climbing,
//!    aborting on the first grammar violation.
//! 3. [`parser::ast`] / [`parser::visit`] — the tree model and the
//!    one-method-per-node-kind traversal contract.
//! 4. [`printer`] — a compact debug rendering of parsed trees, built purely
//!    on the visitor contract.
//!
//! Lexing and parsing are sequential and synchronous; the only shared state
//! is the read-only lexical tables in [`parser::token`].

pub mod parser;
pub mod printer;
