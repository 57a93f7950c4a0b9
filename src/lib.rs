//! A normal-order (leftmost-outermost) reducer for the untyped lambda
//! calculus with De Bruijn indices, read and printed in a prefix notation:
//! `` ` `` applies the next two terms, `\` abstracts over the next term,
//! a digit run is a De Bruijn index and any other word is an opaque symbol.
//!
//! [`eval::run`] drives a program to a stuck term, printing each head form.
//! Embedders wanting a step budget can call [`eval::reduce`] in their own
//! loop instead.

pub mod ast;
pub mod eval;
pub mod lexer;
pub mod parser;
