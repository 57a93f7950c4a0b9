use std::io::{self, Write};
use std::rc::Rc;

use crate::ast::{Term, TermRef};

/// Substitutes `arg` for every reference to binder depth `level` in `expr`.
///
/// Apply and Lambda nodes on the path to a substitution site are rebuilt
/// (crossing a Lambda bumps `level` by one); every leaf is shared with the
/// input term, never copied. In particular the argument itself is aliased
/// wholesale at each site, which is what makes the result a DAG.
///
/// References above `level` are left as they are: nothing in `arg` or
/// `expr` is renumbered for the binders it ends up under. That is only
/// sound when `arg` is closed, which the surrounding reduction strategy is
/// expected to guarantee.
pub fn rewrite(expr: &TermRef, arg: &TermRef, level: usize) -> TermRef {
    use Term::*;
    match expr.as_ref() {
        Apply(function, argument) => {
            Term::apply(rewrite(function, arg, level), rewrite(argument, arg, level))
        }
        Lambda(body) => Term::lambda(rewrite(body, arg, level + 1)),
        Reference(depth) if *depth == level => Rc::clone(arg),
        Reference(_) | Symbol(_) => Rc::clone(expr),
    }
}

/// Attempts one leftmost-outermost beta step on `` `function argument ``.
///
/// Walks down the chain of left-nested applications until the function
/// position is a Lambda, fires that redex, and rebuilds the applications
/// above it (sharing their arguments). Returns `None` when the spine
/// bottoms out in a Symbol or Reference, in which case nothing changed.
fn reduce_apply(function: &TermRef, argument: &TermRef) -> Option<TermRef> {
    use Term::*;
    match function.as_ref() {
        Lambda(body) => Some(rewrite(body, argument, 0)),
        Apply(inner_function, inner_argument) => {
            let inner = reduce_apply(inner_function, inner_argument)?;
            Some(Term::apply(inner, Rc::clone(argument)))
        }
        Symbol(_) | Reference(_) => None,
    }
}

/// One weak-head reduction step, or `None` if the term is stuck.
pub fn reduce(term: &TermRef) -> Option<TermRef> {
    match term.as_ref() {
        Term::Apply(function, argument) => reduce_apply(function, argument),
        _ => None,
    }
}

/// Runs `program` to a stuck term, writing every head form on its own line:
/// the initial term first, then one line per step. Does not return on
/// non-terminating programs.
pub fn run(program: TermRef, out: &mut impl Write) -> io::Result<()> {
    let mut head = program;
    writeln!(out, "{head}")?;
    while let Some(next) = reduce(&head) {
        head = next;
        writeln!(out, "{head}")?;
    }
    Ok(())
}
