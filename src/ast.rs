use std::rc::Rc;

pub type TermRef = Rc<Term>;

/// A term of the untyped lambda calculus with De Bruijn indices.
///
/// After substitution the same node is reachable from several parents, so
/// terms form a shared DAG rather than a tree; `Rc` carries the ownership
/// count and frees a node the moment its last handle is dropped.
#[derive(PartialEq, Eq, Debug)]
pub enum Term {
    /// An opaque constant such as `x`; never evaluated.
    Symbol(String),
    /// A De Bruijn index: the number of binders to cross outward to reach
    /// the one this variable belongs to (0 = innermost).
    Reference(usize),
    /// `\t`
    Lambda(TermRef),
    /// `` `t t ``
    Apply(TermRef, TermRef),
}

impl Term {
    pub fn symbol(name: impl Into<String>) -> TermRef {
        Rc::new(Term::Symbol(name.into()))
    }

    pub fn reference(depth: usize) -> TermRef {
        Rc::new(Term::Reference(depth))
    }

    pub fn lambda(body: TermRef) -> TermRef {
        Rc::new(Term::Lambda(body))
    }

    pub fn apply(function: TermRef, argument: TermRef) -> TermRef {
        Rc::new(Term::Apply(function, argument))
    }
}

impl std::fmt::Display for Term {
    /// Prints the same prefix notation the parser reads: `` ` `` then the
    /// two operands of an application, `\` then a body, and each atom
    /// followed by a single space.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Term::*;
        match self {
            Apply(function, argument) => {
                f.write_str("`")?;
                function.fmt(f)?;
                argument.fmt(f)
            }
            Lambda(body) => {
                f.write_str("\\")?;
                body.fmt(f)
            }
            Reference(depth) => write!(f, "{depth} "),
            Symbol(name) => write!(f, "{name} "),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn prints_atoms_with_trailing_space() {
        assert_eq!(Term::symbol("x").to_string(), "x ");
        assert_eq!(Term::reference(12).to_string(), "12 ");
    }

    #[test]
    fn prints_prefix_notation() {
        assert_eq!(Term::lambda(Term::reference(0)).to_string(), "\\0 ");
        assert_eq!(
            Term::apply(Term::lambda(Term::reference(0)), Term::symbol("y")).to_string(),
            "`\\0 y "
        );
    }
}
