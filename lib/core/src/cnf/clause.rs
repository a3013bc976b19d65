use std::fmt::{Display, Formatter};

use crate::lit::Lit;
use crate::model::Model;

/// A binary clause `a ∨ b`. Unit clauses are stored as `(a, a)`.
#[derive(Debug, Copy, Clone)]
pub struct Clause {
    pub a: Lit,
    pub b: Lit,
}

impl Clause {
    pub fn new(a: impl Into<Lit>, b: impl Into<Lit>) -> Self {
        Clause { a: a.into(), b: b.into() }
    }

    pub fn unit(a: impl Into<Lit>) -> Self {
        let a = a.into();
        Clause { a, b: a }
    }

    pub fn is_unit(&self) -> bool {
        self.a == self.b
    }

    pub fn lits(&self) -> [Lit; 2] {
        [self.a, self.b]
    }

    pub fn eval(&self, model: &Model) -> bool {
        model.eval(self.a) || model.eval(self.b)
    }
}

impl From<(i32, i32)> for Clause {
    fn from((a, b): (i32, i32)) -> Self {
        Self::new(a, b)
    }
}

impl From<[i32; 2]> for Clause {
    fn from([a, b]: [i32; 2]) -> Self {
        Self::new(a, b)
    }
}

impl From<i32> for Clause {
    fn from(a: i32) -> Self {
        Self::unit(a)
    }
}

impl From<Lit> for Clause {
    fn from(a: Lit) -> Self {
        Self::unit(a)
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        list.entry(&format_args!("{}", self.a));
        if !self.is_unit() {
            list.entry(&format_args!("{}", self.b));
        }
        list.finish()
    }
}

// Clauses are unordered pairs.
impl PartialEq for Clause {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl Eq for Clause {}
