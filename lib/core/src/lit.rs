use std::fmt::{Display, Formatter};
use std::ops::Neg;

use crate::error::{Error, InvalidLitValueSnafu};
use crate::var::Var;

/// A DIMACS-style literal: a non-zero signed integer whose magnitude is the variable.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Lit(i32);

impl Lit {
    pub const fn new(val: i32) -> Self {
        debug_assert!(val != 0, "literal must not be zero");
        Lit(val)
    }

    pub const fn get(self) -> i32 {
        self.0
    }

    pub const fn var(self) -> Var {
        Var::new(self.0.unsigned_abs())
    }

    pub const fn is_negated(self) -> bool {
        self.0 < 0
    }

    /// Dense node index of this literal: `2 * (var - 1) + negated`.
    ///
    /// A literal and its negation always occupy the two adjacent slots `2k` and `2k + 1`,
    /// so `(-lit).node() == lit.node() ^ 1`.
    pub const fn node(self) -> usize {
        (self.var().index() << 1) | self.is_negated() as usize
    }

    /// Inverse of [`Lit::node`].
    pub const fn from_node(node: usize) -> Self {
        let var = (node >> 1) as i32 + 1;
        if node & 1 == 1 {
            Lit(-var)
        } else {
            Lit(var)
        }
    }
}

impl Display for Lit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl From<i32> for Lit {
    fn from(val: i32) -> Self {
        Self::new(val)
    }
}

impl<L> From<&L> for Lit
where
    L: Into<Lit> + Copy,
{
    fn from(val: &L) -> Self {
        (*val).into()
    }
}

impl From<Var> for Lit {
    fn from(var: Var) -> Self {
        Lit(var.get() as i32)
    }
}

// Into<i32>
impl From<Lit> for i32 {
    fn from(lit: Lit) -> Self {
        lit.get()
    }
}

// -Lit
impl Neg for Lit {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.0)
    }
}

impl Lit {
    /// Fallible counterpart of [`Lit::new`], rejecting `0` and `i32::MIN`.
    pub fn try_new(val: i32) -> Result<Self, Error> {
        if val == 0 || val == i32::MIN {
            return InvalidLitValueSnafu { value: val }.fail();
        }
        Ok(Lit(val))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lit_new() {
        let lit = Lit::new(42);
        assert_eq!(lit.get(), 42);
        assert_eq!(lit.var(), Var::new(42));
        assert!(!lit.is_negated());
    }

    #[test]
    fn test_lit_display() {
        assert_eq!(format!("{}", Lit::new(-5)), "-5");
    }

    #[test]
    fn test_lit_neg() {
        let lit = Lit::new(42);
        assert_eq!((-lit).get(), -42);
        assert!((-lit).is_negated());
        assert_eq!(-(-lit), lit);
    }

    #[test]
    fn test_lit_node_pairs() {
        assert_eq!(Lit::new(1).node(), 0);
        assert_eq!(Lit::new(-1).node(), 1);
        assert_eq!(Lit::new(2).node(), 2);
        assert_eq!(Lit::new(-2).node(), 3);
        for val in [1, -1, 7, -7, 1000, -1000] {
            let lit = Lit::new(val);
            assert_eq!((-lit).node(), lit.node() ^ 1);
            assert_eq!(Lit::from_node(lit.node()), lit);
        }
    }

    #[test]
    fn test_lit_try_new() {
        assert!(Lit::try_new(0).is_err());
        assert!(Lit::try_new(i32::MIN).is_err());
        assert_eq!(Lit::try_new(-3).unwrap(), Lit::new(-3));
    }
}
