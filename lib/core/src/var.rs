use std::fmt::{Display, Formatter};

/// A 1-based boolean variable.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Var(u32);

impl Var {
    pub const fn new(var: u32) -> Self {
        debug_assert!(var != 0, "variables are 1-based");
        Var(var)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// 0-based index, suitable for indexing per-variable vectors.
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    pub const fn from_index(index: usize) -> Self {
        Var(index as u32 + 1)
    }
}

impl Display for Var {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.0)
    }
}

impl From<u32> for Var {
    fn from(val: u32) -> Self {
        Self::new(val)
    }
}
