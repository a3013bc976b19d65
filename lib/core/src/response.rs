use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SolveResponse {
    Sat,
    Unsat,
    Unknown,
}

impl SolveResponse {
    /// Process exit code in the SAT-competition convention.
    pub const fn exit_code(self) -> i32 {
        match self {
            SolveResponse::Sat => 10,
            SolveResponse::Unsat => 20,
            SolveResponse::Unknown => 0,
        }
    }
}

impl Display for SolveResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use SolveResponse::*;
        match self {
            Sat => write!(f, "SAT"),
            Unsat => write!(f, "UNSAT"),
            Unknown => write!(f, "UNKNOWN"),
        }
    }
}
