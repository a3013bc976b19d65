use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use snafu::Snafu;

use crate::lit::Lit;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Could not open '{}': {}", path.display(), source))]
    Open { path: PathBuf, source: io::Error },

    #[snafu(display("Could not read line {}: {}", line, source))]
    Read { line: usize, source: io::Error },

    #[snafu(display("Expected a file with '.cnf' extension, got '{}'", path.display()))]
    WrongExtension { path: PathBuf },

    #[snafu(display("Missing 'p cnf <vars> <clauses>' header"))]
    MissingHeader,

    #[snafu(display("Clause on line {} precedes the 'p' header", line))]
    ClauseBeforeHeader { line: usize },

    #[snafu(display("Malformed header on line {}: '{}'", line, text))]
    BadHeader { line: usize, text: String },

    #[snafu(display("Duplicate header on line {}", line))]
    DuplicateHeader { line: usize },

    #[snafu(display("Could not parse literal '{}' on line {}: {}", token, line, source))]
    ParseLiteral { line: usize, token: String, source: ParseIntError },

    #[snafu(display("Zero literal inside the clause on line {}", line))]
    ZeroLiteral { line: usize },

    #[snafu(display("Empty clause on line {}", line))]
    EmptyClause { line: usize },

    #[snafu(display("Header declares {} clauses, but {} were found", declared, found))]
    ClauseCountMismatch { declared: usize, found: usize },

    #[snafu(display("Literal {} is out of range for {} variables", lit, num_vars))]
    LiteralOutOfRange { lit: Lit, num_vars: usize },

    #[snafu(display("Invalid literal value: {}", value))]
    InvalidLitValue { value: i32 },
}
