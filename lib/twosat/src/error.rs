use snafu::{ensure, Snafu};

use twosat_nexus_core::lit::Lit;

pub type Result<T, E = SolveError> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SolveError {
    #[snafu(display("Literal must be non-zero"))]
    ZeroLiteral,

    #[snafu(display("Literal {} is out of range for {} variables", lit, num_vars))]
    LiteralOutOfRange { lit: Lit, num_vars: usize },

    #[snafu(display("Unknown algorithm '{}', expected 'kosaraju' or 'walk'", name))]
    UnknownAlgorithm { name: String },
}

/// Rejects literals outside of `±1..=±num_vars`.
pub(crate) fn check_lit(lit: Lit, num_vars: usize) -> Result<()> {
    ensure!(lit.get() != 0, ZeroLiteralSnafu);
    ensure!(
        lit.var().get() as usize <= num_vars,
        LiteralOutOfRangeSnafu { lit, num_vars }
    );
    Ok(())
}
