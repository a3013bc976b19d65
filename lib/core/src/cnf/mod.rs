use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;
use std::slice::Iter;
use std::str::FromStr;

use itertools::Itertools;
use snafu::{ensure, ResultExt};

use crate::error::{Error, LiteralOutOfRangeSnafu, OpenSnafu, Result, WrongExtensionSnafu};
use crate::lit::Lit;
use crate::utils::get_extension;

pub use clause::Clause;
pub use parsing::parse_cnf;

pub mod clause;
mod parsing;

/// A 2-CNF formula over variables `1..=num_vars`.
#[derive(Debug, Clone)]
pub struct Cnf {
    pub num_vars: usize,
    pub clauses: Vec<Clause>,
}

impl Cnf {
    pub fn iter(&self) -> Iter<'_, Clause> {
        self.clauses.iter()
    }
}

impl Cnf {
    pub fn new(num_vars: usize) -> Self {
        Self {
            num_vars,
            clauses: Vec::new(),
        }
    }

    pub fn from_clauses<I>(num_vars: usize, clauses: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Clause>,
    {
        let mut cnf = Self::new(num_vars);
        for clause in clauses {
            cnf.add_clause(clause);
        }
        cnf
    }

    /// Reads a formula from a `.cnf` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        ensure!(
            get_extension(path) == Some("cnf"),
            WrongExtensionSnafu { path: path.to_path_buf() }
        );
        let file = File::open(path).context(OpenSnafu { path: path.to_path_buf() })?;
        parse_cnf(BufReader::new(file))
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn add_clause(&mut self, clause: impl Into<Clause>) {
        self.clauses.push(clause.into());
    }

    /// Checks that every literal refers to a variable in `1..=num_vars`.
    pub fn validate(&self) -> Result<()> {
        for lit in self.iter().flat_map(Clause::lits) {
            ensure!(
                lit.get() != 0 && (lit.var().get() as usize) <= self.num_vars,
                LiteralOutOfRangeSnafu {
                    lit,
                    num_vars: self.num_vars,
                }
            );
        }
        Ok(())
    }
}

impl FromStr for Cnf {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_cnf(s.as_bytes())
    }
}

impl Display for Cnf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for clause in self.clauses.iter() {
            list.entry(&format_args!("{}", clause));
        }
        list.finish()
    }
}

/// Writes `cnf` in DIMACS format. Unit clauses are written with a single literal.
pub fn write_dimacs(writer: &mut impl Write, cnf: &Cnf) -> io::Result<()> {
    writeln!(writer, "p cnf {} {}", cnf.num_vars, cnf.num_clauses())?;
    for clause in cnf.iter() {
        if clause.is_unit() {
            writeln!(writer, "{} 0", clause.a)?;
        } else {
            writeln!(writer, "{} {} 0", clause.a, clause.b)?;
        }
    }
    Ok(())
}

impl Cnf {
    /// All distinct literals mentioned by the formula, in order of first occurrence.
    pub fn lits(&self) -> impl Iterator<Item = Lit> + '_ {
        self.iter().flat_map(Clause::lits).unique()
    }
}
