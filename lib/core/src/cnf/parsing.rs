use std::io::BufRead;

use itertools::Itertools;
use log::{debug, warn};
use snafu::{ensure, OptionExt, ResultExt};

use crate::cnf::{Clause, Cnf};
use crate::error::*;
use crate::lit::Lit;

/// Parses a 2-CNF formula in (a subset of) DIMACS format.
///
/// Lines starting with `c` are comments, the `p` line supplies `<vars> <clauses>` as its
/// last two tokens, and a `%` line ends the clause section. Each remaining line is one clause,
/// optionally terminated by `0`. Only the first two literals of a longer clause are kept.
pub fn parse_cnf<R: BufRead>(reader: R) -> Result<Cnf> {
    let mut header: Option<(usize, usize)> = None;
    let mut clauses = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.context(ReadSnafu { line: line_no })?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        if line.starts_with('%') {
            debug!("Stopping at '%' on line {}", line_no);
            break;
        }
        if line.starts_with('p') {
            ensure!(header.is_none(), DuplicateHeaderSnafu { line: line_no });
            header = Some(parse_header(line, line_no)?);
            continue;
        }

        ensure!(header.is_some(), ClauseBeforeHeaderSnafu { line: line_no });
        clauses.push(parse_clause(line, line_no)?);
    }

    let (num_vars, num_clauses) = header.context(MissingHeaderSnafu)?;
    ensure!(
        clauses.len() == num_clauses,
        ClauseCountMismatchSnafu {
            declared: num_clauses,
            found: clauses.len(),
        }
    );

    let cnf = Cnf { num_vars, clauses };
    cnf.validate()?;
    debug!("Parsed CNF with {} vars and {} clauses", cnf.num_vars, cnf.num_clauses());
    Ok(cnf)
}

fn parse_header(line: &str, line_no: usize) -> Result<(usize, usize)> {
    let bad_header = || BadHeaderSnafu { line: line_no, text: line };
    let parts = line.split_whitespace().collect_vec();
    ensure!(parts.len() >= 3, bad_header());
    let num_vars = parts[parts.len() - 2].parse::<usize>().ok().with_context(bad_header)?;
    let num_clauses = parts[parts.len() - 1].parse::<usize>().ok().with_context(bad_header)?;
    Ok((num_vars, num_clauses))
}

fn parse_clause(line: &str, line_no: usize) -> Result<Clause> {
    let mut values = line
        .split_whitespace()
        .map(|token| token.parse::<i32>().context(ParseLiteralSnafu { line: line_no, token }))
        .collect::<Result<Vec<_>>>()?;
    if values.last() == Some(&0) {
        values.pop();
    }
    ensure!(!values.contains(&0), ZeroLiteralSnafu { line: line_no });

    let lits = values.into_iter().map(Lit::try_new).collect::<Result<Vec<_>>>()?;
    match *lits.as_slice() {
        [] => EmptyClauseSnafu { line: line_no }.fail(),
        [a] => Ok(Clause::unit(a)),
        [a, b] => Ok(Clause::new(a, b)),
        [a, b, ..] => {
            warn!("Clause on line {} has {} literals, keeping only ({}, {})", line_no, lits.len(), a, b);
            Ok(Clause::new(a, b))
        }
    }
}
