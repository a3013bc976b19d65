use std::io::{self, Write};

use itertools::Itertools;

use twosat::Solution;

/// Writes the verdict line and, for satisfiable formulas, the `v` line of `1`/`0` tokens.
pub fn write_solution(writer: &mut impl Write, solution: &Solution) -> io::Result<()> {
    let verdict = match solution {
        Solution::Sat { .. } => "SATISFIABLE",
        Solution::Unsat => "UNSATISFIABLE",
        Solution::Unknown => "UNKNOWN",
    };
    writeln!(writer, "s {}", verdict)?;

    if let Solution::Sat { model } = solution {
        let tokens = model.iter().map(|&x| if x { "1" } else { "0" }).join(" ");
        if tokens.is_empty() {
            writeln!(writer, "v")?;
        } else {
            writeln!(writer, "v {}", tokens)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use twosat_nexus_core::model::Model;

    use super::*;

    fn render(solution: &Solution) -> String {
        let mut out = Vec::new();
        write_solution(&mut out, solution).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_sat() {
        let solution = Solution::Sat {
            model: Model::new(vec![true, false, true]),
        };
        assert_eq!(render(&solution), "s SATISFIABLE\nv 1 0 1\n");
    }

    #[test]
    fn test_trivial() {
        let solution = Solution::Sat { model: Model::all_false(0) };
        assert_eq!(render(&solution), "s SATISFIABLE\nv\n");
    }

    #[test]
    fn test_unsat() {
        assert_eq!(render(&Solution::Unsat), "s UNSATISFIABLE\n");
        assert_eq!(render(&Solution::Unknown), "s UNKNOWN\n");
    }
}
