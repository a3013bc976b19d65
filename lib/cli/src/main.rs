use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use color_eyre::eyre::bail;
use elapsed::measure_time;
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use twosat::walk::{Options, DEFAULT_OPTIONS};
use twosat::Algorithm;
use twosat_nexus_core::cnf::{write_dimacs, Cnf};

mod output;

// Run this binary:
// cargo run -p twosat-nexus-cli -- data/formula.cnf --algorithm kosaraju

#[derive(Parser, Debug)]
#[command(author, version)]
struct Cli {
    /// Input file with a 2-CNF formula in DIMACS format.
    #[arg(value_name = "CNF")]
    path_cnf: PathBuf,

    /// Solving algorithm: 'kosaraju' (complete) or 'walk' (randomized, may give up).
    #[arg(short, long, value_name = "NAME", default_value_t = Algorithm::Kosaraju)]
    algorithm: Algorithm,

    /// Random seed for the random walk.
    #[arg(long, value_name = "INT", default_value_t = DEFAULT_OPTIONS.seed)]
    seed: u64,

    /// Flip budget for the random walk [default: 2n^2].
    #[arg(long, value_name = "INT")]
    max_flips: Option<usize>,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,

    /// Print the parsed formula in DIMACS format before solving.
    #[arg(long)]
    dump: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();

    let level = match LevelFilter::from_str(&args.log_level) {
        Ok(level) => level,
        Err(_) => bail!("Bad log level '{}'", args.log_level),
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
    info!("args = {:?}", args);

    let code = run(&args)?;
    std::process::exit(code)
}

fn run(args: &Cli) -> color_eyre::Result<i32> {
    let cnf = Cnf::from_file(&args.path_cnf)?;
    info!("cnf.num_vars = {}", cnf.num_vars);
    info!("cnf.num_clauses = {}", cnf.num_clauses());

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    if args.dump {
        write_dimacs(&mut writer, &cnf)?;
    }

    let options = Options {
        seed: args.seed,
        max_flips: args.max_flips,
    };
    let mut solver = args.algorithm.solver(options);

    info!("Solving with {}...", solver.name());
    let (elapsed, solution) = measure_time(|| solver.solve(&cnf));
    let solution = solution?;
    info!("{} in {}", solution.response(), elapsed);

    output::write_solution(&mut writer, &solution)?;
    writer.flush()?;
    Ok(solution.response().exit_code())
}
