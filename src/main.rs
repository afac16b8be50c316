use std::{error::Error, path::PathBuf};

use allpairs::{Algorithm, ConfigBuilder};
use clap::Parser;
use colored::Colorize;

////////////////////////////////////////////////////////////////////////////////

#[derive(Parser)]
#[command(
    name = "allpairs",
    about = "Calculate the shortest path between all pairs of vertices in a graph",
    version
)]
struct Cli {
    /// Algorithm to run: (a)ll, (b)ellman-ford only or (f)loyd-warshall only
    #[arg(long, default_value = "a")]
    algorithm: Algorithm,

    /// Print the run log
    #[arg(short, long)]
    verbose: bool,

    /// Print time spent in every phase
    #[arg(long)]
    profile: bool,

    /// Output file, `<filename>_shortestPaths.txt` by default
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write run report as JSON
    #[arg(long)]
    report: Option<PathBuf>,

    /// Input file containing graph
    #[arg(value_name = "FILENAME")]
    filename: PathBuf,
}

////////////////////////////////////////////////////////////////////////////////

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{}", err.to_string().red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = ConfigBuilder::new(cli.filename).algorithm(cli.algorithm);
    if let Some(output) = cli.output {
        config = config.output(output);
    }
    let config = config.build();

    let report = allpairs::run(&config)?;

    if report.runs.len() > 1 {
        println!("running both");
    }

    if cli.verbose {
        print!("{}", report.log);
    } else {
        report
            .log
            .iter()
            .filter(|e| e.is_notable())
            .for_each(|e| println!("{e}"));
    }

    if let [single] = report.runs.as_slice() {
        println!("Runtime: {}", single.elapsed.as_secs_f64());
    }

    if cli.profile {
        print!("{}", report.profile());
    }

    if let Some(path) = cli.report {
        report.write_json(path)?;
    }

    Ok(())
}
