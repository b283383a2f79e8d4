use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use lunar_lockout::{check_symmetry_group, parse_problems, solve, survey, RobotRange};

#[derive(Parser)]
#[command(name = "lunar-lockout")]
#[command(about = "Exhaustive solver for the Lunar Lockout sliding puzzle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve every position for a range of robot counts and list the hardest
    Survey {
        /// Smallest robot count
        #[arg(long, default_value = "0")]
        min: usize,

        /// Largest robot count (at most 24)
        #[arg(long, default_value = "3")]
        max: usize,
    },

    /// Solve the problems in a puzzle file
    Solve {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    check_symmetry_group()?;

    match cli.command {
        Commands::Survey { min, max } => {
            let range = RobotRange::new(min, max)?;
            for report in survey(&range) {
                println!("{}", report);
            }
        }
        Commands::Solve { file } => {
            let input = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let problems =
                parse_problems(&input).with_context(|| format!("in {}", file.display()))?;

            for problem in problems {
                println!("----");
                println!("problem {} ({}):", problem.number, problem.level);
                println!("{}", problem.board);

                match solve(&problem.board) {
                    Some(moves) => println!("problem: {} nmoves: {}", problem.number, moves),
                    None => println!("problem: {} nmoves: unsolvable", problem.number),
                }
            }
        }
    }

    Ok(())
}
