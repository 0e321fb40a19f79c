use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;

use kociemba_solver::config::SolverConfig;
use kociemba_solver::cubie::CubieCube;
use kociemba_solver::scramble::{scramble_from_str, scramble_to_str};
use kociemba_solver::solver::{solve, SolverTables};

/// Solve a scrambled 3x3x3 Rubik's cube with Kociemba's two-phase algorithm.
#[derive(Parser)]
#[command(name = "solver")]
struct Args {
    /// Process multiple inputs, one per line, until EOF or a line equal to "QUIT".
    #[arg(short, long)]
    continuous: bool,

    /// A sequence of moves to solve (e.g. "U R U' L' D2 F B'"). Read from stdin if omitted.
    scramble: Option<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = SolverConfig::from_env();
    let tables = match SolverTables::build(&config) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("failed to build solver tables: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut next_entry = args.scramble.clone();
    let mut ok = true;

    loop {
        let entry = match next_entry.take() {
            Some(e) => e,
            None => match lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    eprintln!("error reading stdin: {e}");
                    ok = false;
                    break;
                }
                None => break,
            },
        };

        if entry == "QUIT" {
            break;
        }

        match scramble_from_str(&entry) {
            Ok(moves) => {
                let mut cube = CubieCube::solved();
                for m in &moves {
                    cube.apply_move(*m as usize);
                }
                match solve(&tables, &config, &cube) {
                    Ok(solution) if solution.is_empty() => println!("SOLVED"),
                    Ok(solution) => println!("{}", scramble_to_str(&solution)),
                    Err(e) => {
                        eprintln!("solve error: {e}");
                        ok = false;
                        if !args.continuous {
                            break;
                        }
                    }
                }
            }
            Err(e) => {
                eprintln!("{e}");
                ok = false;
                if !args.continuous {
                    break;
                }
            }
        }
        io::stdout().flush().ok();

        if !args.continuous {
            break;
        }
    }

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
