//! `kociemba_solver`: a two-phase Kociemba solver for the 3x3x3 Rubik's cube.
//!
//! Build [`solver::SolverTables`] once (constructing or loading the coordinate and
//! pruning tables), then call [`solver::solve`] for any number of scrambles.

/// Cubie-level cube representation and the eighteen face-turn operators.
pub mod cubie;

/// Named dimensions shared by the coordinate, move-table and pruning modules.
pub mod constants;

/// Error type shared by every fallible operation in this crate.
pub mod error;

/// Runtime tunables for table construction and the search deadline.
pub mod config;

/// Face-turn move symbols and the six coordinate move tables.
pub mod moves;

/// Breadth-first pruning tables used as admissible IDA* heuristics.
pub mod pruning;

/// The two-phase IDA* solver.
pub mod solver;

/// Parsing and rendering of move-string scrambles.
pub mod scramble;

use std::{fs, path::Path};

use bincode::{
    config::{self as bincode_config, Configuration},
    decode_from_slice, encode_to_vec,
    error::DecodeError,
    Decode, Encode,
};

use crate::error::Error;

const CONFIG: Configuration = bincode_config::standard();

fn write_table<P, T: Encode>(path: P, table: &T) -> Result<(), Error>
where
    P: AsRef<Path>,
{
    let encoded = encode_to_vec(table, CONFIG)?;
    fs::write(path, encoded)?;
    Ok(())
}

fn decode_table<T: Decode<()>>(bytes: &[u8]) -> Result<T, Error> {
    let (decoded, written) = decode_from_slice(bytes, CONFIG)?;
    let additional = bytes.len() - written;

    if additional != 0 {
        return Err(DecodeError::UnexpectedEnd { additional })?;
    }
    Ok(decoded)
}
