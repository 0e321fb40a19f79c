//! Error type shared by every fallible operation in this crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid move string: {0}")]
    Parse(String),

    #[error("illegal cube state: {0}")]
    IllegalCubeState(String),

    #[error("table cache I/O error: {0}")]
    TableIo(#[from] std::io::Error),

    #[error("table cache encode error: {0}")]
    TableEncode(#[from] bincode::error::EncodeError),

    #[error("table cache decode error: {0}")]
    TableDecode(#[from] bincode::error::DecodeError),

    #[error("internal invariant violation: {0}")]
    InternalInvariantViolation(String),
}
