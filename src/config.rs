//! Runtime tunables for table construction and the search deadline.

use std::path::PathBuf;
use std::time::Duration;

use log::warn;

use crate::constants::{DEFAULT_DEADLINE_SECS, DEFAULT_P1_MAX_BOUND, DEFAULT_P2_MAX_BOUND, DEFAULT_TABLE_DIR};

/// Tunables collected in one place instead of scattered through the search code.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub p1_max_bound: usize,
    pub p2_max_bound: usize,
    pub deadline: Duration,
    pub table_dir: PathBuf,
    pub persist_tables: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            p1_max_bound: DEFAULT_P1_MAX_BOUND,
            p2_max_bound: DEFAULT_P2_MAX_BOUND,
            deadline: Duration::from_secs_f64(DEFAULT_DEADLINE_SECS),
            table_dir: PathBuf::from(DEFAULT_TABLE_DIR),
            persist_tables: true,
        }
    }
}

impl SolverConfig {
    /// Overlays `KOCIEMBA_*` environment variables on top of the defaults. A variable
    /// that fails to parse is logged and ignored rather than treated as fatal.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Some(v) = parse_env("KOCIEMBA_P1_MAX_BOUND") {
            cfg.p1_max_bound = v;
        }
        if let Some(v) = parse_env("KOCIEMBA_P2_MAX_BOUND") {
            cfg.p2_max_bound = v;
        }
        if let Ok(raw) = std::env::var("KOCIEMBA_DEADLINE_SECS") {
            match raw.parse::<f64>() {
                Ok(secs) if secs > 0.0 => cfg.deadline = Duration::from_secs_f64(secs),
                _ => warn!("ignoring invalid KOCIEMBA_DEADLINE_SECS={raw:?}"),
            }
        }
        if let Ok(dir) = std::env::var("KOCIEMBA_TABLE_DIR") {
            cfg.table_dir = PathBuf::from(dir);
        }
        if let Ok(raw) = std::env::var("KOCIEMBA_PERSIST_TABLES") {
            match raw.parse::<bool>() {
                Ok(v) => cfg.persist_tables = v,
                Err(_) => warn!("ignoring invalid KOCIEMBA_PERSIST_TABLES={raw:?}"),
            }
        }
        cfg
    }
}

fn parse_env(key: &str) -> Option<usize> {
    match std::env::var(key) {
        Ok(raw) => match raw.parse::<usize>() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!("ignoring invalid {key}={raw:?}");
                None
            }
        },
        Err(_) => None,
    }
}
