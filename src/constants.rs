//! Named dimensions shared by the coordinate, move-table and pruning modules.

/// Number of possible corner twists (3^7): co\[7\] is determined by the others.
pub const N_TWIST: usize = 2187;
/// Number of possible edge flips (2^11): eo\[11\] is determined by the others.
pub const N_FLIP: usize = 2048;
/// Number of ways to choose the 4 positions of the E-slice edges among 12 (C(12,4)).
pub const N_SLICE: usize = 495;
/// Number of corner permutations (8!).
pub const N_CPERM: usize = 40320;
/// Number of UD-slice edge permutations in G1 (8!).
pub const N_EPERM_UD: usize = 40320;
/// Number of E-slice edge permutations in G1 (4!).
pub const N_EPERM_E: usize = 24;
/// Number of face turns (6 faces * 3 variants).
pub const N_MOVE: usize = 18;

/// Default maximum phase-1 IDA* bound.
pub const DEFAULT_P1_MAX_BOUND: usize = 12;
/// Default maximum phase-2 IDA* bound.
pub const DEFAULT_P2_MAX_BOUND: usize = 18;
/// Default wall-clock solving budget, in seconds.
pub const DEFAULT_DEADLINE_SECS: f64 = 2.8;
/// Default directory for cached move/pruning tables.
pub const DEFAULT_TABLE_DIR: &str = "tables";

/// G1 generators (U, U2, U', R2, F2, D, D2, D', L2, B2), in canonical move order.
pub const P2_MOVES: [usize; 10] = [0, 1, 2, 4, 7, 9, 10, 11, 13, 16];

/// The 8 corner position labels, in the order used throughout this crate.
#[rustfmt::skip]
pub const ALL_CORNERS: [&str; 8] = ["URF", "UFL", "ULB", "UBR", "DFR", "DLF", "DBL", "DRB"];

/// The 12 edge position labels, in the order used throughout this crate.
#[rustfmt::skip]
pub const ALL_EDGES: [&str; 12] = [
    "UR", "UF", "UL", "UB", "DR", "DF", "DL", "DB", "FR", "FL", "BL", "BR",
];
