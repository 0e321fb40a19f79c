//! Face-turn move symbols and the six coordinate move tables.

use std::{fmt, str::FromStr};

use log::{debug, info};

use self::Move::*;
use crate::constants::*;
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::{decode_table, write_table};

/// The eighteen face turns, grouped three-per-face in canonical order
/// (clockwise, double, counter-clockwise). `Move as usize / 3` is the face index
/// used throughout the crate for same-face pruning.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Move {
    U, U2, U3,
    R, R2, R3,
    F, F2, F3,
    D, D2, D3,
    L, L2, L3,
    B, B2, B3,
}

impl Move {
    pub const ALL: [Move; 18] = [U, U2, U3, R, R2, R3, F, F2, F3, D, D2, D3, L, L2, L3, B, B2, B3];

    pub fn face(self) -> usize {
        self as usize / 3
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            U3 => write!(f, "U'"),
            D3 => write!(f, "D'"),
            R3 => write!(f, "R'"),
            L3 => write!(f, "L'"),
            F3 => write!(f, "F'"),
            B3 => write!(f, "B'"),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(U), "U2" => Ok(U2), "U'" => Ok(U3),
            "R" => Ok(R), "R2" => Ok(R2), "R'" => Ok(R3),
            "F" => Ok(F), "F2" => Ok(F2), "F'" => Ok(F3),
            "D" => Ok(D), "D2" => Ok(D2), "D'" => Ok(D3),
            "L" => Ok(L), "L2" => Ok(L2), "L'" => Ok(L3),
            "B" => Ok(B), "B2" => Ok(B2), "B'" => Ok(B3),
            other => Err(Error::Parse(format!("invalid move: {other}"))),
        }
    }
}

/// The six 2-D coordinate move tables, indexed `table[coord][move]`.
pub struct MoveTables {
    pub twist_move: Vec<u16>,
    pub flip_move: Vec<u16>,
    pub slice_move: Vec<u16>,
    pub cperm_move: Vec<u16>,
    pub eperm_ud_move: Vec<u16>,
    pub eperm_e_move: Vec<u8>,
}

impl MoveTables {
    pub fn load(table_dir: &std::path::Path, persist: bool) -> Result<Self, Error> {
        Ok(Self {
            twist_move: build_move_table(table_dir, persist, "move_twist", N_TWIST, |c| c.twist() as usize, CubieCube::from_twist)?,
            flip_move: build_move_table(table_dir, persist, "move_flip", N_FLIP, |c| c.flip() as usize, CubieCube::from_flip)?,
            slice_move: build_move_table(table_dir, persist, "move_slice", N_SLICE, |c| c.slice() as usize, CubieCube::from_slice)?,
            cperm_move: build_move_table(table_dir, persist, "move_cperm", N_CPERM, |c| c.cperm() as usize, CubieCube::from_cperm)?,
            eperm_ud_move: build_move_table(table_dir, persist, "move_eperm_ud", N_EPERM_UD, |c| c.eperm_ud() as usize, CubieCube::from_eperm_ud)?,
            eperm_e_move: build_move_table_u8(table_dir, persist, "move_eperm_e", N_EPERM_E, |c| c.eperm_e() as usize, CubieCube::from_eperm_e)?,
        })
    }
}

/// Builds a `size x N_MOVE` move table for a `u16`-sized coordinate: for every
/// coordinate value, decode to a representative cube, apply each move, and
/// re-encode. Loads from (or saves to) the on-disk cache when enabled.
fn build_move_table<D>(
    table_dir: &std::path::Path,
    persist: bool,
    name: &str,
    size: usize,
    encode: impl Fn(&CubieCube) -> usize,
    decode: D,
) -> Result<Vec<u16>, Error>
where
    D: Fn(u16) -> CubieCube,
{
    let path = table_dir.join(name);
    if persist {
        if let Ok(bytes) = std::fs::read(&path) {
            debug!("loaded {name} from cache");
            return decode_table(&bytes);
        }
    }
    let start = std::time::Instant::now();
    let mut table = vec![0u16; size * N_MOVE];
    for coord in 0..size {
        let base = decode(coord as u16);
        for &m in Move::ALL.iter() {
            let next = base.applying(m as usize);
            table[coord * N_MOVE + m as usize] = encode(&next) as u16;
        }
    }
    info!("built {name} in {:?}", start.elapsed());
    if persist {
        write_table(&path, &table)?;
    }
    Ok(table)
}

fn build_move_table_u8<D>(
    table_dir: &std::path::Path,
    persist: bool,
    name: &str,
    size: usize,
    encode: impl Fn(&CubieCube) -> usize,
    decode: D,
) -> Result<Vec<u8>, Error>
where
    D: Fn(u8) -> CubieCube,
{
    let path = table_dir.join(name);
    if persist {
        if let Ok(bytes) = std::fs::read(&path) {
            debug!("loaded {name} from cache");
            return decode_table(&bytes);
        }
    }
    let start = std::time::Instant::now();
    let mut table = vec![0u8; size * N_MOVE];
    for coord in 0..size {
        let base = decode(coord as u8);
        for &m in Move::ALL.iter() {
            let next = base.applying(m as usize);
            table[coord * N_MOVE + m as usize] = encode(&next) as u8;
        }
    }
    info!("built {name} in {:?}", start.elapsed());
    if persist {
        write_table(&path, &table)?;
    }
    Ok(table)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_and_parse_round_trip() {
        for m in Move::ALL {
            assert_eq!(Move::from_str(&m.to_string()).unwrap(), m);
        }
    }

    #[test]
    fn face_groups_three_moves() {
        assert_eq!(U.face(), 0);
        assert_eq!(U2.face(), 0);
        assert_eq!(U3.face(), 0);
        assert_eq!(R.face(), 1);
        assert_eq!(B3.face(), 5);
    }

    #[test]
    fn twist_move_table_matches_consistency_law() {
        let tables = tables_for_test("twist");
        for coord in [0usize, 1, 17, 2186] {
            let base = CubieCube::from_twist(coord as u16);
            for &m in Move::ALL.iter() {
                let applied = base.applying(m as usize).twist();
                assert_eq!(tables.twist_move[coord * N_MOVE + m as usize], applied);
            }
        }
    }

    #[test]
    fn flip_move_table_matches_consistency_law() {
        let tables = tables_for_test("flip");
        for coord in [0usize, 1, 17, 2047] {
            let base = CubieCube::from_flip(coord as u16);
            for &m in Move::ALL.iter() {
                let applied = base.applying(m as usize).flip();
                assert_eq!(tables.flip_move[coord * N_MOVE + m as usize], applied);
            }
        }
    }

    #[test]
    fn slice_move_table_matches_consistency_law() {
        let tables = tables_for_test("slice");
        for coord in [0usize, 1, 17, 494] {
            let base = CubieCube::from_slice(coord as u16);
            for &m in Move::ALL.iter() {
                let applied = base.applying(m as usize).slice();
                assert_eq!(tables.slice_move[coord * N_MOVE + m as usize], applied);
            }
        }
    }

    #[test]
    fn cperm_move_table_matches_consistency_law() {
        let tables = tables_for_test("cperm");
        for coord in [0usize, 1, 17, 40319] {
            let base = CubieCube::from_cperm(coord as u16);
            for &m in Move::ALL.iter() {
                let applied = base.applying(m as usize).cperm();
                assert_eq!(tables.cperm_move[coord * N_MOVE + m as usize], applied);
            }
        }
    }

    #[test]
    fn eperm_ud_move_table_matches_consistency_law() {
        let tables = tables_for_test("eperm_ud");
        for coord in [0usize, 1, 17, 40319] {
            let base = CubieCube::from_eperm_ud(coord as u16);
            for &m in Move::ALL.iter() {
                let applied = base.applying(m as usize).eperm_ud();
                assert_eq!(tables.eperm_ud_move[coord * N_MOVE + m as usize], applied);
            }
        }
    }

    #[test]
    fn eperm_e_move_table_matches_consistency_law() {
        let tables = tables_for_test("eperm_e");
        for coord in 0..N_EPERM_E {
            let base = CubieCube::from_eperm_e(coord as u8);
            for &m in Move::ALL.iter() {
                let applied = base.applying(m as usize).eperm_e();
                assert_eq!(tables.eperm_e_move[coord * N_MOVE + m as usize], applied);
            }
        }
    }

    fn tables_for_test(tag: &str) -> MoveTables {
        let dir = std::env::temp_dir().join(format!("kociemba_test_{tag}_{}", std::process::id()));
        MoveTables::load(&dir, false).unwrap()
    }
}
