//! Breadth-first pruning tables used as admissible IDA* heuristics.

use std::collections::VecDeque;

use log::info;

use crate::constants::*;
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::moves::MoveTables;
use crate::{decode_table, write_table};

const UNVISITED: u8 = 0xFF;

/// Phase-1 pruning tables: lower bounds on moves remaining to reach G1.
pub struct PruningP1 {
    /// Indexed `slice * N_TWIST + twist`.
    pub slice_twist: Vec<u8>,
    /// Indexed `slice * N_FLIP + flip`.
    pub slice_flip: Vec<u8>,
}

/// Phase-2 pruning tables: lower bounds on moves remaining to reach solved, within G1.
pub struct PruningP2 {
    /// Indexed `eperm_e * N_CPERM + cperm`.
    pub eperm_e_cperm: Vec<u8>,
    /// Indexed `eperm_e * N_EPERM_UD + eperm_ud`.
    pub eperm_e_eperm_ud: Vec<u8>,
}

impl PruningP1 {
    pub fn load(table_dir: &std::path::Path, persist: bool, moves: &MoveTables) -> Result<Self, Error> {
        let solved = CubieCube::solved();
        let slice_solved = solved.slice() as usize;
        let twist_solved = solved.twist() as usize;
        let flip_solved = solved.flip() as usize;
        Ok(Self {
            slice_twist: build_table(
                table_dir, persist, "prun_slice_twist", N_SLICE * N_TWIST, N_TWIST,
                slice_solved * N_TWIST + twist_solved,
                &ALL_MOVE_RANGE, |pair, b_size, m| {
                    let a = pair / b_size;
                    let b = pair % b_size;
                    moves.slice_move[a * N_MOVE + m] as usize * b_size + moves.twist_move[b * N_MOVE + m] as usize
                },
            )?,
            slice_flip: build_table(
                table_dir, persist, "prun_slice_flip", N_SLICE * N_FLIP, N_FLIP,
                slice_solved * N_FLIP + flip_solved,
                &ALL_MOVE_RANGE, |pair, b_size, m| {
                    let a = pair / b_size;
                    let b = pair % b_size;
                    moves.slice_move[a * N_MOVE + m] as usize * b_size + moves.flip_move[b * N_MOVE + m] as usize
                },
            )?,
        })
    }

    pub fn verify_complete(&self) -> Result<(), Error> {
        if self.slice_twist.contains(&UNVISITED) {
            return Err(Error::InternalInvariantViolation(
                "slice_twist pruning table has unreached entries".into(),
            ));
        }
        if self.slice_flip.contains(&UNVISITED) {
            return Err(Error::InternalInvariantViolation(
                "slice_flip pruning table has unreached entries".into(),
            ));
        }
        Ok(())
    }
}

impl PruningP2 {
    pub fn verify_complete(&self) -> Result<(), Error> {
        if self.eperm_e_cperm.contains(&UNVISITED) {
            return Err(Error::InternalInvariantViolation(
                "eperm_e_cperm pruning table has unreached entries".into(),
            ));
        }
        if self.eperm_e_eperm_ud.contains(&UNVISITED) {
            return Err(Error::InternalInvariantViolation(
                "eperm_e_eperm_ud pruning table has unreached entries".into(),
            ));
        }
        Ok(())
    }

    pub fn load(table_dir: &std::path::Path, persist: bool, moves: &MoveTables) -> Result<Self, Error> {
        let solved = CubieCube::solved();
        let ee_solved = solved.eperm_e() as usize;
        let cperm_solved = solved.cperm() as usize;
        let eud_solved = solved.eperm_ud() as usize;
        Ok(Self {
            eperm_e_cperm: build_table(
                table_dir, persist, "prun_eE_cperm", N_EPERM_E * N_CPERM, N_CPERM,
                ee_solved * N_CPERM + cperm_solved,
                &P2_MOVES, |pair, b_size, m| {
                    let a = pair / b_size;
                    let b = pair % b_size;
                    moves.eperm_e_move[a * N_MOVE + m] as usize * b_size + moves.cperm_move[b * N_MOVE + m] as usize
                },
            )?,
            eperm_e_eperm_ud: build_table(
                table_dir, persist, "prun_eE_eUD", N_EPERM_E * N_EPERM_UD, N_EPERM_UD,
                ee_solved * N_EPERM_UD + eud_solved,
                &P2_MOVES, |pair, b_size, m| {
                    let a = pair / b_size;
                    let b = pair % b_size;
                    moves.eperm_e_move[a * N_MOVE + m] as usize * b_size + moves.eperm_ud_move[b * N_MOVE + m] as usize
                },
            )?,
        })
    }
}

/// Every face-turn move index, `0..N_MOVE`, used as the P1 move set.
const ALL_MOVE_RANGE: [usize; N_MOVE] = {
    let mut a = [0usize; N_MOVE];
    let mut i = 0;
    while i < N_MOVE {
        a[i] = i;
        i += 1;
    }
    a
};

/// Plain BFS over `(a, b)` product-coordinate pairs, using `move_set` as the legal
/// moves and `successor` to compute the pair reached by applying a given move.
/// `0xFF` marks unvisited slots; BFS assigns each reachable pair its true distance
/// from the solved pair (index 0).
fn build_table(
    table_dir: &std::path::Path,
    persist: bool,
    name: &str,
    size: usize,
    b_size: usize,
    root: usize,
    move_set: &[usize],
    successor: impl Fn(usize, usize, usize) -> usize,
) -> Result<Vec<u8>, Error> {
    let path = table_dir.join(name);
    if persist {
        if let Ok(bytes) = std::fs::read(&path) {
            return decode_table(&bytes);
        }
    }
    let timer = std::time::Instant::now();
    let mut table = vec![UNVISITED; size];
    table[root] = 0;
    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(root);
    let mut radius = 0usize;
    while let Some(pair) = queue.pop_front() {
        let depth = table[pair];
        radius = radius.max(depth as usize);
        for &m in move_set {
            let next = successor(pair, b_size, m);
            if table[next] == UNVISITED {
                table[next] = depth + 1;
                queue.push_back(next);
            }
        }
    }
    info!("built {name} in {:?}, radius {radius}", timer.elapsed());
    if persist {
        write_table(&path, &table)?;
    }
    Ok(table)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn p1_bfs_reaches_every_slice_twist_pair() {
        let dir = std::env::temp_dir().join(format!("kociemba_prun_test_{}", std::process::id()));
        let moves = MoveTables::load(&dir, false).unwrap();
        let p1 = PruningP1::load(&dir, false, &moves).unwrap();
        p1.verify_complete().unwrap();
    }

    #[test]
    fn p2_bfs_reaches_every_g1_reachable_pair() {
        let dir = std::env::temp_dir().join(format!("kociemba_prun_test3_{}", std::process::id()));
        let moves = MoveTables::load(&dir, false).unwrap();
        let p2 = PruningP2::load(&dir, false, &moves).unwrap();
        p2.verify_complete().unwrap();
    }

    #[test]
    fn solved_pair_has_distance_zero() {
        let dir = std::env::temp_dir().join(format!("kociemba_prun_test2_{}", std::process::id()));
        let moves = MoveTables::load(&dir, false).unwrap();
        let p1 = PruningP1::load(&dir, false, &moves).unwrap();
        let solved = CubieCube::solved();
        let (slice, twist, flip) = (solved.slice() as usize, solved.twist() as usize, solved.flip() as usize);
        assert_eq!(p1.slice_twist[slice * N_TWIST + twist], 0);
        assert_eq!(p1.slice_flip[slice * N_FLIP + flip], 0);
    }
}
