//! Single-threaded two-phase IDA* search.

use std::time::Instant;

use log::{debug, trace};

use crate::config::SolverConfig;
use crate::constants::*;
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::moves::{Move, MoveTables};
use crate::pruning::{PruningP1, PruningP2};

/// The immutable, read-only tables a solve consumes: six coordinate move tables
/// and four BFS pruning tables. Build once, share across any number of solves.
pub struct SolverTables {
    pub moves: MoveTables,
    pub p1: PruningP1,
    pub p2: PruningP2,
}

impl SolverTables {
    pub fn build(config: &SolverConfig) -> Result<Self, Error> {
        if config.persist_tables {
            std::fs::create_dir_all(&config.table_dir)?;
        }
        let moves = MoveTables::load(&config.table_dir, config.persist_tables)?;
        let p1 = PruningP1::load(&config.table_dir, config.persist_tables, &moves)?;
        p1.verify_complete()?;
        let p2 = PruningP2::load(&config.table_dir, config.persist_tables, &moves)?;
        p2.verify_complete()?;
        Ok(Self { moves, p1, p2 })
    }

    fn h1(&self, slice: usize, twist: usize, flip: usize) -> usize {
        let d1 = self.p1.slice_twist[slice * N_TWIST + twist];
        let d2 = self.p1.slice_flip[slice * N_FLIP + flip];
        d1.max(d2) as usize
    }

    fn h2(&self, ee: usize, cperm: usize, eud: usize) -> usize {
        let d1 = self.p2.eperm_e_cperm[ee * N_CPERM + cperm];
        let d2 = self.p2.eperm_e_eperm_ud[ee * N_EPERM_UD + eud];
        d1.max(d2) as usize
    }
}

struct Deadline {
    start: Instant,
    budget: std::time::Duration,
}

impl Deadline {
    fn time_up(&self) -> bool {
        self.start.elapsed() >= self.budget
    }
}

/// Solves `scrambled`, returning the shortest move list found within the
/// configured wall-clock budget. Returns `Ok(vec![])` if `scrambled` is already
/// solved, or the best-effort (possibly empty) move list if the deadline elapses
/// before any Phase-2 leaf completes.
pub fn solve(tables: &SolverTables, config: &SolverConfig, scrambled: &CubieCube) -> Result<Vec<Move>, Error> {
    let deadline = Deadline { start: Instant::now(), budget: config.deadline };

    let mut cur = Vec::new();
    let mut leaves: Vec<(CubieCube, Vec<usize>)> = Vec::new();
    ida_p1(tables, scrambled, config.p1_max_bound, &mut cur, &mut leaves, &deadline);
    debug!("phase 1 collected {} leaf state(s)", leaves.len());

    let mut best: Option<Vec<usize>> = None;
    for (leaf, prefix) in &leaves {
        if deadline.time_up() {
            break;
        }
        let ee = leaf.eperm_e() as usize;
        let cperm = leaf.cperm() as usize;
        let eud = leaf.eperm_ud() as usize;
        let lower_bound = tables.h2(ee, cperm, eud);
        for bound in lower_bound..=config.p2_max_bound {
            let mut cur = prefix.clone();
            let mut out = Vec::new();
            let last_move = prefix.last().copied();
            let abort = dfs_p2(tables, leaf, 0, bound, last_move, ee, cperm, eud, &mut cur, &mut out, &deadline);
            if abort {
                break;
            }
            if !out.is_empty() {
                if best.as_ref().map(|b| out.len() < b.len()).unwrap_or(true) {
                    trace!("phase 2 leaf improved best to {} moves at bound {bound}", out.len());
                    best = Some(out);
                }
                break;
            }
        }
    }

    Ok(best.unwrap_or_default().into_iter().map(|m| Move::ALL[m]).collect())
}

/// Collects every Phase-1 leaf (a state with `h1 == 0`, i.e. in G1) reachable at
/// the first IDA* bound where any leaf exists, each paired with the move path
/// that reaches it.
#[allow(clippy::too_many_arguments)]
fn ida_p1(
    tables: &SolverTables,
    scrambled: &CubieCube,
    max_bound: usize,
    cur: &mut Vec<usize>,
    out: &mut Vec<(CubieCube, Vec<usize>)>,
    deadline: &Deadline,
) {
    let slice0 = scrambled.slice() as usize;
    let twist0 = scrambled.twist() as usize;
    let flip0 = scrambled.flip() as usize;
    let lower_bound = tables.h1(slice0, twist0, flip0);

    for bound in lower_bound..=max_bound {
        cur.clear();
        dfs_p1(tables, scrambled, 0, bound, None, slice0, twist0, flip0, cur, out, deadline);
        if !out.is_empty() {
            trace!("phase 1 succeeded at bound {bound} with {} leaves", out.len());
            return;
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn dfs_p1(
    tables: &SolverTables,
    c: &CubieCube,
    depth: usize,
    bound: usize,
    last_face: Option<usize>,
    slice: usize,
    twist: usize,
    flip: usize,
    cur: &mut Vec<usize>,
    out: &mut Vec<(CubieCube, Vec<usize>)>,
    deadline: &Deadline,
) -> bool {
    if deadline.time_up() {
        return true;
    }
    let h = tables.h1(slice, twist, flip);
    if depth + h > bound {
        return false;
    }
    if h == 0 {
        out.push((*c, cur.clone()));
        return false;
    }
    for m in 0..N_MOVE {
        let face = m / 3;
        if last_face == Some(face) {
            continue;
        }
        let d = c.applying(m);
        let slice2 = tables.moves.slice_move[slice * N_MOVE + m] as usize;
        let twist2 = tables.moves.twist_move[twist * N_MOVE + m] as usize;
        let flip2 = tables.moves.flip_move[flip * N_MOVE + m] as usize;
        cur.push(m);
        let abort = dfs_p1(tables, &d, depth + 1, bound, Some(face), slice2, twist2, flip2, cur, out, deadline);
        cur.pop();
        if abort {
            return true;
        }
    }
    false
}

/// DFS for Phase 2, restricted to the G1-generator moves, with exact-move-repeat
/// pruning folded into face-repeat pruning (every G1 generator is the sole
/// representative of its face among the legal moves, except U/D which keep all
/// three variants — so skipping same-face exactly matches skipping same-move
/// for the double turns and subsumes it for U/D).
#[allow(clippy::too_many_arguments)]
fn dfs_p2(
    tables: &SolverTables,
    c: &CubieCube,
    depth: usize,
    bound: usize,
    last_move: Option<usize>,
    ee: usize,
    cperm: usize,
    eud: usize,
    cur: &mut Vec<usize>,
    out: &mut Vec<usize>,
    deadline: &Deadline,
) -> bool {
    if deadline.time_up() {
        return true;
    }
    let h = tables.h2(ee, cperm, eud);
    if depth + h > bound {
        return false;
    }
    if c.is_solved() {
        *out = cur.clone();
        return false;
    }
    let last_face = last_move.map(|m| m / 3);
    for &m in P2_MOVES.iter() {
        if last_face == Some(m / 3) {
            continue;
        }
        let d = c.applying(m);
        let ee2 = tables.moves.eperm_e_move[ee * N_MOVE + m] as usize;
        let cperm2 = tables.moves.cperm_move[cperm * N_MOVE + m] as usize;
        let eud2 = tables.moves.eperm_ud_move[eud * N_MOVE + m] as usize;
        cur.push(m);
        let abort = dfs_p2(tables, &d, depth + 1, bound, Some(m), ee2, cperm2, eud2, cur, out, deadline);
        cur.pop();
        if abort {
            return true;
        }
        if !out.is_empty() {
            return false;
        }
    }
    false
}
