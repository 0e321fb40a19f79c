//! Cubie-level cube representation and the eighteen face-turn operators.

use std::fmt;

use crate::constants::*;
use crate::error::Error;

#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner { URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB }

impl TryFrom<u8> for Corner {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use Corner::*;
        match value {
            0 => Ok(URF), 1 => Ok(UFL), 2 => Ok(ULB), 3 => Ok(UBR),
            4 => Ok(DFR), 5 => Ok(DLF), 6 => Ok(DBL), 7 => Ok(DRB),
            _ => Err(Error::IllegalCubeState(format!("corner index out of range: {value}"))),
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ALL_CORNERS[*self as usize])
    }
}

#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge { UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR }

impl TryFrom<u8> for Edge {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use Edge::*;
        match value {
            0 => Ok(UR), 1 => Ok(UF), 2 => Ok(UL), 3 => Ok(UB),
            4 => Ok(DR), 5 => Ok(DF), 6 => Ok(DL), 7 => Ok(DB),
            8 => Ok(FR), 9 => Ok(FL), 10 => Ok(BL), 11 => Ok(BR),
            _ => Err(Error::IllegalCubeState(format!("edge index out of range: {value}"))),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ALL_EDGES[*self as usize])
    }
}

/// A cube state: permutation and orientation of the 8 corners and 12 edges.
///
/// `cp[i]`/`ep[i]` name which cubie currently sits at position `i`; `co[i]`/`eo[i]`
/// give that cubie's twist/flip. The sum of `co` is always ≡ 0 (mod 3) and the sum
/// of `eo` is always ≡ 0 (mod 2) for any state reachable from solved by face turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubieCube {
    pub cp: [u8; 8],
    pub co: [u8; 8],
    pub ep: [u8; 12],
    pub eo: [u8; 12],
}

impl Default for CubieCube {
    fn default() -> Self {
        Self::solved()
    }
}

/// Renders corner and edge cubies by their position labels (`ALL_CORNERS`,
/// `ALL_EDGES`), e.g. `corners: URF UFL ... edges: UR UF ...` for a solved cube.
impl fmt::Display for CubieCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "corners:")?;
        for &c in &self.cp {
            let corner = Corner::try_from(c).map_err(|_| fmt::Error)?;
            write!(f, " {corner}")?;
        }
        write!(f, " edges:")?;
        for &e in &self.ep {
            let edge = Edge::try_from(e).map_err(|_| fmt::Error)?;
            write!(f, " {edge}")?;
        }
        Ok(())
    }
}

fn cycle4_idx(arr: &mut [u8], a: usize, b: usize, c: usize, d: usize) {
    let t = arr[a];
    arr[a] = arr[d];
    arr[d] = arr[c];
    arr[c] = arr[b];
    arr[b] = t;
}

impl CubieCube {
    pub fn solved() -> Self {
        let mut cp = [0u8; 8];
        let mut ep = [0u8; 12];
        for i in 0..8 {
            cp[i] = i as u8;
        }
        for i in 0..12 {
            ep[i] = i as u8;
        }
        CubieCube { cp, co: [0; 8], ep, eo: [0; 12] }
    }

    pub fn is_solved(&self) -> bool {
        self.cp.iter().enumerate().all(|(i, &v)| v == i as u8)
            && self.co.iter().all(|&v| v == 0)
            && self.ep.iter().enumerate().all(|(i, &v)| v == i as u8)
            && self.eo.iter().all(|&v| v == 0)
    }

    /// Checks the two orientation-sum invariants and that `cp`/`ep` are permutations.
    pub fn verify(&self) -> Result<(), Error> {
        let mut seen = [false; 8];
        for &c in &self.cp {
            let c = c as usize;
            if c >= 8 || seen[c] {
                return Err(Error::IllegalCubeState("cp is not a permutation".into()));
            }
            seen[c] = true;
        }
        if self.co.iter().map(|&x| x as u32).sum::<u32>() % 3 != 0 {
            return Err(Error::IllegalCubeState("sum(co) is not divisible by 3".into()));
        }
        let mut seen = [false; 12];
        for &e in &self.ep {
            let e = e as usize;
            if e >= 12 || seen[e] {
                return Err(Error::IllegalCubeState("ep is not a permutation".into()));
            }
            seen[e] = true;
        }
        if self.eo.iter().map(|&x| x as u32).sum::<u32>() % 2 != 0 {
            return Err(Error::IllegalCubeState("sum(eo) is not divisible by 2".into()));
        }
        Ok(())
    }

    fn uq(&mut self) {
        cycle4_idx(&mut self.cp, 0, 1, 2, 3);
        cycle4_idx(&mut self.co, 0, 1, 2, 3);
        cycle4_idx(&mut self.ep, 0, 1, 2, 3);
        cycle4_idx(&mut self.eo, 0, 1, 2, 3);
    }

    fn dq(&mut self) {
        cycle4_idx(&mut self.cp, 7, 6, 5, 4);
        cycle4_idx(&mut self.co, 7, 6, 5, 4);
        cycle4_idx(&mut self.ep, 7, 6, 5, 4);
        cycle4_idx(&mut self.eo, 7, 6, 5, 4);
    }

    fn rq(&mut self) {
        let (co7, co4, co0, co3) = (self.co[7], self.co[4], self.co[0], self.co[3]);
        cycle4_idx(&mut self.cp, 7, 4, 0, 3);
        self.co[7] = (co3 + 2) % 3;
        self.co[4] = (co7 + 1) % 3;
        self.co[0] = (co4 + 2) % 3;
        self.co[3] = (co0 + 1) % 3;
        cycle4_idx(&mut self.ep, 11, 4, 8, 0);
        cycle4_idx(&mut self.eo, 11, 4, 8, 0);
    }

    fn lq(&mut self) {
        let (co5, co6, co2, co1) = (self.co[5], self.co[6], self.co[2], self.co[1]);
        cycle4_idx(&mut self.cp, 5, 6, 2, 1);
        self.co[5] = (co1 + 2) % 3;
        self.co[6] = (co5 + 1) % 3;
        self.co[2] = (co6 + 2) % 3;
        self.co[1] = (co2 + 1) % 3;
        cycle4_idx(&mut self.ep, 9, 6, 10, 2);
        cycle4_idx(&mut self.eo, 9, 6, 10, 2);
    }

    fn fq(&mut self) {
        let (co4, co5, co1, co0) = (self.co[4], self.co[5], self.co[1], self.co[0]);
        cycle4_idx(&mut self.cp, 4, 5, 1, 0);
        self.co[4] = (co0 + 2) % 3;
        self.co[5] = (co4 + 1) % 3;
        self.co[1] = (co5 + 2) % 3;
        self.co[0] = (co1 + 1) % 3;
        let (e8, e5, e9, e1) = (self.eo[8], self.eo[5], self.eo[9], self.eo[1]);
        cycle4_idx(&mut self.ep, 8, 5, 9, 1);
        self.eo[8] = e1 ^ 1;
        self.eo[5] = e8 ^ 1;
        self.eo[9] = e5 ^ 1;
        self.eo[1] = e9 ^ 1;
    }

    fn bq(&mut self) {
        let (co6, co7, co3, co2) = (self.co[6], self.co[7], self.co[3], self.co[2]);
        cycle4_idx(&mut self.cp, 6, 7, 3, 2);
        self.co[6] = (co2 + 2) % 3;
        self.co[7] = (co6 + 1) % 3;
        self.co[3] = (co7 + 2) % 3;
        self.co[2] = (co3 + 1) % 3;
        let (e10, e7, e11, e3) = (self.eo[10], self.eo[7], self.eo[11], self.eo[3]);
        cycle4_idx(&mut self.ep, 10, 7, 11, 3);
        self.eo[10] = e3 ^ 1;
        self.eo[7] = e10 ^ 1;
        self.eo[11] = e7 ^ 1;
        self.eo[3] = e11 ^ 1;
    }

    /// Applies move `m` (0..18, face index `m / 3`, quarter/half/inverse by `m % 3`)
    /// in place. Half and inverse turns are two and three quarter turns, respectively.
    pub fn apply_move(&mut self, m: usize) {
        let face = m / 3;
        let reps = m % 3 + 1;
        for _ in 0..reps {
            match face {
                0 => self.uq(),
                1 => self.rq(),
                2 => self.fq(),
                3 => self.dq(),
                4 => self.lq(),
                5 => self.bq(),
                _ => unreachable!("move index out of range: {m}"),
            }
        }
    }

    pub fn applying(mut self, m: usize) -> Self {
        self.apply_move(m);
        self
    }

    // --- coordinate encoders ---

    pub fn twist(&self) -> u16 {
        self.co[0..7].iter().fold(0u16, |acc, &x| acc * 3 + x as u16)
    }

    pub fn flip(&self) -> u16 {
        self.eo[0..11].iter().fold(0u16, |acc, &x| acc * 2 + x as u16)
    }

    /// Combinatorial-number-system rank of the 4-subset of positions holding E-slice
    /// edges (values 8..11 of `ep`).
    pub fn slice(&self) -> u16 {
        let mut positions = [0usize; 4];
        let mut k = 0;
        for (pos, &v) in self.ep.iter().enumerate() {
            if v >= 8 {
                positions[k] = pos;
                k += 1;
            }
        }
        subset_rank_12_4(&positions) as u16
    }

    pub fn cperm(&self) -> u16 {
        perm_rank(&self.cp) as u16
    }

    /// Valid only when the cube is in G1 (ep\[0..7\] is a permutation of 0..7).
    pub fn eperm_ud(&self) -> u16 {
        let vals: Vec<u8> = self.ep[0..8].to_vec();
        perm_rank(&vals) as u16
    }

    /// Valid only when the cube is in G1 (ep\[8..11\] is a permutation of 8..11).
    pub fn eperm_e(&self) -> u8 {
        let vals: [u8; 4] = [self.ep[8] - 8, self.ep[9] - 8, self.ep[10] - 8, self.ep[11] - 8];
        perm_rank(&vals) as u8
    }

    // --- coordinate decoders ---

    pub fn from_twist(twist: u16) -> Self {
        let mut c = Self::solved();
        let mut sum = 0u32;
        let mut t = twist;
        for i in (0..7).rev() {
            c.co[i] = (t % 3) as u8;
            sum += c.co[i] as u32;
            t /= 3;
        }
        c.co[7] = ((3 - sum % 3) % 3) as u8;
        c
    }

    pub fn from_flip(flip: u16) -> Self {
        let mut c = Self::solved();
        let mut sum = 0u32;
        let mut f = flip;
        for i in (0..11).rev() {
            c.eo[i] = (f % 2) as u8;
            sum += c.eo[i] as u32;
            f /= 2;
        }
        c.eo[11] = (sum % 2) as u8;
        c
    }

    pub fn from_slice(slice: u16) -> Self {
        let mut c = Self::solved();
        let positions = subset_unrank_12_4(slice as usize);
        let mut ep = [0u8; 12];
        let mut ni = 0u8;
        let mut slice_vals = [8u8, 9, 10, 11].into_iter();
        for pos in 0..12 {
            if positions.contains(&pos) {
                ep[pos] = slice_vals.next().unwrap();
            } else {
                ep[pos] = ni;
                ni += 1;
            }
        }
        c.ep = ep;
        c
    }

    pub fn from_cperm(cperm: u16) -> Self {
        let mut c = Self::solved();
        let vals = perm_unrank(cperm as usize, 8);
        for i in 0..8 {
            c.cp[i] = vals[i];
        }
        c
    }

    pub fn from_eperm_ud(eperm_ud: u16) -> Self {
        let mut c = Self::solved();
        let vals = perm_unrank(eperm_ud as usize, 8);
        for i in 0..8 {
            c.ep[i] = vals[i];
        }
        for i in 8..12 {
            c.ep[i] = i as u8;
        }
        c
    }

    pub fn from_eperm_e(eperm_e: u8) -> Self {
        let mut c = Self::solved();
        let vals = perm_unrank(eperm_e as usize, 4);
        for i in 0..4 {
            c.ep[8 + i] = vals[i] + 8;
        }
        for i in 0..8 {
            c.ep[i] = i as u8;
        }
        c
    }
}

fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let mut result = 1usize;
    for i in 0..k {
        result = result * (n - i) / (i + 1);
    }
    result
}

/// Combinatorial-number-system rank of a strictly increasing 4-subset of {0..11}.
fn subset_rank_12_4(positions: &[usize; 4]) -> usize {
    let mut rank = 0;
    for (i, &p) in positions.iter().enumerate() {
        for v in (if i == 0 { 0 } else { positions[i - 1] + 1 })..p {
            rank += binomial(11 - v, 3 - i);
        }
    }
    rank
}

fn subset_unrank_12_4(mut rank: usize) -> [usize; 4] {
    let mut positions = [0usize; 4];
    let mut start = 0usize;
    for i in 0..4 {
        let mut v = start;
        loop {
            let c = binomial(11 - v, 3 - i);
            if rank < c {
                break;
            }
            rank -= c;
            v += 1;
        }
        positions[i] = v;
        start = v + 1;
    }
    positions
}

fn perm_rank(vals: &[u8]) -> usize {
    let n = vals.len();
    let mut rank = 0usize;
    let mut fact = 1usize;
    for k in 1..n {
        fact *= k;
    }
    let mut used = vec![false; n];
    for i in 0..n {
        let mut smaller = 0;
        for v in 0..vals[i] as usize {
            if !used[v] {
                smaller += 1;
            }
        }
        rank += smaller * fact;
        used[vals[i] as usize] = true;
        if i + 1 < n {
            fact /= n - 1 - i;
        }
    }
    rank
}

fn perm_unrank(mut rank: usize, n: usize) -> Vec<u8> {
    let mut fact = 1usize;
    for k in 1..n {
        fact *= k;
    }
    let mut remaining: Vec<u8> = (0..n as u8).collect();
    let mut result = Vec::with_capacity(n);
    let mut f = fact;
    for i in 0..n {
        let idx = rank / f;
        rank %= f.max(1);
        result.push(remaining.remove(idx));
        if n - i - 1 > 0 {
            f /= n - i - 1;
        }
    }
    result
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn solved_is_solved() {
        assert!(CubieCube::solved().is_solved());
    }

    #[test]
    fn no_single_move_leaves_solved_solved() {
        for m in 0..N_MOVE {
            let c = CubieCube::solved().applying(m);
            assert!(!c.is_solved(), "move {m} should not leave the cube solved");
        }
    }

    #[test]
    fn display_renders_solved_corner_and_edge_labels() {
        let rendered = CubieCube::solved().to_string();
        assert_eq!(
            rendered,
            "corners: URF UFL ULB UBR DFR DLF DBL DRB \
             edges: UR UF UL UB DR DF DL DB FR FL BL BR"
        );
    }

    #[test]
    fn quarter_turn_four_times_is_identity() {
        for face in 0..6 {
            let mut c = CubieCube::solved();
            for _ in 0..4 {
                c.apply_move(face * 3);
            }
            assert!(c.is_solved());
        }
    }

    #[test]
    fn move_and_inverse_cancel() {
        for face in 0..6 {
            let base = face * 3;
            let mut c = CubieCube::solved();
            c.apply_move(base);
            c.apply_move(base + 2);
            assert!(c.is_solved());
        }
    }

    #[test]
    fn half_turn_twice_is_identity() {
        for face in 0..6 {
            let mut c = CubieCube::solved();
            c.apply_move(face * 3 + 1);
            c.apply_move(face * 3 + 1);
            assert!(c.is_solved());
        }
    }

    #[test]
    fn half_turn_equals_two_quarter_turns() {
        for face in 0..6 {
            let base = face * 3;
            let mut a = CubieCube::solved();
            a.apply_move(base + 1);
            let mut b = CubieCube::solved();
            b.apply_move(base);
            b.apply_move(base);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn twist_round_trip() {
        for t in 0..N_TWIST {
            let c = CubieCube::from_twist(t as u16);
            assert_eq!(c.twist() as usize, t);
        }
    }

    #[test]
    fn flip_round_trip() {
        for f in (0..N_FLIP).step_by(7) {
            let c = CubieCube::from_flip(f as u16);
            assert_eq!(c.flip() as usize, f);
        }
    }

    #[test]
    fn slice_round_trip() {
        for s in 0..N_SLICE {
            let c = CubieCube::from_slice(s as u16);
            assert_eq!(c.slice() as usize, s);
        }
    }

    #[test]
    fn cperm_round_trip() {
        for p in (0..N_CPERM).step_by(37) {
            let c = CubieCube::from_cperm(p as u16);
            assert_eq!(c.cperm() as usize, p);
        }
    }

    #[test]
    fn eperm_ud_round_trip() {
        for p in (0..N_EPERM_UD).step_by(41) {
            let c = CubieCube::from_eperm_ud(p as u16);
            assert_eq!(c.eperm_ud() as usize, p);
        }
    }

    #[test]
    fn eperm_e_round_trip() {
        for p in 0..N_EPERM_E {
            let c = CubieCube::from_eperm_e(p as u8);
            assert_eq!(c.eperm_e() as usize, p);
        }
    }
}
