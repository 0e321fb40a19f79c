//! Parsing and rendering of move-string scrambles.

use std::str::FromStr;

use crate::error::Error;
use crate::moves::Move;

/// Parses a space-separated move string, e.g. `"R U R' U'"`. Only the literal
/// space character `' '` separates tokens; any other whitespace (tabs,
/// newlines, ...) is a parse error rather than a silently-accepted separator.
pub fn scramble_from_str(s: &str) -> Result<Vec<Move>, Error> {
    if s.contains(|c: char| c.is_whitespace() && c != ' ') {
        return Err(Error::Parse(format!("invalid whitespace in scramble: {s:?}")));
    }
    s.split(' ').filter(|t| !t.is_empty()).map(Move::from_str).collect()
}

/// Renders a move list back to its canonical whitespace-separated form.
pub fn scramble_to_str(moves: &[Move]) -> String {
    moves.iter().map(Move::to_string).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::moves::Move::*;

    #[test]
    fn parses_a_mixed_scramble() {
        let expected = vec![R, U, R3, U3, F, L3, D3, B2, R3, U3];
        assert_eq!(scramble_from_str("R U R' U' F L' D' B2 R' U'").unwrap(), expected);
    }

    #[test]
    fn renders_back_to_the_same_string() {
        let moves = vec![R, U, R3, U3, F, L3, D3, B2, R3, U3];
        assert_eq!(scramble_to_str(&moves), "R U R' U' F L' D' B2 R' U'");
    }

    #[test]
    fn rejects_invalid_tokens() {
        assert!(scramble_from_str("Q").is_err());
        assert!(scramble_from_str("U3").is_err());
    }

    #[test]
    fn rejects_non_space_whitespace() {
        assert!(scramble_from_str("U\tR").is_err());
        assert!(scramble_from_str("U\nR").is_err());
    }

    #[test]
    fn empty_string_is_empty_scramble() {
        assert!(scramble_from_str("").unwrap().is_empty());
    }
}
