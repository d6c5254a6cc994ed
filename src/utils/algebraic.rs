//! Square conversions for long algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! `(file, rank)` representation reused by the FEN/UCI components.

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;

/// Convert an algebraic square (for example: "e4") to a board location.
#[inline]
pub fn algebraic_to_location(square: &str) -> Result<BoardLocation, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_string()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank as char));
    }

    Ok(((file - b'a') as i8, (rank - b'1') as i8))
}

/// Convert a board location to algebraic notation (for example: "e4").
///
/// The location must be on the board; engine-generated moves always are.
#[inline]
pub fn location_to_algebraic(location: &BoardLocation) -> String {
    let file_char = char::from(b'a' + location.0 as u8);
    let rank_char = char::from(b'1' + location.1 as u8);
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_squares_convert_both_ways() {
        assert_eq!(algebraic_to_location("a1").unwrap(), (0, 0));
        assert_eq!(algebraic_to_location("h8").unwrap(), (7, 7));
        assert_eq!(location_to_algebraic(&(0, 0)), "a1");
        assert_eq!(location_to_algebraic(&(7, 7)), "h8");
    }

    #[test]
    fn bad_files_and_ranks_are_rejected() {
        assert_eq!(
            algebraic_to_location("i1"),
            Err(ChessErrors::InvalidAlgebraicChar('i'))
        );
        assert_eq!(
            algebraic_to_location("a9"),
            Err(ChessErrors::InvalidAlgebraicChar('9'))
        );
        assert!(algebraic_to_location("e").is_err());
    }
}
