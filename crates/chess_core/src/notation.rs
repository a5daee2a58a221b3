//! Directive token decoding.
//!
//! Three token shapes are understood:
//!
//! - placement: `<piece><color><square>`, e.g. `Kle1` (`l` light = White,
//!   `d` dark = Black)
//! - movement: `[<piece>]<square>[-|x]<square>`, e.g. `e2-e4`, `Nb8xd7`
//! - castle: `O-O` (king side) and `O-O-O` (queen side)
//!
//! Movement tokens never carry a color; the caller supplies the side to move.

use crate::{Color, ParseError, PieceType, Position};

pub const CAPTURE_MARKER: char = 'x';
pub const KING_SIDE_CASTLE: &str = "O-O";
pub const QUEEN_SIDE_CASTLE: &str = "O-O-O";

/// Which square of a movement token to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    Source,
    Destination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub fn notation(self) -> &'static str {
        match self {
            CastleSide::KingSide => KING_SIDE_CASTLE,
            CastleSide::QueenSide => QUEEN_SIDE_CASTLE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub piece_type: PieceType,
    pub color: Color,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    pub piece_type: PieceType,
    pub from: Position,
    pub to: Position,
    pub capture: bool,
}

fn chars_of(token: &str) -> Result<Vec<char>, ParseError> {
    let chars: Vec<char> = token.trim().chars().collect();
    if chars.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(chars)
}

/// Index of the first square character: a leading upper-case letter is a
/// piece letter.
fn square_start(chars: &[char]) -> usize {
    usize::from(chars[0].is_ascii_uppercase())
}

fn square_at(token: &str, chars: &[char], offset: usize) -> Result<Position, ParseError> {
    let file = chars
        .get(offset)
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| ('a'..='h').contains(c))
        .ok_or_else(|| ParseError::File {
            token: token.to_string(),
            offset,
        })?;
    let rank = chars
        .get(offset + 1)
        .copied()
        .filter(|c| ('1'..='8').contains(c))
        .ok_or_else(|| ParseError::Rank {
            token: token.to_string(),
            offset: offset + 1,
        })?;

    // Both characters were range checked above.
    Position::new(rank as u8 - b'1', file as u8 - b'a').ok_or_else(|| ParseError::Length {
        token: token.to_string(),
    })
}

fn check_movement_shape(token: &str, chars: &[char]) -> Result<(), ParseError> {
    let start = square_start(chars);
    match chars.len() - start {
        4 => Ok(()),
        5 if matches!(chars[start + 2], '-' | CAPTURE_MARKER) => Ok(()),
        _ => Err(ParseError::Length {
            token: token.to_string(),
        }),
    }
}

/// Reads the source or destination square of a movement token.
pub fn square(token: &str, half: Half) -> Result<Position, ParseError> {
    let chars = chars_of(token)?;
    check_movement_shape(token, &chars)?;
    let offset = match half {
        Half::Source => square_start(&chars),
        Half::Destination => chars.len() - 2,
    };
    square_at(token, &chars, offset)
}

/// Piece named by a movement token. No letter means a pawn.
pub fn piece_type(token: &str) -> Result<PieceType, ParseError> {
    let chars = chars_of(token)?;
    let letter = chars[0];
    if !letter.is_ascii_uppercase() {
        return Ok(PieceType::Pawn);
    }
    PieceType::from_white_glyph(letter).ok_or_else(|| ParseError::Piece {
        token: token.to_string(),
        letter,
    })
}

pub fn is_capture(token: &str) -> bool {
    token.contains(CAPTURE_MARKER)
}

pub fn parse_movement(token: &str) -> Result<Movement, ParseError> {
    Ok(Movement {
        piece_type: piece_type(token)?,
        from: square(token, Half::Source)?,
        to: square(token, Half::Destination)?,
        capture: is_capture(token),
    })
}

pub fn parse_placement(token: &str) -> Result<Placement, ParseError> {
    let chars = chars_of(token)?;
    if chars.len() != 4 {
        return Err(ParseError::Length {
            token: token.to_string(),
        });
    }

    let letter = chars[0];
    let piece_type =
        PieceType::from_white_glyph(letter.to_ascii_uppercase()).ok_or_else(|| ParseError::Piece {
            token: token.to_string(),
            letter,
        })?;
    let color = match chars[1].to_ascii_lowercase() {
        'l' => Color::White,
        'd' => Color::Black,
        marker => {
            return Err(ParseError::Color {
                token: token.to_string(),
                marker,
            })
        }
    };
    let position = square_at(token, &chars, 2)?;

    Ok(Placement {
        piece_type,
        color,
        position,
    })
}

pub fn parse_castle(token: &str) -> Result<CastleSide, ParseError> {
    match token.trim() {
        KING_SIDE_CASTLE => Ok(CastleSide::KingSide),
        QUEEN_SIDE_CASTLE => Ok(CastleSide::QueenSide),
        _ => Err(ParseError::Castle {
            token: token.to_string(),
        }),
    }
}

pub fn is_castle(token: &str) -> bool {
    parse_castle(token).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    #[test]
    fn pawn_move_defaults_piece() {
        let mv = parse_movement("e2-e4").unwrap();
        assert_eq!(mv.piece_type, PieceType::Pawn);
        assert_eq!(mv.from, pos("e2"));
        assert_eq!(mv.to, pos("e4"));
        assert!(!mv.capture);
    }

    #[test]
    fn piece_letter_and_capture_marker() {
        let mv = parse_movement("Nb8xd7").unwrap();
        assert_eq!(mv.piece_type, PieceType::Knight);
        assert_eq!(mv.from, pos("b8"));
        assert_eq!(mv.to, pos("d7"));
        assert!(mv.capture);
    }

    #[test]
    fn separator_is_optional() {
        let mv = parse_movement("Bf1c4").unwrap();
        assert_eq!(mv.piece_type, PieceType::Bishop);
        assert_eq!(square("Bf1c4", Half::Source).unwrap(), pos("f1"));
        assert_eq!(square("Bf1c4", Half::Destination).unwrap(), pos("c4"));
    }

    #[test]
    fn piece_letter_is_case_sensitive() {
        assert!(matches!(
            piece_type("Xe2-e4"),
            Err(ParseError::Piece { letter: 'X', .. })
        ));
        // A lower-case leading letter is a file, so this is a pawn move.
        assert_eq!(piece_type("b2-b3").unwrap(), PieceType::Pawn);
    }

    #[test]
    fn destination_missing_rank_fails() {
        assert!(matches!(
            square("e2-e", Half::Destination),
            Err(ParseError::File { .. })
        ));
        assert!(matches!(parse_movement("e2-e"), Err(ParseError::File { .. })));
        assert!(matches!(parse_movement("e2e"), Err(ParseError::Length { .. })));
        assert!(matches!(parse_movement("e2-e9"), Err(ParseError::Rank { .. })));
        assert!(matches!(parse_movement(""), Err(ParseError::Empty)));
    }

    #[test]
    fn bad_separator_fails() {
        assert!(matches!(parse_movement("e2+e4"), Err(ParseError::Length { .. })));
    }

    #[test]
    fn placement_tokens() {
        let p = parse_placement("Kle1").unwrap();
        assert_eq!(p.piece_type, PieceType::King);
        assert_eq!(p.color, Color::White);
        assert_eq!(p.position, pos("e1"));

        let p = parse_placement("qdd8").unwrap();
        assert_eq!(p.piece_type, PieceType::Queen);
        assert_eq!(p.color, Color::Black);
        assert_eq!(p.position, pos("d8"));

        assert!(matches!(parse_placement("Kxe1"), Err(ParseError::Color { marker: 'x', .. })));
        assert!(matches!(parse_placement("Zle1"), Err(ParseError::Piece { .. })));
        assert!(matches!(parse_placement("Kle"), Err(ParseError::Length { .. })));
        assert!(matches!(parse_placement("Kle0"), Err(ParseError::Rank { .. })));
    }

    #[test]
    fn castle_tokens() {
        assert_eq!(parse_castle("O-O").unwrap(), CastleSide::KingSide);
        assert_eq!(parse_castle("O-O-O").unwrap(), CastleSide::QueenSide);
        assert!(parse_castle("0-0").is_err());
        assert!(!is_castle("e2-e4"));
    }
}
