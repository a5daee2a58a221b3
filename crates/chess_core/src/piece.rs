use std::fmt;

use crate::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank the pieces of this color start on, zero based.
    pub fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    pub fn white_glyph(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    pub fn black_glyph(self) -> char {
        self.white_glyph().to_ascii_lowercase()
    }

    pub fn glyph(self, color: Color) -> char {
        match color {
            Color::White => self.white_glyph(),
            Color::Black => self.black_glyph(),
        }
    }

    /// Case-sensitive lookup against the white glyphs.
    pub fn from_white_glyph(glyph: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.white_glyph() == glyph)
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceType::Pawn => "Pawn",
            PieceType::Knight => "Knight",
            PieceType::Bishop => "Bishop",
            PieceType::Rook => "Rook",
            PieceType::Queen => "Queen",
            PieceType::King => "King",
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
    position: Position,
    has_moved: bool,
}

impl Piece {
    pub fn new(piece_type: PieceType, color: Color, position: Position) -> Self {
        Self {
            piece_type,
            color,
            position,
            has_moved: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    pub fn glyph(&self) -> char {
        self.piece_type.glyph(self.color)
    }

    /// Records a relocation. The moved flag never resets.
    pub(crate) fn relocate(&mut self, to: Position) {
        self.position = to;
        self.has_moved = true;
    }
}
