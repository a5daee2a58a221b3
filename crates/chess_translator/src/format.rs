//! Human-readable log lines and the text board diagram.

use chess_core::{
    notation, position::BOARD_SIZE, Board, CastleSide, Color, Movement, ParseError, Piece, PieceType,
    Placement, Position,
};

pub const FILE_FOOTER: &str = "  A B C D E F G H ";

/// Square in log form, e.g. `E4`.
pub fn square(pos: Position) -> String {
    format!("{}{}", pos.file_letter(), pos.rank() + 1)
}

fn side(side: CastleSide) -> &'static str {
    match side {
        CastleSide::KingSide => "king side",
        CastleSide::QueenSide => "queen side",
    }
}

/// Movement token for a move chosen from a menu, e.g. `Nb1-c3`.
pub fn movement_token(movement: &Movement) -> String {
    let letter = match movement.piece_type {
        PieceType::Pawn => String::new(),
        other => other.white_glyph().to_string(),
    };
    let separator = if movement.capture { notation::CAPTURE_MARKER } else { '-' };
    format!("{letter}{}{separator}{}", movement.from, movement.to)
}

pub fn placement(token: &str, placement: &Placement) -> String {
    format!(
        "Placement: Adding [{token}] {} {} on {}",
        placement.color,
        placement.piece_type,
        square(placement.position)
    )
}

pub fn skipped_placement(line: &str) -> String {
    format!("Warning: Skipping [{line}]. Movement has begun.")
}

pub fn movement(token: &str, movement: &Movement, color: Color, captured: Option<&Piece>) -> String {
    let mut line = format!(
        "Movement: [{token}] {color} {} moves from {} to {}",
        movement.piece_type,
        square(movement.from),
        square(movement.to)
    );
    if let Some(victim) = captured {
        line.push_str(&format!(" capturing the {} {}", victim.color, victim.piece_type));
    }
    line
}

pub fn invalid_movement(board: &Board, token: &str, movement: &Movement, color: Color) -> String {
    let found = match board.piece_at(movement.from) {
        Some(piece) => format!("holds a {} {}", piece.color, piece.piece_type),
        None => "is empty".to_string(),
    };
    format!(
        "Error: [{token}] {color} cannot move a {} from {} to {}; {} {found}.",
        movement.piece_type,
        square(movement.from),
        square(movement.to),
        square(movement.from)
    )
}

pub fn castle(token: &str, castle_side: CastleSide, color: Color) -> String {
    format!("Castle: [{token}] {color} castles {}", side(castle_side))
}

pub fn invalid_castle(token: &str, color: Color) -> String {
    format!("Error: [{token}] This castle is impossible at this time for {color}.")
}

pub fn unrecognized(line: &str) -> String {
    format!("Error: [{line}] is not a valid directive.")
}

pub fn parse_error(token: &str, err: &ParseError) -> String {
    format!("Error: [{token}] could not be read: {err}")
}

pub fn piece_choice(piece: &Piece) -> String {
    format!("{} at {}", piece.piece_type, square(piece.position()))
}

pub fn castle_choice(castle_side: CastleSide) -> String {
    format!("Castle {} ({})", side(castle_side), castle_side.notation())
}

/// Rows from rank 8 down to rank 1, then the file letters.
pub fn board(board: &Board) -> Vec<String> {
    let snapshot = board.snapshot();
    let mut rows = Vec::with_capacity(BOARD_SIZE as usize + 1);
    for (rank, cells) in snapshot.iter().enumerate().rev() {
        let mut row = format!("{}|", rank + 1);
        for cell in cells {
            row.push(match cell {
                Some((color, piece_type)) => piece_type.glyph(*color),
                None => ' ',
            });
            row.push('|');
        }
        rows.push(row);
    }
    rows.push(FILE_FOOTER.to_string());
    rows
}
