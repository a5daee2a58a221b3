use log::{debug, warn};

use crate::{
    moves::MoveIntent,
    notation::{self, CastleSide, Movement, Placement},
    piece::{Color, PieceType},
    position::BOARD_SIZE,
    ParseError, Piece, Position,
};

const SIZE: usize = BOARD_SIZE as usize;
const KING_FILE: u8 = 4;

/// Read-only view of every cell, indexed `[rank][file]`.
pub type Snapshot = [[Option<(Color, PieceType)>; SIZE]; SIZE];

#[derive(Debug, Clone, Default)]
pub struct Board {
    cells: [[Option<Piece>; SIZE]; SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.cells[pos.rank() as usize][pos.file() as usize].as_ref()
    }

    fn cell_mut(&mut self, pos: Position) -> &mut Option<Piece> {
        &mut self.cells[pos.rank() as usize][pos.file() as usize]
    }

    /// Occupied cells in rank-then-file order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.cells.iter().flatten().flatten()
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// True while at least one piece is on the board.
    pub fn is_playable(&self) -> bool {
        self.pieces().next().is_some()
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = [[None; SIZE]; SIZE];
        for piece in self.pieces() {
            let pos = piece.position();
            snapshot[pos.rank() as usize][pos.file() as usize] = Some((piece.color, piece.piece_type));
        }
        snapshot
    }

    /// Parses a placement token and stores the new piece. Setup data is
    /// trusted, so an existing occupant is simply replaced.
    pub fn add_new_piece(&mut self, token: &str) -> Result<Placement, ParseError> {
        let placement = notation::parse_placement(token)?;
        self.place(placement);
        Ok(placement)
    }

    pub fn place(&mut self, placement: Placement) {
        let piece = Piece::new(placement.piece_type, placement.color, placement.position);
        *self.cell_mut(placement.position) = Some(piece);
    }

    /// Plays a movement token for `color`. `Ok(false)` means the move was
    /// rejected and the board is unchanged.
    pub fn move_piece(&mut self, token: &str, color: Color) -> Result<bool, ParseError> {
        let movement = notation::parse_movement(token)?;
        Ok(self.apply_movement(&movement, color))
    }

    pub fn apply_movement(&mut self, movement: &Movement, color: Color) -> bool {
        let piece = match self.piece_at(movement.from) {
            Some(piece) => *piece,
            None => {
                debug!("no piece on {}", movement.from);
                return false;
            }
        };

        if piece.color != color || piece.piece_type != movement.piece_type {
            debug!(
                "{} is a {} {}, expected a {} {}",
                movement.from, piece.color, piece.piece_type, color, movement.piece_type
            );
            return false;
        }

        // Capture marker must agree with destination occupancy
        match self.piece_at(movement.to) {
            Some(occupant) if !movement.capture || occupant.color == color => {
                debug!("{} is occupied by a {} {}", movement.to, occupant.color, occupant.piece_type);
                return false;
            }
            None if movement.capture => {
                debug!("capture marked but {} is empty", movement.to);
                return false;
            }
            _ => {}
        }

        if !piece.reachable(self, movement.capture).contains(&movement.to) {
            debug!("{} {} cannot reach {}", color, piece.piece_type, movement.to);
            return false;
        }

        self.relocate(movement.from, movement.to);
        true
    }

    /// Moves the occupant of `from` to `to`, returning whatever was captured.
    fn relocate(&mut self, from: Position, to: Position) -> Option<Piece> {
        let mut piece = self.cell_mut(from).take()?;
        piece.relocate(to);
        self.cell_mut(to).replace(piece)
    }

    /// Applies an intent chosen interactively. The capture flag of a plain
    /// move follows destination occupancy.
    pub fn apply_intent(&mut self, intent: &MoveIntent, color: Color) -> bool {
        match *intent {
            MoveIntent::Move { from, to } => {
                let piece_type = match self.piece_at(from) {
                    Some(piece) => piece.piece_type,
                    None => return false,
                };
                let movement = Movement {
                    piece_type,
                    from,
                    to,
                    capture: self.piece_at(to).is_some(),
                };
                self.apply_movement(&movement, color)
            }
            MoveIntent::Castle(side) => {
                if !self.can_castle(side, color) {
                    return false;
                }
                self.castle_side(color, side);
                true
            }
        }
    }

    /// Pieces of `color` that can go somewhere, capture included.
    pub fn movable_pieces(&self, color: Color) -> Vec<&Piece> {
        self.pieces()
            .filter(|p| p.color == color && !p.reachable(self, true).is_empty())
            .collect()
    }

    pub fn is_valid_castle(&self, token: &str, color: Color) -> Result<bool, ParseError> {
        let side = notation::parse_castle(token)?;
        Ok(self.can_castle(side, color))
    }

    /// Castling needs the king and rook on their home squares, the squares
    /// between them empty, and at least one of the two still unmoved.
    pub fn can_castle(&self, side: CastleSide, color: Color) -> bool {
        let king_home = king_home(color);
        let rook_home = rook_home(color, side);

        let (king, rook) = match (self.piece_at(king_home), self.piece_at(rook_home)) {
            (Some(king), Some(rook)) => (king, rook),
            _ => {
                debug!("{color} {side:?} castle: king or rook missing");
                return false;
            }
        };

        if king.piece_type != PieceType::King
            || rook.piece_type != PieceType::Rook
            || king.color != color
            || rook.color != color
        {
            debug!("{color} {side:?} castle: home squares hold the wrong pieces");
            return false;
        }

        // Permissive: one unmoved participant is enough.
        if king.has_moved() && rook.has_moved() {
            debug!("{color} {side:?} castle: king and rook have both moved");
            return false;
        }

        let (low, high) = if king_home.file() < rook_home.file() {
            (king_home.file(), rook_home.file())
        } else {
            (rook_home.file(), king_home.file())
        };
        let rank = color.back_rank();
        let blocked = (low + 1..high).any(|file| self.piece_at(Position::at(rank, file)).is_some());
        if blocked {
            debug!("{color} {side:?} castle: path is not clear");
        }
        !blocked
    }

    /// Executes a castle without re-validating it.
    pub fn castle(&mut self, color: Color, token: &str) -> Result<(), ParseError> {
        let side = notation::parse_castle(token)?;
        self.castle_side(color, side);
        Ok(())
    }

    pub fn castle_side(&mut self, color: Color, side: CastleSide) {
        let king_from = king_home(color);
        let rook_from = rook_home(color, side);
        if self.piece_at(king_from).is_none() || self.piece_at(rook_from).is_none() {
            warn!("{color} {side:?} castle requested without king and rook in place");
            return;
        }

        let rank = color.back_rank();
        let (king_file, rook_file) = match side {
            CastleSide::KingSide => (KING_FILE + 2, KING_FILE + 1),
            CastleSide::QueenSide => (KING_FILE - 2, KING_FILE - 1),
        };
        self.relocate(king_from, Position::at(rank, king_file));
        self.relocate(rook_from, Position::at(rank, rook_file));
    }
}

fn king_home(color: Color) -> Position {
    Position::at(color.back_rank(), KING_FILE)
}

fn rook_home(color: Color, side: CastleSide) -> Position {
    let file = match side {
        CastleSide::KingSide => BOARD_SIZE - 1,
        CastleSide::QueenSide => 0,
    };
    Position::at(color.back_rank(), file)
}
