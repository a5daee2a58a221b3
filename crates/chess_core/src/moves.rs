use std::collections::BTreeSet;

use crate::{notation::CastleSide, piece::Color, Board, Piece, PieceType, Position};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// What a side wants to do with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveIntent {
    Move { from: Position, to: Position },
    Castle(CastleSide),
}

impl Piece {
    /// Squares this piece can reach on `board` by its own movement rule.
    /// Check is never considered. Computed fresh on every call.
    pub fn reachable(&self, board: &Board, capture_allowed: bool) -> BTreeSet<Position> {
        let from = self.position();
        match self.piece_type {
            PieceType::Pawn => pawn_moves(from, self.color, self.has_moved(), board, capture_allowed),
            PieceType::Knight => step_moves(from, self.color, &KNIGHT_OFFSETS, board),
            PieceType::Bishop => slide_moves(from, self.color, &DIAGONALS, board),
            PieceType::Rook => slide_moves(from, self.color, &ORTHOGONALS, board),
            PieceType::Queen => {
                let mut moves = slide_moves(from, self.color, &ORTHOGONALS, board);
                moves.extend(slide_moves(from, self.color, &DIAGONALS, board));
                moves
            }
            PieceType::King => step_moves(from, self.color, &KING_OFFSETS, board),
        }
    }
}

fn pawn_moves(
    from: Position,
    color: Color,
    has_moved: bool,
    board: &Board,
    capture_allowed: bool,
) -> BTreeSet<Position> {
    let (direction, home_rank) = match color {
        Color::White => (1, 1),
        Color::Black => (-1, 6),
    };
    let mut moves = BTreeSet::new();

    // Forward movement
    if let Some(one) = from.offset(direction, 0).filter(|p| board.piece_at(*p).is_none()) {
        moves.insert(one);
        if !has_moved && from.rank() == home_rank {
            if let Some(two) = from.offset(2 * direction, 0).filter(|p| board.piece_at(*p).is_none()) {
                moves.insert(two);
            }
        }
    }

    // Diagonal captures
    if capture_allowed {
        for file_delta in [-1, 1] {
            if let Some(target) = from.offset(direction, file_delta) {
                if board.piece_at(target).is_some_and(|p| p.color != color) {
                    moves.insert(target);
                }
            }
        }
    }

    moves
}

fn step_moves(from: Position, color: Color, offsets: &[(i8, i8)], board: &Board) -> BTreeSet<Position> {
    offsets
        .iter()
        .filter_map(|&(dr, df)| from.offset(dr, df))
        .filter(|&to| board.piece_at(to).map_or(true, |p| p.color != color))
        .collect()
}

fn slide_moves(from: Position, color: Color, directions: &[(i8, i8)], board: &Board) -> BTreeSet<Position> {
    let mut moves = BTreeSet::new();
    for &(dr, df) in directions {
        let mut current = from;
        while let Some(next) = current.offset(dr, df) {
            match board.piece_at(next) {
                None => {
                    moves.insert(next);
                    current = next;
                }
                Some(occupant) => {
                    if occupant.color != color {
                        moves.insert(next);
                    }
                    break;
                }
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Placement;

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    fn board_with(pieces: &[(PieceType, Color, &str)]) -> Board {
        let mut board = Board::new();
        for &(piece_type, color, square) in pieces {
            board.place(Placement {
                piece_type,
                color,
                position: pos(square),
            });
        }
        board
    }

    fn squares(list: &[&str]) -> BTreeSet<Position> {
        list.iter().map(|s| pos(s)).collect()
    }

    #[test]
    fn pawn_single_and_double_step() {
        let board = board_with(&[(PieceType::Pawn, Color::White, "e2")]);
        let pawn = board.piece_at(pos("e2")).unwrap();
        assert_eq!(pawn.reachable(&board, false), squares(&["e3", "e4"]));
    }

    #[test]
    fn pawn_blocked_cannot_jump() {
        let board = board_with(&[
            (PieceType::Pawn, Color::Black, "d7"),
            (PieceType::Knight, Color::White, "d6"),
        ]);
        let pawn = board.piece_at(pos("d7")).unwrap();
        assert!(pawn.reachable(&board, true).is_empty());
    }

    #[test]
    fn pawn_diagonals_need_capture_flag_and_opponent() {
        let board = board_with(&[
            (PieceType::Pawn, Color::White, "e4"),
            (PieceType::Pawn, Color::Black, "d5"),
            (PieceType::Pawn, Color::White, "f5"),
        ]);
        let pawn = board.piece_at(pos("e4")).unwrap();
        // Off its home rank, so no double step even though it never moved.
        assert_eq!(pawn.reachable(&board, false), squares(&["e5"]));
        assert_eq!(pawn.reachable(&board, true), squares(&["e5", "d5"]));
    }

    #[test]
    fn black_pawn_moves_down() {
        let board = board_with(&[(PieceType::Pawn, Color::Black, "c7")]);
        let pawn = board.piece_at(pos("c7")).unwrap();
        assert_eq!(pawn.reachable(&board, false), squares(&["c6", "c5"]));
    }

    #[test]
    fn knight_offsets_skip_own_pieces() {
        let board = board_with(&[
            (PieceType::Knight, Color::White, "b1"),
            (PieceType::Pawn, Color::White, "d2"),
            (PieceType::Pawn, Color::Black, "c3"),
        ]);
        let knight = board.piece_at(pos("b1")).unwrap();
        assert_eq!(knight.reachable(&board, true), squares(&["a3", "c3"]));
    }

    #[test]
    fn rook_stops_before_own_piece() {
        let board = board_with(&[
            (PieceType::Rook, Color::White, "d1"),
            (PieceType::Pawn, Color::White, "d4"),
        ]);
        let rook = board.piece_at(pos("d1")).unwrap();
        let moves = rook.reachable(&board, true);
        assert!(moves.contains(&pos("d2")));
        assert!(moves.contains(&pos("d3")));
        assert!(!moves.contains(&pos("d4")));
        assert!(!moves.contains(&pos("d5")));
    }

    #[test]
    fn bishop_includes_first_opponent_only() {
        let board = board_with(&[
            (PieceType::Bishop, Color::Black, "c8"),
            (PieceType::Pawn, Color::White, "e6"),
            (PieceType::Pawn, Color::White, "f5"),
        ]);
        let bishop = board.piece_at(pos("c8")).unwrap();
        assert_eq!(
            bishop.reachable(&board, true),
            squares(&["b7", "a6", "d7", "e6"])
        );
    }

    #[test]
    fn queen_combines_both_slides() {
        let board = board_with(&[(PieceType::Queen, Color::White, "a1")]);
        let queen = board.piece_at(pos("a1")).unwrap();
        // 7 up the file, 7 along the rank, 7 on the long diagonal
        assert_eq!(queen.reachable(&board, true).len(), 21);
    }

    #[test]
    fn king_neighbours() {
        let board = board_with(&[
            (PieceType::King, Color::White, "e1"),
            (PieceType::Pawn, Color::White, "e2"),
            (PieceType::Pawn, Color::Black, "d2"),
        ]);
        let king = board.piece_at(pos("e1")).unwrap();
        assert_eq!(
            king.reachable(&board, true),
            squares(&["d1", "f1", "d2", "f2"])
        );
    }

    #[test]
    fn reachable_is_idempotent() {
        let board = board_with(&[
            (PieceType::Queen, Color::White, "d4"),
            (PieceType::Pawn, Color::Black, "d7"),
            (PieceType::Pawn, Color::White, "f6"),
        ]);
        let queen = board.piece_at(pos("d4")).unwrap();
        assert_eq!(queen.reachable(&board, true), queen.reachable(&board, true));
    }
}
