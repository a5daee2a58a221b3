// Core notation and rule modules
pub mod board;
pub mod error;
pub mod moves;
pub mod notation;
pub mod piece;
pub mod position;

// Re-export main types for convenience
pub use board::{Board, Snapshot};
pub use error::ParseError;
pub use moves::MoveIntent;
pub use notation::{CastleSide, Half, Movement, Placement};
pub use piece::{Color, Piece, PieceType};
pub use position::Position;
