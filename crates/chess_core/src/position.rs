use std::fmt;

pub const BOARD_SIZE: u8 = 8;

/// A square on the board. Both coordinates are zero based: rank 0 is the
/// first rank and file 0 is the A file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    rank: u8, // 0-7
    file: u8, // a-h (0-7)
}

impl Position {
    pub fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < BOARD_SIZE && file < BOARD_SIZE {
            Some(Self { rank, file })
        } else {
            None
        }
    }

    /// For coordinates the caller already knows are on the board.
    pub(crate) const fn at(rank: u8, file: u8) -> Self {
        assert!(rank < BOARD_SIZE && file < BOARD_SIZE);
        Self { rank, file }
    }

    /// Offsets the square, returning `None` when the result leaves the board.
    pub fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Self> {
        let rank = self.rank as i8 + rank_delta;
        let file = self.file as i8 + file_delta;
        if (0..BOARD_SIZE as i8).contains(&rank) && (0..BOARD_SIZE as i8).contains(&file) {
            Some(Self {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    pub fn from_algebraic(notation: &str) -> Option<Self> {
        let mut chars = notation.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file.to_ascii_lowercase(), rank),
            _ => return None,
        };

        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }

        Some(Self {
            rank: (rank as u8) - b'1',
            file: (file as u8) - b'a',
        })
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn file(&self) -> u8 {
        self.file
    }

    /// Upper-case file letter, as used in log output ("E4").
    pub fn file_letter(&self) -> char {
        (b'A' + self.file) as char
    }

    /// Every square, rank by rank starting from the first rank.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Position { rank, file }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}
