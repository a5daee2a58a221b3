//! Errors raised while decoding directive tokens.

/// A token that cannot be decoded into rank, file, piece or color fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty token")]
    Empty,

    #[error("token [{token}] has the wrong length")]
    Length { token: String },

    #[error("token [{token}] has no valid file at offset {offset}")]
    File { token: String, offset: usize },

    #[error("token [{token}] has no valid rank at offset {offset}")]
    Rank { token: String, offset: usize },

    #[error("unknown piece letter '{letter}' in [{token}]")]
    Piece { token: String, letter: char },

    #[error("unknown color marker '{marker}' in [{token}]")]
    Color { token: String, marker: char },

    #[error("[{token}] is not a castle")]
    Castle { token: String },
}
