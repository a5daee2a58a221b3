//! Lexical classification of input lines.
//!
//! Nothing here knows the rules of chess: a line is sorted by the shape of
//! its tokens only, and the board decides later whether a directive is legal.

use once_cell::sync::Lazy;
use regex::Regex;

pub const COMMENT_MARKER: &str = "//";

static PLACEMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[KQBNRPkqbnrp][ldLD][a-hA-H][1-8]$").unwrap());
static MOVEMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[KQBNRP]?[a-hA-H][1-8][-x]?[a-hA-H][1-8]$").unwrap());
static CASTLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^O-O(-O)?$").unwrap());

/// At most one move per side on a line.
const MAX_ACTIONS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Placement(String),
    /// One or two movement tokens, White's first.
    Movement(Vec<String>),
    /// One or two action tokens of which at least one is a castle.
    Castle(Vec<String>),
    Comment,
    Unrecognized(String),
}

pub fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_MARKER) {
        Some(index) => &line[..index],
        None => line,
    }
}

pub fn is_placement(token: &str) -> bool {
    PLACEMENT_RE.is_match(token)
}

pub fn is_movement(token: &str) -> bool {
    MOVEMENT_RE.is_match(token)
}

pub fn is_castle(token: &str) -> bool {
    CASTLE_RE.is_match(token)
}

pub fn classify(line: &str) -> Line {
    let content = strip_comment(line).trim();
    if content.is_empty() {
        return Line::Comment;
    }

    let tokens: Vec<&str> = content.split_whitespace().collect();
    if let [token] = tokens.as_slice() {
        if is_placement(token) {
            return Line::Placement(token.to_string());
        }
    }

    let actions = tokens.len() <= MAX_ACTIONS
        && tokens.iter().all(|t| is_movement(t) || is_castle(t));
    if !actions {
        return Line::Unrecognized(content.to_string());
    }

    let owned = tokens.iter().map(|t| t.to_string()).collect();
    if tokens.iter().any(|t| is_castle(t)) {
        Line::Castle(owned)
    } else {
        Line::Movement(owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_are_stripped() {
        assert_eq!(classify("// opening"), Line::Comment);
        assert_eq!(classify("   "), Line::Comment);
        assert_eq!(classify("Kle1 // white king"), Line::Placement("Kle1".into()));
    }

    #[test]
    fn placement_shapes() {
        assert_eq!(classify("qdd8"), Line::Placement("qdd8".into()));
        assert_eq!(classify("  Pxa2  "), Line::Unrecognized("Pxa2".into()));
        assert!(matches!(classify("Kle1 Kde8"), Line::Unrecognized(_)));
    }

    #[test]
    fn movement_pairs() {
        assert_eq!(
            classify("e2-e4 e7-e5"),
            Line::Movement(vec!["e2-e4".into(), "e7-e5".into()])
        );
        assert_eq!(classify("Nb8xd7"), Line::Movement(vec!["Nb8xd7".into()]));
        assert_eq!(classify("Bf1c4"), Line::Movement(vec!["Bf1c4".into()]));
        assert!(matches!(classify("e2-e4 e7-e5 d2-d4"), Line::Unrecognized(_)));
        assert!(matches!(classify("e2-e"), Line::Unrecognized(_)));
    }

    #[test]
    fn files_in_either_case() {
        assert_eq!(classify("NB1-C3"), Line::Movement(vec!["NB1-C3".into()]));
        assert_eq!(classify("Nb1-C3 g8-F6"), Line::Movement(vec!["Nb1-C3".into(), "g8-F6".into()]));
    }

    #[test]
    fn castle_lines() {
        assert_eq!(
            classify("O-O O-O-O"),
            Line::Castle(vec!["O-O".into(), "O-O-O".into()])
        );
        assert_eq!(
            classify("e2-e4 O-O"),
            Line::Castle(vec!["e2-e4".into(), "O-O".into()])
        );
        assert_eq!(classify("O-O"), Line::Castle(vec!["O-O".into()]));
        assert!(matches!(classify("O-O-O-O"), Line::Unrecognized(_)));
    }
}
