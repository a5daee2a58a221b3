//! Line-oriented driver around `chess_core`: classifies input lines, feeds
//! directives to the board and writes a readable game log.

pub mod directive;
pub mod error;
pub mod format;
pub mod game_log;
pub mod setup;
pub mod translator;
pub mod ui;

pub use directive::{classify, Line};
pub use error::{TranslatorError, TranslatorResult};
pub use game_log::GameLog;
pub use translator::Translator;
pub use ui::{Choice, UserInterface};
