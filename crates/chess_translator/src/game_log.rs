use std::{
    fs::File,
    io::{self, BufWriter, Stdout, Write},
    path::Path,
};

use crate::error::{TranslatorError, TranslatorResult};

/// The user-facing record of a session: every placement, move, rejection and
/// board diagram ends up here, one line at a time.
pub struct GameLog<W: Write> {
    out: W,
}

impl<W: Write> GameLog<W> {
    pub fn new(out: W) -> io::Result<Self> {
        let mut log = Self { out };
        log.write_line("Process: Log file Initialized.")?;
        Ok(log)
    }

    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        log::trace!("{line}");
        writeln!(self.out, "{line}")
    }

    pub fn write_lines<I, S>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.write_line(line.as_ref())?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl GameLog<BufWriter<File>> {
    pub fn create(path: &Path) -> TranslatorResult<Self> {
        let file = File::create(path).map_err(|source| TranslatorError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file))?)
    }
}

impl GameLog<Stdout> {
    pub fn stdout() -> io::Result<Self> {
        Self::new(io::stdout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_then_lines() {
        let mut log = GameLog::new(Vec::new()).unwrap();
        log.write_lines(["a", "b"]).unwrap();
        let text = String::from_utf8(log.into_inner()).unwrap();
        assert_eq!(text, "Process: Log file Initialized.\na\nb\n");
    }

    #[test]
    fn file_log_is_buffered_until_flush() {
        let path = std::env::temp_dir().join(format!("chess-notation-{}.log", std::process::id()));
        let mut log = GameLog::create(&path).unwrap();
        log.write_line("Process: Closing Files.").unwrap();
        log.flush().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(text, "Process: Log file Initialized.\nProcess: Closing Files.\n");
    }

    #[test]
    fn missing_directory_names_the_path() {
        let path = std::env::temp_dir().join("chess-notation-missing").join("game.log");
        match GameLog::create(&path) {
            Err(TranslatorError::Create { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }
}
