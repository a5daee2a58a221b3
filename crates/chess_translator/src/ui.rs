//! Numbered menus for interactive play.

use std::io::{self, BufRead, Write};

use chess_core::{CastleSide, Color, Piece, Position};

use crate::format;

/// Selection made from the piece menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Quit,
    Piece(usize),
    Castle(CastleSide),
}

pub struct UserInterface<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> UserInterface<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn show_board(&mut self, rows: &[String]) -> io::Result<()> {
        for row in rows {
            writeln!(self.output, "{row}")?;
        }
        Ok(())
    }

    pub fn inform(&mut self, color: Color) -> io::Result<()> {
        writeln!(self.output, "It is {color}'s turn.")
    }

    /// Lists the movable pieces followed by any available castles.
    pub fn choose_piece(&mut self, pieces: &[&Piece], castles: &[CastleSide]) -> io::Result<Choice> {
        let mut options: Vec<String> = pieces.iter().map(|p| format::piece_choice(p)).collect();
        options.extend(castles.iter().map(|&side| format::castle_choice(side)));

        let choice = match self.select("Which piece would you like to move?", &options)? {
            None => Choice::Quit,
            Some(index) if index < pieces.len() => Choice::Piece(index),
            Some(index) => Choice::Castle(castles[index - pieces.len()]),
        };
        Ok(choice)
    }

    pub fn choose_move(&mut self, moves: &[Position]) -> io::Result<Option<Position>> {
        let options: Vec<String> = moves.iter().map(|&pos| format::square(pos)).collect();
        Ok(self
            .select("Where would you like to move it?", &options)?
            .map(|index| moves[index]))
    }

    /// Shows a menu with `0` as quit. Returns the zero based option index,
    /// or `None` for quit and end of input.
    fn select(&mut self, question: &str, options: &[String]) -> io::Result<Option<usize>> {
        writeln!(self.output, "{question}")?;
        writeln!(self.output, "0. Quit")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "{}. {option}", i + 1)?;
        }

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match line.trim().parse::<usize>() {
                Ok(0) => return Ok(None),
                Ok(n) if n <= options.len() => return Ok(Some(n - 1)),
                _ => writeln!(self.output, "Please enter a number from 0 to {}.", options.len())?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
