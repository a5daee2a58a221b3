use std::io::{self, BufRead, Write};

use log::{debug, info};

use chess_core::{notation, Board, CastleSide, Color, MoveIntent, Movement, Position};

use crate::{
    directive::{self, Line},
    error::TranslatorResult,
    format,
    game_log::GameLog,
    ui::{Choice, UserInterface},
};

/// Drives one session: owns the board, knows whose turn it is, and writes
/// every outcome to the game log.
pub struct Translator<W: Write> {
    board: Board,
    log: GameLog<W>,
    turn: Color,
    movement_begun: bool,
}

impl<W: Write> Translator<W> {
    pub fn new(log: GameLog<W>) -> Self {
        Self {
            board: Board::new(),
            log,
            turn: Color::White,
            movement_begun: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side that plays the next action.
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn log(&mut self) -> &mut GameLog<W> {
        &mut self.log
    }

    pub fn into_log(self) -> GameLog<W> {
        self.log
    }

    pub fn translate_reader<R: BufRead>(&mut self, mut reader: R) -> TranslatorResult<()> {
        let mut buf = Vec::new();
        let mut number = 0;
        while let Some(line) = next_line(&mut reader, &mut buf)? {
            number += 1;
            debug!("line {number}: {}", line.trim());
            self.process_line(&line)?;
        }
        Ok(())
    }

    /// Feeds placement directives that establish the starting position.
    pub fn load_setup<R: BufRead>(&mut self, mut reader: R) -> TranslatorResult<()> {
        let mut buf = Vec::new();
        while let Some(line) = next_line(&mut reader, &mut buf)? {
            match directive::classify(&line) {
                Line::Placement(token) => self.place(&token)?,
                Line::Comment => {}
                _ => {
                    log::warn!("setup line is not a placement: {}", line.trim());
                    self.log.write_line(&format::unrecognized(line.trim()))?;
                }
            }
        }
        info!("setup complete with {} pieces", self.board.piece_count());
        Ok(())
    }

    pub fn process_line(&mut self, line: &str) -> TranslatorResult<()> {
        match directive::classify(line) {
            Line::Comment => {}
            Line::Placement(token) => {
                if self.movement_begun {
                    self.log.write_line(&format::skipped_placement(&token))?;
                } else {
                    self.place(&token)?;
                }
            }
            Line::Movement(tokens) | Line::Castle(tokens) => {
                for token in &tokens {
                    self.play_action(token)?;
                }
            }
            Line::Unrecognized(content) => {
                self.log.write_line(&format::unrecognized(&content))?;
            }
        }
        Ok(())
    }

    fn place(&mut self, token: &str) -> TranslatorResult<()> {
        match self.board.add_new_piece(token) {
            Ok(placement) => self.log.write_line(&format::placement(token, &placement))?,
            Err(err) => self.log.write_line(&format::parse_error(token, &err))?,
        }
        Ok(())
    }

    /// Plays one movement or castle token for the side to move. The turn
    /// passes whether or not the action was legal.
    fn play_action(&mut self, token: &str) -> TranslatorResult<()> {
        self.movement_begun = true;
        if directive::is_castle(token) {
            self.play_castle(token)?;
        } else {
            self.play_movement(token)?;
        }
        self.turn = self.turn.opposite();
        Ok(())
    }

    fn play_movement(&mut self, token: &str) -> TranslatorResult<()> {
        let movement = match notation::parse_movement(token) {
            Ok(movement) => movement,
            Err(err) => {
                self.log.write_line(&format::parse_error(token, &err))?;
                return Ok(());
            }
        };

        let captured = self.board.piece_at(movement.to).copied();
        if self.board.apply_movement(&movement, self.turn) {
            let line = format::movement(token, &movement, self.turn, captured.as_ref());
            self.log.write_line(&line)?;
            self.write_board()?;
        } else {
            let line = format::invalid_movement(&self.board, token, &movement, self.turn);
            self.log.write_line(&line)?;
        }
        Ok(())
    }

    fn play_castle(&mut self, token: &str) -> TranslatorResult<()> {
        let side = match notation::parse_castle(token) {
            Ok(side) => side,
            Err(err) => {
                self.log.write_line(&format::parse_error(token, &err))?;
                return Ok(());
            }
        };

        if self.board.can_castle(side, self.turn) {
            self.board.castle_side(self.turn, side);
            self.log.write_line(&format::castle(token, side, self.turn))?;
            self.write_board()?;
        } else {
            self.log.write_line(&format::invalid_castle(token, self.turn))?;
        }
        Ok(())
    }

    /// Lets the console pick moves until someone quits, the side to move is
    /// stuck, or the board is empty.
    pub fn run_interactive<R: BufRead, O: Write>(
        &mut self,
        ui: &mut UserInterface<R, O>,
    ) -> TranslatorResult<()> {
        info!("entering interactive mode");
        loop {
            if !self.board.is_playable() {
                self.log.write_line("Process: The board is empty.")?;
                break;
            }

            ui.show_board(&format::board(&self.board))?;
            ui.inform(self.turn)?;
            let castles: Vec<CastleSide> = [CastleSide::KingSide, CastleSide::QueenSide]
                .into_iter()
                .filter(|&side| self.board.can_castle(side, self.turn))
                .collect();
            let pieces = self.board.movable_pieces(self.turn);
            if pieces.is_empty() && castles.is_empty() {
                self.log
                    .write_line(&format!("Process: {} has no piece that can move.", self.turn))?;
                break;
            }

            let intent = match ui.choose_piece(&pieces, &castles)? {
                Choice::Quit => break,
                Choice::Castle(side) => MoveIntent::Castle(side),
                Choice::Piece(index) => {
                    let piece = *pieces[index];
                    let moves: Vec<Position> = piece.reachable(&self.board, true).into_iter().collect();
                    match ui.choose_move(&moves)? {
                        Some(to) => MoveIntent::Move {
                            from: piece.position(),
                            to,
                        },
                        None => break,
                    }
                }
            };

            self.play_intent(intent)?;
            self.movement_begun = true;
            self.turn = self.turn.opposite();
        }

        self.write_board()
    }

    fn play_intent(&mut self, intent: MoveIntent) -> TranslatorResult<()> {
        match intent {
            MoveIntent::Castle(side) => {
                if self.board.apply_intent(&intent, self.turn) {
                    self.log
                        .write_line(&format::castle(side.notation(), side, self.turn))?;
                    self.write_board()?;
                } else {
                    self.log
                        .write_line(&format::invalid_castle(side.notation(), self.turn))?;
                }
            }
            MoveIntent::Move { from, to } => {
                let piece_type = match self.board.piece_at(from) {
                    Some(piece) => piece.piece_type,
                    None => return Ok(()),
                };
                let captured = self.board.piece_at(to).copied();
                let movement = Movement {
                    piece_type,
                    from,
                    to,
                    capture: captured.is_some(),
                };
                let token = format::movement_token(&movement);
                if self.board.apply_intent(&intent, self.turn) {
                    let line = format::movement(&token, &movement, self.turn, captured.as_ref());
                    self.log.write_line(&line)?;
                    self.write_board()?;
                } else {
                    let line = format::invalid_movement(&self.board, &token, &movement, self.turn);
                    self.log.write_line(&line)?;
                }
            }
        }
        Ok(())
    }

    pub fn write_board(&mut self) -> TranslatorResult<()> {
        self.log.write_lines(format::board(&self.board))?;
        Ok(())
    }

    pub fn shutdown(&mut self) -> TranslatorResult<()> {
        self.log.write_line("Process: Closing Files.")?;
        self.log.flush()?;
        Ok(())
    }
}

/// Next line without its terminator. Bytes that are not UTF-8 are replaced
/// so a damaged line is reported on its own instead of ending the session.
fn next_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(buf);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
