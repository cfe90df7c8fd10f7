use std::collections::VecDeque;
use std::io::{self, BufRead};

use crate::rooms::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Side),
    ListClues,
    ListAssociations,
    TopSuspect,
    Help,
    Quit,
    Unknown(char),
}

impl Command {
    /// Maps a command key, ignoring case.
    pub fn from_key(key: char) -> Self {
        match key.to_ascii_lowercase() {
            'l' => Command::Move(Side::Left),
            'r' => Command::Move(Side::Right),
            'c' => Command::ListClues,
            'a' => Command::ListAssociations,
            't' => Command::TopSuspect,
            'h' => Command::Help,
            'q' => Command::Quit,
            _ => Command::Unknown(key),
        }
    }
}

/// Pulls one command per non-whitespace character from line-based input,
/// so `l r` or `lr` on a single line are two moves.
pub struct CommandReader<R> {
    input: R,
    pending: VecDeque<char>,
}

impl<R: BufRead> CommandReader<R> {
    pub fn new(input: R) -> Self {
        CommandReader {
            input,
            pending: VecDeque::new(),
        }
    }

    /// `Ok(None)` at end of input.
    pub fn next_command(&mut self) -> io::Result<Option<Command>> {
        loop {
            while let Some(key) = self.pending.pop_front() {
                if !key.is_whitespace() {
                    return Ok(Some(Command::from_key(key)));
                }
            }
            // Bytes that aren't UTF-8 decode to U+FFFD and surface as unknown keys.
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(String::from_utf8_lossy(&line).chars());
        }
    }
}
