pub mod command;
pub mod render;

use anyhow::Result;
use crossterm::style::Color;
use std::io::{BufRead, Write};

use crate::clues::ClueTree;
use crate::rooms::{RoomGraph, RoomId};
use crate::scenario::Mansion;
use crate::suspects::SuspectRegistry;

pub use command::{Command, CommandReader};
pub use render::Painter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Exploring,
    Finished,
}

/// One investigation: the map, the clues picked up so far and the
/// suspects they point at.
pub struct Game {
    title: String,
    graph: RoomGraph,
    clues: ClueTree,
    registry: SuspectRegistry,
    current: Option<RoomId>,
    state: GameState,
    painter: Painter,
    started: bool,
}

impl Game {
    pub fn new(mansion: Mansion, painter: Painter) -> Self {
        let current = mansion.graph.root();
        Game {
            title: mansion.title,
            graph: mansion.graph,
            clues: ClueTree::new(),
            registry: SuspectRegistry::new(),
            current,
            state: GameState::Exploring,
            painter,
            started: false,
        }
    }

    pub fn current_room(&self) -> Option<RoomId> {
        self.current
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn clues(&self) -> &ClueTree {
        &self.clues
    }

    pub fn registry(&self) -> &SuspectRegistry {
        &self.registry
    }

    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }

    /// Plays until `q` or end of input, then prints the case summary.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        let mut reader = CommandReader::new(input);
        self.start(out)?;

        while self.state == GameState::Exploring {
            match reader.next_command()? {
                Some(command) => self.apply(command, out)?,
                None => {
                    tracing::debug!("end of input");
                    self.state = GameState::Finished;
                }
            }
        }

        render::summary(out, self.painter, &self.clues, &self.registry)?;
        out.flush()?;
        Ok(())
    }

    /// Shows the title and help, then enters the starting room.
    /// Only the first call does anything.
    pub fn start<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.started {
            return Ok(());
        }
        self.started = true;
        writeln!(out, "{}", self.painter.bold(&self.title, Color::Yellow))?;
        render::help(out, self.painter)?;
        self.enter_current(out)
    }

    pub fn apply<W: Write>(&mut self, command: Command, out: &mut W) -> Result<()> {
        self.start(out)?;
        tracing::debug!(?command, "command");
        let mut entered = false;
        match command {
            Command::Move(side) => {
                match self.current.and_then(|id| self.graph.child(id, side)) {
                    Some(next) => {
                        self.current = Some(next);
                        self.enter_current(out)?;
                        entered = true;
                    }
                    None => writeln!(out, "There is no room to the {side}.")?,
                }
            }
            Command::ListClues => render::clue_list(out, self.painter, &self.clues)?,
            Command::ListAssociations => render::associations(out, self.painter, &self.registry)?,
            Command::TopSuspect => render::top_suspect(out, self.painter, &self.registry)?,
            Command::Help => render::help(out, self.painter)?,
            Command::Quit => self.state = GameState::Finished,
            Command::Unknown(_) => writeln!(
                out,
                "{}",
                self.painter
                    .paint("Invalid command. Use 'h' for help.", Color::Red)
            )?,
        }
        if !entered && self.state == GameState::Exploring {
            render::prompt(out, self.painter)?;
        }
        Ok(())
    }

    /// Announces the room the player just walked into and picks up its clue.
    fn enter_current<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(id) = self.current else {
            writeln!(
                out,
                "\nYou are in a dead-end corridor. Use 'q' to leave or 'h' for help."
            )?;
            return Ok(());
        };

        let name = &self.graph.room(id).name;
        tracing::info!(room = %name, "entered room");
        writeln!(out, "\n[Room] {}", self.painter.bold(name, Color::White))?;

        if let Some(clue) = self.graph.collect(id, &mut self.clues, &mut self.registry) {
            writeln!(
                out,
                "{} {clue}",
                self.painter.paint("[Clue collected]", Color::Green)
            )?;
        }
        render::prompt(out, self.painter)?;
        Ok(())
    }
}
