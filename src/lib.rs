//! Mansion Mystery: walk a fixed tree of rooms, pick up clues, and see
//! which suspect the evidence keeps pointing at.
//!
//! - `clues` - collected clues, kept sorted in a binary search tree
//! - `suspects` - hashed suspect table with per-suspect clue sets
//! - `rooms` - the mansion map and clue collection
//! - `scenario` - TOML scenario files and map construction
//! - `game` - the command loop and its text output

pub mod clues;
pub mod game;
pub mod rooms;
pub mod scenario;
pub mod suspects;

pub use clues::ClueTree;
pub use game::Game;
pub use rooms::RoomGraph;
pub use suspects::SuspectRegistry;
