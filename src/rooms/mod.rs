pub mod graph;

pub use graph::{Room, RoomGraph, RoomId, Side};
