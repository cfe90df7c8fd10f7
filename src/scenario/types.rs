use serde::Deserialize;

/// A mansion layout as written in a scenario file.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub title: Option<String>,
    /// Id of the room the player starts in.
    pub root: String,
    #[serde(default)]
    pub rooms: Vec<RoomSpec>,
}

#[derive(Debug, Deserialize)]
pub struct RoomSpec {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub clue: Option<String>,
    /// Suspects implicated by this room's clue, in listing order.
    #[serde(default)]
    pub suspects: Vec<String>,
    #[serde(default)]
    pub left: Option<String>,
    #[serde(default)]
    pub right: Option<String>,
}
