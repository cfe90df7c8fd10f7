use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("scenario has no rooms")]
    Empty,

    #[error("room id `{0}` is defined more than once")]
    DuplicateRoom(String),

    #[error("root room `{0}` is not defined")]
    UnknownRoot(String),

    #[error("room `{room}` links to undefined room `{target}`")]
    UnknownChild { room: String, target: String },

    #[error("room `{0}` has more than one parent or is linked back to the root")]
    SharedRoom(String),

    #[error("room `{0}` cannot be reached from the root")]
    Unreachable(String),
}
