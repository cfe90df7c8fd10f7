pub mod error;
pub mod loader;
pub mod types;

pub use error::ScenarioError;
pub use loader::{default_mansion, load_mansion, Mansion};
