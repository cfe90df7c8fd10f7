pub mod registry;

pub use registry::{Suspect, SuspectRegistry, TopSuspect};
