pub mod calculations;
pub mod format;
pub mod models;
pub mod state;

pub use models::*;
pub use state::{HoldingField, HoldingState, ManagingDirectorField, ManagingDirectorState, StateError};
