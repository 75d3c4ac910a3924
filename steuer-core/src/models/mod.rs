mod defaults;

pub use defaults::{DefaultsError, HoldingDefaults, ManagingDirectorDefaults};
