//! Calculator state for the two tools.
//!
//! Each calculator owns a state record with two modes. In defaults mode all
//! dependent fields are pinned to their [`crate::models`] value set and
//! edits are rejected; in custom mode every field is editable. Entering
//! defaults mode snaps the fields back to the defaults, leaving it keeps the
//! current values. Derived results are recomputed after every mutation.

mod holding;
mod managing_director;

use thiserror::Error;

pub use holding::{HoldingField, HoldingState};
pub use managing_director::{ManagingDirectorField, ManagingDirectorState};

/// Errors returned by state setters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    /// The field is disabled because defaults mode is active.
    #[error("'{0}' cannot be edited while average values are in use")]
    FieldLocked(&'static str),
}
