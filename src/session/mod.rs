//! Interactive planning session.
//!
//! `Command` is what the user asked for; `Session::apply` turns it into a
//! state change and reports a `DispatchOutcome` for the front end to act on.

pub mod command;
pub mod state;

pub use command::{Command, SLOT_LOCK_UNSUPPORTED, help_text};
pub use state::{DispatchOutcome, Session, Stage};
