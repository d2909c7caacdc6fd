//! Command-line front-end for the color mixer.
//!
//! The binary wires configuration and logging together; the pieces it
//! drives live here so they can be tested without spawning a process:
//! [`command`] parses script lines, [`session`] applies them to a
//! [`MixerScreen`](colormix_core::MixerScreen) and [`render`] prints it.

pub mod command;
pub mod render;
pub mod session;

pub use command::{CommandError, LanguageChange, SessionCommand};
pub use session::{Flow, Session, SessionError, SessionSummary};
