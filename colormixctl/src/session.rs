//! Line-oriented driver for a [`MixerScreen`].
//!
//! Each command is applied to the screen as soon as it is read, one discrete
//! user action at a time. Failed commands are reported and counted but do
//! not end the session.

use std::io::{self, BufRead, Write};

use colormix_core::{MixError, MixerScreen};
use thiserror::Error;
use tracing::{debug, info};

use crate::command::{CommandError, LanguageChange, SessionCommand};
use crate::render::write_screen;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Mix(#[from] MixError),

    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

/// Whether the session keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Totals reported when a script finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub applied: usize,
    pub failed: usize,
}

#[derive(Debug)]
pub struct Session<W> {
    screen: MixerScreen,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(screen: MixerScreen, out: W) -> Self {
        Self { screen, out }
    }

    pub fn screen(&self) -> &MixerScreen {
        &self.screen
    }

    pub fn into_parts(self) -> (MixerScreen, W) {
        (self.screen, self.out)
    }

    pub fn apply(
        &mut self,
        command: SessionCommand,
    ) -> Result<Flow, SessionError> {
        debug!(?command, "applying command");
        match command {
            SessionCommand::Add { color, label } => match label {
                Some(label) => self.screen.add_labeled(color, label)?,
                None => self.screen.pick_color(color)?,
            },
            SessionCommand::Remove(index) => {
                self.screen.delete_row(index)?;
            }
            SessionCommand::Lang(LanguageChange::Set(language)) => {
                self.screen.set_language(language);
            }
            SessionCommand::Lang(LanguageChange::Toggle) => {
                self.screen.toggle_language();
            }
            SessionCommand::Clear => self.screen.clear(),
            SessionCommand::Show => {
                write_screen(&mut self.out, &self.screen)?;
            }
            SessionCommand::Quit => return Ok(Flow::Stop),
        }
        Ok(Flow::Continue)
    }

    /// Run every line of `input`, reporting failures to `errors` as
    /// `line N: message`. The screen is rendered once more at the end.
    pub fn run<R: BufRead, E: Write>(
        &mut self,
        input: R,
        mut errors: E,
    ) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        for (number, line) in input.lines().enumerate() {
            let line = line?;
            let outcome = SessionCommand::parse_line(&line)
                .map_err(SessionError::from)
                .and_then(|parsed| match parsed {
                    Some(command) => self.apply(command).map(Some),
                    None => Ok(None),
                });

            match outcome {
                Ok(Some(flow)) => {
                    summary.applied += 1;
                    if flow == Flow::Stop {
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    summary.failed += 1;
                    writeln!(errors, "line {}: {err}", number + 1)?;
                }
            }
        }

        write_screen(&mut self.out, &self.screen)?;
        info!(
            applied = summary.applied,
            failed = summary.failed,
            "session finished"
        );
        Ok(summary)
    }
}
