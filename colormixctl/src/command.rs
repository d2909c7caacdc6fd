use std::str::FromStr;

use colormix_model::{Color, ColorParseError, Language, UnknownLanguage};
use thiserror::Error;

/// Target of a `lang` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageChange {
    Set(Language),
    Toggle,
}

/// One line of a session script.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// `add <COLOR> [LABEL...]`; without a label the configured namer
    /// labels the color.
    Add { color: Color, label: Option<String> },
    /// `remove <INDEX>`
    Remove(usize),
    /// `lang [ru|en|toggle]`; bare `lang` toggles.
    Lang(LanguageChange),
    Show,
    Clear,
    Quit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("'{command}' takes no arguments")]
    UnexpectedArgument { command: &'static str },

    #[error("invalid color: {0}")]
    Color(#[from] ColorParseError),

    #[error("invalid row index '{0}'")]
    Index(String),

    #[error(transparent)]
    Language(#[from] UnknownLanguage),
}

impl SessionCommand {
    /// Parse a script line. Blank lines and lines starting with `#` yield
    /// `None`.
    pub fn parse_line(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for SessionCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandError::Unknown(String::new()));
        };
        let rest: Vec<&str> = words.collect();

        match verb.to_ascii_lowercase().as_str() {
            "add" => {
                let (color, label) =
                    rest.split_first().ok_or(CommandError::MissingArgument {
                        command: "add",
                        what: "a color",
                    })?;
                let label = (!label.is_empty()).then(|| label.join(" "));
                Ok(SessionCommand::Add {
                    color: color.parse()?,
                    label,
                })
            }
            "remove" | "rm" | "delete" => match rest.as_slice() {
                [index] => index
                    .parse()
                    .map(SessionCommand::Remove)
                    .map_err(|_| CommandError::Index(index.to_string())),
                [] => Err(CommandError::MissingArgument {
                    command: "remove",
                    what: "a row index",
                }),
                _ => Err(CommandError::Index(rest.join(" "))),
            },
            "lang" | "language" => match rest.as_slice() {
                [] | ["toggle"] => {
                    Ok(SessionCommand::Lang(LanguageChange::Toggle))
                }
                [code] => Ok(SessionCommand::Lang(LanguageChange::Set(
                    code.parse()?,
                ))),
                _ => Err(CommandError::Language(UnknownLanguage(
                    rest.join(" "),
                ))),
            },
            "show" => no_args("show", &rest, SessionCommand::Show),
            "clear" => no_args("clear", &rest, SessionCommand::Clear),
            "quit" | "exit" => no_args("quit", &rest, SessionCommand::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn no_args(
    command: &'static str,
    rest: &[&str],
    parsed: SessionCommand,
) -> Result<SessionCommand, CommandError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(CommandError::UnexpectedArgument { command })
    }
}
