use adtouch_bridge::{
    MessageToBackend,
    update::{Origin, UpdateAvailable, UpdateInstalled},
};

/// Errors produced while parsing a console line.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}`, type `help` for the list of commands")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

const AVAILABLE_USAGE: &str = "available <origin>[@<version>] <message...>";
const INSTALLED_USAGE: &str = "installed <origin>";

pub const HELP: &str = "\
commands:
  available <origin>[@<version>] <message...>  an update became available
  installed <origin>                           an update finished installing
  close | dismiss                              press the panel's close button
  panel                                        show the panel
  versions                                     show the latest known versions
  config                                       show the active configuration
  help                                         show this message
  quit                                         exit";

/// A parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward a message to the backend.
    Backend(MessageToBackend),
    Help,
    Quit,
    /// Blank line.
    Nothing,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let Some((verb, rest)) = split_word(line) else {
            return Ok(Command::Nothing);
        };

        let message = match verb.to_ascii_lowercase().as_str() {
            "available" => {
                let (target, message) =
                    split_word(rest).ok_or(CommandError::Usage(AVAILABLE_USAGE))?;
                if message.is_empty() {
                    return Err(CommandError::Usage(AVAILABLE_USAGE));
                }
                let (origin, version) = match target.split_once('@') {
                    Some((origin, version)) if !origin.is_empty() && !version.is_empty() => {
                        (origin, Some(version.to_string()))
                    }
                    Some(_) => return Err(CommandError::Usage(AVAILABLE_USAGE)),
                    None => (target, None),
                };
                MessageToBackend::UpdateAvailable(UpdateAvailable {
                    origin: Origin::from(origin),
                    message: message.to_string(),
                    version,
                })
            }
            "installed" => match split_word(rest) {
                Some((origin, "")) => MessageToBackend::UpdateInstalled(UpdateInstalled {
                    origin: Origin::from(origin),
                }),
                _ => return Err(CommandError::Usage(INSTALLED_USAGE)),
            },
            "close" | "dismiss" => MessageToBackend::DismissPanel,
            "panel" => MessageToBackend::PanelStateRequest,
            "versions" => MessageToBackend::VersionInfoRequest,
            "config" => MessageToBackend::ConfigurationRequest,
            "help" => return Ok(Command::Help),
            "quit" | "exit" => return Ok(Command::Quit),
            _ => return Err(CommandError::Unknown(verb.to_string())),
        };

        Ok(Command::Backend(message))
    }
}

/// Splits off the first whitespace-delimited word, returning it and the
/// trimmed remainder.
fn split_word(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => Some((word, rest.trim())),
        None => Some((input, "")),
    }
}
