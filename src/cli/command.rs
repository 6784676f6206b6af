//! Shell command parsing.

use edupro_core::{ScreenId, ThemeMode};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Missing arguments are prompted for in an interactive shell.
    Login {
        username: Option<String>,
        password: Option<String>,
    },
    Logout,
    Go(ScreenId),
    /// Toggle the attendance scanner.
    Scan,
    /// `None` toggles.
    Theme(Option<ThemeMode>),
    Avatar(PathBuf),
    Major(String),
    Menu,
    WhoAmI,
    Show,
    Notifications,
    Metrics,
    Help,
    Quit,
}

impl fmt::Debug for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login { username, password } => f
                .debug_struct("Login")
                .field("username", username)
                .field("password", &password.as_ref().map(|_| "<redacted>"))
                .finish(),
            Self::Logout => f.write_str("Logout"),
            Self::Go(screen) => f.debug_tuple("Go").field(screen).finish(),
            Self::Scan => f.write_str("Scan"),
            Self::Theme(mode) => f.debug_tuple("Theme").field(mode).finish(),
            Self::Avatar(path) => f.debug_tuple("Avatar").field(path).finish(),
            Self::Major(code) => f.debug_tuple("Major").field(code).finish(),
            Self::Menu => f.write_str("Menu"),
            Self::WhoAmI => f.write_str("WhoAmI"),
            Self::Show => f.write_str("Show"),
            Self::Notifications => f.write_str("Notifications"),
            Self::Metrics => f.write_str("Metrics"),
            Self::Help => f.write_str("Help"),
            Self::Quit => f.write_str("Quit"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    InvalidArgument(String),
}

pub const HELP: &str = "\
Commands:
  login [username] [password]   sign in
  logout                        sign out
  go <screen>                   open home, academic, attendance, exams or settings
  scan                          start or stop the attendance scanner
  theme [light|dark]            set or toggle the theme
  avatar <path>                 upload a profile picture
  major <code>                  pick a major on the exams screen (RPL, TKJ, MM, AKL, OTKP, TKRO)
  menu                          list the screens you can open
  whoami                        show the signed-in user
  show                          redraw the current screen
  notifications                 list notifications
  metrics                       dump counters in Prometheus format
  help                          this text
  quit                          leave";

impl FromStr for ShellCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandError::Empty);
        };
        let args: Vec<&str> = words.collect();

        let command = match name.to_ascii_lowercase().as_str() {
            "login" => {
                if args.len() > 2 {
                    return Err(CommandError::Usage("login [username] [password]"));
                }
                ShellCommand::Login {
                    username: args.first().map(|s| s.to_string()),
                    password: args.get(1).map(|s| s.to_string()),
                }
            }
            "logout" => ShellCommand::Logout,
            "go" | "open" => {
                let [screen] = args.as_slice() else {
                    return Err(CommandError::Usage("go <screen>"));
                };
                let screen = screen
                    .parse()
                    .map_err(|e: edupro_core::screens::UnknownScreen| {
                        CommandError::InvalidArgument(e.to_string())
                    })?;
                ShellCommand::Go(screen)
            }
            "scan" => ShellCommand::Scan,
            "theme" => match args.as_slice() {
                [] => ShellCommand::Theme(None),
                [mode] => ShellCommand::Theme(Some(mode.parse().map_err(
                    |e: edupro_core::theme::UnknownThemeMode| {
                        CommandError::InvalidArgument(e.to_string())
                    },
                )?)),
                _ => return Err(CommandError::Usage("theme [light|dark]")),
            },
            "avatar" => {
                if args.is_empty() {
                    return Err(CommandError::Usage("avatar <path>"));
                }
                // paths may contain spaces
                ShellCommand::Avatar(PathBuf::from(args.join(" ")))
            }
            "major" => {
                let [code] = args.as_slice() else {
                    return Err(CommandError::Usage("major <code>"));
                };
                ShellCommand::Major(code.to_string())
            }
            "menu" => ShellCommand::Menu,
            "whoami" => ShellCommand::WhoAmI,
            "show" | "ls" => ShellCommand::Show,
            "notifications" => ShellCommand::Notifications,
            "metrics" => ShellCommand::Metrics,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

/// Split a script into commands on `;`, skipping blanks.
pub fn split_script(script: &str) -> impl Iterator<Item = &str> {
    script.split(';').map(str::trim).filter(|s| !s.is_empty())
}
