//! The command shell driving a [`Portal`].

use dialoguer::{Input, Password};
use edupro_core::ThemeMode;
use edupro_models::LoginRequest;
use edupro_observability::PrometheusHandle;
use tracing::{debug, warn};

use super::command::{HELP, ShellCommand};
use crate::modules::attendance::CaptureDevice;
use crate::portal::Portal;
use crate::utils::errors::PortalError;
use crate::utils::upload::read_avatar_file;

/// Result of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    Quit,
}

pub struct Shell<D: CaptureDevice + Clone> {
    portal: Portal<D>,
    metrics: Option<PrometheusHandle>,
    interactive: bool,
}

impl<D: CaptureDevice + Clone> Shell<D> {
    pub fn new(portal: Portal<D>, metrics: Option<PrometheusHandle>) -> Self {
        Self {
            portal,
            metrics,
            interactive: false,
        }
    }

    /// Prompt for missing login arguments instead of failing.
    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    pub fn portal(&self) -> &Portal<D> {
        &self.portal
    }

    pub async fn run_line(&mut self, line: &str) -> Result<Outcome, PortalError> {
        let command: ShellCommand = line.parse().map_err(PortalError::bad_request)?;
        self.execute(command).await
    }

    pub async fn execute(&mut self, command: ShellCommand) -> Result<Outcome, PortalError> {
        debug!(?command, "Executing command");

        let output = match command {
            ShellCommand::Login { username, password } => {
                let request = self.login_request(username, password)?;
                let user = self.portal.login(&request)?;
                format!("Signed in as {}.\n\n{}", user.name, self.portal.render())
            }
            ShellCommand::Logout => {
                self.portal.logout();
                self.portal.render()
            }
            ShellCommand::Go(screen) => {
                self.portal.navigate(screen)?;
                self.portal.render()
            }
            ShellCommand::Scan => {
                self.portal.toggle_scan().await?;
                self.portal.render()
            }
            ShellCommand::Theme(mode) => {
                let mode = mode.unwrap_or_else(|| self.portal.state().theme.mode().toggled());
                self.portal.set_theme(mode);
                theme_banner(mode)
            }
            ShellCommand::Avatar(path) => {
                let upload = read_avatar_file(&path, &self.portal.state().config.avatar).await?;
                self.portal.upload_avatar(&upload)?;
                match self.portal.current_user() {
                    Some(user) => format!("Avatar updated: {}", user.avatar),
                    None => "Not signed in; avatar unchanged.".to_string(),
                }
            }
            ShellCommand::Major(code) => {
                self.portal.select_major(&code)?;
                self.portal.render()
            }
            ShellCommand::Menu => {
                let menu = self.portal.state().navigation.menu();
                if menu.is_empty() {
                    "Not signed in.".to_string()
                } else {
                    menu.iter()
                        .map(|screen| format!("{:<10} go {}", screen.label(), screen.slug()))
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            ShellCommand::WhoAmI => match self.portal.current_user() {
                Some(user) => format!(
                    "{} <{}> · {} · {}",
                    user.name,
                    user.email,
                    user.role,
                    user.badge_number()
                ),
                None => "Not signed in.".to_string(),
            },
            ShellCommand::Show => self.portal.render(),
            ShellCommand::Notifications => self.portal.render_notifications(),
            ShellCommand::Metrics => match &self.metrics {
                Some(handle) => handle.render(),
                None => "Metrics recorder is not installed.".to_string(),
            },
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Quit => return Ok(Outcome::Quit),
        };

        Ok(Outcome::Output(output))
    }

    fn login_request(
        &self,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<LoginRequest, PortalError> {
        if !self.interactive && (username.is_none() || password.is_none()) {
            return Err(PortalError::bad_request(anyhow::anyhow!(
                "usage: login <username> <password>"
            )));
        }

        let username = match username {
            Some(username) => username,
            None => Input::<String>::new()
                .with_prompt("Username")
                .interact_text()
                .map_err(PortalError::internal)?,
        };

        let password = match password {
            Some(password) => password,
            None => Password::new()
                .with_prompt("Password")
                .interact()
                .map_err(PortalError::internal)?,
        };

        Ok(LoginRequest::new(username, password))
    }

    /// Read commands until `quit` or end of input.
    pub async fn run_interactive(&mut self) -> anyhow::Result<()> {
        println!("{}", self.portal.render());
        println!("Type `help` for commands.");

        loop {
            let prompt = match self.portal.current_user() {
                Some(user) => format!(
                    "edupro:{} ({})",
                    self.portal.active_screen().slug(),
                    user.username
                ),
                None => "edupro".to_string(),
            };

            let line = match Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
            {
                Ok(line) => line,
                Err(e) => {
                    debug!(error = %e, "Input closed");
                    break;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            match self.run_line(&line).await {
                Ok(Outcome::Output(output)) => println!("{output}"),
                Ok(Outcome::Quit) => break,
                Err(e) => {
                    warn!(kind = e.kind.as_str(), "Command failed");
                    eprintln!("error: {e}");
                }
            }
        }

        Ok(())
    }

    /// Run each command in turn. Failures are reported and the script
    /// continues; returns how many commands failed.
    pub async fn run_script<'a>(&mut self, commands: impl IntoIterator<Item = &'a str>) -> usize {
        let mut failures = 0;
        for line in commands {
            println!("> {line}");
            match self.run_line(line).await {
                Ok(Outcome::Output(output)) => println!("{output}"),
                Ok(Outcome::Quit) => break,
                Err(e) => {
                    failures += 1;
                    eprintln!("error: {e}");
                }
            }
        }
        failures
    }
}

fn theme_banner(mode: ThemeMode) -> String {
    format!(
        "Theme set to {} (background {}, surface {})",
        mode.as_str(),
        mode.background_hex(),
        mode.surface_hex()
    )
}
