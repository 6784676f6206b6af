//! Command-line entry points.
//!
//! ```text
//! edupro                      interactive shell (default)
//! edupro shell
//! edupro run "login bagus123 pw; go scan; scan"
//! edupro menu teacher
//! ```

pub mod command;
pub mod shell;

use clap::{Parser, Subcommand};
use edupro_config::PortalConfig;
use edupro_core::{UserRole, visible_menu};
use edupro_observability::PrometheusHandle;
use tracing::info;

use crate::modules::attendance::SimulatedCamera;
use crate::portal::Portal;
use crate::state::AppState;

use self::command::split_script;
use self::shell::Shell;

#[derive(Debug, Parser)]
#[command(name = "edupro")]
#[command(about = "EduPro school portal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive shell
    Shell,
    /// Run `;`-separated shell commands and exit
    Run {
        /// Commands, e.g. "login bagus123 pw; go scan; scan"
        #[arg(required = true)]
        commands: Vec<String>,
    },
    /// Print the screens a role may open
    Menu {
        /// student, teacher or admin
        role: UserRole,
    },
}

pub async fn run(cli: Cli, config: PortalConfig, metrics: Option<PrometheusHandle>) -> anyhow::Result<()> {
    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let mut shell = build_shell(config, metrics).interactive();
            shell.run_interactive().await
        }
        Commands::Run { commands } => {
            let script = commands.join(" ");
            let mut shell = build_shell(config, metrics);
            let failures = shell.run_script(split_script(&script)).await;
            if failures > 0 {
                anyhow::bail!("{failures} command(s) failed");
            }
            Ok(())
        }
        Commands::Menu { role } => {
            println!("{}", render_menu(role));
            Ok(())
        }
    }
}

fn build_shell(config: PortalConfig, metrics: Option<PrometheusHandle>) -> Shell<SimulatedCamera> {
    let camera = SimulatedCamera::from_config(&config.camera);
    info!(
        auth_mode = ?config.auth.mode,
        camera = ?config.camera.simulation,
        "Starting portal"
    );
    let portal = Portal::new(AppState::new(config), camera);
    Shell::new(portal, metrics)
}

pub fn render_menu(role: UserRole) -> String {
    visible_menu(role)
        .iter()
        .map(|screen| screen.label())
        .collect::<Vec<_>>()
        .join(" · ")
}
