//! Summary command: load konfig.json and print the environment summary.

use crate::cli::Cli;
use crate::config::{self, Konfiguration};
use crate::{render, ui};
use anyhow::{Context, Result};
use tracing::debug;

/// Load the konfiguration from the working directory and print it to stdout
pub fn execute(cli: &Cli) -> Result<()> {
    let konfig = match config::read_konfig() {
        Ok(konfig) => konfig,
        Err(e) => {
            ui::print_error("Issue reading konfig!");
            return Err(e.into());
        }
    };

    log_konfig(&konfig);

    print!("{}", run(&konfig, cli.details)?);
    Ok(())
}

/// Render the output for an already-loaded konfiguration
pub fn run(konfig: &Konfiguration, details: bool) -> Result<String> {
    let mut out = konfig.to_string();

    if details {
        let listing = render::details(konfig).context("Failed to render deployments")?;
        out.push_str(&listing);
    }

    Ok(out)
}

fn log_konfig(konfig: &Konfiguration) {
    debug!("konfiguration {}", konfig.api_version);
    debug!(
        "{} deployments ({} enabled), {} external resources",
        konfig.deployments.len(),
        konfig.enabled_deployments(false),
        konfig.external_resources.deployments.len()
    );

    match serde_yaml::to_string(&konfig.environment.chart_values()) {
        Ok(yaml) => debug!("Env values:\n{}", yaml),
        Err(e) => debug!("Unable to render env values: {}", e),
    }
}
