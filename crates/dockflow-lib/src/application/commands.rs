//! Command execution handlers

use crate::application::{CliConfig, Commands};
use crate::consul::{ConsulClient, LiveConsulClient};
use crate::networking::NetworkingManager;
use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;
use tracing::info;

/// Execute a parsed command against the configured Consul address
pub async fn execute_command(config: CliConfig) -> Result<()> {
    let mut stdout = std::io::stdout();

    let Some(command) = config.command else {
        writeln!(stdout, "dockflow - docker-flow scale and color keys in Consul")?;
        writeln!(stdout, "Run 'dockflow --help' for usage information")?;
        return Ok(());
    };

    let networking = NetworkingManager::new(config.app_config.to_networking_config())
        .context("Failed to set up HTTP client")?;
    let client = LiveConsulClient::new(Arc::new(networking));

    execute_command_with_client(
        command,
        &config.app_config.consul_address,
        &client,
        &mut stdout,
    )
    .await
}

/// Execute a command with a provided client and output sink (for testing)
pub async fn execute_command_with_client<C, W>(
    command: Commands,
    base_url: &str,
    client: &C,
    out: &mut W,
) -> Result<()>
where
    C: ConsulClient,
    W: Write,
{
    match command {
        Commands::Scale {
            service,
            delta,
            write,
        } => {
            let delta = delta.unwrap_or_default();
            let scale = client
                .get_scale_calc(base_url, &service, &delta)
                .await
                .with_context(|| format!("Failed to calculate scale for '{}'", service))?;

            if write {
                client
                    .put_scale(base_url, &service, scale)
                    .await
                    .with_context(|| format!("Failed to store scale for '{}'", service))?;
                info!(service = %service, scale, "Stored scale");
            }

            writeln!(out, "{}", scale)?;
        }
        Commands::Color { service } => {
            let color = client
                .get_color(base_url, &service)
                .await
                .with_context(|| format!("Failed to read color for '{}'", service))?;

            writeln!(out, "{}", color)?;
        }
        Commands::NextColor { service, write } => {
            let current = client
                .get_color(base_url, &service)
                .await
                .with_context(|| format!("Failed to read color for '{}'", service))?;
            let next = client.get_next_color(&current);

            if write {
                client
                    .put_color(base_url, &service, next)
                    .await
                    .with_context(|| format!("Failed to store color for '{}'", service))?;
                info!(service = %service, from = %current, to = next, "Switched color");
            }

            writeln!(out, "{}", next)?;
        }
        Commands::PutScale { service, value } => {
            let response = client
                .put_scale(base_url, &service, value)
                .await
                .with_context(|| format!("Failed to store scale for '{}'", service))?;

            writeln!(out, "{}", response.trim_end())?;
        }
        Commands::PutColor { service, value } => {
            let response = client
                .put_color(base_url, &service, &value)
                .await
                .with_context(|| format!("Failed to store color for '{}'", service))?;

            writeln!(out, "{}", response.trim_end())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
