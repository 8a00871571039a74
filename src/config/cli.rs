use crate::config::toml_config::TomlConfig;
use crate::config::ClientConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "stackctl")]
#[command(about = "Inspect stacks deployed on a container engine")]
pub struct CliConfig {
    /// Engine API address (http://, https:// or tcp://); falls back to $DOCKER_HOST
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Engine API version, e.g. 1.41
    #[arg(long, global = true)]
    pub api_version: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Manage stacks
    #[command(subcommand)]
    Stack(StackCommands),
}

#[derive(Debug, Clone, Subcommand)]
pub enum StackCommands {
    /// List stacks
    #[command(visible_alias = "list")]
    Ls,
}

impl CliConfig {
    pub fn client_config(&self) -> Result<ClientConfig> {
        self.client_config_with_docker_host(std::env::var("DOCKER_HOST").ok())
    }

    /// Host precedence: `--host`, then `docker_host`, then the config file.
    pub fn client_config_with_docker_host(
        &self,
        docker_host: Option<String>,
    ) -> Result<ClientConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };

        let host = self
            .host
            .clone()
            .or_else(|| docker_host.filter(|h| !h.trim().is_empty()));

        Ok(ClientConfig::resolve(file, host, self.api_version.clone()))
    }
}
