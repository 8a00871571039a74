pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Commands, StackCommands};

pub use adapters::http::EngineClient;
pub use config::ClientConfig;
pub use crate::core::{
    list::run_list,
    stacks::{get_stacks, print_table},
};
pub use domain::model::{Service, Stack, LABEL_NAMESPACE};
pub use utils::error::{Result, StackError};
