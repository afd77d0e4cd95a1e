use crate::logging::{self, LogBuffer, LogLayer};
use crate::tui;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use cleaner_api::ApiClient;
use cleaner_core::config::{AppConfig, default_config_path};
use cleaner_core::model::{SortField, SortOrder};
use cleaner_core::session::Session;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod app;
mod args;
mod commands;

use args::*;

use commands::{handle_archive, handle_list, handle_validate};

pub fn run() -> anyhow::Result<()> {
    app::run()
}
