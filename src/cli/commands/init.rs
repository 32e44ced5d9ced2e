use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

use crate::cli::parser::Commands;
use std::path::Path;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        if Config::init_file(path, *force)? {
            success(format!("Config file: {}", path.display()));
            info("Set the WEBHOOK_URL environment variable (or `webhook_url`) to enable sending.");
        } else {
            info(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            ));
        }
    }
    Ok(())
}
