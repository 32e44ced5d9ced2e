use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

use crate::cli::parser::Commands;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            ConfigLogic::print(cfg, path)?;
        }

        if *edit_config {
            if !path.exists() {
                Config::init_file(path, false)?;
            }
            ConfigLogic::edit(path, editor)?;
            success("Configuration file edited successfully");
        }

        if !*print_config && !*edit_config {
            warning("Nothing to do: use --print or --edit");
        }
    }
    Ok(())
}
