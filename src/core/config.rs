use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration with the webhook endpoint masked.
    pub fn print(cfg: &Config, path: &Path) -> AppResult<()> {
        println!("📄 Current configuration ({}):\n", path.display());
        println!("{}", cfg.to_masked_yaml()?);
        println!(
            "transport: {}",
            if cfg.transport_enabled {
                "enabled"
            } else {
                "disabled (no webhook URL)"
            }
        );
        Ok(())
    }

    /// Open the configuration file in the requested editor, falling back to
    /// $EDITOR / $VISUAL and then the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => Ok(()),
            _ if editor_to_use != default_editor => {
                eprintln!(
                    "⚠️  Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                );
                let status = Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))?;
                if status.success() {
                    Ok(())
                } else {
                    Err(AppError::Config(format!("editor '{default_editor}' exited with {status}")))
                }
            }
            Ok(s) => Err(AppError::Config(format!("editor '{editor_to_use}' exited with {s}"))),
            Err(e) => Err(AppError::Config(e.to_string())),
        }
    }
}
