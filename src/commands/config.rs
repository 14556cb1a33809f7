use std::path::PathBuf;

use ignsync::config::{CONFIG_FILE_NAME, ConfigManager};
use ignsync::error::Result;

use crate::cli::ConfigAction;

/// `config`: validate or create the config file
pub struct ConfigCmd;

impl ConfigCmd {
    pub fn execute(action: &ConfigAction, cli_config: Option<&std::path::Path>) -> Result<()> {
        match action {
            ConfigAction::Check => {
                let resolved = ConfigManager::load(cli_config)?;
                println!("Config file is valid");
                println!("Python root:   {}", resolved.roots.python_root.display());
                println!("Ignition root: {}", resolved.roots.ignition_root.display());
                Ok(())
            }
            ConfigAction::Init => {
                let path = PathBuf::from(CONFIG_FILE_NAME);
                ConfigManager::write_default(&path)?;
                println!("Wrote {CONFIG_FILE_NAME}");
                Ok(())
            }
        }
    }
}
