//! Config CLI commands
//!
//! `config set default_account`/`default_category` resolve the value against
//! the shared database and store the canonical entity name, so a fragment
//! typed once doesn't become a permanently ambiguous default.

use clap::Subcommand;

use crate::cli::confirm;
use crate::config::settings::{parse_bool, SETTING_KEYS};
use crate::config::{Settings, TallyPaths};
use crate::display::format_settings_table;
use crate::error::{TallyError, TallyResult};
use crate::services::resolve::{resolve_account, resolve_category};
use crate::storage::Database;

/// Config subcommands; `tally config` with no subcommand shows the settings
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value ('none' clears a default)
    Set {
        /// One of: default_account, default_category, confirm_undo,
        /// show_balance_after_add
        key: String,
        value: String,
    },
    /// Reset configuration to defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Handle `tally config`
pub fn handle_config(paths: &TallyPaths, command: Option<ConfigCommands>) -> TallyResult<()> {
    match command.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => {
            let settings = Settings::load_or_create(paths)?;
            println!("{}", format_settings_table(&settings));
            println!();
            println!("Config file: {}", paths.settings_file().display());
        }
        ConfigCommands::Set { key, value } => {
            set_value(paths, &key, &value)?;
        }
        ConfigCommands::Reset { yes } => {
            if !yes && !confirm("Reset all settings to defaults?")? {
                println!("Cancelled.");
                return Ok(());
            }
            Settings::reset(paths)?;
            println!("Configuration reset to defaults.");
        }
    }

    Ok(())
}

fn set_value(paths: &TallyPaths, key: &str, value: &str) -> TallyResult<()> {
    let mut settings = Settings::load_or_create(paths)?;

    match key {
        "default_account" => {
            if value.eq_ignore_ascii_case("none") {
                settings.default_account = None;
                println!("Cleared default_account");
            } else {
                let db = Database::open(paths)?;
                let accounts = db.accounts().all()?;
                let account = resolve_account(&accounts, value)?;
                settings.default_account = Some(account.name.clone());
                println!("Set default_account = {}", account.name);
            }
        }
        "default_category" => {
            if value.eq_ignore_ascii_case("none") {
                settings.default_category = None;
                println!("Cleared default_category");
            } else {
                let db = Database::open(paths)?;
                let categories = db.categories().all()?;
                let category = resolve_category(&categories, value)?;
                settings.default_category = Some(category.name.clone());
                println!("Set default_category = {}", category.name);
            }
        }
        "confirm_undo" => {
            let flag = parse_bool(value)?;
            settings.confirm_undo = flag;
            println!("Set confirm_undo = {}", flag);
        }
        "show_balance_after_add" => {
            let flag = parse_bool(value)?;
            settings.show_balance_after_add = flag;
            println!("Set show_balance_after_add = {}", flag);
        }
        _ => {
            return Err(TallyError::Validation(format!(
                "unknown config key '{}'. Valid keys: {}",
                key,
                SETTING_KEYS.join(", ")
            )));
        }
    }

    settings.save(paths)
}
