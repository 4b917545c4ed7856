//! Settings display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;

#[derive(Tabled)]
struct SettingRow {
    #[tabled(rename = "Setting")]
    setting: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Description")]
    description: &'static str,
}

fn optional(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "(not set)".to_string())
}

/// Format the current settings as a table
pub fn format_settings_table(settings: &Settings) -> String {
    let rows = vec![
        SettingRow {
            setting: "default_account",
            value: optional(&settings.default_account),
            description: "Account used when -a is not specified",
        },
        SettingRow {
            setting: "default_category",
            value: optional(&settings.default_category),
            description: "Category used when -c is not specified",
        },
        SettingRow {
            setting: "confirm_undo",
            value: settings.confirm_undo.to_string(),
            description: "Ask before deleting entries",
        },
        SettingRow {
            setting: "show_balance_after_add",
            value: settings.show_balance_after_add.to_string(),
            description: "Print the account balance after adding",
        },
    ];

    Table::new(rows).with(Style::psql()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_values_are_marked() {
        let table = format_settings_table(&Settings::default());
        assert!(table.contains("default_account"));
        assert!(table.contains("(not set)"));
        assert!(table.contains("confirm_undo"));
        assert!(table.contains("true"));
    }
}
