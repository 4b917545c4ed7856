//! Category display formatting
//!
//! Formats categories for terminal output in tree and table views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Category;

/// Format categories as a tree: top-level categories with their children
pub fn format_category_tree(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found. Create one in Satchel first.".to_string();
    }

    // Subcategories whose parent Satchel has soft-deleted render at top level
    // rather than vanishing.
    let parents: Vec<&Category> = categories
        .iter()
        .filter(|c| match c.parent_id {
            None => true,
            Some(parent_id) => !categories.iter().any(|p| p.id == parent_id),
        })
        .collect();

    let mut output = String::new();
    for (i, parent) in parents.iter().enumerate() {
        output.push_str(&format!("{} ({})\n", parent.name, parent.kind));

        let children: Vec<&Category> = categories
            .iter()
            .filter(|c| c.parent_id == Some(parent.id))
            .collect();
        for (j, child) in children.iter().enumerate() {
            let is_last = j == children.len() - 1;
            let prefix = if is_last { "└── " } else { "├── " };
            output.push_str(&format!("  {}{} ({})\n", prefix, child.name, child.kind));
        }

        if i < parents.len() - 1 {
            output.push('\n');
        }
    }

    output
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
}

/// Format categories as a flat table, children indented under parents
pub fn format_category_table(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found. Create one in Satchel first.".to_string();
    }

    let rows: Vec<CategoryRow> = categories
        .iter()
        .map(|category| CategoryRow {
            name: if category.is_top_level() {
                category.name.clone()
            } else {
                format!("    {}", category.name)
            },
            kind: category.kind.clone(),
        })
        .collect();

    Table::new(rows).with(Style::psql()).to_string()
}
