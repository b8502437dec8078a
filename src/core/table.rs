//! Product table presentation.
//!
//! This module turns filtered rows into display data: one [`ProductRow`] per
//! product with the columns ID, Product, Category and User, a fixed-width text
//! rendering of those rows, and a one-line summary of the active filters.
//! Nothing here is Discord specific; the bot layer wraps the output in a reply.

use crate::{
    core::{catalog::Catalog, filter::FilterCriteria},
    entities::{EnrichedProduct, Sex},
    errors::Result,
};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// Shown instead of the table when no product matches.
pub const NO_MATCHING_MESSAGE: &str = "No products matching selected criteria";

/// Longest search text echoed back in the criteria summary, in characters.
pub const QUERY_ECHO_LIMIT: usize = 40;

const HEADERS: [&str; 4] = ["ID", "Product", "Category", "User"];

/// A single display row of the product table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    /// Product id
    pub id: i64,
    /// Product name
    pub name: String,
    /// Category label, `"icon - title"`
    pub category: String,
    /// Owner name
    pub user: String,
    /// Owner sex, shown as a marker next to the name
    pub sex: Sex,
}

impl From<&EnrichedProduct<'_>> for ProductRow {
    fn from(item: &EnrichedProduct<'_>) -> Self {
        Self {
            id: item.product.id,
            name: item.product.name.clone(),
            category: item.category.label(),
            user: item.user.name.clone(),
            sex: item.user.sex,
        }
    }
}

impl ProductRow {
    fn cells(&self) -> [String; 4] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.category.clone(),
            format!("{} {}", self.user, self.sex.marker()),
        ]
    }
}

/// Builds display rows in filter order.
#[must_use]
pub fn build_rows(items: &[EnrichedProduct<'_>]) -> Vec<ProductRow> {
    items.iter().map(ProductRow::from).collect()
}

/// Renders rows as a fixed-width text table.
///
/// Columns are padded by terminal display width, so wide emoji icons line up
/// with plain text in a monospace block.
///
/// Returns [`NO_MATCHING_MESSAGE`] when `rows` is empty.
///
/// # Errors
/// Returns an error only if writing to the output buffer fails.
pub fn render_table(rows: &[ProductRow]) -> Result<String> {
    if rows.is_empty() {
        return Ok(NO_MATCHING_MESSAGE.to_string());
    }

    let cells: Vec<[String; 4]> = rows.iter().map(ProductRow::cells).collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    write_line(&mut out, &HEADERS.map(str::to_string), &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(&mut out, "{}", rule.join("-+-"))?;
    for row in &cells {
        write_line(&mut out, row, &widths)?;
    }

    Ok(out)
}

fn write_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) -> Result<()> {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| {
            let padding = width.saturating_sub(cell.width());
            format!("{cell}{}", " ".repeat(padding))
        })
        .collect();
    writeln!(out, "{}", padded.join(" | ").trim_end())?;
    Ok(())
}

/// Summarises the active filters, e.g. `User: Anna · Categories: Drinks · Search: "dr"`.
#[must_use]
pub fn describe_criteria(catalog: &Catalog, criteria: &FilterCriteria) -> String {
    if criteria.is_unfiltered() {
        return "Filters: All".to_string();
    }

    let mut parts = Vec::new();

    if let Some(user_id) = criteria.selected_user() {
        let name = catalog
            .user(user_id)
            .map_or_else(|| format!("#{user_id}"), |u| u.name.clone());
        parts.push(format!("User: {name}"));
    }

    if !criteria.selected_categories().is_empty() {
        let titles: Vec<String> = criteria
            .selected_categories()
            .iter()
            .map(|id| {
                catalog
                    .category(*id)
                    .map_or_else(|| format!("#{id}"), |c| c.title.clone())
            })
            .collect();
        parts.push(format!("Categories: {}", titles.join(", ")));
    }

    let query = criteria.query().trim();
    if !query.is_empty() {
        parts.push(format!(
            "Search: \"{}\"",
            truncate_chars(query, QUERY_ECHO_LIMIT)
        ));
    }

    format!("Filters: {}", parts.join(" · "))
}

/// Cuts `text` to at most `max` characters, ending with `…` when shortened.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
