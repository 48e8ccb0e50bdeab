//! Table and JSON rendering for command results.

use crate::args::OutputFormat;
use crate::error::MainError;
use serde::Serialize;
use std::fmt::Write as _;
use views::list::Page;

pub struct ColumnDef {
    pub header: &'static str,
    pub width: usize,
}

impl ColumnDef {
    pub const fn new(header: &'static str, width: usize) -> Self {
        Self { header, width }
    }
}

pub fn opt<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

pub fn quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

fn fit(cell: &str, width: usize) -> String {
    if cell.chars().count() <= width {
        format!("{cell:<width$}")
    } else {
        let truncated: String = cell.chars().take(width.saturating_sub(1)).collect();
        format!("{truncated}…")
    }
}

pub fn render_table(columns: &[ColumnDef], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    let header: Vec<String> = columns.iter().map(|c| fit(c.header, c.width)).collect();
    let _ = writeln!(out, "{}", header.join("  ").trim_end());
    let rule: Vec<String> = columns.iter().map(|c| "-".repeat(c.width)).collect();
    let _ = writeln!(out, "{}", rule.join("  "));
    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .zip(row)
            .map(|(c, cell)| fit(cell, c.width))
            .collect();
        let _ = writeln!(out, "{}", cells.join("  ").trim_end());
    }
    out
}

pub fn page_footer<T>(page: &Page<'_, T>) -> String {
    if page.total_items == 0 {
        return "No matching records".to_string();
    }
    if page.items.is_empty() {
        return format!(
            "Page {} is past the end ({} records, {} pages)",
            page.page, page.total_items, page.total_pages
        );
    }
    let first = page
        .page
        .saturating_sub(1)
        .saturating_mul(page.page_size)
        .saturating_add(1);
    let last = first.saturating_add(page.items.len() - 1);
    format!(
        "Showing {first}-{last} of {} (page {} of {})",
        page.total_items, page.page, page.total_pages
    )
}

/// Prints `items` as JSON, or as a table built by `row`.
pub fn print_rows<T: Serialize>(
    format: OutputFormat,
    columns: &[ColumnDef],
    items: &[&T],
    row: impl Fn(&T) -> Vec<String>,
) -> Result<(), MainError> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(items)?),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = items.iter().map(|item| row(item)).collect();
            print!("{}", render_table(columns, &rows));
        }
    }
    Ok(())
}

pub fn print_page<T: Serialize>(
    format: OutputFormat,
    columns: &[ColumnDef],
    page: &Page<'_, T>,
    row: impl Fn(&T) -> Vec<String>,
) -> Result<(), MainError> {
    print_rows(format, columns, &page.items, row)?;
    if format == OutputFormat::Table {
        println!("{}", page_footer(page));
    }
    Ok(())
}

pub fn print_value<T: Serialize>(
    format: OutputFormat,
    value: &T,
    fields: impl FnOnce(&T) -> Vec<(&'static str, String)>,
) -> Result<(), MainError> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Table => {
            let fields = fields(value);
            let width = fields.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
            for (key, value) in fields {
                println!("{key:<width$}  {value}");
            }
        }
    }
    Ok(())
}
