use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use serde_json::{Value, json};

use bell_prompt::{Selection, Slot};
use bell_standards::{NONE_CODE, SectionIssue, StandardsCatalog};

use crate::commands::CheckResult;

pub fn print_catalog(catalog: &StandardsCatalog) {
    println!("Standards: {}", catalog.source());
    println!("{}", catalog_table(catalog));
}

pub fn catalog_table(catalog: &StandardsCatalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Description")]);
    apply_table_style(&mut table);
    for entry in catalog.ordered_catalog() {
        let code = if entry.code == NONE_CODE {
            dim_cell(entry.code)
        } else {
            Cell::new(entry.code)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold)
        };
        table.add_row(vec![code, Cell::new(entry.description)]);
    }
    table
}

pub fn catalog_json(catalog: &StandardsCatalog) -> Value {
    json!({
        "source": catalog.source(),
        "entries": catalog.ordered_catalog(),
    })
}

pub fn print_check(result: &CheckResult) {
    let report = &result.parsed.report;
    println!("Document: {}", result.path.display());
    let mut counts = Table::new();
    counts.set_header(vec![
        header_cell("Domains"),
        header_cell("Standards"),
        header_cell("Indicators"),
        header_cell("Duplicates"),
        header_cell("Issues"),
    ]);
    apply_table_style(&mut counts);
    counts.add_row(vec![
        Cell::new(report.domains),
        Cell::new(report.standards),
        Cell::new(result.parsed.indicators.len()),
        count_cell(report.duplicates, Color::Yellow),
        count_cell(report.issues.len(), Color::Yellow),
    ]);
    for index in 0..5 {
        if let Some(column) = counts.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("{counts}");

    if !report.issues.is_empty() {
        println!("{}", issues_table(&report.issues));
    }

    if result.has_errors {
        println!("No indicators found; the built-in standards would be used.");
    }
}

pub fn issues_table(issues: &[SectionIssue]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Line"), header_cell("Issue")]);
    apply_table_style(&mut table);
    for issue in issues {
        table.add_row(vec![Cell::new(issue.line), Cell::new(&issue.kind)]);
    }
    table
}

pub fn options_table() -> Table {
    let mut table = Table::new();
    table.set_header(Slot::ALL.iter().map(|slot| header_cell(slot.label())));
    apply_table_style(&mut table);
    let rows = Slot::ALL
        .iter()
        .map(|slot| slot.options().len())
        .max()
        .unwrap_or(0);
    for row in 0..rows {
        table.add_row(
            Slot::ALL
                .iter()
                .map(|slot| Cell::new(slot.options().get(row).copied().unwrap_or(""))),
        );
    }
    table
}

pub fn print_selection(selection: &Selection) {
    for slot in Slot::ALL {
        let marker = if selection.spun.contains(&slot) {
            "spun"
        } else {
            "locked"
        };
        println!("{:<11} {} ({marker})", format!("{slot}:"), selection.get(slot));
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() == 2 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(85)),
        ]);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
