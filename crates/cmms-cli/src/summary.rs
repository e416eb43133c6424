use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use cmms_model::{FieldError, ValidationResult};

use cmms_cli::batch::BatchReport;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn status_cell(valid: bool) -> Cell {
    if valid {
        Cell::new("valid").fg(Color::Green)
    } else {
        Cell::new("invalid")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

pub fn print_status(valid: bool, detail: &str) {
    if valid {
        println!("valid: {detail}");
    } else {
        println!("invalid: {detail}");
    }
}

pub fn print_batch(report: &BatchReport) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Row"),
        header_cell(&report.column),
        header_cell("Formatted"),
        header_cell("Status"),
        header_cell("Message"),
    ]);
    for row in &report.rows {
        table.add_row(vec![
            Cell::new(row.row),
            Cell::new(&row.input),
            Cell::new(&row.formatted),
            status_cell(row.outcome.is_valid),
            Cell::new(row.outcome.message.as_deref().unwrap_or("-")),
        ]);
    }
    println!("{table}");
    println!("{} checked, {} invalid", report.total, report.invalid);
}

pub fn print_form(entity: &str, result: &ValidationResult) {
    if result.valid {
        println!("{entity}: valid");
        return;
    }
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("#"), header_cell(&format!("{entity} errors"))]);
    for (idx, error) in result.errors.iter().enumerate() {
        table.add_row(vec![Cell::new(idx + 1), Cell::new(error).fg(Color::Red)]);
    }
    println!("{table}");
}

pub fn print_field_errors(errors: &[FieldError]) {
    if errors.is_empty() {
        println!("no field errors");
        return;
    }
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Kind"),
        header_cell("Scope"),
        header_cell("Message"),
    ]);
    for error in errors {
        let scope = if error.field_specific { "field" } else { "form" };
        table.add_row(vec![
            Cell::new(&error.field),
            Cell::new(error.kind).fg(kind_color(error.kind.is_client_side())),
            Cell::new(scope),
            Cell::new(&error.message),
        ]);
    }
    println!("{table}");
}

fn kind_color(client_side: bool) -> Color {
    if client_side { Color::Yellow } else { Color::Cyan }
}
