//! Plain-text rendering of the function table, record details and form errors.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::model::FunctionRecord;
use crate::state::form::FunctionForm;
use crate::state::list::{ListRow, ListView};

const HEADERS: [&str; 5] = ["ID", "Name", "Created by", "Last modified", "File size"];
const EMPTY_TABLE: &str = "No functions defined.";

/// The list view as an aligned text table. An open action menu is shown
/// under its row; a pending delete shows the confirmation message.
#[must_use]
pub fn render_table(rows: &[ListRow], view: &ListView) -> String {
    if rows.is_empty() {
        return format!("{EMPTY_TABLE}\n");
    }

    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            let name = if row.enabled { row.name.clone() } else { format!("{} (disabled)", row.name) };
            [row.id.clone(), name, row.created_by.clone(), row.last_modified.clone(), row.file_size.clone()]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(str::to_owned), &widths);
    push_line(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for (row, line) in rows.iter().zip(&cells) {
        push_line(&mut out, line, &widths);
        if view.is_menu_open(&row.id) {
            out.push_str("  > Edit | Delete\n");
        }
    }
    if view.is_confirm_open() {
        out.push('\n');
        out.push_str(crate::state::list::DELETE_CONFIRMATION_MESSAGE);
        out.push('\n');
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// All fields of one record, parameters included.
#[must_use]
pub fn render_record(record: &FunctionRecord) -> String {
    let mut out = String::new();
    let status = if record.enabled { "Enabled" } else { "Disabled" };
    write_lines(
        &mut out,
        &[
            ("ID", record.id.as_str()),
            ("Name", record.name.as_str()),
            ("Description", record.description.as_str()),
            ("Lambda function", record.lambda_function.as_str()),
            ("Status", status),
            ("Created by", record.created_by.as_deref().unwrap_or("")),
            ("Last modified", record.last_modified.as_deref().unwrap_or("")),
            ("File size", record.file_size.as_deref().unwrap_or("")),
        ],
    );

    if record.parameters.is_empty() {
        out.push_str("Parameters: none\n");
        return out;
    }
    out.push_str("Parameters:\n");
    for (index, param) in record.parameters.iter().enumerate() {
        let required = if param.required { ", required" } else { "" };
        out.push_str(&format!("  [{index}] {} ({}{required}): {}\n", param.name, param.kind, param.description));
        if !param.enum_values.is_empty() {
            out.push_str(&format!("      enum: {}\n", param.enum_list_text()));
        }
    }
    out
}

fn write_lines(out: &mut String, fields: &[(&str, &str)]) {
    let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;
    for (label, value) in fields {
        let label = format!("{label}:");
        out.push_str(&format!("{label:<width$} {value}\n"));
    }
}

/// Inline validation errors, one per offending field or parameter.
/// Empty when the form validated cleanly.
#[must_use]
pub fn render_form_errors(form: &FunctionForm) -> String {
    let errors = form.errors();
    let mut out = String::new();
    for (label, error) in [
        ("name", &errors.name),
        ("description", &errors.description),
        ("lambdaFunction", &errors.lambda_function),
    ] {
        if let Some(message) = error {
            out.push_str(&format!("  {label}: {message}\n"));
        }
    }
    for (index, error) in form.parameter_errors().iter().enumerate() {
        if let Some(message) = error {
            out.push_str(&format!("  parameter [{index}]: {message}\n"));
        }
    }
    out
}
