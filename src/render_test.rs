use super::*;
use crate::state::form::{FunctionField, ParameterField};
use crate::test_helpers::sample_record;

#[test]
fn empty_table_says_so() {
    assert_eq!(render_table(&[], &ListView::default()), "No functions defined.\n");
}

#[test]
fn table_has_header_separator_and_one_line_per_row() {
    let rows = ListView::rows(&[sample_record("a", "alpha"), sample_record("b", "beta")]);
    let text = render_table(&rows, &ListView::default());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("ID"));
    assert!(lines[0].contains("Created by"));
    assert!(lines[0].ends_with("File size"));
    assert!(lines[1].starts_with("--"));
    assert!(lines[2].starts_with("a "));
    assert!(lines[2].contains("alpha"));
    assert!(lines[2].contains("2024-01-01T00:00:00.000Z"));
    assert!(lines[3].ends_with("1Kb"));
}

#[test]
fn table_columns_align() {
    let mut long = sample_record("a-much-longer-id", "alpha");
    long.created_by = Some("X".into());
    let rows = ListView::rows(&[long, sample_record("b", "beta")]);
    let text = render_table(&rows, &ListView::default());
    let lines: Vec<&str> = text.lines().collect();

    let header_col = lines[0].find("Name").unwrap();
    assert_eq!(lines[2].find("alpha").unwrap(), header_col);
    assert_eq!(lines[3].find("beta").unwrap(), header_col);
}

#[test]
fn table_marks_disabled_rows() {
    let mut record = sample_record("a", "alpha");
    record.enabled = false;
    let text = render_table(&ListView::rows(&[record]), &ListView::default());
    assert!(text.contains("alpha (disabled)"));
}

#[test]
fn table_shows_open_menu_under_its_row_only() {
    let rows = ListView::rows(&[sample_record("a", "alpha"), sample_record("b", "beta")]);
    let mut view = ListView::default();
    view.toggle_menu("b");
    let text = render_table(&rows, &view);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[3].contains("beta"));
    assert_eq!(lines[4], "  > Edit | Delete");
}

#[test]
fn table_shows_confirmation_when_delete_pending() {
    let rows = ListView::rows(&[sample_record("a", "alpha")]);
    let mut view = ListView::default();
    view.request_delete("a");
    let text = render_table(&rows, &view);
    assert!(text.contains(crate::state::list::DELETE_CONFIRMATION_MESSAGE));
}

#[test]
fn record_detail_lists_fields_and_parameters() {
    let mut record = sample_record("a", "alpha");
    record.parameters[0].enum_values = vec!["paris".into(), "oslo".into()];
    let text = render_record(&record);

    assert!(text.contains("ID:"));
    assert!(text.contains("Lambda function: arn:aws:lambda:us-east-1:123:function:alpha"));
    assert!(text.contains("Status:          Enabled"));
    assert!(text.contains("  [0] city (string, required): City name"));
    assert!(text.contains("      enum: paris,oslo"));
}

#[test]
fn record_detail_without_parameters() {
    let mut record = sample_record("a", "alpha");
    record.parameters.clear();
    record.enabled = false;
    let text = render_record(&record);
    assert!(text.contains("Disabled"));
    assert!(text.ends_with("Parameters: none\n"));
}

#[test]
fn form_errors_render_inline_per_field() {
    let mut form = FunctionForm::new(None);
    form.set_field(FunctionField::Name, "f1");
    form.add_parameter();
    form.set_parameter_field(0, ParameterField::Name, "city");
    form.validate();

    let text = render_form_errors(&form);
    assert!(!text.contains("  name:"));
    assert!(text.contains("  description: Function description is required."));
    assert!(text.contains("  lambdaFunction: Lambda function ARN is required."));
    assert!(text.contains("  parameter [0]: Parameter must have a name, type, and description."));
}

#[test]
fn form_errors_empty_when_valid() {
    let form = FunctionForm::new(None);
    assert_eq!(render_form_errors(&form), "");
}
