use super::format_value;
use crate::analysis::term::{EvaluatedTerms, TermKind, TermValue};

const ATOMS_HEADER: &str = "Atoms";
const TERM_HEADER: &str = "Term";
const VALUE_HEADER: &str = "Value (Å or º)";
const CONFORMATION_HEADER: &str = "Conformation";
const COLUMN_GAP: usize = 3;

/// Renders the plain-text report of an analysis pass.
///
/// One section per term kind in reporting order. A kind with no terms gets a
/// one-line notice instead of an empty table. Dihedral sections carry an
/// extra conformation column.
pub fn render_report(terms: &EvaluatedTerms) -> String {
    let mut report = String::new();
    for (position, &kind) in TermKind::ALL.iter().enumerate() {
        if position > 0 {
            report.push('\n');
        }
        render_section(&mut report, kind, terms.by_kind(kind));
    }
    report
}

fn section_title(kind: TermKind) -> &'static str {
    match kind {
        TermKind::Bond => "Bonds:",
        TermKind::Angle => "Angles:",
        TermKind::Dihedral => "Dihedrals:",
        TermKind::OutOfPlane => "Out-of-planes:",
    }
}

fn render_section(report: &mut String, kind: TermKind, values: &[TermValue]) {
    report.push_str(section_title(kind));
    report.push('\n');

    if values.is_empty() {
        report.push_str(&format!("There are no {}.\n", kind.plural()));
        return;
    }

    let with_conformation = kind == TermKind::Dihedral;
    let mut headers = vec![ATOMS_HEADER, TERM_HEADER, VALUE_HEADER];
    if with_conformation {
        headers.push(CONFORMATION_HEADER);
    }

    let rows: Vec<Vec<String>> = values.iter().map(|v| row_cells(v, with_conformation)).collect();

    // Column widths fit the widest cell, header included.
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (column, cell) in row.iter().enumerate() {
            widths[column] = widths[column].max(cell.chars().count());
        }
    }

    push_row(report, &headers.iter().map(|h| h.to_string()).collect::<Vec<_>>(), &widths);
    for row in &rows {
        push_row(report, row, &widths);
    }
}

fn row_cells(value: &TermValue, with_conformation: bool) -> Vec<String> {
    let mut cells = vec![
        value.term.indices_label(),
        value.label.clone(),
        format_value(value.value),
    ];
    if with_conformation {
        cells.push(
            value
                .dihedral_class
                .map(|class| class.to_string())
                .unwrap_or_default(),
        );
    }
    cells
}

fn push_row(report: &mut String, cells: &[String], widths: &[usize]) {
    let last = cells.len() - 1;
    for (column, cell) in cells.iter().enumerate() {
        report.push_str(cell);
        if column < last {
            let padding = widths[column] - cell.chars().count() + COLUMN_GAP;
            for _ in 0..padding {
                report.push(' ');
            }
        }
    }
    report.push('\n');
}
