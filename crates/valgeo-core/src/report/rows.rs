use super::format_value;
use crate::analysis::config::{AnalysisConfig, TableOutput};
use crate::analysis::term::{EvaluatedTerms, TermKind, TermValue};
use crate::core::models::system::Structure;
use std::io::Write;

/// An ordered table of string rows destined for external tabular storage.
///
/// Produced fresh per analysis pass; the column set is fixed by the
/// configuration's [`ColumnNames`](crate::analysis::config::ColumnNames).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    /// Writes the table as CSV, header first.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(&self.columns)?;
        for row in &self.rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

/// Builds the result tables requested by the configuration.
///
/// `Single` emits one combined table over all kinds in reporting order;
/// `Separate` emits one table per kind, keeping empty tables so callers see
/// the schema; `None` emits nothing (text report only).
pub fn build_tables(
    structure: &Structure,
    config: &AnalysisConfig,
    terms: &EvaluatedTerms,
) -> Vec<ResultTable> {
    match config.table_output {
        TableOutput::None => Vec::new(),
        TableOutput::Single => {
            let all: Vec<&TermValue> = TermKind::ALL
                .iter()
                .flat_map(|&kind| terms.by_kind(kind))
                .collect();
            vec![build_table(
                structure,
                config,
                &config.table_names.combined,
                &all,
            )]
        }
        TableOutput::Separate => TermKind::ALL
            .iter()
            .map(|&kind| {
                let name = match kind {
                    TermKind::Bond => &config.table_names.bonds,
                    TermKind::Angle => &config.table_names.angles,
                    TermKind::Dihedral => &config.table_names.dihedrals,
                    TermKind::OutOfPlane => &config.table_names.out_of_planes,
                };
                let values: Vec<&TermValue> = terms.by_kind(kind).iter().collect();
                build_table(structure, config, name, &values)
            })
            .collect(),
    }
}

fn build_table(
    structure: &Structure,
    config: &AnalysisConfig,
    name: &str,
    values: &[&TermValue],
) -> ResultTable {
    let columns = &config.columns;
    let mut header = Vec::new();
    let mut cell_builders: Vec<CellBuilder> = Vec::new();

    if let Some(id_name) = &columns.id {
        header.push(id_name.clone());
        cell_builders.push(CellBuilder::Id);
    }
    if let Some(type_name) = &columns.term_type {
        header.push(type_name.clone());
        cell_builders.push(CellBuilder::TermType);
    }
    for position in 0..4 {
        if let Some(index_name) = &columns.index[position] {
            header.push(index_name.clone());
            cell_builders.push(CellBuilder::Index(position));
        }
    }
    for position in 0..4 {
        if let Some(element_name) = &columns.element[position] {
            header.push(element_name.clone());
            cell_builders.push(CellBuilder::Element(position));
        }
    }
    if let Some(indices_name) = &columns.atom_indices {
        header.push(indices_name.clone());
        cell_builders.push(CellBuilder::AtomIndices);
    }
    if let Some(term_name) = &columns.term {
        header.push(term_name.clone());
        cell_builders.push(CellBuilder::Label);
    }
    if let Some(value_name) = &columns.value {
        header.push(value_name.clone());
        cell_builders.push(CellBuilder::Value);
    }
    if let Some(conformation_name) = &columns.conformation {
        header.push(conformation_name.clone());
        cell_builders.push(CellBuilder::Conformation);
    }

    let rows = values
        .iter()
        .enumerate()
        .map(|(row_number, value)| {
            cell_builders
                .iter()
                .map(|builder| builder.cell(structure, config, value, row_number))
                .collect()
        })
        .collect();

    ResultTable {
        name: name.to_string(),
        columns: header,
        rows,
    }
}

enum CellBuilder {
    Id,
    TermType,
    Index(usize),
    Element(usize),
    AtomIndices,
    Label,
    Value,
    Conformation,
}

impl CellBuilder {
    fn cell(
        &self,
        structure: &Structure,
        config: &AnalysisConfig,
        value: &TermValue,
        row_number: usize,
    ) -> String {
        match self {
            Self::Id => {
                if config.only_first_id && row_number > 0 {
                    String::new()
                } else {
                    config.id_value.clone().unwrap_or_default()
                }
            }
            Self::TermType => value.term.kind().to_string(),
            Self::Index(position) => value
                .term
                .atoms()
                .get(*position)
                .map(|index| index.to_string())
                .unwrap_or_default(),
            Self::Element(position) => value
                .term
                .atoms()
                .get(*position)
                .and_then(|&index| structure.atom(index))
                .map(|atom| atom.element.clone())
                .unwrap_or_default(),
            Self::AtomIndices => value.term.indices_label(),
            Self::Label => value.label.clone(),
            Self::Value => format_value(value.value),
            Self::Conformation => value
                .dihedral_class
                .map(|class| class.abbreviation().to_string())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::config::{AnalysisConfigBuilder, ColumnNames, Target};
    use crate::analysis::term::{Term, TermValue};
    use crate::core::models::atom::Atom;
    use crate::core::models::ids::AtomIndex;
    use crate::core::models::topology::BondOrder;
    use nalgebra::Point3;
    use std::fs::File;
    use tempfile::tempdir;

    fn water_structure() -> Structure {
        let mut s = Structure::new();
        let o = s.add_atom(Atom::new("O", Point3::origin()));
        let h1 = s.add_atom(Atom::new("H", Point3::new(0.96, 0.0, 0.0)));
        let h2 = s.add_atom(Atom::new("H", Point3::new(-0.24, 0.93, 0.0)));
        s.add_bond(o, h1, BondOrder::Single).unwrap();
        s.add_bond(o, h2, BondOrder::Single).unwrap();
        s
    }

    fn water_terms() -> EvaluatedTerms {
        let index = |n| AtomIndex::new(n).unwrap();
        let mut terms = EvaluatedTerms::default();
        terms.push(TermValue::new(
            Term::bond(index(1), index(2)),
            Some(0.96),
            "O-H".into(),
        ));
        terms.push(TermValue::new(
            Term::bond(index(1), index(3)),
            Some(0.9604),
            "O-H".into(),
        ));
        terms.push(TermValue::new(
            Term::angle(index(2), index(1), index(3)),
            Some(104.48),
            "H-O-H".into(),
        ));
        terms
    }

    #[test]
    fn no_table_output_builds_nothing() {
        let config = AnalysisConfigBuilder::new().target(Target::All).build().unwrap();
        let tables = build_tables(&water_structure(), &config, &water_terms());
        assert!(tables.is_empty());
    }

    #[test]
    fn single_output_builds_one_combined_table_in_kind_order() {
        let config = AnalysisConfigBuilder::new()
            .target(Target::All)
            .table_output(TableOutput::Single)
            .build()
            .unwrap();
        let tables = build_tables(&water_structure(), &config, &water_terms());

        assert_eq!(tables.len(), 1);
        let table = &tables[0];
        assert_eq!(table.name, "valence terms");
        // Default columns: term label and value.
        assert_eq!(table.columns, vec!["Term", "Value (Å or º)"]);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0], vec!["O-H", "0.9600"]);
        assert_eq!(table.rows[2], vec!["H-O-H", "104.4800"]);
    }

    #[test]
    fn separate_output_builds_four_tables_including_empty_ones() {
        let config = AnalysisConfigBuilder::new()
            .target(Target::All)
            .table_output(TableOutput::Separate)
            .build()
            .unwrap();
        let tables = build_tables(&water_structure(), &config, &water_terms());

        assert_eq!(tables.len(), 4);
        let names: Vec<&str> = tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["bonds", "angles", "dihedrals", "out-of-planes"]);
        assert_eq!(tables[0].rows.len(), 2);
        assert_eq!(tables[1].rows.len(), 1);
        assert!(tables[2].rows.is_empty());
        assert!(tables[3].rows.is_empty());
        // Empty tables still carry the schema.
        assert!(!tables[2].columns.is_empty());
    }

    #[test]
    fn configured_columns_control_row_contents() {
        let columns = ColumnNames {
            id: Some("Molecule ID".into()),
            term_type: Some("Type of term".into()),
            index: [Some("Indx1".into()), Some("Indx2".into()), Some("Indx3".into()), None],
            element: [Some("El1".into()), Some("El2".into()), None, None],
            atom_indices: Some("atom indices".into()),
            term: Some("Term".into()),
            value: Some("Value (Å or º)".into()),
            conformation: None,
        };
        let config = AnalysisConfigBuilder::new()
            .target(Target::All)
            .table_output(TableOutput::Single)
            .columns(columns)
            .id_value("water")
            .build()
            .unwrap();

        let tables = build_tables(&water_structure(), &config, &water_terms());
        let table = &tables[0];
        assert_eq!(
            table.columns,
            vec![
                "Molecule ID",
                "Type of term",
                "Indx1",
                "Indx2",
                "Indx3",
                "El1",
                "El2",
                "atom indices",
                "Term",
                "Value (Å or º)"
            ]
        );

        // Bond row: third index cell is blank (arity 2).
        assert_eq!(
            table.rows[0],
            vec!["water", "bond", "1", "2", "", "O", "H", "1-2", "O-H", "0.9600"]
        );
        // Angle row: all three index cells filled.
        assert_eq!(
            table.rows[2],
            vec!["", "angle", "2", "1", "3", "H", "O", "2-1-3", "H-O-H", "104.4800"]
        );
    }

    #[test]
    fn only_first_id_blanks_subsequent_rows() {
        let columns = ColumnNames {
            id: Some("Molecule ID".into()),
            ..Default::default()
        };

        let first_only = AnalysisConfigBuilder::new()
            .target(Target::All)
            .table_output(TableOutput::Single)
            .columns(columns.clone())
            .id_value("water")
            .build()
            .unwrap();
        let tables = build_tables(&water_structure(), &first_only, &water_terms());
        let ids: Vec<&str> = tables[0].rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(ids, vec!["water", "", ""]);

        let every_row = AnalysisConfigBuilder::new()
            .target(Target::All)
            .table_output(TableOutput::Single)
            .columns(columns)
            .id_value("water")
            .only_first_id(false)
            .build()
            .unwrap();
        let tables = build_tables(&water_structure(), &every_row, &water_terms());
        let ids: Vec<&str> = tables[0].rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(ids, vec!["water", "water", "water"]);
    }

    #[test]
    fn undefined_values_render_the_sentinel() {
        let index = |n| AtomIndex::new(n).unwrap();
        let mut terms = EvaluatedTerms::default();
        terms.push(TermValue::new(
            Term::angle(index(2), index(1), index(3)),
            None,
            "H-O-H".into(),
        ));

        let config = AnalysisConfigBuilder::new()
            .target(Target::Angles)
            .table_output(TableOutput::Single)
            .build()
            .unwrap();
        let tables = build_tables(&water_structure(), &config, &terms);
        assert_eq!(tables[0].rows[0][1], "undefined");
    }

    #[test]
    fn conformation_column_labels_dihedral_rows() {
        let index = |n| AtomIndex::new(n).unwrap();
        let mut terms = EvaluatedTerms::default();
        terms.push(TermValue::new(
            Term::dihedral(index(1), index(2), index(3), index(3)),
            Some(178.2),
            "H-C-C-H".into(),
        ));

        let columns = ColumnNames {
            conformation: Some("Conformation".into()),
            ..Default::default()
        };
        let config = AnalysisConfigBuilder::new()
            .target(Target::Dihedrals)
            .table_output(TableOutput::Single)
            .columns(columns)
            .build()
            .unwrap();
        let tables = build_tables(&water_structure(), &config, &terms);
        assert_eq!(tables[0].rows[0][2], "ap");
    }

    #[test]
    fn write_csv_round_trips_through_a_file() {
        let config = AnalysisConfigBuilder::new()
            .target(Target::All)
            .table_output(TableOutput::Single)
            .build()
            .unwrap();
        let tables = build_tables(&water_structure(), &config, &water_terms());

        let dir = tempdir().unwrap();
        let path = dir.path().join("terms.csv");
        tables[0].write_csv(File::create(&path).unwrap()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "Term,Value (Å or º)");
        assert_eq!(lines.next().unwrap(), "O-H,0.9600");
        assert_eq!(content.lines().count(), 4);
    }
}
