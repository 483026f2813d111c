use crate::analysis::config::{AnalysisConfig, Target};
use crate::analysis::enumerate::enumerate_terms;
use crate::analysis::error::AnalysisError;
use crate::analysis::evaluate::evaluate;
use crate::analysis::specification::parse_specification;
use crate::analysis::term::{EvaluatedTerms, Term, TermValue};
use crate::core::models::system::Structure;
use crate::report::label::term_label;
use crate::report::rows::{ResultTable, build_tables};
use crate::report::text::render_report;
use tracing::{debug, info, instrument, warn};

/// The complete output of one analysis pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Every evaluated term, grouped by kind in discovery order.
    pub terms: EvaluatedTerms,
    /// The plain-text report.
    pub report: String,
    /// Result tables, shaped by the configured table output mode.
    pub tables: Vec<ResultTable>,
}

/// Runs one full analysis pass over a structure.
///
/// Terms come from the bond graph, or from the configured specification when
/// the target is `Specified`. Each term is evaluated independently; a term
/// with degenerate geometry is kept with an undefined value and logged, it
/// never fails the pass. Errors are confined to configuration and
/// specification problems.
#[instrument(skip_all, name = "geometry_analysis")]
pub fn run(structure: &Structure, config: &AnalysisConfig) -> Result<AnalysisResult, AnalysisError> {
    info!(
        atoms = structure.atom_count(),
        bonds = structure.bonds().len(),
        target = %config.target,
        "Starting valence geometry analysis."
    );

    let terms = collect_terms(structure, config)?;
    debug!(count = terms.len(), "Collected terms for evaluation.");

    let mut evaluated = EvaluatedTerms::default();
    for term in terms {
        let value = evaluate(structure, &term);
        if value.is_none() {
            warn!(
                kind = %term.kind(),
                atoms = %term.indices_label(),
                "Term has degenerate geometry; reporting it as undefined."
            );
        }
        let label = term_label(structure, &term);
        evaluated.push(TermValue::new(term, value, label));
    }

    let report = render_report(&evaluated);
    let tables = build_tables(structure, config, &evaluated);

    info!(
        bonds = evaluated.bonds.len(),
        angles = evaluated.angles.len(),
        dihedrals = evaluated.dihedrals.len(),
        out_of_planes = evaluated.out_of_planes.len(),
        tables = tables.len(),
        "Analysis pass complete."
    );

    Ok(AnalysisResult {
        terms: evaluated,
        report,
        tables,
    })
}

fn collect_terms(
    structure: &Structure,
    config: &AnalysisConfig,
) -> Result<Vec<Term>, AnalysisError> {
    if config.target == Target::Specified {
        let terms = parse_specification(&config.specification, structure, config.four_index)?;
        Ok(terms)
    } else {
        Ok(enumerate_terms(structure, config.target))
    }
}
