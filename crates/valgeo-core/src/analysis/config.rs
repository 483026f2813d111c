use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Failures when loading an [`AnalysisConfig`] from a TOML file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Which term kinds an analysis pass derives from connectivity.
///
/// `Specified` switches the pass to specified mode, where terms come from
/// the free-text specification instead of the bond graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    #[default]
    All,
    Bonds,
    Angles,
    Dihedrals,
    OutOfPlanes,
    BondsAndAngles,
    Specified,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid target string")]
pub struct ParseTargetError;

impl FromStr for Target {
    type Err = ParseTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "bonds" => Ok(Self::Bonds),
            "angles" => Ok(Self::Angles),
            "dihedrals" => Ok(Self::Dihedrals),
            "out-of-planes" | "out of planes" => Ok(Self::OutOfPlanes),
            "bonds-and-angles" | "bonds and angles" => Ok(Self::BondsAndAngles),
            "specified" | "specified terms" => Ok(Self::Specified),
            _ => Err(ParseTargetError),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::All => "all",
                Self::Bonds => "bonds",
                Self::Angles => "angles",
                Self::Dihedrals => "dihedrals",
                Self::OutOfPlanes => "out-of-planes",
                Self::BondsAndAngles => "bonds and angles",
                Self::Specified => "specified terms",
            }
        )
    }
}

/// How a 4-index specification entry is interpreted.
///
/// Both dihedrals and out-of-planes have arity 4, so the entry alone is
/// ambiguous. The default is `Dihedral`; callers wanting out-of-plane
/// groups opt in explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FourIndexPolicy {
    #[default]
    Dihedral,
    OutOfPlane,
}

/// Whether and how evaluated terms become result-table rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableOutput {
    /// Text report only; no row records.
    #[default]
    None,
    /// One combined table holding every term, with a term-type column.
    Single,
    /// One table per term kind.
    Separate,
}

/// Names for the external tables rows are routed to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TableNames {
    pub combined: String,
    pub bonds: String,
    pub angles: String,
    pub dihedrals: String,
    pub out_of_planes: String,
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            combined: "valence terms".to_string(),
            bonds: "bonds".to_string(),
            angles: "angles".to_string(),
            dihedrals: "dihedrals".to_string(),
            out_of_planes: "out-of-planes".to_string(),
        }
    }
}

/// Column names for result-table rows.
///
/// A column is emitted only when its name is configured; unset columns are
/// skipped entirely. By default only the term label and value columns are
/// active.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ColumnNames {
    /// The molecule/structure identifier column.
    pub id: Option<String>,
    /// The kind of term: bond, angle, dihedral, out-of-plane.
    pub term_type: Option<String>,
    /// Per-position atom index columns (1st through 4th atom).
    pub index: [Option<String>; 4],
    /// Per-position element symbol columns (1st through 4th atom).
    pub element: [Option<String>; 4],
    /// The index-chain column, e.g. "2-1-3".
    pub atom_indices: Option<String>,
    /// The element-symbol term label column, e.g. "C=C-H".
    pub term: Option<String>,
    /// The computed value column.
    pub value: Option<String>,
    /// The synoptic conformation label (dihedral rows only).
    pub conformation: Option<String>,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            id: None,
            term_type: None,
            index: [None, None, None, None],
            element: [None, None, None, None],
            atom_indices: None,
            term: Some("Term".to_string()),
            value: Some("Value (Å or º)".to_string()),
            conformation: None,
        }
    }
}

/// The full configuration surface of one analysis pass.
///
/// Built via [`AnalysisConfigBuilder`] or deserialized from TOML with
/// [`AnalysisConfig::load`]. Validated at the boundary; the enumeration and
/// evaluation layers never re-check it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AnalysisConfig {
    #[serde(default)]
    pub target: Target,
    /// Free-text term chains, used only when `target` is `Specified`.
    #[serde(default)]
    pub specification: String,
    #[serde(default)]
    pub four_index: FourIndexPolicy,
    #[serde(default)]
    pub table_output: TableOutput,
    #[serde(default)]
    pub table_names: TableNames,
    #[serde(default)]
    pub columns: ColumnNames,
    /// The identifier replicated across a table's rows (e.g. a system name).
    #[serde(default)]
    pub id_value: Option<String>,
    /// Emit the identifier only on the first row, blanks after.
    #[serde(default = "default_only_first_id")]
    pub only_first_id: bool,
}

fn default_only_first_id() -> bool {
    true
}

impl AnalysisConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    target: Option<Target>,
    specification: Option<String>,
    four_index: Option<FourIndexPolicy>,
    table_output: Option<TableOutput>,
    table_names: Option<TableNames>,
    columns: Option<ColumnNames>,
    id_value: Option<String>,
    only_first_id: Option<bool>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }
    pub fn specification(mut self, specification: &str) -> Self {
        self.specification = Some(specification.to_string());
        self
    }
    pub fn four_index(mut self, policy: FourIndexPolicy) -> Self {
        self.four_index = Some(policy);
        self
    }
    pub fn table_output(mut self, output: TableOutput) -> Self {
        self.table_output = Some(output);
        self
    }
    pub fn table_names(mut self, names: TableNames) -> Self {
        self.table_names = Some(names);
        self
    }
    pub fn columns(mut self, columns: ColumnNames) -> Self {
        self.columns = Some(columns);
        self
    }
    pub fn id_value(mut self, id: &str) -> Self {
        self.id_value = Some(id.to_string());
        self
    }
    pub fn only_first_id(mut self, only_first: bool) -> Self {
        self.only_first_id = Some(only_first);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let target = self.target.ok_or(ConfigError::MissingParameter("target"))?;
        let specification = self.specification.unwrap_or_default();
        if target == Target::Specified && specification.trim().is_empty() {
            return Err(ConfigError::MissingParameter("specification"));
        }
        Ok(AnalysisConfig {
            target,
            specification,
            four_index: self.four_index.unwrap_or_default(),
            table_output: self.table_output.unwrap_or_default(),
            table_names: self.table_names.unwrap_or_default(),
            columns: self.columns.unwrap_or_default(),
            id_value: self.id_value,
            only_first_id: self.only_first_id.unwrap_or(true),
        })
    }
}
