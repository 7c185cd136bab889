use phf::{Map, phf_map};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Electronegativity assigned to symbols missing from the table (Pauling scale).
pub const DEFAULT_ELECTRONEGATIVITY: f64 = 2.5;

/// Physical constants of a chemical element used by the packing engine.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ElementProperties {
    /// Covalent radius in Angstroms, used for bond inference.
    pub covalent_radius: f64,
    /// Van der Waals radius in Angstroms.
    pub vdw_radius: f64,
    /// Typical number of covalent bonds.
    pub valency: u8,
    /// Electronegativity on the Pauling scale.
    pub electronegativity: f64,
}

static BUILTIN_ELEMENTS: Map<&'static str, ElementProperties> = phf_map! {
    "H" => ElementProperties { covalent_radius: 0.31, vdw_radius: 1.20, valency: 1, electronegativity: 2.20 },
    "C" => ElementProperties { covalent_radius: 0.76, vdw_radius: 1.70, valency: 4, electronegativity: 2.55 },
    "N" => ElementProperties { covalent_radius: 0.71, vdw_radius: 1.55, valency: 3, electronegativity: 3.04 },
    "O" => ElementProperties { covalent_radius: 0.66, vdw_radius: 1.52, valency: 2, electronegativity: 3.44 },
    "F" => ElementProperties { covalent_radius: 0.57, vdw_radius: 1.47, valency: 1, electronegativity: 3.98 },
    "P" => ElementProperties { covalent_radius: 1.07, vdw_radius: 1.80, valency: 3, electronegativity: 2.19 },
    "S" => ElementProperties { covalent_radius: 1.05, vdw_radius: 1.80, valency: 2, electronegativity: 2.58 },
    "Cl" => ElementProperties { covalent_radius: 1.02, vdw_radius: 1.75, valency: 1, electronegativity: 3.16 },
};

#[derive(Debug, Error)]
pub enum ElementTableError {
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

/// Read-only lookup from chemical symbol to [`ElementProperties`].
///
/// Symbols are matched exactly (`"Cl"`, not `"CL"`). Lookups for unknown
/// symbols fall back to defined defaults instead of failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementTable {
    elements: HashMap<String, ElementProperties>,
}

impl ElementTable {
    /// Returns an empty table. Every lookup on it falls back to defaults.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the built-in table covering H, C, N, O, F, P, S and Cl.
    pub fn builtin() -> Self {
        Self {
            elements: BUILTIN_ELEMENTS
                .entries()
                .map(|(symbol, props)| (symbol.to_string(), *props))
                .collect(),
        }
    }

    /// Loads a table from a TOML file with one `[Symbol]` section per element.
    pub fn load(path: &Path) -> Result<Self, ElementTableError> {
        let content = std::fs::read_to_string(path).map_err(|e| ElementTableError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content).map_err(|e| ElementTableError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let elements: HashMap<String, ElementProperties> = toml::from_str(content)?;
        Ok(Self { elements })
    }

    /// Returns a new table where entries of `overrides` replace or extend this one.
    pub fn merged_with(mut self, overrides: ElementTable) -> Self {
        self.elements.extend(overrides.elements);
        self
    }

    pub fn get(&self, symbol: &str) -> Option<&ElementProperties> {
        self.elements.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.elements.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Covalent radius of `symbol`, or 0.0 when the symbol is unknown.
    pub fn covalent_radius(&self, symbol: &str) -> f64 {
        self.get(symbol).map_or(0.0, |p| p.covalent_radius)
    }

    /// Electronegativity of `symbol`, or [`DEFAULT_ELECTRONEGATIVITY`] when unknown.
    pub fn electronegativity_or_default(&self, symbol: &str) -> f64 {
        self.get(symbol)
            .map_or(DEFAULT_ELECTRONEGATIVITY, |p| p.electronegativity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn builtin_table_contains_expected_elements() {
        let table = ElementTable::builtin();
        assert_eq!(table.len(), 8);
        for symbol in ["H", "C", "N", "O", "F", "P", "S", "Cl"] {
            assert!(table.contains(symbol), "missing {}", symbol);
        }
        assert!(!table.contains("CL"));
    }

    #[test]
    fn builtin_values_match_reference_constants() {
        let table = ElementTable::builtin();
        let oxygen = table.get("O").unwrap();
        assert_eq!(oxygen.covalent_radius, 0.66);
        assert_eq!(oxygen.vdw_radius, 1.52);
        assert_eq!(oxygen.valency, 2);
        assert_eq!(oxygen.electronegativity, 3.44);
        assert_eq!(table.covalent_radius("H"), 0.31);
        assert_eq!(table.electronegativity_or_default("Cl"), 3.16);
    }

    #[test]
    fn unknown_symbols_fall_back_to_defaults() {
        let table = ElementTable::builtin();
        assert_eq!(table.covalent_radius("Xe"), 0.0);
        assert_eq!(
            table.electronegativity_or_default("Xe"),
            DEFAULT_ELECTRONEGATIVITY
        );

        let empty = ElementTable::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.electronegativity_or_default("O"), 2.5);
    }

    #[test]
    fn load_reads_valid_toml_table() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[Si]
covalent-radius = 1.11
vdw-radius = 2.10
valency = 4
electronegativity = 1.90

[O]
covalent-radius = 0.70
vdw-radius = 1.52
valency = 2
electronegativity = 3.44
"#
        )
        .unwrap();

        let table = ElementTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("Si").unwrap().valency, 4);
        assert_eq!(table.covalent_radius("O"), 0.70);
    }

    #[test]
    fn merged_with_overrides_and_extends() {
        let overrides = ElementTable::from_toml_str(
            r#"
            [O]
            covalent-radius = 0.70
            vdw-radius = 1.5
            valency = 2
            electronegativity = 3.5

            [Si]
            covalent-radius = 1.11
            vdw-radius = 2.1
            valency = 4
            electronegativity = 1.9
            "#,
        )
        .unwrap();
        let table = ElementTable::builtin().merged_with(overrides);

        assert_eq!(table.len(), 9);
        assert_eq!(table.covalent_radius("O"), 0.70);
        assert_eq!(table.electronegativity_or_default("Si"), 1.9);
        assert_eq!(table.covalent_radius("H"), 0.31);
    }

    #[test]
    fn returns_io_error_for_nonexistent_file() {
        let result = ElementTable::load(Path::new("nonexistent_elements.toml"));
        assert!(matches!(result, Err(ElementTableError::Io { .. })));
    }

    #[test]
    fn returns_toml_error_for_unknown_field() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[H]
covalent-radius = 0.31
vdw-radius = 1.2
valency = 1
electronegativity = 2.2
color = "blue"
"#
        )
        .unwrap();

        let result = ElementTable::load(file.path());
        assert!(matches!(result, Err(ElementTableError::Toml { .. })));
    }
}
