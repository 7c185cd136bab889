use super::atom::Atom;
use super::unit::MolecularUnit;
use crate::core::elements::ElementTable;
use nalgebra::Point3;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TemplateAtomSpec {
    pub symbol: String,
    pub position: [f64; 3],
}

/// Raw description of a molecular template, as read from a TOML file.
///
/// ```toml
/// name = "water"
///
/// [[atoms]]
/// symbol = "O"
/// position = [0.0, -0.064, 0.0]
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TemplateSpec {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub atoms: Vec<TemplateAtomSpec>,
}

#[derive(Debug, Error)]
pub enum TemplateError {
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
    #[error("Template '{name}' contains no atoms")]
    Empty { name: String },
    #[error("Template '{name}' has a non-finite coordinate for atom {index} ('{symbol}')")]
    NonFiniteCoordinate {
        name: String,
        index: usize,
        symbol: String,
    },
}

impl TemplateSpec {
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let content = std::fs::read_to_string(path).map_err(|e| TemplateError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| TemplateError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}

/// The canonical molecular unit that every placement starts from.
///
/// Positions live in the template's own reference frame. Electronegativities
/// are resolved once, at construction, and never looked up again.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    name: String,
    unit: MolecularUnit,
}

impl Template {
    /// Resolves a raw template spec against an element table.
    ///
    /// Symbols missing from `elements` receive the default electronegativity
    /// and are reported with a warning rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Empty`] for a template without atoms and
    /// [`TemplateError::NonFiniteCoordinate`] if any coordinate is NaN or infinite.
    pub fn resolve(spec: &TemplateSpec, elements: &ElementTable) -> Result<Self, TemplateError> {
        let name = spec.name.clone().unwrap_or_else(|| "unnamed".to_string());
        if spec.atoms.is_empty() {
            return Err(TemplateError::Empty { name });
        }

        let mut atoms = Vec::with_capacity(spec.atoms.len());
        for (index, atom_spec) in spec.atoms.iter().enumerate() {
            let [x, y, z] = atom_spec.position;
            if !(x.is_finite() && y.is_finite() && z.is_finite()) {
                return Err(TemplateError::NonFiniteCoordinate {
                    name,
                    index,
                    symbol: atom_spec.symbol.clone(),
                });
            }
            atoms.push(resolve_atom(&name, atom_spec, elements));
        }

        debug!(template = %name, atoms = atoms.len(), "Template resolved.");
        Ok(Self {
            name,
            unit: MolecularUnit::new(atoms),
        })
    }

    /// The built-in three-site water template.
    pub fn water_spec() -> TemplateSpec {
        let atom = |symbol: &str, position: [f64; 3]| TemplateAtomSpec {
            symbol: symbol.to_string(),
            position,
        };
        TemplateSpec {
            name: Some("water".to_string()),
            atoms: vec![
                atom("O", [0.0, -0.064, 0.0]),
                atom("H", [0.816, 0.513, 0.0]),
                atom("H", [-0.816, 0.513, 0.0]),
            ],
        }
    }

    /// Water resolved against `elements`. Missing O or H entries fall back to
    /// the default electronegativity with a warning, as in [`Template::resolve`].
    pub fn water(elements: &ElementTable) -> Self {
        let spec = Self::water_spec();
        let name = "water".to_string();
        let atoms = spec
            .atoms
            .iter()
            .map(|atom_spec| resolve_atom(&name, atom_spec, elements))
            .collect();
        Self {
            name,
            unit: MolecularUnit::new(atoms),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> &MolecularUnit {
        &self.unit
    }

    pub fn atom_count(&self) -> usize {
        self.unit.len()
    }

    /// Largest distance from the template centroid to any of its atoms.
    pub fn max_extent(&self) -> f64 {
        let Some(center) = self.unit.centroid() else {
            return 0.0;
        };
        self.unit
            .iter()
            .map(|a| (a.position - center).norm())
            .fold(0.0, f64::max)
    }
}

fn resolve_atom(template: &str, spec: &TemplateAtomSpec, elements: &ElementTable) -> Atom {
    if !elements.contains(&spec.symbol) {
        warn!(
            symbol = %spec.symbol,
            "Unknown element in template '{}'; using default electronegativity.",
            template
        );
    }
    Atom::new(
        &spec.symbol,
        Point3::from(spec.position),
        elements.electronegativity_or_default(&spec.symbol),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::elements::DEFAULT_ELECTRONEGATIVITY;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn water_template_resolves_electronegativities() {
        let template = Template::water(&ElementTable::builtin());
        assert_eq!(template.name(), "water");
        assert_eq!(template.atom_count(), 3);

        let atoms = template.unit().atoms();
        assert_eq!(atoms[0].symbol, "O");
        assert_eq!(atoms[0].electronegativity, 3.44);
        assert_eq!(atoms[1].electronegativity, 2.20);
        assert_eq!(atoms[2].position, Point3::new(-0.816, 0.513, 0.0));
    }

    #[test]
    fn unknown_symbol_uses_default_electronegativity() {
        let spec = TemplateSpec {
            name: Some("argon".to_string()),
            atoms: vec![TemplateAtomSpec {
                symbol: "Ar".to_string(),
                position: [0.0, 0.0, 0.0],
            }],
        };
        let template = Template::resolve(&spec, &ElementTable::builtin()).unwrap();
        assert_eq!(
            template.unit().atoms()[0].electronegativity,
            DEFAULT_ELECTRONEGATIVITY
        );
    }

    #[test]
    fn water_against_empty_table_falls_back_and_matches_resolve() {
        let elements = ElementTable::empty();
        let water = Template::water(&elements);
        let resolved = Template::resolve(&Template::water_spec(), &elements).unwrap();

        assert_eq!(water, resolved);
        for atom in water.unit().atoms() {
            assert_eq!(atom.electronegativity, DEFAULT_ELECTRONEGATIVITY);
        }
    }

    #[test]
    fn empty_template_is_rejected() {
        let spec = TemplateSpec {
            name: None,
            atoms: vec![],
        };
        let result = Template::resolve(&spec, &ElementTable::builtin());
        assert!(matches!(result, Err(TemplateError::Empty { .. })));
    }

    #[test]
    fn non_finite_coordinate_is_rejected() {
        let spec = TemplateSpec {
            name: Some("bad".to_string()),
            atoms: vec![TemplateAtomSpec {
                symbol: "C".to_string(),
                position: [0.0, f64::NAN, 0.0],
            }],
        };
        let result = Template::resolve(&spec, &ElementTable::builtin());
        assert!(matches!(
            result,
            Err(TemplateError::NonFiniteCoordinate { index: 0, .. })
        ));
    }

    #[test]
    fn max_extent_measures_from_centroid() {
        let spec = TemplateSpec {
            name: Some("dimer".to_string()),
            atoms: vec![
                TemplateAtomSpec {
                    symbol: "C".to_string(),
                    position: [-1.0, 0.0, 0.0],
                },
                TemplateAtomSpec {
                    symbol: "C".to_string(),
                    position: [1.0, 0.0, 0.0],
                },
            ],
        };
        let template = Template::resolve(&spec, &ElementTable::builtin()).unwrap();
        assert!((template.max_extent() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn load_reads_template_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
name = "hcl"

[[atoms]]
symbol = "H"
position = [0.0, 0.0, 0.0]

[[atoms]]
symbol = "Cl"
position = [1.27, 0.0, 0.0]
"#
        )
        .unwrap();

        let spec = TemplateSpec::load(file.path()).unwrap();
        assert_eq!(spec.name.as_deref(), Some("hcl"));
        assert_eq!(spec.atoms.len(), 2);
        assert_eq!(spec.atoms[1].position, [1.27, 0.0, 0.0]);
    }

    #[test]
    fn load_rejects_malformed_template() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[[atoms]]\nsymbol = \"H\"\n").unwrap();

        let result = TemplateSpec::load(file.path());
        assert!(matches!(result, Err(TemplateError::Toml { .. })));
    }
}
