use thiserror::Error;

pub const DEFAULT_REFERENCE_ATOM: &str = "CA";
pub const DEFAULT_CORE_VALUE: f64 = 1.0;
pub const DEFAULT_BACKGROUND_VALUE: f64 = 0.0;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// B-values written by the annotator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotationValues {
    /// Value given to atoms inside an aligned zone.
    pub core: f64,
    /// Value every atom is reset to before zones are applied.
    pub background: f64,
}

impl Default for AnnotationValues {
    fn default() -> Self {
        Self {
            core: DEFAULT_CORE_VALUE,
            background: DEFAULT_BACKGROUND_VALUE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneMappingConfig {
    /// Atom name that defines one position per residue in ProFit's numbering.
    pub reference_atom: String,
    pub values: AnnotationValues,
    /// Whether the workflow rewrites B-values of the input structures.
    pub annotate: bool,
}

impl Default for ZoneMappingConfig {
    fn default() -> Self {
        Self {
            reference_atom: DEFAULT_REFERENCE_ATOM.to_string(),
            values: AnnotationValues::default(),
            annotate: true,
        }
    }
}

#[derive(Default)]
pub struct ZoneMappingConfigBuilder {
    reference_atom: Option<String>,
    core_value: Option<f64>,
    background_value: Option<f64>,
    annotate: Option<bool>,
}

impl ZoneMappingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reference_atom(mut self, name: impl Into<String>) -> Self {
        self.reference_atom = Some(name.into());
        self
    }
    pub fn core_value(mut self, value: f64) -> Self {
        self.core_value = Some(value);
        self
    }
    pub fn background_value(mut self, value: f64) -> Self {
        self.background_value = Some(value);
        self
    }
    pub fn annotate(mut self, enabled: bool) -> Self {
        self.annotate = Some(enabled);
        self
    }

    pub fn build(self) -> Result<ZoneMappingConfig, ConfigError> {
        let reference_atom = self
            .reference_atom
            .unwrap_or_else(|| DEFAULT_REFERENCE_ATOM.to_string())
            .trim()
            .to_string();
        if reference_atom.is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "reference_atom",
                reason: "atom name must not be empty".to_string(),
            });
        }
        if reference_atom.len() > 4 {
            return Err(ConfigError::InvalidParameter {
                name: "reference_atom",
                reason: format!("'{}' is longer than a PDB atom name", reference_atom),
            });
        }

        let values = AnnotationValues {
            core: self.core_value.unwrap_or(DEFAULT_CORE_VALUE),
            background: self.background_value.unwrap_or(DEFAULT_BACKGROUND_VALUE),
        };
        for (name, value) in [
            ("core_value", values.core),
            ("background_value", values.background),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidParameter {
                    name,
                    reason: format!("{} is not a finite number", value),
                });
            }
        }

        Ok(ZoneMappingConfig {
            reference_atom,
            values,
            annotate: self.annotate.unwrap_or(true),
        })
    }
}
