use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::utils::parser;
use profitzones::engine::config::{ZoneMappingConfig, ZoneMappingConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct PartialMappingConfig {
    #[serde(rename = "reference-atom")]
    reference_atom: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct PartialAnnotationConfig {
    enabled: Option<bool>,
    #[serde(rename = "core-value")]
    core_value: Option<f64>,
    #[serde(rename = "background-value")]
    background_value: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct PartialReportConfig {
    #[serde(rename = "show-positions")]
    show_positions: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct PartialZonesConfig {
    mapping: Option<PartialMappingConfig>,
    annotation: Option<PartialAnnotationConfig>,
    report: Option<PartialReportConfig>,
}

/// Everything the `zones` command needs once file, `--set` and flag values are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSettings {
    pub mapping: ZoneMappingConfig,
    pub show_positions: bool,
}

impl PartialZonesConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let config_error = |source: anyhow::Error| CliError::FileParsing {
            kind: "configuration file",
            path: path.to_path_buf(),
            source,
        };
        let content = std::fs::read_to_string(path).map_err(|e| config_error(e.into()))?;
        toml::from_str(&content).map_err(|e| config_error(e.into()))
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Precedence: command-line flags, then `--set`, then the file, then defaults.
    pub fn merge_with_cli(mut self, cli: &Cli) -> Result<ResolvedSettings> {
        self.apply_set_values(&cli.set_values)?;

        let mapping = self.mapping.take().unwrap_or_default();
        let annotation = self.annotation.take().unwrap_or_default();
        let report = self.report.take().unwrap_or_default();

        let mut builder = ZoneMappingConfigBuilder::new();
        if let Some(name) = cli.reference_atom.clone().or(mapping.reference_atom) {
            builder = builder.reference_atom(name);
        }
        if let Some(value) = annotation.core_value {
            builder = builder.core_value(value);
        }
        if let Some(value) = annotation.background_value {
            builder = builder.background_value(value);
        }
        if let Some(enabled) = annotation.enabled {
            builder = builder.annotate(enabled);
        }

        let mapping = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;
        let show_positions = cli.show_positions || report.show_positions.unwrap_or(false);

        if !mapping.annotate && (cli.output1.is_some() || cli.output2.is_some()) {
            return Err(CliError::Argument(
                "--o1/--o2 write annotated structures, but annotation is disabled".to_string(),
            ));
        }

        debug!(?mapping, show_positions, "Resolved configuration.");
        Ok(ResolvedSettings {
            mapping,
            show_positions,
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value) = parser::parse_key_value(kv_pair)?;
            match key {
                "mapping.reference-atom" => {
                    self.mapping
                        .get_or_insert_with(Default::default)
                        .reference_atom = Some(value.to_string());
                }
                "annotation.enabled" => {
                    self.annotation.get_or_insert_with(Default::default).enabled =
                        Some(parser::parse_bool(key, value)?);
                }
                "annotation.core-value" => {
                    self.annotation
                        .get_or_insert_with(Default::default)
                        .core_value = Some(parser::parse_float(key, value)?);
                }
                "annotation.background-value" => {
                    self.annotation
                        .get_or_insert_with(Default::default)
                        .background_value = Some(parser::parse_float(key, value)?);
                }
                "report.show-positions" => {
                    self.report
                        .get_or_insert_with(Default::default)
                        .show_positions = Some(parser::parse_bool(key, value)?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn cli(extra: &[&str]) -> Cli {
        let mut args = vec!["zones2ssap"];
        args.extend_from_slice(extra);
        args.extend_from_slice(&["zones.txt", "a.pdb", "b.pdb"]);
        Cli::try_parse_from(args).unwrap()
    }

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_file_or_flags() {
        let settings = PartialZonesConfig::default()
            .merge_with_cli(&cli(&[]))
            .unwrap();
        assert_eq!(settings.mapping, ZoneMappingConfig::default());
        assert!(!settings.show_positions);
    }

    #[test]
    fn file_values_are_loaded() {
        let file = config_file(
            r#"
[mapping]
reference-atom = "CB"

[annotation]
enabled = true
core-value = 50.0
background-value = -1.0

[report]
show-positions = true
"#,
        );
        let settings = PartialZonesConfig::from_file(file.path())
            .unwrap()
            .merge_with_cli(&cli(&[]))
            .unwrap();
        assert_eq!(settings.mapping.reference_atom, "CB");
        assert_eq!(settings.mapping.values.core, 50.0);
        assert_eq!(settings.mapping.values.background, -1.0);
        assert!(settings.show_positions);
    }

    #[test]
    fn set_values_override_file_and_flags_override_set_values() {
        let file = config_file("[mapping]\nreference-atom = \"CB\"\n[annotation]\ncore-value = 5.0\n");
        let settings = PartialZonesConfig::from_file(file.path())
            .unwrap()
            .merge_with_cli(&cli(&[
                "-S",
                "annotation.core-value=9",
                "-S",
                "mapping.reference-atom=N",
                "--reference-atom",
                "C",
            ]))
            .unwrap();
        assert_eq!(settings.mapping.values.core, 9.0);
        assert_eq!(settings.mapping.reference_atom, "C");
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let file = config_file("[mapping]\nreference-atoms = \"CA\"\n");
        let result = PartialZonesConfig::from_file(file.path());
        assert!(matches!(
            result,
            Err(CliError::FileParsing {
                kind: "configuration file",
                ..
            })
        ));
    }

    #[test]
    fn invalid_set_values_are_config_errors() {
        for bad in ["annotation.core-value", "annotation.core-value=x", "foo.bar=1"] {
            let result = PartialZonesConfig::default().merge_with_cli(&cli(&["-S", bad]));
            assert!(matches!(result, Err(CliError::Config(_))), "{bad}");
        }
    }

    #[test]
    fn builder_validation_surfaces_as_config_error() {
        let result = PartialZonesConfig::default()
            .merge_with_cli(&cli(&["--reference-atom", "TOOLONG"]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn missing_config_file_names_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = PartialZonesConfig::load(Some(&path)).unwrap_err();

        assert!(matches!(
            &err,
            CliError::FileParsing {
                kind: "configuration file",
                path: p,
                ..
            } if *p == path
        ));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn output_files_require_annotation() {
        let result = PartialZonesConfig::default().merge_with_cli(&cli(&[
            "-S",
            "annotation.enabled=false",
            "--o1",
            "a.core.pdb",
        ]));
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn annotation_can_be_disabled_via_set() {
        let settings = PartialZonesConfig::default()
            .merge_with_cli(&cli(&["-S", "annotation.enabled=false"]))
            .unwrap();
        assert!(!settings.mapping.annotate);
    }
}
