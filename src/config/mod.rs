//! JSON configuration of the `string_art` command-line tool.
use crate::export::ExportFormat;
use crate::sequencer::{Preset, StringArtParams};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct RunConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// Treat light source areas as needing thread.
    #[serde(default)]
    pub invert: bool,
    /// Applied on top of `params`, keeping its frame size.
    #[serde(default)]
    pub preset: Option<Preset>,
    #[serde(default)]
    pub params: StringArtParams,
    #[serde(default)]
    pub output: OutputConfig,
}

impl RunConfig {
    pub fn resolved_params(&self) -> StringArtParams {
        match self.preset {
            Some(preset) => self.params.clone().with_preset(preset),
            None => self.params.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    /// File stem of the instruction exports.
    pub basename: String,
    pub formats: Vec<ExportFormat>,
    /// Rendered thread preview (PNG), relative to `dir`.
    pub preview: Option<PathBuf>,
    /// Darkness left after the run (PNG), relative to `dir`.
    pub residual: Option<PathBuf>,
    /// Run summary (JSON), relative to `dir`.
    pub summary_json: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("out"),
            basename: "string-art-instructions".to_string(),
            formats: ExportFormat::ALL.to_vec(),
            preview: Some(PathBuf::from("preview.png")),
            residual: None,
            summary_json: Some(PathBuf::from("summary.json")),
        }
    }
}

impl OutputConfig {
    pub fn export_path(&self, format: ExportFormat) -> PathBuf {
        self.dir
            .join(format!("{}.{}", self.basename, format.extension()))
    }
}

pub fn load_config(path: &Path) -> Result<RunConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_fills_defaults() {
        let cfg: RunConfig = serde_json::from_str(r#"{ "input": "cat.png" }"#).unwrap();
        assert_eq!(cfg.input, PathBuf::from("cat.png"));
        assert!(!cfg.invert);
        assert_eq!(cfg.resolved_params(), StringArtParams::default());
        assert_eq!(cfg.output.formats, ExportFormat::ALL.to_vec());
        assert_eq!(
            cfg.output.export_path(ExportFormat::Csv),
            PathBuf::from("out/string-art-instructions.csv")
        );
    }

    #[test]
    fn preset_overrides_params_but_not_frame() {
        let cfg: RunConfig = serde_json::from_str(
            r#"{
                "input": "cat.png",
                "invert": true,
                "preset": "minimal",
                "params": { "frame_size": 400, "iterations": 9 },
                "output": { "dir": "run1", "formats": ["csv"], "preview": null }
            }"#,
        )
        .unwrap();
        let params = cfg.resolved_params();
        assert_eq!(params.pegs_per_side, 4);
        assert_eq!(params.iterations, 200);
        assert_eq!(params.frame_size, 400.0);
        assert!(cfg.invert);
        assert_eq!(cfg.output.formats, vec![ExportFormat::Csv]);
        assert!(cfg.output.preview.is_none());
        assert_eq!(cfg.output.basename, "string-art-instructions");
    }

    #[test]
    fn unknown_format_is_a_parse_error() {
        let parsed: Result<RunConfig, _> =
            serde_json::from_str(r#"{ "input": "a.png", "output": { "formats": ["xml"] } }"#);
        assert!(parsed.is_err());
    }
}
