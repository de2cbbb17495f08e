use crate::error::{PartnerFitError, Result};
use crate::types::report::Analysis;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const EXPORT_DIR: &str = ".partner-fit/exports";

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisExport<'a> {
    pub version: String,
    pub generated_at: String,
    pub analyses: Vec<&'a Analysis>,
}

impl<'a> AnalysisExport<'a> {
    pub fn new(analyses: Vec<&'a Analysis>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            analyses,
        }
    }
}

pub fn write_export(root: &Path, export: &AnalysisExport<'_>) -> Result<PathBuf> {
    let dir = root.join(EXPORT_DIR);
    fs::create_dir_all(&dir).map_err(PartnerFitError::Io)?;
    let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
    let out_path = dir.join(format!("analysis-{stamp}.json"));
    let json = serde_json::to_string_pretty(export)?;
    fs::write(&out_path, json).map_err(PartnerFitError::Io)?;
    tracing::info!(path = %out_path.display(), analyses = export.analyses.len(), "analysis exported");
    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::{self, test_support::company};
    use tempfile::TempDir;

    #[test]
    fn write_export_creates_json_file_with_analyses() {
        let dir = TempDir::new().expect("temp dir should be created");
        let analysis =
            analyze::evaluate(Some(&company(75)), None, None).expect("evaluate should succeed");

        let path = write_export(dir.path(), &AnalysisExport::new(vec![&analysis]))
            .expect("export should write");
        assert!(path.starts_with(dir.path().join(EXPORT_DIR)));

        let content = fs::read_to_string(&path).expect("export should be readable");
        let value: serde_json::Value = serde_json::from_str(&content).expect("export is json");
        assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(value["analyses"][0]["company"]["name"], "Sample Agency");
    }
}
