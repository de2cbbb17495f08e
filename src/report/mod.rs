pub mod export;
pub mod json;
pub mod md;

use crate::error::PartnerFitError;
use crate::types::report::Analysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    pub fn from_config(value: &str) -> Option<Self> {
        match value {
            "json" => Some(Self::Json),
            "md" => Some(Self::Md),
            _ => None,
        }
    }
}

pub fn render(analyses: &[&Analysis], format: OutputFormat) -> Result<String, PartnerFitError> {
    match format {
        OutputFormat::Json => json::to_json(analyses).map_err(PartnerFitError::Json),
        OutputFormat::Md => Ok(md::to_markdown(analyses)),
    }
}
