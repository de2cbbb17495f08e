use crate::error::PartnerFitError;
use crate::sources::{SearchQuery, SizeBand};
use clap::ValueEnum;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartnerFitConfig {
    pub search: Option<SearchConfig>,
    pub sources: Option<SourcesConfig>,
    pub report: Option<ReportConfig>,
    pub telemetry: Option<TelemetryConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub query: Option<String>,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub min_size: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    pub catalog: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

pub const DEFAULT_QUERY: &str = "digital marketing agency";

impl PartnerFitConfig {
    /// Search defaults from `[search]`; an unset query falls back to the
    /// stock agency query.
    pub fn search_query(&self) -> Result<SearchQuery, PartnerFitError> {
        let search = self.search.as_ref();
        let min_size = match search.and_then(|search| search.min_size.as_deref()) {
            Some(label) => parse_size_band(label)?,
            None => SizeBand::default(),
        };
        Ok(SearchQuery {
            query: search
                .and_then(|search| search.query.clone())
                .unwrap_or_else(|| DEFAULT_QUERY.to_string()),
            location: search.and_then(|search| search.location.clone()),
            industry: search.and_then(|search| search.industry.clone()),
            min_size,
        })
    }

    pub fn catalog_path(&self) -> Option<&str> {
        self.sources
            .as_ref()
            .and_then(|sources| sources.catalog.as_deref())
    }

    pub fn report_format(&self) -> Option<&str> {
        self.report
            .as_ref()
            .and_then(|report| report.format.as_deref())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.telemetry
            .as_ref()
            .map(|telemetry| telemetry.log_level.as_str())
    }

    pub fn validate(&self) -> Result<(), PartnerFitError> {
        if let Some(format) = self.report_format() {
            if !matches!(format, "md" | "json") {
                return Err(PartnerFitError::ConfigParse(format!(
                    "unsupported report.format: {format}"
                )));
            }
        }

        if let Some(label) = self
            .search
            .as_ref()
            .and_then(|search| search.min_size.as_deref())
        {
            parse_size_band(label)?;
        }

        if let Some(catalog) = self.catalog_path() {
            if catalog.trim().is_empty() {
                return Err(PartnerFitError::ConfigParse(
                    "sources.catalog must be a non-empty path".to_string(),
                ));
            }
        }

        if let Some(level) = self.log_level() {
            if level.trim().is_empty() {
                return Err(PartnerFitError::ConfigParse(
                    "telemetry.log_level must not be empty".to_string(),
                ));
            }
            EnvFilter::try_new(level).map_err(|e| {
                PartnerFitError::ConfigParse(format!("invalid telemetry.log_level '{level}': {e}"))
            })?;
        }

        Ok(())
    }
}

fn parse_size_band(label: &str) -> Result<SizeBand, PartnerFitError> {
    <SizeBand as ValueEnum>::from_str(label, false)
        .map_err(|_| PartnerFitError::ConfigParse(format!("unsupported search.min_size: {label}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config_uses_defaults() {
        let cfg: PartnerFitConfig = toml::from_str("").expect("empty config should parse");
        let query = cfg.search_query().expect("defaults should resolve");
        assert_eq!(query.query, DEFAULT_QUERY);
        assert_eq!(query.min_size, SizeBand::Any);
        assert!(cfg.catalog_path().is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[search]
query = "revops"
location = "Austin"
industry = "Consulting"
min_size = "51-200"

[sources]
catalog = "catalog.json"

[report]
format = "json"

[telemetry]
log_level = "debug"
"#;
        let cfg: PartnerFitConfig = toml::from_str(toml_str).expect("full config should parse");
        assert!(cfg.validate().is_ok());
        let query = cfg.search_query().expect("search should resolve");
        assert_eq!(query.query, "revops");
        assert_eq!(query.location.as_deref(), Some("Austin"));
        assert_eq!(query.min_size, SizeBand::Mid);
        assert_eq!(cfg.catalog_path(), Some("catalog.json"));
        assert_eq!(cfg.report_format(), Some("json"));
        assert_eq!(cfg.log_level(), Some("debug"));
    }

    #[test]
    fn telemetry_level_defaults_to_warn() {
        let cfg: PartnerFitConfig = toml::from_str("[telemetry]\n").expect("config should parse");
        assert_eq!(cfg.log_level(), Some("warn"));
    }

    #[test]
    fn validate_rejects_unknown_report_format() {
        let cfg: PartnerFitConfig =
            toml::from_str("[report]\nformat = \"sarif\"\n").expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unsupported report.format"));
    }

    #[test]
    fn validate_rejects_unknown_size_band() {
        let cfg: PartnerFitConfig =
            toml::from_str("[search]\nmin_size = \"huge\"\n").expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unsupported search.min_size: huge"));
    }

    #[test]
    fn validate_rejects_blank_log_level() {
        let cfg: PartnerFitConfig =
            toml::from_str("[telemetry]\nlog_level = \" \"\n").expect("config should parse");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_malformed_log_level() {
        let cfg: PartnerFitConfig =
            toml::from_str("[telemetry]\nlog_level = \"partner_fit=loud\"\n").expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("invalid telemetry.log_level 'partner_fit=loud'"));
    }

    #[test]
    fn validate_accepts_directive_log_level() {
        let cfg: PartnerFitConfig =
            toml::from_str("[telemetry]\nlog_level = \"partner_fit=debug,warn\"\n").expect("config should parse");
        assert!(cfg.validate().is_ok());
    }
}
