use crate::error::{PartnerFitError, Result};
use crate::types::config::PartnerFitConfig;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

pub const DEFAULT_CONFIG_FILE: &str = "partner-fit.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".partner-fit/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/partner-fit/config.toml";

pub fn load_config(root: &Path) -> Result<Option<PartnerFitConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Layers global, project and local files in that order; later layers win
/// key by key inside each section. Returns `None` when none of them exist.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<PartnerFitConfig>> {
    let layers = global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([root.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_LOCAL_FILE)]);

    let mut merged: Option<Table> = None;
    for path in layers {
        if let Some(layer) = read_layer(&path)? {
            tracing::debug!(path = %path.display(), "config layer applied");
            overlay(merged.get_or_insert_with(Table::new), layer);
        }
    }
    let Some(merged) = merged else {
        return Ok(None);
    };

    let cfg: PartnerFitConfig = Value::Table(merged)
        .try_into()
        .map_err(|e: toml::de::Error| PartnerFitError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn read_layer(path: &Path) -> Result<Option<Table>> {
    if !path.is_file() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    content
        .parse::<Table>()
        .map(Some)
        .map_err(|e| PartnerFitError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Sections present in both tables are merged recursively; any other value
/// in `layer` replaces the one in `base`.
fn overlay(base: &mut Table, layer: Table) {
    for (key, value) in layer {
        match (base.get_mut(&key), value) {
            (Some(Value::Table(section)), Value::Table(incoming)) => overlay(section, incoming),
            (Some(slot), value) => *slot = value,
            (None, value) => {
                base.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::SizeBand;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_no_file_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_merges_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[search]
query = "global query"
location = "Chicago"

[telemetry]
log_level = "info"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[search]
query = "revops"
min_size = "51-200"

[report]
format = "json"
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".partner-fit")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[report]
format = "md"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        let query = cfg.search_query().expect("search should resolve");
        assert_eq!(query.query, "revops");
        assert_eq!(query.location.as_deref(), Some("Chicago"));
        assert_eq!(query.min_size, SizeBand::Mid);
        assert_eq!(cfg.report_format(), Some("md"));
        assert_eq!(cfg.log_level(), Some("info"));
    }

    #[test]
    fn load_config_uses_global_file_alone() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");
        fs::write(&global_path, "[report]\nformat = \"json\"\n").expect("global should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("global config should be used");
        assert_eq!(cfg.report_format(), Some("json"));
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[report]\nformat = \"pdf\"\n",
        )
        .expect("project config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(err.to_string().contains("unsupported report.format: pdf"));
    }

    #[test]
    fn later_layer_replaces_scalar_but_keeps_sibling_keys() {
        let mut base: Table = "[search]\nquery = \"global\"\nlocation = \"Chicago\"\n"
            .parse()
            .expect("base should parse");
        let layer: Table = "[search]\nquery = \"local\"\n[report]\nformat = \"json\"\n"
            .parse()
            .expect("layer should parse");
        overlay(&mut base, layer);

        let search = base["search"].as_table().expect("search should stay a table");
        assert_eq!(search["query"].as_str(), Some("local"));
        assert_eq!(search["location"].as_str(), Some("Chicago"));
        assert_eq!(base["report"]["format"].as_str(), Some("json"));
    }

    #[test]
    fn scalar_layer_value_replaces_section() {
        let mut base: Table = "[report]\nformat = \"json\"\n".parse().expect("base should parse");
        let layer: Table = "report = \"md\"\n".parse().expect("layer should parse");
        overlay(&mut base, layer);
        assert_eq!(base["report"].as_str(), Some("md"));
    }

    #[test]
    fn empty_project_file_still_counts_as_config() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "").expect("project config should write");

        let cfg = load_config_with_global(root.path(), None)
            .expect("load should succeed")
            .expect("empty file should yield defaults");
        assert!(cfg.report_format().is_none());
    }

    #[test]
    fn load_config_reports_malformed_toml_with_path() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[report\n")
            .expect("project config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }
}
