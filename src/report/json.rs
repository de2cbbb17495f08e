use crate::types::report::Analysis;

pub fn to_json(analyses: &[&Analysis]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(analyses)
}
