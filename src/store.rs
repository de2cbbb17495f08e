use crate::types::report::Analysis;
use std::collections::BTreeMap;

/// Analyses gathered during one CLI run, keyed by company name. Re-analyzing
/// a company replaces its earlier entry.
#[derive(Debug, Default)]
pub struct AnalysisStore {
    analyses: BTreeMap<String, Analysis>,
}

impl AnalysisStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, analysis: Analysis) -> Option<Analysis> {
        self.analyses
            .insert(analysis.company.name.clone(), analysis)
    }

    pub fn get(&self, company_name: &str) -> Option<&Analysis> {
        self.analyses.get(company_name)
    }

    pub fn len(&self) -> usize {
        self.analyses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyses.is_empty()
    }

    /// Best match first; ties keep name order.
    pub fn ranked(&self) -> Vec<&Analysis> {
        let mut ranked = self.analyses.values().collect::<Vec<_>>();
        ranked.sort_by(|left, right| right.score.overall_match.total_cmp(&left.score.overall_match));
        ranked
    }
}
