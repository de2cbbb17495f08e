use crate::types::company::{CompanyRecord, SocialSignals, WebsiteSignals};
use crate::types::scoring::ScoreResult;
use serde::{Deserialize, Serialize};

/// One company's inputs together with its score and recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub company: CompanyRecord,
    pub website: Option<WebsiteSignals>,
    pub social: Option<SocialSignals>,
    pub score: ScoreResult,
    pub recommendations: Vec<String>,
}

impl Analysis {
    pub fn is_excellent_match(&self) -> bool {
        self.recommendations.is_empty()
    }
}
