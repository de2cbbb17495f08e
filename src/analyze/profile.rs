use crate::rubric::MIN_EMPLOYEES;
use crate::types::company::{CompanyRecord, SocialSignals, WebsiteSignals};

pub fn company_profile_score(
    company: &CompanyRecord,
    website: Option<&WebsiteSignals>,
    social: Option<&SocialSignals>,
) -> u32 {
    let mut score = 0;
    if company.employees >= MIN_EMPLOYEES {
        score += 1;
    }
    if social.is_some_and(|social| social.key_executives.len() >= 3) {
        score += 1;
    }
    if website.is_some_and(|website| website.services.len() >= 4) {
        score += 1;
    }
    if website.is_some_and(|website| website.case_studies >= 5) {
        score += 1;
    }
    score
}
