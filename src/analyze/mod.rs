pub mod customer;
pub mod profile;
pub mod recommend;
pub mod specializations;
pub mod strategy;
pub mod tech;

use crate::error::{PartnerFitError, Result};
use crate::types::company::{CompanyRecord, SocialSignals, WebsiteSignals};
use crate::types::report::Analysis;
use crate::types::scoring::{Category, ScoreResult};

pub use recommend::recommend;

/// Scores a company against the Ideal Partner Profile. Absent website or
/// social signals count as unmet conditions.
pub fn score(
    company: &CompanyRecord,
    website: Option<&WebsiteSignals>,
    social: Option<&SocialSignals>,
) -> ScoreResult {
    let detected = specializations::detect_specializations(company, website);
    let raw = [
        (
            Category::CompanyProfile,
            profile::company_profile_score(company, website, social),
        ),
        (
            Category::CustomerFocus,
            customer::customer_focus_score(website, social),
        ),
        (Category::TechStackExpertise, tech::tech_stack_score(website)),
        (
            Category::StrategicAlignment,
            strategy::strategic_alignment_score(website, social),
        ),
        (Category::Specializations, detected.len() as u32),
    ];
    for (category, points) in &raw {
        tracing::debug!(company = %company.name, %category, points, "category scored");
    }
    ScoreResult::new(raw, detected)
}

/// Runs score and recommend for one company. The company is the only
/// required input.
pub fn evaluate(
    company: Option<&CompanyRecord>,
    website: Option<&WebsiteSignals>,
    social: Option<&SocialSignals>,
) -> Result<Analysis> {
    let company = company.ok_or_else(|| {
        PartnerFitError::InvalidArgument("company record is required".to_string())
    })?;

    if website.is_none() {
        tracing::warn!(company = %company.name, "no website signals available");
    }
    if social.is_none() {
        tracing::warn!(company = %company.name, "no social signals available");
    }

    let score = score(company, website, social);
    let recommendations = recommend(company, &score, website, social);
    tracing::info!(
        company = %company.name,
        overall_match = score.overall_match,
        recommendations = recommendations.len(),
        "analysis complete"
    );

    Ok(Analysis {
        company: company.clone(),
        website: website.cloned(),
        social: social.cloned(),
        score,
        recommendations,
    })
}
