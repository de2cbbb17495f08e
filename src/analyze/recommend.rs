use crate::rubric::{self, MIN_EMPLOYEES};
use crate::types::company::{CompanyRecord, SocialSignals, WebsiteSignals};
use crate::types::scoring::{Category, ScoreResult, Specialization};

pub const SIZE_BELOW_THRESHOLD: &str =
    "Company size is below the recommended 51+ employees for Upmarket IPP";
pub const ORG_STRUCTURE: &str = "Consider establishing a clearer organizational structure with defined roles in Marketing, Sales, Professional Services, and Customer Success";
pub const ENTERPRISE_CLIENTS: &str =
    "Focus on targeting and showcasing enterprise clients (201+ employees)";
pub const ENVIRONMENT_SCALE: &str = "Highlight ability to support environments with 101+ users";
pub const INDUSTRY_DEPTH: &str = "Develop and showcase deeper industry expertise in specific sectors";
pub const TECH_BREADTH: &str =
    "Expand expertise in enterprise software tools and highlight them in marketing materials";
pub const CUSTOM_INTEGRATION: &str = "Develop custom solution capabilities using APIs and SDKs";
pub const HUBSPOT_PRACTICE: &str =
    "Consider establishing a HubSpot practice or partnering with HubSpot";
pub const EXECUTIVE_SPONSOR: &str =
    "Designate an Executive Sponsor and Business Champion for the HubSpot relationship";
pub const EXCELLENT_MATCH: &str =
    "This company is an excellent match for the HubSpot Solution Partner Program!";

fn is_gated(score: &ScoreResult, category: Category) -> bool {
    score.percentage(category) < rubric::recommendation_threshold(category)
}

/// Derives improvement suggestions for every category scoring below its
/// threshold. Output follows rubric order; an empty list means the company
/// meets every threshold.
pub fn recommend(
    company: &CompanyRecord,
    score: &ScoreResult,
    website: Option<&WebsiteSignals>,
    social: Option<&SocialSignals>,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if is_gated(score, Category::CompanyProfile) {
        if company.employees < MIN_EMPLOYEES {
            recommendations.push(SIZE_BELOW_THRESHOLD.to_string());
        }
        if social.map_or(true, |social| social.key_executives.len() < 3) {
            recommendations.push(ORG_STRUCTURE.to_string());
        }
    }

    if is_gated(score, Category::CustomerFocus) {
        if social.map_or(true, |social| social.enterprise_clients.is_empty()) {
            recommendations.push(ENTERPRISE_CLIENTS.to_string());
        }
        if website.map_or(true, |website| !website.enterprise_focus) {
            recommendations.push(ENVIRONMENT_SCALE.to_string());
        }
        if website.map_or(true, |website| website.target_industries.len() < 2) {
            recommendations.push(INDUSTRY_DEPTH.to_string());
        }
    }

    if is_gated(score, Category::TechStackExpertise) {
        if website.map_or(true, |website| website.technologies.len() < 3) {
            recommendations.push(TECH_BREADTH.to_string());
        }
        if website.map_or(true, |website| !website.mentions_service("Integration")) {
            recommendations.push(CUSTOM_INTEGRATION.to_string());
        }
    }

    if is_gated(score, Category::StrategicAlignment) {
        if website.map_or(true, |website| !website.mentions_technology("HubSpot")) {
            recommendations.push(HUBSPOT_PRACTICE.to_string());
        }
        recommendations.push(EXECUTIVE_SPONSOR.to_string());
    }

    if is_gated(score, Category::Specializations) {
        let missing = Specialization::ALL
            .iter()
            .filter(|specialization| !score.has_specialization(**specialization))
            .map(|specialization| specialization.label())
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            recommendations.push(format!(
                "Consider expanding services to include: {}",
                missing.join(", ")
            ));
        }
    }

    recommendations
}
