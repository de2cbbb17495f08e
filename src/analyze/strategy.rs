use crate::rubric;
use crate::types::company::{SocialSignals, WebsiteSignals};
use crate::types::scoring::Category;

/// Accumulates the executive and HubSpot/CRM signals, then clamps. The
/// HubSpot bonus and the CRM fallback never both apply.
pub fn strategic_alignment_score(
    website: Option<&WebsiteSignals>,
    social: Option<&SocialSignals>,
) -> u32 {
    let mut potential = 0;

    if social.is_some_and(|social| social.has_executive_titled("CTO")) {
        potential += 1;
    }

    if website.is_some_and(|website| website.mentions_technology("HubSpot")) {
        potential += 2;
    } else if website.is_some_and(|website| {
        website.mentions_service("CRM") || website.mentions_service("Customer Relationship")
    }) {
        potential += 1;
    }

    potential.min(rubric::max_points(Category::StrategicAlignment))
}
