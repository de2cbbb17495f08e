use crate::rubric::ENTERPRISE_TECHNOLOGIES;
use crate::types::company::WebsiteSignals;

pub fn tech_stack_score(website: Option<&WebsiteSignals>) -> u32 {
    let Some(website) = website else {
        return 0;
    };

    let mut score = 0;
    if website.technologies.len() >= 3 {
        score += 1;
    }
    if uses_enterprise_technology(website) {
        score += 1;
        if website.mentions_service("Integration") {
            score += 1;
        }
    }
    score
}

pub fn uses_enterprise_technology(website: &WebsiteSignals) -> bool {
    website
        .technologies
        .iter()
        .any(|technology| ENTERPRISE_TECHNOLOGIES.contains(&technology.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::test_support::{strings, website};

    #[test]
    fn integration_bonus_requires_enterprise_technology() {
        let without_enterprise = WebsiteSignals {
            technologies: strings(&["WordPress"]),
            services: strings(&["Systems Integration"]),
            ..website()
        };
        assert_eq!(tech_stack_score(Some(&without_enterprise)), 0);

        let with_enterprise = WebsiteSignals {
            technologies: strings(&["SAP"]),
            ..without_enterprise
        };
        assert_eq!(tech_stack_score(Some(&with_enterprise)), 2);
    }

    #[test]
    fn enterprise_match_is_exact() {
        let website = WebsiteSignals {
            technologies: strings(&["Salesforce Marketing Cloud", "SAPPHIRE", "Zapier"]),
            ..website()
        };
        assert!(!uses_enterprise_technology(&website));
        assert_eq!(tech_stack_score(Some(&website)), 1);
    }

    #[test]
    fn absent_website_scores_zero() {
        assert_eq!(tech_stack_score(None), 0);
    }
}
