use crate::types::company::{SocialSignals, WebsiteSignals};

pub fn customer_focus_score(website: Option<&WebsiteSignals>, social: Option<&SocialSignals>) -> u32 {
    let mut score = 0;
    if social.is_some_and(|social| !social.enterprise_clients.is_empty()) {
        score += 2;
    }
    if website.is_some_and(|website| website.enterprise_focus) {
        score += 1;
    }
    if website.is_some_and(|website| website.target_industries.len() >= 2) {
        score += 1;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::test_support::website;

    #[test]
    fn enterprise_clients_are_worth_two_points() {
        let social = SocialSignals {
            enterprise_clients: vec!["Acme Corp".to_string()],
            ..SocialSignals::default()
        };
        assert_eq!(customer_focus_score(None, Some(&social)), 2);
    }

    #[test]
    fn website_focus_and_industries_add_one_each() {
        let website = WebsiteSignals {
            enterprise_focus: true,
            target_industries: vec!["SaaS".to_string(), "Finance".to_string()],
            ..website()
        };
        assert_eq!(customer_focus_score(Some(&website), None), 2);
    }

    #[test]
    fn absent_signals_score_zero() {
        assert_eq!(customer_focus_score(None, None), 0);
    }
}
