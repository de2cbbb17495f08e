pub mod catalog;

use crate::types::company::{CompanyRecord, SocialSignals, WebsiteSignals};
use clap::ValueEnum;

/// Minimum company-size band used to narrow search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SizeBand {
    #[default]
    #[value(name = "any")]
    Any,
    #[value(name = "11-50")]
    Small,
    #[value(name = "51-200")]
    Mid,
    #[value(name = "201-500")]
    Large,
    #[value(name = "501-1000")]
    Enterprise,
    #[value(name = "1001+")]
    Global,
}

impl SizeBand {
    pub fn min_employees(self) -> u32 {
        match self {
            Self::Any => 0,
            Self::Small => 11,
            Self::Mid => 51,
            Self::Large => 201,
            Self::Enterprise => 501,
            Self::Global => 1001,
        }
    }

    pub fn admits(self, employees: u32) -> bool {
        employees >= self.min_employees()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub query: String,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub min_size: SizeBand,
}

impl SearchQuery {
    pub fn matches(&self, company: &CompanyRecord) -> bool {
        let terms = self
            .query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>();
        let haystack = [
            company.name.as_str(),
            company.industry.as_str(),
            company.description.as_str(),
        ]
        .into_iter()
        .chain(company.specializations.iter().map(String::as_str))
        .map(str::to_lowercase)
        .collect::<Vec<_>>();

        let query_hit = terms.is_empty()
            || terms
                .iter()
                .any(|term| haystack.iter().any(|field| field.contains(term.as_str())));

        query_hit
            && filter_hit(self.location.as_deref(), &company.location)
            && filter_hit(self.industry.as_deref(), &company.industry)
            && self.min_size.admits(company.employees)
    }
}

fn filter_hit(filter: Option<&str>, value: &str) -> bool {
    match filter.map(str::trim) {
        Some(filter) if !filter.is_empty() => {
            value.to_lowercase().contains(&filter.to_lowercase())
        }
        _ => true,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub const USERNAME_ENV: &'static str = "PARTNER_FIT_SOCIAL_USERNAME";
    pub const PASSWORD_ENV: &'static str = "PARTNER_FIT_SOCIAL_PASSWORD";

    pub fn from_env() -> Option<Self> {
        let username = std::env::var(Self::USERNAME_ENV).ok()?;
        let password = std::env::var(Self::PASSWORD_ENV).ok()?;
        Some(Self { username, password }).filter(Self::is_complete)
    }

    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }
}

pub trait CompanySource {
    fn search(&self, query: &SearchQuery) -> Vec<CompanyRecord>;
}

/// `Some(WebsiteSignals::default())` means the site had nothing to report;
/// `None` means it could not be analyzed.
pub trait WebsiteSource {
    fn website_signals(&self, url: &str) -> Option<WebsiteSignals>;
}

pub trait SocialSource {
    fn social_signals(
        &self,
        company_name: &str,
        credentials: Option<&Credentials>,
    ) -> Option<SocialSignals>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::test_support::{company, strings};

    #[test]
    fn empty_query_matches_everything() {
        assert!(SearchQuery::default().matches(&company(1)));
    }

    #[test]
    fn query_terms_match_any_field_case_insensitively() {
        let mut company = company(75);
        company.specializations = strings(&["RevOps"]);
        let query = SearchQuery {
            query: "revops agency".to_string(),
            ..SearchQuery::default()
        };
        assert!(query.matches(&company));

        let miss = SearchQuery {
            query: "manufacturing".to_string(),
            ..SearchQuery::default()
        };
        assert!(!miss.matches(&company));
    }

    #[test]
    fn filters_narrow_results() {
        let company = company(75);
        let boston = SearchQuery {
            location: Some("boston".to_string()),
            min_size: SizeBand::Mid,
            ..SearchQuery::default()
        };
        assert!(boston.matches(&company));

        let large = SearchQuery {
            min_size: SizeBand::Large,
            ..SearchQuery::default()
        };
        assert!(!large.matches(&company));

        let blank_industry = SearchQuery {
            industry: Some("  ".to_string()),
            ..SearchQuery::default()
        };
        assert!(blank_industry.matches(&company));
    }

    #[test]
    fn credentials_need_both_parts() {
        let blank_user = Credentials {
            username: " ".to_string(),
            password: "secret".to_string(),
        };
        assert!(!blank_user.is_complete());
        let complete = Credentials {
            username: "scout@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(complete.is_complete());
    }
}
