use serde::{Deserialize, Serialize};

/// A company as returned by the acquisition layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub name: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub employees: u32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub founded: i32,
    #[serde(default)]
    pub specializations: Vec<String>,
}

impl CompanyRecord {
    pub fn has_specialization(&self, tag: &str) -> bool {
        self.specializations.iter().any(|value| value == tag)
    }
}

/// Signals extracted from a company website.
///
/// An all-empty value means the site was reachable but nothing was found.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebsiteSignals {
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub target_industries: Vec<String>,
    #[serde(default)]
    pub case_studies: u32,
    #[serde(default)]
    pub team_size_mentioned: String,
    #[serde(default)]
    pub enterprise_focus: bool,
}

impl WebsiteSignals {
    pub fn mentions_technology(&self, needle: &str) -> bool {
        contains_in_any(&self.technologies, needle)
    }

    pub fn mentions_service(&self, needle: &str) -> bool {
        contains_in_any(&self.services, needle)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Executive {
    pub name: String,
    pub title: String,
}

/// Social-profile metadata. Callers pass `None` when the lookup failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialSignals {
    #[serde(default)]
    pub follower_count: u32,
    #[serde(default)]
    pub employee_count: u32,
    #[serde(default)]
    pub year_founded: i32,
    #[serde(default)]
    pub headquarters: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub recent_posts: u32,
    #[serde(default)]
    pub enterprise_clients: Vec<String>,
    #[serde(default)]
    pub key_executives: Vec<Executive>,
}

impl SocialSignals {
    pub fn has_executive_titled(&self, needle: &str) -> bool {
        self.key_executives
            .iter()
            .any(|executive| executive.title.contains(needle))
    }
}

fn contains_in_any(values: &[String], needle: &str) -> bool {
    values.iter().any(|value| value.contains(needle))
}
