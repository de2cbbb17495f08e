use super::{CompanySource, Credentials, SearchQuery, SocialSource, WebsiteSource};
use crate::error::{PartnerFitError, Result};
use crate::types::company::{CompanyRecord, Executive, SocialSignals, WebsiteSignals};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub company: CompanyRecord,
    #[serde(default)]
    pub website: Option<WebsiteSignals>,
    #[serde(default)]
    pub social: Option<SocialSignals>,
}

/// In-memory stand-in for the company search, website and social providers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&content)
            .map_err(|e| PartnerFitError::CatalogParse(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), entries = catalog.entries.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn demo() -> Self {
        Self {
            entries: vec![digital_growth_partners(), revops_solutions(), enterprise_crm_experts()],
        }
    }

    pub fn find(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.company.name == name)
    }
}

impl CompanySource for Catalog {
    fn search(&self, query: &SearchQuery) -> Vec<CompanyRecord> {
        let results = self
            .entries
            .iter()
            .map(|entry| &entry.company)
            .filter(|company| query.matches(company))
            .cloned()
            .collect::<Vec<_>>();
        tracing::info!(query = %query.query, results = results.len(), "company search");
        results
    }
}

impl WebsiteSource for Catalog {
    fn website_signals(&self, url: &str) -> Option<WebsiteSignals> {
        let host = site_host(url);
        match self
            .entries
            .iter()
            .find(|entry| !host.is_empty() && site_host(&entry.company.website) == host)
        {
            Some(entry) => entry.website.clone(),
            None => {
                tracing::debug!(url, "no website signals found");
                Some(WebsiteSignals::default())
            }
        }
    }
}

impl SocialSource for Catalog {
    fn social_signals(
        &self,
        company_name: &str,
        credentials: Option<&Credentials>,
    ) -> Option<SocialSignals> {
        if credentials.is_none() {
            tracing::warn!(
                company = company_name,
                "social credentials not provided; using catalog data"
            );
        }
        self.find(company_name).and_then(|entry| entry.social.clone())
    }
}

/// Reduces a URL or bare domain to its lowercase host without scheme,
/// `www.` prefix, port or path.
fn site_host(url: &str) -> String {
    let trimmed = url.trim();
    let without_scheme = trimmed
        .split_once("://")
        .map_or(trimmed, |(_, rest)| rest);
    let host = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default().to_lowercase();
    match host.strip_prefix("www.") {
        Some(bare) => bare.to_string(),
        None => host,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn executives(pairs: &[(&str, &str)]) -> Vec<Executive> {
    pairs
        .iter()
        .map(|(name, title)| Executive {
            name: name.to_string(),
            title: title.to_string(),
        })
        .collect()
}

fn digital_growth_partners() -> CatalogEntry {
    CatalogEntry {
        company: CompanyRecord {
            name: "Digital Growth Partners".to_string(),
            website: "digitalgrowthpartners.com".to_string(),
            employees: 75,
            location: "Boston, MA".to_string(),
            industry: "Digital Marketing".to_string(),
            description: "Full-service digital marketing agency specializing in SEO, PPC, and CRM implementation".to_string(),
            founded: 2012,
            specializations: strings(&["Digital Marketing", "CRM Implementation", "Content Marketing"]),
        },
        website: Some(WebsiteSignals {
            technologies: strings(&["Salesforce", "Marketo", "Google Analytics", "WordPress"]),
            services: strings(&["SEO", "PPC", "Content Marketing", "Email Marketing", "CRM Implementation"]),
            target_industries: strings(&["SaaS", "Healthcare", "Finance"]),
            case_studies: 12,
            team_size_mentioned: "70+ professionals".to_string(),
            enterprise_focus: true,
        }),
        social: Some(SocialSignals {
            follower_count: 4500,
            employee_count: 78,
            year_founded: 2012,
            headquarters: "Boston, MA".to_string(),
            specialties: strings(&["Digital Marketing", "CRM", "Marketing Automation"]),
            recent_posts: 15,
            enterprise_clients: strings(&["Acme Corp", "Tech Innovators", "Global Health"]),
            key_executives: executives(&[
                ("Sarah Johnson", "CEO"),
                ("Mike Chen", "CTO"),
                ("Lisa Patel", "VP of Client Services"),
            ]),
        }),
    }
}

fn revops_solutions() -> CatalogEntry {
    CatalogEntry {
        company: CompanyRecord {
            name: "RevOps Solutions Inc.".to_string(),
            website: "revopssolutions.com".to_string(),
            employees: 120,
            location: "Austin, TX".to_string(),
            industry: "Business Consulting".to_string(),
            description: "Revenue Operations consultancy helping enterprise businesses align sales, marketing and customer service".to_string(),
            founded: 2015,
            specializations: strings(&["RevOps", "CRM Implementation", "Marketing Automation"]),
        },
        website: Some(WebsiteSignals {
            technologies: strings(&["HubSpot", "Salesforce", "Tableau", "Zapier"]),
            services: strings(&["RevOps Consulting", "CRM Implementation", "Sales Enablement", "Marketing Automation"]),
            target_industries: strings(&["Technology", "Manufacturing", "Professional Services"]),
            case_studies: 8,
            team_size_mentioned: "Over 100 consultants".to_string(),
            enterprise_focus: true,
        }),
        social: Some(SocialSignals {
            follower_count: 7200,
            employee_count: 122,
            year_founded: 2015,
            headquarters: "Austin, TX".to_string(),
            specialties: strings(&["Revenue Operations", "CRM Implementation", "Sales Enablement"]),
            recent_posts: 22,
            enterprise_clients: strings(&["Enterprise Software Co.", "Financial Services Inc.", "ManufacturingPro"]),
            key_executives: executives(&[
                ("Robert Wilson", "CEO"),
                ("Emily Rodriguez", "COO"),
                ("David Thompson", "Chief Revenue Officer"),
            ]),
        }),
    }
}

fn enterprise_crm_experts() -> CatalogEntry {
    CatalogEntry {
        company: CompanyRecord {
            name: "Enterprise CRM Experts".to_string(),
            website: "enterprisecrm.co".to_string(),
            employees: 65,
            location: "Chicago, IL".to_string(),
            industry: "Technology Consulting".to_string(),
            description: "CRM implementation specialists for mid-market and enterprise companies".to_string(),
            founded: 2010,
            specializations: strings(&["CRM Implementation", "Systems Integration", "Custom Development"]),
        },
        website: Some(WebsiteSignals {
            technologies: strings(&["Salesforce", "Microsoft Dynamics", "Oracle", "SAP"]),
            services: strings(&["CRM Strategy", "Implementation", "Training", "Support"]),
            target_industries: strings(&["Healthcare", "Financial Services", "Manufacturing"]),
            case_studies: 15,
            team_size_mentioned: "60+ specialists".to_string(),
            enterprise_focus: true,
        }),
        social: Some(SocialSignals {
            follower_count: 3800,
            employee_count: 67,
            year_founded: 2010,
            headquarters: "Chicago, IL".to_string(),
            specialties: strings(&["CRM Strategy", "Enterprise Software", "Systems Integration"]),
            recent_posts: 8,
            enterprise_clients: strings(&["Healthcare Solutions", "Global Banking Corp", "Industrial Supplies Inc."]),
            key_executives: executives(&[
                ("James Anderson", "CEO"),
                ("Sophia Martinez", "CTO"),
                ("Michael Lee", "VP of Professional Services"),
            ]),
        }),
    }
}
