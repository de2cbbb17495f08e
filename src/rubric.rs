//! The fixed Ideal Partner Profile rubric: per-category maximum points,
//! recommendation thresholds, and the criteria text shown to users.

use crate::types::scoring::Category;

/// Technologies that count as enterprise software expertise.
pub const ENTERPRISE_TECHNOLOGIES: [&str; 6] = [
    "Salesforce",
    "Oracle",
    "SAP",
    "Microsoft Dynamics",
    "Marketo",
    "Adobe",
];

pub const MIN_EMPLOYEES: u32 = 51;

pub fn max_points(category: Category) -> u32 {
    match category {
        Category::CompanyProfile | Category::CustomerFocus => 4,
        Category::TechStackExpertise | Category::StrategicAlignment | Category::Specializations => {
            3
        }
    }
}

pub fn max_total() -> u32 {
    Category::ALL.iter().map(|category| max_points(*category)).sum()
}

/// Percentage below which a category produces recommendations.
pub fn recommendation_threshold(category: Category) -> f64 {
    match category {
        Category::Specializations => 66.0,
        _ => 75.0,
    }
}

pub fn criteria(category: Category) -> &'static [&'static str] {
    match category {
        Category::CompanyProfile => &[
            "51+ employees",
            "Clear organizational structure (Marketing, Sales, Professional Services, Customer Success)",
            "Offers enterprise software and related services",
            "Established processes for marketing planning, sales, SaaS implementation, and customer lifecycle management",
        ],
        Category::CustomerFocus => &[
            "Targets customers with 201+ employees",
            "Supports environments with 101+ users",
            "Manages full customer lifecycle",
            "Focuses on specific industries with deep expertise",
        ],
        Category::TechStackExpertise => &[
            "Expertise in enterprise software tools",
            "Can develop custom integrations using APIs/SDKs",
            "Participates in partner programs from enterprise software vendors",
        ],
        Category::StrategicAlignment => &[
            "Has executive sponsors for partnerships",
            "Has established or willing to establish HubSpot practice",
            "Committed to invest resources in HubSpot partnership",
        ],
        Category::Specializations => &[
            "Digital Marketing (SEO, PPC, Social Media, Content, Email)",
            "CRM Implementation and Optimization",
            "RevOps (Revenue Operations)",
        ],
    }
}

pub fn render_criteria() -> String {
    let mut output = String::from("# Ideal Partner Profile Criteria\n");
    for category in Category::ALL {
        output.push_str(&format!(
            "\n## {} (max {} points)\n\n",
            category,
            max_points(category)
        ));
        for item in criteria(category) {
            output.push_str(&format!("- {item}\n"));
        }
    }
    output
}
