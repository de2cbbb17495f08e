use crate::rubric;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Scoring dimensions of the Ideal Partner Profile, in rubric order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Company Profile")]
    CompanyProfile,
    #[serde(rename = "Customer Focus")]
    CustomerFocus,
    #[serde(rename = "Tech Stack Expertise")]
    TechStackExpertise,
    #[serde(rename = "Strategic Alignment")]
    StrategicAlignment,
    #[serde(rename = "Specializations")]
    Specializations,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::CompanyProfile,
        Category::CustomerFocus,
        Category::TechStackExpertise,
        Category::StrategicAlignment,
        Category::Specializations,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::CompanyProfile => "Company Profile",
            Self::CustomerFocus => "Customer Focus",
            Self::TechStackExpertise => "Tech Stack Expertise",
            Self::StrategicAlignment => "Strategic Alignment",
            Self::Specializations => "Specializations",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Specialization tags the scorer can detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Specialization {
    #[serde(rename = "Digital Marketing")]
    DigitalMarketing,
    #[serde(rename = "CRM Implementation")]
    CrmImplementation,
    #[serde(rename = "RevOps")]
    RevOps,
}

impl Specialization {
    pub const ALL: [Specialization; 3] = [
        Specialization::DigitalMarketing,
        Specialization::CrmImplementation,
        Specialization::RevOps,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::DigitalMarketing => "Digital Marketing",
            Self::CrmImplementation => "CRM Implementation",
            Self::RevOps => "RevOps",
        }
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub detailed_scores: BTreeMap<Category, u32>,
    pub percentage_scores: BTreeMap<Category, f64>,
    pub overall_match: f64,
    pub specializations: BTreeSet<Specialization>,
}

impl ScoreResult {
    /// Builds the result from raw per-category points, clamping each to its
    /// rubric maximum and deriving percentages and the overall match.
    pub fn new(
        raw: impl IntoIterator<Item = (Category, u32)>,
        specializations: BTreeSet<Specialization>,
    ) -> Self {
        let mut detailed_scores = Category::ALL
            .iter()
            .map(|category| (*category, 0))
            .collect::<BTreeMap<_, _>>();
        for (category, points) in raw {
            detailed_scores.insert(category, points.min(rubric::max_points(category)));
        }

        let percentage_scores = detailed_scores
            .iter()
            .map(|(category, points)| {
                let max = rubric::max_points(*category);
                (*category, f64::from(*points) / f64::from(max) * 100.0)
            })
            .collect();

        let total: u32 = detailed_scores.values().sum();
        let overall_match = f64::from(total) / f64::from(rubric::max_total()) * 100.0;

        Self {
            detailed_scores,
            percentage_scores,
            overall_match,
            specializations,
        }
    }

    pub fn points(&self, category: Category) -> u32 {
        self.detailed_scores.get(&category).copied().unwrap_or(0)
    }

    pub fn percentage(&self, category: Category) -> f64 {
        self.percentage_scores
            .get(&category)
            .copied()
            .unwrap_or(0.0)
    }

    pub fn has_specialization(&self, specialization: Specialization) -> bool {
        self.specializations.contains(&specialization)
    }
}
