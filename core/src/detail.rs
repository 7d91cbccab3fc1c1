//! Content of the tabbed panel on the plant detail view.

use std::fmt;
use std::str::FromStr;

use herbarium_common::error::CatalogError;
use herbarium_common::models::PlantRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    Cultivation,
    Preparation,
    Research,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        DetailTab::Overview,
        DetailTab::Cultivation,
        DetailTab::Preparation,
        DetailTab::Research,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Cultivation => "Cultivation",
            Self::Preparation => "Preparation",
            Self::Research => "Research",
        }
    }
}

impl fmt::Display for DetailTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetailTab {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::UnknownTab(s.to_string()))
    }
}

/// One heading inside a tab, with either prose, bullets, or both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub body: Option<String>,
    pub bullets: Vec<String>,
}

impl Section {
    fn prose(heading: &'static str, body: impl Into<String>) -> Self {
        Self {
            heading,
            body: Some(body.into()),
            bullets: Vec::new(),
        }
    }

    fn list<S: ToString>(heading: &'static str, bullets: &[S]) -> Self {
        Self {
            heading,
            body: None,
            bullets: bullets.iter().map(ToString::to_string).collect(),
        }
    }
}

const CARE_INSTRUCTIONS: [&str; 4] = [
    "Regular monitoring for optimal growth",
    "Proper harvesting techniques for medicinal potency",
    "Seasonal care adjustments",
    "Sustainable cultivation practices",
];

const PREPARATION_METHODS: [&str; 4] = [
    "Decoction preparation",
    "Powder formulation",
    "Oil extraction methods",
    "Fresh juice preparation",
];

const RESEARCH_AREAS: [&str; 4] = [
    "Pharmacological studies and bioactive compounds",
    "Clinical trials and efficacy studies",
    "Safety profiles and contraindications",
    "Modern applications and drug development",
];

pub fn detail_sections(plant: &PlantRecord, tab: DetailTab) -> Vec<Section> {
    match tab {
        DetailTab::Overview => vec![
            Section::prose("Description", plant.description.clone()),
            Section::prose(
                "Traditional Knowledge",
                format!(
                    "This plant has been used in traditional {} medicine for centuries, \
                     with documented uses in ancient texts and modern clinical applications.",
                    plant.system
                ),
            ),
            Section::list("Traditional Uses", &plant.uses),
        ],
        DetailTab::Cultivation => vec![
            Section::prose("Growing Conditions", plant.cultivation_method.clone()),
            Section::list("Care Instructions", &CARE_INSTRUCTIONS),
        ],
        DetailTab::Preparation => vec![
            Section::list("Traditional Methods", &PREPARATION_METHODS),
            Section::prose(
                "Dosage Guidelines",
                "Consult with qualified practitioners for appropriate dosage based on \
                 individual constitution and health conditions.",
            ),
        ],
        DetailTab::Research => vec![
            Section::prose(
                "Modern Studies",
                format!(
                    "Modern research continues to validate traditional uses of {}, with studies \
                     focusing on its bioactive compounds and therapeutic mechanisms.",
                    plant.name
                ),
            ),
            Section::list("Research Areas", &RESEARCH_AREAS),
        ],
    }
}
