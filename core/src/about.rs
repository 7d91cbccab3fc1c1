//! The "About AYUSH" panel: a short gloss of each system and the reference
//! document link. The document is only linked, never fetched.

use herbarium_common::config::Config;
use herbarium_common::models::AyushSystem;

pub const DOCUMENT_TITLE: &str = "AYUSH Documentation";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLink {
    pub title: &'static str,
    pub url: String,
}

impl DocumentLink {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            title: DOCUMENT_TITLE,
            url: cfg.document_url.clone(),
        }
    }
}

pub const fn summary(system: AyushSystem) -> &'static str {
    match system {
        AyushSystem::Ayurveda => "Balances the three doshas through diet, herbs and daily routine.",
        AyushSystem::Yoga => "Postures, breathing and diet for union of body and mind.",
        AyushSystem::Naturopathy => "Drug-free healing through water, diet, sunlight and fasting.",
        AyushSystem::Unani => "Greco-Arabic medicine built on the four humours.",
        AyushSystem::Siddha => "Tamil tradition using herbal, mineral and metal preparations.",
        AyushSystem::Homeopathy => "Highly diluted remedies prescribed on the principle of similars.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herbarium_common::config::DEFAULT_DOCUMENT_URL;

    #[test]
    fn test_link_defaults_to_reference_pdf() {
        let link = DocumentLink::from_config(&Config::default());
        assert_eq!(link.url, DEFAULT_DOCUMENT_URL);
        assert!(link.url.ends_with(".pdf"));
    }

    #[test]
    fn test_link_follows_config() {
        let cfg = Config {
            document_url: "https://example.org/a.pdf".into(),
            ..Config::default()
        };
        assert_eq!(DocumentLink::from_config(&cfg).url, "https://example.org/a.pdf");
    }

    #[test]
    fn test_every_system_has_summary() {
        for system in AyushSystem::ALL {
            assert!(!summary(system).is_empty());
        }
    }
}
