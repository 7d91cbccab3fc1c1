use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// The traditional medicine system a plant is catalogued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AyushSystem {
    Ayurveda,
    Yoga,
    Naturopathy,
    Unani,
    Siddha,
    Homeopathy,
}

impl AyushSystem {
    pub const ALL: [AyushSystem; 6] = [
        AyushSystem::Ayurveda,
        AyushSystem::Yoga,
        AyushSystem::Naturopathy,
        AyushSystem::Unani,
        AyushSystem::Siddha,
        AyushSystem::Homeopathy,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ayurveda => "Ayurveda",
            Self::Yoga => "Yoga",
            Self::Naturopathy => "Naturopathy",
            Self::Unani => "Unani",
            Self::Siddha => "Siddha",
            Self::Homeopathy => "Homeopathy",
        }
    }
}

impl fmt::Display for AyushSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AyushSystem {
    type Err = CatalogError;

    /// Parses a system name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|system| system.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::UnknownSystem(s.to_string()))
    }
}

/// A medicinal plant as shown in the gallery and detail views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    pub id: String,
    pub name: String,
    pub botanical_name: String,
    /// Path of the static image asset.
    pub image: String,
    /// Never empty; checked when the catalog is built.
    pub uses: Vec<String>,
    pub system: AyushSystem,
    pub region: String,
    pub description: String,
    pub cultivation_method: String,
}

impl PlantRecord {
    /// Returns the first `n` uses and how many were left out.
    ///
    /// Cards show three tags followed by a "+N more" badge.
    pub fn top_uses(&self, n: usize) -> (&[String], usize) {
        let shown = n.min(self.uses.len());
        (&self.uses[..shown], self.uses.len() - shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant_with_uses(uses: &[&str]) -> PlantRecord {
        PlantRecord {
            id: "1".into(),
            name: "Neem".into(),
            botanical_name: "Azadirachta indica".into(),
            image: "assets/neem-plant.jpg".into(),
            uses: uses.iter().map(|u| u.to_string()).collect(),
            system: AyushSystem::Ayurveda,
            region: "Indian Subcontinent".into(),
            description: String::new(),
            cultivation_method: String::new(),
        }
    }

    #[test]
    fn test_system_from_str_ignores_case() {
        assert_eq!("unani".parse::<AyushSystem>(), Ok(AyushSystem::Unani));
        assert_eq!(" SIDDHA ".parse::<AyushSystem>(), Ok(AyushSystem::Siddha));
        assert_eq!(
            "Homeopathy".parse::<AyushSystem>(),
            Ok(AyushSystem::Homeopathy)
        );
    }

    #[test]
    fn test_system_from_str_rejects_unknown() {
        assert_eq!(
            "Acupuncture".parse::<AyushSystem>(),
            Err(CatalogError::UnknownSystem("Acupuncture".into()))
        );
    }

    #[test]
    fn test_system_display_matches_as_str() {
        for system in AyushSystem::ALL {
            assert_eq!(system.to_string(), system.as_str());
        }
    }

    #[test]
    fn test_top_uses_truncates() {
        let plant = plant_with_uses(&["Skin Care", "Antibacterial", "Pest Control", "Dental Health"]);
        let (shown, rest) = plant.top_uses(3);
        assert_eq!(shown.len(), 3);
        assert_eq!(shown[2], "Pest Control");
        assert_eq!(rest, 1);
    }

    #[test]
    fn test_top_uses_short_list() {
        let plant = plant_with_uses(&["Skin Care"]);
        let (shown, rest) = plant.top_uses(3);
        assert_eq!(shown, ["Skin Care".to_string()]);
        assert_eq!(rest, 0);
    }

    #[test]
    fn test_plant_serializes_camel_case() {
        let plant = plant_with_uses(&["Skin Care"]);
        let json = serde_json::to_string(&plant).unwrap();
        assert!(json.contains("\"botanicalName\":\"Azadirachta indica\""));
        assert!(json.contains("\"cultivationMethod\""));
        assert!(json.contains("\"system\":\"Ayurveda\""));
    }
}
