//! Display descriptors for the closed enums.
//!
//! Each mapping is an exhaustive `match`: adding a variant to [`AyushSystem`]
//! or [`Difficulty`] fails to compile until it is given a descriptor here.

use crate::models::plant::AyushSystem;
use crate::models::tour::Difficulty;

/// Abstract colour role. The terminal decides what each tone looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Primary,
    PrimarySoft,
    Accent,
    AccentSoft,
    Secondary,
    Muted,
    Calm,
    Caution,
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub label: &'static str,
    pub tone: Tone,
}

impl AyushSystem {
    pub const fn descriptor(&self) -> Descriptor {
        let tone = match self {
            Self::Ayurveda => Tone::Primary,
            Self::Yoga => Tone::Accent,
            Self::Naturopathy => Tone::Secondary,
            Self::Unani => Tone::Muted,
            Self::Siddha => Tone::PrimarySoft,
            Self::Homeopathy => Tone::AccentSoft,
        };
        Descriptor {
            label: self.as_str(),
            tone,
        }
    }
}

impl Difficulty {
    pub const fn descriptor(&self) -> Descriptor {
        let tone = match self {
            Self::Beginner => Tone::Calm,
            Self::Intermediate => Tone::Caution,
            Self::Advanced => Tone::Alert,
        };
        Descriptor {
            label: self.as_str(),
            tone,
        }
    }
}
