//! Copy for the landing view: highlights, headline statistics and usage tips.

pub const TITLE: &str = "Virtual Herbal Garden";

pub const TAGLINE: &str = "Explore interactive botanical models, comprehensive medicinal knowledge, \
     and immersive virtual experiences that bridge ancient healing traditions with modern technology.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistic {
    pub figure: &'static str,
    pub label: &'static str,
    pub caption: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Smart Discovery",
        description: "Search medicinal plants and filter them by therapeutic property or AYUSH system",
    },
    Feature {
        title: "Deep Learning",
        description: "Botanical knowledge with cultivation methods, traditional uses, and modern research",
    },
    Feature {
        title: "Immersive Tours",
        description: "Curated virtual journeys through themed collections of healing plants",
    },
];

pub const STATISTICS: [Statistic; 4] = [
    Statistic {
        figure: "500+",
        label: "Medicinal Plants",
        caption: "Comprehensive database",
    },
    Statistic {
        figure: "5",
        label: "AYUSH Systems",
        caption: "Traditional healing methods",
    },
    Statistic {
        figure: "3D",
        label: "Interactive Models",
        caption: "Immersive experiences",
    },
    Statistic {
        figure: "∞",
        label: "Learning Paths",
        caption: "Endless discovery",
    },
];

pub const TIPS: [&str; 4] = [
    "Use the search to find specific medicinal plants",
    "Open any plant to learn detailed information",
    "Take virtual tours organized by health benefits",
    "Filter plants by AYUSH system or medicinal use",
];

/// Tips rotate, so any index is valid.
pub fn tip_at(index: usize) -> &'static str {
    TIPS[index % TIPS.len()]
}
