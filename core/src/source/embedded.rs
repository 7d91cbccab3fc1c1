use herbarium_common::models::{AyushSystem, Difficulty, PlantRecord, TourRecord};

use super::CatalogSource;

/// The sample collection compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl CatalogSource for EmbeddedSource {
    fn plants(&self) -> Vec<PlantRecord> {
        PLANTS.iter().map(PlantSeed::to_record).collect()
    }

    fn tours(&self) -> Vec<TourRecord> {
        TOURS.iter().map(TourSeed::to_record).collect()
    }
}

struct PlantSeed {
    id: &'static str,
    name: &'static str,
    botanical_name: &'static str,
    image: &'static str,
    uses: &'static [&'static str],
    system: AyushSystem,
    region: &'static str,
    description: &'static str,
    cultivation_method: &'static str,
}

impl PlantSeed {
    fn to_record(&self) -> PlantRecord {
        PlantRecord {
            id: self.id.to_string(),
            name: self.name.to_string(),
            botanical_name: self.botanical_name.to_string(),
            image: self.image.to_string(),
            uses: self.uses.iter().map(|u| u.to_string()).collect(),
            system: self.system,
            region: self.region.to_string(),
            description: self.description.to_string(),
            cultivation_method: self.cultivation_method.to_string(),
        }
    }
}

struct TourSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    duration: &'static str,
    difficulty: Difficulty,
    theme: &'static str,
    plant_count: u32,
    rating: f32,
    participants: u32,
}

impl TourSeed {
    fn to_record(&self) -> TourRecord {
        TourRecord {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            duration: self.duration.to_string(),
            difficulty: self.difficulty,
            theme: self.theme.to_string(),
            plant_count: self.plant_count,
            rating: self.rating,
            participants: self.participants,
        }
    }
}

const PLANTS: &[PlantSeed] = &[
    PlantSeed {
        id: "1",
        name: "Turmeric (Haldi)",
        botanical_name: "Curcuma longa",
        image: "assets/turmeric-plant.jpg",
        uses: &["Anti-inflammatory", "Digestive Health", "Wound Healing", "Immunity Booster"],
        system: AyushSystem::Ayurveda,
        region: "South Asia",
        description: "A flowering plant of the ginger family, widely used in Ayurvedic medicine for its powerful anti-inflammatory and healing properties. Contains curcumin, a potent compound with numerous health benefits.",
        cultivation_method: "Grows in tropical regions with well-drained soil and partial shade. Requires 8-9 months to mature.",
    },
    PlantSeed {
        id: "2",
        name: "Holy Basil (Tulsi)",
        botanical_name: "Ocimum sanctum",
        image: "assets/tulsi-plant.jpg",
        uses: &["Stress Relief", "Respiratory Health", "Immunity", "Spiritual Practice"],
        system: AyushSystem::Ayurveda,
        region: "India",
        description: "Sacred plant in Hindu tradition, known for its adaptogenic properties and ability to promote mental clarity and respiratory health. Rich in antioxidants and essential oils.",
        cultivation_method: "Easy to grow in warm climates, requires regular watering and full to partial sunlight.",
    },
    PlantSeed {
        id: "3",
        name: "Neem",
        botanical_name: "Azadirachta indica",
        image: "assets/neem-plant.jpg",
        uses: &["Skin Care", "Antibacterial", "Pest Control", "Dental Health"],
        system: AyushSystem::Ayurveda,
        region: "Indian Subcontinent",
        description: "Known as the 'village pharmacy', neem is highly valued for its antimicrobial properties and versatile medicinal applications.",
        cultivation_method: "Drought-resistant tree that thrives in arid and semi-arid regions with minimal water requirements.",
    },
    PlantSeed {
        id: "4",
        name: "Aloe Vera",
        botanical_name: "Aloe barbadensis miller",
        image: "assets/aloe-vera-plant.jpg",
        uses: &["Skin Care", "Burn Relief", "Digestive Health", "Hydration"],
        system: AyushSystem::Naturopathy,
        region: "Arabian Peninsula",
        description: "A succulent whose cooling gel is applied to burns and dry skin and taken internally as a gentle digestive tonic.",
        cultivation_method: "Thrives in sandy, well-drained soil with bright light. Water sparingly and let the soil dry between waterings.",
    },
    PlantSeed {
        id: "5",
        name: "Ashwagandha",
        botanical_name: "Withania somnifera",
        image: "assets/ashwagandha-plant.jpg",
        uses: &["Stress Relief", "Vitality", "Sleep Support", "Immunity"],
        system: AyushSystem::Siddha,
        region: "India and North Africa",
        description: "Known in Siddha practice as Amukkara, this root is prized as a rejuvenating tonic that helps the body adapt to stress.",
        cultivation_method: "Prefers dry, stony soil and full sun. Roots are harvested after 150-180 days, once the berries turn red.",
    },
    PlantSeed {
        id: "6",
        name: "Ginger",
        botanical_name: "Zingiber officinale",
        image: "assets/ginger-plant.jpg",
        uses: &["Nausea Relief", "Digestive Health", "Anti-inflammatory", "Circulation"],
        system: AyushSystem::Naturopathy,
        region: "Southeast Asia",
        description: "A pungent rhizome used fresh or dried to settle the stomach, warm the body and ease inflammation.",
        cultivation_method: "Plant rhizome pieces in rich, moist, well-drained soil in partial shade. Ready to harvest in 8-10 months.",
    },
    PlantSeed {
        id: "7",
        name: "Peppermint",
        botanical_name: "Mentha piperita",
        image: "assets/peppermint-plant.jpg",
        uses: &["Digestive Health", "Headache Relief", "Respiratory Health", "Cooling"],
        system: AyushSystem::Unani,
        region: "Europe and the Middle East",
        description: "An aromatic hybrid mint whose menthol-rich leaves are used in Unani preparations to relieve indigestion and congestion.",
        cultivation_method: "Spreads quickly in moist soil and partial shade. Best grown in containers to keep runners in check.",
    },
    PlantSeed {
        id: "8",
        name: "Giloy (Guduchi)",
        botanical_name: "Tinospora cordifolia",
        image: "assets/giloy-plant.jpg",
        uses: &["Immunity Booster", "Fever Management", "Detoxification", "Liver Health"],
        system: AyushSystem::Siddha,
        region: "Tropical India",
        description: "A climbing shrub with heart-shaped leaves whose stem is used in Siddha medicine as a tonic for recurring fevers.",
        cultivation_method: "Climbs readily on supporting trees. Propagated from stem cuttings during the monsoon.",
    },
    PlantSeed {
        id: "9",
        name: "Amla (Indian Gooseberry)",
        botanical_name: "Phyllanthus emblica",
        image: "assets/amla-plant.jpg",
        uses: &["Vitamin C Source", "Hair Care", "Digestive Health", "Antioxidant"],
        system: AyushSystem::Yoga,
        region: "India",
        description: "A sour fruit recommended in yogic diets as a daily rasayana, rich in vitamin C and antioxidants.",
        cultivation_method: "Hardy tree tolerant of poor soils and drought. Fruits ripen in winter.",
    },
    PlantSeed {
        id: "10",
        name: "Sandalwood",
        botanical_name: "Santalum album",
        image: "assets/sandalwood-plant.jpg",
        uses: &["Skin Care", "Cooling", "Calming", "Aromatherapy"],
        system: AyushSystem::Unani,
        region: "Southern India",
        description: "A fragrant heartwood used in Unani formulations as a cooling agent for the skin and a calming aromatic.",
        cultivation_method: "A semi-parasitic tree that needs host plants nearby. Heartwood matures over 15-20 years.",
    },
    PlantSeed {
        id: "11",
        name: "Mulethi (Licorice)",
        botanical_name: "Glycyrrhiza glabra",
        image: "assets/mulethi-plant.jpg",
        uses: &["Sore Throat", "Respiratory Health", "Digestive Health", "Adrenal Support"],
        system: AyushSystem::Unani,
        region: "Mediterranean and West Asia",
        description: "Sweet root known in Unani as Asl-us-soos, used to soothe the throat and calm an irritated stomach.",
        cultivation_method: "Deep, fertile, moist soil in full sun. Roots are lifted after three to four years.",
    },
    PlantSeed {
        id: "12",
        name: "Ginseng",
        botanical_name: "Panax ginseng",
        image: "assets/ginseng-plant.jpg",
        uses: &["Energy", "Cognitive Support", "Stress Relief", "Vitality"],
        system: AyushSystem::Homeopathy,
        region: "East Asia",
        description: "A slow-growing root prepared as a homeopathic mother tincture for fatigue and weakness.",
        cultivation_method: "Needs deep shade and cool, loamy forest soil. Roots take five or more years to mature.",
    },
];

const TOURS: &[TourSeed] = &[
    TourSeed {
        id: "1",
        title: "Immunity Boosting Herbs",
        description: "Discover powerful immune-supporting plants from Ayurvedic tradition including Ashwagandha, Tulsi, and Guduchi.",
        duration: "15 min",
        difficulty: Difficulty::Beginner,
        theme: "Immunity",
        plant_count: 8,
        rating: 4.8,
        participants: 1250,
    },
    TourSeed {
        id: "2",
        title: "Digestive Health Garden",
        description: "Explore herbs that support digestive wellness, from gentle teas to powerful medicinal compounds.",
        duration: "20 min",
        difficulty: Difficulty::Intermediate,
        theme: "Digestion",
        plant_count: 12,
        rating: 4.9,
        participants: 890,
    },
    TourSeed {
        id: "3",
        title: "Skin Care Botanicals",
        description: "Journey through plants traditionally used for skin health, from Neem to Aloe Vera and beyond.",
        duration: "18 min",
        difficulty: Difficulty::Beginner,
        theme: "Skin Care",
        plant_count: 10,
        rating: 4.7,
        participants: 1100,
    },
];
