//! Compiled-in reference tables for crops, soils, and seasons
//!
//! The tables are fixed at build time and small, so lookup is a linear
//! scan and no index structure is kept.

use crate::models::{Crop, Season, Soil};
use crate::types::{DrainageRate, WaterRetention};

/// All supported crops, in display order
pub static CROPS: [Crop; 8] = [
    Crop {
        id: "rice",
        name: "Rice",
        icon: "🌾",
        water_need_per_sqm: 8.0,
        irrigation_frequency: "Daily",
        optimal_time: "6:00 AM",
        growth_duration: "120-150 days",
        description: "High water requirement, needs standing water",
    },
    Crop {
        id: "wheat",
        name: "Wheat",
        icon: "🌿",
        water_need_per_sqm: 4.0,
        irrigation_frequency: "Every 3-4 days",
        optimal_time: "7:00 AM",
        growth_duration: "100-130 days",
        description: "Moderate water needs",
    },
    Crop {
        id: "corn",
        name: "Corn",
        icon: "🌽",
        water_need_per_sqm: 5.5,
        irrigation_frequency: "Every 2-3 days",
        optimal_time: "6:30 AM",
        growth_duration: "80-100 days",
        description: "Consistent moisture needed",
    },
    Crop {
        id: "tomato",
        name: "Tomato",
        icon: "🍅",
        water_need_per_sqm: 4.5,
        irrigation_frequency: "Every 2 days",
        optimal_time: "7:00 AM",
        growth_duration: "60-85 days",
        description: "Even watering prevents cracking",
    },
    Crop {
        id: "potato",
        name: "Potato",
        icon: "🥔",
        water_need_per_sqm: 5.0,
        irrigation_frequency: "Every 3 days",
        optimal_time: "6:00 AM",
        growth_duration: "70-120 days",
        description: "Deep watering promotes tuber growth",
    },
    Crop {
        id: "cotton",
        name: "Cotton",
        icon: "☁️",
        water_need_per_sqm: 6.0,
        irrigation_frequency: "Every 3-5 days",
        optimal_time: "6:00 AM",
        growth_duration: "150-180 days",
        description: "Drought-tolerant but needs water at flowering",
    },
    Crop {
        id: "sugarcane",
        name: "Sugarcane",
        icon: "🎋",
        water_need_per_sqm: 7.0,
        irrigation_frequency: "Every 2-3 days",
        optimal_time: "6:30 AM",
        growth_duration: "270-365 days",
        description: "Heavy water requirement throughout growth",
    },
    Crop {
        id: "vegetables",
        name: "Vegetables",
        icon: "🥬",
        water_need_per_sqm: 3.5,
        irrigation_frequency: "Daily",
        optimal_time: "7:00 AM",
        growth_duration: "30-90 days",
        description: "Shallow roots need frequent watering",
    },
];

/// All supported soil types, in display order
pub static SOILS: [Soil; 6] = [
    Soil {
        id: "sandy",
        name: "Sandy",
        icon: "🏜️",
        water_retention: WaterRetention::Low,
        drainage_rate: DrainageRate::Fast,
        multiplier: 1.3,
        description: "Drains quickly, needs more frequent watering",
    },
    Soil {
        id: "clay",
        name: "Clay",
        icon: "🧱",
        water_retention: WaterRetention::High,
        drainage_rate: DrainageRate::Slow,
        multiplier: 0.7,
        description: "Retains water well, risk of waterlogging",
    },
    Soil {
        id: "loamy",
        name: "Loamy",
        icon: "🌱",
        water_retention: WaterRetention::Medium,
        drainage_rate: DrainageRate::Moderate,
        multiplier: 1.0,
        description: "Ideal balance of drainage and retention",
    },
    Soil {
        id: "silty",
        name: "Silty",
        icon: "🏔️",
        water_retention: WaterRetention::Medium,
        drainage_rate: DrainageRate::Moderate,
        multiplier: 0.9,
        description: "Good moisture retention, fertile soil",
    },
    Soil {
        id: "peaty",
        name: "Peaty",
        icon: "🌿",
        water_retention: WaterRetention::High,
        drainage_rate: DrainageRate::Slow,
        multiplier: 0.6,
        description: "Very high moisture, acidic",
    },
    Soil {
        id: "chalky",
        name: "Chalky",
        icon: "⚪",
        water_retention: WaterRetention::Low,
        drainage_rate: DrainageRate::Fast,
        multiplier: 1.2,
        description: "Alkaline, drains quickly",
    },
];

/// All seasons, in display order
pub static SEASONS: [Season; 4] = [
    Season {
        id: "summer",
        name: "Summer",
        icon: "☀️",
        multiplier: 1.3,
        tip: "Increase watering during heat waves. Water early morning or late evening to reduce evaporation.",
    },
    Season {
        id: "winter",
        name: "Winter",
        icon: "❄️",
        multiplier: 0.7,
        tip: "Reduce watering as soil retains moisture longer. Avoid watering during frost.",
    },
    Season {
        id: "monsoon",
        name: "Monsoon",
        icon: "🌧️",
        multiplier: 0.4,
        tip: "Skip irrigation on rainy days. Ensure proper drainage to prevent waterlogging.",
    },
    Season {
        id: "spring",
        name: "Spring",
        icon: "🌸",
        multiplier: 1.0,
        tip: "Regular watering schedule. Great time for planting new crops.",
    },
];

pub fn crops() -> &'static [Crop] {
    &CROPS
}

pub fn soils() -> &'static [Soil] {
    &SOILS
}

pub fn seasons() -> &'static [Season] {
    &SEASONS
}

pub fn find_crop(id: &str) -> Option<&'static Crop> {
    CROPS.iter().find(|c| c.id == id)
}

pub fn find_soil(id: &str) -> Option<&'static Soil> {
    SOILS.iter().find(|s| s.id == id)
}

pub fn find_season(id: &str) -> Option<&'static Season> {
    SEASONS.iter().find(|s| s.id == id)
}

/// Season in effect for a calendar month (1-12)
///
/// Mar-May is spring, Jun-Aug summer, Sep-Oct monsoon, and the remaining
/// months winter.
pub fn season_for_month(month: u32) -> &'static Season {
    match month {
        3..=5 => &SEASONS[3],
        6..=8 => &SEASONS[0],
        9..=10 => &SEASONS[2],
        _ => &SEASONS[1],
    }
}
