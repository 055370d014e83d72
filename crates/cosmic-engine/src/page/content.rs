//! Static page content — daily facts, "what if" scenarios, and news items.
//!
//! Selection is keyed by weekday so every visitor sees the same rotation on
//! a given day; only the fact refresh button reaches for the Rng.

use serde::Serialize;

use crate::core::rng::Rng;

pub const SPACE_FACTS: [&str; 10] = [
    "A day on Venus (243 Earth days) is longer than its year (225 Earth days).",
    "The Sun makes up 99.86% of the Solar System's mass.",
    "There are more stars in the universe than grains of sand on all Earth's beaches.",
    "Neutron stars can spin at a rate of 600 rotations per second.",
    "The footprints on the Moon will be there for 100 million years.",
    "Saturn's density is so low it could float in water.",
    "One spoonful of a neutron star would weigh 6 billion tons.",
    "The Milky Way galaxy is 105,700 light-years wide.",
    "The universe is 13.8 billion years old.",
    "There are 88 recognized constellations in our night sky.",
];

/// A speculative scenario with its headline effects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WhatIf {
    pub question: &'static str,
    pub scenario: &'static str,
    pub effects: [&'static str; 4],
}

impl WhatIf {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".into())
    }
}

pub const DAILY_WHAT_IFS: [WhatIf; 3] = [
    WhatIf {
        question: "What if Earth had two moons?",
        scenario: "Imagine waking up to see not one, but two moons gracing our night sky. \
            The gravitational dance between Earth and two lunar companions would create \
            dramatic tides, potentially double the height of our current tides, and create \
            a more complex orbital mechanics system that would fascinate astronomers for \
            centuries.",
        effects: [
            "Enhanced tidal forces affecting coastal ecosystems",
            "Brighter nights affecting nocturnal wildlife",
            "Complex orbital mechanics requiring new calculations",
            "Potential for more frequent eclipses",
        ],
    },
    WhatIf {
        question: "What if Jupiter became a star?",
        scenario: "If Jupiter ignited as a small star, our solar system would become a \
            binary star system. The night sky would be dominated by two bright objects, \
            and the additional light and heat would dramatically alter Earth's climate and \
            potentially make some regions uninhabitable while creating new habitable zones.",
        effects: [
            "Binary star system with two light sources",
            "Dramatic climate changes on Earth",
            "New habitable zones in the solar system",
            "Altered orbital dynamics for all planets",
        ],
    },
    WhatIf {
        question: "What if Mars had a thick atmosphere?",
        scenario: "With a thick atmosphere, Mars could potentially support liquid water on \
            its surface, making it much more hospitable to human colonization. The red \
            planet might develop weather patterns similar to Earth, complete with clouds, \
            rain, and possibly even primitive life forms.",
        effects: [
            "Liquid water possible on the surface",
            "Earth-like weather patterns",
            "Potential for human colonization",
            "Possibility of primitive life development",
        ],
    },
];

/// One card in the weekly updates grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NewsItem {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    pub is_new: bool,
}

/// The initial news grid.
pub const SPACE_NEWS: [NewsItem; 3] = [
    NewsItem {
        title: "James Webb Discovers Water Vapor",
        excerpt: "The James Webb Space Telescope has detected water vapor in the \
            atmosphere of a potentially habitable exoplanet...",
        date: "2 days ago",
        category: "Exoplanets",
        is_new: true,
    },
    NewsItem {
        title: "Solar Storm Activity Increases",
        excerpt: "NASA reports increased solar activity as we approach the solar maximum, \
            with several X-class flares detected...",
        date: "5 days ago",
        category: "Solar System",
        is_new: false,
    },
    NewsItem {
        title: "New Moon Mission Announced",
        excerpt: "SpaceX and NASA collaborate on Artemis IV mission, targeting lunar south \
            pole exploration...",
        date: "1 week ago",
        category: "Moon Missions",
        is_new: false,
    },
];

/// Items appended by the "load more" button.
pub const MORE_SPACE_NEWS: [NewsItem; 2] = [
    NewsItem {
        title: "Asteroid Mining Initiative",
        excerpt: "Private companies announce plans to begin asteroid mining operations \
            within the next decade...",
        date: "2 weeks ago",
        category: "Space Economy",
        is_new: false,
    },
    NewsItem {
        title: "Quantum Communication Breakthrough",
        excerpt: "Scientists achieve quantum entanglement communication over unprecedented \
            distances...",
        date: "3 weeks ago",
        category: "Space Technology",
        is_new: false,
    },
];

/// Fact for a 0-based weekday (Sunday = 0), wrapping past the end.
pub fn fact_for_day(weekday: usize) -> &'static str {
    SPACE_FACTS[weekday % SPACE_FACTS.len()]
}

/// Scenario for a 0-based weekday (Sunday = 0).
pub fn what_if_for_day(weekday: usize) -> WhatIf {
    DAILY_WHAT_IFS[weekday % DAILY_WHAT_IFS.len()]
}

/// A fact picked at random, for the refresh button.
pub fn random_fact(rng: &mut Rng) -> &'static str {
    SPACE_FACTS[rng.next_int(SPACE_FACTS.len() as u32) as usize]
}

pub fn news_json() -> String {
    serde_json::to_string(&SPACE_NEWS).unwrap_or_else(|_| "[]".into())
}

pub fn more_news_json() -> String {
    serde_json::to_string(&MORE_SPACE_NEWS).unwrap_or_else(|_| "[]".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_selection_wraps() {
        assert_eq!(fact_for_day(0), SPACE_FACTS[0]);
        assert_eq!(fact_for_day(6), SPACE_FACTS[6]);
        assert_eq!(fact_for_day(13), SPACE_FACTS[3]);

        assert_eq!(what_if_for_day(0), DAILY_WHAT_IFS[0]);
        assert_eq!(what_if_for_day(5), DAILY_WHAT_IFS[2]);
    }

    #[test]
    fn random_fact_is_deterministic_per_seed() {
        let a = random_fact(&mut Rng::new(99));
        let b = random_fact(&mut Rng::new(99));
        assert_eq!(a, b);
        assert!(SPACE_FACTS.contains(&a));
    }

    #[test]
    fn news_serializes_with_expected_fields() {
        let json = news_json();
        assert!(json.contains("\"title\":\"James Webb Discovers Water Vapor\""));
        assert!(json.contains("\"is_new\":true"));

        let more = more_news_json();
        assert!(more.contains("Asteroid Mining Initiative"));
    }

    #[test]
    fn what_if_serializes_question_and_effects() {
        let json = DAILY_WHAT_IFS[0].to_json();
        assert!(json.contains("What if Earth had two moons?"));
        assert!(json.contains("Potential for more frequent eclipses"));
    }
}
