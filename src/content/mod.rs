// Content catalog - the fixed data the whole app renders
//
// Everything here is compiled into the binary and never mutated. The three
// catalogs are declared in display order; panels render them front to back
// without reordering or filtering.

use serde::Serialize;

/// Window/process title, set exactly once during terminal setup.
pub const PAGE_TITLE: &str = "All About Dogs | Your Canine Companion Guide";

/// Page header shown in the title bar.
pub const PAGE_HEADING: &str = "All About Dogs";

/// Subheading shown next to the page header when the terminal is wide enough.
pub const PAGE_TAGLINE: &str = "Your ultimate guide to canine companions";

/// Placeholder image service queried by breed-name slug.
const IMAGE_BASE_URL: &str = "https://source.unsplash.com/400x300/?";

/// A single breed card: display name plus a one-line description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreedEntry {
    pub name: &'static str,
    pub description: &'static str,
}

/// A care tip card: short title plus body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareTip {
    pub title: &'static str,
    pub content: &'static str,
}

/// Breed cards, in display order.
pub const BREEDS: &[BreedEntry] = &[
    BreedEntry {
        name: "Labrador Retriever",
        description: "Friendly, outgoing, and high-spirited companions.",
    },
    BreedEntry {
        name: "German Shepherd",
        description: "Intelligent, capable, and extremely loyal dogs.",
    },
    BreedEntry {
        name: "Golden Retriever",
        description: "Intelligent, friendly, and devoted companions.",
    },
    BreedEntry {
        name: "French Bulldog",
        description: "Adaptable, playful, and smart little dogs.",
    },
    BreedEntry {
        name: "Bulldog",
        description: "Kind, courageous, and friendly dogs.",
    },
    BreedEntry {
        name: "Poodle",
        description: "Highly intelligent, elegant, and energetic dogs.",
    },
];

/// Trivia facts, in display order. Identified by ordinal position only.
pub const FACTS: &[&str] = &[
    "Dogs have a sense of smell that's up to 100,000 times stronger than humans.",
    "The Basenji is the only breed of dog that can't bark, but they can yodel!",
    "A dog's nose print is unique, much like a human's fingerprint.",
    "Greyhounds can run up to 45 miles per hour, making them the fastest dogs.",
    "The tallest dog ever recorded was a Great Dane named Zeus, who stood 44 inches tall.",
];

/// Care tip cards, in display order.
pub const CARE_TIPS: &[CareTip] = &[
    CareTip {
        title: "Balanced Diet",
        content: "Provide a balanced diet appropriate for your dog's age, size, and activity level.",
    },
    CareTip {
        title: "Regular Exercise",
        content: "Ensure your dog gets regular exercise through walks, playtime, and activities.",
    },
    CareTip {
        title: "Veterinary Check-ups",
        content: "Schedule regular check-ups with a veterinarian for vaccinations and health screenings.",
    },
    CareTip {
        title: "Grooming",
        content: "Groom your dog regularly, including brushing their coat and teeth.",
    },
    CareTip {
        title: "Mental Stimulation",
        content: "Offer mental stimulation through training, puzzles, and interactive toys.",
    },
];

/// Derive the image lookup slug for a breed name: lowercase, spaces to hyphens.
pub fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Build the placeholder image URL for a breed name.
///
/// The URL is displayed, never fetched - a broken or missing image on the
/// other end is invisible to this program.
pub fn image_url(name: &str) -> String {
    format!("{}{}", IMAGE_BASE_URL, slug(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_sizes_are_fixed() {
        assert_eq!(BREEDS.len(), 6);
        assert_eq!(FACTS.len(), 5);
        assert_eq!(CARE_TIPS.len(), 5);
    }

    #[test]
    fn breeds_in_declared_order() {
        let names: Vec<&str> = BREEDS.iter().map(|b| b.name).collect();
        assert_eq!(
            names,
            vec![
                "Labrador Retriever",
                "German Shepherd",
                "Golden Retriever",
                "French Bulldog",
                "Bulldog",
                "Poodle",
            ]
        );
    }

    #[test]
    fn breed_names_are_unique_and_non_empty() {
        let mut seen = HashSet::new();
        for breed in BREEDS {
            assert!(!breed.name.is_empty());
            assert!(!breed.description.is_empty());
            assert!(seen.insert(breed.name), "duplicate breed: {}", breed.name);
        }
    }

    #[test]
    fn facts_and_tips_are_non_empty() {
        for fact in FACTS {
            assert!(!fact.is_empty());
        }
        for tip in CARE_TIPS {
            assert!(!tip.title.is_empty());
            assert!(!tip.content.is_empty());
        }
    }

    #[test]
    fn slug_lowercases_and_hyphenates() {
        assert_eq!(slug("Labrador Retriever"), "labrador-retriever");
        assert_eq!(slug("Poodle"), "poodle");
        assert_eq!(slug("French Bulldog"), "french-bulldog");
    }

    #[test]
    fn image_url_uses_slug() {
        assert_eq!(
            image_url("German Shepherd"),
            "https://source.unsplash.com/400x300/?german-shepherd"
        );
    }

    #[test]
    fn page_title_is_the_exact_literal() {
        assert_eq!(PAGE_TITLE, "All About Dogs | Your Canine Companion Guide");
    }
}
