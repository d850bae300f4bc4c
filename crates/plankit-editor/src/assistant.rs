//! Canned-response assistant lookup.
//!
//! A static keyword-to-text table with case-insensitive substring
//! matching and a fixed fallback. The editor core never depends on it;
//! shells inject `respond` (or any compatible closure) where a dialog
//! needs answers.

/// An ordered keyword → response table. Earlier entries win when
/// several keywords match.
#[derive(Debug, Clone)]
pub struct CannedResponder {
    entries: Vec<(String, String)>,
    fallback: String,
}

impl CannedResponder {
    pub fn new(entries: Vec<(String, String)>, fallback: impl Into<String>) -> Self {
        Self {
            entries,
            fallback: fallback.into(),
        }
    }

    /// The built-in layout-advice table.
    pub fn builtin() -> Self {
        let entries = vec![
            (
                "living room".to_string(),
                "For a living room: sofa against the longest wall, coffee table \
                 within 40-50 cm of the seating, TV stand opposite at 2.5-3 m. \
                 Keep main walkways at least 70 cm wide."
                    .to_string(),
            ),
            (
                "bedroom".to_string(),
                "For a bedroom: bed in the corner farthest from the door with \
                 50-70 cm of clearance on each usable side, wardrobe along a \
                 windowless wall, nightstands flush with the headboard."
                    .to_string(),
            ),
            (
                "kitchen".to_string(),
                "For a kitchen: keep the stove-sink-fridge triangle between \
                 1.2 m and 2.7 m per side, and leave a ventilation path above \
                 the stove."
                    .to_string(),
            ),
            (
                "bathroom".to_string(),
                "For a bathroom: at least 60 cm in front of each fixture, and \
                 keep electrical outlets out of the splash zones."
                    .to_string(),
            ),
            (
                "office".to_string(),
                "For a home office: desk perpendicular to the window so \
                 daylight falls from the side, shelving behind the chair, \
                 50-70 cm from eyes to the screen."
                    .to_string(),
            ),
        ];

        Self::new(
            entries,
            "Could you narrow that down? Mention the room type (living room, \
             bedroom, kitchen, bathroom, office) and its approximate size, and \
             I can suggest a layout.",
        )
    }

    /// Returns the response for the first keyword contained in `text`
    /// (case-insensitive), or the fallback.
    pub fn respond(&self, text: &str) -> &str {
        let lowered = text.to_lowercase();
        self.entries
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword.to_lowercase().as_str()))
            .map(|(_, response)| response.as_str())
            .unwrap_or(&self.fallback)
    }
}
