//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper prints its items in order and falls back to a short message
//! when the collection is empty.

use std::fmt;

use super::models::{MissionCard, PlantCard};
use crate::badges::Badge;

macro_rules! collection {
    ($(#[$meta:meta])* $name:ident, $item:ty, $empty:literal) => {
        $(#[$meta])*
        pub struct $name(pub Vec<$item>);

        impl $name {
            /// Check if the collection is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Number of items in the collection.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Iterator over the items.
            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.0.is_empty() {
                    return writeln!(f, $empty);
                }
                for item in &self.0 {
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    };
}

collection!(
    /// Plant cards, in collection order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plantmission_core::display::Plants;
    ///
    /// assert_eq!(Plants(vec![]).to_string(), "No plants found.\n");
    /// ```
    Plants,
    PlantCard,
    "No plants found."
);

collection!(
    /// Mission cards, in generation order.
    Missions,
    MissionCard,
    "No missions found."
);

collection!(
    /// The badge catalog with unlock state.
    Badges,
    Badge,
    "No badges defined."
);

#[cfg(test)]
mod tests {
    use jiff::{SignedDuration, Timestamp};

    use super::*;
    use crate::models::{Difficulty, Mission, MissionKind};

    #[test]
    fn test_missions_render_in_order() {
        let created = Timestamp::from_second(1_718_000_000).unwrap();
        let mission = |id: u64, title: &str| Mission {
            id,
            plant_id: Some(1),
            kind: MissionKind::Inspection,
            title: title.to_string(),
            description: "Look closely.".to_string(),
            difficulty: Difficulty::Medium,
            points: 15,
            time_left: SignedDuration::from_hours(72),
            urgent: false,
            created_at: created,
        };
        let missions = Missions(vec![
            MissionCard::new(mission(1, "Inspect Fern"), false, created),
            MissionCard::new(mission(2, "Inspect Ivy"), true, created),
        ]);

        let output = missions.to_string();
        assert_eq!(missions.len(), 2);
        assert!(output.contains("### 1. Inspect Fern (inspection, medium, 15 pts)"));
        assert!(output.contains("3d 0h left"));
        assert!(output.find("Inspect Fern") < output.find("Inspect Ivy"));
        assert!(output.contains("- Completed"));
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(Missions(vec![]).to_string(), "No missions found.\n");
        assert!(Badges(vec![]).is_empty());
    }
}
