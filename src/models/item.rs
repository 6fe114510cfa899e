use serde::{Deserialize, Serialize};

/// Marker attached to items the user adds in the decorated variant.
pub const PACKAGE_MARKER: &str = "📦";

/// An inventory entry.
///
/// Identity is the raw `name` only. The optional `marker` is decoration that
/// is applied when the item is displayed; it never takes part in matching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            marker: None,
        }
    }

    pub fn with_marker(name: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            marker: Some(marker.into()),
        }
    }

    /// The text shown for this item, e.g. `📦 Saw` or `Saw`.
    pub fn label(&self) -> String {
        match &self.marker {
            Some(marker) => format!("{} {}", marker, self.name),
            None => self.name.clone(),
        }
    }
}

/// Which flavour of the demo a session gets.
///
/// - `Plain`: undecorated labels
/// - `Decorated`: seeds carry their own tool emoji, added items get [`PACKAGE_MARKER`]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Plain,
    Decorated,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Decorated => "decorated",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "plain" => Some(Self::Plain),
            "decorated" => Some(Self::Decorated),
            _ => None,
        }
    }

    /// The three items every new session starts with.
    pub fn seed_items(&self) -> Vec<Item> {
        match self {
            Self::Plain => vec![
                Item::new("Młotek"),
                Item::new("Wiertarka"),
                Item::new("Śruby M8"),
            ],
            Self::Decorated => vec![
                Item::with_marker("Młotek", "🔨"),
                Item::with_marker("Wkrętarka", "🪛"),
                Item::with_marker("Śruby M8", "🔩"),
            ],
        }
    }

    /// Marker given to items added by the user.
    pub fn added_marker(&self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::Decorated => Some(PACKAGE_MARKER),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Plain => "Inventory",
            Self::Decorated => "🌟 Visual Tool Inventory",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_prefixes_marker() {
        assert_eq!(Item::with_marker("Saw", PACKAGE_MARKER).label(), "📦 Saw");
        assert_eq!(Item::new("Saw").label(), "Saw");
    }

    #[test]
    fn decorated_seeds_keep_raw_names() {
        let names: Vec<_> = Variant::Decorated
            .seed_items()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["Młotek", "Wkrętarka", "Śruby M8"]);
    }

    #[test]
    fn variant_round_trips_through_str() {
        for variant in [Variant::Plain, Variant::Decorated] {
            assert_eq!(Variant::from_str(variant.as_str()), Some(variant));
        }
        assert_eq!(Variant::from_str("fancy"), None);
    }
}
