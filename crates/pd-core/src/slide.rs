//! Slide records and the immutable decks that hold them

use std::ops::Index;
use std::sync::Arc;
use serde::{Deserialize, Deserializer, Serialize};

/// Icon shown on a companion slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Gift,
    Star,
    Code,
    Book,
    Cloud,
}

impl IconKind {
    /// Parse an icon name, ignoring case. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "gift" => Some(IconKind::Gift),
            "star" => Some(IconKind::Star),
            "code" => Some(IconKind::Code),
            "book" => Some(IconKind::Book),
            "cloud" => Some(IconKind::Cloud),
            _ => None,
        }
    }
}

/// Unknown icon names render no icon instead of failing the whole config
fn lenient_icon<'de, D>(deserializer: D) -> Result<Option<IconKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(IconKind::parse))
}

/// A promotional slide shown by a carousel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default, rename = "iconType", deserialize_with = "lenient_icon")]
    pub icon: Option<IconKind>,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub is_companion_card: bool,
    #[serde(default)]
    pub alt_text: Option<String>,
}

impl Slide {
    /// Create a plain slide with a title and description
    pub fn new(id: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            subtitle: None,
            icon: None,
            year: None,
            is_companion_card: false,
            alt_text: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    /// Turn this slide into a companion card with an icon and start year
    pub fn companion(mut self, icon: IconKind, year: u32) -> Self {
        self.is_companion_card = true;
        self.icon = Some(icon);
        self.year = Some(year);
        self
    }
}

/// A top user shown in the profile modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub usage: String,
    #[serde(default)]
    pub avatar_url: String,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, usage: impl Into<String>, avatar_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            usage: usage.into(),
            avatar_url: avatar_url.into(),
        }
    }

    /// Initials used for the avatar placeholder
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Ordered, immutable collection backing one navigator.
///
/// The length is fixed for the lifetime of the deck; cloning shares the
/// underlying storage.
#[derive(Debug)]
pub struct SlideDeck<T> {
    items: Arc<[T]>,
}

impl<T> SlideDeck<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items: items.into() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Clone for SlideDeck<T> {
    fn clone(&self) -> Self {
        Self { items: Arc::clone(&self.items) }
    }
}

impl<T> From<Vec<T>> for SlideDeck<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for SlideDeck<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for SlideDeck<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_from_camel_case_json() {
        let json = r#"{
            "id": 3,
            "title": "Sapphire City",
            "description": "Night lights of a sprawling metropolis.",
            "iconType": "Code",
            "year": 2021,
            "isCompanionCard": true,
            "altText": "Sapphire City lights"
        }"#;

        let slide: Slide = serde_json::from_str(json).unwrap();
        assert_eq!(slide.id, 3);
        assert_eq!(slide.icon, Some(IconKind::Code));
        assert_eq!(slide.year, Some(2021));
        assert!(slide.is_companion_card);
        assert_eq!(slide.alt_text.as_deref(), Some("Sapphire City lights"));
        assert!(slide.subtitle.is_none());
    }

    #[test]
    fn test_unknown_icon_is_ignored() {
        let json = r#"{ "id": 1, "title": "Crimson Peak", "iconType": "rocket" }"#;
        let slide: Slide = serde_json::from_str(json).unwrap();
        assert_eq!(slide.icon, None);
        assert_eq!(slide.description, "");
        assert!(!slide.is_companion_card);
    }

    #[test]
    fn test_user_initials() {
        let user = UserProfile::new("Monye Matt", "20k Use", "");
        assert_eq!(user.initials(), "MM");

        let user = UserProfile::new("sarah", "12k Use", "");
        assert_eq!(user.initials(), "S");
    }

    #[test]
    fn test_deck_clone_shares_storage() {
        let deck: SlideDeck<u32> = (1..=3).collect();
        let copy = deck.clone();
        assert_eq!(copy.len(), 3);
        assert_eq!(copy[2], 3);
        assert!(std::ptr::eq(deck.as_slice(), copy.as_slice()));
    }
}
