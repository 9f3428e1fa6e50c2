//! Built-in demo content used when no configuration file is given

use crate::slide::{IconKind, Slide, UserProfile};

/// Slides for the horizontal companion carousel
pub fn companion_slides() -> Vec<Slide> {
    vec![
        Slide::new(1, "Crimson Peak", "A vibrant view of fall foliage.")
            .with_subtitle("Autumn collection")
            .with_alt_text("Crimson Peak forest"),
        Slide::new(2, "Emerald Lake", "Crystal clear waters reflecting the sky.")
            .with_subtitle("Still waters")
            .with_alt_text("Emerald Lake reflections"),
        Slide::new(3, "Sapphire City", "Night lights of a sprawling metropolis.")
            .with_subtitle("After dark")
            .with_alt_text("Sapphire City lights"),
        Slide::new(4, "Amethyst Fields", "Lavender fields stretching to the horizon.")
            .with_subtitle("Open country")
            .with_alt_text("Amethyst lavender fields"),
        Slide::new(5, "Golden Sands", "Warm desert dunes under the setting sun.")
            .with_subtitle("Dune sea")
            .with_alt_text("Golden desert sands"),
    ]
}

/// Slides for the vertical templates timeline
pub fn template_slides() -> Vec<Slide> {
    vec![
        Slide::new(1, "Crimson Peak", "A vibrant view of fall foliage.")
            .with_alt_text("Crimson Peak forest"),
        Slide::new(2, "Emerald Lake", "Crystal clear waters reflecting the sky.")
            .with_alt_text("Emerald Lake reflections")
            .companion(IconKind::Gift, 2019),
        Slide::new(3, "Sapphire City", "Night lights of a sprawling metropolis.")
            .with_alt_text("Sapphire City lights"),
        Slide::new(4, "Amethyst Fields", "Lavender fields stretching to the horizon.")
            .with_alt_text("Amethyst lavender fields")
            .companion(IconKind::Star, 2021),
        Slide::new(5, "Golden Sands", "Warm desert dunes under the setting sun.")
            .with_alt_text("Golden desert sands"),
    ]
}

/// Users on the top users card
pub fn top_users() -> Vec<UserProfile> {
    vec![
        UserProfile::new(
            "Monye Matt",
            "20k Use",
            "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=1",
        ),
        UserProfile::new(
            "Alex Johnson",
            "15k Use",
            "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=1",
        ),
        UserProfile::new(
            "Sarah Chen",
            "12k Use",
            "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=1",
        ),
    ]
}
