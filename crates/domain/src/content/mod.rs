//! Static site content.
//!
//! Everything the marketing pages show lives here as `'static` data: the
//! navigation, the hero slides, treks, trails, testimonials, blog teasers,
//! FAQ and footer. Nothing is fetched at runtime.

mod catalog;

use chrono::NaiveDate;
use serde::Serialize;

pub use catalog::{
    BLOG_POSTS, CONTACT, DESTINATION_CARDS, EXPEDITION_TREKS, FAQS, FOOTER_COLUMNS,
    HERITAGE_TRAILS, HERO_SLIDES, NAV_ITEMS, SERVICES, TESTIMONIALS,
};

/// A link with a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Visible text.
    pub label: &'static str,
    /// Target.
    pub href: &'static str,
}

/// A dropdown entry of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Visible text.
    pub label: &'static str,
    /// One-line description under the label.
    pub description: &'static str,
    /// Target.
    pub href: &'static str,
}

/// A titled group of dropdown entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    /// Group heading.
    pub group: &'static str,
    /// Entries.
    pub items: &'static [NavLink],
}

/// A top-level navigation item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Visible text.
    pub label: &'static str,
    /// Target.
    pub href: &'static str,
    /// Dropdown groups; empty for plain links.
    pub children: &'static [NavGroup],
}

impl NavItem {
    /// Returns true if the item opens a dropdown.
    #[must_use]
    pub const fn has_dropdown(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A slide of the hero carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroSlide {
    /// Destination name.
    pub title: &'static str,
    /// Image URL.
    pub image: &'static str,
}

/// A card of the "destinations" fan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DestinationCard {
    /// Card heading.
    pub title: &'static str,
    /// Card text.
    pub description: &'static str,
    /// Image URL.
    pub image: &'static str,
    /// Whether the card carries the call-to-action button.
    pub cta: bool,
}

/// Trek difficulty grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Difficulty {
    /// Suitable for first-time trekkers.
    Easy,
    /// Some prior trekking recommended.
    Moderate,
    /// High passes and long days.
    Hard,
}

impl Difficulty {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Moderate => "Moderate",
            Self::Hard => "Hard",
        }
    }
}

/// An expedition trek offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trek {
    /// Trek name.
    pub title: &'static str,
    /// Price in Nepalese rupees.
    pub price_npr: u32,
    /// Teaser text.
    pub description: &'static str,
    /// Difficulty grade.
    pub difficulty: Difficulty,
    /// Length of the trek.
    pub duration_days: u16,
    /// Highest point, in meters.
    pub max_altitude_m: u16,
    /// Image URL.
    pub image: &'static str,
}

impl Trek {
    /// Price as shown on the card, e.g. `Rs 10,000`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("Rs {}", group_thousands(self.price_npr))
    }

    /// Duration as shown on the card, e.g. `5 days`.
    #[must_use]
    pub fn duration_label(&self) -> String {
        if self.duration_days == 1 {
            "1 day".to_string()
        } else {
            format!("{} days", self.duration_days)
        }
    }

    /// Altitude as shown on the card, e.g. `~5,000m`.
    #[must_use]
    pub fn altitude_label(&self) -> String {
        format!("~{}m", group_thousands(u32::from(self.max_altitude_m)))
    }
}

/// A heritage trail card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeritageTrail {
    /// Site name.
    pub title: &'static str,
    /// Card text.
    pub description: &'static str,
    /// Image URL.
    pub image: &'static str,
}

/// A service tile of the "why us" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Service {
    /// Icon name.
    pub icon: &'static str,
    /// Service name.
    pub title: &'static str,
    /// Tile text.
    pub description: &'static str,
    /// Image URL.
    pub image: &'static str,
    /// Target.
    pub link: &'static str,
}

/// A customer testimonial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    /// Customer name.
    pub name: &'static str,
    /// Customer country.
    pub country: &'static str,
    /// Stars, 1 to 5.
    pub rating: u8,
    /// Portrait URL.
    pub image: &'static str,
    /// Quote.
    pub text: &'static str,
}

/// Blog post author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Author {
    /// Display name.
    pub name: &'static str,
    /// Avatar URL.
    pub avatar: &'static str,
}

/// Size of a blog teaser tile in the masonry grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TileSize {
    /// Full-height tile.
    Large,
    /// Half-height tile.
    Small,
}

/// A blog teaser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    /// Post identifier.
    pub id: u32,
    /// Headline.
    pub title: &'static str,
    /// Teaser text.
    pub description: &'static str,
    /// Author.
    pub author: Author,
    /// Publication date as `(year, month, day)`.
    pub published: (i32, u32, u32),
    /// Cover image URL.
    pub image: &'static str,
    /// Tile size.
    pub size: TileSize,
}

impl BlogPost {
    /// Publication date.
    #[must_use]
    pub fn published_on(&self) -> Option<NaiveDate> {
        let (year, month, day) = self.published;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Publication date as shown on the tile, e.g. `March 18, 2024`.
    #[must_use]
    pub fn date_label(&self) -> String {
        self.published_on()
            .map(|date| date.format("%B %-d, %Y").to_string())
            .unwrap_or_default()
    }
}

/// A frequently asked question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Faq {
    /// Question.
    pub question: &'static str,
    /// Answer.
    pub answer: &'static str,
}

/// A titled column of footer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    /// Column heading.
    pub title: &'static str,
    /// Links.
    pub links: &'static [Link],
}

/// The agency's direct contact details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    /// Phone number as displayed.
    pub phone: &'static str,
    /// Email address.
    pub email: &'static str,
    /// Office hours.
    pub hours: &'static str,
    /// Street address.
    pub address: &'static str,
    /// Embedded map URL.
    pub map_url: &'static str,
}

impl ContactDetails {
    /// `tel:` link for the phone number.
    #[must_use]
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_trek_labels() {
        let trek = EXPEDITION_TREKS[0];
        assert_eq!(trek.title, "Everest Base Camp");
        assert_eq!(trek.price_label(), "Rs 10,000");
        assert_eq!(trek.duration_label(), "5 days");
        assert_eq!(trek.altitude_label(), "~5,000m");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_blog_date_label() {
        assert_eq!(BLOG_POSTS[0].date_label(), "March 18, 2024");
    }

    #[test]
    fn test_navigation_has_one_dropdown() {
        let dropdowns: Vec<_> = NAV_ITEMS.iter().filter(|i| i.has_dropdown()).collect();
        assert_eq!(dropdowns.len(), 1);
        assert_eq!(dropdowns[0].label, "Destinations");
    }

    #[test]
    fn test_contact_phone_href() {
        assert_eq!(CONTACT.phone_href(), "tel:+9779812345678");
    }

    #[test]
    fn test_testimonials_are_rated() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }
}
