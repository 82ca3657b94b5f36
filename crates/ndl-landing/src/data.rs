#![forbid(unsafe_code)]

//! Literal content shown on the landing page.
//!
//! All records are fixed at construction. Image and icon references are
//! carried as opaque strings and never loaded.

use ndl_core::{CarouselItem, Metric};

const LATEST_IMAGE: &str = "https://images.unsplash.com/photo-1524661135-423995f22d0b?w=500&h=400&fit=crop";
const PARTNER_LOGO: &str =
    "https://images.unsplash.com/photo-1552664730-d307ca884978?w=200&h=120&fit=crop&q=80";

/// The six most recent additions, in display order.
#[must_use]
pub fn latest_additions() -> Vec<CarouselItem> {
    [
        (
            "1",
            "Royal Morocco Archives Collection",
            "Recently digitized royal documents and correspondence from the 18th century.",
            "Archives",
            "Added 2 days ago",
        ),
        (
            "2",
            "Moroccan Textile Heritage",
            "Photographs and documentation of traditional Moroccan weaving techniques and patterns.",
            "Photography",
            "Added 5 days ago",
        ),
        (
            "3",
            "Historical Maps of Morocco",
            "Rare cartographic documents showing the evolution of Morocco's borders and territories.",
            "Maps",
            "Added 1 week ago",
        ),
        (
            "4",
            "Fes Medina Manuscript Collection",
            "Islamic manuscripts and scholarly texts from the famous library of Fes.",
            "Manuscripts",
            "Added 1 week ago",
        ),
        (
            "5",
            "Moroccan Folk Art Collection",
            "Traditional crafts and artistic expressions from various regions of Morocco.",
            "Art",
            "Added 1 week ago",
        ),
        (
            "6",
            "Moroccan Architecture Collection",
            "Photographs and documentation of traditional Moroccan architectural styles and structures.",
            "Architecture",
            "Added 1 week ago",
        ),
    ]
    .into_iter()
    .map(|(id, title, description, category, date)| {
        CarouselItem::new(id, title, description, category, LATEST_IMAGE, date)
    })
    .collect()
}

/// A headline statistic with its label key and literal fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatDefinition {
    /// The animated number.
    pub metric: Metric,
    /// Catalog key for the label.
    pub label_key: &'static str,
    /// Label used when the key is not translated.
    pub label_fallback: &'static str,
}

/// The four headline statistics.
#[must_use]
pub fn statistics() -> Vec<StatDefinition> {
    [
        ("documents", 2_500_000, "+", "statistics.documents", "Digital Items"),
        ("collections", 450, "+", "statistics.collections", "Collections"),
        ("users", 180_000, "+", "statistics.users", "Active Users"),
        ("countries", 142, "", "statistics.countries", "Countries"),
    ]
    .into_iter()
    .map(|(id, target, suffix, label_key, label_fallback)| StatDefinition {
        metric: Metric::new(id, target, suffix),
        label_key,
        label_fallback,
    })
    .collect()
}

/// The document highlighted in the hero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedDocument {
    /// Stable identifier.
    pub id: &'static str,
    /// Title in transliteration.
    pub title: &'static str,
    /// Year shown on the card.
    pub year: u16,
    /// Category badge.
    pub category: &'static str,
    /// Long description, truncated on the card.
    pub description: &'static str,
    /// Cover image reference.
    pub image: &'static str,
}

/// The featured hero document.
#[must_use]
pub fn featured_document() -> FeaturedDocument {
    FeaturedDocument {
        id: "1776-declaration",
        title: "At-Tasr\u{12b}f liman \u{2018}Ajaza \u{2018}an at-Ta\u{2019}l\u{12b}f",
        year: 1776,
        category: "Historical Documents",
        description: "At-Tasrif liman Ajaz \u{2018}an at-Talif (The Arrangement of Medical \
            Knowledge for One Who is Unable to Compile) is a monumental 30-volume medical \
            encyclopedia compiled in the 11th century by Abu al-Qasim al-Zahrawi (936\u{2013}1013 \
            CE), known in the West as Abulcasis. As the foremost surgeon of the Islamic Golden \
            Age and court physician to Caliph Al-Hakam II of C\u{f3}rdoba, al-Zahrawi synthesized \
            Greco-Roman medical traditions with innovative Arabic practices. The work is \
            particularly celebrated for its final volume on surgery, the most comprehensive \
            surgical text of its era, which introduced over 200 surgical instruments, many of \
            his own invention, including forceps, scalpels, catgut sutures, and the syringe. \
            His detailed illustrations and procedural descriptions influenced European medicine \
            for nearly five centuries through Latin translations, establishing foundational \
            principles in dentistry, obstetrics, and wound management",
        image: "assets/images/LOGO.png",
    }
}

/// A browsable subject area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Display title.
    pub title: &'static str,
    /// Icon reference.
    pub icon: &'static str,
    /// Number of items in the category.
    pub count: u32,
}

/// The six subject categories.
#[must_use]
pub fn categories() -> Vec<Category> {
    [
        ("History & Politics", "landmark", 8_429),
        ("Geography & Maps", "map", 3_847),
        ("Arts & Literature", "book-marked", 12_567),
        ("Social & Cultural", "users", 6_234),
        ("Languages", "globe", 4_892),
        ("Ancient Texts", "scroll", 2_156),
    ]
    .into_iter()
    .map(|(title, icon, count)| Category { title, icon, count })
    .collect()
}

/// A partner institution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partner {
    /// Name.
    pub name: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Category badge.
    pub category: &'static str,
    /// Logo reference.
    pub logo: &'static str,
    /// Link target.
    pub url: &'static str,
}

/// The six partner institutions.
#[must_use]
pub fn partners() -> Vec<Partner> {
    [
        (
            "UNESCO",
            "International partnerships for cultural heritage preservation and digital access initiatives.",
            "International",
        ),
        (
            "DCMI",
            "Dublin Core Metadata Initiative standards for digital resource organization and interoperability.",
            "Standards",
        ),
        (
            "Internet Archive",
            "Global collaborative archive providing open access to cultural and historical materials.",
            "Archive",
        ),
        (
            "IFLA",
            "International Federation of Library Associations advancing professional standards and best practices.",
            "Network",
        ),
        (
            "OpenGLAM",
            "Open collaboration framework for galleries, libraries, archives, and museums worldwide.",
            "Community",
        ),
        (
            "Europeana",
            "European digital cultural heritage platform providing unified access to millions of resources.",
            "Platform",
        ),
    ]
    .into_iter()
    .map(|(name, description, category)| Partner {
        name,
        description,
        category,
        logo: PARTNER_LOGO,
        url: "#",
    })
    .collect()
}

/// `8429` as `"8,429"`.
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
