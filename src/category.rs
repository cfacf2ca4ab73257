//! Product category detection.
//!
//! A product name is mapped to a coarse [`Category`] by looking for a known
//! brand first and falling back to product-type keywords. Both tables are
//! ordered and the first hit wins.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Coarse product type used to scope which aspects are considered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Mobile,
    Laptop,
    Television,
    Audio,
    Footwear,
    Fashion,
    HomeAppliance,
    #[default]
    General,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Mobile,
        Category::Laptop,
        Category::Television,
        Category::Audio,
        Category::Footwear,
        Category::Fashion,
        Category::HomeAppliance,
        Category::General,
    ];

    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mobile => "mobile",
            Category::Laptop => "laptop",
            Category::Television => "television",
            Category::Audio => "audio",
            Category::Footwear => "footwear",
            Category::Fashion => "fashion",
            Category::HomeAppliance => "home_appliance",
            Category::General => "general",
        }
    }

    /// Lowercase human label used inside sentences ("home appliance").
    pub fn label(&self) -> &'static str {
        match self {
            Category::HomeAppliance => "home appliance",
            other => other.as_str(),
        }
    }

    /// Title-cased label used in product names ("Home Appliance").
    pub fn title(&self) -> String {
        self.label()
            .split(' ')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Brand → category. Order matters: the first brand found in the name wins.
pub(crate) const BRAND_CATEGORIES: &[(&str, Category)] = &[
    ("Samsung", Category::Mobile),
    ("Realme", Category::Mobile),
    ("Vivo", Category::Mobile),
    ("Oppo", Category::Mobile),
    ("OnePlus", Category::Mobile),
    ("Apple", Category::Mobile),
    ("Motorola", Category::Mobile),
    ("Xiaomi", Category::Mobile),
    ("HP", Category::Laptop),
    ("Dell", Category::Laptop),
    ("Lenovo", Category::Laptop),
    ("Asus", Category::Laptop),
    ("Acer", Category::Laptop),
    ("Sony", Category::Television),
    ("LG", Category::Television),
    ("TCL", Category::Television),
    ("Boat", Category::Audio),
    ("Noise", Category::Audio),
    ("JBL", Category::Audio),
    ("Bata", Category::Footwear),
    ("Sparx", Category::Footwear),
    ("Puma", Category::Footwear),
    ("Nike", Category::Footwear),
    ("Whirlpool", Category::HomeAppliance),
    ("Godrej", Category::HomeAppliance),
    ("Haier", Category::HomeAppliance),
];

/// Product-type keywords, checked only when no brand matched.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Mobile, &["phone", "mobile", "smartphone", "5g"]),
    (Category::Laptop, &["laptop", "notebook", "macbook", "chromebook"]),
    (Category::Television, &["tv", "television", "smart tv", "qled"]),
    (Category::Audio, &["earphone", "headphone", "earbud", "speaker", "soundbar"]),
    (Category::Footwear, &["shoe", "slipper", "sandal", "boot", "sneaker"]),
    (Category::Fashion, &["shirt", "pant", "jean", "dress", "tshirt", "kurti"]),
    (Category::HomeAppliance, &["refrigerator", "washing", "microwave", "ac", "cooler"]),
];

/// Infers the product category from its name. Never fails: anything
/// unrecognised (including an empty name) is [`Category::General`].
pub fn detect_category(product_name: &str) -> Category {
    let name = product_name.to_lowercase();
    if name.trim().is_empty() {
        return Category::General;
    }

    if let Some((_, category)) = find_brand(&name) {
        return category;
    }

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| name.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::General)
}

/// Returns the first brand from the brand table that appears in the name.
pub fn detect_brand(product_name: &str) -> Option<&'static str> {
    find_brand(&product_name.to_lowercase()).map(|(brand, _)| brand)
}

fn find_brand(lowercase_name: &str) -> Option<(&'static str, Category)> {
    BRAND_CATEGORIES
        .iter()
        .find(|(brand, _)| lowercase_name.contains(&brand.to_lowercase()))
        .copied()
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
