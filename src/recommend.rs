//! Competitor suggestions for a product.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::category::{detect_brand, Category};

/// At most this many alternatives are suggested.
pub const MAX_RECOMMENDATIONS: usize = 4;

const COMPETITORS: &[(Category, &[&str])] = &[
    (Category::Mobile, &["Samsung", "Realme", "Vivo", "Oppo", "OnePlus", "Apple", "Motorola", "Xiaomi"]),
    (Category::Laptop, &["HP", "Dell", "Lenovo", "Asus", "Acer", "Apple"]),
    (Category::Television, &["Sony", "LG", "TCL", "Samsung", "Mi"]),
    (Category::Audio, &["Boat", "Noise", "JBL", "Sony", "Realme"]),
    (Category::Footwear, &["Bata", "Sparx", "Puma", "Nike", "Adidas", "Campus"]),
    (Category::Fashion, &["Zara", "H&M", "Max", "Allen Solly", "Peter England"]),
    (Category::HomeAppliance, &["Whirlpool", "Godrej", "Haier", "LG", "Samsung"]),
];

/// Weak aspect → clause appended to every reason. First match wins.
const WEAKNESS_CLAUSES: &[(&str, &str)] = &[
    ("battery", " - known for better battery performance"),
    ("camera", " - strong camera capabilities"),
    ("performance", " - superior processing power"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    pub name: String,
    pub reason: String,
    pub category: Category,
}

/// Brands competing in `category`, excluding the product's own brand.
pub fn competitors(product_name: &str, category: Category) -> Vec<&'static str> {
    let own_brand = detect_brand(product_name).map(str::to_lowercase);
    COMPETITORS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, brands)| brands.to_vec())
        .unwrap_or_default()
        .into_iter()
        .filter(|brand| own_brand.as_deref() != Some(brand.to_lowercase().as_str()))
        .collect()
}

/// Suggests up to [`MAX_RECOMMENDATIONS`] alternatives, in table order.
///
/// `weak_aspects` are the names of aspects with a negative verdict, in any
/// case.
pub fn recommend(product_name: &str, category: Category, weak_aspects: &[String]) -> Vec<Recommendation> {
    let weak: Vec<String> = weak_aspects.iter().map(|a| a.to_lowercase()).collect();
    let clause = WEAKNESS_CLAUSES
        .iter()
        .find(|(aspect, _)| weak.iter().any(|w| w == aspect))
        .map(|(_, clause)| *clause)
        .unwrap_or("");

    competitors(product_name, category)
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .enumerate()
        .map(|(index, brand)| Recommendation {
            name: format!("{} {} Series", brand, category.title()),
            reason: format!("{}{}", base_reason(category, index), clause),
            category,
        })
        .collect()
}

fn base_reason(category: Category, index: usize) -> String {
    let label = category.label();
    match index {
        0 => format!("Alternative {} option with established brand reputation", label),
        1 => format!("Known for reliability in the {} segment", label),
        2 => "Popular choice offering competitive features".to_string(),
        3 => format!("Budget-friendly alternative in {} category", label),
        _ => format!("Alternative {} option", label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_own_brand_is_excluded() {
        let recs = recommend("Samsung Galaxy M34 5G", Category::Mobile, &[]);
        assert_eq!(recs.len(), 4);
        let names: Vec<&str> = recs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Realme Mobile Series", "Vivo Mobile Series", "Oppo Mobile Series", "OnePlus Mobile Series"]
        );
        assert_eq!(recs[0].reason, "Alternative mobile option with established brand reputation");
        assert_eq!(recs[3].reason, "Budget-friendly alternative in mobile category");
    }

    #[test]
    fn test_weakness_clause_priority() {
        let weak = vec!["Camera".to_string(), "Battery".to_string()];
        let recs = recommend("Redmi Note", Category::Mobile, &weak);
        assert!(recs
            .iter()
            .all(|r| r.reason.ends_with(" - known for better battery performance")));

        let weak = vec!["Performance".to_string()];
        let recs = recommend("Dell Inspiron", Category::Laptop, &weak);
        assert_eq!(recs[0].name, "HP Laptop Series");
        assert_eq!(
            recs[1].reason,
            "Known for reliability in the laptop segment - superior processing power"
        );
    }

    #[test]
    fn test_general_category_has_no_competitors() {
        assert!(recommend("Unknown Gadget", Category::General, &[]).is_empty());
    }

    #[test]
    fn test_home_appliance_labels() {
        let recs = recommend("Haier Fridge", Category::HomeAppliance, &[]);
        assert_eq!(recs[0].name, "Whirlpool Home Appliance Series");
        assert_eq!(recs[2].name, "LG Home Appliance Series");
        assert_eq!(recs[1].reason, "Known for reliability in the home appliance segment");
    }
}
