use crate::model::money::format_price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the café menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub allergens: String,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        allergens: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            allergens: allergens.into(),
        }
    }

    /// Allergen text for display; an empty field reads as "none listed".
    pub fn allergens_display(&self) -> &str {
        let allergens = self.allergens.trim();
        if allergens.is_empty() {
            "none listed"
        } else {
            allergens
        }
    }
}

/// Names compared the way customers say them: trimmed, Unicode case folded.
fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// A snapshot of the active menu.
///
/// Item names are unique (case-insensitively) within a snapshot. A menu is never edited in
/// place: uploading a new one replaces the whole value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Build a menu, keeping the first occurrence of each name.
    pub fn new(items: impl IntoIterator<Item = MenuItem>) -> Self {
        let mut kept: Vec<MenuItem> = Vec::new();
        for item in items {
            let name = item.name.trim();
            if name.is_empty() {
                continue;
            }
            if kept.iter().any(|k| same_name(&k.name, name)) {
                continue;
            }
            kept.push(item);
        }
        Self { items: kept }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Case-insensitive exact match on the item name; surrounding whitespace is ignored.
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| same_name(&item.name, name))
    }

    /// Name, price and allergens for every item, one row per line.
    pub fn condensed_table(&self) -> String {
        let mut table = String::from("Item | Price | Allergens");
        for item in &self.items {
            table.push('\n');
            table.push_str(&format!(
                "{} | {} | {}",
                item.name,
                format_price(item.price),
                item.allergens_display()
            ));
        }
        table
    }

    /// Every column including descriptions.
    pub fn full_table(&self) -> String {
        let mut table = String::from("Item | Description | Price | Allergens");
        for item in &self.items {
            table.push('\n');
            table.push_str(&format!(
                "{} | {} | {} | {}",
                item.name,
                item.description,
                format_price(item.price),
                item.allergens_display()
            ));
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Menu {
        Menu::new(vec![
            MenuItem::new("Latte", "Espresso with steamed milk", Decimal::new(450, 2), "milk"),
            MenuItem::new("Blueberry Muffin", "Baked daily", Decimal::new(325, 2), "gluten, egg"),
            MenuItem::new("latte", "Duplicate row", Decimal::new(999, 2), ""),
        ])
    }

    #[test]
    fn test_duplicates_keep_first() {
        let menu = sample();
        assert_eq!(menu.len(), 2);
        assert_eq!(menu.find("LATTE").unwrap().price, Decimal::new(450, 2));
    }

    #[test]
    fn test_find_ignores_case_and_whitespace() {
        let menu = sample();
        assert!(menu.find("  blueberry muffin ").is_some());
        assert!(menu.find("muffin").is_none());
    }

    #[test]
    fn test_accented_names_match_and_dedupe() {
        let menu = Menu::new(vec![
            MenuItem::new("Crème Brûlée Latte", "", Decimal::new(550, 2), "milk"),
            MenuItem::new("CRÈME BRÛLÉE LATTE", "Second row", Decimal::new(600, 2), ""),
            MenuItem::new("Café au lait", "", Decimal::new(400, 2), "milk"),
        ]);

        assert_eq!(menu.len(), 2);
        assert_eq!(menu.find("crème brûlée latte").unwrap().price, Decimal::new(550, 2));
        assert_eq!(menu.find(" CAFÉ AU LAIT ").unwrap().name, "Café au lait");
    }

    #[test]
    fn test_tables() {
        let menu = sample();
        let condensed = menu.condensed_table();
        assert!(condensed.contains("Latte | $4.50 | milk"));
        assert!(!condensed.contains("steamed"));

        let full = menu.full_table();
        assert!(full.contains("Latte | Espresso with steamed milk | $4.50 | milk"));
    }
}
