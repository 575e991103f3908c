use std::collections::HashSet;

/// Stations that only ever hold condiments, toppings or build-your-own parts.
pub const DEFAULT_EXCLUDED_CATEGORIES: &[&str] = &[
    "condiments",
    "condiment",
    "toppings",
    "salad bar",
    "deli bar",
    "beverages",
    "cereal",
    "spreads",
    "dressings",
    "sauces",
];

pub const DEFAULT_EXCLUDED_ITEMS: &[&str] = &[
    "ketchup",
    "mustard",
    "mayonnaise",
    "relish",
    "hot sauce",
    "salt",
    "black pepper",
    "butter",
    "cream cheese",
    "honey",
    "syrup",
    "lettuce",
    "tomato",
    "onion",
    "pickles",
    "shredded cheese",
    "croutons",
    "sour cream",
    "salsa",
    "garnish",
];

/// Trim then lowercase; both sides of every lookup go through this.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Set-membership filter separating ingredient noise from real menu items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFilter {
    categories: HashSet<String>,
    items: HashSet<String>,
}

impl ItemFilter {
    pub fn new<C, I>(categories: C, items: I) -> Self
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            categories: categories
                .into_iter()
                .map(|c| normalize(c.as_ref()))
                .collect(),
            items: items.into_iter().map(|i| normalize(i.as_ref())).collect(),
        }
    }

    /// Filter that excludes nothing.
    pub fn empty() -> Self {
        Self {
            categories: HashSet::new(),
            items: HashSet::new(),
        }
    }

    pub fn is_excluded_category(&self, name: &str) -> bool {
        self.categories.contains(&normalize(name))
    }

    pub fn is_excluded_item(&self, name: &str) -> bool {
        self.items.contains(&normalize(name))
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for ItemFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_CATEGORIES, DEFAULT_EXCLUDED_ITEMS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_trimmed_and_case_insensitive() {
        let filter = ItemFilter::new(["Condiments"], ["  Ketchup "]);
        assert!(filter.is_excluded_category("condiments"));
        assert!(filter.is_excluded_category("  CONDIMENTS\t"));
        assert!(filter.is_excluded_item("KETCHUP"));
        assert!(!filter.is_excluded_item("Ketchup Chips Deluxe"));
        assert!(!filter.is_excluded_category("Grill"));
    }

    #[test]
    fn test_empty_filter_excludes_nothing() {
        let filter = ItemFilter::empty();
        assert!(!filter.is_excluded_category("condiments"));
        assert!(!filter.is_excluded_item("ketchup"));
    }

    #[test]
    fn test_default_lists_are_normalized_sets() {
        let filter = ItemFilter::default();
        assert_eq!(filter.category_count(), DEFAULT_EXCLUDED_CATEGORIES.len());
        assert_eq!(filter.item_count(), DEFAULT_EXCLUDED_ITEMS.len());
        assert!(filter.is_excluded_category("Condiments"));
        assert!(filter.is_excluded_item("Ketchup"));
    }
}
