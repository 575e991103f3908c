use crate::domain::filter::ItemFilter;
use crate::domain::model::{AllDataItem, DailyItem, Menu, MenuRecords, TimeOfDay};

/// Flatten one decoded menu into filtered records.
///
/// An excluded category drops every item in it. An excluded item drops only
/// itself. The station keeps the category name as the API sent it. Output
/// follows payload order with no dedup.
pub fn parse_menu(
    menu: &Menu,
    location: &str,
    time_of_day: TimeOfDay,
    filter: &ItemFilter,
) -> MenuRecords {
    let mut records = MenuRecords::default();

    for category in &menu.periods.categories {
        if filter.is_excluded_category(&category.name) {
            tracing::debug!(category = %category.name.trim(), "Skipping category");
            continue;
        }

        for item in &category.items {
            if filter.is_excluded_item(&item.name) {
                continue;
            }

            records.all_data_items.push(AllDataItem {
                name: item.name.clone(),
            });
            records.daily_items.push(DailyItem {
                name: item.name.clone(),
                description: item.description.clone().unwrap_or_default(),
                date: menu.date.clone(),
                location: location.to_string(),
                station_name: category.name.clone(),
                time_of_day,
            });
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DiningHallResponse;

    fn menu(value: serde_json::Value) -> Menu {
        serde_json::from_value::<DiningHallResponse>(value)
            .unwrap()
            .into_menu()
    }

    fn grill_and_condiments() -> Menu {
        menu(serde_json::json!({
            "date": "2024-10-01",
            "periods": {"categories": [
                {"name": "Grill", "items": [{"name": "Burger", "description": "beef"}]},
                {"name": "Condiments", "items": [{"name": "Ketchup"}]}
            ]}
        }))
    }

    #[test]
    fn test_excluded_category_is_dropped() {
        let filter = ItemFilter::new(["condiments"], Vec::<String>::new());
        let records = parse_menu(&grill_and_condiments(), "Allison", TimeOfDay::Lunch, &filter);

        assert_eq!(
            records.daily_items,
            vec![DailyItem {
                name: "Burger".to_string(),
                description: "beef".to_string(),
                date: "2024-10-01".to_string(),
                location: "Allison".to_string(),
                station_name: "Grill".to_string(),
                time_of_day: TimeOfDay::Lunch,
            }]
        );
        assert_eq!(
            records.all_data_items,
            vec![AllDataItem {
                name: "Burger".to_string()
            }]
        );
    }

    #[test]
    fn test_excluded_category_drops_items_that_would_pass() {
        let menu = menu(serde_json::json!({
            "date": "2024-10-01",
            "periods": {"categories": [
                {"name": "  TOPPINGS ", "items": [{"name": "Grilled Chicken"}, {"name": "Tofu"}]}
            ]}
        }));
        let filter = ItemFilter::new(["toppings"], Vec::<String>::new());

        let records = parse_menu(&menu, "Elder", TimeOfDay::Dinner, &filter);
        assert!(records.is_empty());
    }

    #[test]
    fn test_excluded_item_dropped_in_any_category() {
        let menu = menu(serde_json::json!({
            "date": "2024-10-01",
            "periods": {"categories": [
                {"name": "Grill", "items": [{"name": " ketchup"}, {"name": "Hot Dog"}]},
                {"name": "Breakfast Bar", "items": [{"name": "KETCHUP"}, {"name": "Waffles"}]}
            ]}
        }));
        let filter = ItemFilter::new(Vec::<String>::new(), ["Ketchup"]);

        let records = parse_menu(&menu, "Sargent", TimeOfDay::Breakfast, &filter);
        let names: Vec<&str> = records.daily_items.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Hot Dog", "Waffles"]);
        assert_eq!(records.all_data_items.len(), 2);
    }

    #[test]
    fn test_station_name_keeps_original_spelling() {
        let menu = menu(serde_json::json!({
            "date": "2024-10-01",
            "periods": {"categories": [
                {"name": " Comfort Station ", "items": [{"name": "Mac & Cheese"}]}
            ]}
        }));

        let records = parse_menu(&menu, "Plex West", TimeOfDay::Dinner, &ItemFilter::empty());
        assert_eq!(records.daily_items[0].station_name, " Comfort Station ");
        assert_eq!(records.daily_items[0].description, "");
    }

    #[test]
    fn test_output_preserves_order_and_duplicates() {
        let menu = menu(serde_json::json!({
            "date": "2024-10-01",
            "periods": {"categories": [
                {"name": "A", "items": [{"name": "Rice"}, {"name": "Beans"}]},
                {"name": "B", "items": [{"name": "Rice"}]}
            ]}
        }));

        let records = parse_menu(&menu, "Allison", TimeOfDay::Lunch, &ItemFilter::empty());
        let names: Vec<&str> = records
            .all_data_items
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["Rice", "Beans", "Rice"]);
    }

    #[test]
    fn test_parsing_is_repeatable() {
        let filter = ItemFilter::default();
        let menu = grill_and_condiments();
        let first = parse_menu(&menu, "Allison", TimeOfDay::Lunch, &filter);
        let second = parse_menu(&menu, "Allison", TimeOfDay::Lunch, &filter);
        assert_eq!(first, second);
    }
}
