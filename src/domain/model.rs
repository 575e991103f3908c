use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    Breakfast,
    Lunch,
    Dinner,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Breakfast => "Breakfast",
            TimeOfDay::Lunch => "Lunch",
            TimeOfDay::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One filtered menu entry for one item on one day at one location/service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyItem {
    pub name: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub station_name: String,
    pub time_of_day: TimeOfDay,
}

/// Catalog entry; identity and dedup belong to the persistence sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllDataItem {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuRecords {
    pub daily_items: Vec<DailyItem>,
    pub all_data_items: Vec<AllDataItem>,
}

impl MenuRecords {
    pub fn extend(&mut self, other: MenuRecords) {
        self.daily_items.extend(other.daily_items);
        self.all_data_items.extend(other.all_data_items);
    }

    pub fn is_empty(&self) -> bool {
        self.daily_items.is_empty() && self.all_data_items.is_empty()
    }
}

// ---- API payloads -------------------------------------------------------

/// The live API nests the menu under `menu`; older captures are bare.
///
/// The envelope is picked by the presence of the `menu` key, so a wrapped
/// menu that does not match the schema is a decode error rather than a
/// silently empty bare menu.
#[derive(Debug, Clone)]
pub struct DiningHallResponse {
    menu: Menu,
}

impl DiningHallResponse {
    pub fn into_menu(self) -> Menu {
        self.menu
    }
}

impl<'de> Deserialize<'de> for DiningHallResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = serde_json::Value::deserialize(deserializer)?;

        let menu = match value.get_mut("menu").map(serde_json::Value::take) {
            Some(wrapped) => Menu::deserialize(wrapped),
            None => Menu::deserialize(value),
        }
        .map_err(serde::de::Error::custom)?;

        Ok(Self { menu })
    }
}

/// `periods` is required: payloads without one (error envelopes, schema
/// drift) must fail to decode.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Menu {
    #[serde(default)]
    pub date: String,
    pub periods: Periods,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Periods {
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OperationHoursResponse {
    #[serde(default)]
    pub locations: Vec<LocationOperationInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LocationOperationInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub week: Vec<DaySchedule>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DaySchedule {
    #[serde(default)]
    pub day: Option<i64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub closed: Option<bool>,
    #[serde(default)]
    pub hours: Vec<OpenHours>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OpenHours {
    #[serde(default)]
    pub start_hour: Option<u32>,
    #[serde(default)]
    pub start_minutes: Option<u32>,
    #[serde(default)]
    pub end_hour: Option<u32>,
    #[serde(default)]
    pub end_minutes: Option<u32>,
}
