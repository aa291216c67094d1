//! Data types exchanged with the food search backend
//!
//! All types mirror the JSON bodies returned by the backend. Fields the
//! backend may omit or send as `null` are modelled as explicit `Option`s.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default page size assumed before the first search response arrives
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// FoodData Central identifier
///
/// The backend sends numeric ids, but the route surface treats them as
/// opaque text, so both JSON numbers and strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FdcId(String);

impl FdcId {
    /// Create an id from any displayable value
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FdcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for FdcId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl FromStr for FdcId {
    type Err = crate::route::RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.contains('/') {
            return Err(crate::route::RouteError::InvalidId(s.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl<'de> Deserialize<'de> for FdcId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self::from(n),
            Raw::Text(s) => Self(s),
        })
    }
}

/// Decode `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One row of a search result page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodSummary {
    pub fdc_id: FdcId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub brand_owner: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data_type: String,
}

/// Key nutrient amounts per 100g; `None` means the measurement is unknown
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
    #[serde(default)]
    pub fiber: Option<f64>,
}

/// A labelled nutrient value ready for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientRow {
    pub name: &'static str,
    pub value: Option<f64>,
    pub unit: &'static str,
}

impl Nutrients {
    /// Display rows in their fixed presentation order
    #[must_use]
    pub const fn rows(&self) -> [NutrientRow; 5] {
        [
            NutrientRow { name: "Calories", value: self.calories, unit: "kcal" },
            NutrientRow { name: "Protein", value: self.protein, unit: "g" },
            NutrientRow { name: "Carbohydrates", value: self.carbs, unit: "g" },
            NutrientRow { name: "Fat", value: self.fat, unit: "g" },
            NutrientRow { name: "Fiber", value: self.fiber, unit: "g" },
        ]
    }
}

/// Full record for a single food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodDetail {
    pub fdc_id: FdcId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub brand_owner: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data_type: String,
    #[serde(default)]
    pub nutrients: Nutrients,
}

/// One page of search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default)]
    pub foods: Vec<FoodSummary>,
    /// Number of matching foods across all pages
    #[serde(default)]
    pub total: u64,
    pub page_size: u32,
    /// Page echoed back by the backend
    #[serde(default)]
    pub page: Option<u32>,
}

impl SearchResult {
    /// Whether the page respects its own size limit
    #[must_use]
    pub fn is_within_page_size(&self) -> bool {
        self.foods.len() <= self.page_size as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fdc_id_from_number_and_string() {
        let from_num: FdcId = serde_json::from_str("171705").unwrap();
        let from_str: FdcId = serde_json::from_str("\"171705\"").unwrap();
        assert_eq!(from_num, from_str);
        assert_eq!(from_num.to_string(), "171705");
    }

    #[test]
    fn test_fdc_id_parse_rejects_empty_and_slashes() {
        assert!("".parse::<FdcId>().is_err());
        assert!("   ".parse::<FdcId>().is_err());
        assert!("12/34".parse::<FdcId>().is_err());
        assert_eq!("  42 ".parse::<FdcId>().unwrap().as_str(), "42");
    }

    #[test]
    fn test_search_result_decodes_backend_body() {
        let body = r#"{
            "foods": [
                {"fdcId": 1, "description": "Banana, raw", "dataType": "Survey (FNDDS)", "brandOwner": null},
                {"fdcId": 2, "description": "Banana chips", "dataType": "Branded", "brandOwner": "Acme"}
            ],
            "total": 2,
            "page": 1,
            "pageSize": 20
        }"#;
        let result: SearchResult = serde_json::from_str(body).unwrap();

        assert_eq!(result.foods.len(), 2);
        assert_eq!(result.total, 2);
        assert_eq!(result.page_size, 20);
        assert_eq!(result.page, Some(1));
        assert!(result.foods[0].brand_owner.is_none());
        assert_eq!(result.foods[1].brand_owner.as_deref(), Some("Acme"));
        assert!(result.is_within_page_size());
    }

    #[test]
    fn test_null_data_type_becomes_empty() {
        let body = r#"{"fdcId": 9, "description": null, "dataType": null}"#;
        let food: FoodSummary = serde_json::from_str(body).unwrap();
        assert_eq!(food.description, "");
        assert_eq!(food.data_type, "");
    }

    #[test]
    fn test_food_detail_with_partial_nutrients() {
        let body = r#"{
            "fdcId": 171705,
            "description": "Apple",
            "dataType": "Foundation",
            "nutrients": {"calories": 52, "protein": 0.26, "carbs": null, "fat": 0.17, "fiber": null}
        }"#;
        let detail: FoodDetail = serde_json::from_str(body).unwrap();

        assert_eq!(detail.nutrients.calories, Some(52.0));
        assert_eq!(detail.nutrients.carbs, None);
        assert!(detail.brand_owner.is_none());
    }

    #[test]
    fn test_nutrient_rows_order_and_units() {
        let nutrients = Nutrients {
            calories: Some(89.0),
            fiber: Some(2.6),
            ..Nutrients::default()
        };
        let rows = nutrients.rows();

        let names: Vec<_> = rows.iter().map(|r| r.name).collect();
        assert_eq!(names, ["Calories", "Protein", "Carbohydrates", "Fat", "Fiber"]);
        assert_eq!(rows[0].unit, "kcal");
        assert!(rows[1..].iter().all(|r| r.unit == "g"));
        assert_eq!(rows[4].value, Some(2.6));
        assert_eq!(rows[2].value, None);
    }
}
