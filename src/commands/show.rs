//! Show command - print the nutrient card of one food

use crate::{
    FoodFinderError,
    api::FoodApi,
    controller::{DetailController, DetailView},
    format::format_nutrient,
    models::{FdcId, FoodDetail},
};
use colored::Colorize;

type Result<T> = std::result::Result<T, FoodFinderError>;

/// Execute the show command
///
/// # Errors
/// Returns an error if the food does not exist or the backend request fails
pub fn execute(api: &dyn FoodApi, fdc_id: FdcId) -> Result<()> {
    let (mut controller, request) = DetailController::mount(fdc_id);
    controller.run_detail(api, &request);

    match controller.view() {
        DetailView::Loaded(food) => {
            for line in format_detail(food) {
                println!("{line}");
            }
            Ok(())
        }
        DetailView::Failed(message) => Err(FoodFinderError::Request(message.to_string())),
        DetailView::Loading | DetailView::Blank => Err(FoodFinderError::Request(format!(
            "No details returned for food {}",
            controller.fdc_id()
        ))),
    }
}

/// Lines of the detail card
#[must_use]
pub fn format_detail(food: &FoodDetail) -> Vec<String> {
    let mut lines = vec![food.description.bold().to_string()];

    if let Some(brand) = &food.brand_owner {
        lines.push(format!("{} {}", "Brand:".dimmed(), brand.yellow()));
    }
    lines.push(format!("{} {}", "Type:".dimmed(), food.data_type.magenta()));
    lines.push(String::new());
    lines.push("Key Nutrients (per 100g)".bold().to_string());

    for row in food.nutrients.rows() {
        lines.push(format!(
            "  {:<15}{}",
            row.name,
            format_nutrient(row.value, row.unit).green()
        ));
    }

    lines.push(String::new());
    lines.push(
        format!("Data Source: USDA FoodData Central (ID: {})", food.fdc_id)
            .dimmed()
            .to_string(),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::testing::{MockFoodApi, detail};

    #[test]
    fn test_format_detail() {
        colored::control::set_override(false);
        let mut food = detail(171_688, "Apples, raw");
        food.brand_owner = Some("Orchard Co".to_string());
        food.nutrients.protein = None;

        let lines = format_detail(&food);
        assert_eq!(lines[0], "Apples, raw");
        assert_eq!(lines[1], "Brand: Orchard Co");
        assert_eq!(lines[2], "Type: Foundation");
        assert!(lines.contains(&"  Calories       52 kcal".to_string()));
        assert!(lines.contains(&"  Protein        N/A".to_string()));
        assert!(lines.contains(&"  Carbohydrates  13.81 g".to_string()));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Data Source: USDA FoodData Central (ID: 171688)")
        );
    }

    #[test]
    fn test_not_found_is_error() {
        let api = MockFoodApi::new().with_detail(Err(ApiError::NotFound));
        let err = execute(&api, FdcId::from(999_999_999)).unwrap_err();
        assert_eq!(err.to_string(), "Food not found");
        assert_eq!(api.detail_ids(), vec![FdcId::from(999_999_999)]);
    }
}
