//! Search command - print one page of matching foods

use crate::{
    FoodFinderError,
    api::FoodApi,
    controller::{SearchController, SearchView},
    models::FoodSummary,
    pagination::{PageWindow, result_count_label},
};
use colored::Colorize;

type Result<T> = std::result::Result<T, FoodFinderError>;

/// Execute the search command
///
/// # Errors
/// Returns an error if the query is blank or the backend request fails
pub fn execute(api: &dyn FoodApi, query: &str, page: u32, quiet: bool) -> Result<()> {
    let mut controller = SearchController::new();
    let mut request = controller
        .submit_query(query)
        .ok_or_else(|| FoodFinderError::InvalidInput("Search query cannot be empty".into()))?;
    if page > 1 {
        request = controller.change_page(page).unwrap_or(request);
    }

    controller.run_search(api, &request);

    match controller.view() {
        SearchView::Failed(message) => Err(FoodFinderError::Request(message.to_string())),
        SearchView::Results {
            foods,
            total,
            pagination,
        } => {
            for line in format_results(foods, total, pagination.as_ref(), quiet) {
                println!("{line}");
            }
            Ok(())
        }
        SearchView::Empty | SearchView::Welcome | SearchView::Loading => {
            if !quiet {
                println!("No foods found. Try a different search term!");
            }
            Ok(())
        }
    }
}

/// Lines printed for a page of results
///
/// In quiet mode only the result rows are printed, one per line.
#[must_use]
pub fn format_results(
    foods: &[FoodSummary],
    total: u64,
    pagination: Option<&PageWindow>,
    quiet: bool,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(foods.len() + 3);

    if !quiet {
        lines.push(result_count_label(total).bold().to_string());
    }

    for food in foods {
        let mut line = format!("{:>10}  {}", food.fdc_id.as_str().cyan(), food.description);
        if quiet {
            lines.push(line);
            continue;
        }
        if let Some(brand) = &food.brand_owner {
            line.push_str(&format!("  {}", brand.yellow()));
        }
        line.push_str(&format!("  {}", format!("[{}]", food.data_type).dimmed()));
        lines.push(line);
    }

    if let (Some(window), false) = (pagination, quiet) {
        lines.push(format!("{}  ({})", window.range_label(), window.page_label()).dimmed().to_string());
    }

    lines
}
