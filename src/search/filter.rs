use serde::Deserialize;

use crate::config::Categories;
use crate::domain::Item;

/// List-view criteria; unset fields do not restrict anything
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFilter {
    #[serde(rename = "q")]
    pub text: Option<String>,
    pub category: Option<String>,
    pub min_rating: Option<f64>,
    pub min_reviews: Option<usize>,
    pub min_written_reviews: Option<usize>,
}

/// Case-insensitive match of an already lower-cased term against an item's
/// name, description, category key, category label and review texts
pub fn matches_term(item: &Item, term: &str, categories: &Categories) -> bool {
    let display = categories.display_name(&item.category);

    item.name.to_lowercase().contains(term)
        || item.description.to_lowercase().contains(term)
        || item.category.to_lowercase().contains(term)
        || display.to_lowercase().contains(term)
        || item
            .ratings
            .iter()
            .any(|r| r.review.to_lowercase().contains(term))
}

pub fn filter_items<'a>(items: &'a [Item], filter: &ItemFilter, categories: &Categories) -> Vec<&'a Item> {
    let term = filter.text.as_deref().map(str::to_lowercase).unwrap_or_default();

    items
        .iter()
        .filter(|item| term.is_empty() || matches_term(item, &term, categories))
        .filter(|item| {
            filter
                .category
                .as_deref()
                .is_none_or(|c| c.is_empty() || item.category == c)
        })
        .filter(|item| filter.min_rating.is_none_or(|min| item.average_rating >= min))
        .filter(|item| filter.min_reviews.is_none_or(|min| item.ratings.len() >= min))
        .filter(|item| {
            filter.min_written_reviews.is_none_or(|min| {
                item.ratings.iter().filter(|r| r.written_review().is_some()).count() >= min
            })
        })
        .collect()
}
