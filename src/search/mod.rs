pub mod filter;
pub mod suggest;

use log::debug;
use serde::Serialize;

use crate::config::settings::{SearchSettings, StatsSettings};
use crate::config::{Categories, Disambiguation};
use crate::domain::Item;
use crate::stats::{self, OverallRating};

pub use filter::{filter_items, ItemFilter};
pub use suggest::{disambiguation, suggestions};

/// Everything the search box shows for one query
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    pub query: String,
    pub results: Vec<Item>,
    pub overall: Option<OverallRating>,
    pub category_context: Option<String>,
    pub disambiguation: Option<Disambiguation>,
    pub suggestions: Vec<String>,
}

/// Items matching the query anywhere in their text, in catalog order
pub fn search_items<'a>(
    items: &'a [Item],
    query: &str,
    categories: &Categories,
    limit: usize,
) -> Vec<&'a Item> {
    if query.is_empty() {
        return Vec::new();
    }

    let term = query.to_lowercase();
    items
        .iter()
        .filter(|item| filter::matches_term(item, &term, categories))
        .take(limit)
        .collect()
}

pub struct SearchContext<'a> {
    pub categories: &'a Categories,
    pub disambiguations: &'a [Disambiguation],
    pub search: &'a SearchSettings,
    pub stats: &'a StatsSettings,
}

pub fn search(items: &[Item], query: &str, ctx: &SearchContext) -> SearchOutcome {
    let query = query.trim();
    let results: Vec<Item> = search_items(items, query, ctx.categories, ctx.search.result_limit)
        .into_iter()
        .cloned()
        .collect();
    debug!("Search for {:?} matched {} items", query, results.len());

    let overall = stats::overall_rating(&results);
    let category_context =
        stats::dominant_category(&results, ctx.categories, ctx.stats.category_context_share);
    let suggestions = if query.is_empty() {
        Vec::new()
    } else {
        suggestions(items, query, ctx.categories, ctx.search.suggestion_limit)
    };

    SearchOutcome {
        query: query.to_string(),
        overall,
        category_context,
        disambiguation: disambiguation(query, ctx.disambiguations).cloned(),
        suggestions,
        results,
    }
}
