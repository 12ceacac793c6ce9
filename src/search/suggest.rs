use crate::config::{Categories, Disambiguation};
use crate::domain::Item;

/// Category labels, then item names, that contain the query
pub fn suggestions(items: &[Item], query: &str, categories: &Categories, limit: usize) -> Vec<String> {
    let query = query.to_lowercase();
    let mut found: Vec<String> = categories
        .iter()
        .filter(|c| c.display.to_lowercase().contains(&query))
        .map(|c| c.display.to_string())
        .collect();

    for item in items {
        if item.name.to_lowercase().contains(&query) && !found.contains(&item.name) {
            found.push(item.name.clone());
        }
    }

    found.truncate(limit);
    found
}

pub fn disambiguation<'a>(query: &str, table: &'a [Disambiguation]) -> Option<&'a Disambiguation> {
    let query = query.trim().to_lowercase();
    table.iter().find(|d| d.term == query)
}
