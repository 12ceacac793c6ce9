use super::types::OverallRating;
use crate::config::Categories;
use crate::domain::Item;

/// Combines several items' cached averages into one score, weighting each
/// item by its number of ratings (unrated items still count once).
pub fn overall_rating(items: &[Item]) -> Option<OverallRating> {
    if items.is_empty() {
        return None;
    }

    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    let mut total_ratings = 0;

    for item in items {
        let weight = item.ratings.len().max(1) as f64;
        weighted_sum += item.average_rating * weight;
        total_weight += weight;
        total_ratings += item.ratings.len();
    }

    Some(OverallRating {
        rating: weighted_sum / total_weight,
        total_items: items.len(),
        total_ratings,
    })
}

/// The category most of a multi-item result set belongs to, by display name.
/// Ties go to the category seen later; nothing is reported below `min_share`.
pub fn dominant_category(items: &[Item], categories: &Categories, min_share: f64) -> Option<String> {
    if items.len() <= 1 {
        return None;
    }

    let counts = count_by_display_name(items, categories);
    let (name, count) = counts
        .into_iter()
        .reduce(|best, next| if best.1 > next.1 { best } else { next })?;

    (count as f64 >= items.len() as f64 * min_share).then(|| name.to_string())
}

fn count_by_display_name<'a>(items: &'a [Item], categories: &'a Categories) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for item in items {
        let display = categories.display_name(&item.category);
        match counts.iter_mut().find(|(name, _)| *name == display) {
            Some((_, count)) => *count += 1,
            None => counts.push((display, 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{item, rating, user};

    fn with_counts(average: f64, count: usize) -> Item {
        let author = user("alice");
        let ratings = (0..count).map(|_| rating(&author, 3, "")).collect();
        item("thing", "other", average, ratings)
    }

    #[test]
    fn test_empty_set_has_no_rating() {
        assert_eq!(overall_rating(&[]), None);
    }

    #[test]
    fn test_single_item() {
        let overall = overall_rating(&[with_counts(4.0, 2)]).unwrap();
        assert_eq!(overall.rating, 4.0);
        assert_eq!(overall.total_items, 1);
        assert_eq!(overall.total_ratings, 2);
    }

    #[test]
    fn test_weighted_by_rating_count() {
        let overall = overall_rating(&[with_counts(5.0, 10), with_counts(1.0, 1)]).unwrap();
        assert!((overall.rating - 51.0 / 11.0).abs() < 1e-9);
        assert_eq!(overall.total_ratings, 11);
    }

    #[test]
    fn test_unrated_items_weigh_one() {
        let overall = overall_rating(&[with_counts(4.0, 1), with_counts(0.0, 0)]).unwrap();
        assert_eq!(overall.rating, 2.0);
        assert_eq!(overall.total_items, 2);
        assert_eq!(overall.total_ratings, 1);
    }

    #[test]
    fn test_dominant_category_needs_half() {
        let categories = Categories::default();
        let items = vec![
            item("a", "books", 4.0, vec![]),
            item("b", "books", 4.0, vec![]),
            item("c", "music", 4.0, vec![]),
        ];
        assert_eq!(
            dominant_category(&items, &categories, 0.5),
            Some("📚 Books".to_string())
        );

        let spread = vec![
            item("a", "books", 4.0, vec![]),
            item("b", "music", 4.0, vec![]),
            item("c", "games", 4.0, vec![]),
        ];
        assert_eq!(dominant_category(&spread, &categories, 0.5), None);
    }

    #[test]
    fn test_dominant_category_tie_takes_later() {
        let categories = Categories::default();
        let items = vec![item("a", "books", 4.0, vec![]), item("b", "music", 4.0, vec![])];
        assert_eq!(
            dominant_category(&items, &categories, 0.5),
            Some("🎵 Music".to_string())
        );
    }

    #[test]
    fn test_single_item_has_no_context() {
        let categories = Categories::default();
        let items = vec![item("a", "books", 4.0, vec![])];
        assert_eq!(dominant_category(&items, &categories, 0.5), None);
    }
}
