use super::average::round_to_tenth;
use super::types::{SiteStats, UserStats};
use crate::domain::{Item, User};

/// Review count and mean score of everything `name` has rated
pub fn user_stats(items: &[Item], name: &str) -> UserStats {
    let (total_reviews, total_value) = items
        .iter()
        .flat_map(|item| &item.ratings)
        .filter(|rating| rating.user == name)
        .fold((0usize, 0.0), |(count, sum), rating| {
            (count + 1, sum + rating.value.unwrap_or(0.0))
        });

    let average_rating = if total_reviews > 0 {
        round_to_tenth(total_value / total_reviews as f64)
    } else {
        0.0
    };

    UserStats {
        total_reviews,
        average_rating,
    }
}

pub fn site_stats(users: &[User], items: &[Item]) -> SiteStats {
    let ratings = items.iter().flat_map(|item| &item.ratings);

    SiteStats {
        total_users: users.len(),
        total_items: items.len(),
        total_reviews: ratings.clone().count(),
        total_comments: ratings.map(|rating| rating.comments.len()).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{rated_item, rating, rating_with_comments, user};

    #[test]
    fn test_user_stats() {
        let alice = user("alice");
        let bob = user("bob");
        let items = vec![
            rated_item("A", vec![rating(&alice, 5, ""), rating(&bob, 1, "")]),
            rated_item("B", vec![rating(&alice, 2, "")]),
        ];

        let stats = user_stats(&items, "alice");
        assert_eq!(stats.total_reviews, 2);
        assert_eq!(stats.average_rating, 3.5);
    }

    #[test]
    fn test_user_stats_without_reviews() {
        let stats = user_stats(&[], "nobody");
        assert_eq!(stats, UserStats { total_reviews: 0, average_rating: 0.0 });
    }

    #[test]
    fn test_site_stats_counts_everything() {
        let alice = user("alice");
        let bob = user("bob");
        let items = vec![
            rated_item("A", vec![rating_with_comments(&alice, 5, "", &[&bob]), rating(&bob, 1, "")]),
            rated_item("B", vec![rating_with_comments(&bob, 4, "", &[&alice, &alice])]),
        ];

        let stats = site_stats(&[alice, bob], &items);
        assert_eq!(
            stats,
            SiteStats {
                total_users: 2,
                total_items: 2,
                total_reviews: 3,
                total_comments: 3,
            }
        );
    }
}
