use std::collections::{HashMap, HashSet};

use log::debug;

use super::average::to_fixed_tenth;
use super::types::ReviewerStat;
use crate::config::settings::StatsSettings;
use crate::domain::{Item, Rating, UserId};

/// Running totals for one reviewer while scanning the catalog
#[derive(Debug)]
struct ReviewerTally {
    name: String,
    user_id: UserId,
    total_reviews: usize,
    total_rating_value: f64,
    reviews_with_comments: usize,
    review_quality_score: f64,
    total_comments: usize,
}

impl ReviewerTally {
    fn new(rating: &Rating) -> Self {
        Self {
            name: rating.user.clone(),
            user_id: rating.user_id,
            total_reviews: 0,
            total_rating_value: 0.0,
            reviews_with_comments: 0,
            review_quality_score: 0.0,
            total_comments: 0,
        }
    }

    fn record(&mut self, rating: &Rating, settings: &StatsSettings) {
        self.total_reviews += 1;
        self.total_rating_value += rating.value.unwrap_or(0.0);

        if let Some(review) = rating.written_review() {
            self.reviews_with_comments += 1;
            self.review_quality_score += quality_points(review, settings);
        }

        self.total_comments += rating.comments.len();
    }

    fn into_stat(self, reciprocity_count: usize) -> ReviewerStat {
        let total_engagement = self.total_reviews as u64
            + 2 * self.reviews_with_comments as u64
            + self.total_comments as u64
            + 3 * reciprocity_count as u64
            + self.review_quality_score.floor() as u64;

        ReviewerStat {
            average_rating: to_fixed_tenth(self.total_rating_value / self.total_reviews as f64),
            name: self.name,
            user_id: self.user_id,
            total_reviews: self.total_reviews,
            reviews_with_comments: self.reviews_with_comments,
            total_comments: self.total_comments,
            reciprocity_count,
            total_engagement,
        }
    }
}

/// Length-based quality proxy for one written review, capped per review
fn quality_points(review: &str, settings: &StatsSettings) -> f64 {
    let length = review.chars().count() as f64;
    (length / settings.quality_chars_per_point).min(settings.quality_cap_per_review)
}

/// Ranks reviewers by engagement score, highest first.
///
/// Reviewers are keyed by name in order of first appearance, and the sort is
/// stable, so equal scores keep that order. At most `limit` entries are
/// returned and nobody without a review is listed.
pub fn top_reviewers(items: &[Item], limit: usize, settings: &StatsSettings) -> Vec<ReviewerStat> {
    let tallies = tally_reviewers(items, settings);
    let co_reviewers = co_reviewers_by_name(items);
    debug!("Ranking {} reviewers across {} items", tallies.len(), items.len());

    let mut stats: Vec<ReviewerStat> = tallies
        .into_iter()
        .filter(|tally| tally.total_reviews > 0)
        .map(|tally| {
            let reciprocity = co_reviewers.get(tally.name.as_str()).map_or(0, HashSet::len);
            tally.into_stat(reciprocity)
        })
        .collect();

    stats.sort_by(|a, b| b.total_engagement.cmp(&a.total_engagement));
    stats.truncate(limit);
    stats
}

fn tally_reviewers(items: &[Item], settings: &StatsSettings) -> Vec<ReviewerTally> {
    let mut tallies: Vec<ReviewerTally> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for rating in items.iter().flat_map(|item| &item.ratings) {
        let idx = *index.entry(rating.user.as_str()).or_insert_with(|| {
            tallies.push(ReviewerTally::new(rating));
            tallies.len() - 1
        });
        tallies[idx].record(rating, settings);
    }

    tallies
}

/// For each reviewer, the other reviewers sharing at least one item with them.
/// This is a same-item co-occurrence test; its size is the reciprocity count.
fn co_reviewers_by_name(items: &[Item]) -> HashMap<&str, HashSet<&str>> {
    let mut co_reviewers: HashMap<&str, HashSet<&str>> = HashMap::new();

    for item in items {
        let names: HashSet<&str> = item.ratings.iter().map(|r| r.user.as_str()).collect();
        for &name in &names {
            let others = co_reviewers.entry(name).or_default();
            others.extend(names.iter().copied().filter(|&other| other != name));
        }
    }

    co_reviewers
}
