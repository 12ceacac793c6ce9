use serde::Serialize;

use crate::domain::UserId;

/// How everybody else rated an item, from one user's point of view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum OtherRatings {
    /// Nobody is signed in, so there is no "me" to compare against
    NotApplicable,
    /// Only the current user rated the item
    NoOthers,
    #[serde(rename_all = "camelCase")]
    Stats { count: usize, average: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallRating {
    pub rating: f64,
    pub total_items: usize,
    pub total_ratings: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewerStat {
    pub name: String,
    pub user_id: UserId,
    pub total_reviews: usize,
    pub reviews_with_comments: usize,
    pub total_comments: usize,
    pub reciprocity_count: usize,
    pub average_rating: f64,
    pub total_engagement: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_reviews: usize,
    pub average_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteStats {
    pub total_users: usize,
    pub total_items: usize,
    pub total_reviews: usize,
    pub total_comments: usize,
}
