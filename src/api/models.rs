use serde::{Deserialize, Serialize};

use crate::domain::{AuthoredComment, AuthoredReview, Item};
use crate::stats::{OtherRatings, UserStats};

#[derive(Deserialize)]
pub struct Credentials {
    pub name: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RatingRequest {
    pub value: u8,
    #[serde(default)]
    pub review: String,
}

#[derive(Deserialize)]
pub struct CommentRequest {
    pub text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
    #[serde(flatten)]
    pub item: Item,
    pub category_display: String,
    pub other_ratings: OtherRatings,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(flatten)]
    pub stats: UserStats,
    /// Mean of the profile ratings others gave this user, if any
    pub profile_rating: Option<f64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPosts {
    pub reviews: Vec<AuthoredReview>,
    pub comments: Vec<AuthoredComment>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub file: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurgeResponse {
    pub removed: usize,
}
