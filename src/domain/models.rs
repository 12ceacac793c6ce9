use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

pub type ItemId = Uuid;
pub type RatingId = Uuid;
pub type CommentId = Uuid;
pub type UserId = Uuid;

/// Names that carry owner privileges without the admin flag
const OWNER_NAMES: [&str; 3] = ["Owner", "owner", "admin"];

/// A rateable subject created by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ratings: Vec<Rating>,
    /// Cached mean of `ratings`, kept current by the catalog
    #[serde(default)]
    pub average_rating: f64,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

/// One user's 1-5 star score plus optional review text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: RatingId,
    pub user: String,
    pub user_id: UserId,
    /// `None` when the stored value was not a finite number
    #[serde(default, deserialize_with = "finite_number")]
    pub value: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub review: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<Comment>,
}

impl Rating {
    pub fn new(author: &User, value: u8, review: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: author.name.clone(),
            user_id: author.id,
            value: Some(f64::from(value)),
            review: review.trim().to_string(),
            timestamp: Utc::now(),
            comments: Vec::new(),
        }
    }

    /// Review text with surrounding whitespace removed, if any is left
    pub fn written_review(&self) -> Option<&str> {
        let trimmed = self.review.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub user: String,
    pub user_id: UserId,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: &User, text: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: author.name.clone(),
            user_id: author.id,
            text: text.to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    pub fn new(name: &str, password: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            password: password.to_string(),
            created_at: Utc::now(),
            is_admin: false,
        }
    }

    pub fn is_owner(&self) -> bool {
        self.is_admin || OWNER_NAMES.contains(&self.name.as_str())
    }

    /// Owners may remove anything; everybody else only their own posts
    pub fn can_delete(&self, author: &str) -> bool {
        self.is_owner() || self.name == author
    }
}

/// A rating of a user's profile by another user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRating {
    pub id: Uuid,
    pub rater_user: String,
    pub rated_user: String,
    pub rating: u8,
    #[serde(default)]
    pub review: String,
    pub timestamp: DateTime<Utc>,
}

/// User record without credentials, for exports and API responses
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: UserId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub is_admin: bool,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            created_at: user.created_at,
            is_admin: user.is_admin,
        }
    }
}

/// Treats an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn finite_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(raw.as_f64().filter(|v| v.is_finite()))
}
