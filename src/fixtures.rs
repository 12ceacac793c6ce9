//! Builders shared by unit tests across modules.

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{Comment, Item, Rating, User};

pub fn user(name: &str) -> User {
    User::new(name, "secret")
}

pub fn admin(name: &str) -> User {
    let mut user = User::new(name, "secret");
    user.is_admin = true;
    user
}

pub fn rating(author: &User, value: u8, review: &str) -> Rating {
    Rating::new(author, value, review)
}

pub fn rating_with_comments(author: &User, value: u8, review: &str, commenters: &[&User]) -> Rating {
    let mut rating = Rating::new(author, value, review);
    rating.comments = commenters.iter().map(|c| Comment::new(c, "nice")).collect();
    rating
}

/// Item whose cached average is taken as given, not recomputed
pub fn item(name: &str, category: &str, average_rating: f64, ratings: Vec<Rating>) -> Item {
    Item {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category: category.to_string(),
        description: String::new(),
        ratings,
        average_rating,
        created_at: Utc::now(),
        created_by: "fixture".to_string(),
    }
}

pub fn rated_item(name: &str, ratings: Vec<Rating>) -> Item {
    let average = crate::stats::average_rating(&ratings);
    item(name, "other", average, ratings)
}
