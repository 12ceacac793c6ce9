use chrono::Utc;
use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::models::{
    Comment, CommentId, Item, ItemId, ProfileRating, Rating, RatingId, User,
};
use crate::config::Categories;
use crate::errors::CatalogError;
use crate::stats::average_rating;

/// The account that can never be deleted
const PROTECTED_ADMIN: &str = "Admin";

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Fields a user supplies when creating an item together with its first rating
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub value: u8,
    #[serde(default)]
    pub review: String,
}

/// What an admin bulk purge wipes out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurgeScope {
    /// Every item, with its reviews and comments
    Items,
    /// Every review, leaving the items unrated
    Reviews,
    Comments,
}

/// A review written by a user, with the item it belongs to
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthoredReview {
    pub item_id: ItemId,
    pub item_name: String,
    pub rating: Rating,
}

/// A comment written by a user, with where it was posted
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthoredComment {
    pub item_id: ItemId,
    pub item_name: String,
    pub rating_id: RatingId,
    pub review_author: String,
    pub comment: Comment,
}

/// In-memory application state: every item, user and profile rating.
///
/// All mutations go through here so the cached item averages stay in step
/// with their ratings. Aggregation functions only ever borrow the slices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub items: Vec<Item>,
    pub users: Vec<User>,
    pub profile_ratings: Vec<ProfileRating>,
}

impl Catalog {
    pub fn new(items: Vec<Item>, users: Vec<User>, profile_ratings: Vec<ProfileRating>) -> Self {
        Self {
            items,
            users,
            profile_ratings,
        }
    }

    // --- Users ---

    pub fn user(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.name == name)
    }

    pub fn register_user(&mut self, name: &str, password: &str) -> CatalogResult<&User> {
        let name = name.trim();
        let password = password.trim();
        if name.is_empty() || password.is_empty() {
            return Err(CatalogError::invalid("Name and password are required"));
        }
        if self.user(name).is_some() {
            return Err(CatalogError::DuplicateUser(name.to_string()));
        }

        self.users.push(User::new(name, password));
        info!("Registered user {}", name);
        Ok(&self.users[self.users.len() - 1])
    }

    /// Credentials are compared as stored; there is no hashing here
    pub fn sign_in(&self, name: &str, password: &str) -> CatalogResult<&User> {
        self.user(name.trim())
            .filter(|u| u.password == password.trim())
            .ok_or(CatalogError::InvalidCredentials)
    }

    /// Creates the protected admin account, or restores its admin flag and
    /// password if it already exists. Returns true when anything changed.
    pub fn ensure_admin(&mut self, password: &str) -> bool {
        match self.users.iter_mut().find(|u| u.name == PROTECTED_ADMIN) {
            Some(existing) if existing.is_admin && existing.password == password => false,
            Some(existing) => {
                existing.is_admin = true;
                existing.password = password.to_string();
                true
            }
            None => {
                let mut admin = User::new(PROTECTED_ADMIN, password);
                admin.is_admin = true;
                self.users.push(admin);
                info!("Created {} account", PROTECTED_ADMIN);
                true
            }
        }
    }

    /// Removes a user with every rating and comment they wrote
    pub fn delete_user(&mut self, actor: &User, name: &str) -> CatalogResult<User> {
        if !actor.is_admin {
            return Err(CatalogError::forbidden("Admin privileges required"));
        }
        if name == PROTECTED_ADMIN {
            return Err(CatalogError::forbidden("Cannot delete admin account"));
        }

        let position = self
            .users
            .iter()
            .position(|u| u.name == name)
            .ok_or_else(|| CatalogError::not_found(format!("User `{}`", name)))?;
        let removed = self.users.remove(position);

        for item in &mut self.items {
            item.ratings.retain(|r| r.user != name);
            for rating in &mut item.ratings {
                rating.comments.retain(|c| c.user != name);
            }
            refresh_average(item);
        }

        info!("Admin {} deleted user {}", actor.name, name);
        Ok(removed)
    }

    // --- Items and ratings ---

    pub fn item(&self, item_id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == item_id)
    }

    fn item_mut(&mut self, item_id: ItemId) -> CatalogResult<&mut Item> {
        self.items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| CatalogError::not_found(format!("Item {}", item_id)))
    }

    /// Creates an item rated by `actor`; newest items come first
    pub fn add_item(
        &mut self,
        actor: &User,
        new_item: NewItem,
        categories: &Categories,
    ) -> CatalogResult<&Item> {
        let name = new_item.name.trim();
        let category = new_item.category.trim();
        if name.is_empty() {
            return Err(CatalogError::invalid("Item name is required"));
        }
        if category.is_empty() || !categories.contains(category) {
            return Err(CatalogError::invalid("Please select a valid category"));
        }
        validate_stars(new_item.value)?;

        let mut item = Item {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.to_string(),
            description: new_item.description.trim().to_string(),
            ratings: vec![Rating::new(actor, new_item.value, &new_item.review)],
            average_rating: 0.0,
            created_at: Utc::now(),
            created_by: actor.name.clone(),
        };
        refresh_average(&mut item);

        info!("{} added item {} in {}", actor.name, item.name, item.category);
        self.items.insert(0, item);
        Ok(&self.items[0])
    }

    /// Adds `actor`'s rating, or replaces it in place if they already rated
    /// the item. A replaced rating keeps its id and its comments.
    pub fn submit_rating(
        &mut self,
        actor: &User,
        item_id: ItemId,
        value: u8,
        review: &str,
    ) -> CatalogResult<&Item> {
        validate_stars(value)?;
        let item = self.item_mut(item_id)?;

        let mut rating = Rating::new(actor, value, review);
        match item.ratings.iter_mut().find(|r| r.user_id == actor.id) {
            Some(existing) => {
                rating.id = existing.id;
                rating.comments = std::mem::take(&mut existing.comments);
                *existing = rating;
            }
            None => item.ratings.push(rating),
        }
        refresh_average(item);

        Ok(item)
    }

    pub fn add_comment(
        &mut self,
        actor: &User,
        item_id: ItemId,
        rating_id: RatingId,
        text: &str,
        max_chars: usize,
    ) -> CatalogResult<&Comment> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CatalogError::invalid("Comment text is required"));
        }
        if text.chars().count() > max_chars {
            return Err(CatalogError::invalid(format!(
                "Comments are limited to {} characters",
                max_chars
            )));
        }

        let rating = find_rating_mut(self.item_mut(item_id)?, rating_id)?;
        rating.comments.push(Comment::new(actor, text));
        Ok(&rating.comments[rating.comments.len() - 1])
    }

    /// Authors may remove their own rating, owners any rating.
    /// The item stays even when its last rating goes.
    pub fn delete_rating(
        &mut self,
        actor: &User,
        item_id: ItemId,
        rating_id: RatingId,
    ) -> CatalogResult<Rating> {
        let item = self.item_mut(item_id)?;
        let position = item
            .ratings
            .iter()
            .position(|r| r.id == rating_id)
            .ok_or_else(|| CatalogError::not_found(format!("Review {}", rating_id)))?;

        if !actor.can_delete(&item.ratings[position].user) {
            return Err(CatalogError::forbidden("You can only delete your own reviews"));
        }

        let removed = item.ratings.remove(position);
        refresh_average(item);
        info!("{} deleted review by {}", actor.name, removed.user);
        Ok(removed)
    }

    pub fn delete_comment(
        &mut self,
        actor: &User,
        item_id: ItemId,
        rating_id: RatingId,
        comment_id: CommentId,
    ) -> CatalogResult<Comment> {
        let rating = find_rating_mut(self.item_mut(item_id)?, rating_id)?;
        let position = rating
            .comments
            .iter()
            .position(|c| c.id == comment_id)
            .ok_or_else(|| CatalogError::not_found(format!("Comment {}", comment_id)))?;

        if !actor.can_delete(&rating.comments[position].user) {
            return Err(CatalogError::forbidden("You can only delete your own comments"));
        }

        Ok(rating.comments.remove(position))
    }

    pub fn delete_item(&mut self, actor: &User, item_id: ItemId) -> CatalogResult<Item> {
        if !actor.is_owner() {
            return Err(CatalogError::forbidden("Only the owner can delete items"));
        }

        let position = self
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| CatalogError::not_found(format!("Item {}", item_id)))?;
        let removed = self.items.remove(position);
        info!("{} deleted item {}", actor.name, removed.name);
        Ok(removed)
    }

    /// Admin bulk deletion; returns how many records were removed
    pub fn purge(&mut self, actor: &User, scope: PurgeScope) -> CatalogResult<usize> {
        if !actor.is_admin {
            return Err(CatalogError::forbidden("Admin privileges required"));
        }

        let removed = match scope {
            PurgeScope::Items => std::mem::take(&mut self.items).len(),
            PurgeScope::Reviews => self
                .items
                .iter_mut()
                .map(|item| {
                    item.average_rating = 0.0;
                    std::mem::take(&mut item.ratings).len()
                })
                .sum(),
            PurgeScope::Comments => self
                .items
                .iter_mut()
                .flat_map(|item| item.ratings.iter_mut())
                .map(|rating| std::mem::take(&mut rating.comments).len())
                .sum(),
        };

        info!("Admin {} purged {} {:?}", actor.name, removed, scope);
        Ok(removed)
    }

    // --- Profile ratings ---

    pub fn submit_profile_rating(
        &mut self,
        actor: &User,
        rated_user: &str,
        value: u8,
        review: &str,
    ) -> CatalogResult<&ProfileRating> {
        if actor.name == rated_user {
            return Err(CatalogError::invalid("You cannot rate your own profile"));
        }
        if self.user(rated_user).is_none() {
            return Err(CatalogError::not_found(format!("User `{}`", rated_user)));
        }
        validate_stars(value)?;

        let profile_rating = ProfileRating {
            id: Uuid::new_v4(),
            rater_user: actor.name.clone(),
            rated_user: rated_user.to_string(),
            rating: value,
            review: review.trim().to_string(),
            timestamp: Utc::now(),
        };

        let position = self
            .profile_ratings
            .iter()
            .position(|p| p.rater_user == actor.name && p.rated_user == rated_user);
        let idx = match position {
            Some(idx) => {
                self.profile_ratings[idx] = profile_rating;
                idx
            }
            None => {
                self.profile_ratings.push(profile_rating);
                self.profile_ratings.len() - 1
            }
        };

        Ok(&self.profile_ratings[idx])
    }

    pub fn profile_ratings_for(&self, name: &str) -> Vec<&ProfileRating> {
        self.profile_ratings
            .iter()
            .filter(|p| p.rated_user == name)
            .collect()
    }

    // --- Posts by a user ---

    pub fn reviews_by(&self, name: &str) -> Vec<AuthoredReview> {
        self.items
            .iter()
            .flat_map(|item| {
                item.ratings
                    .iter()
                    .filter(move |r| r.user == name)
                    .map(move |r| AuthoredReview {
                        item_id: item.id,
                        item_name: item.name.clone(),
                        rating: r.clone(),
                    })
            })
            .collect()
    }

    pub fn comments_by(&self, name: &str) -> Vec<AuthoredComment> {
        let mut found = Vec::new();
        for item in &self.items {
            for rating in &item.ratings {
                for comment in rating.comments.iter().filter(|c| c.user == name) {
                    found.push(AuthoredComment {
                        item_id: item.id,
                        item_name: item.name.clone(),
                        rating_id: rating.id,
                        review_author: rating.user.clone(),
                        comment: comment.clone(),
                    });
                }
            }
        }
        found
    }
}

fn validate_stars(value: u8) -> CatalogResult<()> {
    if (1..=5).contains(&value) {
        Ok(())
    } else {
        Err(CatalogError::invalid("Rating must be between 1 and 5 stars"))
    }
}

fn find_rating_mut(item: &mut Item, rating_id: RatingId) -> CatalogResult<&mut Rating> {
    item.ratings
        .iter_mut()
        .find(|r| r.id == rating_id)
        .ok_or_else(|| CatalogError::not_found(format!("Review {}", rating_id)))
}

fn refresh_average(item: &mut Item) {
    item.average_rating = average_rating(&item.ratings);
}
