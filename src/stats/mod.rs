pub mod average;
pub mod overall;
pub mod reviewers;
pub mod summary;
pub mod types;

pub use average::{average_rating, other_ratings, round_to_tenth, to_fixed_tenth};
pub use overall::{dominant_category, overall_rating};
pub use reviewers::top_reviewers;
pub use summary::{site_stats, user_stats};
pub use types::{OtherRatings, OverallRating, ReviewerStat, SiteStats, UserStats};
