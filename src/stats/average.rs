use super::types::OtherRatings;
use crate::domain::{Item, Rating, UserId};

/// Rounds half away from zero to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounds a non-negative value to one decimal from its exact binary value,
/// so 4.35 (stored just below) becomes 4.3. Only exact ties round up.
pub fn to_fixed_tenth(value: f64) -> f64 {
    let scaled = value * 10.0;
    // exact remainder of the multiplication
    let error = value.mul_add(10.0, -scaled);
    let floor = scaled.floor();
    let fraction = scaled - floor;
    let round_up = fraction > 0.5 || (fraction == 0.5 && error >= 0.0);

    let tenths = if round_up { floor + 1.0 } else { floor };
    tenths / 10.0
}

/// Mean of the valid rating values, rounded to one decimal.
/// Entries without a finite value are skipped; no valid entries gives 0.
pub fn average_rating<'a, I>(ratings: I) -> f64
where
    I: IntoIterator<Item = &'a Rating>,
{
    let (sum, count) = ratings
        .into_iter()
        .filter_map(|r| r.value)
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        return 0.0;
    }
    round_to_tenth(sum / count as f64)
}

/// Compares the ratings of everybody except `current_user` on one item
pub fn other_ratings(item: &Item, current_user: Option<UserId>) -> OtherRatings {
    let Some(me) = current_user else {
        return OtherRatings::NotApplicable;
    };

    let others: Vec<&Rating> = item.ratings.iter().filter(|r| r.user_id != me).collect();
    if others.is_empty() {
        return OtherRatings::NoOthers;
    }

    OtherRatings::Stats {
        count: others.len(),
        average: average_rating(others),
    }
}
