//! School-aware price resolution

use rust_decimal::Decimal;

use crate::catalog::{Meal, MealId};
use crate::pricing::SchoolMealOverride;

/// The active override price for a meal, if the school carries one
///
/// Inactive overrides are ignored; they no longer affect what the school
/// is charged.
pub fn school_price(meal_id: MealId, overrides: &[SchoolMealOverride]) -> Option<Decimal> {
    overrides
        .iter()
        .find(|o| o.meal_id == meal_id && o.is_active)
        .map(|o| o.override_price)
}

/// The price a school is actually charged for a meal
///
/// Returns the active override price when one exists, the catalog base
/// price otherwise. Absence of an override is a normal case, not a
/// failure.
pub fn resolve_price(meal: &Meal, overrides: &[SchoolMealOverride]) -> Decimal {
    school_price(meal.id, overrides).unwrap_or(meal.base_price)
}
