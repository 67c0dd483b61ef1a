//! Types for the meal catalog

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of a meal in the catalog
pub type MealId = i64;

/// Identifier of a school
pub type SchoolId = i64;

/// The fixed set of meal categories served by the program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealCategory {
    /// Hot meal
    HotMeal,

    /// Sandwich
    Sandwich,

    /// Extra-large sandwich
    SandwichXl,

    /// Burger
    Burger,

    /// Crepe
    Crepe,

    /// Nursery meal
    Nursery,
}

impl MealCategory {
    /// Convert the category to its string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            MealCategory::HotMeal => "hot_meal",
            MealCategory::Sandwich => "sandwich",
            MealCategory::SandwichXl => "sandwich_xl",
            MealCategory::Burger => "burger",
            MealCategory::Crepe => "crepe",
            MealCategory::Nursery => "nursery",
        }
    }
}

/// A meal from the catalog service
///
/// Catalog meals are read-only to this client; the base price is the
/// program-wide price before any school-specific override applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub id: MealId,
    pub name: String,
    pub category: MealCategory,
    pub base_price: Decimal,
}
