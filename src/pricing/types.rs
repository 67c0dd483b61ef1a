//! Types for school pricing

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{MealId, SchoolId};

/// A school-specific price override for one catalog meal
///
/// At most one active override exists per (school, meal) pair; an inactive
/// row is kept for history but no longer affects price resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolMealOverride {
    pub school_id: SchoolId,
    pub meal_id: MealId,
    pub override_price: Decimal,
    pub is_active: bool,
}

/// One row of a bulk price upsert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceUpsert {
    pub meal_id: MealId,
    pub price: Decimal,
}

/// A school's full price table as read from the pricing service
///
/// `version` is the opaque concurrency token (the response `ETag`) to hand
/// back on the next bulk upsert; `None` when the backend did not send one.
#[derive(Debug, Clone)]
pub struct SchoolPriceTable {
    pub version: Option<String>,
    pub overrides: Vec<SchoolMealOverride>,
}
