//! Bulk price reconciliation
//!
//! Merges an operator's in-progress price edits with the school's persisted
//! overrides into one batch upsert. Every bulk save writes the complete
//! per-school price table: unedited meals are re-submitted at their current
//! resolved price.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::catalog::{Meal, MealId};
use crate::error::Error;
use crate::pricing::{school_price, PriceUpsert, SchoolMealOverride};

/// Build the batch upsert for a school's full price table
///
/// For every catalog meal, in catalog order, the persisted price is:
/// the operator's edited value if present, else the active override's
/// price, else the meal's base price.
///
/// Edited values arrive as raw operator input; a value that does not parse
/// as a non-negative decimal fails the whole reconciliation before
/// anything is sent.
pub fn reconcile(
    catalog: &[Meal],
    existing: &[SchoolMealOverride],
    edited: &HashMap<MealId, String>,
) -> Result<Vec<PriceUpsert>, Error> {
    let mut batch = Vec::with_capacity(catalog.len());

    for meal in catalog {
        let price = match edited.get(&meal.id) {
            Some(raw) => parse_price(meal, raw)?,
            None => school_price(meal.id, existing).unwrap_or(meal.base_price),
        };

        batch.push(PriceUpsert {
            meal_id: meal.id,
            price,
        });
    }

    Ok(batch)
}

fn parse_price(meal: &Meal, raw: &str) -> Result<Decimal, Error> {
    let price: Decimal = raw
        .trim()
        .parse()
        .map_err(|_| Error::validation(format!("invalid price {:?} for meal {}", raw, meal.id)))?;

    if price.is_sign_negative() {
        return Err(Error::validation(format!(
            "negative price {:?} for meal {}",
            raw, meal.id
        )));
    }

    Ok(price.round_dp(2))
}
