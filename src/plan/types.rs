//! Types for meal plans

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{MealCategory, MealId, SchoolId};
use crate::error::Error;

/// Identifier of a persisted meal plan
pub type PlanId = i64;

/// A weekday of the 5-day school week
///
/// The program serves Sunday through Thursday; Friday and Saturday are
/// never scheduled. On the wire a weekday is its number, 1 (Sunday) to
/// 5 (Thursday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
}

impl Weekday {
    /// All weekdays in calendar order
    pub const ALL: [Weekday; 5] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
    ];

    /// The next weekday in the 5-day cycle; Thursday wraps to Sunday
    pub fn next(self) -> Self {
        match self {
            Weekday::Sunday => Weekday::Monday,
            Weekday::Monday => Weekday::Tuesday,
            Weekday::Tuesday => Weekday::Wednesday,
            Weekday::Wednesday => Weekday::Thursday,
            Weekday::Thursday => Weekday::Sunday,
        }
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> u8 {
        day as u8
    }
}

impl TryFrom<u8> for Weekday {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Weekday::Sunday),
            2 => Ok(Weekday::Monday),
            3 => Ok(Weekday::Tuesday),
            4 => Ok(Weekday::Wednesday),
            5 => Ok(Weekday::Thursday),
            other => Err(format!("invalid weekday {}, expected 1-5", other)),
        }
    }
}

/// Whether a plan is in effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    Active,
    Inactive,
}

/// How a plan assigns meals to days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    /// A fixed 5-day pattern repeated every week of the plan range
    Weekly,

    /// One meal per explicit calendar date inside the plan range
    Monthly,
}

/// The metadata of a plan under edit
///
/// Owns the plan's date range: `end_date` is never before `start_date`,
/// and monthly assignments are range-checked against it when the plan is
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDraft {
    pub school_id: Option<SchoolId>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: PlanStatus,
    pub plan_type: PlanType,
}

impl PlanDraft {
    /// Create a plan draft, validating the date range
    pub fn new(
        school_id: Option<SchoolId>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: PlanStatus,
        plan_type: PlanType,
    ) -> Result<Self, Error> {
        if end_date < start_date {
            return Err(Error::validation(format!(
                "plan end date {} is before start date {}",
                end_date, start_date
            )));
        }

        Ok(Self {
            school_id,
            start_date,
            end_date,
            status,
            plan_type,
        })
    }

    /// Whether a date lies inside the plan's range
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// One fully specified meal-to-date assignment of a monthly plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateAssignment {
    pub meal_id: MealId,
    pub meal_date: NaiveDate,
}

/// One persisted meal entry of a plan, with its price resolved for the
/// school
///
/// Weekly entries carry `day_of_week` and `order`; monthly entries carry
/// `meal_date`. `school_price` is the active override if the school has
/// one, `price` is what the school is actually charged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMealPlanEntry {
    pub meal_id: MealId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<Weekday>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<MealCategory>,

    pub price: Decimal,

    pub base_price: Decimal,

    pub school_price: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// The payload persisted for a new or updated meal plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSubmission {
    pub school_id: SchoolId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: PlanStatus,
    pub meals: Vec<ResolvedMealPlanEntry>,

    /// Monthly plans only: the assignments to persist through
    /// `assign_meals_to_dates` once the plan id is known. Not part of the
    /// plan payload itself.
    #[serde(skip)]
    pub date_assignments: Option<Vec<DateAssignment>>,
}

/// The identity assigned to a newly persisted plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedPlan {
    pub id: PlanId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_wraps_thursday_to_sunday() {
        assert_eq!(Weekday::Sunday.next(), Weekday::Monday);
        assert_eq!(Weekday::Thursday.next(), Weekday::Sunday);
    }

    #[test]
    fn weekday_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Weekday::Sunday).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Weekday::Thursday).unwrap(), "5");

        let day: Weekday = serde_json::from_str("3").unwrap();
        assert_eq!(day, Weekday::Tuesday);
        assert!(serde_json::from_str::<Weekday>("6").is_err());
    }

    #[test]
    fn draft_rejects_inverted_date_range() {
        let start = NaiveDate::from_ymd_opt(2024, 10, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();

        let err = PlanDraft::new(Some(1), start, end, PlanStatus::Active, PlanType::Weekly)
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn draft_range_is_inclusive() {
        let start = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 10, 5).unwrap();
        let draft =
            PlanDraft::new(Some(1), start, end, PlanStatus::Active, PlanType::Monthly).unwrap();

        assert!(draft.contains(start));
        assert!(draft.contains(end));
        assert!(!draft.contains(NaiveDate::from_ymd_opt(2024, 10, 6).unwrap()));
    }
}
