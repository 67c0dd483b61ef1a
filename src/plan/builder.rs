//! Building the persisted plan payload
//!
//! The builder is the pure transform from in-memory editing state to the
//! submission shape: it flattens the schedule, resolves each meal's price
//! for the school, and validates what the editing components deliberately
//! do not (school identity, non-emptiness, monthly date range).

use std::collections::HashMap;

use crate::catalog::{Meal, MealId};
use crate::error::Error;
use crate::plan::monthly::MonthlyAssignments;
use crate::plan::weekly::WeeklySchedule;
use crate::plan::{
    PlanDraft, PlanSubmission, PlanType, ResolvedMealPlanEntry, Weekday,
};
use crate::pricing::{resolve_price, school_price, SchoolMealOverride};

/// Build the submission payload for a weekly plan
///
/// Slots missing a category or meal are in-progress edits and are dropped
/// without error. A plan with no school or no complete slot at all is
/// invalid.
pub fn build_weekly(
    draft: &PlanDraft,
    schedule: &WeeklySchedule,
    catalog: &[Meal],
    overrides: &[SchoolMealOverride],
) -> Result<PlanSubmission, Error> {
    if draft.plan_type != PlanType::Weekly {
        return Err(Error::validation("plan draft is not a weekly plan"));
    }
    let school_id = require_school(draft)?;
    let meals_by_id = index_catalog(catalog);

    let mut entries = Vec::new();
    for day in Weekday::ALL {
        for slot in schedule.slots(day) {
            let (Some(category), Some(meal_id)) = (slot.category, slot.meal_id) else {
                continue;
            };
            let Some(meal) = meals_by_id.get(&meal_id) else {
                tracing::warn!(meal_id, "slot references a meal missing from the catalog");
                continue;
            };

            entries.push(ResolvedMealPlanEntry {
                meal_id,
                day_of_week: Some(day),
                meal_date: None,
                category: Some(category),
                price: resolve_price(meal, overrides).round_dp(2),
                base_price: meal.base_price,
                school_price: school_price(meal_id, overrides),
                order: Some(slot.order),
            });
        }
    }

    if entries.is_empty() {
        return Err(Error::validation("meal plan has no complete meal entries"));
    }

    Ok(PlanSubmission {
        school_id,
        start_date: draft.start_date,
        end_date: draft.end_date,
        is_active: draft.status,
        meals: entries,
        date_assignments: None,
    })
}

/// Build the submission payload for a monthly plan
///
/// Only fully specified date assignments are submitted. Every assignment
/// must fall inside the draft's date range. The returned submission
/// carries the assignments for the follow-up `assign_meals_to_dates` call
/// once the plan id is known.
pub fn build_monthly(
    draft: &PlanDraft,
    assignments: &MonthlyAssignments,
    catalog: &[Meal],
    overrides: &[SchoolMealOverride],
) -> Result<PlanSubmission, Error> {
    if draft.plan_type != PlanType::Monthly {
        return Err(Error::validation("plan draft is not a monthly plan"));
    }
    let school_id = require_school(draft)?;
    let meals_by_id = index_catalog(catalog);

    let mut entries = Vec::new();
    let mut kept = Vec::new();
    for assignment in assignments.to_submission() {
        if !draft.contains(assignment.meal_date) {
            return Err(Error::validation(format!(
                "meal date {} is outside the plan range {}..{}",
                assignment.meal_date, draft.start_date, draft.end_date
            )));
        }
        let Some(meal) = meals_by_id.get(&assignment.meal_id) else {
            tracing::warn!(
                meal_id = assignment.meal_id,
                "assignment references a meal missing from the catalog"
            );
            continue;
        };

        entries.push(ResolvedMealPlanEntry {
            meal_id: assignment.meal_id,
            day_of_week: None,
            meal_date: Some(assignment.meal_date),
            category: Some(meal.category),
            price: resolve_price(meal, overrides).round_dp(2),
            base_price: meal.base_price,
            school_price: school_price(assignment.meal_id, overrides),
            order: None,
        });
        kept.push(assignment);
    }

    if entries.is_empty() {
        return Err(Error::validation("meal plan has no complete meal entries"));
    }

    Ok(PlanSubmission {
        school_id,
        start_date: draft.start_date,
        end_date: draft.end_date,
        is_active: draft.status,
        meals: entries,
        date_assignments: Some(kept),
    })
}

fn require_school(draft: &PlanDraft) -> Result<crate::catalog::SchoolId, Error> {
    draft
        .school_id
        .ok_or_else(|| Error::validation("meal plan has no school"))
}

fn index_catalog(catalog: &[Meal]) -> HashMap<MealId, &Meal> {
    catalog.iter().map(|meal| (meal.id, meal)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MealCategory;
    use crate::plan::monthly::DateOp;
    use crate::plan::weekly::SlotOp;
    use crate::plan::PlanStatus;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn meal(id: MealId, category: MealCategory, base: rust_decimal::Decimal) -> Meal {
        Meal {
            id,
            name: format!("meal-{}", id),
            category,
            base_price: base,
        }
    }

    fn draft(plan_type: PlanType) -> PlanDraft {
        PlanDraft::new(
            Some(42),
            NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 10, 31).unwrap(),
            PlanStatus::Active,
            plan_type,
        )
        .unwrap()
    }

    fn catalog() -> Vec<Meal> {
        vec![
            meal(1, MealCategory::HotMeal, dec!(12.00)),
            meal(2, MealCategory::Sandwich, dec!(8.00)),
        ]
    }

    fn override_row(meal_id: MealId, price: rust_decimal::Decimal) -> SchoolMealOverride {
        SchoolMealOverride {
            school_id: 42,
            meal_id,
            override_price: price,
            is_active: true,
        }
    }

    #[test]
    fn weekly_drops_incomplete_slots_and_keeps_complete_ones() {
        let day = Weekday::Sunday;
        let schedule = WeeklySchedule::new()
            .apply(SlotOp::Add { day })
            .apply(SlotOp::SetCategory {
                day,
                index: 0,
                category: MealCategory::HotMeal,
            })
            .apply(SlotOp::SetMeal {
                day,
                index: 0,
                meal_id: 1,
            })
            // category chosen, meal still pending
            .apply(SlotOp::Add { day })
            .apply(SlotOp::SetCategory {
                day,
                index: 1,
                category: MealCategory::Sandwich,
            })
            // completely empty slot
            .apply(SlotOp::Add { day });

        let submission = build_weekly(&draft(PlanType::Weekly), &schedule, &catalog(), &[]).unwrap();

        assert_eq!(submission.meals.len(), 1);
        let entry = &submission.meals[0];
        assert_eq!(entry.meal_id, 1);
        assert_eq!(entry.day_of_week, Some(Weekday::Sunday));
        assert_eq!(entry.order, Some(1));
        assert_eq!(entry.price, dec!(12.00));
        assert_eq!(entry.school_price, None);
    }

    #[test]
    fn weekly_resolves_school_override_prices() {
        let day = Weekday::Tuesday;
        let schedule = WeeklySchedule::new()
            .apply(SlotOp::Add { day })
            .apply(SlotOp::SetCategory {
                day,
                index: 0,
                category: MealCategory::HotMeal,
            })
            .apply(SlotOp::SetMeal {
                day,
                index: 0,
                meal_id: 1,
            });
        let overrides = vec![override_row(1, dec!(15.00))];

        let submission =
            build_weekly(&draft(PlanType::Weekly), &schedule, &catalog(), &overrides).unwrap();

        let entry = &submission.meals[0];
        assert_eq!(entry.price, dec!(15.00));
        assert_eq!(entry.base_price, dec!(12.00));
        assert_eq!(entry.school_price, Some(dec!(15.00)));
    }

    #[test]
    fn weekly_with_zero_complete_entries_is_an_error() {
        let schedule = WeeklySchedule::new().apply(SlotOp::Add {
            day: Weekday::Sunday,
        });

        let err =
            build_weekly(&draft(PlanType::Weekly), &schedule, &catalog(), &[]).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn missing_school_is_an_error() {
        let mut no_school = draft(PlanType::Weekly);
        no_school.school_id = None;

        let day = Weekday::Sunday;
        let schedule = WeeklySchedule::new()
            .apply(SlotOp::Add { day })
            .apply(SlotOp::SetCategory {
                day,
                index: 0,
                category: MealCategory::HotMeal,
            })
            .apply(SlotOp::SetMeal {
                day,
                index: 0,
                meal_id: 1,
            });

        let err = build_weekly(&no_school, &schedule, &catalog(), &[]).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn plan_type_mismatch_is_an_error() {
        let schedule = WeeklySchedule::new();
        let err =
            build_weekly(&draft(PlanType::Monthly), &schedule, &catalog(), &[]).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn monthly_builds_entries_and_follow_up_assignments() {
        let date = NaiveDate::from_ymd_opt(2024, 10, 3).unwrap();
        let assignments = MonthlyAssignments::new()
            .apply(DateOp::AddDate { date })
            .apply(DateOp::SetMeal { date, meal_id: 2 })
            // opened but never assigned, must not be submitted
            .apply(DateOp::AddDate {
                date: NaiveDate::from_ymd_opt(2024, 10, 4).unwrap(),
            });

        let submission =
            build_monthly(&draft(PlanType::Monthly), &assignments, &catalog(), &[]).unwrap();

        assert_eq!(submission.meals.len(), 1);
        let entry = &submission.meals[0];
        assert_eq!(entry.meal_id, 2);
        assert_eq!(entry.meal_date, Some(date));
        assert_eq!(entry.day_of_week, None);
        assert_eq!(entry.order, None);
        assert_eq!(entry.category, Some(MealCategory::Sandwich));

        assert_eq!(
            submission.date_assignments,
            Some(vec![crate::plan::DateAssignment {
                meal_id: 2,
                meal_date: date,
            }])
        );
    }

    #[test]
    fn monthly_date_outside_plan_range_is_an_error() {
        let outside = NaiveDate::from_ymd_opt(2024, 11, 2).unwrap();
        let assignments = MonthlyAssignments::new()
            .apply(DateOp::AddDate { date: outside })
            .apply(DateOp::SetMeal {
                date: outside,
                meal_id: 1,
            });

        let err =
            build_monthly(&draft(PlanType::Monthly), &assignments, &catalog(), &[]).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn monthly_with_no_assignments_is_an_error() {
        let err = build_monthly(
            &draft(PlanType::Monthly),
            &MonthlyAssignments::new(),
            &catalog(),
            &[],
        )
        .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
