//! Monthly date assignment
//!
//! A monthly plan assigns at most one meal per explicit calendar date.
//! Like the weekly scheduler, editing is a state-transition function:
//! [`MonthlyAssignments::apply`] consumes the state and an operation and
//! returns the next state. Dates are kept sorted; range validation against
//! the plan's start/end belongs to the plan builder, not this component.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::catalog::MealId;
use crate::plan::DateAssignment;

/// An edit operation on a monthly plan's date assignments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOp {
    /// Open a date for assignment, with no meal selected yet; no-op when
    /// the date is already present
    AddDate { date: NaiveDate },

    /// Drop a date and whatever was assigned to it
    RemoveDate { date: NaiveDate },

    /// Select the meal for an already-opened date; no-op otherwise
    SetMeal { date: NaiveDate, meal_id: MealId },
}

/// The date-to-meal assignments of one monthly plan under edit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyAssignments {
    entries: BTreeMap<NaiveDate, Option<MealId>>,
}

impl MonthlyAssignments {
    /// Create an empty assignment set
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one edit operation, returning the next state
    pub fn apply(mut self, op: DateOp) -> Self {
        match op {
            DateOp::AddDate { date } => {
                self.entries.entry(date).or_insert(None);
            }
            DateOp::RemoveDate { date } => {
                self.entries.remove(&date);
            }
            DateOp::SetMeal { date, meal_id } => {
                if let Some(entry) = self.entries.get_mut(&date) {
                    *entry = Some(meal_id);
                }
            }
        }

        self
    }

    /// The meal assigned to a date, if the date is open and a meal is set
    pub fn meal_for(&self, date: NaiveDate) -> Option<MealId> {
        self.entries.get(&date).copied().flatten()
    }

    /// All opened dates in calendar order, assigned or not
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.entries.keys().copied()
    }

    /// Whether no date has been opened
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The fully specified assignments, in calendar order
    ///
    /// Dates without a selected meal are still in progress and are left
    /// out.
    pub fn to_submission(&self) -> Vec<DateAssignment> {
        self.entries
            .iter()
            .filter_map(|(&meal_date, &meal_id)| {
                meal_id.map(|meal_id| DateAssignment { meal_id, meal_date })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, day).unwrap()
    }

    #[test]
    fn assignment_flow_produces_only_complete_entries() {
        let assignments = MonthlyAssignments::new()
            .apply(DateOp::AddDate { date: date(3) })
            .apply(DateOp::SetMeal {
                date: date(3),
                meal_id: 2,
            });

        assert_eq!(
            assignments.to_submission(),
            vec![DateAssignment {
                meal_id: 2,
                meal_date: date(3),
            }]
        );
    }

    #[test]
    fn unassigned_dates_are_filtered_from_submission() {
        let assignments = MonthlyAssignments::new()
            .apply(DateOp::AddDate { date: date(1) })
            .apply(DateOp::AddDate { date: date(2) })
            .apply(DateOp::SetMeal {
                date: date(2),
                meal_id: 9,
            });

        let submission = assignments.to_submission();
        assert_eq!(submission.len(), 1);
        assert_eq!(submission[0].meal_date, date(2));
        assert!(submission.iter().all(|a| a.meal_id != 0));
    }

    #[test]
    fn adding_an_existing_date_keeps_its_meal() {
        let assignments = MonthlyAssignments::new()
            .apply(DateOp::AddDate { date: date(3) })
            .apply(DateOp::SetMeal {
                date: date(3),
                meal_id: 2,
            })
            .apply(DateOp::AddDate { date: date(3) });

        assert_eq!(assignments.meal_for(date(3)), Some(2));
    }

    #[test]
    fn set_meal_on_an_unopened_date_is_a_no_op() {
        let before = MonthlyAssignments::new().apply(DateOp::AddDate { date: date(1) });
        let after = before.clone().apply(DateOp::SetMeal {
            date: date(2),
            meal_id: 5,
        });

        assert_eq!(before, after);
    }

    #[test]
    fn remove_date_drops_the_assignment() {
        let assignments = MonthlyAssignments::new()
            .apply(DateOp::AddDate { date: date(3) })
            .apply(DateOp::SetMeal {
                date: date(3),
                meal_id: 2,
            })
            .apply(DateOp::RemoveDate { date: date(3) });

        assert!(assignments.is_empty());
        assert!(assignments.to_submission().is_empty());
    }

    #[test]
    fn submission_is_in_calendar_order() {
        let assignments = MonthlyAssignments::new()
            .apply(DateOp::AddDate { date: date(20) })
            .apply(DateOp::SetMeal {
                date: date(20),
                meal_id: 1,
            })
            .apply(DateOp::AddDate { date: date(5) })
            .apply(DateOp::SetMeal {
                date: date(5),
                meal_id: 2,
            });

        let dates: Vec<_> = assignments
            .to_submission()
            .into_iter()
            .map(|a| a.meal_date)
            .collect();
        assert_eq!(dates, vec![date(5), date(20)]);
    }
}
