//! Weekly slot scheduling
//!
//! A weekly plan repeats a fixed 5-day pattern: each weekday holds an
//! ordered list of meal slots. Editing is modeled as a state-transition
//! function: [`WeeklySchedule::apply`] consumes the schedule and an
//! operation and returns the next schedule, so every operation is
//! unit-testable without a UI harness.

use std::collections::BTreeMap;

use crate::catalog::{MealCategory, MealId};
use crate::plan::Weekday;

/// One slot of a weekday under edit
///
/// Category and meal are filled in independently while the operator works;
/// a slot missing either is in-progress and never persisted. `order` is
/// 1-based and dense within the day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySlot {
    pub category: Option<MealCategory>,
    pub meal_id: Option<MealId>,
    pub order: u32,
}

/// An edit operation on a weekly schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotOp {
    /// Append an empty slot to a day
    Add { day: Weekday },

    /// Remove the slot at `index`; later slots close the gap
    Remove { day: Weekday, index: usize },

    /// Set the slot's category, clearing any selected meal
    ///
    /// A meal belongs to exactly one category, so a meal picked under the
    /// previous category would be stale.
    SetCategory {
        day: Weekday,
        index: usize,
        category: MealCategory,
    },

    /// Set the slot's meal
    SetMeal {
        day: Weekday,
        index: usize,
        meal_id: MealId,
    },

    /// Swap the slot with its predecessor; no-op at the top
    MoveUp { day: Weekday, index: usize },

    /// Swap the slot with its successor; no-op at the bottom
    MoveDown { day: Weekday, index: usize },

    /// Copy the slot's category and meal to the end of the next day,
    /// Thursday wrapping to Sunday
    DuplicateToNextDay { day: Weekday, index: usize },

    /// Move a slot to a new position, possibly on another day
    Drag {
        from_day: Weekday,
        from_index: usize,
        to_day: Weekday,
        to_index: usize,
    },

    /// Remove every slot of a day
    ClearDay { day: Weekday },
}

/// The slot lists of one weekly plan under edit
///
/// Invariant: after every [`apply`](Self::apply), each day's `order`
/// values are exactly `1..=len` in list position order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: BTreeMap<Weekday, Vec<WeeklySlot>>,
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl WeeklySchedule {
    /// Create an empty schedule covering all five weekdays
    pub fn new() -> Self {
        let days = Weekday::ALL.iter().map(|&day| (day, Vec::new())).collect();
        Self { days }
    }

    /// The slots of a day, in order
    pub fn slots(&self, day: Weekday) -> &[WeeklySlot] {
        self.days.get(&day).map_or(&[], Vec::as_slice)
    }

    /// Whether no day holds any slot
    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }

    /// Apply one edit operation, returning the next schedule state
    ///
    /// `apply` is total: an operation whose index is out of range, or a
    /// drag to the slot's own position, returns the state unchanged. An
    /// edit is either fully applied or not applied at all.
    pub fn apply(mut self, op: SlotOp) -> Self {
        match op {
            SlotOp::Add { day } => {
                let slots = self.day_mut(day);
                let order = slots.len() as u32 + 1;
                slots.push(WeeklySlot {
                    category: None,
                    meal_id: None,
                    order,
                });
            }
            SlotOp::Remove { day, index } => {
                let slots = self.day_mut(day);
                if index < slots.len() {
                    slots.remove(index);
                    renumber(slots);
                }
            }
            SlotOp::SetCategory {
                day,
                index,
                category,
            } => {
                if let Some(slot) = self.day_mut(day).get_mut(index) {
                    slot.category = Some(category);
                    slot.meal_id = None;
                }
            }
            SlotOp::SetMeal {
                day,
                index,
                meal_id,
            } => {
                if let Some(slot) = self.day_mut(day).get_mut(index) {
                    slot.meal_id = Some(meal_id);
                }
            }
            SlotOp::MoveUp { day, index } => {
                let slots = self.day_mut(day);
                if index > 0 && index < slots.len() {
                    slots.swap(index - 1, index);
                    renumber(slots);
                }
            }
            SlotOp::MoveDown { day, index } => {
                let slots = self.day_mut(day);
                if index + 1 < slots.len() {
                    slots.swap(index, index + 1);
                    renumber(slots);
                }
            }
            SlotOp::DuplicateToNextDay { day, index } => {
                let copy = self
                    .slots(day)
                    .get(index)
                    .map(|slot| (slot.category, slot.meal_id));
                if let Some((category, meal_id)) = copy {
                    let target = self.day_mut(day.next());
                    let order = target.len() as u32 + 1;
                    target.push(WeeklySlot {
                        category,
                        meal_id,
                        order,
                    });
                }
            }
            SlotOp::Drag {
                from_day,
                from_index,
                to_day,
                to_index,
            } => {
                if from_day == to_day && from_index == to_index {
                    return self;
                }
                if from_index >= self.slots(from_day).len() {
                    return self;
                }

                let slot = self.day_mut(from_day).remove(from_index);
                renumber(self.day_mut(from_day));

                let target = self.day_mut(to_day);
                let insert_at = to_index.min(target.len());
                target.insert(insert_at, slot);
                renumber(target);
            }
            SlotOp::ClearDay { day } => {
                self.day_mut(day).clear();
            }
        }

        self
    }

    fn day_mut(&mut self, day: Weekday) -> &mut Vec<WeeklySlot> {
        self.days.entry(day).or_default()
    }
}

/// Restore the dense 1..=len order after a structural change
fn renumber(slots: &mut [WeeklySlot]) {
    for (position, slot) in slots.iter_mut().enumerate() {
        slot.order = position as u32 + 1;
    }
}
