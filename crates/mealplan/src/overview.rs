use mealdeck_shared::{MealPlan, MealType};
use serde::Serialize;
use time::Date;

use crate::week::{WeekWindow, display_day, format_day};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayOverview {
    pub date: String,
    pub display: String,
    pub meal_count: usize,
    pub has_breakfast: bool,
    pub has_lunch: bool,
    pub has_dinner: bool,
}

impl DayOverview {
    pub fn has(&self, meal_type: MealType) -> bool {
        match meal_type {
            MealType::Breakfast => self.has_breakfast,
            MealType::Lunch => self.has_lunch,
            MealType::Dinner => self.has_dinner,
        }
    }
}

/// Summary of the planned meals for every date of the window, in window order.
pub fn weekly_overview(window: &WeekWindow, plans: &[MealPlan]) -> Vec<DayOverview> {
    window
        .dates
        .iter()
        .map(|date| {
            let meals = plans_for_day(plans, *date);
            let has = |meal_type: MealType| meals.iter().any(|m| m.meal_type == meal_type);

            DayOverview {
                date: format_day(*date),
                display: display_day(*date),
                meal_count: meals.len(),
                has_breakfast: has(MealType::Breakfast),
                has_lunch: has(MealType::Lunch),
                has_dinner: has(MealType::Dinner),
            }
        })
        .collect()
}

/// Plans on `date`, breakfast first and dinner last.
pub fn plans_for_day(plans: &[MealPlan], date: Date) -> Vec<&MealPlan> {
    let mut meals = plans
        .iter()
        .filter(|plan| plan.day() == Some(date))
        .collect::<Vec<_>>();
    meals.sort_by_key(|plan| plan.meal_type);

    meals
}
