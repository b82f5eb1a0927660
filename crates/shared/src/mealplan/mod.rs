use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// Calendar day format used for meal plan keys, e.g. `2025-06-02`.
pub const DAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum MealType {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
}

/// Copy of the recipe taken when it was assigned to a slot.
///
/// Later edits or deletion of the recipe never reach an existing meal plan.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipeSnapshot {
    pub title: String,
    pub description: String,
    pub image_reference: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub prep_time: Option<String>,
    pub servings: Option<String>,
}

#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub user_id: String,
    pub date: String,
    pub meal_type: MealType,
    pub recipe: RecipeSnapshot,
}

impl MealPlan {
    /// Parsed calendar day, `None` when the stored date is malformed.
    pub fn day(&self) -> Option<Date> {
        Date::parse(self.date.trim(), DAY_FORMAT).ok()
    }

    pub fn ingredients(&self) -> Option<&str> {
        self.recipe.ingredients.as_deref()
    }
}
