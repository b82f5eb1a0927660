use std::collections::{BTreeMap, HashMap};

use mealdeck_shared::MealPlan;
use serde::Serialize;
use time::Date;

/// Ingredient name to "already acquired" flag. Names missing from the map
/// are unchecked.
pub type CheckedState = HashMap<String, bool>;

pub const SHARE_TITLE: &str = "🛒 Shopping List";
pub const CHECKBOX: &str = "☐";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShoppingListItem {
    pub name: String,
    pub count: u32,
    pub checked: bool,
}

/// Deduplicated ingredients of a week window, sorted by name.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShoppingList {
    items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    pub fn get(&self, name: &str) -> Option<&ShoppingListItem> {
        self.items
            .binary_search_by(|item| item.name.as_str().cmp(name))
            .ok()
            .map(|idx| &self.items[idx])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }
}

/// Splits free-form ingredient text on commas and newlines.
///
/// Tokens are trimmed and empty ones dropped, so `"Eggs,,\n Milk "` yields
/// `Eggs` then `Milk`. Case is preserved.
pub fn tokenize(text: Option<&str>) -> impl Iterator<Item = &str> {
    text.into_iter()
        .flat_map(|text| text.split([',', '\n']))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Plans whose date falls inside `window_dates`. Plans with a date that
/// does not parse are left out.
pub fn plans_in_window<'a>(
    plans: &'a [MealPlan],
    window_dates: &'a [Date],
) -> impl Iterator<Item = &'a MealPlan> {
    plans.iter().filter(|plan| match plan.day() {
        Some(day) => window_dates.contains(&day),
        None => {
            tracing::warn!(
                user_id = %plan.user_id,
                date = %plan.date,
                meal_type = %plan.meal_type,
                "skipping meal plan with malformed date"
            );
            false
        }
    })
}

pub fn build_shopping_list(
    plans: &[MealPlan],
    window_dates: &[Date],
    checked: &CheckedState,
) -> ShoppingList {
    aggregate(plans_in_window(plans, window_dates), checked)
}

/// Counts the ingredients of plans already picked for a window.
pub fn aggregate<'a>(
    plans: impl IntoIterator<Item = &'a MealPlan>,
    checked: &CheckedState,
) -> ShoppingList {
    let mut counts = BTreeMap::<&str, u32>::new();

    for plan in plans {
        for token in tokenize(plan.ingredients()) {
            *counts.entry(token).or_default() += 1;
        }
    }

    let items = counts
        .into_iter()
        .map(|(name, count)| ShoppingListItem {
            name: name.to_owned(),
            count,
            checked: checked.get(name).copied().unwrap_or_default(),
        })
        .collect();

    ShoppingList { items }
}

/// Flips one item. Unknown names give back the inputs unchanged.
pub fn toggle_checked(
    list: &ShoppingList,
    checked: &CheckedState,
    name: &str,
) -> (ShoppingList, CheckedState) {
    let mut list = list.clone();
    let mut checked = checked.clone();

    if let Some(item) = list.items.iter_mut().find(|item| item.name == name) {
        item.checked = !item.checked;
        checked.insert(item.name.to_owned(), item.checked);
    }

    (list, checked)
}

/// Unchecks every item and removes their keys from the checked state.
pub fn clear_checked(list: &ShoppingList, checked: &CheckedState) -> (ShoppingList, CheckedState) {
    let mut list = list.clone();
    let mut checked = checked.clone();

    for item in list.items.iter_mut() {
        item.checked = false;
        checked.remove(&item.name);
    }

    (list, checked)
}

pub fn serialize_for_sharing(list: &ShoppingList) -> String {
    let mut text = format!("{SHARE_TITLE}\n\n");

    for item in list.items() {
        if item.count > 1 {
            text.push_str(&format!("{CHECKBOX} {} (×{})\n", item.name, item.count));
        } else {
            text.push_str(&format!("{CHECKBOX} {}\n", item.name));
        }
    }

    text
}
