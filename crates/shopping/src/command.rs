use mealdeck_mealplan::{MealPlanSource, WeekWindow};

use crate::{
    CheckedState, CheckedStore, ShoppingList, aggregate, clear_checked, plans_in_window,
    serialize_for_sharing, toggle_checked,
};

const NO_MEALS_PLANNED: &str = "No meals planned for this week";
const NO_INGREDIENTS: &str = "No ingredients found in planned meals";

/// Outcome of building the list for a window.
#[derive(Clone, Debug, PartialEq)]
pub enum Generated {
    NoMealsPlanned,
    NoIngredients,
    List(ShoppingList),
}

impl Generated {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Generated::NoMealsPlanned => Some(NO_MEALS_PLANNED),
            Generated::NoIngredients => Some(NO_INGREDIENTS),
            Generated::List(_) => None,
        }
    }

    /// The list, empty when nothing could be generated.
    pub fn into_list(self) -> ShoppingList {
        match self {
            Generated::List(list) => list,
            _ => ShoppingList::default(),
        }
    }

    pub fn share(&self) -> Shared {
        match self {
            Generated::NoMealsPlanned => Shared::Nothing(NO_MEALS_PLANNED),
            Generated::NoIngredients => Shared::Nothing(NO_INGREDIENTS),
            Generated::List(list) => Shared::Text(serialize_for_sharing(list)),
        }
    }
}

/// Text to hand to another app, or the reason there is none.
#[derive(Clone, Debug, PartialEq)]
pub enum Shared {
    Text(String),
    Nothing(&'static str),
}

impl Shared {
    pub fn text(&self) -> Option<&str> {
        match self {
            Shared::Text(text) => Some(text),
            Shared::Nothing(_) => None,
        }
    }
}

pub struct Command<S, C> {
    source: S,
    store: C,
}

impl<S: MealPlanSource, C: CheckedStore> Command<S, C> {
    pub fn new(source: S, store: C) -> Self {
        Self { source, store }
    }

    pub fn store(&self) -> &C {
        &self.store
    }

    pub async fn generate(
        &self,
        user_id: impl Into<String>,
        window: &WeekWindow,
    ) -> mealdeck_shared::Result<Generated> {
        let user_id = user_id.into();
        let (generated, _) = self.build(&user_id, window).await?;

        Ok(generated)
    }

    /// Flips `name` and persists the new flag. Names outside the list are
    /// left alone.
    pub async fn toggle(
        &self,
        user_id: impl Into<String>,
        window: &WeekWindow,
        name: impl AsRef<str>,
    ) -> mealdeck_shared::Result<ShoppingList> {
        let user_id = user_id.into();
        let name = name.as_ref();
        let (generated, checked) = self.build(&user_id, window).await?;

        let (list, checked) = toggle_checked(&generated.into_list(), &checked, name);

        if list.get(name).is_none() {
            tracing::debug!(user_id = %user_id, name, "toggle on unknown ingredient");

            return Ok(list);
        }

        let value = checked.get(name).copied().unwrap_or_default();
        self.store.set(&user_id, name, value).await?;

        Ok(list)
    }

    /// Unchecks every item of the window and forgets their keys.
    pub async fn clear(
        &self,
        user_id: impl Into<String>,
        window: &WeekWindow,
    ) -> mealdeck_shared::Result<ShoppingList> {
        let user_id = user_id.into();
        let (generated, checked) = self.build(&user_id, window).await?;

        let (list, _) = clear_checked(&generated.into_list(), &checked);
        let names = list.names().map(ToOwned::to_owned).collect::<Vec<_>>();
        self.store.delete(&user_id, &names).await?;

        Ok(list)
    }

    pub async fn share(
        &self,
        user_id: impl Into<String>,
        window: &WeekWindow,
    ) -> mealdeck_shared::Result<Shared> {
        let generated = self.generate(user_id, window).await?;

        Ok(generated.share())
    }

    /// Loads plans and checked flags once for the whole operation.
    async fn build(
        &self,
        user_id: &str,
        window: &WeekWindow,
    ) -> mealdeck_shared::Result<(Generated, CheckedState)> {
        let plans = self.source.all(user_id).await?;
        let planned = plans_in_window(&plans, &window.dates).collect::<Vec<_>>();

        if planned.is_empty() {
            return Ok((Generated::NoMealsPlanned, CheckedState::new()));
        }

        let checked = self.store.load(user_id).await?;
        let list = aggregate(planned, &checked);

        tracing::debug!(
            user_id = %user_id,
            week = %window.label,
            items = list.len(),
            "shopping list generated"
        );

        if list.is_empty() {
            return Ok((Generated::NoIngredients, checked));
        }

        Ok((Generated::List(list), checked))
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        use crate::SqliteCheckedStore;
        use mealdeck_mealplan::Query;

        impl Command<Query, SqliteCheckedStore> {
            pub fn sqlite(state: mealdeck_shared::State) -> Self {
                let store = SqliteCheckedStore::new(&state);

                Self::new(Query(state), store)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryCheckedStore;
    use mealdeck_mealplan::{WindowShape, compute_window};
    use mealdeck_shared::{MealPlan, MealType};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use time::macros::date;

    fn plan(user_id: &str, date: &str, ingredients: &str) -> MealPlan {
        let mut plan = MealPlan {
            user_id: user_id.to_owned(),
            date: date.to_owned(),
            meal_type: MealType::Dinner,
            ..Default::default()
        };
        plan.recipe.ingredients = Some(ingredients.to_owned());
        plan
    }

    fn command(plans: Vec<MealPlan>) -> Command<Vec<MealPlan>, MemoryCheckedStore> {
        Command::new(plans, MemoryCheckedStore::new())
    }

    #[tokio::test]
    async fn test_generate_outcomes() -> anyhow::Result<()> {
        let window = compute_window(date!(2025 - 06 - 04), 0, WindowShape::Week);

        let generated = command(vec![]).generate("john", &window).await?;
        assert_eq!(generated, Generated::NoMealsPlanned);
        assert_eq!(generated.message(), Some("No meals planned for this week"));

        let generated = command(vec![plan("albert", "2025-06-02", "Eggs")])
            .generate("john", &window)
            .await?;
        assert_eq!(generated, Generated::NoMealsPlanned);

        let generated = command(vec![plan("john", "2025-06-02", " , ")])
            .generate("john", &window)
            .await?;
        assert_eq!(generated, Generated::NoIngredients);
        assert_eq!(
            generated.message(),
            Some("No ingredients found in planned meals")
        );

        let generated = command(vec![
            plan("john", "2025-06-02", "Eggs, Milk, Flour"),
            plan("john", "2025-06-03", "Eggs\nButter"),
        ])
        .generate("john", &window)
        .await?;
        assert_eq!(generated.message(), None);

        let list = generated.into_list();
        let names = list
            .items()
            .iter()
            .map(|item| (item.name.as_str(), item.count))
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![("Butter", 1), ("Eggs", 2), ("Flour", 1), ("Milk", 1)]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_checked_survives_regeneration() -> anyhow::Result<()> {
        let window = compute_window(date!(2025 - 06 - 04), 0, WindowShape::Week);
        let command = command(vec![plan("john", "2025-06-02", "Eggs, Milk")]);

        let list = command.toggle("john", &window, "Milk").await?;
        assert_eq!(list.get("Milk").map(|item| item.checked), Some(true));

        let list = command.generate("john", &window).await?.into_list();
        assert_eq!(list.checked_count(), 1);
        assert_eq!(list.get("Milk").map(|item| item.checked), Some(true));

        let list = command.toggle("john", &window, "Bread").await?;
        assert_eq!(list.checked_count(), 1);
        assert!(!command.store().load("john").await?.contains_key("Bread"));

        let list = command.clear("john", &window).await?;
        assert_eq!(list.checked_count(), 0);
        assert!(command.store().load("john").await?.is_empty());

        let list = command.generate("john", &window).await?.into_list();
        assert_eq!(list.checked_count(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_share() -> anyhow::Result<()> {
        let window = compute_window(date!(2025 - 06 - 04), 0, WindowShape::Week);
        let command = command(vec![
            plan("john", "2025-06-02", "Eggs, Milk"),
            plan("john", "2025-06-05", "Eggs"),
            plan("john", "2025-06-16", " , "),
        ]);

        let shared = command.share("john", &window).await?;
        assert_eq!(
            shared.text(),
            Some("🛒 Shopping List\n\n☐ Eggs (×2)\n☐ Milk\n")
        );

        let next = compute_window(date!(2025 - 06 - 04), 1, WindowShape::Week);
        let shared = command.share("john", &next).await?;
        assert_eq!(shared, Shared::Nothing("No meals planned for this week"));
        assert_eq!(shared.text(), None);

        let later = compute_window(date!(2025 - 06 - 04), 2, WindowShape::Week);
        let shared = command.share("john", &later).await?;
        assert_eq!(
            shared,
            Shared::Nothing("No ingredients found in planned meals")
        );

        Ok(())
    }

    #[derive(Default)]
    struct CountingStore {
        inner: MemoryCheckedStore,
        loads: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl CheckedStore for CountingStore {
        async fn load(&self, user_id: &str) -> anyhow::Result<CheckedState> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            self.inner.load(user_id).await
        }

        async fn set(&self, user_id: &str, name: &str, checked: bool) -> anyhow::Result<()> {
            self.inner.set(user_id, name, checked).await
        }

        async fn delete(&self, user_id: &str, names: &[String]) -> anyhow::Result<()> {
            self.inner.delete(user_id, names).await
        }
    }

    #[tokio::test]
    async fn test_checked_state_loaded_once_per_call() -> anyhow::Result<()> {
        let window = compute_window(date!(2025 - 06 - 04), 0, WindowShape::Week);
        let plans = vec![
            plan("john", "2025-06-02", "Eggs, Milk"),
            plan("john", "June 3rd", "Butter"),
        ];
        let command = Command::new(plans, CountingStore::default());
        let loads = || command.store().loads.load(Ordering::SeqCst);

        let list = command.toggle("john", &window, "Eggs").await?;
        assert_eq!(list.checked_count(), 1);
        assert_eq!(loads(), 1);

        let list = command.clear("john", &window).await?;
        assert_eq!(list.checked_count(), 0);
        assert_eq!(loads(), 2);

        command.share("john", &window).await?;
        assert_eq!(loads(), 3);

        let next = compute_window(date!(2025 - 06 - 04), 1, WindowShape::Week);
        command.toggle("john", &next, "Eggs").await?;
        assert_eq!(loads(), 3);

        Ok(())
    }
}
