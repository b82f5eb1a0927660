use std::{path::PathBuf, str::FromStr};

use mealdeck_mealplan::AssignInput;
use mealdeck_shared::{MealType, State};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    mealdeck_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(State::single(pool))
}

/// Plans one meal per `(date, meal type, ingredients)` entry.
pub async fn assign(
    state: &State,
    user_id: &str,
    meals: &[(&str, MealType, &str)],
) -> anyhow::Result<()> {
    let command = mealdeck_mealplan::Command::new(state.clone());

    for &(date, meal_type, ingredients) in meals {
        let input = AssignInput {
            date: date.to_owned(),
            meal_type,
            title: format!("{meal_type} of {date}"),
            ingredients: Some(ingredients.to_owned()),
            ..Default::default()
        };

        command.assign(input, user_id).await?;
    }

    Ok(())
}
