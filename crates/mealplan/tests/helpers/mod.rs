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

#[allow(dead_code)]
pub fn input(
    date: impl Into<String>,
    meal_type: MealType,
    title: impl Into<String>,
    ingredients: Option<&str>,
) -> AssignInput {
    AssignInput {
        date: date.into(),
        meal_type,
        title: title.into(),
        description: "my description".to_owned(),
        ingredients: ingredients.map(ToOwned::to_owned),
        prep_time: Some("20 min".to_owned()),
        servings: Some("2".to_owned()),
        ..Default::default()
    }
}
