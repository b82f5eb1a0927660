use std::{path::PathBuf, str::FromStr};

use mealdeck_recipe::RecipeInput;
use mealdeck_shared::State;
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

pub fn input(title: impl Into<String>, ingredients: &str) -> RecipeInput {
    RecipeInput {
        title: title.into(),
        description: "my description".to_owned(),
        ingredients: Some(ingredients.to_owned()),
        instructions: Some("Mix and cook".to_owned()),
        prep_time: Some("15 min".to_owned()),
        servings: Some("2".to_owned()),
        ..Default::default()
    }
}
