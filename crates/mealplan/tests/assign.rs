use mealdeck_mealplan::{Command, MealPlanSource, Query};
use mealdeck_shared::MealType;
use temp_dir::TempDir;
use time::macros::date;

mod helpers;

#[tokio::test]
async fn test_assign() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = Command::new(state.clone());
    let query = Query(state);

    let input = helpers::input(
        "2025-06-02",
        MealType::Dinner,
        "  Omelette ",
        Some("Eggs, Milk"),
    );
    let plan = command.assign(input, "john").await?;

    assert_eq!(plan.recipe.title, "Omelette");

    let found = query
        .find(date!(2025 - 06 - 02), MealType::Dinner, "john")
        .await?
        .unwrap();

    assert_eq!(found, plan);
    assert_eq!(found.ingredients(), Some("Eggs, Milk"));
    assert_eq!(found.recipe.servings.as_deref(), Some("2"));

    Ok(())
}

#[tokio::test]
async fn test_assign_replaces_same_slot() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = Command::new(state.clone());
    let query = Query(state);

    command
        .assign(
            helpers::input("2025-06-02", MealType::Lunch, "Salad", Some("Lettuce")),
            "john",
        )
        .await?;
    command
        .assign(
            helpers::input("2025-06-02", MealType::Lunch, "Soup", Some("Leek")),
            "john",
        )
        .await?;
    command
        .assign(
            helpers::input("2025-06-02", MealType::Lunch, "Pasta", None),
            "albert",
        )
        .await?;

    let plans = query.all("john").await?;
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].recipe.title, "Soup");
    assert_eq!(plans[0].ingredients(), Some("Leek"));

    let plans = query.all("albert").await?;
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].ingredients(), None);

    Ok(())
}

#[tokio::test]
async fn test_assign_rejects_invalid_input() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = Command::new(state.clone());

    let err = command
        .assign(
            helpers::input("2025-6-2", MealType::Lunch, "Salad", None),
            "john",
        )
        .await
        .unwrap_err();
    assert!(matches!(err, mealdeck_shared::Error::Validate(_)));

    let err = command
        .assign(
            helpers::input("2025-06-02", MealType::Lunch, "   ", None),
            "john",
        )
        .await
        .unwrap_err();
    assert!(matches!(err, mealdeck_shared::Error::Validate(_)));

    assert!(Query(state).all("john").await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_remove() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = Command::new(state.clone());
    let query = Query(state);

    command
        .assign(
            helpers::input("2025-06-02", MealType::Breakfast, "Toast", Some("Bread")),
            "john",
        )
        .await?;
    command
        .assign(
            helpers::input("2025-06-02", MealType::Dinner, "Curry", Some("Rice")),
            "john",
        )
        .await?;

    let day = date!(2025 - 06 - 02);
    assert!(command.remove(day, MealType::Breakfast, "john").await?);
    assert!(!command.remove(day, MealType::Breakfast, "john").await?);
    assert!(!command.remove(day, MealType::Dinner, "albert").await?);

    let plans = query.all("john").await?;
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].meal_type, MealType::Dinner);

    Ok(())
}

#[tokio::test]
async fn test_for_day_and_source() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = Command::new(state.clone());
    let query = Query(state.clone());

    for (date, meal_type, title) in [
        ("2025-06-02", MealType::Dinner, "Curry"),
        ("2025-06-02", MealType::Breakfast, "Toast"),
        ("2025-06-02", MealType::Lunch, "Wrap"),
        ("2025-06-03", MealType::Lunch, "Salad"),
    ] {
        command
            .assign(helpers::input(date, meal_type, title, None), "john")
            .await?;
    }

    sqlx::query(
        "INSERT INTO meal_plan (user_id, date, meal_type, title, description, created_at) VALUES ('john', '2025-06-02', 'Brunch', 'Mimosa', '', 0)",
    )
    .execute(&state.write_db)
    .await?;

    let titles = query
        .for_day(date!(2025 - 06 - 02), "john")
        .await?
        .into_iter()
        .map(|p| p.recipe.title)
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["Toast", "Wrap", "Curry"]);

    let source: &dyn MealPlanSource = &query;
    let plans = source.all("john").await?;
    assert_eq!(plans.len(), 4);
    assert_eq!(plans[0].date, "2025-06-03");

    Ok(())
}
