use mealdeck_mealplan::{
    AssignInput, Query, WindowShape, compute_window, select_date, weekly_overview,
};
use mealdeck_shared::MealType;
use mealdeck_shopping::{Generated, Shared};
use temp_dir::TempDir;
use time::macros::date;

mod helpers;

fn input(date: &str, meal_type: MealType, title: &str, ingredients: &str) -> AssignInput {
    AssignInput {
        date: date.to_owned(),
        meal_type,
        title: title.to_owned(),
        ingredients: Some(ingredients.to_owned()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_plan_week_and_shop() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = helpers::config(&dir.child("mealdeck.sqlite3"));

    mealdeck::migrate::migrate(&config).await?;

    let state =
        mealdeck::db::create_state(&config.database.url, config.database.max_connections).await?;
    let plans = mealdeck_mealplan::Command::new(state.clone());
    let shopping = mealdeck_shopping::Command::sqlite(state.clone());
    let window = compute_window(date!(2025 - 06 - 05), 0, WindowShape::Week);

    assert_eq!(
        shopping.generate(&config.user.id, &window).await?,
        Generated::NoMealsPlanned
    );

    plans
        .assign(
            input(
                "2025-06-02",
                MealType::Breakfast,
                "Pancakes",
                "Eggs, Milk, Flour",
            ),
            &config.user.id,
        )
        .await?;
    plans
        .assign(
            input("2025-06-03", MealType::Dinner, "Quiche", "Eggs\nButter"),
            &config.user.id,
        )
        .await?;

    let all = Query(state.clone()).all(&config.user.id).await?;
    let overview = weekly_overview(&window, &all);
    assert_eq!(overview.len(), 7);
    assert_eq!(overview[0].display, "Jun 2");
    assert!(overview[0].has_breakfast);
    assert!(overview[1].has_dinner);
    assert_eq!(overview[2].meal_count, 0);
    assert_eq!(select_date(&window, date!(2025 - 06 - 03)), Some(1));

    shopping.toggle(&config.user.id, &window, "Eggs").await?;

    let list = shopping
        .generate(&config.user.id, &window)
        .await?
        .into_list();
    let items = list
        .items()
        .iter()
        .map(|item| (item.name.as_str(), item.count, item.checked))
        .collect::<Vec<_>>();
    assert_eq!(
        items,
        vec![
            ("Butter", 1, false),
            ("Eggs", 2, true),
            ("Flour", 1, false),
            ("Milk", 1, false),
        ]
    );

    let next = compute_window(date!(2025 - 06 - 05), 1, WindowShape::Week);
    let shared = shopping.share(&config.user.id, &next).await?;
    assert_eq!(shared, Shared::Nothing("No meals planned for this week"));

    Ok(())
}

#[tokio::test]
async fn test_reset_drops_data() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = helpers::config(&dir.child("mealdeck.sqlite3"));

    mealdeck::migrate::migrate(&config).await?;

    {
        let state = mealdeck::db::create_state(&config.database.url, 1).await?;
        mealdeck_mealplan::Command::new(state.clone())
            .assign(
                input("2025-06-02", MealType::Lunch, "Salad", "Lettuce"),
                &config.user.id,
            )
            .await?;
        assert_eq!(Query(state.clone()).all(&config.user.id).await?.len(), 1);
        state.read_db.close().await;
        state.write_db.close().await;
    }

    mealdeck::migrate::reset(&config).await?;

    let state = mealdeck::db::create_state(&config.database.url, 1).await?;
    assert!(Query(state).all(&config.user.id).await?.is_empty());

    Ok(())
}
