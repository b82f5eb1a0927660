use std::{ops::Deref, str::FromStr};

use mealdeck_db::table::MealPlan as MealPlanTable;
use mealdeck_shared::{MealPlan, MealType, RecipeSnapshot};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use time::Date;

use crate::{MealPlanSource, week::format_day};

#[derive(FromRow)]
pub struct MealPlanRow {
    pub user_id: String,
    pub date: String,
    pub meal_type: String,
    pub title: String,
    pub description: String,
    pub image_reference: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub prep_time: Option<String>,
    pub servings: Option<String>,
}

impl MealPlanRow {
    /// `None` when the stored meal type is not one we know about.
    fn into_meal_plan(self) -> Option<MealPlan> {
        let meal_type = match MealType::from_str(&self.meal_type) {
            Ok(meal_type) => meal_type,
            Err(_) => {
                tracing::warn!(
                    user_id = %self.user_id,
                    date = %self.date,
                    meal_type = %self.meal_type,
                    "skipping meal plan with unknown meal type"
                );
                return None;
            }
        };

        Some(MealPlan {
            user_id: self.user_id,
            date: self.date,
            meal_type,
            recipe: RecipeSnapshot {
                title: self.title,
                description: self.description,
                image_reference: self.image_reference,
                ingredients: self.ingredients,
                instructions: self.instructions,
                prep_time: self.prep_time,
                servings: self.servings,
            },
        })
    }
}

#[derive(Clone)]
pub struct Query(pub mealdeck_shared::State);

impl Deref for Query {
    type Target = mealdeck_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn select() -> sea_query::SelectStatement {
    sea_query::Query::select()
        .columns([
            MealPlanTable::UserId,
            MealPlanTable::Date,
            MealPlanTable::MealType,
            MealPlanTable::Title,
            MealPlanTable::Description,
            MealPlanTable::ImageReference,
            MealPlanTable::Ingredients,
            MealPlanTable::Instructions,
            MealPlanTable::PrepTime,
            MealPlanTable::Servings,
        ])
        .from(MealPlanTable::Table)
        .to_owned()
}

impl Query {
    /// Every plan of the user, latest date first.
    pub async fn all(&self, user_id: impl Into<String>) -> anyhow::Result<Vec<MealPlan>> {
        let user_id = user_id.into();
        let statement = select()
            .and_where(Expr::col(MealPlanTable::UserId).eq(&user_id))
            .order_by(MealPlanTable::Date, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, MealPlanRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(MealPlanRow::into_meal_plan)
            .collect())
    }

    /// Plans of a single day, breakfast first and dinner last.
    pub async fn for_day(
        &self,
        date: Date,
        user_id: impl Into<String>,
    ) -> anyhow::Result<Vec<MealPlan>> {
        let user_id = user_id.into();
        let statement = select()
            .and_where(Expr::col(MealPlanTable::UserId).eq(&user_id))
            .and_where(Expr::col(MealPlanTable::Date).eq(format_day(date)))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, MealPlanRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let mut plans = rows
            .into_iter()
            .filter_map(MealPlanRow::into_meal_plan)
            .collect::<Vec<_>>();
        plans.sort_by_key(|plan| plan.meal_type);

        Ok(plans)
    }

    pub async fn find(
        &self,
        date: Date,
        meal_type: MealType,
        user_id: impl Into<String>,
    ) -> anyhow::Result<Option<MealPlan>> {
        let user_id = user_id.into();
        let statement = select()
            .and_where(Expr::col(MealPlanTable::UserId).eq(&user_id))
            .and_where(Expr::col(MealPlanTable::Date).eq(format_day(date)))
            .and_where(Expr::col(MealPlanTable::MealType).eq(meal_type.to_string()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, MealPlanRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.and_then(MealPlanRow::into_meal_plan))
    }
}

#[async_trait::async_trait]
impl MealPlanSource for Query {
    async fn all(&self, user_id: &str) -> anyhow::Result<Vec<MealPlan>> {
        Query::all(self, user_id).await
    }
}
