use std::ops::Deref;

use mealdeck_db::table::Recipe as RecipeTable;
use mealdeck_shared::RecipeSnapshot;
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

/// A recipe saved in the user's library.
#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct Recipe {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub image_reference: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub prep_time: Option<String>,
    pub servings: Option<String>,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

impl Recipe {
    /// Copy of the fields a meal plan keeps, detached from this row.
    pub fn snapshot(&self) -> RecipeSnapshot {
        RecipeSnapshot {
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            image_reference: self.image_reference.to_owned(),
            ingredients: self.ingredients.to_owned(),
            instructions: self.instructions.to_owned(),
            prep_time: self.prep_time.to_owned(),
            servings: self.servings.to_owned(),
        }
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
            RecipeTable::Id,
            RecipeTable::UserId,
            RecipeTable::Title,
            RecipeTable::Description,
            RecipeTable::ImageReference,
            RecipeTable::Ingredients,
            RecipeTable::Instructions,
            RecipeTable::PrepTime,
            RecipeTable::Servings,
            RecipeTable::CreatedAt,
            RecipeTable::UpdatedAt,
        ])
        .from(RecipeTable::Table)
        .to_owned()
}

impl Query {
    /// The user's library, most recently saved first.
    pub async fn all(&self, user_id: impl Into<String>) -> anyhow::Result<Vec<Recipe>> {
        let user_id = user_id.into();
        let statement = select()
            .and_where(Expr::col(RecipeTable::UserId).eq(&user_id))
            .order_by(RecipeTable::CreatedAt, Order::Desc)
            .order_by(RecipeTable::Id, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let recipes = sqlx::query_as_with::<_, Recipe, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(recipes)
    }

    pub async fn find(
        &self,
        id: i64,
        user_id: impl Into<String>,
    ) -> anyhow::Result<Option<Recipe>> {
        let user_id = user_id.into();
        let statement = select()
            .and_where(Expr::col(RecipeTable::Id).eq(id))
            .and_where(Expr::col(RecipeTable::UserId).eq(&user_id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let recipe = sqlx::query_as_with::<_, Recipe, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(recipe)
    }

    /// Snapshot of a saved recipe, ready to put on a meal slot.
    pub async fn snapshot(
        &self,
        id: i64,
        user_id: impl Into<String>,
    ) -> mealdeck_shared::Result<RecipeSnapshot> {
        let Some(recipe) = self.find(id, user_id).await? else {
            mealdeck_shared::not_found!("recipe {id}");
        };

        Ok(recipe.snapshot())
    }
}
