use mealdeck_db::table::Recipe;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::OffsetDateTime;

use crate::RecipeInput;

impl super::Command {
    /// Replaces every field of a saved recipe. Meal plans that already copied
    /// it keep their snapshot.
    pub async fn update(
        &self,
        id: i64,
        input: RecipeInput,
        request_by: impl Into<String>,
    ) -> mealdeck_shared::Result<()> {
        let input = input.normalize()?;
        let request_by = request_by.into();
        let now = OffsetDateTime::now_utc().unix_timestamp();

        let statement = Query::update()
            .table(Recipe::Table)
            .values([
                (Recipe::Title, input.title.into()),
                (Recipe::Description, input.description.into()),
                (Recipe::ImageReference, input.image_reference.into()),
                (Recipe::Ingredients, input.ingredients.into()),
                (Recipe::Instructions, input.instructions.into()),
                (Recipe::PrepTime, input.prep_time.into()),
                (Recipe::Servings, input.servings.into()),
                (Recipe::UpdatedAt, now.into()),
            ])
            .and_where(Expr::col(Recipe::Id).eq(id))
            .and_where(Expr::col(Recipe::UserId).eq(&request_by))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            mealdeck_shared::not_found!("recipe {id}");
        }

        tracing::debug!(user_id = %request_by, id, "recipe updated");

        Ok(())
    }
}
