use mealdeck_db::table::Recipe;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    pub async fn delete(
        &self,
        id: i64,
        request_by: impl Into<String>,
    ) -> mealdeck_shared::Result<()> {
        let request_by = request_by.into();
        let statement = Query::delete()
            .from_table(Recipe::Table)
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

        tracing::debug!(user_id = %request_by, id, "recipe deleted");

        Ok(())
    }
}
