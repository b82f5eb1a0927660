use mealdeck_db::table::MealPlan as MealPlanTable;
use mealdeck_shared::MealType;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::Date;

use crate::week::format_day;

impl super::Command {
    /// Returns false when nothing was planned on that slot.
    pub async fn remove(
        &self,
        date: Date,
        meal_type: MealType,
        request_by: impl Into<String>,
    ) -> mealdeck_shared::Result<bool> {
        let request_by = request_by.into();
        let statement = Query::delete()
            .from_table(MealPlanTable::Table)
            .and_where(Expr::col(MealPlanTable::UserId).eq(&request_by))
            .and_where(Expr::col(MealPlanTable::Date).eq(format_day(date)))
            .and_where(Expr::col(MealPlanTable::MealType).eq(meal_type.to_string()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
