use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::MealPlan;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(MealPlan::Table)
        .col(
            ColumnDef::new(MealPlan::UserId)
                .string()
                .not_null()
                .string_len(64),
        )
        .col(
            ColumnDef::new(MealPlan::Date)
                .string()
                .not_null()
                .string_len(10),
        )
        .col(
            ColumnDef::new(MealPlan::MealType)
                .string()
                .not_null()
                .string_len(9),
        )
        .col(ColumnDef::new(MealPlan::Title).string().not_null())
        .col(
            ColumnDef::new(MealPlan::Description)
                .text()
                .not_null()
                .default(""),
        )
        .col(ColumnDef::new(MealPlan::ImageReference).text().null())
        .col(ColumnDef::new(MealPlan::Ingredients).text().null())
        .col(ColumnDef::new(MealPlan::Instructions).text().null())
        .col(ColumnDef::new(MealPlan::PrepTime).string().null())
        .col(ColumnDef::new(MealPlan::Servings).string().null())
        .col(ColumnDef::new(MealPlan::CreatedAt).big_integer().not_null())
        .primary_key(
            Index::create()
                .col(MealPlan::UserId)
                .col(MealPlan::Date)
                .col(MealPlan::MealType),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(MealPlan::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateUserDateIdx;

fn create_index() -> IndexCreateStatement {
    Index::create()
        .name("idx_meal_plan_user_date")
        .table(MealPlan::Table)
        .col(MealPlan::UserId)
        .col(MealPlan::Date)
        .to_owned()
}

fn drop_index() -> IndexDropStatement {
    Index::drop()
        .name("idx_meal_plan_user_date")
        .table(MealPlan::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateUserDateIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_index().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_index().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
