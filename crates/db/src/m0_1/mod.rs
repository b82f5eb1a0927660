mod meal_plan;
mod shopping_checked;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "mealdeck",
    "m0_1",
    vec_box![],
    vec_box![
        meal_plan::CreateTable,
        meal_plan::CreateUserDateIdx,
        shopping_checked::CreateTable
    ]
);
