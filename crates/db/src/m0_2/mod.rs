mod recipe;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "mealdeck",
    "m0_2",
    vec_box![crate::m0_1::Migration],
    vec_box![recipe::CreateTable, recipe::CreateUserIdx]
);
