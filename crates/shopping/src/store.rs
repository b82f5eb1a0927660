use std::{collections::HashMap, sync::RwLock};

use crate::CheckedState;

/// Per-user persistence of checked ingredients.
#[async_trait::async_trait]
pub trait CheckedStore: Send + Sync {
    async fn load(&self, user_id: &str) -> anyhow::Result<CheckedState>;

    async fn set(&self, user_id: &str, name: &str, checked: bool) -> anyhow::Result<()>;

    /// Removes the keys entirely, not just the flags.
    async fn delete(&self, user_id: &str, names: &[String]) -> anyhow::Result<()>;
}

#[derive(Default)]
pub struct MemoryCheckedStore {
    users: RwLock<HashMap<String, CheckedState>>,
}

impl MemoryCheckedStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CheckedStore for MemoryCheckedStore {
    async fn load(&self, user_id: &str) -> anyhow::Result<CheckedState> {
        let users = self
            .users
            .read()
            .map_err(|e| anyhow::anyhow!("checked store poisoned: {e}"))?;

        Ok(users.get(user_id).cloned().unwrap_or_default())
    }

    async fn set(&self, user_id: &str, name: &str, checked: bool) -> anyhow::Result<()> {
        let mut users = self
            .users
            .write()
            .map_err(|e| anyhow::anyhow!("checked store poisoned: {e}"))?;

        users
            .entry(user_id.to_owned())
            .or_default()
            .insert(name.to_owned(), checked);

        Ok(())
    }

    async fn delete(&self, user_id: &str, names: &[String]) -> anyhow::Result<()> {
        let mut users = self
            .users
            .write()
            .map_err(|e| anyhow::anyhow!("checked store poisoned: {e}"))?;

        let Some(state) = users.get_mut(user_id) else {
            return Ok(());
        };

        for name in names {
            state.remove(name);
        }

        if state.is_empty() {
            users.remove(user_id);
        }

        Ok(())
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        use mealdeck_db::table::ShoppingChecked;
        use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
        use sea_query_sqlx::SqlxBinder;
        use sqlx::{SqlitePool, prelude::FromRow};

        #[derive(FromRow)]
        struct CheckedRow {
            ingredient: String,
            checked: bool,
        }

        #[derive(Clone)]
        pub struct SqliteCheckedStore {
            read_db: SqlitePool,
            write_db: SqlitePool,
        }

        impl SqliteCheckedStore {
            pub fn new(state: &mealdeck_shared::State) -> Self {
                Self {
                    read_db: state.read_db.clone(),
                    write_db: state.write_db.clone(),
                }
            }
        }

        #[async_trait::async_trait]
        impl CheckedStore for SqliteCheckedStore {
            async fn load(&self, user_id: &str) -> anyhow::Result<CheckedState> {
                let statement = Query::select()
                    .columns([ShoppingChecked::Ingredient, ShoppingChecked::Checked])
                    .from(ShoppingChecked::Table)
                    .and_where(Expr::col(ShoppingChecked::UserId).eq(user_id))
                    .to_owned();

                let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
                let rows = sqlx::query_as_with::<_, CheckedRow, _>(&sql, values)
                    .fetch_all(&self.read_db)
                    .await?;

                Ok(rows
                    .into_iter()
                    .map(|row| (row.ingredient, row.checked))
                    .collect())
            }

            async fn set(&self, user_id: &str, name: &str, checked: bool) -> anyhow::Result<()> {
                let statement = Query::insert()
                    .into_table(ShoppingChecked::Table)
                    .columns([
                        ShoppingChecked::UserId,
                        ShoppingChecked::Ingredient,
                        ShoppingChecked::Checked,
                    ])
                    .values_panic([user_id.into(), name.into(), checked.into()])
                    .on_conflict(
                        OnConflict::columns([ShoppingChecked::UserId, ShoppingChecked::Ingredient])
                            .update_column(ShoppingChecked::Checked)
                            .to_owned(),
                    )
                    .to_owned();

                let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
                sqlx::query_with(&sql, values)
                    .execute(&self.write_db)
                    .await?;

                Ok(())
            }

            async fn delete(&self, user_id: &str, names: &[String]) -> anyhow::Result<()> {
                if names.is_empty() {
                    return Ok(());
                }

                let statement = Query::delete()
                    .from_table(ShoppingChecked::Table)
                    .and_where(Expr::col(ShoppingChecked::UserId).eq(user_id))
                    .and_where(Expr::col(ShoppingChecked::Ingredient).is_in(names.iter().cloned()))
                    .to_owned();

                let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
                sqlx::query_with(&sql, values)
                    .execute(&self.write_db)
                    .await?;

                Ok(())
            }
        }
    }
}
