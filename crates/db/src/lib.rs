use sqlx_migrator::{Info, Migrator};

pub(crate) mod m0_1;
pub(crate) mod m0_2;
pub mod table;

pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::default();
    migrator.add_migrations(vec![Box::new(m0_1::Migration), Box::new(m0_2::Migration)])?;

    Ok(migrator)
}
