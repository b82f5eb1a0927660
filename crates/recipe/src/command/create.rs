use mealdeck_db::table::Recipe;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::OffsetDateTime;
use validator::Validate;

#[derive(Validate, Default, Clone, Debug)]
pub struct RecipeInput {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 2000))]
    pub description: String,
    pub image_reference: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub prep_time: Option<String>,
    pub servings: Option<String>,
}

impl RecipeInput {
    pub(crate) fn normalize(mut self) -> Result<Self, validator::ValidationErrors> {
        self.title = self.title.trim().to_owned();
        self.validate()?;

        Ok(self)
    }
}

impl super::Command {
    /// Saves a new recipe and returns its id.
    pub async fn create(
        &self,
        input: RecipeInput,
        request_by: impl Into<String>,
    ) -> mealdeck_shared::Result<i64> {
        let input = input.normalize()?;
        let request_by = request_by.into();

        let statement = Query::insert()
            .into_table(Recipe::Table)
            .columns([
                Recipe::UserId,
                Recipe::Title,
                Recipe::Description,
                Recipe::ImageReference,
                Recipe::Ingredients,
                Recipe::Instructions,
                Recipe::PrepTime,
                Recipe::Servings,
                Recipe::CreatedAt,
            ])
            .values_panic([
                request_by.clone().into(),
                input.title.into(),
                input.description.into(),
                input.image_reference.into(),
                input.ingredients.into(),
                input.instructions.into(),
                input.prep_time.into(),
                input.servings.into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;
        let id = result.last_insert_rowid();

        tracing::debug!(user_id = %request_by, id, "recipe created");

        Ok(id)
    }
}
