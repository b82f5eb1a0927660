use mealdeck_db::table::MealPlan as MealPlanTable;
use mealdeck_shared::{MealPlan, MealType, RecipeSnapshot};
use sea_query::{OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::OffsetDateTime;
use validator::{Validate, ValidationError};

use crate::week::{format_day, parse_day};

#[derive(Validate, Default, Clone, Debug)]
pub struct AssignInput {
    #[validate(custom(function = "validate_day"))]
    pub date: String,
    pub meal_type: MealType,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: String,
    pub image_reference: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub prep_time: Option<String>,
    pub servings: Option<String>,
}

impl AssignInput {
    /// Input that puts a copy of `recipe` on the slot.
    pub fn from_snapshot(
        date: impl Into<String>,
        meal_type: MealType,
        recipe: RecipeSnapshot,
    ) -> Self {
        Self {
            date: date.into(),
            meal_type,
            title: recipe.title,
            description: recipe.description,
            image_reference: recipe.image_reference,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            prep_time: recipe.prep_time,
            servings: recipe.servings,
        }
    }
}

fn validate_day(value: &str) -> Result<(), ValidationError> {
    if parse_day(value).is_some() {
        return Ok(());
    }

    let message = "Date must use the YYYY-MM-DD format";

    Err(ValidationError::new("date").with_message(message.into()))
}

impl super::Command {
    /// Puts a recipe snapshot on a (date, meal type) slot, replacing whatever
    /// the user had planned there.
    pub async fn assign(
        &self,
        mut input: AssignInput,
        request_by: impl Into<String>,
    ) -> mealdeck_shared::Result<MealPlan> {
        let request_by = request_by.into();
        input.title = input.title.trim().to_owned();
        input.validate()?;

        let Some(day) = parse_day(&input.date) else {
            mealdeck_shared::bail!("invalid date {}", input.date);
        };

        let plan = MealPlan {
            user_id: request_by,
            date: format_day(day),
            meal_type: input.meal_type,
            recipe: RecipeSnapshot {
                title: input.title,
                description: input.description,
                image_reference: input.image_reference,
                ingredients: input.ingredients,
                instructions: input.instructions,
                prep_time: input.prep_time,
                servings: input.servings,
            },
        };

        let statement = Query::insert()
            .into_table(MealPlanTable::Table)
            .columns([
                MealPlanTable::UserId,
                MealPlanTable::Date,
                MealPlanTable::MealType,
                MealPlanTable::Title,
                MealPlanTable::Description,
                MealPlanTable::ImageReference,
                MealPlanTable::Ingredients,
                MealPlanTable::Instructions,
                MealPlanTable::PrepTime,
                MealPlanTable::Servings,
                MealPlanTable::CreatedAt,
            ])
            .values_panic([
                plan.user_id.to_owned().into(),
                plan.date.to_owned().into(),
                plan.meal_type.to_string().into(),
                plan.recipe.title.to_owned().into(),
                plan.recipe.description.to_owned().into(),
                plan.recipe.image_reference.to_owned().into(),
                plan.recipe.ingredients.to_owned().into(),
                plan.recipe.instructions.to_owned().into(),
                plan.recipe.prep_time.to_owned().into(),
                plan.recipe.servings.to_owned().into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .on_conflict(
                OnConflict::columns([
                    MealPlanTable::UserId,
                    MealPlanTable::Date,
                    MealPlanTable::MealType,
                ])
                .update_columns([
                    MealPlanTable::Title,
                    MealPlanTable::Description,
                    MealPlanTable::ImageReference,
                    MealPlanTable::Ingredients,
                    MealPlanTable::Instructions,
                    MealPlanTable::PrepTime,
                    MealPlanTable::Servings,
                    MealPlanTable::CreatedAt,
                ])
                .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::debug!(
            user_id = %plan.user_id,
            date = %plan.date,
            meal_type = %plan.meal_type,
            "meal plan assigned"
        );

        Ok(plan)
    }
}
