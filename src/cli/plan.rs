use clap::{Args, Subcommand};
use mealdeck::Config;
use mealdeck_mealplan::{AssignInput, Command, Query};
use mealdeck_shared::MealType;
use time::Date;

#[derive(Subcommand, Debug)]
pub enum PlanCommands {
    /// Assign a recipe to a day and meal, replacing what was planned there
    Add(AddArgs),
    /// Remove the recipe planned on a day and meal
    Remove {
        #[arg(long, value_parser = super::parse_date)]
        date: Date,
        #[arg(long, value_parser = super::parse_meal_type)]
        meal_type: MealType,
    },
    /// List planned meals, latest first
    List {
        #[arg(long, value_parser = super::parse_date)]
        date: Option<Date>,
    },
}

const INLINE_RECIPE: [&str; 6] = [
    "title",
    "image",
    "ingredients",
    "instructions",
    "prep_time",
    "servings",
];

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Day of the meal (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,
    #[arg(long, value_parser = super::parse_meal_type)]
    pub meal_type: MealType,
    /// Copy a saved recipe instead of describing one inline
    #[arg(long, conflicts_with_all = INLINE_RECIPE)]
    pub recipe: Option<i64>,
    #[arg(long, required_unless_present = "recipe")]
    pub title: Option<String>,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long)]
    pub image: Option<String>,
    /// Ingredients separated by commas or newlines
    #[arg(long)]
    pub ingredients: Option<String>,
    #[arg(long)]
    pub instructions: Option<String>,
    #[arg(long)]
    pub prep_time: Option<String>,
    #[arg(long)]
    pub servings: Option<String>,
}

impl From<AddArgs> for AssignInput {
    fn from(args: AddArgs) -> Self {
        AssignInput {
            date: args.date,
            meal_type: args.meal_type,
            title: args.title.unwrap_or_default(),
            description: args.description,
            image_reference: args.image,
            ingredients: args.ingredients,
            instructions: args.instructions,
            prep_time: args.prep_time,
            servings: args.servings,
        }
    }
}

pub async fn run(config: Config, command: PlanCommands) -> anyhow::Result<()> {
    let state =
        mealdeck::db::create_state(&config.database.url, config.database.max_connections).await?;
    let user_id = config.user.id.to_owned();

    match command {
        PlanCommands::Add(args) => {
            let input = match args.recipe {
                Some(id) => {
                    let recipe = mealdeck_recipe::Query(state.clone())
                        .snapshot(id, &user_id)
                        .await?;

                    AssignInput::from_snapshot(args.date, args.meal_type, recipe)
                }
                None => args.into(),
            };

            let plan = Command::new(state).assign(input, &user_id).await?;

            println!("{} {}: {}", plan.date, plan.meal_type, plan.recipe.title);
        }
        PlanCommands::Remove { date, meal_type } => {
            let command = Command::new(state);

            if !command.remove(date, meal_type, &user_id).await? {
                tracing::warn!(%date, %meal_type, "nothing planned on this slot");
            }
        }
        PlanCommands::List { date } => {
            let query = Query(state);
            let plans = match date {
                Some(date) => query.for_day(date, &user_id).await?,
                None => query.all(&user_id).await?,
            };

            for plan in plans {
                let title = plan.recipe.title;
                println!("{} {:<9} {title}", plan.date, plan.meal_type);
            }
        }
    }

    Ok(())
}
