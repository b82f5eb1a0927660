use clap::{Args, Subcommand};
use mealdeck::Config;
use mealdeck_recipe::{Command, Query, RecipeInput};

#[derive(Subcommand, Debug)]
pub enum RecipeCommands {
    /// Save a recipe to the library
    Add(RecipeArgs),
    /// Replace every field of a saved recipe
    Edit {
        id: i64,
        #[command(flatten)]
        recipe: RecipeArgs,
    },
    /// Delete a saved recipe, planned meals keep their copy
    Remove { id: i64 },
    /// List saved recipes, most recent first
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print a saved recipe
    Show { id: i64 },
}

#[derive(Args, Debug)]
pub struct RecipeArgs {
    #[arg(long)]
    pub title: String,
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

impl From<RecipeArgs> for RecipeInput {
    fn from(args: RecipeArgs) -> Self {
        RecipeInput {
            title: args.title,
            description: args.description,
            image_reference: args.image,
            ingredients: args.ingredients,
            instructions: args.instructions,
            prep_time: args.prep_time,
            servings: args.servings,
        }
    }
}

pub async fn run(config: Config, command: RecipeCommands) -> anyhow::Result<()> {
    let state =
        mealdeck::db::create_state(&config.database.url, config.database.max_connections).await?;
    let user_id = config.user.id.to_owned();

    match command {
        RecipeCommands::Add(args) => {
            let id = Command::new(state).create(args.into(), &user_id).await?;

            println!("{id}");
        }
        RecipeCommands::Edit { id, recipe } => {
            let input: RecipeInput = recipe.into();
            Command::new(state).update(id, input, &user_id).await?;
        }
        RecipeCommands::Remove { id } => {
            Command::new(state).delete(id, &user_id).await?;
        }
        RecipeCommands::List { json } => {
            let recipes = Query(state).all(&user_id).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&recipes)?);

                return Ok(());
            }

            for recipe in recipes {
                println!("{:>4} {}", recipe.id, recipe.title);
            }
        }
        RecipeCommands::Show { id } => {
            let recipe = Query(state).snapshot(id, &user_id).await?;

            println!("{}", recipe.title);

            if !recipe.description.is_empty() {
                println!("{}", recipe.description);
            }

            for (label, value) in [
                ("Prep time", &recipe.prep_time),
                ("Servings", &recipe.servings),
                ("Ingredients", &recipe.ingredients),
                ("Instructions", &recipe.instructions),
            ] {
                if let Some(value) = value {
                    println!("{label}: {value}");
                }
            }
        }
    }

    Ok(())
}
