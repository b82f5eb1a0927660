mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cli::{plan::PlanCommands, recipe::RecipeCommands, shopping::ShoppingCommands, week::WeekArgs};

/// mealdeck - Weekly meal planning and shopping lists
#[derive(Parser)]
#[command(name = "mealdeck")]
#[command(about = "Plan meals by week and build the matching shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Manage saved recipes
    #[command(subcommand)]
    Recipe(RecipeCommands),
    /// Manage planned meals
    #[command(subcommand)]
    Plan(PlanCommands),
    /// Show the planned meals of a week
    Week(WeekArgs),
    /// Shopping list of a week
    #[command(subcommand)]
    Shopping(ShoppingCommands),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealdeck::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealdeck::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Migrate => mealdeck::migrate::migrate(&config).await,
        Commands::Reset => mealdeck::migrate::reset(&config).await,
        Commands::Recipe(command) => cli::recipe::run(config, command).await,
        Commands::Plan(command) => cli::plan::run(config, command).await,
        Commands::Week(args) => cli::week::run(config, args).await,
        Commands::Shopping(command) => cli::shopping::run(config, command).await,
    }
}
