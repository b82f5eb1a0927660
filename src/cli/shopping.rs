use clap::{Args, Subcommand};
use mealdeck::Config;
use mealdeck_shopping::{Command, Shared, ShoppingList};

use super::WindowArgs;

#[derive(Subcommand, Debug)]
pub enum ShoppingCommands {
    /// Print the shopping list of a week
    List(ListArgs),
    /// Print the list as shareable text
    Share(ListArgs),
    /// Check or uncheck an ingredient
    Toggle {
        name: String,
        #[command(flatten)]
        window: WindowArgs,
    },
    /// Uncheck every ingredient of a week
    Clear(ListArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub window: WindowArgs,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub async fn run(config: Config, command: ShoppingCommands) -> anyhow::Result<()> {
    let state =
        mealdeck::db::create_state(&config.database.url, config.database.max_connections).await?;
    let shopping = Command::sqlite(state);
    let user_id = config.user.id.to_owned();
    let shape = config.calendar.shape();

    match command {
        ShoppingCommands::List(args) => {
            let window = args.window.window(&config, shape)?;
            let generated = shopping.generate(&user_id, &window).await?;

            if let Some(message) = generated.message() {
                if args.json {
                    println!("{}", serde_json::json!({ "message": message, "items": [] }));
                } else {
                    println!("{message}");
                }

                return Ok(());
            }

            print_list(&generated.into_list(), args.json)?;
        }
        ShoppingCommands::Share(args) => {
            let window = args.window.window(&config, shape)?;

            match shopping.share(&user_id, &window).await? {
                Shared::Text(text) if args.json => {
                    println!("{}", serde_json::json!({ "text": text }))
                }
                Shared::Text(text) => print!("{text}"),
                Shared::Nothing(message) if args.json => {
                    println!("{}", serde_json::json!({ "message": message }))
                }
                Shared::Nothing(message) => println!("{message}"),
            }
        }
        ShoppingCommands::Toggle { name, window } => {
            let window = window.window(&config, shape)?;
            let list = shopping.toggle(&user_id, &window, &name).await?;

            match list.get(&name) {
                Some(item) if item.checked => println!("☑ {}", item.name),
                Some(item) => println!("☐ {}", item.name),
                None => println!("{name} is not on the list"),
            }
        }
        ShoppingCommands::Clear(args) => {
            let window = args.window.window(&config, shape)?;
            let list = shopping.clear(&user_id, &window).await?;

            print_list(&list, args.json)?;
        }
    }

    Ok(())
}

fn print_list(list: &ShoppingList, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(list)?);

        return Ok(());
    }

    for item in list.items() {
        let checkbox = if item.checked { '☑' } else { '☐' };

        if item.count > 1 {
            println!("{checkbox} {} (×{})", item.name, item.count);
        } else {
            println!("{checkbox} {}", item.name);
        }
    }

    println!("{}/{} checked", list.checked_count(), list.len());

    Ok(())
}
