use clap::Args;
use mealdeck::Config;
use mealdeck_mealplan::{Query, WindowShape, select_date, weekly_overview};
use time::Date;

use super::WindowArgs;

#[derive(Args, Debug)]
pub struct WeekArgs {
    #[command(flatten)]
    pub window: WindowArgs,

    /// Show three extra days on each side of the week
    #[arg(long)]
    pub strip: bool,

    /// Day to highlight, defaults to the Monday of the window
    #[arg(long, value_parser = super::parse_date)]
    pub select: Option<Date>,
}

pub async fn run(config: Config, args: WeekArgs) -> anyhow::Result<()> {
    let shape = if args.strip {
        WindowShape::Strip
    } else {
        config.calendar.shape()
    };
    let window = args.window.window(&config, shape)?;

    let selected = match args.select {
        Some(date) => select_date(&window, date).unwrap_or_else(|| {
            tracing::warn!(%date, "selected day is outside of the window");
            window.anchor_index()
        }),
        None => window.anchor_index(),
    };

    let state =
        mealdeck::db::create_state(&config.database.url, config.database.max_connections).await?;
    let plans = Query(state).all(&config.user.id).await?;

    println!("{}", window.label);

    for (idx, day) in weekly_overview(&window, &plans).into_iter().enumerate() {
        let marker = if idx == selected { '>' } else { ' ' };
        let slot = |filled: bool, letter: char| if filled { letter } else { '.' };

        println!(
            "{marker} {:<6} {} {}{}{} {}",
            day.display,
            day.date,
            slot(day.has_breakfast, 'B'),
            slot(day.has_lunch, 'L'),
            slot(day.has_dinner, 'D'),
            day.meal_count
        );
    }

    Ok(())
}
