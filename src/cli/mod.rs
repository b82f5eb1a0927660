pub mod plan;
pub mod recipe;
pub mod shopping;
pub mod week;

use clap::Args;
use mealdeck::Config;
use mealdeck_mealplan::{WeekWindow, WindowShape, compute_window, week as calendar};
use mealdeck_shared::MealType;
use strum::VariantArray;
use time::Date;

#[derive(Args, Debug)]
pub struct WindowArgs {
    /// Weeks away from the current week, negative for the past
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i32,

    /// Day considered as today (YYYY-MM-DD), defaults to the system clock
    #[arg(long, value_parser = parse_date)]
    pub today: Option<Date>,
}

impl WindowArgs {
    pub fn today(&self, config: &Config) -> anyhow::Result<Date> {
        match self.today {
            Some(today) => Ok(today),
            None => Ok(calendar::today(config.calendar.utc_offset()?)),
        }
    }

    pub fn window(&self, config: &Config, shape: WindowShape) -> anyhow::Result<WeekWindow> {
        Ok(compute_window(self.today(config)?, self.offset, shape))
    }
}

pub fn parse_date(value: &str) -> Result<Date, String> {
    calendar::parse_day(value)
        .ok_or_else(|| format!("invalid date `{value}`, expected YYYY-MM-DD"))
}

pub fn parse_meal_type(value: &str) -> Result<MealType, String> {
    MealType::VARIANTS
        .iter()
        .find(|meal_type| meal_type.as_ref().eq_ignore_ascii_case(value))
        .copied()
        .ok_or_else(|| format!("invalid meal type `{value}`, expected breakfast, lunch or dinner"))
}
