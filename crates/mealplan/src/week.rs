use std::fmt;

use serde::{Deserialize, Serialize};
use time::{Date, Duration, OffsetDateTime, UtcOffset};

/// Days kept between a window and the calendar bounds so that every window
/// keeps its full length.
const WINDOW_MARGIN: i64 = 16;

/// Layout of the dates shown for a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WindowShape {
    /// Monday to Sunday.
    #[default]
    Week,
    /// Three days before Monday, Monday to Sunday, three days after.
    Strip,
}

impl WindowShape {
    pub fn len(self) -> usize {
        match self {
            WindowShape::Week => 7,
            WindowShape::Strip => 13,
        }
    }

    fn lead_days(self) -> i64 {
        match self {
            WindowShape::Week => 0,
            WindowShape::Strip => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    fn step(self) -> i32 {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Human readable name of a week offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekLabel(pub i32);

impl fmt::Display for WeekLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => f.write_str("This Week"),
            -1 => f.write_str("Last Week"),
            1 => f.write_str("Next Week"),
            n if n > 0 => write!(f, "{n} Weeks Ahead"),
            n => write!(f, "{} Weeks Ago", n.unsigned_abs()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekWindow {
    pub reference_date: Date,
    pub offset: i32,
    pub shape: WindowShape,
    pub dates: Vec<Date>,
    pub label: WeekLabel,
}

impl WeekWindow {
    pub fn monday(&self) -> Date {
        self.dates[self.anchor_index()]
    }

    /// Position of the Monday, the default selection of a freshly computed window.
    pub fn anchor_index(&self) -> usize {
        self.shape.lead_days() as usize
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Dates displayed `offset` weeks away from the week containing `today`.
pub fn compute_window(today: Date, offset: i32, shape: WindowShape) -> WeekWindow {
    let earliest = Date::MIN.saturating_add(Duration::days(WINDOW_MARGIN));
    let latest = Date::MAX.saturating_sub(Duration::days(WINDOW_MARGIN));
    let target = today
        .saturating_add(Duration::weeks(offset.into()))
        .clamp(earliest, latest);

    let start = monday_of(target).saturating_sub(Duration::days(shape.lead_days()));
    let dates = (0..shape.len() as i64)
        .map(|day| start.saturating_add(Duration::days(day)))
        .collect();

    WeekWindow {
        reference_date: today,
        offset,
        shape,
        dates,
        label: WeekLabel(offset),
    }
}

pub fn shift_week(offset: i32, direction: Direction) -> i32 {
    offset.wrapping_add(direction.step())
}

/// Index of `date` in the window, `None` when the window does not show it.
pub fn select_date(window: &WeekWindow, date: Date) -> Option<usize> {
    window.dates.iter().position(|d| *d == date)
}

pub fn monday_of(date: Date) -> Date {
    let since_monday = date.weekday().number_days_from_monday();

    date.saturating_sub(Duration::days(since_monday.into()))
}

pub fn today(offset: UtcOffset) -> Date {
    OffsetDateTime::now_utc().to_offset(offset).date()
}

/// `2025-06-02`
pub fn format_day(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

pub fn parse_day(value: &str) -> Option<Date> {
    Date::parse(value.trim(), mealdeck_shared::DAY_FORMAT).ok()
}

/// `Jun 2`
pub fn display_day(date: Date) -> String {
    let month = date.month().to_string();
    format!("{} {}", &month[..3], date.day())
}
