mod overview;
mod source;
pub mod week;

pub use overview::*;
pub use source::*;
pub use week::{
    Direction, WeekLabel, WeekWindow, WindowShape, compute_window, select_date, shift_week,
};

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod command;
        mod query;

        pub use command::*;
        pub use query::*;
    }
}
