mod command;
mod list;
mod store;

pub use command::*;
pub use list::*;
pub use store::*;
