pub mod config;
pub mod db;
pub mod migrate;
pub mod observability;

pub use config::Config;
