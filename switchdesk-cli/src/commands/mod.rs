pub mod config;
pub mod switch;
