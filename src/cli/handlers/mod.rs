pub mod config;
pub mod log;
pub mod parse;
pub mod render;
