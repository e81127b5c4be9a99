pub mod commands;
pub mod patch;
pub mod utils;
