pub mod commands;
pub mod states;
pub mod stores;
