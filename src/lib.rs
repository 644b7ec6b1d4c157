pub mod api;
pub mod browse;
pub mod client;
pub mod config;
pub mod format;
pub mod models;
pub mod navigation;
pub mod screens;
pub mod state_codes;

#[cfg(test)]
mod testing;
