//! BuildCraft — RPG character build suggestions over JSON/HTTP.

pub mod client;
pub mod config;
pub mod routes;
pub mod services;
pub mod state;
pub mod types;
