pub mod categories;
pub mod config;
pub mod fetcher;
pub mod filter;
pub mod model;
pub mod parser;
pub mod state;
pub mod utils;
