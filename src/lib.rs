pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod index;
pub mod output;
pub mod recipe;
pub mod render;
pub mod server;
pub mod templates;
