pub mod catalog;
pub mod cli;
pub mod config;
pub mod jobs;
pub mod schema;
