pub mod args;
pub mod build_info;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod model;
pub mod output;
pub mod store;
