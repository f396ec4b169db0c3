pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod notify;
pub mod pager;
pub mod render;
pub mod signals;
pub mod types;
pub mod view;
