pub mod budget;
pub mod config;
pub mod listing;
pub mod logging;
pub mod output;
pub mod ranking;
pub mod scoring;
