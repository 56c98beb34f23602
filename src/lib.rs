pub mod catalog;
pub mod cli;
pub mod downloader;
pub mod error;
pub mod media_type;
pub mod menu;
pub mod models;
pub mod progress;
