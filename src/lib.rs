// src/lib.rs

pub mod api;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod model;
pub mod presenter;
