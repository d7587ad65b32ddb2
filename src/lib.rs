pub mod api;
pub mod config;
pub mod data_models;
pub mod detail;
pub mod error;
pub mod search;
pub mod tmdb;
pub mod views;
