pub mod api;
pub mod config_store;
pub mod controller;
pub mod ui;
