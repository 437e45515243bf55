pub mod app;
pub mod data;
pub mod detail;
pub mod logos;
pub mod model;
pub mod schedule;
pub mod summary;
pub mod ui;
