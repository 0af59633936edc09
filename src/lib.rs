//! Table View Library
//!
//! A paginated data table with single-row selection, built on a headless table
//! engine (`table`) and rendered with GPUI (`components`).

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod i18n;
pub mod table;
pub mod theme;
