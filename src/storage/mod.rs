//! Storage layer for studyfocus.
//!
//! This module provides SQLite-based persistence for:
//! - Daily focus aggregates
//! - The weekly class timetable

mod database;
mod migrations;

pub use database::Database;
