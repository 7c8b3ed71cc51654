//! Pay and balance calculation engine for a home finance display.
//!
//! This crate powers a small personal finance dashboard: manually entered
//! balance snapshots and per-job work logs are persisted to a JSON file and
//! served to a kiosk visualization. The core is the pay engine, which
//! computes take-home pay under a daily-8/weekly-40 overtime policy and
//! estimates earned-but-not-yet-banked ("incoming") pay as of a date.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
