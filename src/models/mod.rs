//! Core data models for the finance display.
//!
//! This module contains the domain records persisted in the data file and
//! exchanged with the frontend. All wire names are camelCase to match the
//! stored JSON.

mod balance_snapshot;
mod finance_data;
mod job;
mod work_log;

pub use balance_snapshot::{BalanceSnapshot, NoteAnnotation};
pub use finance_data::FinanceData;
pub use job::Job;
pub use work_log::WorkLog;
