//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod money;
mod record;

pub use money::{DayMoney, PayRates, RangeSummary};
pub use record::{Attendance, BreakSpec, DayRecord, DayType, NetHours, ShiftTag};
