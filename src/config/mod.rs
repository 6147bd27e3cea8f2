//! Settings loading and management for the payroll engine.
//!
//! This module provides the process-wide [`Settings`] snapshot and a YAML
//! file loader for it. The engine never mutates settings; calculations
//! take them as immutable input per call.
//!
//! # Example
//!
//! ```no_run
//! use ot_engine::config::SettingsLoader;
//!
//! let loader = SettingsLoader::load("./config/settings.yaml").unwrap();
//! println!("Base salary: {}", loader.settings().base_salary);
//! ```

mod loader;
mod types;

pub use loader::SettingsLoader;
pub use types::{
    CycleAnchor, OtCycleMode, OtPayMode, PayDatePolicy, Settings, ShiftTemplate,
};
