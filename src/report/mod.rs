//! Report rendering for the payroll engine.
//!
//! Exporters and views source their rows from the engine's computed
//! outputs; this module renders them as text. File download mechanics
//! and HTML templating stay with the caller.

mod csv;

pub use csv::{render_records_csv, render_summary_csv};
