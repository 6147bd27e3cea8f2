//! HTTP API module for the payroll engine.
//!
//! This module exposes the engine as a stateless calculate-as-a-service
//! API: per-record computation, range/cycle summaries, and cycle
//! resolution. Persistence stays with the caller; every request carries
//! its own records snapshot.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ComputeRequest, CyclesRequest, PeriodKind, SummaryRequest};
pub use response::{ApiError, DayComputation, SummaryResponse};
pub use state::AppState;
