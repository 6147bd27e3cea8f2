//! Calculation logic for the payroll engine.
//!
//! This module contains all the calculation functions: time-of-day and
//! break-interval arithmetic, date normalization and pay-cycle range
//! building, net hour computation per attendance rules, rate derivation,
//! per-day money computation, date-range aggregation, and salary/OT
//! cycle resolution.

mod breaks;
mod cycle_resolver;
mod cycles;
mod dates;
mod day_money;
mod net_hours;
mod rates;
mod summary;
mod time_of_day;

pub use breaks::{merge_intervals, normalize_breaks, overlap_minutes};
pub use cycle_resolver::{CycleContext, CycleResolution, resolve_cycles};
pub use cycles::{
    DateRange, cycle_range, cycle_range_by_anchor, cycle_range_by_end_month, month_range,
    pay_date_from_range,
};
pub use dates::{
    clamp_day, date_key, days_in_month, default_month_value, normalize_date_str,
    parse_month_value, prev_date, shift_month,
};
pub use day_money::compute_day_money;
pub use net_hours::{compute_net_hours, round2};
pub use rates::{Multipliers, derive_rates, resolve_multipliers};
pub use summary::compute_range_summary;
pub use time_of_day::{MINUTES_PER_DAY, MinuteRange, duration, normalize_range, parse_time_of_day};
