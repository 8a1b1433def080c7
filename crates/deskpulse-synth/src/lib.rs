//! Distribution-preserving synthetic data for the dashboard dataset
//!
//! Everything here draws from a caller-supplied random source, so a seeded
//! run reproduces byte-identical fixtures.

mod bundle;
mod daily;
mod distribution;
mod pulse;
mod quality;
pub mod reference;

pub use bundle::{generate_week, WeekBundle, DEFAULT_BACKFILL_WEEKS};
pub use daily::generate_daily;
pub use distribution::{split_week, vary, weighted_spread};
pub use pulse::{generate_pulse, generate_tickets};
pub use quality::{generate_csat, generate_qa};
