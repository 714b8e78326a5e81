//! Configuration loading and management for the payroll engine.
//!
//! Payroll policy (OT multipliers, weekly holidays, custom holidays, late
//! deduction policy, standard hours) is loaded from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Weekly holidays: {:?}", config.config().weekly_holidays);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LateDeductionType, SystemConfig};
