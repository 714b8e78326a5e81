//! Attendance-to-payroll rules engine.
//!
//! This crate turns attendance events, approved overtime and shift-swap
//! requests, custom holidays and a system configuration into one payroll
//! line item per employee, with an audit trace of every rule applied.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
