//! HTTP API module for the payroll engine.
//!
//! This module exposes the payroll run over HTTP for callers that have
//! already fetched their employee, attendance and request collections.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PayrollRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
