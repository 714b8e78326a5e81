//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structure for the
//! `/payroll/calculate` endpoint.

use serde::{Deserialize, Serialize};

use crate::config::SystemConfig;
use crate::models::{AttendanceEvent, Employee, OtRequest, PayrollParameters, SwapRequest};

/// Request body for the `/payroll/calculate` endpoint.
///
/// Carries the already-fetched collections for one payroll run. Record
/// collections may be omitted and default to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The period and employee filters for the run.
    pub parameters: PayrollParameters,
    /// The employees to consider.
    pub employees: Vec<Employee>,
    /// Attendance events for the employees.
    #[serde(default)]
    pub attendance: Vec<AttendanceEvent>,
    /// Overtime requests, of any status.
    #[serde(default)]
    pub ot_requests: Vec<OtRequest>,
    /// Shift swap requests, of any status.
    #[serde(default)]
    pub swap_requests: Vec<SwapRequest>,
    /// Replaces the server's loaded configuration for this request.
    #[serde(default)]
    pub config: Option<SystemConfig>,
}
