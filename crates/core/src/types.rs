// crates/core/src/types.rs

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Action name of the paginated employee listing.
pub const EMPLOYEES_ACTION: &str = "get_company_employees";
/// Action name of the department listing.
pub const DEPARTMENTS_ACTION: &str = "get_departments";

/// Body of `get_company_employees`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeesRequest {
    pub company_name: String,
    pub page: u32,
    pub limit: u32,
}

/// Body of `get_departments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentsRequest {
    pub company_name: String,
}

/// Fixed settings for a smoke run.
///
/// Nothing here is read from the environment; `Default` yields the values
/// the dashboard API is tested with locally.
#[derive(Debug, Clone)]
pub struct SmokeConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub company_name: String,
    pub page: u32,
    pub limit: u32,
}

impl SmokeConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8889/api.php";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
    pub const DEFAULT_COMPANY: &'static str = "WIZONE IT NETWORK INDIA PVT LTD";
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_LIMIT: u32 = 100;

    /// Same settings, pointed at another API entry point.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn employees_request(&self) -> EmployeesRequest {
        EmployeesRequest {
            company_name: self.company_name.clone(),
            page: self.page,
            limit: self.limit,
        }
    }

    pub fn departments_request(&self) -> DepartmentsRequest {
        DepartmentsRequest {
            company_name: self.company_name.clone(),
        }
    }

    /// The two cases of a run, employees first.
    pub fn cases(&self) -> Result<Vec<SmokeCase>> {
        Ok(vec![
            SmokeCase::new(EMPLOYEES_ACTION, &self.employees_request())?,
            SmokeCase::new(DEPARTMENTS_ACTION, &self.departments_request())?,
        ])
    }
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            company_name: Self::DEFAULT_COMPANY.to_string(),
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// One endpoint action together with the JSON body it is called with.
#[derive(Debug, Clone, PartialEq)]
pub struct SmokeCase {
    pub action: String,
    pub payload: Value,
}

impl SmokeCase {
    pub fn new<T: Serialize>(action: &str, payload: &T) -> Result<Self> {
        let payload = serde_json::to_value(payload)
            .with_context(|| format!("failed to encode payload for {}", action))?;
        Ok(Self {
            action: action.to_string(),
            payload,
        })
    }
}

/// A response whose body decoded as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionResponse {
    pub status: u16,
    pub body: Value,
}

/// Terminal state of a single case.
#[derive(Debug, Clone, PartialEq)]
pub enum CaseOutcome {
    Passed(ActionResponse),
    /// Full error chain, as printed.
    Failed(String),
}

impl CaseOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, CaseOutcome::Passed(_))
    }
}
