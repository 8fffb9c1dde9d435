// accessgen-core/src/domain/access/record.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Column order of the historical access table, as written to CSV.
pub const ACCESS_TABLE_COLUMNS: [&str; 8] = [
    "UserID",
    "Name",
    "Email",
    "Department",
    "ReportingManager",
    "Website",
    "RequestStatus",
    "Reason",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Sales,
    Marketing,
    Finance,
    #[serde(rename = "Human Resources")]
    HumanResources,
    #[serde(rename = "Customer Support")]
    CustomerSupport,
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "Product Management")]
    ProductManagement,
    Legal,
    Operations,
}

impl Department {
    pub const ALL: [Department; 10] = [
        Self::Engineering,
        Self::Sales,
        Self::Marketing,
        Self::Finance,
        Self::HumanResources,
        Self::CustomerSupport,
        Self::It,
        Self::ProductManagement,
        Self::Legal,
        Self::Operations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Sales => "Sales",
            Self::Marketing => "Marketing",
            Self::Finance => "Finance",
            Self::HumanResources => "Human Resources",
            Self::CustomerSupport => "Customer Support",
            Self::It => "IT",
            Self::ProductManagement => "Product Management",
            Self::Legal => "Legal",
            Self::Operations => "Operations",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Department {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownDepartment(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = DomainError;

    // Case-sensitive: the table stores the literal values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Approved" => Ok(Self::Approved),
            "Rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::UnknownStatus(s.to_string())),
        }
    }
}

/// One synthetic (user, website) access request and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccessRecord {
    #[serde(rename = "UserID")]
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub department: Department,
    pub reporting_manager: String,
    pub website: String,
    pub request_status: RequestStatus,
    pub reason: String,
}

impl AccessRecord {
    pub fn is_approved(&self) -> bool {
        self.request_status.is_approved()
    }
}

/// `USER_001`, `USER_002`, ... ; widens naturally past 999.
pub fn format_user_id(index: usize) -> String {
    format!("USER_{:03}", index)
}
