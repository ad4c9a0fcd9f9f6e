//! Fixed response bodies: delete confirmations and the service banner.

use serde::{Deserialize, Serialize};

/// `{"message": "..."}`, returned by deletes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn deleted(label: &str) -> Self {
        Message {
            message: format!("{} deleted successfully", label),
        }
    }
}

pub const FEATURES: &[&str] = &[
    "Accounts, contacts, emails, calls and call transcripts",
    "Full CRUD operations",
    "Relationship endpoints",
    "Cascading deletes",
    "Environment-based configuration",
];

#[derive(Serialize)]
pub struct Banner {
    pub message: &'static str,
    pub version: &'static str,
    pub features: &'static [&'static str],
}

pub fn banner() -> Banner {
    Banner {
        message: "CRM API is running!",
        version: env!("CARGO_PKG_VERSION"),
        features: FEATURES,
    }
}
