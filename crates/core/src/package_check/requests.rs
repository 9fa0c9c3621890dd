//! Request parsing for the package-check webservices.
//!
//! Each HTTP verb carries its own body schema. Parsing happens up front so the
//! handlers only ever see a well-formed [`PackageCheckRequest`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::RequestError;
use super::types::PackageStatus;

/// Plain-text response bodies returned by the webservices.
pub mod responses {
    pub const NO_MATCHES: &str = "No Matches";
    pub const NOT_VALID_INPUT: &str = "Not valid input";
    pub const NOT_IMPLEMENTED: &str = "Not implemented, go away";
    pub const SUCCESS: &str = "Success";
    pub const WAKING_UP: &str = "Waking up webservice...";
    pub const AUTH_SUCCESS: &str = "RPA Authentication successful";
}

/// A package submitted for checking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewPackageCheck {
    /// Generated when absent.
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PackageStatus>,
    #[serde(rename = "LCI", default, skip_serializing_if = "Option::is_none")]
    pub lci: Option<String>,
    #[serde(rename = "SAP", default, skip_serializing_if = "Option::is_none")]
    pub sap: Option<String>,
}

impl NewPackageCheck {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: PackageStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// POST body: one package or a batch of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum InsertPackagesBody {
    Batch(Vec<NewPackageCheck>),
    Single(NewPackageCheck),
}

impl InsertPackagesBody {
    pub fn into_vec(self) -> Vec<NewPackageCheck> {
        match self {
            InsertPackagesBody::Batch(packages) => packages,
            InsertPackagesBody::Single(package) => vec![package],
        }
    }
}

/// PATCH body: the package to mark processed.
///
/// Robots may send the whole package back; only `Id` is used; the other
/// package fields are accepted and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePackageRequest {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PackageStatus>,
    #[serde(rename = "LCI", default, skip_serializing_if = "Option::is_none")]
    pub lci: Option<String>,
    #[serde(rename = "SAP", default, skip_serializing_if = "Option::is_none")]
    pub sap: Option<String>,
}

impl UpdatePackageRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: None,
            lci: None,
            sap: None,
        }
    }
}

/// A parsed package-check request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageCheckRequest {
    /// GET: list pending packages.
    QueryPending,
    /// GET with the wake-up flag: answer without touching the store.
    WakeUp,
    /// POST: insert or replace a batch of packages.
    Insert(Vec<NewPackageCheck>),
    /// PATCH: mark one package processed.
    Update(UpdatePackageRequest),
    /// Any other verb.
    Unsupported(String),
}

impl PackageCheckRequest {
    /// Parses a request from its verb, wake-up flag and raw body.
    ///
    /// GET and unsupported verbs ignore the body.
    pub fn parse(method: &str, wake_up: bool, body: &[u8]) -> Result<Self, RequestError> {
        match method {
            "GET" if wake_up => Ok(PackageCheckRequest::WakeUp),
            "GET" => Ok(PackageCheckRequest::QueryPending),
            "POST" => {
                let packages: InsertPackagesBody = parse_body(body)?;
                Ok(PackageCheckRequest::Insert(packages.into_vec()))
            }
            "PATCH" => {
                let update: UpdatePackageRequest = parse_body(body)?;
                if update.id.is_empty() {
                    return Err(RequestError::EmptyId);
                }
                Ok(PackageCheckRequest::Update(update))
            }
            other => Ok(PackageCheckRequest::Unsupported(other.to_string())),
        }
    }
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, RequestError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(RequestError::MissingBody);
    }
    serde_json::from_slice(body).map_err(|e| RequestError::InvalidBody(e.to_string()))
}
