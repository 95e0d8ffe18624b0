use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Wire names of every field the validator can reject.
pub mod fields {
    pub const REQUEST: &str = "request";
    pub const ID: &str = "id";
    pub const VERSION: &str = "version";
    pub const REQUEST_TIME: &str = "requesttime";
    pub const TRANSACTION_ID: &str = "transactionID";
    pub const INDIVIDUAL_ID: &str = "individualId";
    pub const INDIVIDUAL_ID_TYPE: &str = "individualIdType";
    pub const OTP: &str = "otp";
    pub const AUTH_TYPE: &str = "authType";
    pub const PAGE_START: &str = "pageStart";
    pub const PAGE_FETCH: &str = "pageFetch";
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized {kind}: '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Kind of identifier carried in `individualId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdType {
    #[serde(rename = "UIN")]
    Uin,
    #[serde(rename = "VID")]
    Vid,
    #[serde(rename = "RID")]
    Rid,
}

impl IdType {
    pub const ALL: [IdType; 3] = [IdType::Uin, IdType::Vid, IdType::Rid];

    pub fn as_str(&self) -> &'static str {
        match self {
            IdType::Uin => "UIN",
            IdType::Vid => "VID",
            IdType::Rid => "RID",
        }
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the wire name.
impl FromStr for IdType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdType::ALL
            .into_iter()
            .find(|id_type| id_type.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "individual id type",
                value: s.to_string(),
            })
    }
}

/// Business operation a request envelope is addressed to.
///
/// Discriminants are the positions in [`Operation::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    AuthLock = 0,
    AuthUnlock = 1,
    #[serde(rename = "e-uin")]
    Euin = 2,
    AuthHistory = 3,
    Reprint = 4,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::AuthLock,
        Operation::AuthUnlock,
        Operation::Euin,
        Operation::AuthHistory,
        Operation::Reprint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::AuthLock => "auth-lock",
            Operation::AuthUnlock => "auth-unlock",
            Operation::Euin => "e-uin",
            Operation::AuthHistory => "auth-history",
            Operation::Reprint => "reprint",
        }
    }

    /// Position of this operation in [`Operation::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|operation| operation.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "operation",
                value: s.to_string(),
            })
    }
}

/// Direction of an auth lock request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthTypeStatus {
    Lock,
    Unlock,
}

impl AuthTypeStatus {
    pub fn operation(&self) -> Operation {
        match self {
            AuthTypeStatus::Lock => Operation::AuthLock,
            AuthTypeStatus::Unlock => Operation::AuthUnlock,
        }
    }
}

/// Versioned request wrapper shared by every resident operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope<P> {
    pub id: Option<String>,
    pub version: Option<String>,
    #[serde(rename = "requesttime")]
    pub request_time: Option<String>,
    pub request: Option<P>,
}

impl<P> RequestEnvelope<P> {
    pub fn new(
        id: impl Into<String>,
        version: impl Into<String>,
        request_time: impl Into<String>,
        request: P,
    ) -> Self {
        Self {
            id: Some(id.into()),
            version: Some(version.into()),
            request_time: Some(request_time.into()),
            request: Some(request),
        }
    }
}

// Manual impl so `P` does not need to be `Default`.
impl<P> Default for RequestEnvelope<P> {
    fn default() -> Self {
        Self {
            id: None,
            version: None,
            request_time: None,
            request: None,
        }
    }
}

/// Read access to the payload fields the rule chains inspect.
///
/// Operation-specific accessors default to `None` so payloads only
/// override what they actually carry.
pub trait ResidentRequest {
    fn transaction_id(&self) -> Option<&str>;
    fn individual_id(&self) -> Option<&str>;
    fn individual_id_type(&self) -> Option<&str>;
    fn otp(&self) -> Option<&str>;

    fn auth_types(&self) -> Option<&[String]> {
        None
    }

    fn page_start(&self) -> Option<&str> {
        None
    }

    fn page_fetch(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthLockOrUnlockRequest {
    #[serde(rename = "transactionID")]
    pub transaction_id: Option<String>,
    #[serde(rename = "individualId")]
    pub individual_id: Option<String>,
    #[serde(rename = "individualIdType")]
    pub individual_id_type: Option<String>,
    pub otp: Option<String>,
    #[serde(rename = "authType")]
    pub auth_type: Option<Vec<String>>,
}

impl ResidentRequest for AuthLockOrUnlockRequest {
    fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    fn individual_id(&self) -> Option<&str> {
        self.individual_id.as_deref()
    }

    fn individual_id_type(&self) -> Option<&str> {
        self.individual_id_type.as_deref()
    }

    fn otp(&self) -> Option<&str> {
        self.otp.as_deref()
    }

    fn auth_types(&self) -> Option<&[String]> {
        self.auth_type.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EuinRequest {
    #[serde(rename = "transactionID")]
    pub transaction_id: Option<String>,
    #[serde(rename = "individualId")]
    pub individual_id: Option<String>,
    #[serde(rename = "individualIdType")]
    pub individual_id_type: Option<String>,
    pub otp: Option<String>,
}

impl ResidentRequest for EuinRequest {
    fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    fn individual_id(&self) -> Option<&str> {
        self.individual_id.as_deref()
    }

    fn individual_id_type(&self) -> Option<&str> {
        self.individual_id_type.as_deref()
    }

    fn otp(&self) -> Option<&str> {
        self.otp.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthHistoryRequest {
    #[serde(rename = "transactionID")]
    pub transaction_id: Option<String>,
    #[serde(rename = "individualId")]
    pub individual_id: Option<String>,
    #[serde(rename = "individualIdType")]
    pub individual_id_type: Option<String>,
    pub otp: Option<String>,
    #[serde(rename = "pageStart")]
    pub page_start: Option<String>,
    #[serde(rename = "pageFetch")]
    pub page_fetch: Option<String>,
}

impl ResidentRequest for AuthHistoryRequest {
    fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    fn individual_id(&self) -> Option<&str> {
        self.individual_id.as_deref()
    }

    fn individual_id_type(&self) -> Option<&str> {
        self.individual_id_type.as_deref()
    }

    fn otp(&self) -> Option<&str> {
        self.otp.as_deref()
    }

    fn page_start(&self) -> Option<&str> {
        self.page_start.as_deref()
    }

    fn page_fetch(&self) -> Option<&str> {
        self.page_fetch.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReprintRequest {
    #[serde(rename = "transactionID")]
    pub transaction_id: Option<String>,
    #[serde(rename = "individualId")]
    pub individual_id: Option<String>,
    #[serde(rename = "individualIdType")]
    pub individual_id_type: Option<String>,
    pub otp: Option<String>,
}

impl ResidentRequest for ReprintRequest {
    fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    fn individual_id(&self) -> Option<&str> {
        self.individual_id.as_deref()
    }

    fn individual_id_type(&self) -> Option<&str> {
        self.individual_id_type.as_deref()
    }

    fn otp(&self) -> Option<&str> {
        self.otp.as_deref()
    }
}

/// Per-call context handed to every validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    pub operation: Operation,
    /// Reference instant for clock-skew checks.
    pub now: DateTime<Utc>,
}

impl RequestContext {
    pub fn new(operation: Operation) -> Self {
        Self::at(operation, Utc::now())
    }

    pub fn at(operation: Operation, now: DateTime<Utc>) -> Self {
        Self { operation, now }
    }
}
