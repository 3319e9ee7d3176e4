//! Common types and table logic shared between switchdesk-ui and switchdesk-cli

pub mod filter;
pub mod inventory;
pub mod paging;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub use inventory::{
    Action, Completion, FormMode, InventoryState, Mutation, MutationOutcome, MutationRequest,
    Phase, StalePolicy, TableRow, TableView, Ticket,
};
pub use paging::PageSize;

/// Server-assigned switch identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SwitchId(pub String);

impl SwitchId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SwitchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SwitchId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SwitchId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Switch inventory record as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchRecord {
    #[serde(rename = "_id")]
    pub id: SwitchId,
    #[serde(rename = "WifiName")]
    pub wifi_name: String,
    #[serde(rename = "SwitchLocation")]
    pub switch_location: String,
    #[serde(rename = "SwitchName")]
    pub switch_name: String,
    #[serde(rename = "SwitchPort", default)]
    pub switch_port: Option<String>,
    #[serde(rename = "SwitchIPAddress")]
    pub switch_ip_address: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl SwitchRecord {
    /// Text of every field, in column order, as matched by the search box
    pub fn field_texts(&self) -> [Cow<'_, str>; 8] {
        [
            Cow::Borrowed(self.id.as_str()),
            Cow::Borrowed(&self.wifi_name),
            Cow::Borrowed(&self.switch_location),
            Cow::Borrowed(&self.switch_name),
            Cow::Borrowed(self.port()),
            Cow::Borrowed(&self.switch_ip_address),
            Cow::Owned(timestamp_text(&self.created_at)),
            Cow::Owned(timestamp_text(&self.updated_at)),
        ]
    }

    /// Connected port, empty when the switch has none recorded
    pub fn port(&self) -> &str {
        self.switch_port.as_deref().unwrap_or("")
    }

    /// Copy the editable fields into a form draft
    pub fn draft(&self) -> SwitchDraft {
        SwitchDraft {
            wifi_name: self.wifi_name.clone(),
            switch_location: self.switch_location.clone(),
            switch_name: self.switch_name.clone(),
            switch_port: self.port().to_string(),
            switch_ip_address: self.switch_ip_address.clone(),
        }
    }
}

/// ISO-8601 form the backend emits, e.g. `2024-03-01T09:15:00.000Z`
pub fn timestamp_text(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Editable fields of a switch, also the request body for create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchDraft {
    #[serde(rename = "WifiName")]
    pub wifi_name: String,
    #[serde(rename = "SwitchLocation")]
    pub switch_location: String,
    #[serde(rename = "SwitchName")]
    pub switch_name: String,
    #[serde(rename = "SwitchPort")]
    pub switch_port: String,
    #[serde(rename = "SwitchIPAddress")]
    pub switch_ip_address: String,
}

impl SwitchDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::WifiName => &self.wifi_name,
            DraftField::SwitchLocation => &self.switch_location,
            DraftField::SwitchName => &self.switch_name,
            DraftField::SwitchPort => &self.switch_port,
            DraftField::SwitchIpAddress => &self.switch_ip_address,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::WifiName => &mut self.wifi_name,
            DraftField::SwitchLocation => &mut self.switch_location,
            DraftField::SwitchName => &mut self.switch_name,
            DraftField::SwitchPort => &mut self.switch_port,
            DraftField::SwitchIpAddress => &mut self.switch_ip_address,
        };
        *slot = value;
    }
}

/// One editable input of the switch form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    WifiName,
    SwitchLocation,
    SwitchName,
    SwitchPort,
    SwitchIpAddress,
}

impl DraftField {
    /// Form order
    pub const ALL: [DraftField; 5] = [
        DraftField::WifiName,
        DraftField::SwitchLocation,
        DraftField::SwitchName,
        DraftField::SwitchPort,
        DraftField::SwitchIpAddress,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::WifiName => "WiFi Name",
            Self::SwitchLocation => "Switch Location",
            Self::SwitchName => "Switch Name",
            Self::SwitchPort => "Connected Port",
            Self::SwitchIpAddress => "Switch IP Address",
        }
    }

    /// JSON key, also used as the input's `name`
    pub fn key(self) -> &'static str {
        match self {
            Self::WifiName => "WifiName",
            Self::SwitchLocation => "SwitchLocation",
            Self::SwitchName => "SwitchName",
            Self::SwitchPort => "SwitchPort",
            Self::SwitchIpAddress => "SwitchIPAddress",
        }
    }

    /// Only the port may be left blank
    pub fn is_required(self) -> bool {
        !matches!(self, Self::SwitchPort)
    }
}

/// The single failure category shown to the user: network error or non-2xx response
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Request failed: {reason}")]
pub struct RequestFailed {
    pub reason: String,
}

impl RequestFailed {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Failure for a response with a non-success status
    pub fn status(status: u16) -> Self {
        Self::new(format!("HTTP {}", status))
    }
}

/// Library error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Request(#[from] RequestFailed),

    #[error("Invalid page size: {0} (expected 10, 20, 50, 100 or all)")]
    InvalidPageSize(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD_JSON: &str = r#"{
        "_id": "65f1c0ffee0000000000a001",
        "WifiName": "Corp-5G",
        "SwitchLocation": "Building A / Floor 2",
        "SwitchName": "sw-a2-01",
        "SwitchPort": "Gi1/0/24",
        "SwitchIPAddress": "10.20.2.1",
        "createdAt": "2024-03-01T09:15:00.000Z",
        "updatedAt": "2024-03-02T17:45:30.250Z",
        "__v": 0
    }"#;

    #[test]
    fn test_record_deserialization() {
        let record: SwitchRecord = serde_json::from_str(RECORD_JSON).unwrap();
        assert_eq!(record.id.as_str(), "65f1c0ffee0000000000a001");
        assert_eq!(record.wifi_name, "Corp-5G");
        assert_eq!(record.switch_port.as_deref(), Some("Gi1/0/24"));
        assert_eq!(record.switch_ip_address, "10.20.2.1");
        assert_eq!(timestamp_text(&record.updated_at), "2024-03-02T17:45:30.250Z");
    }

    #[test]
    fn test_record_without_port() {
        let json = RECORD_JSON.replace(r#""SwitchPort": "Gi1/0/24","#, "");
        let record: SwitchRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.switch_port, None);
        assert_eq!(record.port(), "");

        let json = RECORD_JSON.replace(r#""Gi1/0/24""#, "null");
        let record: SwitchRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.switch_port, None);
    }

    #[test]
    fn test_draft_body_uses_wire_keys() {
        let draft = SwitchDraft {
            wifi_name: "Guest".to_string(),
            switch_location: "Lobby".to_string(),
            switch_name: "sw-lobby".to_string(),
            switch_port: String::new(),
            switch_ip_address: "10.0.0.9".to_string(),
        };

        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["WifiName"], "Guest");
        assert_eq!(body["SwitchLocation"], "Lobby");
        assert_eq!(body["SwitchName"], "sw-lobby");
        assert_eq!(body["SwitchPort"], "");
        assert_eq!(body["SwitchIPAddress"], "10.0.0.9");
        assert_eq!(body.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_draft_from_record() {
        let record: SwitchRecord = serde_json::from_str(RECORD_JSON).unwrap();
        let draft = record.draft();
        for field in DraftField::ALL {
            assert_eq!(draft.get(field), record.field_texts()[field_column(field)]);
        }
    }

    fn field_column(field: DraftField) -> usize {
        match field {
            DraftField::WifiName => 1,
            DraftField::SwitchLocation => 2,
            DraftField::SwitchName => 3,
            DraftField::SwitchPort => 4,
            DraftField::SwitchIpAddress => 5,
        }
    }

    #[test]
    fn test_draft_set_and_required_fields() {
        let mut draft = SwitchDraft::default();
        draft.set(DraftField::SwitchName, "core-1".to_string());
        assert_eq!(draft.switch_name, "core-1");
        assert_eq!(draft.get(DraftField::SwitchName), "core-1");

        let required: Vec<_> = DraftField::ALL.into_iter().filter(|f| f.is_required()).collect();
        assert_eq!(required.len(), 4);
        assert!(!DraftField::SwitchPort.is_required());
    }

    #[test]
    fn test_request_failed_display() {
        assert_eq!(RequestFailed::status(503).to_string(), "Request failed: HTTP 503");
        let err: Error = RequestFailed::new("connection refused").into();
        assert_eq!(err.to_string(), "Request failed: connection refused");
    }
}
