use serde::{Deserialize, Serialize};

use super::form::FormData;

/// Server-assigned device identifier
pub type DeviceId = u64;

/// Form field carrying the device name
pub const NAME_FIELD: &str = "name";
/// Form field carrying the device IP address
pub const IP_ADDRESS_FIELD: &str = "ip_address";
/// Form fields of the compare selection
pub const DEVICE1_FIELD: &str = "device1_id";
pub const DEVICE2_FIELD: &str = "device2_id";

/// Body of `POST /api/devices`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceCreateRequest {
    pub name: Option<String>,
    pub ip_address: Option<String>,
}

impl DeviceCreateRequest {
    /// Read name and IP address from a submitted form. A missing field is
    /// serialized as `null`, which the backend rejects.
    pub fn from_form(form: &FormData) -> Self {
        Self {
            name: form.get(NAME_FIELD).map(str::to_string),
            ip_address: form.get(IP_ADDRESS_FIELD).map(str::to_string),
        }
    }
}

/// Device as returned by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceRead {
    pub id: DeviceId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub config_file_path: Option<String>,
}

/// Two devices picked for a configuration diff
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompareSelection {
    pub device1_id: String,
    pub device2_id: String,
}

impl CompareSelection {
    /// Returns `None` unless both ids were submitted with a non-empty value.
    pub fn from_form(form: &FormData) -> Option<Self> {
        Some(Self {
            device1_id: form.get_non_empty(DEVICE1_FIELD)?.to_string(),
            device2_id: form.get_non_empty(DEVICE2_FIELD)?.to_string(),
        })
    }

    /// Location of the compare page for this selection. Both ids are
    /// form-urlencoded into the query, so `a b` becomes `a+b`.
    pub fn location(&self) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair(DEVICE1_FIELD, &self.device1_id)
            .append_pair(DEVICE2_FIELD, &self.device2_id)
            .finish();
        format!("/compare?{query}")
    }
}
