use serde::{Deserialize, Serialize};

use crate::types::*;

/// Authentication domain events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    Login {
        username: String,
        password: String,
    },
    Register(RegistrationRequest),
    Logout,

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    LoginResponse(Result<(), String>),
    #[serde(skip)]
    RegisterResponse(Result<(), String>),
    #[serde(skip)]
    LogoutResponse(Result<(), String>),
}

/// Device domain events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    AddDevice {
        form: FormData,
    },
    UpdateDeviceConfig {
        device_id: DeviceId,
        form: FormData,
    },
    DownloadDeviceConfig {
        device_id: DeviceId,
    },
    DeleteDevice {
        device_id: DeviceId,
    },
    CompareConfigs {
        form: FormData,
    },

    // HTTP responses (internal events, skipped from serialization)
    /// Device creation finished; `config` holds the form fields still to upload
    #[serde(skip)]
    DeviceCreated {
        result: Result<DeviceRead, String>,
        config: FormData,
    },
    #[serde(skip)]
    NewDeviceConfigUploaded(Result<(), String>),
    #[serde(skip)]
    DeviceConfigUploaded {
        device_id: DeviceId,
        result: Result<(), String>,
    },
    #[serde(skip)]
    DeleteDeviceResponse(Result<(), String>),
}

/// UI domain events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ShowPanel { id: String },
    HidePanel { id: String },
}

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    Auth(AuthEvent),
    Device(DeviceEvent),
    Ui(UiEvent),
}
