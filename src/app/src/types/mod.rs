//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - auth: Login and registration payloads
//! - device: Device payloads and the compare selection
//! - form: Submitted form data and its multipart encoding
//! - ui: Panel visibility

pub mod auth;
pub mod device;
pub mod form;
pub mod ui;

pub use auth::*;
pub use device::*;
pub use form::*;
pub use ui::*;
