//! Browser command definitions.
//!
//! Operations the Shell performs on the page on behalf of the Core. None of
//! them produce output, so they are sent as notifications.

use crux_core::{capability::Operation, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum BrowserOperation {
    /// Replace the current location (`window.location.replace`)
    Replace { location: String },
    /// Stop the triggering DOM event from bubbling further
    StopPropagation,
    /// Suppress the default action of the triggering DOM event (form submit)
    PreventDefault,
}

impl Operation for BrowserOperation {
    type Output = ();
}

/// Command-based browser API
pub struct Browser<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Browser<Effect, Event>
where
    Effect: Send + From<crux_core::Request<BrowserOperation>> + 'static,
    Event: Send + 'static,
{
    /// Navigate to `location`, replacing the current history entry
    pub fn replace(location: impl Into<String>) -> Command<Effect, Event> {
        Self::notify(BrowserOperation::Replace {
            location: location.into(),
        })
    }

    pub fn stop_propagation() -> Command<Effect, Event> {
        Self::notify(BrowserOperation::StopPropagation)
    }

    pub fn prevent_default() -> Command<Effect, Event> {
        Self::notify(BrowserOperation::PreventDefault)
    }

    fn notify(operation: BrowserOperation) -> Command<Effect, Event> {
        Command::<Effect, Event>::notify_shell(operation).into()
    }
}
