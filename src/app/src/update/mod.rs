mod auth;
mod device;
mod ui;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Auth(auth_event) => auth::handle(auth_event, model),
        Event::Device(device_event) => device::handle(device_event, model),
        Event::Ui(ui_event) => ui::handle(ui_event, model),
    }
}
