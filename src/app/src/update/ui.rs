use crux_core::{render::render, Command};

use crate::events::{Event, UiEvent};
use crate::model::Model;
use crate::types::PanelVisibility;
use crate::Effect;

/// Handle UI-related events (panel visibility)
///
/// Always renders, even when the model already holds the requested state:
/// the page markup may start out of sync with the model.
pub fn handle(event: UiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        UiEvent::ShowPanel { id } => model.set_panel(id, PanelVisibility::Visible),
        UiEvent::HidePanel { id } => model.set_panel(id, PanelVisibility::Hidden),
    }
    render()
}
