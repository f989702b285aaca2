use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::PanelVisibility;

/// Application Model - the complete state
/// Also serves as the ViewModel. Everything else the dispatcher touches is
/// transient and lives only inside a single event.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    /// Panel id to visibility; panels not listed are hidden
    pub panels: BTreeMap<String, PanelVisibility>,
}

impl Model {
    pub fn panel(&self, id: &str) -> PanelVisibility {
        self.panels.get(id).copied().unwrap_or_default()
    }

    pub fn is_panel_visible(&self, id: &str) -> bool {
        self.panel(id) == PanelVisibility::Visible
    }

    pub fn set_panel(&mut self, id: impl Into<String>, visibility: PanelVisibility) {
        self.panels.insert(id.into(), visibility);
    }
}
