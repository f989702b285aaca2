use serde::{Deserialize, Serialize};

/// Registration dialog
pub const SIGNUP_PANEL: &str = "modalSignup";
/// Login dialog
pub const SIGNIN_PANEL: &str = "modalSignin";

/// Visibility of a modal panel. The shell maps it onto the element's
/// `style.display`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PanelVisibility {
    #[default]
    Hidden,
    Visible,
}

impl PanelVisibility {
    pub fn css_display(self) -> &'static str {
        match self {
            Self::Hidden => "none",
            Self::Visible => "block",
        }
    }
}
