use anyhow::Result;
use crux_core::typegen::TypeGen;
use devconf_ui_core::{
    events::{AuthEvent, DeviceEvent, UiEvent},
    types::{FormEntry, PanelVisibility},
    App, BrowserOperation,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    gen.register_type::<AuthEvent>()?;
    gen.register_type::<DeviceEvent>()?;
    gen.register_type::<UiEvent>()?;

    // Enums reachable only through collections or effects
    gen.register_type::<FormEntry>()?;
    gen.register_type::<PanelVisibility>()?;
    gen.register_type::<BrowserOperation>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
