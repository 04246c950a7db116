//! Engine implemented by a JavaScript object.
//!
//! Any object exposing the eleven command methods will do. A method that
//! throws is reported on the console and otherwise ignored: the binding that
//! issued it has already updated its local state and does not roll back.

use crate::engine::{Engine, EngineCommand, QualityPreset, StylePreset};
use anyhow::bail;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type JsEngineHandle;

    #[wasm_bindgen(method, catch)]
    fn set_quality_preset(this: &JsEngineHandle, preset: &str) -> Result<(), JsValue>;
    #[wasm_bindgen(method, catch)]
    fn set_style_preset(this: &JsEngineHandle, preset: &str) -> Result<(), JsValue>;
    #[wasm_bindgen(method, catch)]
    fn set_text(this: &JsEngineHandle, text: &str) -> Result<(), JsValue>;
    #[wasm_bindgen(method, catch)]
    fn set_direction_influence_image_path(this: &JsEngineHandle, path: &str) -> Result<(), JsValue>;
    #[wasm_bindgen(method, catch)]
    fn disable_direction_influence_image(this: &JsEngineHandle) -> Result<(), JsValue>;
    #[wasm_bindgen(method, catch)]
    fn set_time_scale(this: &JsEngineHandle, scale: f32) -> Result<(), JsValue>;
    #[wasm_bindgen(method, catch)]
    fn set_direction_influence_scale(this: &JsEngineHandle, scale: f32) -> Result<(), JsValue>;
    #[wasm_bindgen(method, catch)]
    fn set_direction_influence_render_mix(this: &JsEngineHandle, mix: f32) -> Result<(), JsValue>;
    #[wasm_bindgen(method, catch)]
    fn set_render_bw(this: &JsEngineHandle, bw: bool) -> Result<(), JsValue>;
    #[wasm_bindgen(method, catch)]
    fn set_enabled(this: &JsEngineHandle, enabled: bool) -> Result<(), JsValue>;
    #[wasm_bindgen(method, catch)]
    fn set_debug_gui_enabled(this: &JsEngineHandle, enabled: bool) -> Result<(), JsValue>;
}

pub struct JsEngine {
    handle: JsEngineHandle,
}

impl JsEngine {
    /// Wraps `handle` after checking that every command is callable.
    pub fn new(handle: JsEngineHandle) -> anyhow::Result<Self> {
        let missing: Vec<&str> = EngineCommand::METHOD_NAMES
            .iter()
            .copied()
            .filter(|name| {
                js_sys::Reflect::get(&handle, &JsValue::from_str(name))
                    .map(|f| !f.is_function())
                    .unwrap_or(true)
            })
            .collect();
        if !missing.is_empty() {
            bail!("engine object lacks methods: {}", missing.join(", "));
        }
        Ok(Self { handle })
    }

    /// Wraps `handle` as-is; missing methods surface as logged call failures.
    pub fn unchecked(handle: JsEngineHandle) -> Self {
        Self { handle }
    }
}

fn report(method: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::error!("[engine] {} threw: {:?}", method, e);
    }
}

impl Engine for JsEngine {
    fn set_quality_preset(&mut self, preset: QualityPreset) {
        report("set_quality_preset", self.handle.set_quality_preset(preset.as_str()));
    }

    fn set_style_preset(&mut self, preset: StylePreset) {
        report("set_style_preset", self.handle.set_style_preset(preset.as_str()));
    }

    fn set_text(&mut self, text: &str) {
        report("set_text", self.handle.set_text(text));
    }

    fn set_direction_influence_image_path(&mut self, path: &str) {
        report(
            "set_direction_influence_image_path",
            self.handle.set_direction_influence_image_path(path),
        );
    }

    fn disable_direction_influence_image(&mut self) {
        report(
            "disable_direction_influence_image",
            self.handle.disable_direction_influence_image(),
        );
    }

    fn set_time_scale(&mut self, scale: f32) {
        report("set_time_scale", self.handle.set_time_scale(scale));
    }

    fn set_direction_influence_scale(&mut self, scale: f32) {
        report(
            "set_direction_influence_scale",
            self.handle.set_direction_influence_scale(scale),
        );
    }

    fn set_direction_influence_render_mix(&mut self, mix: f32) {
        report(
            "set_direction_influence_render_mix",
            self.handle.set_direction_influence_render_mix(mix),
        );
    }

    fn set_render_bw(&mut self, bw: bool) {
        report("set_render_bw", self.handle.set_render_bw(bw));
    }

    fn set_enabled(&mut self, enabled: bool) {
        report("set_enabled", self.handle.set_enabled(enabled));
    }

    fn set_debug_gui_enabled(&mut self, enabled: bool) {
        report("set_debug_gui_enabled", self.handle.set_debug_gui_enabled(enabled));
    }
}
