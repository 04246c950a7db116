#![cfg(target_arch = "wasm32")]
use crate::bindings::TriggerBinding;
use crate::engine::{with_engine, Engine};
use crate::js_engine::{JsEngine, JsEngineHandle};
use crate::layout::PanelConfig;
use crate::mailbox::{CommandMailbox, PanelUpdate};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Widget-to-command bindings, one stateful object per widget.
pub mod bindings;
pub mod constants;
mod dom;
/// The engine command surface the panel drives.
pub mod engine;
mod events;
pub mod js_engine;
/// Declarative widget tree materialized by `mount`.
pub mod layout;
/// Last-write-wins command buffer drained once per frame.
pub mod mailbox;
mod mount;
pub mod panel;

/// Mounts a panel driving a Rust-side engine living in the same module.
pub use mount::mount;

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("slime-panel starting");
    Ok(())
}

fn mount_js(handle: JsEngineHandle, config: PanelConfig) -> anyhow::Result<()> {
    let engine: Rc<RefCell<dyn Engine>> = Rc::new(RefCell::new(JsEngine::new(handle)?));
    mount::mount(&config, engine)
}

/// Mounts the panel against a JS object exposing the engine commands.
#[wasm_bindgen]
pub fn mount_panel(engine: JsEngineHandle) -> Result<(), JsValue> {
    mount_js(engine, PanelConfig::default()).map_err(to_js)
}

/// Like `mount_panel`, with `texts[i]`/`paths[i]` as the example cycle.
#[wasm_bindgen]
pub fn mount_panel_with_examples(
    engine: JsEngineHandle,
    texts: Vec<String>,
    paths: Vec<String>,
) -> Result<(), JsValue> {
    PanelConfig::with_examples(&texts, &paths)
        .map_err(anyhow::Error::from)
        .and_then(|config| mount_js(engine, config))
        .map_err(to_js)
}

/// Panel whose engine is a coalescing mailbox. The host drains it once per
/// frame, either with `flush_to` or by reading `take_frame`, so only the last
/// value of each command between two frames reaches the engine.
#[wasm_bindgen]
pub struct PanelMailbox {
    inner: Rc<RefCell<CommandMailbox>>,
}

#[wasm_bindgen]
impl PanelMailbox {
    #[wasm_bindgen(constructor)]
    pub fn new() -> PanelMailbox {
        PanelMailbox {
            inner: Rc::new(RefCell::new(CommandMailbox::new())),
        }
    }

    pub fn mount(&self) -> Result<(), JsValue> {
        let engine: Rc<RefCell<dyn Engine>> = self.inner.clone();
        mount::mount(&PanelConfig::default(), engine).map_err(to_js)
    }

    pub fn has_pending(&self) -> bool {
        self.inner.borrow().has_pending()
    }

    /// Queues a quality preset by name, e.g. from a host keyboard shortcut.
    pub fn select_quality(&self, name: &str) -> Result<(), JsValue> {
        let trigger = TriggerBinding::quality_named(name)
            .map_err(anyhow::Error::from)
            .map_err(to_js)?;
        with_engine(&self.inner, |mb| trigger.activate(mb));
        Ok(())
    }

    pub fn select_style(&self, name: &str) -> Result<(), JsValue> {
        let trigger = TriggerBinding::style_named(name)
            .map_err(anyhow::Error::from)
            .map_err(to_js)?;
        with_engine(&self.inner, |mb| trigger.activate(mb));
        Ok(())
    }

    /// Drains pending commands for hosts that apply them field by field.
    pub fn take_frame(&self) -> PanelFrame {
        PanelFrame {
            update: with_engine(&self.inner, CommandMailbox::take).unwrap_or_default(),
        }
    }

    /// Replays pending commands onto `engine`; returns how many were sent.
    /// The mailbox is drained before the first JS call, so commands the
    /// engine triggers while replaying wait for the next frame.
    pub fn flush_to(&self, engine: JsEngineHandle) -> usize {
        let mut target = JsEngine::unchecked(engine);
        let Some(update) = with_engine(&self.inner, CommandMailbox::take) else {
            return 0;
        };
        let sent = update.replay(&mut target);
        if sent > 0 {
            log::debug!("[mailbox] flushed {} commands", sent);
        }
        sent
    }
}

impl Default for PanelMailbox {
    fn default() -> Self {
        Self::new()
    }
}

/// One drained frame of panel commands. Unset fields are `undefined` in JS.
#[wasm_bindgen]
pub struct PanelFrame {
    update: PanelUpdate,
}

#[wasm_bindgen]
impl PanelFrame {
    pub fn is_empty(&self) -> bool {
        self.update.is_empty()
    }

    pub fn quality_preset(&self) -> Option<String> {
        self.update.quality_preset.map(|p| p.as_str().to_string())
    }

    pub fn style_preset(&self) -> Option<String> {
        self.update.style_preset.map(|p| p.as_str().to_string())
    }

    pub fn text(&self) -> Option<String> {
        self.update.text.clone()
    }

    pub fn direction_influence_image_path(&self) -> Option<String> {
        self.update.direction_influence_image_path.clone()
    }

    pub fn disable_direction_influence_image(&self) -> bool {
        self.update.disable_direction_influence_image
    }

    /// Slider position in \[0, 1\].
    pub fn time_scale(&self) -> Option<f32> {
        self.update.time_scale
    }

    /// Simulation rate the time slider asks for.
    pub fn time_scale_factor(&self) -> Option<f32> {
        self.update.time_scale_factor()
    }

    pub fn direction_influence_scale(&self) -> Option<f32> {
        self.update.direction_influence_scale
    }

    pub fn direction_influence_render_mix(&self) -> Option<f32> {
        self.update.direction_influence_render_mix
    }

    pub fn render_bw(&self) -> Option<bool> {
        self.update.render_bw
    }

    pub fn enabled(&self) -> Option<bool> {
        self.update.enabled
    }

    pub fn debug_gui_enabled(&self) -> Option<bool> {
        self.update.debug_gui_enabled
    }
}
