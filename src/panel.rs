use crate::constants::{DEBUG_GUI_INITIAL, DISPLAY_HIDDEN, DISPLAY_VISIBLE, PANEL_OPEN_INITIAL};
use crate::engine::Engine;

/// Owns the panel's own visibility and the engine debug-overlay request.
///
/// One instance per mounted panel; the show/hide and debug buttons share it.
#[derive(Clone, Debug)]
pub struct PanelVisibilityController {
    open: bool,
    debug_enabled: bool,
}

impl Default for PanelVisibilityController {
    fn default() -> Self {
        Self {
            open: PANEL_OPEN_INITIAL,
            debug_enabled: DEBUG_GUI_INITIAL,
        }
    }
}

impl PanelVisibilityController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    /// CSS `display` value for the panel body in its current state.
    pub fn display(&self) -> &'static str {
        if self.open {
            DISPLAY_VISIBLE
        } else {
            DISPLAY_HIDDEN
        }
    }

    /// Purely local; never touches the engine.
    pub fn toggle_panel(&mut self) -> bool {
        self.open = !self.open;
        log::info!("[panel] open={}", self.open);
        self.open
    }

    /// Flips the flag and pushes it. The flag is not rolled back if the
    /// engine call fails.
    pub fn toggle_debug(&mut self, engine: &mut dyn Engine) -> bool {
        self.debug_enabled = !self.debug_enabled;
        log::info!("[panel] debug_gui={}", self.debug_enabled);
        engine.set_debug_gui_enabled(self.debug_enabled);
        self.debug_enabled
    }
}
