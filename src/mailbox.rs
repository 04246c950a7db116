// Coalescing engine bridge.
//
// The mailbox stands in for the engine while the panel runs: each command
// overwrites its pending slot, and the engine drains everything once per
// frame with [`CommandMailbox::take`]. Commands issued between two frames
// collapse to the last value per command.

use crate::constants::{TIME_SCALE_MAX, TIME_SCALE_MIN};
use crate::engine::{Engine, EngineCommand, QualityPreset, StylePreset};

/// Everything the panel asked for since the previous drain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelUpdate {
    pub quality_preset: Option<QualityPreset>,
    pub style_preset: Option<StylePreset>,
    pub text: Option<String>,
    pub direction_influence_image_path: Option<String>,
    pub disable_direction_influence_image: bool,
    pub time_scale: Option<f32>,
    pub direction_influence_scale: Option<f32>,
    pub direction_influence_render_mix: Option<f32>,
    pub render_bw: Option<bool>,
    pub enabled: Option<bool>,
    pub debug_gui_enabled: Option<bool>,
}

#[inline]
fn lerp(t: f32, a: f32, b: f32) -> f32 {
    a + (b - a) * t
}

impl PanelUpdate {
    pub fn is_empty(&self) -> bool {
        *self == PanelUpdate::default()
    }

    /// Time slider mapped onto the engine's simulation rate range.
    pub fn time_scale_factor(&self) -> Option<f32> {
        self.time_scale
            .map(|t| lerp(t.clamp(0.0, 1.0), TIME_SCALE_MIN, TIME_SCALE_MAX))
    }

    /// Pending commands in declaration order of the engine surface. An image
    /// path and a disable never coexist; the later of the two wins.
    pub fn commands(&self) -> Vec<EngineCommand> {
        let mut out = Vec::new();
        if let Some(p) = self.quality_preset {
            out.push(EngineCommand::QualityPreset(p));
        }
        if let Some(p) = self.style_preset {
            out.push(EngineCommand::StylePreset(p));
        }
        if let Some(t) = &self.text {
            out.push(EngineCommand::Text(t.clone()));
        }
        if let Some(p) = &self.direction_influence_image_path {
            out.push(EngineCommand::DirectionInfluenceImagePath(p.clone()));
        }
        if self.disable_direction_influence_image {
            out.push(EngineCommand::DisableDirectionInfluenceImage);
        }
        if let Some(v) = self.time_scale {
            out.push(EngineCommand::TimeScale(v));
        }
        if let Some(v) = self.direction_influence_scale {
            out.push(EngineCommand::DirectionInfluenceScale(v));
        }
        if let Some(v) = self.direction_influence_render_mix {
            out.push(EngineCommand::DirectionInfluenceRenderMix(v));
        }
        if let Some(b) = self.render_bw {
            out.push(EngineCommand::RenderBw(b));
        }
        if let Some(b) = self.enabled {
            out.push(EngineCommand::Enabled(b));
        }
        if let Some(b) = self.debug_gui_enabled {
            out.push(EngineCommand::DebugGuiEnabled(b));
        }
        out
    }

    /// Sends every pending command to `engine`; returns how many were sent.
    pub fn replay(&self, engine: &mut dyn Engine) -> usize {
        let commands = self.commands();
        for c in &commands {
            log::debug!("[mailbox] {}", c);
            c.dispatch(engine);
        }
        commands.len()
    }
}

#[derive(Debug, Default)]
pub struct CommandMailbox {
    pending: PanelUpdate,
}

impl CommandMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drains all pending commands, leaving the mailbox empty.
    pub fn take(&mut self) -> PanelUpdate {
        std::mem::take(&mut self.pending)
    }

    /// Drains and replays onto `engine`; returns the number of commands sent.
    pub fn flush_to(&mut self, engine: &mut dyn Engine) -> usize {
        self.take().replay(engine)
    }
}

impl Engine for CommandMailbox {
    fn set_quality_preset(&mut self, preset: QualityPreset) {
        self.pending.quality_preset = Some(preset);
    }

    fn set_style_preset(&mut self, preset: StylePreset) {
        self.pending.style_preset = Some(preset);
    }

    fn set_text(&mut self, text: &str) {
        self.pending.text = Some(text.to_string());
    }

    fn set_direction_influence_image_path(&mut self, path: &str) {
        self.pending.disable_direction_influence_image = false;
        self.pending.direction_influence_image_path = Some(path.to_string());
    }

    fn disable_direction_influence_image(&mut self) {
        self.pending.direction_influence_image_path = None;
        self.pending.disable_direction_influence_image = true;
    }

    fn set_time_scale(&mut self, scale: f32) {
        self.pending.time_scale = Some(scale);
    }

    fn set_direction_influence_scale(&mut self, scale: f32) {
        self.pending.direction_influence_scale = Some(scale);
    }

    fn set_direction_influence_render_mix(&mut self, mix: f32) {
        self.pending.direction_influence_render_mix = Some(mix);
    }

    fn set_render_bw(&mut self, bw: bool) {
        self.pending.render_bw = Some(bw);
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.pending.enabled = Some(enabled);
    }

    fn set_debug_gui_enabled(&mut self, enabled: bool) {
        self.pending.debug_gui_enabled = Some(enabled);
    }
}
