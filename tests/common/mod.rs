// Recording engine shared by the host-side tests.

use crate::engine::{Engine, EngineCommand, QualityPreset, StylePreset};

#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<EngineCommand>,
}

impl Recorder {
    pub fn last(&self) -> Option<&EngineCommand> {
        self.calls.last()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Engine for Recorder {
    fn set_quality_preset(&mut self, preset: QualityPreset) {
        self.calls.push(EngineCommand::QualityPreset(preset));
    }
    fn set_style_preset(&mut self, preset: StylePreset) {
        self.calls.push(EngineCommand::StylePreset(preset));
    }
    fn set_text(&mut self, text: &str) {
        self.calls.push(EngineCommand::Text(text.to_string()));
    }
    fn set_direction_influence_image_path(&mut self, path: &str) {
        self.calls
            .push(EngineCommand::DirectionInfluenceImagePath(path.to_string()));
    }
    fn disable_direction_influence_image(&mut self) {
        self.calls.push(EngineCommand::DisableDirectionInfluenceImage);
    }
    fn set_time_scale(&mut self, scale: f32) {
        self.calls.push(EngineCommand::TimeScale(scale));
    }
    fn set_direction_influence_scale(&mut self, scale: f32) {
        self.calls.push(EngineCommand::DirectionInfluenceScale(scale));
    }
    fn set_direction_influence_render_mix(&mut self, mix: f32) {
        self.calls.push(EngineCommand::DirectionInfluenceRenderMix(mix));
    }
    fn set_render_bw(&mut self, bw: bool) {
        self.calls.push(EngineCommand::RenderBw(bw));
    }
    fn set_enabled(&mut self, enabled: bool) {
        self.calls.push(EngineCommand::Enabled(enabled));
    }
    fn set_debug_gui_enabled(&mut self, enabled: bool) {
        self.calls.push(EngineCommand::DebugGuiEnabled(enabled));
    }
}
