// Command surface of the externally owned engine.
//
// The panel never reads engine state back; it only issues the commands
// listed here. Every command is fire-and-forget from the panel's point of
// view, so the trait methods return nothing.

use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown {kind} preset: {name:?}")]
pub struct PresetParseError {
    pub kind: &'static str,
    pub name: String,
}

/// Rendering quality tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QualityPreset {
    Low,
    Med,
    High,
}

impl QualityPreset {
    pub const ALL: [QualityPreset; 3] = [QualityPreset::Low, QualityPreset::Med, QualityPreset::High];

    pub fn as_str(self) -> &'static str {
        match self {
            QualityPreset::Low => "low",
            QualityPreset::Med => "med",
            QualityPreset::High => "high",
        }
    }
}

impl fmt::Display for QualityPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityPreset {
    type Err = PresetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QualityPreset::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| PresetParseError {
                kind: "quality",
                name: s.to_string(),
            })
    }
}

/// Named stylistic mode of the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StylePreset {
    MidCoherence,
    HighCoherence,
    Chaotic,
    Fragile,
    Clustered,
}

impl StylePreset {
    pub const ALL: [StylePreset; 5] = [
        StylePreset::MidCoherence,
        StylePreset::HighCoherence,
        StylePreset::Chaotic,
        StylePreset::Fragile,
        StylePreset::Clustered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StylePreset::MidCoherence => "mid_coh",
            StylePreset::HighCoherence => "high_coh",
            StylePreset::Chaotic => "chaotic",
            StylePreset::Fragile => "fragile",
            StylePreset::Clustered => "clustered",
        }
    }
}

impl fmt::Display for StylePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StylePreset {
    type Err = PresetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StylePreset::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| PresetParseError {
                kind: "style",
                name: s.to_string(),
            })
    }
}

/// Everything the panel can ask of the engine.
pub trait Engine {
    fn set_quality_preset(&mut self, preset: QualityPreset);
    fn set_style_preset(&mut self, preset: StylePreset);
    fn set_text(&mut self, text: &str);
    fn set_direction_influence_image_path(&mut self, path: &str);
    fn disable_direction_influence_image(&mut self);
    /// Normalized to \[0, 1\].
    fn set_time_scale(&mut self, scale: f32);
    /// Normalized to \[0, 1\].
    fn set_direction_influence_scale(&mut self, scale: f32);
    /// Normalized to \[0, 1\].
    fn set_direction_influence_render_mix(&mut self, mix: f32);
    fn set_render_bw(&mut self, bw: bool);
    fn set_enabled(&mut self, enabled: bool);
    fn set_debug_gui_enabled(&mut self, enabled: bool);
}

/// Runs `f` against a shared engine unless a call into it is still on the
/// stack. A JS engine may synchronously fire another panel handler; that
/// nested event is dropped with a warning instead of panicking the borrow.
pub fn with_engine<E: Engine + ?Sized, R>(
    engine: &RefCell<E>,
    f: impl FnOnce(&mut E) -> R,
) -> Option<R> {
    match engine.try_borrow_mut() {
        Ok(mut e) => Some(f(&mut *e)),
        Err(_) => {
            log::warn!("[bind] engine busy");
            None
        }
    }
}

/// One engine call captured as a value, for logging and replay.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineCommand {
    QualityPreset(QualityPreset),
    StylePreset(StylePreset),
    Text(String),
    DirectionInfluenceImagePath(String),
    DisableDirectionInfluenceImage,
    TimeScale(f32),
    DirectionInfluenceScale(f32),
    DirectionInfluenceRenderMix(f32),
    RenderBw(bool),
    Enabled(bool),
    DebugGuiEnabled(bool),
}

impl EngineCommand {
    /// Method names of the engine surface, in declaration order.
    pub const METHOD_NAMES: [&'static str; 11] = [
        "set_quality_preset",
        "set_style_preset",
        "set_text",
        "set_direction_influence_image_path",
        "disable_direction_influence_image",
        "set_time_scale",
        "set_direction_influence_scale",
        "set_direction_influence_render_mix",
        "set_render_bw",
        "set_enabled",
        "set_debug_gui_enabled",
    ];

    pub fn method_name(&self) -> &'static str {
        let i = match self {
            EngineCommand::QualityPreset(_) => 0,
            EngineCommand::StylePreset(_) => 1,
            EngineCommand::Text(_) => 2,
            EngineCommand::DirectionInfluenceImagePath(_) => 3,
            EngineCommand::DisableDirectionInfluenceImage => 4,
            EngineCommand::TimeScale(_) => 5,
            EngineCommand::DirectionInfluenceScale(_) => 6,
            EngineCommand::DirectionInfluenceRenderMix(_) => 7,
            EngineCommand::RenderBw(_) => 8,
            EngineCommand::Enabled(_) => 9,
            EngineCommand::DebugGuiEnabled(_) => 10,
        };
        Self::METHOD_NAMES[i]
    }

    pub fn dispatch(&self, engine: &mut dyn Engine) {
        match self {
            EngineCommand::QualityPreset(p) => engine.set_quality_preset(*p),
            EngineCommand::StylePreset(p) => engine.set_style_preset(*p),
            EngineCommand::Text(t) => engine.set_text(t),
            EngineCommand::DirectionInfluenceImagePath(p) => {
                engine.set_direction_influence_image_path(p)
            }
            EngineCommand::DisableDirectionInfluenceImage => {
                engine.disable_direction_influence_image()
            }
            EngineCommand::TimeScale(v) => engine.set_time_scale(*v),
            EngineCommand::DirectionInfluenceScale(v) => engine.set_direction_influence_scale(*v),
            EngineCommand::DirectionInfluenceRenderMix(v) => {
                engine.set_direction_influence_render_mix(*v)
            }
            EngineCommand::RenderBw(b) => engine.set_render_bw(*b),
            EngineCommand::Enabled(b) => engine.set_enabled(*b),
            EngineCommand::DebugGuiEnabled(b) => engine.set_debug_gui_enabled(*b),
        }
    }
}

impl fmt::Display for EngineCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.method_name();
        match self {
            EngineCommand::QualityPreset(p) => write!(f, "{name}({p})"),
            EngineCommand::StylePreset(p) => write!(f, "{name}({p})"),
            EngineCommand::Text(t) => write!(f, "{name}({t:?})"),
            EngineCommand::DirectionInfluenceImagePath(p) => write!(f, "{name}({p:?})"),
            EngineCommand::DisableDirectionInfluenceImage => write!(f, "{name}()"),
            EngineCommand::TimeScale(v)
            | EngineCommand::DirectionInfluenceScale(v)
            | EngineCommand::DirectionInfluenceRenderMix(v) => write!(f, "{name}({v:.2})"),
            EngineCommand::RenderBw(b) | EngineCommand::Enabled(b) | EngineCommand::DebugGuiEnabled(b) => {
                write!(f, "{name}({b})")
            }
        }
    }
}
