// Widget-to-command bindings.
//
// Each binding owns the local state of exactly one widget and issues its
// engine command synchronously when activated. No binding reads or writes
// another binding's state; the only shared resource is the engine, and each
// binding calls its own disjoint part of the command surface.

use crate::constants::*;
use crate::engine::{Engine, PresetParseError, QualityPreset, StylePreset};

/// What the DOM adapter must re-render after a binding ran.
#[derive(Clone, Debug, PartialEq)]
pub enum Feedback {
    None,
    /// Replace the activated button's label.
    Label(&'static str),
    /// Overwrite the text field content.
    FieldValue(&'static str),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExampleError {
    #[error("example list is empty")]
    Empty,
    #[error("example texts ({texts}) and image paths ({paths}) differ in length")]
    LengthMismatch { texts: usize, paths: usize },
}

// ---------------- Stateless triggers ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Quality(QualityPreset),
    Style(StylePreset),
}

#[derive(Clone, Copy, Debug)]
pub struct TriggerBinding {
    pub preset: Preset,
}

impl TriggerBinding {
    pub fn quality(preset: QualityPreset) -> Self {
        Self {
            preset: Preset::Quality(preset),
        }
    }

    pub fn style(preset: StylePreset) -> Self {
        Self {
            preset: Preset::Style(preset),
        }
    }

    /// Quality trigger for a preset spelled the way the engine names it.
    pub fn quality_named(name: &str) -> Result<Self, PresetParseError> {
        Ok(Self::quality(name.parse()?))
    }

    pub fn style_named(name: &str) -> Result<Self, PresetParseError> {
        Ok(Self::style(name.parse()?))
    }

    pub fn label(&self) -> &'static str {
        match self.preset {
            Preset::Quality(p) => p.as_str(),
            Preset::Style(p) => p.as_str(),
        }
    }

    pub fn activate(&self, engine: &mut dyn Engine) {
        log::info!("[bind] preset {}", self.label());
        match self.preset {
            Preset::Quality(p) => engine.set_quality_preset(p),
            Preset::Style(p) => engine.set_style_preset(p),
        }
    }
}

// ---------------- Text field actions ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAction {
    Submit,
    Clear,
    Disable,
}

#[derive(Clone, Copy, Debug)]
pub struct TextBinding {
    pub action: TextAction,
}

impl TextBinding {
    pub fn new(action: TextAction) -> Self {
        Self { action }
    }

    pub fn label(&self) -> &'static str {
        match self.action {
            TextAction::Submit => LABEL_SUBMIT,
            TextAction::Clear => LABEL_CLEAR,
            TextAction::Disable => LABEL_DISABLE,
        }
    }

    /// `field` is the current text input content.
    pub fn activate(&self, field: &str, engine: &mut dyn Engine) -> Feedback {
        match self.action {
            TextAction::Submit => {
                engine.set_text(field);
                Feedback::None
            }
            TextAction::Clear => {
                engine.set_text(CLEARED_TEXT);
                Feedback::FieldValue(CLEARED_TEXT)
            }
            TextAction::Disable => {
                engine.disable_direction_influence_image();
                Feedback::None
            }
        }
    }
}

// ---------------- Example cycle ----------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Example {
    pub text: String,
    pub image_path: String,
}

impl Example {
    pub fn new(text: impl Into<String>, image_path: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image_path: image_path.into(),
        }
    }
}

/// Rotating set of (text, image) examples. Each press pushes the example at
/// the current index and then advances the index with wrap-around.
#[derive(Clone, Debug)]
pub struct ExampleCycle {
    index: usize,
    items: Vec<Example>,
}

impl ExampleCycle {
    pub fn new(items: Vec<Example>) -> Result<Self, ExampleError> {
        if items.is_empty() {
            return Err(ExampleError::Empty);
        }
        Ok(Self { index: 0, items })
    }

    pub fn from_pairs<T: AsRef<str>, P: AsRef<str>>(
        texts: &[T],
        paths: &[P],
    ) -> Result<Self, ExampleError> {
        if texts.len() != paths.len() {
            return Err(ExampleError::LengthMismatch {
                texts: texts.len(),
                paths: paths.len(),
            });
        }
        let items = texts
            .iter()
            .zip(paths)
            .map(|(t, p)| Example::new(t.as_ref(), p.as_ref()))
            .collect();
        Self::new(items)
    }

    pub fn builtin() -> Self {
        Self {
            index: 0,
            items: EXAMPLE_TEXTS
                .iter()
                .zip(EXAMPLE_IMAGE_PATHS.iter())
                .map(|(t, p)| Example::new(*t, *p))
                .collect(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn items(&self) -> &[Example] {
        &self.items
    }

    /// Pushes the current example's text, then its image path, and advances.
    pub fn activate(&mut self, engine: &mut dyn Engine) -> &Example {
        let i = self.index;
        self.index = (self.index + 1) % self.items.len();
        let example = &self.items[i];
        log::info!("[bind] example {} -> {}", i, example.image_path);
        engine.set_text(&example.text);
        engine.set_direction_influence_image_path(&example.image_path);
        example
    }
}

// ---------------- Continuous sliders ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderTarget {
    TimeScale,
    DirectionInfluenceScale,
    DirectionInfluenceRenderMix,
}

impl SliderTarget {
    pub const ALL: [SliderTarget; 3] = [
        SliderTarget::TimeScale,
        SliderTarget::DirectionInfluenceScale,
        SliderTarget::DirectionInfluenceRenderMix,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SliderTarget::TimeScale => LABEL_TIME,
            SliderTarget::DirectionInfluenceScale => LABEL_IMG_SENS,
            SliderTarget::DirectionInfluenceRenderMix => LABEL_IMG_MIX,
        }
    }
}

#[inline]
pub fn normalize_slider(raw: i32) -> f32 {
    raw.clamp(SLIDER_MIN, SLIDER_MAX) as f32 / SLIDER_MAX as f32
}

/// Parses a range input's value the way a browser reports it ("75", " 75").
#[inline]
pub fn parse_slider_value(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok()
}

#[derive(Clone, Copy, Debug)]
pub struct SliderBinding {
    pub target: SliderTarget,
    raw: i32,
}

impl SliderBinding {
    pub fn new(target: SliderTarget, initial: i32) -> Self {
        Self {
            target,
            raw: initial.clamp(SLIDER_MIN, SLIDER_MAX),
        }
    }

    pub fn raw(&self) -> i32 {
        self.raw
    }

    pub fn normalized(&self) -> f32 {
        normalize_slider(self.raw)
    }

    /// Every input event results in exactly one engine call.
    pub fn on_input(&mut self, raw: i32, engine: &mut dyn Engine) -> f32 {
        self.raw = raw.clamp(SLIDER_MIN, SLIDER_MAX);
        let v = self.normalized();
        log::debug!("[bind] slider {} = {:.2}", self.target.label(), v);
        match self.target {
            SliderTarget::TimeScale => engine.set_time_scale(v),
            SliderTarget::DirectionInfluenceScale => engine.set_direction_influence_scale(v),
            SliderTarget::DirectionInfluenceRenderMix => {
                engine.set_direction_influence_render_mix(v)
            }
        }
        v
    }
}

// ---------------- Two-state toggles ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleKind {
    /// State is "rendering in color"; the engine is told the inverse.
    Color,
    /// State is "simulation enabled".
    Pause,
}

#[derive(Clone, Copy, Debug)]
pub struct ToggleBinding {
    pub kind: ToggleKind,
    state: bool,
    label_true: &'static str,
    label_false: &'static str,
}

impl ToggleBinding {
    pub fn color() -> Self {
        Self {
            kind: ToggleKind::Color,
            state: COLOR_INITIAL,
            label_true: LABEL_COLOR,
            label_false: LABEL_BW,
        }
    }

    pub fn pause() -> Self {
        Self {
            kind: ToggleKind::Pause,
            state: ENABLED_INITIAL,
            label_true: LABEL_PAUSE,
            label_false: LABEL_PLAY,
        }
    }

    pub fn state(&self) -> bool {
        self.state
    }

    pub fn label(&self) -> &'static str {
        if self.state {
            self.label_true
        } else {
            self.label_false
        }
    }

    /// Flips the state, pushes it, and returns the label to display.
    pub fn activate(&mut self, engine: &mut dyn Engine) -> &'static str {
        self.state = !self.state;
        match self.kind {
            ToggleKind::Color => engine.set_render_bw(!self.state),
            ToggleKind::Pause => engine.set_enabled(self.state),
        }
        log::info!("[bind] {:?} -> {}", self.kind, self.label());
        self.label()
    }
}

// ---------------- Per-widget dispatch ----------------

/// The binding attached to one widget.
#[derive(Clone, Debug)]
pub enum Binding {
    Trigger(TriggerBinding),
    Text(TextBinding),
    Example(ExampleCycle),
    Slider(SliderBinding),
    Toggle(ToggleBinding),
}

impl Binding {
    /// Button press. `field` is the text input content, used only by text actions.
    pub fn activate(&mut self, field: &str, engine: &mut dyn Engine) -> Feedback {
        match self {
            Binding::Trigger(b) => {
                b.activate(engine);
                Feedback::None
            }
            Binding::Text(b) => b.activate(field, engine),
            Binding::Example(b) => {
                b.activate(engine);
                Feedback::None
            }
            Binding::Toggle(b) => Feedback::Label(b.activate(engine)),
            Binding::Slider(_) => Feedback::None,
        }
    }

    /// Range input event; ignored by everything but sliders.
    pub fn on_input(&mut self, raw: i32, engine: &mut dyn Engine) -> Feedback {
        if let Binding::Slider(b) = self {
            b.on_input(raw, engine);
        }
        Feedback::None
    }
}

/// All parameter bindings of the panel, before they are handed out to widgets.
#[derive(Clone, Debug)]
pub struct ParameterBindingSet {
    pub quality: Vec<TriggerBinding>,
    pub style: Vec<TriggerBinding>,
    pub submit: TextBinding,
    pub disable: TextBinding,
    pub clear: TextBinding,
    pub examples: ExampleCycle,
    pub sliders: Vec<SliderBinding>,
    pub color: ToggleBinding,
    pub pause: ToggleBinding,
}

impl ParameterBindingSet {
    pub fn new(examples: ExampleCycle, slider_initial: i32) -> Self {
        Self {
            quality: QualityPreset::ALL
                .into_iter()
                .map(TriggerBinding::quality)
                .collect(),
            style: StylePreset::ALL
                .into_iter()
                .map(TriggerBinding::style)
                .collect(),
            submit: TextBinding::new(TextAction::Submit),
            disable: TextBinding::new(TextAction::Disable),
            clear: TextBinding::new(TextAction::Clear),
            examples,
            sliders: SliderTarget::ALL
                .into_iter()
                .map(|t| SliderBinding::new(t, slider_initial))
                .collect(),
            color: ToggleBinding::color(),
            pause: ToggleBinding::pause(),
        }
    }
}

impl Default for ParameterBindingSet {
    fn default() -> Self {
        Self::new(ExampleCycle::builtin(), SLIDER_DEFAULT)
    }
}
