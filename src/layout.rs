// Declarative widget tree for the panel.
//
// The tree carries labels, widget kinds and the binding each widget owns.
// It knows nothing about the DOM; `mount` materializes it in the browser and
// host tests walk it directly.

use crate::bindings::{Binding, Example, ExampleCycle, ExampleError, ParameterBindingSet};
use crate::constants::*;

#[derive(Clone, Debug)]
pub struct PanelConfig {
    pub examples: Vec<Example>,
    pub slider_initial: i32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            examples: ExampleCycle::builtin().items().to_vec(),
            slider_initial: SLIDER_DEFAULT,
        }
    }
}

impl PanelConfig {
    /// Default config with the example set replaced by paired texts/paths.
    pub fn with_examples<T: AsRef<str>, P: AsRef<str>>(
        texts: &[T],
        paths: &[P],
    ) -> Result<Self, ExampleError> {
        let cycle = ExampleCycle::from_pairs(texts, paths)?;
        Ok(Self {
            examples: cycle.items().to_vec(),
            ..Self::default()
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetKind {
    Button,
    Slider { min: i32, max: i32, value: i32 },
    TextInput,
}

#[derive(Clone, Debug)]
pub enum Handler {
    TogglePanel,
    ToggleDebug,
    Bound(Binding),
}

#[derive(Clone, Debug)]
pub struct Widget {
    pub label: &'static str,
    pub kind: WidgetKind,
    pub handler: Option<Handler>,
}

impl Widget {
    fn button(label: &'static str, handler: Handler) -> Self {
        Self {
            label,
            kind: WidgetKind::Button,
            handler: Some(handler),
        }
    }

    fn bound_button(label: &'static str, binding: Binding) -> Self {
        Self::button(label, Handler::Bound(binding))
    }
}

pub type Row = Vec<Widget>;

/// Header row stays visible; the body rows are hidden by "show or hide".
#[derive(Clone, Debug)]
pub struct PanelLayout {
    pub header: Row,
    pub body: Vec<Row>,
}

impl PanelLayout {
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.header.iter().chain(self.body.iter().flatten())
    }

    pub fn find(&self, label: &str) -> Option<&Widget> {
        self.widgets().find(|w| w.label == label)
    }

    pub fn find_mut(&mut self, label: &str) -> Option<&mut Widget> {
        self.header
            .iter_mut()
            .chain(self.body.iter_mut().flatten())
            .find(|w| w.label == label)
    }
}

pub fn build(config: &PanelConfig) -> Result<PanelLayout, ExampleError> {
    let examples = ExampleCycle::new(config.examples.clone())?;
    let set = ParameterBindingSet::new(examples, config.slider_initial);

    let header = vec![
        Widget::button(LABEL_SHOW_HIDE, Handler::TogglePanel),
        Widget::button(LABEL_DEBUG_GUI, Handler::ToggleDebug),
    ];

    let mut body = Vec::new();
    body.push(
        set.quality
            .iter()
            .map(|b| Widget::bound_button(b.label(), Binding::Trigger(*b)))
            .collect(),
    );
    body.push(
        set.style
            .iter()
            .map(|b| Widget::bound_button(b.label(), Binding::Trigger(*b)))
            .collect(),
    );
    body.push(vec![
        Widget {
            label: "",
            kind: WidgetKind::TextInput,
            handler: None,
        },
        Widget::bound_button(set.submit.label(), Binding::Text(set.submit)),
        Widget::bound_button(set.disable.label(), Binding::Text(set.disable)),
        Widget::bound_button(set.clear.label(), Binding::Text(set.clear)),
        Widget::bound_button(LABEL_EXAMPLE, Binding::Example(set.examples)),
    ]);
    for slider in &set.sliders {
        body.push(vec![Widget {
            label: slider.target.label(),
            kind: WidgetKind::Slider {
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                value: slider.raw(),
            },
            handler: Some(Handler::Bound(Binding::Slider(*slider))),
        }]);
    }
    body.push(vec![
        Widget::bound_button(set.color.label(), Binding::Toggle(set.color)),
        Widget::bound_button(set.pause.label(), Binding::Toggle(set.pause)),
    ]);

    Ok(PanelLayout { header, body })
}
