use crate::bindings::{parse_slider_value, Binding, Feedback};
use crate::dom;
use crate::engine::{with_engine, Engine};
use crate::layout::Handler;
use crate::panel::PanelVisibilityController;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shared handles every widget closure may need.
#[derive(Clone)]
pub struct WidgetContext {
    pub engine: Rc<RefCell<dyn Engine>>,
    pub visibility: Rc<RefCell<PanelVisibilityController>>,
    pub panel_body: web::HtmlElement,
}

/// Elements a binding's feedback can touch.
struct FeedbackTargets {
    button: web::HtmlElement,
    text_field: Option<web::HtmlInputElement>,
}

fn apply_feedback(feedback: Feedback, targets: &FeedbackTargets) {
    match feedback {
        Feedback::None => {}
        Feedback::Label(label) => targets.button.set_inner_text(label),
        Feedback::FieldValue(value) => {
            if let Some(field) = &targets.text_field {
                field.set_value(value);
            }
        }
    }
}

/// Wires a button's click to its handler. The closure owns the binding, so
/// each widget's state stays private to that widget.
pub fn wire_button(
    button: &web::HtmlElement,
    handler: Handler,
    ctx: &WidgetContext,
    text_field: Option<web::HtmlInputElement>,
) {
    let targets = FeedbackTargets {
        button: button.clone(),
        text_field,
    };
    let engine = ctx.engine.clone();
    match handler {
        Handler::TogglePanel => {
            let visibility = ctx.visibility.clone();
            let panel_body = ctx.panel_body.clone();
            dom::add_listener(button, "click", move || {
                let Ok(mut v) = visibility.try_borrow_mut() else {
                    log::warn!("[panel] visibility busy");
                    return;
                };
                v.toggle_panel();
                dom::set_display(&panel_body, v.display());
            });
        }
        Handler::ToggleDebug => {
            let visibility = ctx.visibility.clone();
            dom::add_listener(button, "click", move || {
                with_engine(&engine, |e| match visibility.try_borrow_mut() {
                    Ok(mut v) => {
                        v.toggle_debug(e);
                    }
                    Err(_) => log::warn!("[panel] visibility busy"),
                });
            });
        }
        Handler::Bound(mut binding) => {
            dom::add_listener(button, "click", move || {
                let field = targets
                    .text_field
                    .as_ref()
                    .map(|f| f.value())
                    .unwrap_or_default();
                if let Some(feedback) = with_engine(&engine, |e| binding.activate(&field, e)) {
                    apply_feedback(feedback, &targets);
                }
            });
        }
    }
}

/// Pushes every `input` event of a range element through its slider binding.
pub fn wire_slider(input: &web::HtmlInputElement, mut binding: Binding, ctx: &WidgetContext) {
    let engine = ctx.engine.clone();
    let el = input.clone();
    dom::add_listener(input, "input", move || {
        let value = el.value();
        match parse_slider_value(&value) {
            Some(raw) => {
                with_engine(&engine, |e| binding.on_input(raw, e));
            }
            None => log::warn!("[bind] ignoring slider value {:?}", value),
        }
    });
}
