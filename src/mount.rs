use crate::constants::*;
use crate::dom;
use crate::engine::Engine;
use crate::events::{self, WidgetContext};
use crate::layout::{self, PanelConfig, Row, WidgetKind};
use crate::panel::PanelVisibilityController;
use anyhow::{anyhow, bail};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Builds the panel described by `config` and appends it to `document.body`.
pub fn mount(config: &PanelConfig, engine: Rc<RefCell<dyn Engine>>) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let body = document.body().ok_or_else(|| anyhow!("missing <body>"))?;
    if document.get_element_by_id(PANEL_ELEMENT_ID).is_some() {
        bail!("#{} already mounted", PANEL_ELEMENT_ID);
    }

    let layout = layout::build(config)?;

    let root = dom::create_element(&document, "div")?;
    root.set_id(PANEL_ELEMENT_ID);
    dom::set_style(&root, PANEL_STYLE);

    let panel_body = dom::create_element(&document, "div")?;
    dom::set_style(&panel_body, BODY_STYLE);

    let ctx = WidgetContext {
        engine,
        visibility: Rc::new(RefCell::new(PanelVisibilityController::new())),
        panel_body: panel_body.clone(),
    };

    let header = build_row(&document, layout.header, &ctx)?;
    dom::append(&root, &header)?;
    for row in layout.body {
        let el = build_row(&document, row, &ctx)?;
        dom::append(&panel_body, &el)?;
    }
    dom::append(&root, &panel_body)?;
    dom::append(&body, &root)?;

    log::info!("[panel] mounted #{}", PANEL_ELEMENT_ID);
    Ok(())
}

fn build_row(document: &web::Document, row: Row, ctx: &WidgetContext) -> anyhow::Result<web::HtmlElement> {
    let row_el = dom::create_element(document, "div")?;
    dom::set_style(&row_el, ROW_STYLE);

    // Text buttons read the field that precedes them in the same row
    let mut text_field: Option<web::HtmlInputElement> = None;

    for widget in row {
        match widget.kind {
            WidgetKind::TextInput => {
                let input = dom::create_input(document, "text")?;
                dom::append(&row_el, &input)?;
                text_field = Some(input);
            }
            WidgetKind::Button => {
                let button = dom::create_element(document, "button")?;
                button.set_inner_text(widget.label);
                if let Some(handler) = widget.handler {
                    events::wire_button(&button, handler, ctx, text_field.clone());
                }
                dom::append(&row_el, &button)?;
            }
            WidgetKind::Slider { min, max, value } => {
                let label = dom::create_element(document, "div")?;
                dom::set_style(&label, SLIDER_LABEL_STYLE);
                label.set_inner_text(widget.label);

                let input = dom::create_input(document, "range")?;
                input.set_min(&min.to_string());
                input.set_max(&max.to_string());
                input.set_value(&value.to_string());
                dom::set_style(&input, SLIDER_INPUT_STYLE);
                if let Some(layout::Handler::Bound(binding)) = widget.handler {
                    events::wire_slider(&input, binding, ctx);
                }

                dom::append(&row_el, &label)?;
                dom::append(&row_el, &input)?;
            }
        }
    }
    Ok(row_el)
}
