// Host-side tests for the coalescing command mailbox.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod engine {
    include!("../src/engine.rs");
}
mod bindings {
    include!("../src/bindings.rs");
}
mod mailbox {
    include!("../src/mailbox.rs");
}
mod common;

use bindings::{ExampleCycle, SliderBinding, SliderTarget, ToggleBinding};
use common::Recorder;
use engine::{with_engine, Engine, EngineCommand, QualityPreset, StylePreset};
use std::cell::RefCell;
use mailbox::*;

#[test]
fn new_mailbox_is_empty() {
    let mut mb = CommandMailbox::new();
    assert!(!mb.has_pending());
    assert!(mb.take().is_empty());
}

#[test]
fn last_write_wins_between_drains() {
    let mut mb = CommandMailbox::new();
    let mut slider = SliderBinding::new(SliderTarget::TimeScale, 50);
    for raw in [10, 40, 90] {
        slider.on_input(raw, &mut mb);
    }
    mb.set_quality_preset(QualityPreset::Low);
    mb.set_quality_preset(QualityPreset::High);

    let update = mb.take();
    assert_eq!(update.time_scale, Some(0.9));
    assert_eq!(update.quality_preset, Some(QualityPreset::High));
    assert_eq!(update.style_preset, None);
}

#[test]
fn take_drains_everything() {
    let mut mb = CommandMailbox::new();
    mb.set_text("hello");
    mb.set_debug_gui_enabled(false);
    assert!(mb.has_pending());

    let first = mb.take();
    assert_eq!(first.text.as_deref(), Some("hello"));
    assert_eq!(first.debug_gui_enabled, Some(false));
    assert!(!mb.has_pending());
    assert!(mb.take().is_empty());
}

#[test]
fn debug_flag_false_is_distinct_from_unset() {
    let mut mb = CommandMailbox::new();
    mb.set_debug_gui_enabled(false);
    let update = mb.take();
    assert_eq!(update.debug_gui_enabled, Some(false));
    assert!(!update.is_empty());
}

#[test]
fn disable_and_image_path_replace_each_other() {
    let mut mb = CommandMailbox::new();
    let mut cycle = ExampleCycle::builtin();
    cycle.activate(&mut mb);
    mb.disable_direction_influence_image();
    let update = mb.take();
    assert!(update.disable_direction_influence_image);
    assert_eq!(update.direction_influence_image_path, None);
    assert!(update.text.is_some());

    mb.disable_direction_influence_image();
    cycle.activate(&mut mb);
    let update = mb.take();
    assert!(!update.disable_direction_influence_image);
    assert_eq!(
        update.direction_influence_image_path.as_deref(),
        Some(constants::EXAMPLE_IMAGE_PATHS[1])
    );
}

#[test]
fn time_scale_factor_spans_engine_range() {
    let mut update = PanelUpdate::default();
    assert_eq!(update.time_scale_factor(), None);

    update.time_scale = Some(0.0);
    assert!((update.time_scale_factor().unwrap() - constants::TIME_SCALE_MIN).abs() < 1e-6);
    update.time_scale = Some(1.0);
    assert!((update.time_scale_factor().unwrap() - constants::TIME_SCALE_MAX).abs() < 1e-6);
    update.time_scale = Some(0.5);
    let mid = (constants::TIME_SCALE_MIN + constants::TIME_SCALE_MAX) / 2.0;
    assert!((update.time_scale_factor().unwrap() - mid).abs() < 1e-5);
}

#[test]
fn commands_follow_surface_order() {
    let mut mb = CommandMailbox::new();
    mb.set_debug_gui_enabled(true);
    mb.set_enabled(false);
    mb.set_style_preset(StylePreset::Chaotic);
    mb.set_quality_preset(QualityPreset::Med);

    let cmds = mb.take().commands();
    assert_eq!(
        cmds,
        vec![
            EngineCommand::QualityPreset(QualityPreset::Med),
            EngineCommand::StylePreset(StylePreset::Chaotic),
            EngineCommand::Enabled(false),
            EngineCommand::DebugGuiEnabled(true),
        ]
    );
}

#[test]
fn flush_replays_onto_engine_and_empties() {
    let mut mb = CommandMailbox::new();
    let mut pause = ToggleBinding::pause();
    pause.activate(&mut mb);
    pause.activate(&mut mb);
    pause.activate(&mut mb);
    mb.set_render_bw(true);

    let mut rec = Recorder::default();
    assert_eq!(mb.flush_to(&mut rec), 2);
    assert_eq!(
        rec.calls,
        vec![EngineCommand::RenderBw(true), EngineCommand::Enabled(false)]
    );
    assert!(!mb.has_pending());
    assert_eq!(mb.flush_to(&mut rec), 0);
}

#[test]
fn drained_frame_carries_time_scale_factor_of_last_drag() {
    let mailbox = RefCell::new(CommandMailbox::new());
    let mut time = SliderBinding::new(SliderTarget::TimeScale, 50);
    for raw in [10, 40, 100] {
        with_engine(&mailbox, |mb| time.on_input(raw, mb));
    }

    let frame = with_engine(&mailbox, CommandMailbox::take).unwrap_or_default();
    assert_eq!(frame.time_scale, Some(1.0));
    let factor = frame.time_scale_factor().unwrap();
    assert!((factor - constants::TIME_SCALE_MAX).abs() < 1e-6);
    assert!(!mailbox.borrow().has_pending());
}

#[test]
fn busy_mailbox_drains_nothing() {
    let mailbox = RefCell::new(CommandMailbox::new());
    mailbox.borrow_mut().set_enabled(false);
    {
        let _held = mailbox.borrow();
        assert_eq!(with_engine(&mailbox, CommandMailbox::take), None);
    }
    assert!(mailbox.borrow().has_pending());
}

#[test]
fn replay_runs_after_the_mailbox_is_released() {
    let mailbox = RefCell::new(CommandMailbox::new());
    mailbox.borrow_mut().set_quality_preset(QualityPreset::High);
    mailbox.borrow_mut().set_time_scale(0.25);

    let update = with_engine(&mailbox, CommandMailbox::take).unwrap();
    // Commands issued while replaying queue for the next frame.
    mailbox.borrow_mut().set_enabled(true);

    let mut rec = Recorder::default();
    assert_eq!(update.replay(&mut rec), 2);
    assert_eq!(
        rec.calls,
        vec![
            EngineCommand::QualityPreset(QualityPreset::High),
            EngineCommand::TimeScale(0.25),
        ]
    );
    assert_eq!(mailbox.borrow_mut().take().enabled, Some(true));
}
