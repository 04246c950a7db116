// Host-side tests for the engine command surface types.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod engine {
    include!("../src/engine.rs");
}
mod common;

use common::Recorder;
use engine::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn presets_round_trip_through_names() {
    for p in QualityPreset::ALL {
        assert_eq!(p.as_str().parse::<QualityPreset>(), Ok(p));
        assert_eq!(p.to_string(), p.as_str());
    }
    for p in StylePreset::ALL {
        assert_eq!(p.as_str().parse::<StylePreset>(), Ok(p));
    }
}

#[test]
fn unknown_preset_names_are_rejected() {
    let err = "ultra".parse::<QualityPreset>().unwrap_err();
    assert_eq!(err.kind, "quality");
    assert_eq!(err.to_string(), "unknown quality preset: \"ultra\"");
    assert!("HIGH".parse::<QualityPreset>().is_err());
    assert!("".parse::<StylePreset>().is_err());
}

#[test]
fn method_names_are_unique_and_match_commands() {
    let mut names = EngineCommand::METHOD_NAMES.to_vec();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), EngineCommand::METHOD_NAMES.len());

    assert_eq!(EngineCommand::TimeScale(0.1).method_name(), "set_time_scale");
    assert_eq!(
        EngineCommand::DisableDirectionInfluenceImage.method_name(),
        "disable_direction_influence_image"
    );
}

#[test]
fn dispatch_reaches_the_matching_method() {
    let commands = vec![
        EngineCommand::QualityPreset(QualityPreset::Low),
        EngineCommand::StylePreset(StylePreset::Fragile),
        EngineCommand::Text("t".into()),
        EngineCommand::DirectionInfluenceImagePath("p".into()),
        EngineCommand::DisableDirectionInfluenceImage,
        EngineCommand::TimeScale(0.25),
        EngineCommand::DirectionInfluenceScale(0.5),
        EngineCommand::DirectionInfluenceRenderMix(0.75),
        EngineCommand::RenderBw(true),
        EngineCommand::Enabled(false),
        EngineCommand::DebugGuiEnabled(true),
    ];
    let mut rec = Recorder::default();
    for c in &commands {
        c.dispatch(&mut rec);
    }
    assert_eq!(rec.calls, commands);
}

#[test]
fn commands_display_as_calls() {
    assert_eq!(
        EngineCommand::QualityPreset(QualityPreset::High).to_string(),
        "set_quality_preset(high)"
    );
    assert_eq!(EngineCommand::Text(" ".into()).to_string(), "set_text(\" \")");
    assert_eq!(EngineCommand::TimeScale(0.75).to_string(), "set_time_scale(0.75)");
    assert_eq!(EngineCommand::Enabled(false).to_string(), "set_enabled(false)");
}

#[test]
fn with_engine_skips_a_busy_engine() {
    let engine = RefCell::new(Recorder::default());
    {
        let _held = engine.borrow_mut();
        assert_eq!(with_engine(&engine, |e| e.set_enabled(false)), None);
    }
    assert_eq!(with_engine(&engine, |e| e.set_enabled(true)), Some(()));
    assert_eq!(engine.borrow().calls, vec![EngineCommand::Enabled(true)]);
}

#[test]
fn nested_engine_calls_are_dropped_not_panicking() {
    let engine: Rc<RefCell<dyn Engine>> = Rc::new(RefCell::new(Recorder::default()));
    let outer = with_engine(&engine, |e| {
        e.set_render_bw(true);
        // An engine method that synchronously fires another widget lands here.
        with_engine(&engine, |inner| inner.set_render_bw(false))
    });
    assert_eq!(outer, Some(None));
    assert!(with_engine(&engine, |e| e.set_text("after")).is_some());
}
