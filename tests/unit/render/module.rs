use std::sync::Arc;

use super::*;
use crate::assets::glyph::CursorGlyph;

fn red_glyph_slot() -> GlyphSlot {
    let slot = GlyphSlot::new();
    slot.resolve(CursorGlyph {
        width: 1,
        height: 1,
        rgba8_premul: Arc::new(vec![255, 0, 0, 255]),
    })
    .unwrap();
    slot
}

fn roster() -> Roster {
    Roster::new(["A", "B"].map(UserId::from))
}

#[test]
fn init_binds_surface_and_seeds_internal_layout() {
    let mut module = CursorModule::new(roster());
    assert!(!module.is_ready());

    module.init(SurfaceSpec::new(100, 100), 10.0).unwrap();
    assert!(module.is_ready());

    let map: PositionMap = serde_json::from_str(&module.query_all_positions().unwrap()).unwrap();
    assert_eq!(map[&UserId::from("A")], CursorPosition::new(0.0, 0.0));
    assert_eq!(map[&UserId::from("B")], CursorPosition::new(0.0, 10.0));
}

#[test]
fn init_is_one_shot() {
    let mut module = CursorModule::new(roster());
    module.init(SurfaceSpec::new(100, 100), 10.0).unwrap();
    let err = module.init(SurfaceSpec::new(100, 100), 10.0).unwrap_err();
    assert!(matches!(err, CursorfieldError::ModuleInit(_)));
}

#[test]
fn init_failure_reports_module_init() {
    let mut module = CursorModule::new(roster());
    let err = module.init(SurfaceSpec::new(0, 0), 10.0).unwrap_err();
    assert!(matches!(err, CursorfieldError::ModuleInit(_)));
    assert!(!module.is_ready());
}

#[test]
fn calls_are_refused_before_init() {
    let mut module = CursorModule::new(roster());
    let slot = red_glyph_slot();
    let err = module
        .update_position("A", 1.0, 2.0, &slot, 10.0)
        .unwrap_err();
    assert!(matches!(err, CursorfieldError::ModuleInit(_)));
    assert!(matches!(
        module.draw_all(&slot, 10.0).unwrap_err(),
        CursorfieldError::ModuleInit(_)
    ));
}

#[test]
fn module_enforces_the_roster_gate_independently() {
    let mut module = CursorModule::new(roster());
    module.init(SurfaceSpec::new(100, 100), 10.0).unwrap();
    let slot = red_glyph_slot();

    module
        .update_position("GHOST", 1.0, 1.0, &slot, 10.0)
        .unwrap();

    let map: PositionMap = serde_json::from_str(&module.query_all_positions().unwrap()).unwrap();
    assert_eq!(map.len(), 2);
    assert!(!map.contains_key(&UserId::from("GHOST")));
}

#[test]
fn queried_map_is_a_detached_copy() {
    let mut module = CursorModule::new(roster());
    module.init(SurfaceSpec::new(100, 100), 10.0).unwrap();

    let mut copy: PositionMap =
        serde_json::from_str(&module.query_all_positions().unwrap()).unwrap();
    copy.insert(UserId::from("A"), CursorPosition::new(99.0, 99.0));

    let fresh: PositionMap = serde_json::from_str(&module.query_all_positions().unwrap()).unwrap();
    assert_eq!(fresh[&UserId::from("A")], CursorPosition::new(0.0, 0.0));
}

#[test]
fn backend_updates_flow_through_the_boundary() {
    let mut backend =
        ModuleBackend::new(roster(), SurfaceSpec::new(100, 100), red_glyph_slot(), 10.0).unwrap();
    assert!(backend.ready());

    backend
        .update_position(&UserId::from("A"), CursorPosition::new(30.0, 40.0))
        .unwrap();
    let positions = backend.positions().unwrap();
    assert_eq!(positions[&UserId::from("A")], CursorPosition::new(30.0, 40.0));
    assert_eq!(positions[&UserId::from("B")], CursorPosition::new(0.0, 10.0));

    // The redraw happened inside the module.
    let surface = backend.surface().unwrap();
    let idx = (45 * surface.physical_width() as usize + 35) * 4;
    assert_eq!(&surface.pixels()[idx..idx + 4], &[255, 0, 0, 255]);
}

#[test]
fn module_draw_skips_silently_while_glyph_loads() {
    let mut backend =
        ModuleBackend::new(roster(), SurfaceSpec::new(100, 100), GlyphSlot::new(), 10.0).unwrap();
    backend.draw_all().unwrap();
    assert!(backend.surface().unwrap().pixels().iter().all(|&b| b == 0));
}
