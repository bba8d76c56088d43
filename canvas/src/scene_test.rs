#![allow(clippy::float_cmp)]

use super::*;
use crate::pointer::Corner;
use crate::render::{DrawCommand, Recorder};

// =============================================================
// Helpers
// =============================================================

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn demo_scene() -> SceneController {
    SceneController::from_config(&SceneConfig::default())
}

fn has_render_needed(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::RenderNeeded))
}

/// Starting `MoveTo` x of each shape path in a recording, in draw order.
fn drawn_path_starts(rec: &Recorder) -> Vec<f64> {
    rec.commands
        .windows(2)
        .filter_map(|w| match (&w[0], &w[1]) {
            (DrawCommand::BeginPath, DrawCommand::MoveTo { x, .. }) => Some(*x),
            _ => None,
        })
        .collect()
}

// =============================================================
// Construction and lookup
// =============================================================

#[test]
fn new_scene_is_empty_and_idle() {
    let scene = SceneController::new();
    assert!(scene.is_empty());
    assert_eq!(scene.input(), InputState::Idle);
    assert!(!scene.is_dragging());
}

#[test]
fn demo_scene_lookup_by_id() {
    let scene = demo_scene();
    assert_eq!(scene.len(), 3);
    let snap = scene.shape(2).map(Shape::snapshot);
    assert_eq!(snap, Some(ShapeSnapshot { id: 2, x: 150.0, y: 400.0, width: 250.0, height: 150.0, radius: 20.0 }));
}

#[test]
fn lookup_unknown_id_is_none() {
    assert!(demo_scene().shape(42).is_none());
}

#[test]
fn from_config_applies_trigger_radius_and_style() {
    let config = SceneConfig {
        trigger_radius: 20.0,
        style: Style { fill: "teal".to_owned(), ..Style::default() },
        ..SceneConfig::default()
    };
    let scene = SceneController::from_config(&config);
    assert_eq!(scene.style.fill, "teal");
    let shape = scene.shape(0).unwrap();
    assert!(shape.pointers().iter().all(|p| p.trigger_radius == 20.0));
}

#[test]
fn shape_mut_setters_are_visible_in_snapshots() {
    let mut scene = demo_scene();
    let shape = scene.shape_mut(1).unwrap();
    shape.set_size(100.0, 100.0);
    shape.set_position(10.0, 10.0);
    shape.set_corner_radius(5.0);
    assert_eq!(
        scene.snapshots()[1],
        ShapeSnapshot { id: 1, x: 10.0, y: 10.0, width: 100.0, height: 100.0, radius: 5.0 }
    );
}

#[test]
fn snapshots_json_lists_shapes_in_insertion_order() {
    let mut scene = SceneController::new();
    scene.add_shape(4, 1.0, 2.0, 30.0, 40.0, 5.0);
    assert_eq!(
        scene.snapshots_json().unwrap(),
        r#"[{"id":4,"x":1.0,"y":2.0,"width":30.0,"height":40.0,"radius":5.0}]"#
    );
}

// =============================================================
// add_shape / remove_shape
// =============================================================

#[test]
fn add_shape_appends_and_requests_render() {
    let mut scene = SceneController::new();
    let actions = scene.add_shape(5, 0.0, 0.0, 10.0, 10.0, 2.0);
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(scene.len(), 1);
    assert_eq!(scene.shapes()[0].id(), 5);
}

#[test]
fn add_shape_uses_scene_trigger_radius() {
    let mut scene = SceneController::new();
    scene.trigger_radius = 4.0;
    scene.add_shape(1, 0.0, 0.0, 50.0, 50.0, 0.0);
    assert!(scene.shapes()[0].pointers().iter().all(|p| p.trigger_radius == 4.0));
}

#[test]
fn remove_shape_filters_by_id() {
    let mut scene = demo_scene();
    assert!(scene.remove_shape(1));
    let ids: Vec<_> = scene.shapes().iter().map(Shape::id).collect();
    assert_eq!(ids, vec![0, 2]);
}

#[test]
fn remove_unknown_shape_is_noop() {
    let mut scene = demo_scene();
    assert!(!scene.remove_shape(99));
    assert_eq!(scene.len(), 3);
}

#[test]
fn remove_shape_removes_every_duplicate() {
    let mut scene = SceneController::new();
    scene.add_shape(1, 0.0, 0.0, 10.0, 10.0, 0.0);
    scene.add_shape(1, 50.0, 0.0, 10.0, 10.0, 0.0);
    scene.add_shape(2, 100.0, 0.0, 10.0, 10.0, 0.0);
    assert!(scene.remove_shape(1));
    assert_eq!(scene.len(), 1);
}

#[test]
fn removing_the_dragged_shape_returns_to_idle() {
    let mut scene = demo_scene();
    scene.on_pointer_down(pt(200.0, 175.0));
    assert!(scene.input().is_dragging());
    scene.remove_shape(0);
    assert_eq!(scene.input(), InputState::Idle);
    assert!(!scene.is_dragging());
}

// =============================================================
// Pointer down
// =============================================================

#[test]
fn down_on_center_starts_drag() {
    let mut scene = demo_scene();
    let actions = scene.on_pointer_down(pt(200.0, 175.0));
    assert!(actions.contains(&Action::DragStarted { id: 0, handle: Handle::Center }));
    assert!(has_render_needed(&actions));
    assert_eq!(scene.input(), InputState::Dragging { id: 0, handle: Handle::Center });
    assert!(scene.shape(0).unwrap().is_dragging());
}

#[test]
fn down_on_corner_starts_radius_drag() {
    let mut scene = demo_scene();
    scene.on_pointer_down(pt(695.0, 245.0));
    assert_eq!(
        scene.input(),
        InputState::Dragging { id: 1, handle: Handle::Corner(Corner::BottomRight) }
    );
}

#[test]
fn down_inside_shape_but_off_anchors_stays_idle() {
    let mut scene = demo_scene();
    let actions = scene.on_pointer_down(pt(150.0, 200.0));
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(scene.input(), InputState::Idle);
    assert!(!scene.is_dragging());
}

#[test]
fn down_on_empty_space_stays_idle() {
    let mut scene = demo_scene();
    scene.on_pointer_down(pt(10.0, 10.0));
    assert_eq!(scene.input(), InputState::Idle);
}

#[test]
fn down_offers_press_only_to_first_hit_shape() {
    let mut scene = SceneController::new();
    // Second shape's center sits inside the first shape but away from its anchors.
    scene.add_shape(1, 0.0, 0.0, 200.0, 200.0, 0.0);
    scene.add_shape(2, 40.0, 40.0, 20.0, 20.0, 0.0);
    scene.on_pointer_down(pt(50.0, 50.0));
    assert!(!scene.is_dragging());
    assert!(!scene.shape(2).unwrap().is_dragging());
}

#[test]
fn down_on_overlap_goes_to_earliest_shape() {
    let mut scene = SceneController::new();
    scene.add_shape(1, 0.0, 0.0, 100.0, 100.0, 0.0);
    scene.add_shape(2, 0.0, 0.0, 100.0, 100.0, 0.0);
    scene.on_pointer_down(pt(50.0, 50.0));
    assert!(scene.shape(1).unwrap().is_dragging());
    assert!(!scene.shape(2).unwrap().is_dragging());
}

// =============================================================
// Pointer move
// =============================================================

#[test]
fn idle_move_refreshes_hover_on_all_shapes() {
    let mut scene = demo_scene();
    let actions = scene.on_pointer_move(pt(500.0, 200.0));
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert!(scene.shape(1).unwrap().pointers().iter().all(|p| p.visible));
    assert!(scene.shape(0).unwrap().pointers().iter().all(|p| !p.visible));
    assert!(scene.shape(2).unwrap().pointers().iter().all(|p| !p.visible));
}

#[test]
fn drag_move_translates_only_the_dragged_shape() {
    let mut scene = demo_scene();
    scene.on_pointer_down(pt(200.0, 175.0));
    let actions = scene.on_pointer_move(pt(250.0, 195.0));
    let moved = ShapeSnapshot { id: 0, x: 150.0, y: 120.0, width: 200.0, height: 150.0, radius: 10.0 };
    assert_eq!(actions, vec![Action::ShapeChanged(moved), Action::RenderNeeded]);
    assert_eq!(scene.shape(1).unwrap().snapshot().x, 400.0);
}

#[test]
fn drag_move_does_not_touch_hover_of_other_shapes() {
    let mut scene = demo_scene();
    scene.on_pointer_move(pt(500.0, 200.0));
    scene.on_pointer_move(pt(200.0, 175.0));
    scene.on_pointer_down(pt(200.0, 175.0));
    // Shape 1 was hidden by the last idle move and is not traced while dragging.
    scene.on_pointer_move(pt(500.0, 200.0));
    assert!(scene.shape(1).unwrap().pointers().iter().all(|p| !p.visible));
}

#[test]
fn corner_drag_changes_radius_within_bounds() {
    let mut scene = demo_scene();
    scene.on_pointer_down(pt(105.0, 105.0));
    scene.on_pointer_move(pt(95.0, 95.0));
    let r = scene.shape(0).unwrap().radius();
    assert!((r - (10.0 + 200f64.sqrt())).abs() < 1e-9);
    scene.on_pointer_move(pt(-5000.0, -5000.0));
    assert_eq!(scene.shape(0).unwrap().radius(), 75.0);
    scene.on_pointer_move(pt(5000.0, 5000.0));
    assert_eq!(scene.shape(0).unwrap().radius(), 0.0);
}

// =============================================================
// Pointer up
// =============================================================

#[test]
fn up_releases_and_returns_to_idle() {
    let mut scene = demo_scene();
    scene.on_pointer_down(pt(200.0, 175.0));
    let actions = scene.on_pointer_up(pt(1.0, 1.0));
    assert_eq!(actions, vec![Action::DragEnded { id: 0 }, Action::RenderNeeded]);
    assert_eq!(scene.input(), InputState::Idle);
    assert!(!scene.is_dragging());
    for shape in scene.shapes() {
        assert!(shape.pointers().iter().all(|p| !p.dragging));
    }
}

#[test]
fn releasing_the_shape_directly_returns_scene_to_idle() {
    let mut scene = demo_scene();
    scene.on_pointer_down(pt(200.0, 175.0));
    assert_eq!(scene.input(), InputState::Dragging { id: 0, handle: Handle::Center });
    scene.shape_mut(0).unwrap().release_mouse(pt(200.0, 175.0));
    assert!(!scene.is_dragging());
    assert_eq!(scene.input(), InputState::Idle);
}

#[test]
fn up_while_idle_only_requests_render() {
    let mut scene = demo_scene();
    assert_eq!(scene.on_pointer_up(pt(0.0, 0.0)), vec![Action::RenderNeeded]);
}

#[test]
fn lost_pointer_up_leaves_drag_open() {
    let mut scene = demo_scene();
    scene.on_pointer_down(pt(200.0, 175.0));
    scene.on_pointer_move(pt(210.0, 175.0));
    scene.on_pointer_move(pt(220.0, 175.0));
    assert!(scene.is_dragging());
    assert_eq!(scene.shape(0).unwrap().x(), 120.0);
}

// =============================================================
// handle
// =============================================================

#[test]
fn handle_replays_a_full_gesture() {
    let mut scene = demo_scene();
    let script = [
        GestureEvent::moved(200.0, 175.0),
        GestureEvent::down(200.0, 175.0),
        GestureEvent::moved(190.0, 180.0),
        GestureEvent::moved(180.0, 185.0),
        GestureEvent::up(180.0, 185.0),
        GestureEvent::moved(0.0, 0.0),
    ];
    for ev in script {
        assert!(has_render_needed(&scene.handle(ev)));
    }
    let snap = scene.shape(0).unwrap().snapshot();
    assert_eq!((snap.x, snap.y), (80.0, 110.0));
    assert!(!scene.is_dragging());
    assert!(scene.shape(0).unwrap().pointers().iter().all(|p| !p.visible));
}

#[test]
fn second_gesture_can_grab_a_different_shape() {
    let mut scene = demo_scene();
    scene.handle(GestureEvent::down(200.0, 175.0));
    scene.handle(GestureEvent::up(200.0, 175.0));
    scene.handle(GestureEvent::down(550.0, 200.0));
    assert_eq!(scene.input(), InputState::Dragging { id: 1, handle: Handle::Center });
}

// =============================================================
// Render order
// =============================================================

#[test]
fn render_order_is_insertion_order_when_idle() {
    let scene = demo_scene();
    let ids: Vec<_> = scene.render_order().iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn dragged_shape_renders_last() {
    let mut scene = demo_scene();
    scene.on_pointer_down(pt(200.0, 175.0));
    let ids: Vec<_> = scene.render_order().iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec![1, 2, 0]);
}

#[test]
fn render_order_keeps_relative_order_of_idle_shapes() {
    let mut scene = SceneController::new();
    for id in 0..6 {
        scene.add_shape(id, f64::from(u32::try_from(id).unwrap()) * 100.0, 0.0, 50.0, 50.0, 0.0);
    }
    scene.on_pointer_down(pt(225.0, 25.0));
    let ids: Vec<_> = scene.render_order().iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec![0, 1, 3, 4, 5, 2]);
}

#[test]
fn render_clears_viewport_then_draws_in_order() {
    let mut scene = demo_scene();
    scene.set_viewport(1024.0, 768.0);
    scene.on_pointer_down(pt(200.0, 175.0));
    let mut rec = Recorder::new();
    scene.render(&mut rec).unwrap();
    assert_eq!(rec.commands[0], DrawCommand::ClearRect { x: 0.0, y: 0.0, width: 1024.0, height: 768.0 });
    // Path starts at x + radius: shape 1 (430), shape 2 (170), dragged shape 0 (110).
    let starts = drawn_path_starts(&rec);
    assert_eq!(&starts[..3], &[430.0, 170.0, 110.0]);
    // The dragged shape was hit on the press, so its pointers are drawn.
    assert_eq!(rec.arc_count(), 5);
}

#[test]
fn render_is_idempotent() {
    let mut scene = demo_scene();
    scene.on_pointer_move(pt(150.0, 150.0));
    let mut a = Recorder::new();
    let mut b = Recorder::new();
    scene.render(&mut a).unwrap();
    scene.render(&mut b).unwrap();
    assert_eq!(a.commands, b.commands);
}
