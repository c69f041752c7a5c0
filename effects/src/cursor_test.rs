#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;
use crate::policy::{DeviceProfile, PerformanceTier};

const ROOT: ElementId = ElementId(1);
const CARD: ElementId = ElementId(2);
const LABEL: ElementId = ElementId(3);
const BUTTON: ElementId = ElementId(4);
const OTHER: ElementId = ElementId(5);

struct Node {
    parent: Option<ElementId>,
    class: &'static str,
    rect: Rect,
}

/// Small document: a card target with a plain label and a nested button
/// target, plus an unrelated target elsewhere on the page.
struct FakeTree {
    nodes: HashMap<ElementId, Node>,
}

impl FakeTree {
    fn page() -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(ROOT, Node { parent: None, class: "", rect: Rect::new(0.0, 0.0, 1000.0, 800.0) });
        nodes.insert(
            CARD,
            Node { parent: Some(ROOT), class: "cursor-target", rect: Rect::new(100.0, 100.0, 200.0, 100.0) },
        );
        nodes.insert(LABEL, Node { parent: Some(CARD), class: "", rect: Rect::new(120.0, 120.0, 50.0, 20.0) });
        nodes.insert(
            BUTTON,
            Node { parent: Some(CARD), class: "cursor-target", rect: Rect::new(200.0, 150.0, 50.0, 30.0) },
        );
        nodes.insert(
            OTHER,
            Node { parent: Some(ROOT), class: "cursor-target", rect: Rect::new(500.0, 500.0, 100.0, 50.0) },
        );
        Self { nodes }
    }

    fn detach(&mut self, id: ElementId) {
        self.nodes.remove(&id);
    }

    fn move_to(&mut self, id: ElementId, rect: Rect) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.rect = rect;
        }
    }

    fn depth(&self, id: ElementId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id);
        while let Some(parent) = current {
            depth += 1;
            current = self.parent(parent);
        }
        depth
    }
}

impl ElementTree for FakeTree {
    fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.get(&id).and_then(|node| node.parent)
    }

    fn matches(&self, id: ElementId, selector: &str) -> bool {
        let Some(class) = selector.strip_prefix('.') else {
            return false;
        };
        self.nodes.get(&id).is_some_and(|node| node.class == class)
    }

    fn bounding_rect(&self, id: ElementId) -> Option<Rect> {
        self.nodes.get(&id).map(|node| node.rect)
    }

    fn element_at(&self, point: Point) -> Option<ElementId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.rect.contains(point))
            .max_by_key(|(id, _)| self.depth(**id))
            .map(|(id, _)| *id)
    }
}

fn high_end() -> MotionPolicy {
    MotionPolicy::from_profile(DeviceProfile { tier: PerformanceTier::High, reduced_motion: false })
}

fn cursor() -> TargetCursor {
    TargetCursor::new(CursorConfig::default(), high_end()).expect("default config is valid")
}

/// Mounted at t=0 with the pointer resting at (150, 150).
fn mounted_cursor() -> TargetCursor {
    let mut cursor = cursor();
    cursor.mount(Size::new(1000.0, 800.0), 0.0);
    cursor.on_pointer_move(Point::new(150.0, 150.0), 0.0);
    cursor
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
}

// =============================================================
// Configuration
// =============================================================

#[test]
fn config_rejects_non_positive_spin_duration() {
    let config = CursorConfig { spin_duration_s: 0.0, ..CursorConfig::default() };
    assert_eq!(config.validate(), Err(ConfigError::SpinDuration(0.0)));
    assert!(TargetCursor::new(config, high_end()).is_err());
}

#[test]
fn config_rejects_blank_selector() {
    let config = CursorConfig { target_selector: "  ".into(), ..CursorConfig::default() };
    assert_eq!(config.validate(), Err(ConfigError::EmptySelector));
}

#[test]
fn spin_period_scales_with_device_tier() {
    let policy = MotionPolicy::from_profile(DeviceProfile { tier: PerformanceTier::Medium, reduced_motion: false });
    let cursor = TargetCursor::new(CursorConfig::default(), policy).expect("valid");
    assert!((cursor.spin().period_ms() - 2600.0).abs() < 1e-9);
}

// =============================================================
// Geometry helpers
// =============================================================

#[test]
fn target_offsets_frame_the_box_outside_the_border() {
    let rect = Rect::new(100.0, 100.0, 200.0, 100.0);
    let [tl, tr, br, bl] = target_offsets(rect, Point::new(150.0, 150.0), Point::ZERO);
    assert_eq!(tl, Point::new(-53.0, -53.0));
    assert_eq!(tr, Point::new(141.0, -53.0));
    assert_eq!(br, Point::new(141.0, 41.0));
    assert_eq!(bl, Point::new(-53.0, 41.0));
}

#[test]
fn target_offsets_apply_drift_to_every_corner() {
    let rect = Rect::new(0.0, 0.0, 40.0, 40.0);
    let plain = target_offsets(rect, Point::ZERO, Point::ZERO);
    let drifted = target_offsets(rect, Point::ZERO, Point::new(2.0, -1.0));
    for (a, b) in plain.iter().zip(drifted) {
        assert_eq!(*a + Point::new(2.0, -1.0), b);
    }
}

#[test]
fn idle_offsets_form_a_square_around_the_centre() {
    let [tl, tr, br, bl] = idle_offsets();
    assert_eq!(tl, Point::new(-18.0, -18.0));
    assert_eq!(tr, Point::new(6.0, -18.0));
    assert_eq!(br, Point::new(6.0, 6.0));
    assert_eq!(bl, Point::new(-18.0, 6.0));
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn disabled_engine_requests_nothing() {
    let tree = FakeTree::page();
    let mut cursor = TargetCursor::new(CursorConfig::default(), MotionPolicy::disabled()).expect("valid");
    assert!(!cursor.is_enabled());
    assert!(cursor.mount(Size::new(1000.0, 800.0), 0.0).is_empty());
    assert!(cursor.on_pointer_over(&tree, CARD, 10.0).is_empty());
    assert!(cursor.tick(&tree, 20.0).is_empty());
    assert!(!cursor.frame(20.0).visible);
    assert!(cursor.unmount(30.0).is_empty());
}

#[test]
fn reduced_motion_disables_the_cursor() {
    let policy = MotionPolicy::from_profile(DeviceProfile { tier: PerformanceTier::High, reduced_motion: true });
    let mut cursor = TargetCursor::new(CursorConfig::default(), policy).expect("valid");
    assert!(cursor.mount(Size::new(800.0, 600.0), 0.0).is_empty());
}

#[test]
fn mount_centres_hides_and_listens() {
    let mut cursor = cursor();
    let actions = cursor.mount(Size::new(1000.0, 800.0), 0.0);
    assert_eq!(actions, vec![CursorAction::HideSystemCursor, CursorAction::ListenWindow]);

    let frame = cursor.frame(0.0);
    assert!(frame.visible);
    assert_eq!(frame.position, Point::new(500.0, 400.0));
    assert_eq!(frame.corners, idle_offsets());
    assert!(cursor.spin().is_running());
}

#[test]
fn mount_keeps_system_cursor_when_configured() {
    let config = CursorConfig { hide_system_cursor: false, ..CursorConfig::default() };
    let mut cursor = TargetCursor::new(config, high_end()).expect("valid");
    assert_eq!(cursor.mount(Size::new(10.0, 10.0), 0.0), vec![CursorAction::ListenWindow]);
    assert_eq!(cursor.unmount(5.0), vec![CursorAction::UnlistenWindow]);
}

#[test]
fn second_mount_is_ignored() {
    let mut cursor = mounted_cursor();
    assert!(cursor.mount(Size::new(1000.0, 800.0), 10.0).is_empty());
}

#[test]
fn unmount_while_tracking_tears_everything_down() {
    let tree = FakeTree::page();
    let mut cursor = mounted_cursor();
    cursor.on_pointer_over(&tree, LABEL, 0.0);

    let actions = cursor.unmount(50.0);
    assert_eq!(
        actions,
        vec![
            CursorAction::UnlistenTarget(CARD),
            CursorAction::UnlistenWindow,
            CursorAction::RestoreSystemCursor,
        ]
    );
    assert_eq!(cursor.active_target(), None);
    assert!(!cursor.resume_pending());
    assert!(!cursor.spin().is_running());
    assert!(!cursor.frame(60.0).visible);
    assert!(cursor.unmount(70.0).is_empty());
}

#[test]
fn unmount_cancels_pending_resume() {
    let tree = FakeTree::page();
    let mut cursor = mounted_cursor();
    cursor.on_pointer_over(&tree, CARD, 0.0);
    cursor.on_target_leave(CARD, 100.0);
    assert!(cursor.resume_pending());
    cursor.unmount(110.0);
    assert!(!cursor.resume_pending());
}

// =============================================================
// Pointer following
// =============================================================

#[test]
fn pointer_move_eases_toward_the_pointer() {
    let mut cursor = cursor();
    cursor.mount(Size::new(1000.0, 800.0), 0.0);
    cursor.on_pointer_move(Point::new(600.0, 400.0), 0.0);

    let mid = cursor.frame(50.0).position;
    assert!(mid.x > 500.0 && mid.x < 600.0);
    assert_eq!(cursor.frame(100.0).position, Point::new(600.0, 400.0));
}

#[test]
fn press_feedback_scales_and_recovers() {
    let mut cursor = mounted_cursor();
    cursor.on_pointer_down(0.0);
    assert!((cursor.frame(200.0).scale - PRESS_CURSOR_SCALE).abs() < 1e-9);
    assert!((cursor.frame(300.0).dot_scale - PRESS_DOT_SCALE).abs() < 1e-9);

    cursor.on_pointer_up(300.0);
    assert!((cursor.frame(600.0).scale - 1.0).abs() < 1e-9);
    assert!((cursor.frame(600.0).dot_scale - 1.0).abs() < 1e-9);
}

// =============================================================
// Acquisition
// =============================================================

#[test]
fn hovering_a_descendant_acquires_the_enclosing_target() {
    let tree = FakeTree::page();
    let mut cursor = mounted_cursor();
    let actions = cursor.on_pointer_over(&tree, LABEL, 0.0);
    assert_eq!(actions, vec![CursorAction::ListenTarget(CARD)]);
    assert_eq!(cursor.active_target(), Some(CARD));
    assert!(cursor.spin().is_paused());
}

#[test]
fn nested_targets_prefer_the_innermost() {
    let tree = FakeTree::page();
    let mut cursor = mounted_cursor();
    cursor.on_pointer_over(&tree, BUTTON, 0.0);
    assert_eq!(cursor.active_target(), Some(BUTTON));
}

#[test]
fn hovering_a_non_target_is_a_no_op() {
    let tree = FakeTree::page();
    let mut cursor = mounted_cursor();
    assert!(cursor.on_pointer_over(&tree, ROOT, 0.0).is_empty());
    assert_eq!(cursor.state(), TrackState::Idle);
    assert!(!cursor.spin().is_paused());
}

#[test]
fn reentering_the_active_target_changes_nothing() {
    let tree = FakeTree::page();
    let mut cursor = mounted_cursor();
    cursor.on_pointer_over(&tree, LABEL, 0.0);
    cursor.tick(&tree, 16.0);
    let before = cursor.frame(100.0);

    assert!(cursor.on_pointer_over(&tree, LABEL, 50.0).is_empty());
    assert!(cursor.on_pointer_over(&tree, CARD, 60.0).is_empty());
    assert_eq!(cursor.frame(100.0), before);
    // Settle guard was not re-armed.
    assert!(cursor.on_target_move(CARD, Point::new(160.0, 160.0)));
}

#[test]
fn switching_targets_unlistens_the_previous_first() {
    let tree = FakeTree::page();
    let mut cursor = mounted_cursor();
    cursor.on_pointer_over(&tree, LABEL, 0.0);
    let actions = cursor.on_pointer_over(&tree, OTHER, 100.0);
    assert_eq!(actions, vec![CursorAction::UnlistenTarget(CARD), CursorAction::ListenTarget(OTHER)]);
    assert_eq!(cursor.active_target(), Some(OTHER));
}

#[test]
fn acquisition_aligns_corners_onto_the_target() {
    let tree = FakeTree::page();
    let mut cursor = mounted_cursor();
    cursor.on_pointer_over(&tree, LABEL, 0.0);
    let corners = cursor.frame(CORNER_ALIGN_MS).corners;
    let expected = target_offsets(Rect::new(100.0, 100.0, 200.0, 100.0), Point::new(150.0, 150.0), Point::ZERO);
    for (got, want) in corners.iter().zip(expected) {
        assert!(close(*got, want), "{got:?} != {want:?}");
    }
}

#[test]
fn paused_rotation_is_held_and_corners_are_counter_rotated() {
    let tree = FakeTree::page();
    let mut cursor = mounted_cursor();
    // Period 2000ms, so a quarter turn at 500ms.
    cursor.on_pointer_over(&tree, LABEL, 500.0);
    let frame = cursor.frame(1000.0);
    assert!((frame.rotation_deg - 90.0).abs() < 1e-6);

    let expected = target_offsets(Rect::new(100.0, 100.0, 200.0, 100.0), Point::new(150.0, 150.0), Point::ZERO);
    for (local, want) in frame.corners.iter().zip(expected) {
        assert!(close(local.rotate_deg(90.0), want), "{local:?} does not map to {want:?}");
    }
}

// =============================================================
// Parallax throttle
// =============================================================

#[test]
fn moves_during_the_settle_frame_are_dropped() {
    let tree = FakeTree::page();
    let mut cursor = mounted_cursor();
    cursor.on_pointer_over(&tree, LABEL, 0.0);
    assert!(!cursor.on_target_move(CARD, Point::new(200.0, 150.0)));
    cursor.tick(&tree, 16.0);
    assert!(cursor.on_target_move(CARD, Point::new(200.0, 150.0)));
}

#[test]
fn at_most_one_realignment_is_queued() {
    let tree = FakeTree::page();
    let mut cursor = mounted_cursor();
    cursor.on_pointer_over(&tree, LABEL, 0.0);
    cursor.tick(&tree, 16.0);

    assert!(cursor.on_target_move(CARD, Point::new(290.0, 190.0)));
    assert!(!cursor.on_target_move(CARD, Point::new(100.0, 100.0)));
    assert!(cursor.has_pending_realign());

    cursor.tick(&tree, 32.0);
    assert!(!cursor.has_pending_realign());
    assert!(cursor.on_target_move(CARD, Point::new(100.0, 100.0)));
}

#[test]
fn realignment_adds_parallax_drift() {
    let tree = FakeTree::page();
    let mut cursor = mounted_cursor();
    cursor.on_pointer_over(&tree, LABEL, 0.0);
    cursor.tick(&tree, 16.0);
    cursor.on_target_move(CARD, Point::new(290.0, 190.0));
    cursor.tick(&tree, 32.0);

    // (290, 190) is (90, 40) from the card centre; high tier strength 5e-5.
    let drift = Point::new(90.0, 40.0).scale(5e-5);
    let expected = target_offsets(Rect::new(100.0, 100.0, 200.0, 100.0), Point::new(150.0, 150.0), drift);
    let corners = cursor.frame(32.0 + CORNER_ALIGN_MS).corners;
    for (got, want) in corners.iter().zip(expected) {
        assert!(close(*got, want), "{got:?} != {want:?}");
    }
}

#[test]
fn moves_over_a_stale_target_are_rejected() {
    let tree = FakeTree::page();
    let mut cursor = mounted_cursor();
    assert!(!cursor.on_target_move(CARD, Point::ZERO));
    cursor.on_pointer_over(&tree, LABEL, 0.0);
    cursor.tick(&tree, 16.0);
    assert!(!cursor.on_target_move(OTHER, Point::ZERO));
}

// =============================================================
// Release
// =============================================================

#[test]
fn leaving_returns_corners_and_resumes_after_debounce() {
    let tree = FakeTree::page();
    let mut cursor = mounted_cursor();
    cursor.on_pointer_over(&tree, LABEL, 500.0);

    let actions = cursor.on_target_leave(CARD, 1000.0);
    assert_eq!(actions, vec![CursorAction::UnlistenTarget(CARD)]);
    assert_eq!(cursor.state(), TrackState::Idle);

    cursor.tick(&tree, 1020.0);
    assert!(cursor.spin().is_paused());
    cursor.tick(&tree, 1050.0);
    assert!(!cursor.spin().is_paused());
    assert!((cursor.frame(1050.0).rotation_deg - 90.0).abs() < 1e-6);
    assert!(cursor.frame(1550.0).rotation_deg > 90.0);

    assert_eq!(cursor.frame(1000.0 + CORNER_RELEASE_MS).corners, idle_offsets());
}

#[test]
fn leave_for_another_element_is_ignored() {
    let tree = FakeTree::page();
    let mut cursor = mounted_cursor();
    assert!(cursor.on_target_leave(CARD, 0.0).is_empty());
    cursor.on_pointer_over(&tree, LABEL, 0.0);
    assert!(cursor.on_target_leave(OTHER, 10.0).is_empty());
    assert_eq!(cursor.active_target(), Some(CARD));
}

#[test]
fn reacquiring_during_debounce_cancels_the_resume() {
    let tree = FakeTree::page();
    let mut cursor = mounted_cursor();
    cursor.on_pointer_over(&tree, LABEL, 0.0);
    cursor.on_target_leave(CARD, 100.0);

    let actions = cursor.on_pointer_over(&tree, OTHER, 120.0);
    assert_eq!(actions, vec![CursorAction::ListenTarget(OTHER)]);
    assert!(!cursor.resume_pending());
    cursor.tick(&tree, 200.0);
    assert!(cursor.spin().is_paused());
}

#[test]
fn scroll_keeps_target_while_cursor_is_over_it() {
    let tree = FakeTree::page();
    let mut cursor = mounted_cursor();
    cursor.on_pointer_over(&tree, LABEL, 0.0);
    assert!(cursor.on_scroll(&tree, 200.0).is_empty());
    assert_eq!(cursor.active_target(), Some(CARD));
}

#[test]
fn scroll_releases_when_the_target_moves_away() {
    let mut tree = FakeTree::page();
    let mut cursor = mounted_cursor();
    cursor.on_pointer_over(&tree, LABEL, 0.0);

    tree.move_to(CARD, Rect::new(100.0, 400.0, 200.0, 100.0));
    let actions = cursor.on_scroll(&tree, 200.0);
    assert_eq!(actions, vec![CursorAction::UnlistenTarget(CARD)]);
    assert!(cursor.resume_pending());
}

#[test]
fn scroll_while_idle_is_a_no_op() {
    let tree = FakeTree::page();
    let mut cursor = mounted_cursor();
    assert!(cursor.on_scroll(&tree, 10.0).is_empty());
}

#[test]
fn detached_target_is_released_on_the_next_tick() {
    let mut tree = FakeTree::page();
    let mut cursor = mounted_cursor();
    cursor.on_pointer_over(&tree, LABEL, 0.0);
    tree.detach(CARD);

    let actions = cursor.tick(&tree, 16.0);
    assert_eq!(actions, vec![CursorAction::UnlistenTarget(CARD)]);
    assert_eq!(cursor.active_target(), None);
    assert!(cursor.resume_pending());
}
