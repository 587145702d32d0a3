use proptest::prelude::*;

use super::*;
use crate::window::WindowConfig;

fn open_default(manager: &mut WindowManager, id: &str) {
    manager.open(id, WindowConfig::titled(id));
}

#[test]
fn test_open_assigns_monotonic_z() {
    let mut manager = WindowManager::new();

    open_default(&mut manager, "w1");
    open_default(&mut manager, "w2");

    assert_eq!(manager.get("w1").unwrap().z_index, Z_INDEX_BASE);
    assert_eq!(manager.get("w2").unwrap().z_index, Z_INDEX_BASE + 1);
}

#[test]
fn test_open_staggers_default_geometry() {
    let mut manager = WindowManager::new();

    open_default(&mut manager, "w1");
    open_default(&mut manager, "w2");

    let first = manager.get("w1").unwrap().rect;
    let second = manager.get("w2").unwrap().rect;
    assert_eq!(second.x, first.x + CASCADE_OFFSET);
    assert_eq!(second.y, first.y + CASCADE_OFFSET);
    assert_eq!(first.w, DEFAULT_WINDOW_WIDTH);
    assert_eq!(first.h, DEFAULT_WINDOW_HEIGHT);
}

#[test]
fn test_open_existing_id_never_replaces_record() {
    let mut manager = WindowManager::new();

    manager.open("w1", WindowConfig::with_rect("Original", Rect::new(5, 6, 300, 200)));
    open_default(&mut manager, "w2");

    // Re-open with a different config: title/geometry ignored, raised.
    manager.open("w1", WindowConfig::with_rect("Replaced", Rect::new(0, 0, 1, 1)));

    let w1 = manager.get("w1").unwrap();
    assert_eq!(w1.title, "Original");
    assert_eq!(w1.rect, Rect::new(5, 6, 300, 200));
    assert!(w1.z_index > manager.get("w2").unwrap().z_index);
    assert_eq!(manager.len(), 2);
}

#[test]
fn test_open_minimized_id_restores() {
    let mut manager = WindowManager::new();

    open_default(&mut manager, "w1");
    open_default(&mut manager, "w2");
    manager.minimize("w1");

    open_default(&mut manager, "w1");

    let w1 = manager.get("w1").unwrap();
    assert!(!w1.minimized);
    assert!(w1.z_index > manager.get("w2").unwrap().z_index);
}

#[test]
fn test_close_is_idempotent() {
    let mut manager = WindowManager::new();

    open_default(&mut manager, "w1");
    manager.close("w1");
    manager.close("w1");
    manager.close("never-opened");

    assert!(manager.is_empty());
}

#[test]
fn test_reopen_after_close_is_fresh_record() {
    let mut manager = WindowManager::new();

    open_default(&mut manager, "w1");
    manager.toggle_maximize("w1");
    manager.close("w1");

    manager.open("w1", WindowConfig::titled("Fresh"));
    let w1 = manager.get("w1").unwrap();
    assert_eq!(w1.title, "Fresh");
    assert!(!w1.maximized);
    assert!(w1.restore_rect.is_none());
}

#[test]
fn test_minimize_keeps_z_and_geometry() {
    let mut manager = WindowManager::new();

    open_default(&mut manager, "w1");
    let before = manager.get("w1").unwrap().clone();

    manager.minimize("w1");

    let after = manager.get("w1").unwrap();
    assert!(after.minimized);
    assert_eq!(after.z_index, before.z_index);
    assert_eq!(after.rect, before.rect);
}

#[test]
fn test_visible_windows_excludes_minimized() {
    let mut manager = WindowManager::new();

    open_default(&mut manager, "w1");
    open_default(&mut manager, "w2");
    manager.minimize("w1");

    let visible: Vec<&str> = manager
        .visible_windows()
        .iter()
        .map(|w| w.id.as_str())
        .collect();
    assert_eq!(visible, vec!["w2"]);
    assert_eq!(manager.len(), 2);

    manager.restore("w1");
    let visible: Vec<&str> = manager
        .visible_windows()
        .iter()
        .map(|w| w.id.as_str())
        .collect();
    assert_eq!(visible, vec!["w2", "w1"]);
    assert_eq!(manager.focused().unwrap().id, "w1");
}

#[test]
fn test_bring_to_front_tops_the_stack() {
    let mut manager = WindowManager::new();

    open_default(&mut manager, "w1");
    open_default(&mut manager, "w2");
    manager.bring_to_front("w1");

    let w1 = manager.get("w1").unwrap();
    let w2 = manager.get("w2").unwrap();
    assert!(w1.z_index > w2.z_index);

    // Unknown ids neither panic nor consume z-indices.
    let next = manager.next_z_index();
    manager.bring_to_front("ghost");
    assert_eq!(manager.next_z_index(), next);
}

#[test]
fn test_toggle_maximize_round_trip() {
    let mut manager = WindowManager::new();
    manager.set_viewport(1920, 1080);

    manager.open("w1", WindowConfig::with_rect("W", Rect::new(10, 20, 300, 200)));
    manager.toggle_maximize("w1");

    let maxed = manager.get("w1").unwrap();
    assert!(maxed.maximized);
    assert_eq!(maxed.rect, Rect::new(0, 0, 1920, 1080));
    assert_eq!(maxed.restore_rect, Some(Rect::new(10, 20, 300, 200)));

    manager.toggle_maximize("w1");

    let restored = manager.get("w1").unwrap();
    assert!(!restored.maximized);
    assert_eq!(restored.rect, Rect::new(10, 20, 300, 200));
    assert!(restored.restore_rect.is_none());
}

#[test]
fn test_geometry_updates_ignored_while_maximized() {
    let mut manager = WindowManager::new();

    manager.open("w1", WindowConfig::with_rect("W", Rect::new(10, 20, 300, 200)));
    manager.toggle_maximize("w1");

    manager.update_position("w1", 99, 99);
    manager.update_size("w1", 1, 1);

    assert_eq!(manager.get("w1").unwrap().rect, Rect::of_size(Size::new(1280, 800)));

    manager.toggle_maximize("w1");
    manager.update_position("w1", 99, 98);
    manager.update_size("w1", 400, 300);
    assert_eq!(manager.get("w1").unwrap().rect, Rect::new(99, 98, 400, 300));
}

#[test]
fn test_set_viewport_rederives_maximized_geometry() {
    let mut manager = WindowManager::new();

    open_default(&mut manager, "w1");
    open_default(&mut manager, "w2");
    manager.toggle_maximize("w1");

    manager.set_viewport(800, 600);

    assert_eq!(manager.get("w1").unwrap().rect, Rect::new(0, 0, 800, 600));
    // Non-maximized windows keep their geometry.
    assert_ne!(manager.get("w2").unwrap().rect, Rect::new(0, 0, 800, 600));
}

#[test]
fn test_operations_on_unknown_ids_are_noops() {
    let mut manager = WindowManager::new();

    manager.minimize("ghost");
    manager.restore("ghost");
    manager.toggle_maximize("ghost");
    manager.update_position("ghost", 1, 2);
    manager.update_size("ghost", 3, 4);

    assert!(manager.is_empty());
    assert!(manager.get("ghost").is_none());
}

#[test]
fn test_scenario_two_window_session() {
    let mut manager = WindowManager::new();

    open_default(&mut manager, "w1");
    open_default(&mut manager, "w2");
    assert_eq!(manager.get("w1").unwrap().z_index, 1000);
    assert_eq!(manager.get("w2").unwrap().z_index, 1001);

    manager.bring_to_front("w1");
    assert!(manager.get("w1").unwrap().z_index > manager.get("w2").unwrap().z_index);

    manager.minimize("w1");
    assert!(!manager.visible_windows().iter().any(|w| w.id == "w1"));

    manager.restore("w1");
    assert!(manager.visible_windows().iter().any(|w| w.id == "w1"));
    let top_z = manager.windows().last().unwrap().z_index;
    assert_eq!(manager.get("w1").unwrap().z_index, top_z);
}

/// Operations a session can issue against the manager.
#[derive(Clone, Debug)]
enum Op {
    Open(u8),
    Close(u8),
    Minimize(u8),
    Restore(u8),
    BringToFront(u8),
    ToggleMaximize(u8),
    Move(u8, i32, i32),
    Resize(u8, i32, i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let id = 0u8..6;
    prop_oneof![
        id.clone().prop_map(Op::Open),
        id.clone().prop_map(Op::Close),
        id.clone().prop_map(Op::Minimize),
        id.clone().prop_map(Op::Restore),
        id.clone().prop_map(Op::BringToFront),
        id.clone().prop_map(Op::ToggleMaximize),
        (id.clone(), -500i32..500, -500i32..500).prop_map(|(i, x, y)| Op::Move(i, x, y)),
        (id, 1i32..2000, 1i32..2000).prop_map(|(i, w, h)| Op::Resize(i, w, h)),
    ]
}

fn apply(manager: &mut WindowManager, op: &Op) {
    let name = |i: &u8| format!("w{}", i);
    match op {
        Op::Open(i) => manager.open(&name(i), WindowConfig::titled(name(i))),
        Op::Close(i) => manager.close(&name(i)),
        Op::Minimize(i) => manager.minimize(&name(i)),
        Op::Restore(i) => manager.restore(&name(i)),
        Op::BringToFront(i) => manager.bring_to_front(&name(i)),
        Op::ToggleMaximize(i) => manager.toggle_maximize(&name(i)),
        Op::Move(i, x, y) => manager.update_position(&name(i), *x, *y),
        Op::Resize(i, w, h) => manager.update_size(&name(i), *w, *h),
    }
}

proptest! {
    #[test]
    fn prop_z_indices_stay_unique(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut manager = WindowManager::new();
        for op in &ops {
            apply(&mut manager, op);
        }

        let mut zs: Vec<u64> = manager.windows().iter().map(|w| w.z_index).collect();
        zs.sort_unstable();
        zs.dedup();
        prop_assert_eq!(zs.len(), manager.len());
    }

    #[test]
    fn prop_bring_to_front_dominates(
        ops in prop::collection::vec(op_strategy(), 0..64),
        target in 0u8..6,
    ) {
        let mut manager = WindowManager::new();
        for op in &ops {
            apply(&mut manager, op);
        }

        let id = format!("w{}", target);
        manager.open(&id, WindowConfig::titled(&id));
        manager.bring_to_front(&id);

        let top = manager.get(&id).unwrap().z_index;
        for window in manager.windows() {
            if window.id != id {
                prop_assert!(window.z_index < top);
            }
        }
    }

    #[test]
    fn prop_saved_geometry_iff_maximized(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut manager = WindowManager::new();
        for op in &ops {
            apply(&mut manager, op);
        }

        for window in manager.windows() {
            prop_assert_eq!(window.maximized, window.restore_rect.is_some());
        }
    }

    #[test]
    fn prop_double_toggle_restores_geometry(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut manager = WindowManager::new();
        for op in &ops {
            apply(&mut manager, op);
        }

        let unmaximized: Vec<(String, Rect)> = manager
            .windows()
            .iter()
            .filter(|w| !w.maximized)
            .map(|w| (w.id.clone(), w.rect))
            .collect();

        for (id, rect) in unmaximized {
            manager.toggle_maximize(&id);
            manager.toggle_maximize(&id);
            prop_assert_eq!(manager.get(&id).unwrap().rect, rect);
        }
    }
}
