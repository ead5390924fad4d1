use super::*;

// =============================================================
// SidebarState
// =============================================================

#[test]
fn sidebar_default_is_expanded_and_closed() {
    let state = SidebarState::default();
    assert!(!state.collapsed);
    assert!(!state.open);
}

#[test]
fn toggle_collapsed_flips_each_call() {
    let mut state = SidebarState::default();
    state.toggle_collapsed();
    assert!(state.collapsed);
    state.toggle_collapsed();
    assert!(!state.collapsed);
}

#[test]
fn open_and_close_do_not_touch_collapse() {
    let mut state = SidebarState { collapsed: true, open: false };
    state.open();
    assert_eq!(state, SidebarState { collapsed: true, open: true });
    state.close();
    assert_eq!(state, SidebarState { collapsed: true, open: false });
}

#[test]
fn close_is_idempotent() {
    let mut state = SidebarState::default();
    state.close();
    state.close();
    assert!(!state.open);
}

#[test]
fn width_class_tracks_collapse() {
    assert_eq!(SidebarState::default().width_class(), "w-64");
    assert_eq!(
        SidebarState { collapsed: true, open: false }.width_class(),
        "w-16"
    );
}

#[test]
fn visibility_class_tracks_open() {
    assert_eq!(SidebarState::default().visibility_class(), "-translate-x-full lg:translate-x-0");
    assert_eq!(
        SidebarState { collapsed: false, open: true }.visibility_class(),
        "translate-x-0"
    );
}
