//! Local UI chrome state for the application shell.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns (sidebar width mode, mobile overlay)
//! out of page logic so the shell and the sidebar can share one signal.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Sidebar presentation state.
///
/// `collapsed` narrows the desktop sidebar to icons only. `open` controls the
/// slide-in sidebar and its backdrop on small screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub collapsed: bool,
    pub open: bool,
}

impl SidebarState {
    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Width utility class for the sidebar panel.
    pub fn width_class(self) -> &'static str {
        if self.collapsed { "w-16" } else { "w-64" }
    }

    /// Slide position class. The sidebar is always visible on wide screens.
    pub fn visibility_class(self) -> &'static str {
        if self.open { "translate-x-0" } else { "-translate-x-full lg:translate-x-0" }
    }
}
