//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (brand, sidebar, shell) and loading
//! indicators. Pages compose them; components never navigate on their own
//! except the sidebar's menu entries.

pub mod app_shell;
pub mod brand;
pub mod loading;
pub mod sidebar;
