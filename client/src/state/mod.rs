//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`credentials`, `route`, `ui`) so pages and
//! components can depend on small focused models. None of it outlives the
//! page instance that creates it.

pub mod credentials;
pub mod route;
pub mod ui;
