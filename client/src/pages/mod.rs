//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state (form values, busy flags) and
//! delegates shared rendering to `components` and `auth_form`.

pub(crate) mod auth_form;
pub mod dashboard;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod signup;
