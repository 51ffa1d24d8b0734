//! Host-testable state machine and view models for the storefront page.

pub mod app;
pub mod content;
pub mod form;
pub mod gesture;
pub mod input;
pub mod render;
pub mod section;
pub mod text_policy;
