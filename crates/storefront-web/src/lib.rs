//! Browser platform for the storefront page: DOM access, event translation
//! and the Yew renderer.

pub mod input;
pub mod platform;
pub mod render;
