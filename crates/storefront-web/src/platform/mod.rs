pub mod dom;
pub mod reveal;
