//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `demo_form`: The demo form itself

mod demo_form;
mod field_renderer;

pub use demo_form::draw as draw_demo_form;
