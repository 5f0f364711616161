//! Dialog overlays

mod base;
mod toast;

pub use toast::render_toast;
