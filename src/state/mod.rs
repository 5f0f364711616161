//! Application state module

pub mod forms;
mod record;
mod step;
mod toast;
mod transition;
pub mod validation;
mod wizard;

pub use forms::*;
pub use record::*;
pub use step::*;
pub use toast::*;
pub use transition::*;
pub use wizard::*;
