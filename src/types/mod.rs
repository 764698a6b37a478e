//! Exchange types shared between callers and sheet backends.

mod cell;
mod range;
mod view;

pub use cell::*;
pub use range::*;
pub use view::*;

/// Helper function for serde skip_serializing_if
pub(crate) fn is_false(b: &bool) -> bool {
    !b
}
