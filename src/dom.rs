//! HTML node trees and rendering
//!
//! Re-exports `rio-dom`. See [`Node`] for the tree model and [`Render`] for
//! the render contract.

pub use rio_dom::*;
