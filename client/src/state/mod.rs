//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`form`, `predictions`, `insights`) so each
//! component depends on a small focused model.

pub mod form;
pub mod insights;
pub mod predictions;
