//! Primitive Components
//!
//! Basic building blocks like buttons and checkboxes.

pub mod button;
pub mod checkbox;
