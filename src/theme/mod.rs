//! Theme - Colors used by the table components

pub mod colors;
