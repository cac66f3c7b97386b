//! Element records, one module per kind.

pub mod button;
pub mod dropdown;
pub mod slider;
pub mod textbox;
