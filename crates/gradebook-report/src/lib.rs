//! gradebook-report - Terminal and HTML renderings of a grade calculation.

pub mod html;
pub mod text;
