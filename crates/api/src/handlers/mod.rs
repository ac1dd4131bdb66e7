//! Request handlers, grouped by resource.

pub mod category;
pub mod question;
pub mod quiz;
