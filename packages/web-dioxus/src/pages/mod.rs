//! Application pages

mod home;

pub use home::*;
