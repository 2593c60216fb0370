#[macro_use]
extern crate derive_more;

pub mod basic;
pub mod error;
pub mod food;
pub mod grid;
pub mod prefs;
pub mod snake;
