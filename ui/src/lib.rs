#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod tasks;
pub mod widgets;

pub use app::RosterApp;
