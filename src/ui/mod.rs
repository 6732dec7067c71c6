//! Reply form front end.
//!
//! [`form`] and [`controller`] hold the toolkit-free form logic; the rest
//! renders it in a terminal with ratatui.

pub mod app;
pub mod controller;
pub mod events;
pub mod footer;
pub mod form;
pub mod input;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
