//! Light/dark theme toggle for browser pages.
//!
//! [`controller::ThemeController`] binds to a server-rendered toggle button
//! and icon; [`components::ThemeToggle`] renders the same control in Yew apps.

pub mod components;
pub mod config;
pub mod controller;
pub mod hooks;
pub mod models;
pub mod services;

pub use config::ThemeConfig;
pub use controller::{ThemeController, ThemeView, bootstrap};
pub use models::{Theme, ThemeError};
