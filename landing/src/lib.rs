//! # albayt-landing
//!
//! Single-page marketing site for Al Bayt Al Atiq, a GCC logistics and
//! warehousing company. Built with Leptos 0.8 in client-side rendering mode
//! and bundled with trunk.
//!
//! ## Architecture
//!
//! - [`content`] - static copy and images, keyed by closed enums
//! - [`state`] - DOM-free state machines (accordion, tabs, menu, forms)
//! - [`dom`] - smooth scrolling and `setTimeout` for the browser
//! - [`sections`] - one component per page section
//! - [`app`] - the page root
//!
//! Nothing is sent anywhere: both forms acknowledge locally and reset.
//!
//! ---
//!
//! Al Bayt Al Atiq Web Team (c)2025

pub mod app;
pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod logging;
pub mod sections;
pub mod state;

pub use app::App;
pub use error::SiteError;
