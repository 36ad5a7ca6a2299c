// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a personal-portfolio desktop app built with the Iced GUI
//! framework.
//!
//! It renders one scrollable page: an intro, skill progress bars that reveal
//! in a staggered cascade when scrolled into view, and a contact form with
//! aggregated validation and a simulated send. Transient toast notifications
//! provide user feedback, one at a time.

pub mod app;
pub mod config;
pub mod content;
pub mod diagnostics;
pub mod error;
pub mod ui;
