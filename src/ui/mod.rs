// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Page Sections
//!
//! - [`skills`] - Skill progress bars with the staggered reveal animation
//! - [`contact`] - Contact form, validation, and the simulated send
//!
//! # Shared Infrastructure
//!
//! - [`page`] - Section ordering, layout estimates, and visibility math
//! - [`navbar`] - Top navigation bar with section links and theme toggle
//! - [`notifications`] - Toast notification system for user feedback
//! - [`widgets`] - Custom Iced widgets (busy spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod contact;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod page;
pub mod skills;
pub mod styles;
pub mod theming;
pub mod widgets;
