// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles shared across the page sections.

pub mod button;
pub mod container;
