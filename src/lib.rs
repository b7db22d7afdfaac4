// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Single-screen gallery image editor: crop, rotate, flip, resize, save.

pub mod app;
pub mod config;
pub mod constant;
pub mod domain;
pub mod host;
pub mod i18n;
pub mod ui;

#[cfg(test)]
mod test_utils;
