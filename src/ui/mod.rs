// SPDX-License-Identifier: MPL-2.0
//! User interface: the booth editor component, its interaction state and
//! theming.

pub mod booth;
pub mod state;
pub mod theming;
