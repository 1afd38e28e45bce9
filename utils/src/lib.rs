// SPDX-License-Identifier: GPL-3.0-only

pub mod env;
pub mod styling;
