// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod db;
pub mod finance;
pub mod forms;
pub mod logging;
pub mod models;
pub mod month;
pub mod profile;
pub mod store;
pub mod utils;
