// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod advisor;
pub mod cli;
pub mod commands;
pub mod connect;
pub mod models;
pub mod seed;
pub mod state;
pub mod store;
pub mod summary;
pub mod utils;
