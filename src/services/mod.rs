// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod agro;
pub mod crop_health;
pub mod weather;

pub use agro::{AgroClient, AgroTimeouts};
pub use crop_health::CropHealthService;
pub use weather::WeatherService;
