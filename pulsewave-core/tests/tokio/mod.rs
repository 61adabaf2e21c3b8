// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod cancellation_token_tests;
pub mod shared_state_tests;
pub mod wave_task_tests;
