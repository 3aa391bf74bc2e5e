// ABOUTME: Unified error handling re-exported from fridgechef-core
// ABOUTME: AppError, ErrorCode, and validation errors shared by stores and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

pub use fridgechef_core::errors::*;
