// ABOUTME: Configuration management module for the Fridgechef client
// ABOUTME: Re-exports the environment-driven client configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

/// Environment and client configuration
pub mod environment;

pub use environment::ClientConfig;
