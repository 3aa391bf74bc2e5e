// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors
// ABOUTME: Helper modules for fridgechef-cli
// ABOUTME: Terminal rendering of store snapshots and notifications

pub mod display;
