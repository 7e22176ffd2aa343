// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors
// ABOUTME: Helper modules for goalpace-cli
// ABOUTME: Output rendering shared by all commands

pub mod display;
