// ABOUTME: Common benchmark utilities and test fixtures for performance testing
// ABOUTME: Provides reusable metric sample generators for Criterion benchmarks
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Common benchmark utilities and test fixtures.

pub mod fixtures;
