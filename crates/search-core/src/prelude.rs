// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use search_core::prelude::*;
//! ```

pub use crate::{
    CompileError, CompileOptions, Compiled, Driver, FieldMeta, Mode, Paging, QueryHandle, Search,
    SearchValue, Select, Transform, Value, Walker, compile
};
