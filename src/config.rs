/*
 * ==========================================================================
 * MAPLE - Lexer, Parser & Syntax Tree
 * ==========================================================================
 *
 * License:
 * This file is part of the MAPLE programming language project.
 *
 * MAPLE is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use serde::Deserialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Nesting limit used when the host does not pick one.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Knobs a host can set for one parse.
///
/// Loadable from JSON; every field is optional there:
/// ```json
/// { "source_name": "main.mpl", "max_depth": 64, "token_limit": 100000 }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Label stamped on every diagnostic, usually the file name.
    pub source_name: Option<String>,

    /// Deepest expression/block nesting accepted before the parser gives up
    /// on that statement with a "too deeply nested" error.
    pub max_depth: usize,

    /// Stop once this many tokens have been consumed. Checked at each
    /// statement start and nesting level.
    pub token_limit: Option<usize>,

    /// Cooperative cancellation, polled while parsing.
    #[serde(skip)]
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            source_name: None,
            max_depth: DEFAULT_MAX_DEPTH,
            token_limit: None,
            cancel: None,
        }
    }
}

impl ParseOptions {
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_token_limit(mut self, limit: usize) -> Self {
        self.token_limit = Some(limit);
        self
    }

    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
