// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Manifest line tokenizer.
//!
//! ```text
//! libA "vendor/my lib" 'https://x/a.git' main
//!  |        |                 |            |
//!  v        v                 v            v
//! libA  vendor/my lib   https://x/a.git   main
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Double-quoted run, single-quoted run, or any run of non-space.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(?:\\.|[^"])*"|'(?:\\.|[^'])*'|\S+"#).expect("token pattern is valid")
});

/// Split a manifest line into tokens.
///
/// Quoted runs keep their whitespace and lose their surrounding quotes;
/// `\"` and `\'` are unescaped in every token. An unterminated quote never
/// fails: the quote character simply starts a bare token.
#[must_use]
pub fn split(line: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(line)
        .map(|m| unescape(strip_quotes(m.as_str())))
        .collect()
}

fn strip_quotes(token: &str) -> &str {
    let bytes = token.as_bytes();
    match bytes.first() {
        // a lone quote strips to an empty token
        Some(&q @ (b'"' | b'\'')) if bytes[bytes.len() - 1] == q => {
            token.get(1..token.len() - 1).unwrap_or_default()
        }
        _ => token,
    }
}

fn unescape(token: &str) -> String {
    token.replace("\\\"", "\"").replace("\\'", "'")
}
