// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Text grammar of unit tokens.
//!
//! A point is written as a run of unit tokens, each in either the default
//! form (`2023-08-29T12:30:00.`) or the alternative form
//! (`Y2023AugD29H12M30S00`). Tokens are recognised left to right; at each
//! position the units are tried in [`Unit::PARSE_ORDER`], default form
//! before alternative form, and the first match wins.

use std::sync::OnceLock;

use regex::Regex;

use crate::Unit;
use crate::registry::{Pattern, UNIT_SPECS};

/// Which grammar a token was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// Default form, e.g. `-08-`
    Default,

    /// Alternative form, e.g. `Aug`
    Alternative,
}

/// A unit token recognised at the start of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Unit of the token
    pub unit: Unit,
    /// Value carried by the token, not yet checked against the domain
    pub value: u16,
    /// Length of the token in bytes
    pub len: usize,
    /// Grammar the token was written in
    pub form: Form,
}

/// Result of splitting a text into unit tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    /// Tokens in text order
    pub tokens: Vec<Token>,
    /// Runs of characters that no unit pattern accepted
    pub unmatched: Vec<String>,
}

#[derive(Debug)]
struct CompiledUnit {
    unit: Unit,
    default: Regex,
    default_boundary: bool,
    alternative: Regex,
    alternative_boundary: bool,
}

fn compile(pattern: Pattern) -> Regex {
    Regex::new(&format!("^(?:{})", pattern.regex)).unwrap()
}

fn grammar() -> &'static [CompiledUnit] {
    static GRAMMAR: OnceLock<Vec<CompiledUnit>> = OnceLock::new();
    GRAMMAR.get_or_init(|| {
        UNIT_SPECS
            .iter()
            .map(|spec| CompiledUnit {
                unit: spec.unit,
                default: compile(spec.default_pattern),
                default_boundary: spec.default_pattern.digit_boundary,
                alternative: compile(spec.alternative_pattern),
                alternative_boundary: spec.alternative_pattern.digit_boundary,
            })
            .collect()
    })
}

fn match_one(re: &Regex, digit_boundary: bool, unit: Unit, text: &str) -> Option<(u16, usize)> {
    let caps = re.captures(text)?;
    let whole = caps.get(0)?;
    if digit_boundary
        && text
            .get(whole.end()..)
            .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
    {
        return None;
    }

    let value = unit.spec().value_of(caps.get(1)?.as_str())?;
    Some((value, whole.end()))
}

/// Recognise the unit token at the start of `text`.
#[must_use]
pub fn match_token(text: &str) -> Option<Token> {
    grammar().iter().find_map(|c| {
        if let Some((value, len)) = match_one(&c.default, c.default_boundary, c.unit, text) {
            Some(Token {
                unit: c.unit,
                value,
                len,
                form: Form::Default,
            })
        } else {
            match_one(&c.alternative, c.alternative_boundary, c.unit, text).map(|(value, len)| {
                Token {
                    unit: c.unit,
                    value,
                    len,
                    form: Form::Alternative,
                }
            })
        }
    })
}

/// Split a text into unit tokens, collecting what could not be matched.
#[must_use]
pub fn tokenize(text: &str) -> Tokenized {
    let mut out = Tokenized::default();
    let mut pending = String::new();
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        if let Some(token) = match_token(rest) {
            if !pending.is_empty() {
                out.unmatched.push(std::mem::take(&mut pending));
            }
            out.tokens.push(token);
            rest = rest.get(token.len..).unwrap_or_default();
        } else {
            pending.push(c);
            rest = rest.get(c.len_utf8()..).unwrap_or_default();
        }
    }
    if !pending.is_empty() {
        out.unmatched.push(pending);
    }

    tracing::trace!(
        text,
        tokens = out.tokens.len(),
        unmatched = out.unmatched.len(),
        "tokenized point text"
    );
    out
}
