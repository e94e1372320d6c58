// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by the matcher and the highlighter.
//!
//! Folding lives here so the fuzzy primitives and any caller that wants to
//! pre-fold input agree on exactly one definition of "the same letter".

pub mod normalize;
