// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The examiner facade.
//!
//! One call runs the whole pipeline over one source: classify the tree,
//! build the context arena, dispatch the detectors, and collect warnings.
//! File-local failures surface as pseudo-warnings in the result;
//! configuration failures are returned as errors.

mod examiner;
mod trace;

pub use examiner::Examiner;
pub use trace::ScanTrace;

// The strategy is chosen per examination; re-exported here so callers need
// only this crate.
pub use snag_detectors::Strategy;
