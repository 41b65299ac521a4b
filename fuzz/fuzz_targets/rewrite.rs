#![no_main]

//! Fuzz target for rewriting arbitrary module text.
//!
//! Every rule must accept any UTF-8 input without panicking, and the only
//! error a strict rewrite may return is a missing anchor.

use asyncgen_rules::{AnchorPolicy, RewriteError, Rewriter, RuleSettings, SourceModule};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(rewriter) = Rewriter::new(&RuleSettings::default()) else {
        return;
    };
    let legacy = rewriter.rewrite(SourceModule::new(s));
    assert!(legacy.is_ok(), "legacy rewrite must not fail: {legacy:?}");

    let Ok(strict) = Rewriter::new(&RuleSettings::default()) else {
        return;
    };
    match strict.anchor_policy(AnchorPolicy::Strict).rewrite(SourceModule::new(s)) {
        Ok(_) | Err(RewriteError::AnchorNotFound { .. }) => {}
        Err(e) => panic!("unexpected strict rewrite error: {e}"),
    }
});
