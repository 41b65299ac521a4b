use crate::rule::RuleCategory;
use serde::Serialize;

/// What one rule did during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleApplication {
    pub rule: &'static str,
    pub category: RuleCategory,
    pub matches: usize,
    pub anchor: bool,
}

/// Per-rule match counts for one rewrite, in application order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RewriteReport {
    pub applications: Vec<RuleApplication>,
}

impl RewriteReport {
    pub fn total_matches(&self) -> usize {
        self.applications.iter().map(|a| a.matches).sum()
    }

    /// Rules that changed nothing.
    pub fn unmatched(&self) -> impl Iterator<Item = &RuleApplication> {
        self.applications.iter().filter(|a| a.matches == 0)
    }

    /// Anchor rules that found nothing to replace.
    pub fn missing_anchors(&self) -> impl Iterator<Item = &RuleApplication> {
        self.unmatched().filter(|a| a.anchor)
    }

    pub fn matches_for(&self, rule: &str) -> Option<usize> {
        self.applications
            .iter()
            .find(|a| a.rule == rule)
            .map(|a| a.matches)
    }
}
