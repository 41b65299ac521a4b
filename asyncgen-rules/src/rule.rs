use crate::module::SourceModule;
use serde::Serialize;
use std::fmt;

/// Rule categories, in the order the rewriter applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleCategory {
    Header,
    CallSite,
    Import,
    Constructor,
    Docstring,
    Rename,
    Cleanup,
}

impl RuleCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleCategory::Header => "header",
            RuleCategory::CallSite => "call-site",
            RuleCategory::Import => "import",
            RuleCategory::Constructor => "constructor",
            RuleCategory::Docstring => "docstring",
            RuleCategory::Rename => "rename",
            RuleCategory::Cleanup => "cleanup",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of applying one rule to a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub module: SourceModule,
    /// Number of non-overlapping substitutions made.
    pub matches: usize,
}

/// A pattern-and-replacement step over the whole text of a module.
///
/// Rules are pure: the same input always yields the same output. Swapping a rule for a
/// syntax-aware one only needs a new implementation of this trait.
pub trait RewriteRule {
    fn id(&self) -> &'static str;

    fn category(&self) -> RuleCategory;

    fn description(&self) -> &'static str;

    /// Anchor rules rely on a text span being present; finding none is a pattern mismatch.
    fn is_anchor(&self) -> bool {
        false
    }

    fn apply(&self, module: &SourceModule) -> Rewritten;

    fn meta(&self) -> RuleMeta {
        RuleMeta {
            id: self.id(),
            category: self.category(),
            description: self.description(),
            anchor: self.is_anchor(),
        }
    }
}

/// Static description of a rule, for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleMeta {
    pub id: &'static str,
    pub category: RuleCategory,
    pub description: &'static str,
    pub anchor: bool,
}
