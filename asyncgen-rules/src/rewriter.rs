use crate::error::RewriteError;
use crate::module::{GeneratedModule, SourceModule};
use crate::report::{RewriteReport, RuleApplication};
use crate::rule::RewriteRule;
use crate::rules::{self, RuleSettings};
use serde::Deserialize;
use tracing::{debug, warn};

/// What to do when an anchor rule matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorPolicy {
    /// Leave the text unchanged for that rule and log a warning.
    #[default]
    Legacy,
    /// Fail the rewrite with [`RewriteError::AnchorNotFound`].
    Strict,
}

pub struct Rewriter {
    rules: Vec<Box<dyn RewriteRule>>,
    anchor_policy: AnchorPolicy,
}

impl Rewriter {
    /// Rewriter over the built-in rule list.
    pub fn new(settings: &RuleSettings) -> Result<Self, RewriteError> {
        Ok(Self::with_rules(rules::builtin_rules(settings)?))
    }

    pub fn with_rules(rules: Vec<Box<dyn RewriteRule>>) -> Self {
        Self {
            rules,
            anchor_policy: AnchorPolicy::default(),
        }
    }

    pub fn anchor_policy(mut self, policy: AnchorPolicy) -> Self {
        self.anchor_policy = policy;
        self
    }

    /// Fold every rule, in declaration order, over `source`.
    pub fn rewrite(
        &self,
        source: SourceModule,
    ) -> Result<(GeneratedModule, RewriteReport), RewriteError> {
        let mut report = RewriteReport::default();

        let module = self.rules.iter().try_fold(source, |module, rule| {
            let out = rule.apply(&module);
            debug!(
                rule = rule.id(),
                category = rule.category().as_str(),
                matches = out.matches,
                "applied rewrite rule"
            );

            if out.matches == 0 && rule.is_anchor() {
                match self.anchor_policy {
                    AnchorPolicy::Strict => {
                        return Err(RewriteError::AnchorNotFound {
                            rule: rule.id().to_string(),
                        });
                    }
                    AnchorPolicy::Legacy => {
                        warn!(
                            rule = rule.id(),
                            "anchor not found; rule left the text unchanged"
                        );
                    }
                }
            }

            report.applications.push(RuleApplication {
                rule: rule.id(),
                category: rule.category(),
                matches: out.matches,
                anchor: rule.is_anchor(),
            });
            Ok(out.module)
        })?;

        Ok((GeneratedModule::from_module(module), report))
    }
}
