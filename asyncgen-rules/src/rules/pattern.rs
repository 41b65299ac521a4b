use crate::error::RewriteError;
use crate::module::SourceModule;
use crate::rule::{RewriteRule, Rewritten, RuleCategory};
use regex::{Captures, Regex};

#[derive(Debug, Clone)]
enum Replacement {
    /// Expanded per match; may reference capture groups (`${1}`, `${name}`).
    Template(String),
    /// Inserted verbatim.
    Literal(String),
}

/// A regex matcher paired with a replacement, applied to every non-overlapping match.
#[derive(Debug, Clone)]
pub struct PatternRule {
    id: &'static str,
    category: RuleCategory,
    description: &'static str,
    pattern: Regex,
    replacement: Replacement,
    anchor: bool,
}

impl PatternRule {
    /// Rule from a regex and a replacement template.
    pub fn regex(
        id: &'static str,
        category: RuleCategory,
        description: &'static str,
        pattern: &str,
        template: impl Into<String>,
    ) -> Result<Self, RewriteError> {
        Ok(Self {
            id,
            category,
            description,
            pattern: compile(id, pattern)?,
            replacement: Replacement::Template(template.into()),
            anchor: false,
        })
    }

    /// Rule replacing an exact piece of text.
    pub fn literal(
        id: &'static str,
        category: RuleCategory,
        description: &'static str,
        from: &str,
        to: impl Into<String>,
    ) -> Result<Self, RewriteError> {
        Ok(Self {
            id,
            category,
            description,
            pattern: compile(id, &regex::escape(from))?,
            replacement: Replacement::Literal(to.into()),
            anchor: false,
        })
    }

    /// Like [`PatternRule::literal`], but `from` must start and end on word boundaries.
    pub fn word(
        id: &'static str,
        category: RuleCategory,
        description: &'static str,
        from: &str,
        to: impl Into<String>,
    ) -> Result<Self, RewriteError> {
        Ok(Self {
            id,
            category,
            description,
            pattern: compile(id, &format!(r"\b{}\b", regex::escape(from)))?,
            replacement: Replacement::Literal(to.into()),
            anchor: false,
        })
    }

    /// Mark the rule as an anchor.
    pub fn anchored(mut self) -> Self {
        self.anchor = true;
        self
    }
}

fn compile(rule: &'static str, pattern: &str) -> Result<Regex, RewriteError> {
    Regex::new(pattern).map_err(|source| RewriteError::InvalidPattern {
        rule: rule.to_string(),
        source,
    })
}

impl RewriteRule for PatternRule {
    fn id(&self) -> &'static str {
        self.id
    }

    fn category(&self) -> RuleCategory {
        self.category
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn is_anchor(&self) -> bool {
        self.anchor
    }

    fn apply(&self, module: &SourceModule) -> Rewritten {
        let mut matches = 0usize;
        let text = self
            .pattern
            .replace_all(module.as_str(), |caps: &Captures<'_>| {
                matches += 1;
                match &self.replacement {
                    Replacement::Template(template) => {
                        let mut dst = String::new();
                        caps.expand(template, &mut dst);
                        dst
                    }
                    Replacement::Literal(text) => text.clone(),
                }
            })
            .into_owned();

        Rewritten {
            module: SourceModule::new(text),
            matches,
        }
    }
}
