use crate::error::RewriteError;
use crate::rule::{RewriteRule, RuleMeta};

mod call_sites;
mod cleanup;
mod constructor;
mod docstring;
mod header;
mod imports;
mod pattern;
mod renames;

pub use call_sites::AsyncDefRule;
pub use header::HeaderBanner;
pub use pattern::PatternRule;

/// Inputs to the built-in rules that vary per project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSettings {
    /// Source file named in the banner as the one to edit.
    pub source_name: String,
    /// Command named in the banner to regenerate the output.
    pub regenerate_command: String,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            source_name: "linebot/api.py".to_string(),
            regenerate_command: "asyncgen codegen".to_string(),
        }
    }
}

/// The built-in rules in application order.
///
/// Order matters: imports are rewritten before the bare class renames, and the constructor
/// signature is rewritten before its default values are renamed.
pub fn builtin_rules(settings: &RuleSettings) -> Result<Vec<Box<dyn RewriteRule>>, RewriteError> {
    let mut rules: Vec<Box<dyn RewriteRule>> = vec![Box::new(HeaderBanner::new(
        &settings.source_name,
        &settings.regenerate_command,
    ))];
    rules.extend(call_sites::rules()?);
    rules.extend(imports::rules()?);
    rules.extend(constructor::rules()?);
    rules.extend(docstring::rules()?);
    rules.extend(renames::rules()?);
    rules.extend(cleanup::rules()?);
    Ok(rules)
}

pub fn builtin_rule_metas() -> Result<Vec<RuleMeta>, RewriteError> {
    Ok(builtin_rules(&RuleSettings::default())?
        .iter()
        .map(|r| r.meta())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn builtin_rules_are_grouped_by_category() {
        let metas = builtin_rule_metas().unwrap();
        assert!(metas.windows(2).all(|w| w[0].category <= w[1].category));
    }

    #[test]
    fn builtin_rule_ids_are_unique() {
        let metas = builtin_rule_metas().unwrap();
        let ids: BTreeSet<_> = metas.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), metas.len());
    }

    #[test]
    fn only_the_docstring_rule_is_an_anchor() {
        let anchors: Vec<_> = builtin_rule_metas()
            .unwrap()
            .into_iter()
            .filter(|m| m.anchor)
            .map(|m| m.id)
            .collect();
        assert_eq!(anchors, vec!["docstring.constructor"]);
    }

    #[test]
    fn header_comes_first() {
        let rules = builtin_rules(&RuleSettings::default()).unwrap();
        assert_eq!(rules[0].id(), "header.banner");
        assert_eq!(rules.len(), 19);
    }
}
