use crate::error::RewriteError;
use crate::module::SourceModule;
use crate::rule::{RewriteRule, Rewritten, RuleCategory};
use crate::rules::PatternRule;
use regex::{Captures, Regex};

/// Turns every indented `def NAME` into `async def NAME`, except the constructor.
#[derive(Debug, Clone)]
pub struct AsyncDefRule {
    pattern: Regex,
}

impl AsyncDefRule {
    const CONSTRUCTOR: &'static str = "__init__";

    pub fn new() -> Result<Self, RewriteError> {
        let pattern = Regex::new(r"(?m)^(?P<indent>[ \t]+)def (?P<name>\w+)").map_err(|source| {
            RewriteError::InvalidPattern {
                rule: "call-site.async-def".to_string(),
                source,
            }
        })?;
        Ok(Self { pattern })
    }
}

impl RewriteRule for AsyncDefRule {
    fn id(&self) -> &'static str {
        "call-site.async-def"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::CallSite
    }

    fn description(&self) -> &'static str {
        "Make every method except __init__ an `async def`."
    }

    fn apply(&self, module: &SourceModule) -> Rewritten {
        let mut matches = 0usize;
        let text = self
            .pattern
            .replace_all(module.as_str(), |caps: &Captures<'_>| {
                if &caps["name"] == Self::CONSTRUCTOR {
                    return caps[0].to_string();
                }
                matches += 1;
                format!("{}async def {}", &caps["indent"], &caps["name"])
            })
            .into_owned();

        Rewritten {
            module: SourceModule::new(text),
            matches,
        }
    }
}

pub(super) fn rules() -> Result<Vec<Box<dyn RewriteRule>>, RewriteError> {
    Ok(vec![
        Box::new(AsyncDefRule::new()?),
        Box::new(PatternRule::regex(
            "call-site.await-helpers",
            RuleCategory::CallSite,
            "Await the internal request helpers (_get, _post, _delete, _put).",
            r"\bself\.(_get|_post|_delete|_put)\b",
            "await self.${1}",
        )?),
        Box::new(PatternRule::regex(
            "call-site.await-transport",
            RuleCategory::CallSite,
            "Await transport verb calls and route them to the async transport.",
            r"\bself\.http_client\.(get|post|delete|put)\b",
            "await self.async_http_client.${1}",
        )?),
        Box::new(PatternRule::word(
            "call-site.await-json",
            RuleCategory::CallSite,
            "Await the response body decoder.",
            "response.json",
            "await response.json",
        )?),
        Box::new(PatternRule::literal(
            "call-site.await-check-error",
            RuleCategory::CallSite,
            "Await the response error check.",
            "self.__check_error(response)",
            "await self.__check_error(response)",
        )?),
    ])
}
