use crate::error::RewriteError;
use crate::rule::{RewriteRule, RuleCategory};
use crate::rules::PatternRule;

pub(super) fn rules() -> Result<Vec<Box<dyn RewriteRule>>, RewriteError> {
    Ok(vec![Box::new(PatternRule::regex(
        "cleanup.stream-kwarg",
        RuleCategory::Cleanup,
        "Drop the `stream=` keyword argument; the async transport has no streaming mode.",
        r"stream=(?:stream|False|True), ",
        "",
    )?)])
}
