use crate::error::RewriteError;
use crate::rule::{RewriteRule, RuleCategory};
use crate::rules::PatternRule;

pub(super) fn rules() -> Result<Vec<Box<dyn RewriteRule>>, RewriteError> {
    Ok(vec![
        Box::new(PatternRule::literal(
            "rename.user-agent",
            RuleCategory::Rename,
            "Use the async SDK user agent.",
            "'line-bot-sdk-python/'",
            "\"line-bot-sdk-python-async/\"",
        )?),
        Box::new(PatternRule::literal(
            "rename.module-docstring",
            RuleCategory::Rename,
            "Rename the module docstring.",
            "\"\"\"linebot.api module.\"\"\"",
            "\"\"\"linebot.async_api module.\"\"\"",
        )?),
        Box::new(PatternRule::word(
            "rename.default-timeout",
            RuleCategory::Rename,
            "Read the default timeout from the async transport.",
            "HttpClient.DEFAULT_TIMEOUT",
            "AsyncHttpClient.DEFAULT_TIMEOUT",
        )?),
        Box::new(PatternRule::word(
            "rename.default-transport",
            RuleCategory::Rename,
            "Use the aiohttp transport as the default transport class.",
            "RequestsHttpClient",
            "AiohttpAsyncHttpClient",
        )?),
        Box::new(PatternRule::literal(
            "rename.timeout-doc",
            RuleCategory::Rename,
            "Refer to the async transport timeout in docstrings.",
            "Default is self.http_client.timeout",
            "Default is self.async_http_client.timeout",
        )?),
        Box::new(PatternRule::word(
            "rename.class",
            RuleCategory::Rename,
            "Rename the client class.",
            "class LineBotApi",
            "class AsyncLineBotApi",
        )?),
    ])
}
