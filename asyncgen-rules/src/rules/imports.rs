use crate::error::RewriteError;
use crate::rule::{RewriteRule, RuleCategory};
use crate::rules::PatternRule;

pub(super) fn rules() -> Result<Vec<Box<dyn RewriteRule>>, RewriteError> {
    Ok(vec![
        Box::new(PatternRule::literal(
            "import.transport-module",
            RuleCategory::Import,
            "Import the async transport instead of the sync one.",
            "from .http_client import HttpClient, RequestsHttpClient",
            "from .async_http_client import AsyncHttpClient, AiohttpAsyncHttpClient",
        )?),
        Box::new(PatternRule::literal(
            "import.transport-qualified",
            RuleCategory::Import,
            "Point fully-qualified transport references at the async transport class.",
            "linebot.http_client.RequestsHttpClient",
            "linebot.async_http_client.AiohttpAsyncHttpClient",
        )?),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::SourceModule;

    #[test]
    fn import_line_is_swapped() {
        let rules = rules().unwrap();
        let out = rules[0].apply(&SourceModule::new(
            "from .__about__ import __version__\nfrom .http_client import HttpClient, RequestsHttpClient\n",
        ));
        assert_eq!(out.matches, 1);
        assert_eq!(
            out.module.as_str(),
            "from .__about__ import __version__\nfrom .async_http_client import AsyncHttpClient, AiohttpAsyncHttpClient\n"
        );
    }

    #[test]
    fn qualified_reference_is_swapped_everywhere() {
        let rules = rules().unwrap();
        let out = rules[1].apply(&SourceModule::new(
            ":py:class:`linebot.http_client.RequestsHttpClient` and linebot.http_client.RequestsHttpClient",
        ));
        assert_eq!(out.matches, 2);
        assert!(!out.module.as_str().contains("linebot.http_client."));
    }
}
