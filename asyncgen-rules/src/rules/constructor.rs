use crate::error::RewriteError;
use crate::rule::{RewriteRule, RuleCategory};
use crate::rules::PatternRule;

pub(super) fn rules() -> Result<Vec<Box<dyn RewriteRule>>, RewriteError> {
    Ok(vec![
        Box::new(PatternRule::literal(
            "constructor.insert-client",
            RuleCategory::Constructor,
            "Add the async transport as the second constructor parameter.",
            "def __init__(self, channel_access_token,",
            "def __init__(self, channel_access_token, async_http_client,",
        )?),
        Box::new(PatternRule::regex(
            "constructor.drop-transport-params",
            RuleCategory::Constructor,
            "Drop the timeout and transport factory parameters.",
            r",\s*timeout=[\w.]+,\s*http_client=[\w.]+",
            "",
        )?),
        Box::new(PatternRule::regex(
            "constructor.collapse-transport",
            RuleCategory::Constructor,
            "Assign the injected async transport instead of building a default one.",
            concat!(
                r"if http_client:\n",
                r"\s*self\.http_client = http_client\(timeout=timeout\)\n",
                r"\s*else:\n",
                r"\s*self\.http_client = \w+\(timeout=timeout\)",
            ),
            "self.async_http_client = async_http_client",
        )?),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::SourceModule;
    use pretty_assertions::assert_eq;

    fn run_all(input: &str) -> String {
        rules()
            .unwrap()
            .iter()
            .fold(SourceModule::new(input), |m, r| r.apply(&m).module)
            .into_string()
    }

    #[test]
    fn single_line_signature() {
        let out = run_all(
            "    def __init__(self, channel_access_token, timeout=DEFAULT, http_client=Default):\n",
        );
        assert_eq!(
            out,
            "    def __init__(self, channel_access_token, async_http_client):\n"
        );
    }

    #[test]
    fn multi_line_signature_keeps_endpoints() {
        let input = "\
    def __init__(self, channel_access_token,
                 endpoint=DEFAULT_API_ENDPOINT, data_endpoint=DEFAULT_API_DATA_ENDPOINT,
                 timeout=HttpClient.DEFAULT_TIMEOUT, http_client=RequestsHttpClient):
";
        let expected = "\
    def __init__(self, channel_access_token, async_http_client,
                 endpoint=DEFAULT_API_ENDPOINT, data_endpoint=DEFAULT_API_DATA_ENDPOINT):
";
        assert_eq!(run_all(input), expected);
    }

    #[test]
    fn signature_has_no_duplicate_parameters() {
        let out = run_all(
            "    def __init__(self, channel_access_token, timeout=DEFAULT, http_client=Default):\n",
        );
        assert_eq!(out.matches("async_http_client").count(), 1);
        assert_eq!(out.matches("channel_access_token").count(), 1);
        assert!(!out.contains("timeout"));
        assert!(!out.contains("http_client=Default"));
    }

    #[test]
    fn transport_branch_collapses_to_assignment() {
        let input = "\
        if http_client:
            self.http_client = http_client(timeout=timeout)
        else:
            self.http_client = RequestsHttpClient(timeout=timeout)
";
        assert_eq!(
            run_all(input),
            "        self.async_http_client = async_http_client\n"
        );
    }

    #[test]
    fn other_timeout_parameters_are_kept() {
        let input = "    def get_message_content(self, message_id, timeout=None):\n";
        assert_eq!(run_all(input), input);
    }
}
