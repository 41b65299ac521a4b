use crate::error::RewriteError;
use crate::rule::{RewriteRule, RuleCategory};
use crate::rules::PatternRule;

/// From the opening `"""__init__ method` up to the first closing `"""` and its newline.
const CONSTRUCTOR_DOCSTRING: &str = r#"(?ms)^(?P<indent>[ \t]*)"""__init__ method.*?"""\n"#;

const REPLACEMENT: &str = concat!(
    "${indent}\"\"\"__init__ method.\n",
    "\n",
    "${indent}:param str channel_access_token: Your channel access token\n",
    "${indent}:param str endpoint: (optional) Default is https://api.line.me\n",
    "${indent}:param str data_endpoint: (optional) Default is https://api-data.line.me\n",
    "\n",
    "${indent}\"\"\"\n",
);

pub(super) fn rules() -> Result<Vec<Box<dyn RewriteRule>>, RewriteError> {
    Ok(vec![Box::new(
        PatternRule::regex(
            "docstring.constructor",
            RuleCategory::Docstring,
            "Replace the constructor docstring with one documenting the token and endpoints.",
            CONSTRUCTOR_DOCSTRING,
            REPLACEMENT,
        )?
        .anchored(),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::SourceModule;
    use pretty_assertions::assert_eq;

    const SYNC_CONSTRUCTOR: &str = r#"    def __init__(self, channel_access_token):
        """__init__ method.

        :param str channel_access_token: Your channel access token
        :param str endpoint: (optional) Default is https://api.line.me
        :param str data_endpoint: (optional) Default is https://api-data.line.me
        :param timeout: (optional) How long to wait for the server
            to send data before giving up, as a float,
            or a (connect timeout, read timeout) float tuple.
            Default is linebot.http_client.HttpClient.DEFAULT_TIMEOUT
        :type timeout: float | tuple(float, float)
        :param http_client: (optional) Default is
            :py:class:`linebot.http_client.RequestsHttpClient`
        :type http_client: T <= :py:class:`linebot.http_client.HttpClient`
        """
        self.channel_access_token = channel_access_token

    def push_message(self, to, messages):
        """Call push message API.

        :param str to: ID of the receiver
        """
"#;

    #[test]
    fn docstring_is_replaced_up_to_first_close() {
        let rule = rules().unwrap().remove(0);
        let out = rule.apply(&SourceModule::new(SYNC_CONSTRUCTOR));
        assert_eq!(out.matches, 1);
        let expected = r#"    def __init__(self, channel_access_token):
        """__init__ method.

        :param str channel_access_token: Your channel access token
        :param str endpoint: (optional) Default is https://api.line.me
        :param str data_endpoint: (optional) Default is https://api-data.line.me

        """
        self.channel_access_token = channel_access_token

    def push_message(self, to, messages):
        """Call push message API.

        :param str to: ID of the receiver
        """
"#;
        assert_eq!(out.module.as_str(), expected);
    }

    #[test]
    fn documents_exactly_three_parameters() {
        let rule = rules().unwrap().remove(0);
        let out = rule.apply(&SourceModule::new(SYNC_CONSTRUCTOR));
        let text = out.module.as_str();
        let ctor_doc_end = text.find("self.channel_access_token =").unwrap();
        assert_eq!(text[..ctor_doc_end].matches(":param").count(), 3);
        assert!(!text[..ctor_doc_end].contains("http_client"));
    }

    #[test]
    fn missing_anchor_is_a_silent_no_op() {
        // Fragile on purpose: an absent anchor is only reported through the match count.
        let rule = rules().unwrap().remove(0);
        assert!(rule.is_anchor());
        let input = "    def __init__(self, channel_access_token):\n        \"\"\"Create a client.\"\"\"\n";
        let out = rule.apply(&SourceModule::new(input));
        assert_eq!(out.matches, 0);
        assert_eq!(out.module.as_str(), input);
    }
}
