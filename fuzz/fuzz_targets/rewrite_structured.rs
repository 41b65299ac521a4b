#![no_main]

//! Fuzz target assembling client-shaped modules from known fragments.
//!
//! Random source text rarely hits the rules; stitching real fragments together
//! exercises rule interaction, then checks that no method is left sync and no
//! helper call is left unawaited.

use asyncgen_rules::{Rewriter, RuleSettings, SourceModule};
use libfuzzer_sys::fuzz_target;

const FRAGMENTS: &[&str] = &[
    "from .http_client import HttpClient, RequestsHttpClient\n",
    "class LineBotApi(object):\n",
    "    def __init__(self, channel_access_token, timeout=HttpClient.DEFAULT_TIMEOUT, http_client=RequestsHttpClient):\n",
    "        \"\"\"__init__ method.\n\n        :param str channel_access_token: token\n        \"\"\"\n",
    "        if http_client:\n            self.http_client = http_client(timeout=timeout)\n        else:\n            self.http_client = RequestsHttpClient(timeout=timeout)\n",
    "    def get_profile(self, user_id, timeout=None):\n",
    "        response = self._get('/v2/bot/profile/' + user_id, timeout=timeout)\n",
    "        self.__check_error(response)\n",
    "        return response.json\n",
    "    def _post(self, path, data=None, timeout=None):\n",
    "        response = self.http_client.post(url, headers=headers, data=data, timeout=timeout)\n",
    "    def get_message_content(self, message_id, timeout=None):\n",
    "        response = self._get(url, stream=True, timeout=timeout)\n",
    "\tdef tabbed(self):\n",
    "def module_level():\n",
];

#[derive(Debug, arbitrary::Arbitrary)]
struct ModuleInput {
    picks: Vec<u8>,
    filler: String,
}

fuzz_target!(|input: ModuleInput| {
    let mut text = String::new();
    for pick in input.picks.iter().take(64) {
        text.push_str(FRAGMENTS[*pick as usize % FRAGMENTS.len()]);
        if pick % 7 == 0 {
            let filler: String = input
                .filler
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
                .collect();
            text.push_str("# ");
            text.push_str(&filler);
            text.push('\n');
        }
    }

    let Ok(rewriter) = Rewriter::new(&RuleSettings::default()) else {
        return;
    };
    let Ok((generated, _report)) = rewriter.rewrite(SourceModule::new(text)) else {
        return;
    };

    for line in generated.as_str().lines() {
        if line.starts_with("    def ") || line.starts_with("\tdef ") {
            assert!(line.contains("def __init__("), "sync method left behind: {line}");
        }
        if line.contains("self._get(") {
            assert!(line.contains("await self._get("), "unawaited helper: {line}");
        }
    }
});
