use crate::module::SourceModule;
use crate::rule::{RewriteRule, Rewritten, RuleCategory};

const BANGS: &str = "# !!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!\n";

/// Prepends the "do not edit" banner.
#[derive(Debug, Clone)]
pub struct HeaderBanner {
    banner: String,
}

impl HeaderBanner {
    pub fn new(source_name: &str, regenerate_command: &str) -> Self {
        let banner = format!(
            "{BANGS}#\n#  *** DO NOT EDIT THIS FILE ***\n#\n#  1) Modify {source_name}\n#  2) Run `{regenerate_command}`\n#\n{BANGS}\n"
        );
        Self { banner }
    }

    pub fn banner(&self) -> &str {
        &self.banner
    }
}

impl RewriteRule for HeaderBanner {
    fn id(&self) -> &'static str {
        "header.banner"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Header
    }

    fn description(&self) -> &'static str {
        "Prepend a banner saying the file is generated and naming the source to edit."
    }

    fn apply(&self, module: &SourceModule) -> Rewritten {
        let mut text = String::with_capacity(self.banner.len() + module.len());
        text.push_str(&self.banner);
        text.push_str(module.as_str());
        Rewritten {
            module: SourceModule::new(text),
            matches: 1,
        }
    }
}
