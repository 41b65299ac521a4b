use sha2::{Digest, Sha256};

/// One file's full text at the start of a pipeline stage.
///
/// Never mutated in place: every rule produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceModule {
    text: String,
}

impl SourceModule {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// The module produced by a full rewrite, before the formatter runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    text: String,
    sha256: String,
}

impl GeneratedModule {
    pub(crate) fn from_module(module: SourceModule) -> Self {
        let text = module.into_string();
        let sha256 = sha256_hex(text.as_bytes());
        Self { text, sha256 }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Hex SHA-256 of the generated text.
    pub fn sha256(&self) -> &str {
        &self.sha256
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
