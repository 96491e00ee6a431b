//! Text rewriting for the files that reference the web-root directory.
//!
//! Both rewriters work on raw text with fixed regex patterns instead of
//! parsing JSON or PHP, so every byte outside a match is preserved exactly
//! (whitespace, key order, comments, trailing newlines).
//!
//! - **`manifest`**: path mappings in `composer.json`
//! - **`config`**: media paths inside `config/local.php` string literals
//!
//! A pattern that matches nothing is not an error; the text is returned
//! unchanged with a replacement count of zero.

pub mod config;
pub mod manifest;

pub use config::ConfigPatterns;
pub use manifest::ManifestPatterns;

/// Output of a rewrite pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub content: String,
    /// Number of substitutions performed.
    pub replacements: usize,
}

impl Rewritten {
    pub fn is_changed(&self) -> bool {
        self.replacements > 0
    }
}

/// A fixed set of substitutions applied to a whole file's content.
pub trait TextRewrite {
    fn rewrite(&self, content: &str) -> Rewritten;
}
