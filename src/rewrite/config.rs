//! `config/local.php` media path rewrites.
//!
//! Mautic's local config is a PHP array literal:
//!
//! ```php
//! $parameters = array(
//!     'image_path' => '/var/www/docroot/media/images',
//!     'upload_dir' => 'docroot/media/files',
//! );
//! ```
//!
//! Only single-quoted `'key' => 'value'` pairs are considered. The value
//! pattern never crosses an unescaped `'`, so a match is confined to one
//! literal and neighbouring entries can't be merged. Backslash escapes
//! (`\'`, `\\`) are consumed as part of the value. The first `/<old>/media`
//! segment inside a value is rewritten; the key, quotes and the rest of the
//! value are kept as-is.

use super::{Rewritten, TextRewrite};
use crate::error::Result;
use regex::{Captures, Regex};

/// Compiled config rule for a `old_dir` → `new_dir` migration.
#[derive(Debug, Clone)]
pub struct ConfigPatterns {
    literal: Regex,
    new_segment: String,
}

impl ConfigPatterns {
    pub fn new(old_dir: &str, new_dir: &str) -> Result<Self> {
        let old_segment = regex::escape(&format!("/{old_dir}/media"));
        let value_char = r"(?:[^'\\]|\\[\s\S])";
        let literal = Regex::new(&format!(
            r"(?P<head>'[^']+'\s*=>\s*')(?P<before>{value_char}*?){old_segment}(?P<after>{value_char}*')"
        ))?;

        Ok(Self {
            literal,
            new_segment: format!("/{new_dir}/media"),
        })
    }
}

impl TextRewrite for ConfigPatterns {
    fn rewrite(&self, content: &str) -> Rewritten {
        let mut replacements = 0;

        let patched = self.literal.replace_all(content, |caps: &Captures| {
            replacements += 1;
            format!(
                "{}{}{}{}",
                &caps["head"], &caps["before"], self.new_segment, &caps["after"]
            )
        });
        let content = patched.into_owned();

        log::debug!("Config media rule matched {} time(s)", replacements);

        Rewritten {
            content,
            replacements,
        }
    }
}
