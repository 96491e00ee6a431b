//! `composer.json` path mapping rewrites.
//!
//! ## Supported Shapes
//!
//! ```json
//! "web-root": "docroot/..."                 // extra.mautic-scaffold / installer web root
//! "docroot/app": [                          // installer-paths
//! "docroot/plugins/{$name}": [              // installer-paths
//! "docroot/themes/{$name}": [               // installer-paths
//! "MauticPlugin\\": "docroot/plugins/..."   // autoload psr-4
//! ```
//!
//! All rules are folded into one alternation and applied in a single pass over
//! the original text, so no rule ever sees another rule's output. Replacements
//! are literal: `{$name}` is emitted verbatim and never read as a capture
//! reference.

use super::{Rewritten, TextRewrite};
use crate::error::Result;
use regex::{Captures, Regex};

/// One fixed substitution.
#[derive(Debug, Clone)]
struct Rule {
    name: &'static str,
    pattern: String,
    replacement: String,
}

/// Compiled manifest rules for a `old_dir` → `new_dir` migration.
#[derive(Debug, Clone)]
pub struct ManifestPatterns {
    combined: Regex,
    rules: Vec<Rule>,
}

impl ManifestPatterns {
    pub fn new(old_dir: &str, new_dir: &str) -> Result<Self> {
        let rules = build_rules(old_dir, new_dir);

        // Rule patterns contain no capture groups, so group `i + 1` is rule `i`.
        let alternation = rules
            .iter()
            .map(|rule| format!("({})", rule.pattern))
            .collect::<Vec<_>>()
            .join("|");

        Ok(Self {
            combined: Regex::new(&alternation)?,
            rules,
        })
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl TextRewrite for ManifestPatterns {
    fn rewrite(&self, content: &str) -> Rewritten {
        let mut counts = vec![0usize; self.rules.len()];

        let patched = self.combined.replace_all(content, |caps: &Captures| {
            match caps.iter().skip(1).position(|group| group.is_some()) {
                Some(idx) => {
                    counts[idx] += 1;
                    self.rules[idx].replacement.clone()
                }
                None => caps[0].to_string(),
            }
        });
        let content = patched.into_owned();

        for (rule, count) in self.rules.iter().zip(&counts) {
            log::debug!("Manifest rule '{}' matched {} time(s)", rule.name, count);
        }

        Rewritten {
            content,
            replacements: counts.iter().sum(),
        }
    }
}

fn build_rules(old_dir: &str, new_dir: &str) -> Vec<Rule> {
    let colon = r"\s*:\s*";

    vec![
        Rule {
            name: "web-root",
            pattern: format!(
                "{}{colon}{}",
                regex::escape(r#""web-root""#),
                regex::escape(&format!(r#""{old_dir}/"#)),
            ),
            replacement: format!(r#""web-root": "{new_dir}/"#),
        },
        Rule {
            name: "app",
            pattern: format!(
                r"{}{colon}\[",
                regex::escape(&format!(r#""{old_dir}/app""#))
            ),
            replacement: format!(r#""{new_dir}/app": ["#),
        },
        Rule {
            name: "plugins",
            pattern: format!(
                r"{}{colon}\[",
                regex::escape(&format!(r#""{old_dir}/plugins/{{$name}}""#))
            ),
            replacement: format!(r#""{new_dir}/plugins/{{$name}}": ["#),
        },
        Rule {
            name: "themes",
            pattern: format!(
                r"{}{colon}\[",
                regex::escape(&format!(r#""{old_dir}/themes/{{$name}}""#))
            ),
            replacement: format!(r#""{new_dir}/themes/{{$name}}": ["#),
        },
        Rule {
            name: "psr-4 MauticPlugin",
            pattern: format!(
                r"{}\s*{}",
                regex::escape(r#""MauticPlugin\\":"#),
                regex::escape(&format!(r#""{old_dir}/plugins/"#)),
            ),
            replacement: format!(r#""MauticPlugin\\": "{new_dir}/plugins/"#),
        },
    ]
}
