//! Record of what a migration run changed (or would change).

use crate::layout::WebrootLayout;
use colored::Colorize;
use std::path::PathBuf;

/// Result of patching a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub path: PathBuf,
    /// `None` in dry-run mode, where no backup is taken.
    pub backup: Option<PathBuf>,
    pub replacements: usize,
}

/// Accumulates the effects of each completed phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub dry_run: bool,
    pub moved: Option<(PathBuf, PathBuf)>,
    pub patched: Vec<PatchOutcome>,
    pub skipped: Vec<PathBuf>,
    /// Every backup written so far, including ones whose patch later failed.
    pub backups: Vec<PathBuf>,
}

impl MigrationReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Returns true if nothing has been moved, backed up or patched yet.
    pub fn is_empty(&self) -> bool {
        self.moved.is_none() && self.patched.is_empty() && self.backups.is_empty()
    }

    /// Backups created so far, in creation order.
    pub fn backups(&self) -> impl Iterator<Item = &PathBuf> {
        self.backups.iter()
    }

    pub fn total_replacements(&self) -> usize {
        self.patched.iter().map(|p| p.replacements).sum()
    }

    /// Prints a short per-phase summary to stdout.
    pub fn print_summary(&self, layout: &WebrootLayout) {
        if self.dry_run {
            println!("\n{}", "DRY RUN - No changes were made".yellow().bold());
        } else {
            println!("\n{}", "Summary:".bold().cyan());
        }

        if let Some((from, to)) = &self.moved {
            println!(
                "  {} {}/ → {}/",
                "Directory:".bold(),
                layout.display_relative(from).yellow(),
                layout.display_relative(to).green()
            );
        }

        for outcome in &self.patched {
            println!(
                "  {} {} replacement(s)",
                format!("{}:", layout.display_relative(&outcome.path)).bold(),
                outcome.replacements
            );
        }

        for path in &self.skipped {
            println!(
                "  {} skipped (not found)",
                format!("{}:", layout.display_relative(path)).bold()
            );
        }
    }

    /// Describes the changes left on disk, one line each.
    ///
    /// Empty for dry runs and for runs that failed before touching anything.
    pub fn partial_state(&self, layout: &WebrootLayout) -> Vec<String> {
        if self.dry_run || self.is_empty() {
            return Vec::new();
        }

        let mut lines = vec!["Migration stopped part-way; completed changes were kept:".to_string()];
        if let Some((from, to)) = &self.moved {
            lines.push(format!(
                "  moved {} → {}",
                layout.display_relative(from),
                layout.display_relative(to)
            ));
        }
        for outcome in &self.patched {
            lines.push(format!("  patched {}", layout.display_relative(&outcome.path)));
        }
        for backup in self.backups() {
            lines.push(format!("  backup kept at {}", layout.display_relative(backup)));
        }
        lines
    }

    /// Logs [`partial_state`](Self::partial_state) after a failed phase.
    ///
    /// Nothing is rolled back, so this is the user's map for manual recovery.
    pub fn warn_partial(&self, layout: &WebrootLayout) {
        for line in self.partial_state(layout) {
            log::warn!("{}", line);
        }
    }
}
