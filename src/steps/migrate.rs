//! Orchestration of the `docroot/` → `public/` migration.
//!
//! ## Phases
//!
//! ```text
//! Start → CheckPreconditions → RenameDirectory → PatchManifest → PatchConfig → Done
//! ```
//!
//! Any failing phase stops the run. Effects of earlier phases stay in place;
//! the `.backup` copies are the recovery path.

use crate::error::Result;
use crate::fs::{backup_file, read_text, rename_directory, write_text};
use crate::layout::{CONFIG_FILE, LEGACY_DIR, MANIFEST_FILE, TARGET_DIR, WebrootLayout};
use crate::rewrite::{ConfigPatterns, ManifestPatterns, TextRewrite};
use crate::steps::report::{MigrationReport, PatchOutcome};
use crate::verify::preflight_checks;

use clap::Parser;
use colored::Colorize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Arguments for the `migrate-webroot` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct MigrateArgs {
    /// Project root containing docroot/ and composer.json
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Run the checks and show what would change without touching any file
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

/// A step of the migration, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    CheckPreconditions,
    RenameDirectory,
    PatchManifest,
    PatchConfig,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::CheckPreconditions => "precondition checks",
            Phase::RenameDirectory => "directory rename",
            Phase::PatchManifest => "composer.json patch",
            Phase::PatchConfig => "config/local.php patch",
        };
        f.write_str(name)
    }
}

/// Executes the `migrate-webroot` command.
pub fn execute(args: MigrateArgs) -> Result<()> {
    let layout = WebrootLayout::new(&args.root);
    log::debug!("Project root: {}", layout.root().display());

    let report = migrate(&layout, args.dry_run)?;
    report.print_summary(&layout);

    if !report.dry_run {
        println!("\n{}", "Migration completed.".green().bold());
    }

    Ok(())
}

/// Runs every phase against `layout` and returns what was done.
///
/// With `dry_run`, preconditions are still enforced but nothing is renamed,
/// backed up or written; the report then describes the pending changes.
pub fn migrate(layout: &WebrootLayout, dry_run: bool) -> Result<MigrationReport> {
    let mut migration = Migration::new(layout, dry_run);

    match migration.run() {
        Ok(()) => Ok(migration.report),
        Err(e) => {
            log::info!("Migration failed during {}", migration.phase);
            migration.report.warn_partial(layout);
            Err(e)
        }
    }
}

struct Migration<'a> {
    layout: &'a WebrootLayout,
    phase: Phase,
    report: MigrationReport,
}

impl<'a> Migration<'a> {
    fn new(layout: &'a WebrootLayout, dry_run: bool) -> Self {
        Self {
            layout,
            phase: Phase::CheckPreconditions,
            report: MigrationReport::new(dry_run),
        }
    }

    fn enter(&mut self, phase: Phase) {
        log::info!("Starting {}", phase);
        self.phase = phase;
    }

    fn run(&mut self) -> Result<()> {
        self.enter(Phase::CheckPreconditions);
        preflight_checks(self.layout)?;
        println!("{}", "Prerequisites OK.".green());

        self.enter(Phase::RenameDirectory);
        self.rename_webroot()?;

        self.enter(Phase::PatchManifest);
        self.patch_manifest()?;

        self.enter(Phase::PatchConfig);
        self.patch_local_config()?;

        Ok(())
    }

    fn rename_webroot(&mut self) -> Result<()> {
        let from = self.layout.legacy_dir();
        let to = self.layout.target_dir();

        if self.report.dry_run {
            println!(
                "Would rename {} → {}",
                format!("{LEGACY_DIR}/").yellow(),
                format!("{TARGET_DIR}/").yellow()
            );
        } else {
            rename_directory(&from, &to)?;
            println!(
                "Renamed {} → {}",
                format!("{LEGACY_DIR}/").yellow(),
                format!("{TARGET_DIR}/").yellow()
            );
        }

        self.report.moved = Some((from, to));
        Ok(())
    }

    fn patch_manifest(&mut self) -> Result<()> {
        let patterns = ManifestPatterns::new(LEGACY_DIR, TARGET_DIR)?;
        let outcome = patch_file(&self.layout.manifest_path(), &patterns, &mut self.report)?;

        self.announce(MANIFEST_FILE, &outcome);
        self.report.patched.push(outcome);
        Ok(())
    }

    fn patch_local_config(&mut self) -> Result<()> {
        let path = self.layout.config_path();
        if !path.is_file() {
            println!("Skipped {CONFIG_FILE} - file not found.");
            self.report.skipped.push(path);
            return Ok(());
        }

        let patterns = ConfigPatterns::new(LEGACY_DIR, TARGET_DIR)?;
        let outcome = patch_file(&path, &patterns, &mut self.report)?;

        self.announce(CONFIG_FILE, &outcome);
        self.report.patched.push(outcome);
        Ok(())
    }

    fn announce(&self, name: &str, outcome: &PatchOutcome) {
        match &outcome.backup {
            Some(backup) => println!(
                "Patched {} (backup: {})",
                name.yellow(),
                self.layout.display_relative(backup).yellow()
            ),
            None => println!(
                "Would patch {} ({} replacement(s))",
                name.yellow(),
                outcome.replacements
            ),
        }
    }
}

/// Backs up `path`, applies `rewriter` to its content and overwrites it.
///
/// The backup is taken before the file is even read and recorded in `report`
/// right away, so a failure at any later point still leaves a pristine copy
/// that the partial-state warning names. The file is always rewritten in
/// full, even when no pattern matched.
fn patch_file(
    path: &Path,
    rewriter: &impl TextRewrite,
    report: &mut MigrationReport,
) -> Result<PatchOutcome> {
    if report.dry_run {
        let rewritten = rewriter.rewrite(&read_text(path)?);
        return Ok(PatchOutcome {
            path: path.to_path_buf(),
            backup: None,
            replacements: rewritten.replacements,
        });
    }

    let backup = backup_file(path)?;
    report.backups.push(backup.clone());

    let content = read_text(path)?;
    let rewritten = rewriter.rewrite(&content);
    write_text(path, &rewritten.content)?;

    log::info!(
        "Patched {} with {} replacement(s)",
        path.display(),
        rewritten.replacements
    );

    Ok(PatchOutcome {
        path: path.to_path_buf(),
        backup: Some(backup),
        replacements: rewritten.replacements,
    })
}
