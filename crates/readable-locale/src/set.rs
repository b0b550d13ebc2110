use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::table::{normalize_tag, StringTable};

/// Tag every lookup falls back to. Always resolvable.
pub const FALLBACK_LOCALE: &str = "en";

/// String tables keyed by normalized locale tag, with an English fallback.
#[derive(Debug, Clone)]
pub struct LocaleSet {
    tables: BTreeMap<String, StringTable>,
    fallback: StringTable,
}

impl LocaleSet {
    /// A set holding only the embedded English table.
    pub fn english_only() -> Result<Self> {
        Ok(Self {
            tables: BTreeMap::new(),
            fallback: StringTable::english()?,
        })
    }

    /// Load every `*.toml` string table under the given roots.
    ///
    /// A root can be a directory (searched recursively) or a direct path to a
    /// table file. Missing roots are skipped. Two files declaring the same
    /// locale are an error. A discovered `en` table shadows the embedded one.
    pub fn discover(search_roots: &[PathBuf]) -> Result<Self> {
        let mut table_paths = Vec::new();
        for root in search_roots {
            collect_table_paths(root, &mut table_paths)
                .with_context(|| format!("failed to scan locale root {}", root.display()))?;
        }
        table_paths.sort();

        let mut set = Self::english_only()?;
        let mut seen: BTreeMap<String, PathBuf> = BTreeMap::new();

        for path in table_paths {
            let table = StringTable::from_path(&path)?;
            let tag = normalize_tag(table.locale());

            if let Some(previous) = seen.insert(tag.clone(), path.clone()) {
                bail!(
                    "duplicate locale {:?} in string tables {} and {}",
                    table.locale(),
                    previous.display(),
                    path.display()
                );
            }

            debug!(locale = %tag, path = %path.display(), "loaded string table");
            set.tables.insert(tag, table);
        }

        Ok(set)
    }

    /// Add a table, replacing any previous table for the same locale.
    pub fn insert(&mut self, table: StringTable) {
        self.tables.insert(normalize_tag(table.locale()), table);
    }

    /// Normalized tags that resolve without falling back, sorted.
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.tables.keys().cloned().collect();
        if !self.tables.contains_key(FALLBACK_LOCALE) {
            tags.push(FALLBACK_LOCALE.to_string());
            tags.sort();
        }
        tags
    }

    /// Best table for `tag`.
    ///
    /// Tries the full tag, then drops trailing subtags (`de-at-x` → `de-at` →
    /// `de`), then falls back to English. Matching ignores case and accepts
    /// `_` as a separator.
    pub fn resolve(&self, tag: &str) -> &StringTable {
        let mut candidate = normalize_tag(tag);
        loop {
            if let Some(table) = self.tables.get(&candidate) {
                return table;
            }
            match candidate.rfind('-') {
                Some(cut) => candidate.truncate(cut),
                None => break,
            }
        }

        debug!(requested = tag, "no string table for locale, using fallback");
        self.tables
            .get(FALLBACK_LOCALE)
            .unwrap_or(&self.fallback)
    }
}

fn collect_table_paths(root: &Path, paths: &mut Vec<PathBuf>) -> Result<()> {
    let meta = match fs::metadata(root) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e).with_context(|| format!("failed to stat {}", root.display())),
    };

    if meta.is_dir() {
        walk_tables(root, paths)
    } else {
        if is_table_file(root) {
            paths.push(root.to_path_buf());
        }
        Ok(())
    }
}

/// Symlinked directories below a root are not followed, so link cycles
/// cannot make discovery revisit a table.
fn walk_tables(dir: &Path, paths: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read directory {}", dir.display()))?;
    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read directory entry in {}", dir.display()))?;
        let path = entry.path();
        let kind = entry
            .file_type()
            .with_context(|| format!("failed to stat {}", path.display()))?;

        if kind.is_dir() {
            walk_tables(&path, paths)?;
        } else if is_table_file(&path) && path.is_file() {
            paths.push(path);
        }
    }
    Ok(())
}

fn is_table_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("toml")
}
