//=========================================================================
// Translation Catalog
//=========================================================================
//
// Table storage for the full translator variant.
//
// Tables load lazily, one JSON file per language, and stay cached for
// the process lifetime. Reads never observe a partially loaded table:
// file I/O and parsing complete before the write lock is taken, so
// lookups for other languages never block on a load in progress.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;

//=== Internal Dependencies ===============================================

use super::{LoadError, DEFAULT_LANGUAGE};

//=== Table Loading =======================================================

type Table = HashMap<String, String>;

/// Reads and parses one language file. No locks held.
fn load_table(asset_dir: &Path, language: &str) -> Result<Table, LoadError> {
    let path = asset_dir.join(format!("{language}.json"));

    let data = fs::read_to_string(&path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound { path: path.clone() }
        } else {
            LoadError::Io {
                path: path.clone(),
                source,
            }
        }
    })?;

    let table = serde_json::from_str(&data).map_err(|source| LoadError::Parse {
        path: path.clone(),
        source,
    })?;

    debug!(target: "i18n", "Loaded language table from {}", path.display());
    Ok(table)
}

//=== Catalog =============================================================

/// Mutable state behind the lock: the loaded tables and the code of the
/// active language. The active language always has a loaded table.
struct Catalog {
    asset_dir: PathBuf,
    current: String,
    tables: HashMap<String, Table>,
}

//=== CatalogTranslator ===================================================

/// Full translator backed by lazily loaded language tables.
///
/// Single-writer/multiple-reader discipline via [`RwLock`]: lookups take
/// the read lock, language switches take the write lock only after the
/// new table has been loaded and parsed.
pub struct CatalogTranslator {
    inner: RwLock<Catalog>,
}

impl CatalogTranslator {
    //--- Construction -----------------------------------------------------

    /// Loads the given language and constructs a translator with it
    /// active.
    pub fn load(asset_dir: PathBuf, language: &str) -> Result<Self, LoadError> {
        let table = load_table(&asset_dir, language)?;

        let mut tables = HashMap::new();
        tables.insert(language.to_owned(), table);

        Ok(Self {
            inner: RwLock::new(Catalog {
                asset_dir,
                current: language.to_owned(),
                tables,
            }),
        })
    }

    //--- Lock Helpers -----------------------------------------------------

    // A poisoned lock only means a reader panicked mid-lookup; the
    // catalog itself is still consistent, so recover the guard.

    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    //--- Lookup -----------------------------------------------------------

    /// Resolves a key: current table, then the default language's table,
    /// then the key itself.
    pub fn resolve(&self, key: &str) -> String {
        let catalog = self.read();

        if let Some(text) = catalog
            .tables
            .get(&catalog.current)
            .and_then(|table| table.get(key))
        {
            return text.clone();
        }

        if catalog.current != DEFAULT_LANGUAGE {
            if let Some(text) = catalog
                .tables
                .get(DEFAULT_LANGUAGE)
                .and_then(|table| table.get(key))
            {
                return text.clone();
            }
        }

        key.to_owned()
    }

    //--- Language Control -------------------------------------------------

    /// Switches the active language, loading its table on first use.
    ///
    /// On load failure the active language is unchanged. A language that
    /// loaded once is served from cache and never re-read from disk.
    pub fn set_language(&self, language: &str) -> Result<(), LoadError> {
        let asset_dir = {
            let catalog = self.read();
            if catalog.tables.contains_key(language) {
                drop(catalog);
                self.write().current = language.to_owned();
                return Ok(());
            }
            catalog.asset_dir.clone()
        };

        // Load and parse with no lock held.
        let table = load_table(&asset_dir, language)?;

        let mut catalog = self.write();
        // A concurrent switch may have loaded it first; keep the cached
        // table so resolved content stays stable.
        catalog
            .tables
            .entry(language.to_owned())
            .or_insert(table);
        catalog.current = language.to_owned();
        Ok(())
    }

    /// The active language code.
    pub fn language(&self) -> String {
        self.read().current.clone()
    }

    /// Language codes with a loaded table, sorted for determinism.
    pub fn available_languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.read().tables.keys().cloned().collect();
        languages.sort();
        languages
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
