//! Linguistic resource cache.
//!
//! The stopword list lives in a resource directory on disk. On the first run
//! the English list is materialized into `stopwords_english.txt`; every run
//! after that loads the cached file. A failing materialization is fatal, and
//! so is an unreadable cache file. Nothing is fetched over the network.
//!
//! # Examples
//!
//! ```no_run
//! use gleaner::resource::ResourceCache;
//!
//! let cache = ResourceCache::new("resources");
//! let stop_words = cache.load_stopwords().unwrap();
//! assert!(stop_words.contains("the"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{GleanerError, Result};

/// Filename of the cached English stopword list.
pub const STOPWORDS_FILENAME: &str = "stopwords_english.txt";

/// A directory of linguistic resources, populated once and then reused.
#[derive(Clone, Debug)]
pub struct ResourceCache {
    dir: PathBuf,
}

impl ResourceCache {
    /// Create a cache over the given resource directory.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        ResourceCache { dir: dir.into() }
    }

    /// The resource directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the cached stopword list.
    pub fn stopwords_path(&self) -> PathBuf {
        self.dir.join(STOPWORDS_FILENAME)
    }

    /// Make sure the stopword list exists on disk, materializing it on the
    /// first run. Returns an error if the cache cannot be written.
    pub fn ensure(&self) -> Result<()> {
        let path = self.stopwords_path();
        if path.exists() {
            return Ok(());
        }

        info!("materializing stopword list into {}", path.display());
        fs::create_dir_all(&self.dir)?;

        let words = stop_words::get(stop_words::LANGUAGE::English);
        let mut contents = words.join("\n");
        contents.push('\n');
        fs::write(&path, contents)?;

        Ok(())
    }

    /// Load the cached stopword list, materializing it first if missing.
    pub fn load_stopwords(&self) -> Result<HashSet<String>> {
        self.ensure()?;

        let path = self.stopwords_path();
        let contents = fs::read_to_string(&path)?;
        let words: HashSet<String> = contents
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect();

        if words.is_empty() {
            return Err(GleanerError::resource(format!(
                "stopword list {} is empty",
                path.display()
            )));
        }

        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn test_materialize_then_reload() {
        let dir = TempDir::new().unwrap();
        let cache = ResourceCache::new(dir.path().join("resources"));

        assert!(!cache.stopwords_path().exists());
        let first = cache.load_stopwords().unwrap();
        assert!(cache.stopwords_path().exists());
        assert!(first.contains("the"));
        assert!(first.contains("and"));

        // Second load reads the cached file.
        let second = cache.load_stopwords().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cached_file_wins() {
        let dir = TempDir::new().unwrap();
        let cache = ResourceCache::new(dir.path());

        fs::create_dir_all(dir.path()).unwrap();
        fs::write(cache.stopwords_path(), "foo\nbar\n").unwrap();

        let words = cache.load_stopwords().unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.contains("foo"));
        assert!(!words.contains("the"));
    }

    #[test]
    fn test_empty_cache_is_fatal() {
        let dir = TempDir::new().unwrap();
        let cache = ResourceCache::new(dir.path());

        fs::write(cache.stopwords_path(), "\n\n").unwrap();

        let result = cache.load_stopwords();
        assert!(matches!(result, Err(GleanerError::Resource(_))));
    }
}
