//! Persisted first-move cache
//!
//! The most expensive scoring call of any game is the first one: the pool
//! and the candidate set are both the whole dictionary. The ranking it
//! produces never changes for a given dictionary, so the top openings are
//! computed once and persisted, then one is drawn at random per game to
//! vary openings.
//!
//! The artifact is content-addressed: its file name embeds the dictionary
//! fingerprint, so editing the word list automatically orphans the old
//! artifact and forces a rebuild. Writes go to a temporary file in the same
//! directory followed by a rename, so readers never observe a partial file.

use crate::core::Word;
use crate::solver::rank_guesses;
use crate::wordlists::Dictionary;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// How many top-ranked openings the artifact retains
pub const FIRST_MOVE_POOL: usize = 100;

/// Handle to the persisted opening list for one dictionary
#[derive(Debug, Clone)]
pub struct FirstMoveCache {
    path: PathBuf,
}

impl FirstMoveCache {
    /// Address the artifact for a dictionary inside a cache directory
    ///
    /// The file name is derived from the dictionary fingerprint, so two
    /// dictionaries share an artifact exactly when they contain the same
    /// words.
    #[must_use]
    pub fn for_dictionary(dir: &Path, dictionary: &Dictionary) -> Self {
        let file = format!("first-moves-{:016x}.txt", dictionary.fingerprint());
        Self {
            path: dir.join(file),
        }
    }

    /// Location of the artifact on disk
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the opening list, rebuilding the artifact if missing or invalid
    ///
    /// A valid artifact is non-empty and lists only dictionary words; any
    /// other content counts as stale and is regenerated in place. The
    /// returned list is ordered best-to-worst.
    ///
    /// # Errors
    /// Returns an I/O error only for genuine read/write failures; staleness
    /// is recovered transparently.
    pub fn top_openings(&self, dictionary: &Dictionary) -> io::Result<Vec<Word>> {
        if let Some(openings) = self.load(dictionary)? {
            return Ok(openings);
        }

        let ranked = Self::rank(dictionary);
        self.store(&ranked)?;
        Ok(ranked)
    }

    /// Pick one opening uniformly at random from the top of the ranking
    ///
    /// # Errors
    /// Propagates I/O failures from [`Self::top_openings`].
    ///
    /// # Panics
    /// Will not panic: a constructed dictionary is non-empty, so the ranking
    /// is too.
    pub fn opening_guess<R: Rng>(
        &self,
        dictionary: &Dictionary,
        rng: &mut R,
    ) -> io::Result<Word> {
        let openings = self.top_openings(dictionary)?;
        Ok(openings
            .choose(rng)
            .expect("ranking of a non-empty dictionary is non-empty")
            .clone())
    }

    /// Read and validate the artifact; `None` means rebuild
    fn load(&self, dictionary: &Dictionary) -> io::Result<Option<Vec<Word>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };

        let mut openings = Vec::new();
        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match dictionary.find(trimmed) {
                Some(word) => openings.push(word.clone()),
                // An entry the dictionary no longer knows: stale artifact
                None => return Ok(None),
            }
        }

        if openings.is_empty() {
            return Ok(None);
        }

        Ok(Some(openings))
    }

    /// Atomically persist the opening list, one word per line, best first
    fn store(&self, openings: &[Word]) -> io::Result<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        // Temp file in the same directory so the rename stays on one device
        let file_name = self
            .path
            .file_name()
            .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
        let tmp = self
            .path
            .with_file_name(format!("{file_name}.{}.tmp", std::process::id()));

        let mut content = String::with_capacity(openings.len() * 6);
        for word in openings {
            content.push_str(word.text());
            content.push('\n');
        }

        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)
    }

    /// Rank the full dictionary against itself and keep the best openings
    fn rank(dictionary: &Dictionary) -> Vec<Word> {
        let words = dictionary.words();
        rank_guesses(words, words)
            .into_iter()
            .take(FIRST_MOVE_POOL)
            .map(|(word, _)| word.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use crate::solver::select_best_guess;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dict(words: &[&str]) -> Dictionary {
        let words = words_from_slice(words, Alphabet::Letters);
        Dictionary::new(words, Alphabet::Letters).unwrap()
    }

    #[test]
    fn builds_and_persists_on_first_use() {
        let dir = tempfile::tempdir().unwrap();
        let d = dict(&["knoll", "stela", "doily", "hullo"]);
        let cache = FirstMoveCache::for_dictionary(dir.path(), &d);

        assert!(!cache.path().exists());
        let openings = cache.top_openings(&d).unwrap();

        assert!(!openings.is_empty());
        assert!(openings.len() <= FIRST_MOVE_POOL);
        assert!(cache.path().exists());

        // No leftover temp file from the atomic write
        let stray: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(stray.is_empty());
    }

    #[test]
    fn artifact_lists_words_best_first() {
        let dir = tempfile::tempdir().unwrap();
        let d = dict(&["knoll", "stela", "doily", "hullo"]);
        let cache = FirstMoveCache::for_dictionary(dir.path(), &d);

        let openings = cache.top_openings(&d).unwrap();
        let (best, _) = select_best_guess(d.words(), d.words()).unwrap();
        assert_eq!(&openings[0], best);

        let content = fs::read_to_string(cache.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), openings.len());
        assert_eq!(lines[0], best.text());
    }

    #[test]
    fn second_use_loads_the_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let d = dict(&["knoll", "stela", "doily", "hullo"]);
        let cache = FirstMoveCache::for_dictionary(dir.path(), &d);

        let first = cache.top_openings(&d).unwrap();
        let second = cache.top_openings(&d).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn different_dictionaries_use_different_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let a = dict(&["knoll", "stela", "doily"]);
        let b = dict(&["knoll", "stela", "hullo"]);

        let cache_a = FirstMoveCache::for_dictionary(dir.path(), &a);
        let cache_b = FirstMoveCache::for_dictionary(dir.path(), &b);
        assert_ne!(cache_a.path(), cache_b.path());
    }

    #[test]
    fn stale_artifact_is_rebuilt() {
        let dir = tempfile::tempdir().unwrap();
        let d = dict(&["knoll", "stela", "doily", "hullo"]);
        let cache = FirstMoveCache::for_dictionary(dir.path(), &d);

        // An artifact naming a word the dictionary does not contain
        fs::write(cache.path(), "crane\nknoll\n").unwrap();

        let openings = cache.top_openings(&d).unwrap();
        assert!(openings.iter().all(|w| d.contains(w)));

        let content = fs::read_to_string(cache.path()).unwrap();
        assert!(!content.contains("crane"));
    }

    #[test]
    fn empty_artifact_is_rebuilt() {
        let dir = tempfile::tempdir().unwrap();
        let d = dict(&["knoll", "stela", "doily", "hullo"]);
        let cache = FirstMoveCache::for_dictionary(dir.path(), &d);

        fs::write(cache.path(), "\n\n").unwrap();
        let openings = cache.top_openings(&d).unwrap();
        assert!(!openings.is_empty());
    }

    #[test]
    fn opening_guess_draws_from_the_list() {
        let dir = tempfile::tempdir().unwrap();
        let d = dict(&["knoll", "stela", "doily", "hullo"]);
        let cache = FirstMoveCache::for_dictionary(dir.path(), &d);

        let openings = cache.top_openings(&d).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let pick = cache.opening_guess(&d, &mut rng).unwrap();
            assert!(openings.contains(&pick));
        }
    }

    #[test]
    fn opening_guess_is_reproducible_per_seed() {
        let dir = tempfile::tempdir().unwrap();
        let d = dict(&["knoll", "stela", "doily", "hullo"]);
        let cache = FirstMoveCache::for_dictionary(dir.path(), &d);

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(
                cache.opening_guess(&d, &mut rng_a).unwrap(),
                cache.opening_guess(&d, &mut rng_b).unwrap()
            );
        }
    }
}
