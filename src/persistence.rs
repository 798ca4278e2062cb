// File: src/persistence.rs
use crate::core::dictionary::{Dictionary, DictionaryEntry};
use crate::error::{GlyphError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// On-disk layout: entries in key order, keys in the symbol text encoding.
#[derive(serde::Serialize, serde::Deserialize)]
struct SerializableDictionary<V> {
    entries: Vec<DictionaryEntry<V>>,
}

impl<V: Clone> SerializableDictionary<V> {
    fn snapshot(dictionary: &Dictionary<V>) -> Self {
        Self {
            entries: dictionary.iter().cloned().collect(),
        }
    }

    /// Re-inserts through `Dictionary::insert` so order and uniqueness hold
    /// even for hand-edited files.
    fn into_dictionary(self) -> Dictionary<V> {
        self.entries
            .into_iter()
            .map(|entry| (entry.key, entry.value))
            .collect()
    }
}

/// Writes the dictionary with bincode, atomically replacing `path`.
pub fn save_dictionary<V>(dictionary: &Dictionary<V>, path: &Path) -> Result<()>
where
    V: Serialize + Clone,
{
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let state = SerializableDictionary::snapshot(dictionary);

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, &state)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    log::debug!(
        "saved {} dictionary entries to {}",
        dictionary.entry_count(),
        path.display()
    );
    Ok(())
}

pub fn load_dictionary<V>(path: &Path) -> Result<Dictionary<V>>
where
    V: DeserializeOwned + Clone,
{
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: SerializableDictionary<V> = bincode::deserialize_from(reader)?;
    let dictionary = state.into_dictionary();
    log::debug!(
        "loaded {} dictionary entries from {}",
        dictionary.entry_count(),
        path.display()
    );
    Ok(dictionary)
}

/// Where an undecodable dictionary file is moved: `<path>.bak`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

/// Loads `path` for a session that will save back to it.
///
/// A missing file gives an empty dictionary. A file that exists but does not
/// decode is renamed to [`backup_path`] before an empty dictionary is
/// returned, so the next save cannot overwrite it. Any other I/O error is
/// returned and the file is left alone.
pub fn load_dictionary_or_new<V>(path: &Path) -> Result<Dictionary<V>>
where
    V: DeserializeOwned + Clone,
{
    match load_dictionary(path) {
        Ok(dictionary) => Ok(dictionary),
        Err(GlyphError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            log::info!("no dictionary at {}, starting empty", path.display());
            Ok(Dictionary::new())
        }
        Err(GlyphError::Encode(e)) => {
            let backup = backup_path(path);
            fs::rename(path, &backup)?;
            log::warn!(
                "unreadable dictionary {} moved to {}: {}",
                path.display(),
                backup.display(),
                e
            );
            Ok(Dictionary::new())
        }
        Err(e) => Err(e),
    }
}

/// Pretty JSON interchange for sharing dictionaries between tools.
pub fn export_json<V, W>(dictionary: &Dictionary<V>, writer: W) -> Result<()>
where
    V: Serialize + Clone,
    W: Write,
{
    serde_json::to_writer_pretty(writer, &SerializableDictionary::snapshot(dictionary))?;
    Ok(())
}

pub fn import_json<V, R>(reader: R) -> Result<Dictionary<V>>
where
    V: DeserializeOwned + Clone,
    R: Read,
{
    let state: SerializableDictionary<V> = serde_json::from_reader(reader)?;
    Ok(state.into_dictionary())
}
