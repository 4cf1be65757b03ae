use crate::services::archive::ArchiveAccessor;
use crate::types::errors::ResolveResult;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        // Initialize logger only once
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Helper: create a minimal valid ZIP with the given entries.
pub fn create_test_zip(dir: &Path, name: &str, files: &[(&str, &[u8])]) -> PathBuf {
    init_logger();

    let zip_path = dir.join(name);
    let file = fs::File::create(&zip_path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options =
        zip::write::SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (entry_name, content) in files {
        writer.start_file(entry_name.to_string(), options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap();
    zip_path
}

/// In-memory accessor that records every entry it is asked about.
#[derive(Default)]
pub struct MemoryAccessor {
    entries: HashMap<String, Vec<u8>>,
    /// Entries reported as existing whose read still comes back empty.
    vanishing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl MemoryAccessor {
    pub fn with_entries(files: &[(&str, &[u8])]) -> Self {
        init_logger();
        Self {
            entries: files
                .iter()
                .map(|(name, content)| (name.to_string(), content.to_vec()))
                .collect(),
            ..Default::default()
        }
    }

    pub fn vanish(mut self, entry: &str) -> Self {
        self.vanishing.insert(entry.to_string());
        self
    }

    pub fn touched(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ArchiveAccessor for MemoryAccessor {
    fn entry_exists(&self, _archive: &Path, entry: &str) -> ResolveResult<bool> {
        self.calls.lock().unwrap().push(entry.to_string());
        Ok(self.entries.contains_key(entry) || self.vanishing.contains(entry))
    }

    fn read_entry_optional(&self, _archive: &Path, entry: &str) -> ResolveResult<Option<Vec<u8>>> {
        self.calls.lock().unwrap().push(entry.to_string());
        Ok(self.entries.get(entry).cloned())
    }
}
