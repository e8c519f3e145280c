//! Bank packager.
//!
//! Generates a batch of presets, folds them into one deflate-compressed
//! archive with the canonical internal layout
//! `RANDOM_<YYYYmmdd_HHMMSS>/Presets/<preset-filename>`, renames the staging
//! archive to the bank extension, and removes the staged loose files so the
//! bank is the only surviving artifact.
//!
//! Cleanup ordering is a correctness requirement: if archiving fails partway,
//! the staged preset files are left in place as the only recovery path.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use presetforge_preset::BANK_EXTENSION;

use crate::error::GenResult;
use crate::generate::generate;
use crate::request::GenerateRequest;

/// Prefix of the bank's timestamped root folder.
pub const BANK_PREFIX: &str = "RANDOM";

/// Fixed-name subfolder holding the preset files inside the bank.
pub const PRESETS_FOLDER: &str = "Presets";

/// Result of a packaging run.
#[derive(Debug)]
pub struct BankOutcome {
    /// The base seed the run used.
    pub base_seed: u32,
    /// Path of the written bank archive.
    pub path: PathBuf,
    /// Number of presets folded into the bank.
    pub preset_count: usize,
}

/// Generates `request.count` presets and packs them into one bank archive
/// in `request.out_dir`.
pub fn pack_bank(request: &GenerateRequest) -> GenResult<BankOutcome> {
    // Stage loose preset files first.
    let outcome = generate(request)?;

    let folder = format!("{}_{}", BANK_PREFIX, Local::now().format("%Y%m%d_%H%M%S"));
    let staging_path = request.out_dir.join(format!("{folder}.zip"));
    let bank_path = request.out_dir.join(format!("{folder}.{BANK_EXTENSION}"));

    let mut archive = ZipWriter::new(fs::File::create(&staging_path)?);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    for path in &outcome.paths {
        let basename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        archive.start_file(format!("{folder}/{PRESETS_FOLDER}/{basename}"), options)?;
        archive.write_all(&fs::read(path)?)?;
    }
    archive.finish()?;

    fs::rename(&staging_path, &bank_path)?;

    // The bank is complete; only now are the staged files redundant.
    for path in &outcome.paths {
        fs::remove_file(path)?;
    }

    Ok(BankOutcome {
        base_seed: outcome.base_seed,
        path: bank_path,
        preset_count: outcome.paths.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use presetforge_preset::PRESET_EXTENSION;
    use std::io::Read;
    use zip::ZipArchive;

    fn bank_request(out_dir: PathBuf, count: u32) -> GenerateRequest {
        GenerateRequest {
            count,
            out_dir,
            seed: Some(42),
            ..GenerateRequest::default()
        }
    }

    fn dir_entries(dir: &std::path::Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_pack_leaves_only_the_bank() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = pack_bank(&bank_request(dir.path().to_path_buf(), 3)).unwrap();

        let entries = dir_entries(dir.path());
        assert_eq!(entries.len(), 1, "expected only the bank, got {entries:?}");
        assert!(entries[0].ends_with(&format!(".{BANK_EXTENSION}")));
        assert!(!entries
            .iter()
            .any(|e| e.ends_with(&format!(".{PRESET_EXTENSION}"))));
        assert_eq!(outcome.preset_count, 3);
        assert_eq!(outcome.path, dir.path().join(&entries[0]));
    }

    #[test]
    fn test_bank_internal_layout() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = pack_bank(&bank_request(dir.path().to_path_buf(), 3)).unwrap();

        let mut archive = ZipArchive::new(fs::File::open(&outcome.path).unwrap()).unwrap();
        assert_eq!(archive.len(), 3);

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i).unwrap();
            let name = entry.name().to_string();

            let parts: Vec<&str> = name.split('/').collect();
            assert_eq!(parts.len(), 3, "unexpected entry path {name}");
            assert!(parts[0].starts_with("RANDOM_"));
            assert_eq!(parts[1], PRESETS_FOLDER);
            assert!(parts[2].ends_with(&format!(".{PRESET_EXTENSION}")));

            // Entries are complete preset documents.
            let mut content = String::new();
            entry.read_to_string(&mut content).unwrap();
            let preset = presetforge_preset::Preset::from_json(&content).unwrap();
            assert_eq!(preset.settings.modulations.len(), 64);
        }
    }

    #[test]
    fn test_bank_folder_name_is_second_resolution_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = pack_bank(&bank_request(dir.path().to_path_buf(), 1)).unwrap();

        let stem = outcome
            .path
            .file_stem()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        // RANDOM_YYYYmmdd_HHMMSS
        let suffix = stem.strip_prefix("RANDOM_").unwrap();
        assert_eq!(suffix.len(), 15);
        let (date, time) = suffix.split_once('_').unwrap();
        assert_eq!(date.len(), 8);
        assert_eq!(time.len(), 6);
        assert!(date.chars().all(|c| c.is_ascii_digit()));
        assert!(time.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_single_preset_bank() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = pack_bank(&bank_request(dir.path().to_path_buf(), 1)).unwrap();

        let mut archive = ZipArchive::new(fs::File::open(&outcome.path).unwrap()).unwrap();
        assert_eq!(archive.len(), 1);
        assert_eq!(outcome.preset_count, 1);
        let entry = archive.by_index(0).unwrap();
        assert!(entry.compression() == CompressionMethod::Deflated);
    }
}
