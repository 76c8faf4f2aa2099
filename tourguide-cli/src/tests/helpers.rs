//! Test helpers for writing destination catalogues to disk.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;
use tourguide_core::{Destination, DestinationStore, MemoryDestinationStore};

use crate::CliError;
use crate::catalogue::{CatalogueLoader, CatalogueSource};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Destinations around Turkestan; the last one has no embedded coordinate.
pub(super) fn sample_destinations() -> Vec<Destination> {
    vec![
        Destination {
            detailed_info: Some("Commissioned by Timur in 1389 and left unfinished.".to_owned()),
            audio_file: Some("https://cdn.example.com/audio/yasawi.mp3".to_owned()),
            ..Destination::new(
                1_u64,
                "Mausoleum of Khoja Ahmed Yasawi",
                "https://www.google.com/maps/place/@43.2975,68.2529,17z",
            )
            .with_description("Timurid mausoleum in Turkestan")
            .with_image("https://cdn.example.com/yasawi.jpg")
            .with_district("Turkestan")
        },
        Destination::new(
            2_u64,
            "Arystan Bab Mausoleum",
            "https://www.google.com/maps/place/@42.8494,68.3369,17z",
        )
        .with_district("Otyrar"),
        Destination::new(
            3_u64,
            "Otrar Settlement",
            "https://www.google.com/maps/place/@42.8529,68.3005,15z",
        )
        .with_district("Otyrar"),
        Destination::new(
            4_u64,
            "Ukash Ata Well",
            "https://www.google.com/maps/place/@41.9600,69.6400,15z",
        )
        .with_district("Kazygurt"),
        Destination::new(5_u64, "Sauran", "https://www.google.com/maps/place/Sauran")
            .with_district("Turkestan"),
    ]
}

/// Temporary directory holding catalogue files.
pub(super) struct CatalogueFiles {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl CatalogueFiles {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_catalogue(&self, name: &str, destinations: &[Destination]) -> Utf8PathBuf {
        let path = self.path(name);
        let payload = serde_json::to_vec_pretty(destinations).expect("serialise catalogue");
        write_utf8(&path, &payload);
        path
    }
}

/// Loader returning a fixed snapshot regardless of the requested source.
pub(super) struct StaticCatalogueLoader {
    pub(super) destinations: Vec<Destination>,
}

impl CatalogueLoader for StaticCatalogueLoader {
    fn load(&self, _source: &CatalogueSource) -> Result<Box<dyn DestinationStore>, CliError> {
        Ok(Box::new(MemoryDestinationStore::new(
            self.destinations.clone(),
        )))
    }
}
