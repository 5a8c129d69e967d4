//! Test helpers for writing catalogue files to a temporary directory.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) const SAMPLE_CATALOGUE: &str = r#"[
  {"id": "sigiriya", "name": "Sigiriya Rock Fortress", "category": "heritage-site",
   "latitude": 7.9570, "longitude": 80.7603},
  {"id": "temple-of-the-tooth", "name": "Temple of the Sacred Tooth Relic",
   "category": "heritage-site", "latitude": 7.2936, "longitude": 80.6413},
  {"id": "galle-fort", "name": "Galle Fort", "category": "heritage-site",
   "latitude": 6.0260, "longitude": 80.2170},
  {"id": "polonnaruwa", "name": "Ancient City of Polonnaruwa", "category": "heritage-site",
   "latitude": 7.9403, "longitude": 81.0188},
  {"id": "dambulla", "name": "Dambulla Cave Temple", "category": "heritage-site",
   "latitude": 7.8567, "longitude": 80.6492},
  {"id": "yala", "name": "Yala National Park", "category": "wildlife-spot",
   "latitude": 6.3728, "longitude": 81.5016},
  {"id": "minneriya", "name": "Minneriya National Park", "category": "wildlife-spot",
   "latitude": 8.0367, "longitude": 80.8956}
]"#;

/// Standing on Sigiriya rock, a few metres north of the recorded position.
pub(super) const SIGIRIYA_SUMMIT: (f64, f64) = (7.9572, 80.7603);

/// Catalogue files kept alive for the duration of a test.
#[derive(Debug)]
pub(super) struct CatalogueFiles {
    _dir: TempDir,
    root: Utf8PathBuf,
    sample: Utf8PathBuf,
    empty: Utf8PathBuf,
    malformed: Utf8PathBuf,
}

impl CatalogueFiles {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root =
            Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir path");
        let sample = root.join("catalogue.json");
        let empty = root.join("empty.json");
        let malformed = root.join("malformed.json");
        write_utf8(&sample, SAMPLE_CATALOGUE.as_bytes());
        write_utf8(&empty, b"[]");
        write_utf8(&malformed, br#"[{"id": "sigiriya"}]"#);
        Self {
            _dir: dir,
            root,
            sample,
            empty,
            malformed,
        }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn sample(&self) -> &Utf8Path {
        &self.sample
    }

    pub(super) fn empty(&self) -> &Utf8Path {
        &self.empty
    }

    pub(super) fn malformed(&self) -> &Utf8Path {
        &self.malformed
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}
