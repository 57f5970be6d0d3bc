//! Test helpers for writing trainer rosters to disk.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Write `contents` to `path`, failing the test on IO errors.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A temporary directory holding a roster file.
pub(super) struct RosterDir {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl RosterDir {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `rows` as `trainers.json` and return its path.
    pub(super) fn write_roster(&self, rows: &Value) -> Utf8PathBuf {
        let path = self.path("trainers.json");
        let payload = serde_json::to_vec_pretty(rows).expect("serialise roster");
        write_utf8(&path, &payload);
        path
    }
}

/// Storage rows mirroring the shared sample roster, plus one unavailable
/// trainer and one row with missing attributes.
pub(super) fn sample_rows() -> Value {
    json!([
        {
            "id": "t-ava", "display_name": "Ava Brooks",
            "specializations": ["yoga", "flexibility"], "experience_years": 3,
            "city": "London", "country": "UK", "hourly_rate": 45, "is_available": true,
            "bio": "Vinyasa and yin."
        },
        {
            "id": "t-ben", "display_name": "Ben Carter",
            "specializations": ["weight_loss", "nutrition", "hiit"], "experience_years": 12,
            "city": "Dubai", "country": "UAE", "hourly_rate": 80, "is_available": true
        },
        {
            "id": "t-dev", "display_name": "Dev Patel",
            "specializations": ["yoga", "meditation"], "experience_years": 6,
            "city": "Manchester", "country": "UK", "hourly_rate": null, "is_available": true
        },
        {
            "id": "t-fay", "display_name": "Fay Lin",
            "specializations": ["yoga"], "experience_years": 9,
            "city": "London", "country": "UK", "hourly_rate": 40, "is_available": false
        },
        { "id": "t-gus", "display_name": "Gus Hale" }
    ])
}
