use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

pub const START_MARKER: &str = "# >>> auto-generated contents";
pub const END_MARKER: &str = "# <<< auto-generated contents";

/// One open managed region of the env file.
///
/// `open` strips any previous managed region and rewrites the file to hold
/// only the start marker; generators then append and remove lines inside the
/// open region through the line editor. `finalize` writes the end marker and
/// re-emits every line that was outside the region before this run began,
/// byte-for-byte and in order.
#[derive(Debug)]
pub struct EnvSession {
    path: PathBuf,
    preserved: Vec<String>,
}

impl EnvSession {
    pub fn open(path: &Path, from_scratch: bool) -> Result<Self, AppError> {
        let fresh = from_scratch || !path.exists();

        let mut preserved = Vec::new();
        if !fresh {
            let text = fs::read_to_string(path)?;
            let mut in_managed_region = false;
            for line in text.split_inclusive('\n') {
                let trimmed = line.trim_end_matches('\n').trim_end_matches('\r');
                if trimmed == START_MARKER {
                    in_managed_region = true;
                } else if trimmed == END_MARKER {
                    in_managed_region = false;
                } else if !in_managed_region {
                    preserved.push(line.to_string());
                }
            }
        }

        fs::write(path, format!("{START_MARKER}\n"))?;
        Ok(Self { path: path.to_path_buf(), preserved })
    }

    /// Close the region: end marker, then the preserved out-of-region tail.
    pub fn finalize(self) -> Result<(), AppError> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        writeln!(file, "{END_MARKER}")?;
        for line in &self.preserved {
            file.write_all(line.as_bytes())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn open_resets_file_to_start_marker() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "CUSTOM=1\n").unwrap();

        let _session = EnvSession::open(&path, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), format!("{START_MARKER}\n"));
    }

    #[test]
    fn lines_outside_region_survive_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(
            &path,
            format!("BEFORE=1\n{START_MARKER}\nSTALE=1\n{END_MARKER}\nAFTER=2\nAFTER_B=3\n"),
        )
        .unwrap();

        let session = EnvSession::open(&path, false).unwrap();
        fs::OpenOptions::new()
            .append(true)
            .open(&path)
            .unwrap()
            .write_all(b"GENERATED=1\n")
            .unwrap();
        session.finalize().unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            format!("{START_MARKER}\nGENERATED=1\n{END_MARKER}\nBEFORE=1\nAFTER=2\nAFTER_B=3\n")
        );
    }

    #[test]
    fn stale_region_contents_are_discarded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, format!("{START_MARKER}\nHAND_EDIT=1\n{END_MARKER}\n")).unwrap();

        let session = EnvSession::open(&path, false).unwrap();
        session.finalize().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), format!("{START_MARKER}\n{END_MARKER}\n"));
    }

    #[test]
    fn from_scratch_discards_everything() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "KEEP_ME=nope\n").unwrap();

        let session = EnvSession::open(&path, true).unwrap();
        session.finalize().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), format!("{START_MARKER}\n{END_MARKER}\n"));
    }

    #[test]
    fn missing_file_behaves_as_from_scratch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");

        let session = EnvSession::open(&path, false).unwrap();
        session.finalize().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), format!("{START_MARKER}\n{END_MARKER}\n"));
    }
}
