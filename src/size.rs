// File inspection: existence check plus a human-readable size string.

use crate::error::{Result, UploadError};
use std::path::Path;

const SUFFIXES: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Stat `path` and return its size in pretty-print form, e.g. "12.34 MB".
pub fn check_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let metadata = std::fs::metadata(path).map_err(|source| {
        log::warn!("could not find file \"{}\": {}", path.display(), source);
        UploadError::FileNotFound {
            path: path.to_path_buf(),
            source,
        }
    })?;
    Ok(pretty_size(metadata.len()))
}

/// Render a byte count with a binary unit suffix.
///
/// The unit is `floor(log_1024(size))`; anything from 1 TiB up stays in GB.
pub fn pretty_size(size_in_bytes: u64) -> String {
    let mut index = 0;
    while index + 1 < SUFFIXES.len() && size_in_bytes >= 1u64 << (10 * (index + 1)) {
        index += 1;
    }
    let scaled = size_in_bytes as f64 / (1u64 << (10 * index)) as f64;
    format!("{} {}", round(scaled, 0.5, 2), SUFFIXES[index])
}

/// Round `val` to `places` decimals, going up when the dropped fraction is
/// at least `round_on`.
pub fn round(val: f64, round_on: f64, places: i32) -> f64 {
    let pow = 10f64.powi(places);
    let digit = pow * val;
    let rounded = if digit.fract() >= round_on {
        digit.ceil()
    } else {
        digit.floor()
    };
    rounded / pow
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_round() {
        assert_eq!(round(2.5, 0.5, 0), 3.0);
        assert_eq!(round(0.5, 0.5, 0), 1.0);
        assert_eq!(round(1.125, 0.5, 2), 1.13);
        assert_eq!(round(2.25, 0.5, 1), 2.3);
        assert_eq!(round(2.0, 0.5, 2), 2.0);
        assert_eq!(round(0.25, 0.5, 0), 0.0);
    }

    #[test]
    fn test_pretty_size() {
        assert_eq!(pretty_size(0), "0 B");
        assert_eq!(pretty_size(10), "10 B");
        assert_eq!(pretty_size(1023), "1023 B");
        assert_eq!(pretty_size(1024), "1 KB");
        assert_eq!(pretty_size(1536), "1.5 KB");
        assert_eq!(pretty_size(1024 * 1024), "1 MB");
        assert_eq!(pretty_size(5 * 1024 * 1024 * 1024), "5 GB");
    }

    #[test]
    fn test_pretty_size_clamps_to_gb() {
        assert_eq!(pretty_size(1u64 << 40), "1024 GB");
        assert_eq!(pretty_size(2u64 << 40), "2048 GB");
    }

    #[test]
    fn test_pretty_size_parses_back() {
        let samples = [
            1u64,
            999,
            4097,
            123_456,
            7_654_321,
            987_654_321,
            (1u64 << 40) - 1,
        ];
        for bytes in samples {
            let text = pretty_size(bytes);
            let (number, unit) = text.split_once(' ').unwrap();
            let number: f64 = number.parse().unwrap();
            let index = SUFFIXES.iter().position(|s| *s == unit).unwrap();
            let scale = (1u64 << (10 * index)) as f64;
            // two decimals of the unit, i.e. at most 0.01 units off
            assert!(
                (number * scale - bytes as f64).abs() <= 0.01 * scale,
                "{} rendered as {}",
                bytes,
                text
            );
        }
    }

    #[test]
    fn test_check_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 2048]).unwrap();
        file.flush().unwrap();
        assert_eq!(check_file(file.path()).unwrap(), "2 KB");
    }

    #[test]
    fn test_check_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = check_file(dir.path().join("nope.bin")).unwrap_err();
        assert!(matches!(err, UploadError::FileNotFound { .. }));
    }
}
