//! Sales data line loader
//!
//! Loads raw pipe-delimited data lines from storage. The first physical
//! line is a header and is skipped; blank lines are dropped. Decoding
//! tries UTF-8 first and falls back to Latin-1, which is total (every
//! byte sequence decodes), so legacy exports never abort the run.
//!
//! Contract: on any read failure the loader logs the problem and
//! returns an empty sequence rather than raising into the core.

use std::fs;
use std::path::Path;

/// Read the raw data lines from a sales data file
///
/// Returns the trimmed, non-empty data lines in file order, header
/// excluded. An unreadable file yields an empty vector.
pub fn read_sales_data(path: &Path) -> Vec<String> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Failed to read '{}': {}", path.display(), e);
            return Vec::new();
        }
    };

    let content = decode(bytes);
    content
        .lines()
        .skip(1) // header
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decode file bytes, preferring UTF-8 with a Latin-1 fallback
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(content) => content,
        // Latin-1 maps every byte to the code point of the same value
        Err(e) => e.into_bytes().iter().map(|&b| b as char).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content).expect("Failed to write temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_skips_header_and_blank_lines() {
        let file = create_temp_file(
            b"TransactionID|Date|ProductID|ProductName|Quantity|UnitPrice|CustomerID|Region\n\
              T1|2024-01-01|P101|Widget|3|10.00|C1|North\n\
              \n\
              T2|2024-01-02|P102|Gadget|1|50.00|C2|South\n",
        );

        let lines = read_sales_data(file.path());
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("T1|"));
        assert!(lines[1].starts_with("T2|"));
    }

    #[test]
    fn test_missing_file_returns_empty() {
        let lines = read_sales_data(Path::new("does/not/exist.txt"));
        assert!(lines.is_empty());
    }

    #[test]
    fn test_latin1_fallback() {
        // 0xE9 is 'e acute' in Latin-1 and invalid standalone UTF-8
        let file = create_temp_file(b"header\nT1|2024-01-01|P101|Caf\xe9|3|10.00|C1|North\n");

        let lines = read_sales_data(file.path());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Caf\u{e9}"));
    }

    #[test]
    fn test_header_only_file_returns_empty() {
        let file = create_temp_file(b"TransactionID|Date\n");
        assert!(read_sales_data(file.path()).is_empty());
    }
}
