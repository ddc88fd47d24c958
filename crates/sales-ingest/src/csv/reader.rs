//! CSV file reading into Polars DataFrames.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

fn read_error(path: &Path, source: std::io::Error) -> IngestError {
    IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    }
}

fn check_encoding(path: &Path, prefix: &[u8]) -> Result<()> {
    let encoding = match prefix.get(0..2) {
        Some([0xFF, 0xFE]) => "UTF-16 LE",
        Some([0xFE, 0xFF]) => "UTF-16 BE",
        _ => return Ok(()),
    };
    Err(IngestError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding,
    })
}

/// Checks the encoding, then reads the header line from the same reader.
fn check_header(path: &Path, reader: &mut impl BufRead) -> Result<Vec<String>> {
    let prefix = reader.fill_buf().map_err(|e| read_error(path, e))?;
    check_encoding(path, prefix)?;

    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| read_error(path, e))?;
    let line = line.trim_end_matches(['\r', '\n']);
    let line = line.strip_prefix('\u{feff}').unwrap_or(line);
    if line.trim().is_empty() {
        return Err(IngestError::NoHeader {
            path: path.to_path_buf(),
        });
    }
    Ok(line.split(',').map(str::to_string).collect())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut reader = BufReader::new(open(path)?);
    let prefix = reader.fill_buf().map_err(|e| read_error(path, e))?;
    check_encoding(path, prefix)
}

/// Reads the header line, with any UTF-8 BOM stripped.
///
/// Column names are returned verbatim; trimming is a cleaning step.
pub fn read_header_line(path: &Path) -> Result<Vec<String>> {
    let mut reader = BufReader::new(open(path)?);
    check_header(path, &mut reader)
}

/// Reads a CSV file with a single header row into a DataFrame.
///
/// The encoding and header are checked on the same handle Polars then
/// reads from. The whole file is scanned for schema inference; empty
/// fields become nulls.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    let mut reader = BufReader::new(open(path)?);
    check_header(path, &mut reader)?;
    let mut file = reader.into_inner();
    file.seek(SeekFrom::Start(0))
        .map_err(|e| read_error(path, e))?;

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .into_reader_with_file_handle(file)
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_frame_shape() {
        let file = create_temp_csv(b"CustomerID,Name\n1,Ann\n2,Bob\n");
        let df = read_csv_frame(file.path()).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn test_read_csv_frame_empty_fields_are_null() {
        let file = create_temp_csv(b"SaleAmount,BonusPoints,PaymentType\n19.99,,\n10.0,50,Card\n");
        let df = read_csv_frame(file.path()).unwrap();
        assert_eq!(df.column("BonusPoints").unwrap().null_count(), 1);
        assert_eq!(df.column("PaymentType").unwrap().null_count(), 1);
    }

    #[test]
    fn test_read_csv_frame_missing_file() {
        let result = read_csv_frame(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_csv_frame_empty_file() {
        let file = create_temp_csv(b"");
        let result = read_csv_frame(file.path());
        assert!(matches!(result, Err(IngestError::NoHeader { .. })));
    }

    #[test]
    fn test_validate_encoding_rejects_utf16() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'A', 0x00]);
        let result = validate_encoding(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_read_csv_frame_rejects_utf16() {
        let file = create_temp_csv(&[0xFE, 0xFF, 0x00, b'A']);
        let result = read_csv_frame(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 BE",
                ..
            })
        ));
    }

    #[test]
    fn test_read_csv_frame_whitespace_header_is_no_header() {
        let file = create_temp_csv(b"  \n1,2\n");
        let result = read_csv_frame(file.path());
        assert!(matches!(result, Err(IngestError::NoHeader { .. })));
    }

    #[test]
    fn test_read_header_line_keeps_whitespace() {
        let file = create_temp_csv("\u{feff}SaleID, SaleAmount \n1,2\n".as_bytes());
        let headers = read_header_line(file.path()).unwrap();
        assert_eq!(headers, vec!["SaleID", " SaleAmount "]);
    }
}
