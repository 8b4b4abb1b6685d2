//! Sequence source: reads the first record of a FASTA/FASTQ file.
//!
//! Parsing is done by needletail, which also detects and decompresses
//! gzip, bzip2 and xz input. Only the first record is used; any further
//! records are left unread.

use crate::error::{RepeatError, Result};
use log::debug;
use needletail::parse_fastx_reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads the identifier and sequence of the first record in `path`.
///
/// The identifier is the header up to its first whitespace.
pub fn read_first_record<P: AsRef<Path>>(path: P) -> Result<(String, Vec<u8>)> {
    let path = path.as_ref();
    let file = File::open(path)?;
    read_first_record_from(file, &path.display().to_string())
}

/// Same as [`read_first_record`] over any reader; `source` names the
/// input in errors.
pub fn read_first_record_from<R: Read + Send>(reader: R, source: &str) -> Result<(String, Vec<u8>)> {
    let mut fastx = parse_fastx_reader(reader).map_err(|e| RepeatError::Fasta(e.to_string()))?;

    let record = match fastx.next() {
        Some(record) => record.map_err(|e| RepeatError::Fasta(e.to_string()))?,
        None => return Err(RepeatError::NoRecord(source.to_string())),
    };

    let id = header_id(record.id());
    let sequence = record.seq().into_owned();
    debug!("read record {} ({} symbols) from {}", id, sequence.len(), source);

    Ok((id, sequence))
}

fn header_id(header: &[u8]) -> String {
    let header = String::from_utf8_lossy(header);
    header.split_whitespace().next().unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_first_record_only() {
        let data = b">chr1 test sequence\nACGT\nACGT\n>chr2\nTTTT\n".to_vec();
        let (id, seq) = read_first_record_from(Cursor::new(data), "memory").unwrap();
        assert_eq!(id, "chr1");
        assert_eq!(seq, b"ACGTACGT");
    }

    #[test]
    fn test_fastq_record() {
        let data = b"@read1\nGATC\n+\nIIII\n".to_vec();
        let (id, seq) = read_first_record_from(Cursor::new(data), "memory").unwrap();
        assert_eq!(id, "read1");
        assert_eq!(seq, b"GATC");
    }

    #[test]
    fn test_empty_input_is_error() {
        let result = read_first_record_from(Cursor::new(Vec::new()), "memory");
        assert!(result.is_err());
    }

    #[test]
    fn test_read_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">seq1").unwrap();
        writeln!(file, "ATATAT").unwrap();
        file.flush().unwrap();

        let (id, seq) = read_first_record(file.path()).unwrap();
        assert_eq!(id, "seq1");
        assert_eq!(seq, b"ATATAT");
    }

    #[test]
    fn test_missing_file() {
        let result = read_first_record("/nonexistent/path/to/input.fa");
        assert!(matches!(result, Err(RepeatError::Io(_))));
    }

    #[test]
    fn test_header_id() {
        assert_eq!(header_id(b"NC_000913.3 Escherichia coli"), "NC_000913.3");
        assert_eq!(header_id(b""), "");
    }
}
