//! Result sink: writes repeats as a plain-text report.
//!
//! One line per repeat:
//!
//! ```text
//! <word> <length> <pos1> (<left1>,<right1>), <pos2> (<left2>,<right2>), ...
//! ```
//!
//! A missing flank symbol at a sequence boundary is written as nothing,
//! e.g. `0 (,G)`.

use crate::error::Result;
use crate::flank::Flank;
use crate::repeat::Repeat;
use log::info;
use std::fmt::{self, Display};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

struct Side<'a, T>(&'a Option<T>);

impl<T: Display> Display for Side<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(symbol) => write!(f, "{}", symbol),
            None => Ok(()),
        }
    }
}

impl<T: Display> Display for Flank<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", Side(&self.left), Side(&self.right))
    }
}

impl<T: Display> Display for Repeat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.word() {
            write!(f, "{}", symbol)?;
        }
        write!(f, " {} ", self.len())?;

        for (i, (pos, flank)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", pos, flank)?;
        }
        Ok(())
    }
}

/// Formats one repeat as a report line, without the trailing newline.
pub fn format_repeat<T: Display>(repeat: &Repeat<T>) -> String {
    repeat.to_string()
}

/// Writes every repeat as one line.
pub fn write_report<W: Write, T: Display>(mut writer: W, repeats: &[Repeat<T>]) -> Result<()> {
    for repeat in repeats {
        writeln!(writer, "{}", repeat)?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates `path` and writes the report into it.
pub fn save_report<P: AsRef<Path>, T: Display>(path: P, repeats: &[Repeat<T>]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_report(BufWriter::new(file), repeats)?;
    info!("wrote {} repeats to {}", repeats.len(), path.display());
    Ok(())
}

/// Returns the first `<dir>/<stem><n>.txt`, n = 1, 2, ..., that does not exist yet.
pub fn next_output_path<P: AsRef<Path>>(dir: P, stem: &str) -> PathBuf {
    let dir = dir.as_ref();
    let mut n: u64 = 1;
    loop {
        let candidate = dir.join(format!("{}{}.txt", stem, n));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}
