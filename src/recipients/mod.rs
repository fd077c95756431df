//! Recipient address source.
//!
//! Reads a `;`-delimited text file: the first line is a header and is
//! discarded, and the first field of every following line is taken
//! verbatim as a destination address. No checksum validation or
//! normalization happens here; malformed tokens fail later, at the
//! point where they are parsed into addresses.
//!
//! Policy for degenerate lines: a zero-length first field (blank line,
//! or a line starting with `;`) is skipped rather than treated as an
//! error. A line without any `;` contributes its whole content as the
//! address token.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Field separator in the recipients file.
const FIELD_DELIMITER: char = ';';

/// Read destination addresses from a delimited file, in file order.
pub fn read_addresses<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut addresses = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if index == 0 {
            // Skip the header
            continue;
        }

        let address = line.split(FIELD_DELIMITER).next().unwrap_or_default();
        if address.is_empty() {
            continue;
        }
        addresses.push(address.to_string());
    }

    Ok(addresses)
}

/// Count data records without interpreting fields.
///
/// The header line and blank lines are excluded.
pub fn count_records<P: AsRef<Path>>(path: P) -> io::Result<usize> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut count = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if index == 0 || line.is_empty() {
            continue;
        }
        count += 1;
    }

    Ok(count)
}
