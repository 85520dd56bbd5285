use crate::utils::error::Result;
use crate::utils::validation::parse_disk_count;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter the number of disks: ";

/// Reads one line from `reader` and parses it as a disk count.
///
/// When `prompt` is given, [`PROMPT`] is written and flushed there first.
pub fn read_disk_count<R: BufRead, W: Write>(reader: &mut R, prompt: Option<&mut W>) -> Result<u32> {
    if let Some(out) = prompt {
        out.write_all(PROMPT.as_bytes())?;
        out.flush()?;
    }

    let mut line = String::new();
    reader.read_line(&mut line)?;
    tracing::debug!("Read disk count input: {:?}", line.trim_end());

    parse_disk_count(&line)
}
