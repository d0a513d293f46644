//! Ingestion: whitespace-separated unsigned integers from a text source into an input buffer.

use log::{debug, warn};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{IngestError, PipelineError};
use crate::pipeline::BoundedBuffer;
use crate::utils::config::{INGEST_RESERVE_CHUNK, MMAP_THRESHOLD};

/// Values read from one source.
#[derive(Debug)]
pub struct Ingested {
    pub numbers: BoundedBuffer<u32>,
    /// Capacity was reached while the source still had data.
    pub truncated: bool,
    /// Byte offset of the first token that was not an unsigned 32-bit integer, if any.
    pub stopped_at: Option<usize>,
}

impl Ingested {
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        self.numbers.as_slice()
    }
}

/// Split on ASCII whitespace, yielding `(byte_offset, token)`.
fn tokens(bytes: &[u8]) -> impl Iterator<Item = (usize, &[u8])> {
    let mut pos = 0;
    std::iter::from_fn(move || {
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= bytes.len() {
            return None;
        }
        let start = pos;
        while pos < bytes.len() && !bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        Some((start, &bytes[start..pos]))
    })
}

fn parse_u32(token: &[u8]) -> Option<u32> {
    std::str::from_utf8(token).ok()?.parse::<u32>().ok()
}

/// Parse at most `capacity` values from `bytes`. Stops at the first non-integer token.
pub fn parse_numbers(bytes: &[u8], capacity: usize) -> Result<Ingested, PipelineError> {
    // Every value needs at least one digit and one separator. Capped; the buffer grows as
    // values parse.
    let estimate = (bytes.len() / 2 + 1).min(INGEST_RESERVE_CHUNK);
    let mut numbers = BoundedBuffer::try_with_capacity("input", capacity, estimate)?;
    let mut truncated = false;
    let mut stopped_at = None;

    for (offset, token) in tokens(bytes) {
        if numbers.is_full() {
            truncated = true;
            break;
        }
        match parse_u32(token) {
            Some(v) => numbers.push(v)?,
            None => {
                stopped_at = Some(offset);
                break;
            }
        }
    }

    if truncated {
        warn!(
            "Not all numbers were read. Maximum size reached ({})",
            capacity
        );
    }
    if let Some(offset) = stopped_at {
        warn!(
            "Stopped reading at byte {}: token is not an unsigned 32-bit integer",
            offset
        );
    }

    Ok(Ingested {
        numbers,
        truncated,
        stopped_at,
    })
}

/// [`parse_numbers`] over in-memory text.
pub fn read_numbers_from_str(text: &str, capacity: usize) -> Result<Ingested, PipelineError> {
    parse_numbers(text.as_bytes(), capacity)
}

/// Read numbers from the file at `path`. Files of `MMAP_THRESHOLD` bytes or more are
/// memory-mapped, smaller ones read whole.
pub fn read_numbers(path: &Path, capacity: usize) -> Result<Ingested, IngestError> {
    read_numbers_with(path, capacity, MMAP_THRESHOLD)
}

/// [`read_numbers`] with an explicit memory-map threshold in bytes.
pub fn read_numbers_with(
    path: &Path,
    capacity: usize,
    mmap_threshold: u64,
) -> Result<Ingested, IngestError> {
    let open_err = |source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::open(path).map_err(open_err)?;
    let size = file.metadata().map(|m| m.len()).unwrap_or(0);

    // Zero-length files cannot be mapped on every platform.
    let ingested = if size > 0 && size >= mmap_threshold {
        debug!("Mapping {} ({} bytes)", path.display(), size);
        let mmap = unsafe { Mmap::map(&file) }.map_err(open_err)?;
        parse_numbers(&mmap, capacity)?
    } else {
        let mut bytes = Vec::with_capacity(size as usize);
        file.read_to_end(&mut bytes).map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        parse_numbers(&bytes, capacity)?
    };

    debug!("Read {} values from {}", ingested.len(), path.display());
    Ok(ingested)
}
