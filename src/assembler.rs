use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("permutation length {seq} does not match chunk count {chunks}")]
    LengthMismatch { seq: usize, chunks: usize },
    #[error("destination {0} is out of range for {1} chunks")]
    OutOfRange(usize, usize),
    #[error("destination {0} is filled more than once")]
    Duplicate(usize),
}

/// Reorders decrypted chunks into final content: chunk `j` lands at output
/// position `seq[j]`. The sequence must be a true permutation of `0..N`;
/// a duplicate, gap, or out-of-range destination is a contract violation.
pub fn assemble(chunks: &[String], seq: &[usize]) -> Result<String, AssembleError> {
    if seq.len() != chunks.len() {
        return Err(AssembleError::LengthMismatch {
            seq: seq.len(),
            chunks: chunks.len(),
        });
    }

    let n = chunks.len();
    let mut slots: Vec<Option<&str>> = vec![None; n];
    for (j, &dest) in seq.iter().enumerate() {
        if dest >= n {
            return Err(AssembleError::OutOfRange(dest, n));
        }
        if slots[dest].is_some() {
            return Err(AssembleError::Duplicate(dest));
        }
        slots[dest] = Some(&chunks[j]);
    }

    // Every slot is filled: n destinations, all in range, no duplicates.
    Ok(slots.into_iter().flatten().collect())
}
