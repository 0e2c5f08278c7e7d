use rune_core::{ErrorInfo, Pattern, RuneError};

/// Widest bit length whose 2^n search space still fits in a `usize`.
const MAX_BIT_LENGTH: usize = usize::BITS as usize - 1;

/// Validates a bit length before any enumeration work starts.
pub fn check_bit_length(bit_length: usize) -> Result<(), RuneError> {
    if bit_length < 1 {
        let info = ErrorInfo::new("bit-length-below-one", "bit length must be at least 1")
            .with_context("bit_length", bit_length.to_string());
        return Err(RuneError::Length(info));
    }
    if bit_length > MAX_BIT_LENGTH {
        let info = ErrorInfo::new(
            "bit-length-unrepresentable",
            "2^bit_length does not fit the address space",
        )
        .with_context("bit_length", bit_length.to_string())
        .with_context("max_bit_length", MAX_BIT_LENGTH.to_string());
        return Err(RuneError::Length(info));
    }
    Ok(())
}

/// Enumerates every `bit_length`-wide pattern in lexicographic order.
///
/// Treating '0' < '1', the all-zeros pattern comes first and the all-ones
/// pattern last. The order is load-bearing: the necklace reducer picks the
/// first member of each rotation class as its canonical representative.
pub fn enumerate_patterns(bit_length: usize) -> Result<Vec<Pattern>, RuneError> {
    check_bit_length(bit_length)?;
    let count = 1usize << bit_length;
    let mut patterns = Vec::with_capacity(count);
    for value in 0..count {
        let bits: Vec<u8> = (0..bit_length)
            .map(|position| ((value >> (bit_length - 1 - position)) & 1) as u8)
            .collect();
        patterns.push(Pattern::from_bits(bits)?);
    }
    Ok(patterns)
}
