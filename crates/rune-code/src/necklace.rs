use rune_core::Pattern;

/// Reduces an ordered enumeration to one representative per rotation class.
///
/// The accepted list is seeded with the first pattern. Each later candidate
/// is compared, in enumeration order, against every accepted representative
/// rotated left by every amount in 1..width; any match rejects it, otherwise
/// it is appended. First-seen order is a contract: downstream code ids are
/// positional, so the output order must never be resorted.
///
/// The scan costs O(2^N * accepted * N) comparisons. Any replacement must
/// reproduce the identical representative set in the identical first-seen
/// order, or every persisted code id shifts.
pub fn reduce_to_necklaces(patterns: &[Pattern]) -> Vec<Pattern> {
    let mut accepted: Vec<Pattern> = Vec::new();
    let Some(first) = patterns.first() else {
        return accepted;
    };
    accepted.push(first.clone());
    let width = first.width();
    for candidate in &patterns[1..] {
        // Candidates are pairwise distinct, so the identity rotation never
        // needs testing; a width of 1 makes the range empty and accepts all.
        let already_seen = accepted
            .iter()
            .any(|representative| {
                (1..width).any(|amount| representative.rotate_left(amount) == *candidate)
            });
        if !already_seen {
            accepted.push(candidate.clone());
        }
    }
    accepted
}
