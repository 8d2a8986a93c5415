/// Levenshtein distance over full character sequences. Insertion,
/// deletion and substitution each cost 1.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two-row DP; `prev[j]` is the distance between a[..i] and b[..j].
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];
    for (i, &char_a) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &char_b) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(char_a != char_b);
            current[j + 1] = substitution.min(prev[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut prev, &mut current);
    }
    prev[b.len()]
}

/// Candidate whose normalized form is closest in edit distance to the
/// (already normalized) unmatched word. Candidates are
/// `(original, normalized)` pairs; the original spelling is returned so
/// suggestions keep their diacritics. First candidate wins ties, which
/// keeps the result deterministic for a fixed reference order. An empty
/// candidate sequence yields an empty string.
pub fn closest_match<'a>(
    normalized_word: &str,
    candidates: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> String {
    let mut best_distance = usize::MAX;
    let mut best = "";
    for (original, normalized) in candidates {
        let distance = levenshtein(normalized_word, normalized);
        if distance < best_distance {
            best_distance = distance;
            best = original;
        }
    }
    best.to_string()
}
