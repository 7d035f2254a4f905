//! Character-level edit distance for near-miss vocabulary lookups.

/// Levenshtein distance over `char`s, so one kana or kanji counts as one
/// edit. Two-row matrix.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let (short, long): (Vec<char>, Vec<char>) = {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        if a.len() > b.len() { (b, a) } else { (a, b) }
    };

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0; short.len() + 1];
    for (j, lc) in long.iter().enumerate() {
        curr[0] = j + 1;
        for (i, sc) in short.iter().enumerate() {
            curr[i + 1] = if sc == lc {
                prev[i]
            } else {
                1 + prev[i].min(prev[i + 1]).min(curr[i])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[short.len()]
}

/// The candidate with the strictly lowest distance to `input` that is within
/// `max_distance`. Earlier candidates win ties.
pub fn closest<'a, I>(input: &str, candidates: I, max_distance: usize) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        let d = edit_distance(input, candidate);
        if d <= max_distance && best.is_none_or(|(_, b)| d < b) {
            best = Some((candidate, d));
        }
    }
    best.map(|(c, _)| c)
}
