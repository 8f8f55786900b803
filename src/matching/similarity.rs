//! Ratcliff/Obershelp ("gestalt pattern matching") string similarity.
//!
//! The ratio is `2 * M / T`, where `T` is the total number of characters in both
//! strings and `M` is the number of characters in matching blocks. Blocks are found
//! by taking the longest common substring and recursing on the pieces to its left
//! and right.

/// Similarity ratio in `[0, 1]` between two strings, compared by `char`.
///
/// The ratio is not symmetric: blocks are searched for along `a`, so swapping the
/// arguments can change the result. Suggestion scoring passes the candidate name
/// as `a` and the query as `b`.
///
/// Two empty strings are identical (ratio 1.0).
///
/// # Examples
///
/// ```
/// use bactopedia::matching::similarity::ratio;
///
/// assert_eq!(ratio("abcd", "bcde"), 0.75);
/// assert_eq!(ratio("vibrio", "vibrio"), 1.0);
/// assert_eq!(ratio("abc", "xyz"), 0.0);
/// ```
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    #[allow(clippy::cast_precision_loss)] // name lengths are tiny
    {
        2.0 * matching_characters(&a, &b) as f64 / total as f64
    }
}

/// Total length of all matching blocks between `a` and `b`
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }

    matched
}

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, len)`.
///
/// Ties go to the block starting earliest in `a`, then earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_len) = (alo, blo, 0);

    // run[j + 1] = length of the match ending at a[i], b[j]
    let mut prev = vec![0usize; bhi - blo + 1];
    let mut run = vec![0usize; bhi - blo + 1];

    for i in alo..ahi {
        for j in blo..bhi {
            let col = j - blo;
            run[col + 1] = if a[i] == b[j] { prev[col] + 1 } else { 0 };
            let k = run[col + 1];
            if k > best_len {
                best_i = i + 1 - k;
                best_j = j + 1 - k;
                best_len = k;
            }
        }
        std::mem::swap(&mut prev, &mut run);
    }

    (best_i, best_j, best_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_identical_and_disjoint() {
        assert!(approx(ratio("e. coli", "e. coli"), 1.0));
        assert!(approx(ratio("", ""), 1.0));
        assert!(approx(ratio("abc", ""), 0.0));
        assert!(approx(ratio("abc", "xyz"), 0.0));
    }

    #[test]
    fn test_known_ratios() {
        assert!(approx(ratio("kitten", "sitting"), 8.0 / 13.0));
        assert!(approx(ratio("vibrio cholera", "vibrio cholerae"), 28.0 / 29.0));
        assert!(approx(ratio("staph aurius", "staph aureus"), 22.0 / 24.0));
        assert!(approx(ratio("lactobacilus", "bacillus"), 0.7));
    }

    #[test]
    fn test_symmetric_on_simple_inputs() {
        assert!(approx(ratio("abcd", "bcde"), ratio("bcde", "abcd")));
    }

    #[test]
    fn test_argument_order_matters() {
        assert!(approx(ratio("bacillus", "bacill. subtilis"), 16.0 / 24.0));
        assert!(approx(ratio("bacill. subtilis", "bacillus"), 14.0 / 24.0));
    }

    #[test]
    fn test_unicode_counts_chars() {
        assert!(approx(ratio("é", "é"), 1.0));
        assert!(approx(ratio("é", "e"), 0.0));
    }

    #[test]
    fn test_longest_match_prefers_earliest() {
        let a: Vec<char> = "abab".chars().collect();
        let b: Vec<char> = "ab".chars().collect();
        assert_eq!(longest_match(&a, &b, 0, a.len(), 0, b.len()), (0, 0, 2));
    }
}
