//! Character-overlap similarity between two strings.
//!
//! The classic `similar_text` score: it is computed over bytes, by
//! repeatedly taking the leftmost longest common substring and recursing on
//! the text to its left and to its right.

/// Finds the leftmost longest common substring.
///
/// Returns `(pos_a, pos_b, len, improvements)` where `improvements` counts how
/// many times a strictly longer match replaced the previous best.
fn longest_common(a: &[u8], b: &[u8]) -> (usize, usize, usize, usize) {
    let (mut pos_a, mut pos_b, mut max, mut improvements) = (0, 0, 0, 0);

    for p in 0..a.len() {
        for q in 0..b.len() {
            let len = a[p..]
                .iter()
                .zip(&b[q..])
                .take_while(|(x, y)| x == y)
                .count();
            if len > max {
                max = len;
                improvements += 1;
                pos_a = p;
                pos_b = q;
            }
        }
    }

    (pos_a, pos_b, max, improvements)
}

fn similar_bytes(a: &[u8], b: &[u8]) -> usize {
    let (pos_a, pos_b, max, improvements) = longest_common(a, b);
    if max == 0 {
        return 0;
    }

    let mut sum = max;
    // A single improvement means nothing before the match can match either.
    if pos_a > 0 && pos_b > 0 && improvements > 1 {
        sum += similar_bytes(&a[..pos_a], &b[..pos_b]);
    }
    if pos_a + max < a.len() && pos_b + max < b.len() {
        sum += similar_bytes(&a[pos_a + max..], &b[pos_b + max..]);
    }
    sum
}

/// Number of matching bytes between `a` and `b`.
pub fn similar_chars(a: &str, b: &str) -> usize {
    similar_bytes(a.as_bytes(), b.as_bytes())
}

/// Similarity of `a` and `b` as a truncated percentage in `0..=100`.
///
/// Two empty strings score 0.
pub fn similarity_percent(a: &str, b: &str) -> u8 {
    let total = a.len() + b.len();
    if total == 0 {
        return 0;
    }
    let percent = similar_chars(a, b) * 200 / total;
    percent as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_one_char_differs() {
        assert_eq!(similar_chars("abcdef", "abcdeg"), 5);
        assert_eq!(similarity_percent("abcdef", "abcdeg"), 83);
    }

    #[test]
    fn test_similarity_disjoint() {
        assert_eq!(similarity_percent("abcdef", "zzzzzz"), 0);
    }

    #[test]
    fn test_similarity_identical() {
        assert_eq!(similarity_percent("Secret!9", "Secret!9"), 100);
    }

    #[test]
    fn test_similarity_empty_inputs() {
        assert_eq!(similarity_percent("", ""), 0);
        assert_eq!(similarity_percent("abc", ""), 0);
        assert_eq!(similarity_percent("", "abc"), 0);
    }

    #[test]
    fn test_similarity_recurses_both_sides() {
        // "llo W" first, then "H" on the left and "l" on the right.
        assert_eq!(similar_chars("World", "Word"), 4);
        assert_eq!(similar_chars("Hello World", "Hallo Welt"), 7);
    }

    #[test]
    fn test_similarity_known_values() {
        // "key", plus "n" from the left remainders "mon" / "nil".
        assert_eq!(similar_chars("monkey ", "nilkey"), 4);
        assert_eq!(similarity_percent("monkey ", "nilkey"), 61);
    }

    #[test]
    fn test_similarity_argument_order_matters() {
        assert_eq!(similar_chars("bafoobar", "barfoo"), 5);
        assert_eq!(similar_chars("barfoo", "bafoobar"), 3);
        assert_eq!(similarity_percent("bafoobar", "barfoo"), 71);
        assert_eq!(similarity_percent("barfoo", "bafoobar"), 42);
    }

    #[test]
    fn test_similarity_ties_pick_leftmost() {
        // "xy" and "ab" are both length 2; "xy" is found first and kept.
        assert_eq!(longest_common(b"xyab", b"abxy"), (0, 2, 2, 1));
        assert_eq!(similar_chars("xyab", "abxy"), 2);
        assert_eq!(longest_common(b"abc", b"abxabc"), (0, 3, 3, 2));
    }
}
