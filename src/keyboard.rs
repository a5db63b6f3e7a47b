//! Keyboard topology and the derived table of sequential words.
//!
//! The grid has one row per key column of a US-QWERTY keyboard (10 rows) and
//! one column per keyboard row (digits, top, home, bottom). Four keys in a
//! straight line on either axis form a "sequential word".

use std::sync::LazyLock;

pub const GRID_ROWS: usize = 10;
pub const GRID_COLS: usize = 4;

/// Length of every sequential word.
pub const SEQUENCE_LEN: usize = 4;

pub const KEYBOARD_MAP: [[char; GRID_COLS]; GRID_ROWS] = [
    ['1', 'q', 'a', 'z'],
    ['2', 'w', 's', 'x'],
    ['3', 'e', 'd', 'c'],
    ['4', 'r', 'f', 'v'],
    ['5', 't', 'g', 'b'],
    ['6', 'y', 'h', 'n'],
    ['7', 'u', 'j', 'm'],
    ['8', 'i', 'k', ','],
    ['9', 'o', 'l', '.'],
    ['0', 'p', ';', '/'],
];

static SEQUENTIAL_WORDS: LazyLock<Vec<String>> = LazyLock::new(build_sequential_words);

fn push_with_reverse(words: &mut Vec<String>, word: String) {
    let reversed = word.chars().rev().collect();
    words.push(word);
    words.push(reversed);
}

fn build_sequential_words() -> Vec<String> {
    let mut words = Vec::new();

    // Vertical: a whole grid row
    for row in &KEYBOARD_MAP {
        push_with_reverse(&mut words, row.iter().collect());
    }

    // Horizontal: a window of rows within one grid column
    for col in 0..GRID_COLS {
        for start in 0..=GRID_ROWS - SEQUENCE_LEN {
            let word = KEYBOARD_MAP[start..start + SEQUENCE_LEN]
                .iter()
                .map(|row| row[col])
                .collect();
            push_with_reverse(&mut words, word);
        }
    }

    words
}

/// Returns every 4-character sequential word, lower-case.
///
/// The table is built on first use and shared for the life of the process.
pub fn sequential_words() -> &'static [String] {
    &SEQUENTIAL_WORDS
}

/// Returns the first sequential word contained in `lowered`, if any.
///
/// `lowered` must already be lower-case.
pub fn find_sequence(lowered: &str) -> Option<&'static str> {
    sequential_words()
        .iter()
        .find(|word| lowered.contains(word.as_str()))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn position(c: char) -> Option<(usize, usize)> {
        KEYBOARD_MAP.iter().enumerate().find_map(|(y, row)| {
            row.iter().position(|&k| k == c).map(|x| (x, y))
        })
    }

    fn are_neighbours(a: char, b: char) -> bool {
        match (position(a), position(b)) {
            (Some((ax, ay)), Some((bx, by))) => {
                (ay == by && ax.abs_diff(bx) == 1) || (ax == bx && ay.abs_diff(by) == 1)
            }
            _ => false,
        }
    }

    #[test]
    fn test_sequential_words_count_and_shape() {
        let words = sequential_words();
        // 10 rows * 2 directions + 4 columns * 7 windows * 2 directions
        assert_eq!(words.len(), 20 + 56);
        for word in words {
            assert_eq!(word.chars().count(), SEQUENCE_LEN);
            assert_eq!(word, &word.to_lowercase());
        }
        let unique: HashSet<&String> = words.iter().collect();
        assert_eq!(unique.len(), words.len());
    }

    #[test]
    fn test_known_sequences_present() {
        let words = sequential_words();
        for expected in ["qwer", "rewq", "1qaz", "zaq1", "asdf", "1234", "7890", "0p;/", ".lo9"] {
            assert!(
                words.iter().any(|w| w == expected),
                "missing sequential word {}",
                expected
            );
        }
        assert!(!words.iter().any(|w| w == "qwsx"));
    }

    #[test]
    fn test_every_word_is_a_chain_of_neighbours() {
        for word in sequential_words() {
            let chars: Vec<char> = word.chars().collect();
            assert!(
                chars.windows(2).all(|pair| are_neighbours(pair[0], pair[1])),
                "{} is not a neighbour chain",
                word
            );
        }
    }

    #[test]
    fn test_table_covers_every_straight_run() {
        let words: HashSet<&str> = sequential_words().iter().map(String::as_str).collect();
        let keys: Vec<char> = KEYBOARD_MAP.iter().flatten().copied().collect();

        for &a in &keys {
            for &b in keys.iter().filter(|&&b| are_neighbours(a, b)) {
                let (ax, ay) = position(a).unwrap();
                let (bx, by) = position(b).unwrap();
                let (dx, dy) = (bx as isize - ax as isize, by as isize - ay as isize);
                let run: Option<String> = (0..SEQUENCE_LEN as isize)
                    .map(|step| {
                        let x = ax as isize + dx * step;
                        let y = ay as isize + dy * step;
                        if (0..GRID_COLS as isize).contains(&x) && (0..GRID_ROWS as isize).contains(&y) {
                            Some(KEYBOARD_MAP[y as usize][x as usize])
                        } else {
                            None
                        }
                    })
                    .collect();
                if let Some(run) = run {
                    assert!(words.contains(run.as_str()), "straight run {} not in table", run);
                }
            }
        }
    }

    #[test]
    fn test_find_sequence() {
        assert_eq!(find_sequence("xxqwerty"), Some("qwer"));
        assert_eq!(find_sequence("ab1!ef"), None);
        assert_eq!(find_sequence("qwe"), None);
        assert_eq!(find_sequence(""), None);
    }
}
