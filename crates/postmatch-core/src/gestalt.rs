//! Ratcliff/Obershelp "gestalt" similarity.
//!
//! The ratio is `2 * M / T`, where `M` counts characters in the matching
//! blocks found by recursively taking the longest common block and `T` is
//! the combined length of both strings. Characters are Unicode scalar values.

use std::collections::HashMap;

/// Gestalt ratio in `[0, 1]`. Two empty strings compare as `1.0`.
///
/// The longest-block search prefers the earliest block in `a`, then the
/// earliest in `b`, so the ratio is not symmetric for every input.
pub fn gestalt_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

/// Total size of the matching blocks between `a` and `b`.
pub fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, ch) in b.iter().enumerate() {
        positions.entry(*ch).or_default().push(j);
    }

    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
        let block = longest_block(a, &positions, a_lo..a_hi, b_lo..b_hi);
        if block.size == 0 {
            continue;
        }
        matched += block.size;
        if a_lo < block.a_start && b_lo < block.b_start {
            pending.push((a_lo, block.a_start, b_lo, block.b_start));
        }
        let a_end = block.a_start + block.size;
        let b_end = block.b_start + block.size;
        if a_end < a_hi && b_end < b_hi {
            pending.push((a_end, a_hi, b_end, b_hi));
        }
    }
    matched
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    a_start: usize,
    b_start: usize,
    size: usize,
}

fn longest_block(
    a: &[char],
    positions: &HashMap<char, Vec<usize>>,
    a_range: std::ops::Range<usize>,
    b_range: std::ops::Range<usize>,
) -> Block {
    let mut best = Block {
        a_start: a_range.start,
        b_start: b_range.start,
        size: 0,
    };
    // Length of the run ending at (i - 1, j), keyed by j.
    let mut run_ending: HashMap<usize, usize> = HashMap::new();

    for i in a_range {
        let mut next_runs = HashMap::new();
        if let Some(js) = positions.get(&a[i]) {
            for &j in js {
                if j < b_range.start {
                    continue;
                }
                if j >= b_range.end {
                    break;
                }
                let run = j
                    .checked_sub(1)
                    .and_then(|prev| run_ending.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next_runs.insert(j, run);
                if run > best.size {
                    best = Block {
                        a_start: i + 1 - run,
                        b_start: j + 1 - run,
                        size: run,
                    };
                }
            }
        }
        run_ending = next_runs;
    }
    best
}
