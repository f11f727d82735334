//! Repeated even/odd interleave of a string's characters.
//!
//! One shuffle step moves the characters at even positions, in order, to the
//! front and the characters at odd positions, in order, behind them. For a
//! string of length `len` the odd characters start at `len / 2 + len % 2`.
//!
//! The step is a bijection on sequences of a fixed length, so every string
//! eventually comes back to itself and the whole orbit is one simple cycle
//! through the start. Comparing each new state against the starting state
//! alone is therefore enough to find the period. That shortcut would not be
//! sound for a transformation that can merge two states.

use tracing::{debug, trace};

fn interleave_into(src: &[char], dst: &mut Vec<char>) {
    dst.clear();
    dst.extend(src.iter().step_by(2));
    dst.extend(src.iter().skip(1).step_by(2));
}

/// Shuffle `s` `iterations` times.
///
/// Once the sequence returns to `s` after `p` steps, only
/// `iterations % p` further steps are performed, so huge iteration counts
/// cost no more than one full period.
pub fn shuffle_char(s: &str, iterations: u64) -> String {
    let first: Vec<char> = s.chars().collect();
    let mut current = first.clone();
    let mut next = Vec::with_capacity(first.len());
    let mut step = 0u64;

    while step < iterations {
        interleave_into(&current, &mut next);
        std::mem::swap(&mut current, &mut next);
        step += 1;

        if current == first {
            let remaining = iterations % step;
            debug!(period = step, remaining, "shuffle returned to its starting state");
            for _ in 0..remaining {
                interleave_into(&current, &mut next);
                std::mem::swap(&mut current, &mut next);
            }
            return current.into_iter().collect();
        }
    }

    trace!(iterations, "shuffle finished before completing a period");
    current.into_iter().collect()
}

/// Number of shuffle steps after which `s` is restored.
pub fn cycle_length(s: &str) -> usize {
    let first: Vec<char> = s.chars().collect();
    let mut current = first.clone();
    let mut next = Vec::with_capacity(first.len());
    let mut steps = 0usize;
    loop {
        interleave_into(&current, &mut next);
        std::mem::swap(&mut current, &mut next);
        steps += 1;
        if current == first {
            return steps;
        }
    }
}
