//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the random shuffling used to draw the
//! permutations applied by the [Scrambler](crate::scramble::Scrambler).

use rand::Rng;

/// Shuffles the values yielded by the given iterator using the Fisher-Yates
/// algorithm and returns the result as a vector. Each of the `n!` possible
/// orderings of `n` values is equally likely, assuming the given random
/// number generator is unbiased. Sequences with less than two elements are
/// returned unchanged.
///
/// # Arguments
///
/// * `rng`: The random number generator that decides the ordering.
/// * `values`: An iterator yielding the values to shuffle.
pub fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    if len < 2 {
        return vec;
    }

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

/// Draws a permutation of the indices `0` to `len - 1` uniformly at random
/// from all `len!` possibilities, using the given random number generator.
/// The entry at index `i` of the result is the target index to which source
/// index `i` is mapped. For `len` of 0 or 1, the trivial permutation is
/// returned.
///
/// # Arguments
///
/// * `rng`: The random number generator that decides the permutation.
/// * `len`: The number of indices over which the permutation is formed.
pub fn random_permutation(rng: &mut impl Rng, len: usize) -> Vec<usize> {
    shuffle(rng, 0..len)
}
