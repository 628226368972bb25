use blockscramble::{
    build_permutation, invert_permutation, remap_blocks, scramble, scramble_with, unscramble,
    ConfigBuilder, Direction, Error, BLOCK_SIZE,
};
use ndarray::prelude::*;
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use rayon::prelude::*;

fn random_image(seed: u64, h: usize, w: usize, c: usize) -> Array3<u8> {
    let mut random = Xoshiro256StarStar::seed_from_u64(seed);
    Array3::from_shape_simple_fn((h, w, c), || random.gen())
}

proptest! {
    #[test]
    fn prop_forward_is_bijection(n in 0usize..300, seed in any::<i64>()) {
        let mut p = build_permutation(n, seed, false);
        p.sort_unstable();
        prop_assert_eq!(p, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn prop_reverse_is_inverse(n in 0usize..300, seed in any::<i64>()) {
        let fwd = build_permutation(n, seed, false);
        let inv = build_permutation(n, seed, true);
        prop_assert_eq!(inv.len(), n);
        for i in 0..n {
            prop_assert_eq!(fwd[inv[i]], i);
            prop_assert_eq!(inv[fwd[i]], i);
        }
        prop_assert_eq!(invert_permutation(&fwd), Some(inv));
    }

    #[test]
    fn prop_deterministic(n in 0usize..100, seed in any::<i64>(), reverse in any::<bool>()) {
        prop_assert_eq!(
            build_permutation(n, seed, reverse),
            build_permutation(n, seed, reverse)
        );
    }

    #[test]
    fn prop_roundtrip(
        rows in 0usize..5,
        cols in 0usize..5,
        channels in 1usize..5,
        image_seed in any::<u64>(),
        seed in any::<i64>(),
    ) {
        let arr = random_image(image_seed, rows * BLOCK_SIZE, cols * BLOCK_SIZE, channels);
        let s = scramble(arr.view(), seed).unwrap();
        prop_assert_eq!(s.dim(), arr.dim());
        prop_assert_eq!(unscramble(s.view(), seed).unwrap(), arr);
    }

    #[test]
    fn prop_roundtrip_block_size(
        block_size in 1usize..6,
        rows in 1usize..6,
        cols in 1usize..6,
        image_seed in any::<u64>(),
        seed in any::<i64>(),
    ) {
        let config = ConfigBuilder::new().block_size(block_size).build();
        let arr = random_image(image_seed, rows * block_size, cols * block_size, 3);
        let s = scramble_with(arr.view(), seed, Direction::Scramble, &config).unwrap();
        let u = scramble_with(s.view(), seed, Direction::Unscramble, &config).unwrap();
        prop_assert_eq!(u, arr);
    }

    #[test]
    fn prop_size_mismatch(n in 0usize..10, extra in 1usize..4, seed in any::<i64>()) {
        // 16x8 image has 2 blocks.
        let arr = random_image(0, 16, 8, 1);
        let len = if n == 2 { n + extra } else { n };
        let perm = build_permutation(len, seed, false);
        prop_assert_eq!(
            remap_blocks(arr.view(), &perm, BLOCK_SIZE),
            Err(Error::SizeMismatch { expected: 2, actual: len })
        );
    }
}

#[test]
fn test_seed_sensitivity() {
    let n = 64;
    let base = build_permutation(n, 0, false);
    let distinct = (1..200)
        .filter(|&seed| build_permutation(n, seed, false) != base)
        .count();
    assert_eq!(distinct, 199);
}

#[test]
fn test_scramble_moves_content() {
    let arr = random_image(1, 64, 64, 3);
    let s = scramble(arr.view(), 42).unwrap();
    assert_ne!(s, arr);
    assert_ne!(scramble(arr.view(), 43).unwrap(), s);
}

#[test]
fn test_source_untouched() {
    let arr = random_image(2, 32, 16, 4);
    let copy = arr.clone();
    let _ = scramble(arr.view(), 7).unwrap();
    assert_eq!(arr, copy);
}

#[test]
fn test_invalid_dimensions() {
    let arr = random_image(3, 12, 16, 3);
    assert_eq!(
        scramble(arr.view(), 1),
        Err(Error::InvalidDimensions {
            width: 16,
            height: 12,
            block_size: BLOCK_SIZE,
        })
    );

    let config = ConfigBuilder::new().block_size(0).build();
    assert_eq!(
        scramble_with(arr.view(), 1, Direction::Scramble, &config),
        Err(Error::ZeroBlockSize)
    );
}

#[test]
fn test_non_standard_layout() {
    // Transposed view is not in standard layout.
    let arr = random_image(4, 16, 24, 2);
    let t = arr.view().permuted_axes([1, 0, 2]);
    let s = scramble(t, 5).unwrap();
    assert_eq!(unscramble(s.view(), 5).unwrap(), t);
}

#[test]
fn test_parallel_independent_calls() {
    let images: Vec<_> = (0..16u64)
        .map(|i| random_image(i, 32, 40, 3))
        .collect();

    images.par_iter().enumerate().for_each(|(seed, arr)| {
        let seed = seed as i64 * 7919 - 50;
        let s = scramble(arr.view(), seed).unwrap();
        assert_eq!(&unscramble(s.view(), seed).unwrap(), arr);
    });
}
