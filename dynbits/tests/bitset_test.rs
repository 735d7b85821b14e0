use dynbits::{Block, DynamicBitset};
use proptest::prelude::*;

proptest! {
    #[test]
    fn collect_from_bools(bits in prop::collection::vec(any::<bool>(), 0..500)) {
        let bitset: DynamicBitset<u8> = bits.iter().copied().collect();
        assert_eq!(bitset.len(), bits.len());
        assert_eq!(bitset.num_blocks(), bits.len().div_ceil(8));
        let actual: Vec<bool> = bitset.iter().collect();
        assert_eq!(actual, bits);
        assert_unused_bits_zero(&bitset);
    }

    #[test]
    fn count(bits in prop::collection::vec(any::<bool>(), 0..500)) {
        let bitset: DynamicBitset<u32> = bits.iter().copied().collect();
        let expected = (0..bitset.len()).filter(|&pos| bitset.test(pos)).count();
        assert_eq!(bitset.count(), expected);
        assert_eq!(bitset.count(), bits.iter().filter(|bit| **bit).count());
    }

    #[test]
    fn set_and_test(bits in prop::collection::vec(any::<bool>(), 1..300)) {
        let mut bitset = DynamicBitset::<u16>::zeros(bits.len());
        for (pos, bit) in bits.iter().enumerate() {
            bitset.set(pos, *bit);
        }
        for (pos, bit) in bits.iter().enumerate() {
            assert_eq!(bitset.test(pos), *bit);
            assert_eq!(bitset[pos], *bit);
            assert_eq!(bitset.get(pos), Some(*bit));
        }
        assert_eq!(bitset.get(bits.len()), None);
    }

    #[test]
    fn flip_and_reset(bits in arbitrary_bitset(300), seed in any::<usize>()) {
        prop_assume!(!bits.is_empty());
        let pos = seed % bits.len();
        let mut flipped = bits.clone();
        flipped.flip(pos);
        assert_eq!(flipped.test(pos), !bits.test(pos));
        assert_eq!(flipped.count().abs_diff(bits.count()), 1);
        flipped.reset(pos);
        assert!(!flipped.test(pos));
        let mut proxy_flipped = bits.clone();
        proxy_flipped.bit_mut(pos).flip();
        assert_eq!(proxy_flipped.test(pos), !bits.test(pos));
    }

    #[test]
    fn range_set_matches_single_bits((bits, pos, len) in bitset_with_range(400), value in any::<bool>()) {
        let mut ranged = bits.clone();
        ranged.set_range(pos, len, value);
        let mut single = bits.clone();
        for offset in 0..len {
            single.set(pos + offset, value);
        }
        assert_eq!(ranged, single);
        assert_unused_bits_zero(&ranged);
    }

    #[test]
    fn range_flip_matches_single_bits((bits, pos, len) in bitset_with_range(400)) {
        let mut ranged = bits.clone();
        ranged.flip_range(pos, len);
        let mut single = bits.clone();
        for offset in 0..len {
            single.flip(pos + offset);
        }
        assert_eq!(ranged, single);
        ranged.flip_range(pos, len);
        assert_eq!(ranged, bits);
    }

    #[test]
    fn range_reset_matches_single_bits((bits, pos, len) in bitset_with_range(400)) {
        let mut ranged = bits.clone();
        ranged.reset_range(pos, len);
        for offset in 0..bits.len() {
            let inside = offset >= pos && offset < pos + len;
            assert_eq!(ranged.test(offset), !inside && bits.test(offset));
        }
    }

    #[test]
    fn whole_container_operations(bits in arbitrary_bitset(300)) {
        let mut all = bits.clone();
        all.set_all();
        assert!(all.all());
        assert_eq!(all.count(), bits.len());
        assert_unused_bits_zero(&all);

        let mut none = bits.clone();
        none.reset_all();
        assert!(none.none());
        assert!(!none.any() || bits.is_empty());

        let mut flipped = bits.clone();
        flipped.flip_all();
        assert_eq!(flipped.count(), bits.len() - bits.count());
        assert_unused_bits_zero(&flipped);
        assert_eq!(!&flipped, bits);
    }

    #[test]
    fn boolean_identities((left, right) in equal_length_bitsets(300)) {
        assert_eq!(&(&left & &right) | &(&left & &!&right), left);
        assert!((&left ^ &left).none());
        assert!((&left - &left).none());
        assert_eq!(&left - &right, &left & &!&right);
        assert_eq!((&left | &right).count() + (&left & &right).count(), left.count() + right.count());

        let mut assigned = left.clone();
        assigned ^= &right;
        assert_eq!(assigned, &left ^ &right);
        assigned |= &right;
        assert_eq!(assigned, &left | &right);
        assigned &= &left;
        assert_eq!(assigned, left);
        assigned -= &right;
        assert_eq!(assigned, &left - &right);
    }

    #[test]
    fn subset_relations((left, right) in equal_length_bitsets(300)) {
        let expected = (0..left.len()).all(|pos| !left.test(pos) || right.test(pos));
        assert_eq!(left.is_subset_of(&right), expected);
        assert_eq!(left.is_proper_subset_of(&right), expected && left != right);

        let intersection = &left & &right;
        assert!(intersection.is_subset_of(&left));
        assert!(intersection.is_subset_of(&right));
        assert!(!left.is_proper_subset_of(&left));
        assert_eq!(left.intersects(&right), intersection.any());
    }

    #[test]
    fn resize_keeps_prefix(bits in arbitrary_bitset(300), new_len in 0..400usize, value in any::<bool>()) {
        let mut resized = bits.clone();
        resized.resize(new_len, value);
        assert_eq!(resized.len(), new_len);
        assert_eq!(resized.num_blocks(), new_len.div_ceil(8));
        for pos in 0..new_len {
            let expected = if pos < bits.len() { bits.test(pos) } else { value };
            assert_eq!(resized.test(pos), expected);
        }
        assert_unused_bits_zero(&resized);
    }

    #[test]
    fn push_and_pop(bits in prop::collection::vec(any::<bool>(), 0..200)) {
        let mut bitset = DynamicBitset::<u8>::new();
        for bit in &bits {
            bitset.push(*bit);
            assert_unused_bits_zero(&bitset);
        }
        assert_eq!(bitset.iter().collect::<Vec<_>>(), bits);
        for bit in bits.iter().rev() {
            assert_eq!(bitset.pop(), Some(*bit));
            assert_unused_bits_zero(&bitset);
        }
        assert_eq!(bitset.pop(), None);
        assert_eq!(bitset.num_blocks(), 0);
    }

    #[test]
    fn append_word(bits in arbitrary_bitset(100), word in any::<u8>()) {
        let mut appended = bits.clone();
        appended.append(word);
        assert_eq!(appended.len(), bits.len() + 8);
        for pos in 0..bits.len() {
            assert_eq!(appended.test(pos), bits.test(pos));
        }
        for bit in 0..8 {
            assert_eq!(appended.test(bits.len() + bit), word & (1 << bit) != 0);
        }
        assert_unused_bits_zero(&appended);
    }

    #[test]
    fn iter_ones_and_find(bits in arbitrary_bitset(300)) {
        let expected: Vec<usize> = (0..bits.len()).filter(|&pos| bits.test(pos)).collect();
        assert_eq!(bits.iter_ones().collect::<Vec<_>>(), expected);
        assert_eq!(bits.first_one(), expected.first().copied());
        assert_eq!(bits.last_one(), expected.last().copied());
        for window in expected.windows(2) {
            assert_eq!(bits.next_one(window[0]), Some(window[1]));
        }
        if let Some(&last) = expected.last() {
            assert_eq!(bits.next_one(last), None);
        }
    }

    #[test]
    fn iterator_is_double_ended(bits in arbitrary_bitset(300), skip in 0..50usize) {
        let forward: Vec<bool> = bits.iter().collect();
        let mut backward: Vec<bool> = bits.iter().rev().collect();
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(bits.iter().len(), bits.len());
        assert_eq!(bits.iter().nth(skip), forward.get(skip).copied());
        assert_eq!(bits.iter().nth_back(skip), forward.iter().rev().nth(skip).copied());
    }

    #[test]
    fn iter_mut_writes_through(bits in arbitrary_bitset(300)) {
        let mut flipped = bits.clone();
        for mut bit in &mut flipped {
            bit.flip();
        }
        assert_eq!(flipped, !&bits);
        assert_unused_bits_zero(&flipped);
    }

    #[test]
    fn ordering_matches_text((left, right) in (arbitrary_bitset(100), arbitrary_bitset(100))) {
        assert_eq!(left.cmp(&right), left.to_string().cmp(&right.to_string()));
        assert_eq!(left == right, left.to_string() == right.to_string());
    }

    #[test]
    fn equal_length_ordering_is_numeric((left, right) in equal_length_bitsets(300), seed in any::<usize>()) {
        assert_eq!(left.cmp(&right), left.to_string().cmp(&right.to_string()));
        prop_assume!(!left.is_empty());
        let pos = seed % left.len();
        let mut nudged = left.clone();
        nudged.flip(pos);
        let expected = if left.test(pos) { std::cmp::Ordering::Less } else { std::cmp::Ordering::Greater };
        assert_eq!(nudged.cmp(&left), expected);
        assert_eq!(nudged.cmp(&left), nudged.to_string().cmp(&left.to_string()));
    }

    #[test]
    fn cast_to_wider_word(value in any::<u64>(), bit_count in 0..=64usize) {
        let bitset = DynamicBitset::<u8>::from_word(bit_count, value);
        let mask = if bit_count == 64 { u64::MAX } else { (1u64 << bit_count) - 1 };
        assert_eq!(bitset.cast_to::<u64>(), value & mask);
        assert_eq!(bitset.try_cast_to::<u64>(), Ok(value & mask));
    }

    #[test]
    fn random_bitsets_keep_invariant(bit_count in 0..300usize, seed in any::<u64>()) {
        use rand::SeedableRng;
        let mut random_number_generator = rand::rngs::StdRng::seed_from_u64(seed);
        let bitset = DynamicBitset::<u64>::random(bit_count, &mut random_number_generator);
        assert_eq!(bitset.len(), bit_count);
        assert_unused_bits_zero(&bitset);
    }
}

#[test]
fn string_scenario() {
    let bitset: DynamicBitset = "1010101010".parse().unwrap();
    assert_eq!(bitset.len(), 10);
    assert_eq!(bitset.count(), 5);
    assert!(!bitset.test(0));
    assert!(bitset.test(1));
    assert_eq!(bitset.to_string(), "1010101010");
}

#[test]
fn append_full_word_to_empty() {
    let mut bitset = DynamicBitset::<u64>::new();
    bitset.append(0xFFFF_FFFF_FFFF_FFFF);
    assert_eq!(bitset.len(), 64);
    assert!(bitset.all());
}

#[test]
fn append_across_partial_block() {
    let mut bitset = DynamicBitset::<u8>::ones(3);
    bitset.append(0b1000_0001);
    assert_eq!(bitset.len(), 11);
    assert_eq!(bitset.to_string(), "10000001111");
    assert_eq!(bitset.as_blocks(), &[0b0000_1111, 0b100]);
}

#[test]
fn range_set_scenario() {
    let mut bitset = DynamicBitset::<u64>::zeros(5);
    bitset.set_range(1, 3, true);
    assert_eq!(bitset.iter().collect::<Vec<_>>(), vec![false, true, true, true, false]);
    assert_eq!(bitset.to_string(), "01110");
}

#[test]
fn range_spanning_many_blocks() {
    let mut bitset = DynamicBitset::<u8>::zeros(40);
    bitset.set_range(3, 30, true);
    assert_eq!(bitset.as_blocks(), &[0b1111_1000, 0xFF, 0xFF, 0xFF, 0b0000_0001]);
    bitset.flip_range(8, 16);
    assert_eq!(bitset.as_blocks(), &[0b1111_1000, 0, 0, 0xFF, 1]);
    bitset.set_range(0, 0, true);
    assert_eq!(bitset.count(), 14);
}

#[test]
fn empty_bitset_predicates() {
    let bitset = DynamicBitset::<u32>::new();
    assert!(bitset.all());
    assert!(!bitset.any());
    assert!(bitset.none());
    assert_eq!(bitset.count(), 0);
    assert_eq!(bitset.first_one(), None);
    assert_eq!(bitset.to_string(), "");
}

#[test]
fn ones_constructor_and_set_bit_iterator() {
    let bitset = DynamicBitset::<u8>::ones(11);
    assert_eq!(bitset.iter_ones().collect::<Vec<_>>(), (0..11).collect::<Vec<_>>());
    let mut sparse = DynamicBitset::<u64>::zeros(200);
    sparse.set(0, true).set(64, true).set(199, true);
    assert_eq!(sparse.iter_ones().collect::<Vec<_>>(), vec![0, 64, 199]);
    assert_eq!(DynamicBitset::<u32>::new().iter_ones().next(), None);
}

#[test]
fn with_len_and_from_blocks() {
    let ones = DynamicBitset::<u16>::with_len(20, true);
    assert_eq!(ones.as_blocks(), &[0xFFFF, 0x000F]);
    assert_eq!(ones.count_extra_bits(), 4);
    assert_eq!(ones.unused_bit_count(), 12);
    assert!(ones.all());
    let from_blocks = DynamicBitset::<u16>::from_blocks([0x00F0, 0x8000]);
    assert_eq!(from_blocks.len(), 32);
    assert_eq!(from_blocks.iter_ones().collect::<Vec<_>>(), vec![4, 5, 6, 7, 31]);
    let mut extended = DynamicBitset::<u16>::zeros(4);
    extended.extend_blocks([0xFFFF, 0x0001]);
    assert_eq!(extended.len(), 36);
    assert_eq!(extended.count(), 17);
}

#[test]
fn take_leaves_source_empty() {
    let mut source = DynamicBitset::<u64>::ones(100);
    let moved = std::mem::take(&mut source);
    assert_eq!(moved.len(), 100);
    assert!(source.is_empty());
    assert_eq!(source.num_blocks(), 0);
}

#[test]
fn try_cast_to_rejects_high_bits() {
    let bitset: DynamicBitset<u8> = "100000000".parse().unwrap();
    assert_eq!(bitset.cast_to::<u8>(), 0);
    assert_eq!(
        bitset.try_cast_to::<u8>(),
        Err(dynbits::BitsetError::Overflow {
            highest_bit: 8,
            target_bits: 8
        })
    );
    assert_eq!(bitset.try_cast_to::<u16>(), Ok(256));
}

#[test]
fn ordering_of_unequal_lengths() {
    let parse = |text: &str| text.parse::<DynamicBitset<u8>>().unwrap();
    assert!(parse("1") > parse("01"));
    assert!(parse("01") < parse("010"));
    assert!(parse("") < parse("0"));
    assert!(parse("0011") < parse("0100"));
}

#[test]
fn proxy_operators() {
    let mut bitset = DynamicBitset::<u32>::zeros(40);
    {
        let mut bit = bitset.bit_mut(35);
        bit |= true;
        assert!(bit == true);
        bit &= false;
        assert!(bit == false);
        bit ^= true;
        assert!(bit.get());
        bit -= true;
        assert!(!bit.get());
        bit.set(true);
    }
    assert_eq!(bitset.iter_ones().collect::<Vec<_>>(), vec![35]);
    assert!(bitset.test_set(35, false));
    assert!(bitset.none());
}

#[test]
#[should_panic(expected = "out of range")]
fn test_out_of_range_panics() {
    let bitset = DynamicBitset::<u64>::zeros(10);
    let _ = bitset.test(10);
}

#[test]
#[should_panic(expected = "lengths differ")]
fn mismatched_lengths_panic() {
    let mut left = DynamicBitset::<u64>::zeros(10);
    left &= &DynamicBitset::zeros(11);
}

#[test]
#[should_panic(expected = "out of range")]
fn range_past_end_panics() {
    let mut bitset = DynamicBitset::<u64>::zeros(10);
    bitset.set_range(5, 6, true);
}

fn assert_unused_bits_zero<B: Block>(bitset: &DynamicBitset<B>) {
    let unused = bitset.unused_bit_count();
    assert!(unused < B::BITS || bitset.num_blocks() == 0);
    if let (Some(&last), true) = (bitset.as_blocks().last(), unused > 0) {
        assert_eq!(last & !(B::ONES >> unused), B::ZERO);
    }
}

fn arbitrary_bitset(max_length: usize) -> impl Strategy<Value = DynamicBitset<u8>> {
    prop::collection::vec(any::<bool>(), 0..max_length).prop_map(DynamicBitset::<u8>::from_iter)
}

fn equal_length_bitsets(max_length: usize) -> impl Strategy<Value = (DynamicBitset<u8>, DynamicBitset<u8>)> {
    (0..max_length).prop_flat_map(|length| {
        (
            prop::collection::vec(any::<bool>(), length).prop_map(DynamicBitset::<u8>::from_iter),
            prop::collection::vec(any::<bool>(), length).prop_map(DynamicBitset::<u8>::from_iter),
        )
    })
}

fn bitset_with_range(max_length: usize) -> impl Strategy<Value = (DynamicBitset<u8>, usize, usize)> {
    arbitrary_bitset(max_length).prop_flat_map(|bitset| {
        let length = bitset.len();
        (Just(bitset), 0..=length).prop_flat_map(move |(bitset, pos)| (Just(bitset), Just(pos), 0..=length - pos))
    })
}
