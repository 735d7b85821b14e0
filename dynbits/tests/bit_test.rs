use dynbits::{BitwisePairMut, DynamicBitset};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Walks a single set bit through every `Bitwise*` method.
pub fn test_one_bit_index<T: BitwisePairMut + Clone>(mut bits: T, index: usize) {
    bits.clear_bits();
    assert!(bits.is_zero());
    bits.assign_index(index, true);
    assert!(bits.index(index));
    assert!(bits.support().any(|elt| elt == index));
    assert_eq!(bits.support().count(), 1);
    assert_eq!(bits.weight(), 1);
    assert!(bits.parity());
    assert!(bits.is_unit(index));
    assert_eq!(bits.min_support(), Some(index));
    assert_eq!(bits.max_support(), Some(index));
    bits.negate_index(index);
    assert!(!bits.index(index));
    assert_eq!(bits.support().count(), 0);
    assert_eq!(bits.weight(), 0);
    assert!(!bits.parity());
    assert_eq!(bits.min_support(), None);

    let mut other_bits = bits.clone();
    other_bits.clear_bits();
    assert_eq!(other_bits.weight(), 0);
    bits.negate_index(index);
    assert!(other_bits.is_zero());
    other_bits.bitxor_assign(&bits);
    assert_eq!(other_bits.support().count(), 1);
    assert_eq!(other_bits.weight(), 1);
    assert!(other_bits.parity());
    assert_eq!(other_bits.and_weight(&bits), 1);
    assert!(other_bits.dot(&bits));

    other_bits.negate_index(index + 1);
    assert_eq!(other_bits.or_weight(&bits), 2);
    assert_eq!(other_bits.xor_weight(&bits), 1);
    other_bits.bitclear_assign(&bits);
    assert_eq!(other_bits.support().collect::<Vec<_>>(), vec![index + 1]);

    bits.clear_bits();
    other_bits.bitand_assign(&bits);
    assert!(other_bits.is_zero());
    other_bits.bitor_assign(&bits);
    assert!(other_bits.is_zero());
    other_bits.negate_index(index);
    bits.assign(&other_bits);
    assert_eq!(bits.weight(), 1);
}

pub fn test_random_assignment<T: BitwisePairMut + Clone>(mut bits: T, bit_count: usize) {
    let mut random_number_generator = StdRng::seed_from_u64(7);
    bits.assign_random(bit_count, &mut random_number_generator);
    assert!(bits.support().all(|index| index < bit_count));
}

#[test]
fn bit_test() {
    let index = 7;
    test_one_bit_index(0u16, index);
    test_one_bit_index(0u32, index);
    test_one_bit_index(0u64, index);
    test_one_bit_index(0u128, index);
    test_one_bit_index(DynamicBitset::<u8>::zeros(10), index);
    test_one_bit_index(DynamicBitset::<u64>::zeros(10), index);
    test_one_bit_index(DynamicBitset::<u8>::zeros(200), 150);
    test_one_bit_index(DynamicBitset::<u32>::zeros(200), 63);
}

#[test]
fn random_assignment_stays_in_range() {
    test_random_assignment(0u8, 5);
    test_random_assignment(0u64, 33);
    test_random_assignment(0u128, 100);
    test_random_assignment(DynamicBitset::<u16>::zeros(70), 40);
}

#[test]
fn word_support_is_ascending() {
    use dynbits::Bitwise;
    let word = 0b1001_0110u8;
    assert_eq!(word.support().collect::<Vec<_>>(), vec![1, 2, 4, 7]);
    assert_eq!(word.weight(), 4);
    assert_eq!(word.max_support(), Some(7));
}
