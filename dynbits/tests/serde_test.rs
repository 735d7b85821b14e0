#[cfg(feature = "serde")]
mod serde_tests {
    use dynbits::DynamicBitset;
    use proptest::prelude::*;
    use rand::prelude::*;

    pub fn arbitrary_bitset(max_length: usize) -> impl Strategy<Value = DynamicBitset<u32>> {
        (0..max_length).prop_flat_map(|length| {
            any::<u64>().prop_map(move |seed| {
                let mut random_number_generator = StdRng::seed_from_u64(seed);
                DynamicBitset::random(length, &mut random_number_generator)
            })
        })
    }

    proptest! {
        #[test]
        fn bitset_json_round_trip(bitset in arbitrary_bitset(300)) {
            let json = serde_json::to_string(&bitset).unwrap();
            let restored: DynamicBitset<u32> = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, bitset);
        }
    }

    #[test]
    fn bitset_serializes_as_text() {
        let bitset: DynamicBitset<u8> = "0011010".parse().unwrap();
        assert_eq!(serde_json::to_string(&bitset).unwrap(), "\"0011010\"");
        let empty = DynamicBitset::<u8>::new();
        assert_eq!(serde_json::to_string(&empty).unwrap(), "\"\"");
    }

    #[test]
    fn bitset_rejects_invalid_text() {
        let error = serde_json::from_str::<DynamicBitset>("\"01a\"").unwrap_err();
        assert!(error.to_string().contains("failed to parse DynamicBitset"));
        assert!(serde_json::from_str::<DynamicBitset>("42").is_err());
    }

    #[test]
    fn bitsets_inside_vec() {
        let bitsets = vec![DynamicBitset::<u64>::ones(3), DynamicBitset::zeros(2)];
        let json = serde_json::to_string(&bitsets).unwrap();
        assert_eq!(json, "[\"111\",\"00\"]");
        let restored: Vec<DynamicBitset<u64>> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, bitsets);
    }
}
