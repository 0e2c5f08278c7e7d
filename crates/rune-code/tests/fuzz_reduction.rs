use proptest::prelude::*;
use rune_code::{build_code_table, enumerate_patterns};

proptest! {
    #[test]
    fn rotations_stay_inside_their_class(bit_length in 1usize..=7, amount in 0usize..16) {
        let table = build_code_table(bit_length).unwrap();
        for row in table.rows() {
            let rotated = row.rotate_left(amount);
            prop_assert!(row.is_rotation_of(&rotated));
            let owners = table
                .rows()
                .iter()
                .filter(|other| other.is_rotation_of(&rotated))
                .count();
            prop_assert_eq!(owners, 1);
        }
    }

    #[test]
    fn class_sizes_sum_to_the_search_space(bit_length in 1usize..=7) {
        let table = build_code_table(bit_length).unwrap();
        let enumerated = enumerate_patterns(bit_length).unwrap();
        let covered: usize = table
            .rows()
            .iter()
            .map(|row| {
                enumerated
                    .iter()
                    .filter(|candidate| row.is_rotation_of(candidate))
                    .count()
            })
            .sum();
        prop_assert_eq!(covered, 1usize << bit_length);
    }

    #[test]
    fn enumeration_is_strictly_increasing(bit_length in 1usize..=8) {
        let enumerated = enumerate_patterns(bit_length).unwrap();
        for window in enumerated.windows(2) {
            prop_assert!(window[0].bits() < window[1].bits());
        }
    }
}
