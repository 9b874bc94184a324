use bitfield64::{BitField, WIDTH};
use proptest::prelude::*;

fn any_field() -> impl Strategy<Value = BitField> {
    any::<u64>().prop_map(BitField::from_word)
}

proptest! {
    #[test]
    fn set_then_test(field in any_field(), n in 0usize..WIDTH) {
        prop_assert!(field.set(n).test(n));
        prop_assert!(!field.unset(n).test(n));
    }

    #[test]
    fn set_and_unset_are_idempotent(field in any_field(), n in 0usize..WIDTH) {
        prop_assert_eq!(field.set(n).set(n), field.set(n));
        prop_assert_eq!(field.unset(n).unset(n), field.unset(n));
    }

    #[test]
    fn receiver_is_left_unchanged(word in any::<u64>(), n in 0usize..WIDTH) {
        let field = BitField::from_word(word);
        let _ = field.set(n);
        let _ = field.unset(n);
        prop_assert_eq!(field.word(), word);
    }

    #[test]
    fn count_equals_iter_len(field in any_field()) {
        prop_assert_eq!(field.count(), field.iter().count());
        prop_assert_eq!(field.count(), field.iter().len());
    }

    #[test]
    fn emptiness_queries_agree(field in any_field()) {
        let empty = field.is_empty();
        prop_assert_eq!(empty, field.count() == 0);
        prop_assert_eq!(empty, field.least().is_none());
        prop_assert_eq!(empty, field.most().is_none());
    }

    #[test]
    fn singular_iff_count_is_one(field in any_field()) {
        prop_assert_eq!(field.is_singular(), field.count() == 1);
    }

    #[test]
    fn iter_is_strictly_ascending_and_complete(field in any_field()) {
        let seen: Vec<usize> = field.iter().collect();
        prop_assert!(seen.windows(2).all(|pair| pair[0] < pair[1]));
        let expected: Vec<usize> = (0..WIDTH).filter(|&n| field.test(n)).collect();
        prop_assert_eq!(&seen, &expected);
        prop_assert_eq!(seen.first().copied(), field.least());
        prop_assert_eq!(seen.last().copied(), field.most());
    }

    #[test]
    fn rev_iter_is_descending(field in any_field()) {
        let mut forward: Vec<usize> = field.iter().collect();
        forward.reverse();
        let backward: Vec<usize> = field.iter().rev().collect();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn string_matches_iteration(field in any_field()) {
        let rendered = field.to_string();
        let split: Vec<usize> = if rendered.is_empty() {
            Vec::new()
        } else {
            rendered.split(' ').map(|token| token.parse().unwrap()).collect()
        };
        prop_assert_eq!(split, field.iter().collect::<Vec<_>>());
    }

    #[test]
    fn parse_inverts_display(field in any_field()) {
        prop_assert_eq!(field.to_string().parse::<BitField>(), Ok(field));
    }

    #[test]
    fn collect_rebuilds_the_field(field in any_field()) {
        prop_assert_eq!(field.iter().collect::<BitField>(), field);
    }

    #[test]
    fn of_ignores_out_of_range(positions in prop::collection::vec(-100isize..200, 0..80)) {
        let field = BitField::of(&positions);
        let expected: BitField = positions
            .iter()
            .filter_map(|&n| usize::try_from(n).ok())
            .filter(|&n| n < WIDTH)
            .collect();
        prop_assert_eq!(field, expected);
    }

    #[test]
    fn range_matches_stepping(low in -20isize..80, high in -20isize..80, step in 1usize..70) {
        let field = BitField::range(low, high, step);
        let from = low.max(0);
        let to = high.min(63);
        let expected: BitField = if from > to {
            BitField::EMPTY
        } else {
            (from as usize..=to as usize).step_by(step).collect()
        };
        prop_assert_eq!(field, expected);
    }

    #[test]
    fn unsetting_everything_empties_the_field(field in any_field()) {
        let cleared = field.iter().fold(field, BitField::unset);
        prop_assert!(cleared.is_empty());
        prop_assert_eq!(cleared.to_string(), "");
        prop_assert!(!cleared.is_singular());
        prop_assert_eq!(cleared.iter().next(), None);
    }
}
