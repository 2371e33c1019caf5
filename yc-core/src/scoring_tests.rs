#[cfg(test)]
mod tests {
    use crate::scoring::score_for;
    use crate::{evaluate, Category, Hand};

    fn hand(d: [u8; 5]) -> Hand {
        Hand::from_array(d).unwrap()
    }

    fn all_hands() -> impl Iterator<Item = [u8; 5]> {
        (0..7776u32).map(|mut i| {
            let mut d = [0u8; 5];
            for x in &mut d {
                *x = (i % 6) as u8 + 1;
                i /= 6;
            }
            d
        })
    }

    #[test]
    fn large_straight_low() {
        let s = evaluate(&hand([1, 2, 3, 4, 5]));
        assert_eq!(s.get(Category::SmallStraight), 15);
        assert_eq!(s.get(Category::LargeStraight), 30);
        assert_eq!(s.get(Category::FullHouse), 0);
        assert_eq!(s.get(Category::FourOfAKind), 0);
        assert_eq!(s.get(Category::Yacht), 0);
        assert_eq!(s.get(Category::Choice), 15);
    }

    #[test]
    fn five_of_a_kind_scores_yacht_four_kind_and_full_house() {
        let s = evaluate(&hand([5, 5, 5, 5, 5]));
        assert_eq!(s.get(Category::Yacht), 50);
        // Four-of-a-kind and full house both score the dice total.
        assert_eq!(s.get(Category::FourOfAKind), 25);
        assert_eq!(s.get(Category::FullHouse), 25);
        assert_eq!(s.get(Category::Fives), 25);
        assert_eq!(s.get(Category::Sixes), 0);
        assert_eq!(s.get(Category::Choice), 25);
    }

    #[test]
    fn full_house_scores_total() {
        let s = evaluate(&hand([2, 2, 3, 3, 3]));
        assert_eq!(s.get(Category::FullHouse), 13);
        assert_eq!(s.get(Category::FourOfAKind), 0);
        assert_eq!(s.get(Category::SmallStraight), 0);
        assert_eq!(s.get(Category::LargeStraight), 0);
        assert_eq!(s.get(Category::Twos), 4);
        assert_eq!(s.get(Category::Threes), 9);
    }

    #[test]
    fn two_pairs_are_neither_straight_nor_full_house() {
        let s = evaluate(&hand([1, 1, 2, 2, 3]));
        assert_eq!(s.get(Category::SmallStraight), 0);
        assert_eq!(s.get(Category::FullHouse), 0);
    }

    #[test]
    fn straights_ignore_duplicates_and_order() {
        let s = evaluate(&hand([4, 3, 3, 6, 5]));
        assert_eq!(s.get(Category::SmallStraight), 15);
        assert_eq!(s.get(Category::LargeStraight), 0);

        let s = evaluate(&hand([6, 2, 5, 3, 4]));
        assert_eq!(s.get(Category::SmallStraight), 15);
        assert_eq!(s.get(Category::LargeStraight), 30);

        // 1-2-3 + 5-6 has no four-long run.
        let s = evaluate(&hand([1, 2, 3, 5, 6]));
        assert_eq!(s.get(Category::SmallStraight), 0);
    }

    #[test]
    fn four_of_a_kind_with_kicker() {
        let s = evaluate(&hand([6, 6, 6, 6, 2]));
        assert_eq!(s.get(Category::FourOfAKind), 26);
        assert_eq!(s.get(Category::Sixes), 24);
        assert_eq!(s.get(Category::FullHouse), 0);
        assert_eq!(s.get(Category::Yacht), 0);
    }

    #[test]
    fn score_for_matches_evaluate() {
        let h = hand([3, 3, 3, 4, 4]);
        for (cat, v) in evaluate(&h).iter() {
            assert_eq!(score_for(&h, cat), v, "{}", cat);
        }
    }

    #[test]
    fn exhaustive_choice_is_sum_and_scores_non_negative() {
        for d in all_hands() {
            let h = hand(d);
            let s = evaluate(&h);
            let sum: u32 = d.iter().map(|&x| x as u32).sum();
            assert_eq!(s.get(Category::Choice), sum, "dice {:?}", d);
            for face in 1..=6u8 {
                let cat = Category::ALL[(face - 1) as usize];
                let n = d.iter().filter(|&&x| x == face).count() as u32;
                assert_eq!(s.get(cat), n * face as u32, "dice {:?}", d);
            }
            // Large straight implies small straight; yacht implies four-kind and house.
            if s.get(Category::LargeStraight) > 0 {
                assert_eq!(s.get(Category::SmallStraight), 15, "dice {:?}", d);
            }
            if s.get(Category::Yacht) > 0 {
                assert_eq!(s.get(Category::FourOfAKind), sum);
                assert_eq!(s.get(Category::FullHouse), sum);
            }
        }
    }

    #[test]
    fn exhaustive_evaluate_is_deterministic_and_order_free() {
        for d in all_hands() {
            let h = hand(d);
            let a = evaluate(&h);
            let b = evaluate(&h);
            assert_eq!(a, b);

            let mut rev = d;
            rev.reverse();
            assert_eq!(a, evaluate(&hand(rev)), "dice {:?}", d);
        }
    }
}
