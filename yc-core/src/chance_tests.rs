#[cfg(test)]
mod tests {
    use crate::chance::roll5_keyed;
    use crate::{EventKeyedRoller, Hand, HoldMask, RngRoller, RollKey, RollSource, ScriptedRoller};

    fn key(seed: u64, turn_idx: u8, roll_idx: u8) -> RollKey {
        RollKey {
            game_seed: seed,
            player: 0,
            turn_idx,
            roll_idx,
        }
    }

    #[test]
    fn keyed_roll_is_deterministic() {
        let k = key(123, 7, 1);
        assert_eq!(roll5_keyed(k), roll5_keyed(k));
        assert_eq!(EventKeyedRoller.roll5(k), roll5_keyed(k));
    }

    #[test]
    fn keyed_values_in_range() {
        for seed in 0..200u64 {
            for x in roll5_keyed(key(seed, 3, 2)) {
                assert!((1..=6).contains(&x), "die out of range: {}", x);
            }
        }
    }

    #[test]
    fn roll_idx_changes_stream() {
        let k0 = key(42, 3, 0);
        let k1 = RollKey { roll_idx: 1, ..k0 };
        assert_ne!(roll5_keyed(k0), roll5_keyed(k1));
    }

    #[test]
    fn player_changes_stream() {
        let k0 = key(42, 3, 0);
        let k1 = RollKey { player: 1, ..k0 };
        assert_ne!(roll5_keyed(k0), roll5_keyed(k1));
    }

    #[test]
    fn rng_roller_is_seeded() {
        let mut a = RngRoller::new(9);
        let mut b = RngRoller::new(9);
        for r in 0..20u8 {
            let x = a.roll5(key(0, r, 0));
            assert_eq!(x, b.roll5(key(0, r, 0)));
            assert!(x.iter().all(|d| (1..=6).contains(d)));
        }
    }

    #[test]
    fn scripted_roller_replays_in_order() {
        let mut s = ScriptedRoller::new([[1, 1, 1, 1, 1], [6, 5, 4, 3, 2]]);
        assert_eq!(s.remaining(), 2);
        assert_eq!(s.roll5(key(0, 0, 0)), [1, 1, 1, 1, 1]);
        assert_eq!(s.roll5(key(0, 0, 1)), [6, 5, 4, 3, 2]);
        assert_eq!(s.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "scripted rolls exhausted")]
    fn scripted_roller_panics_when_empty() {
        let mut s = ScriptedRoller::default();
        let _ = s.roll5(key(0, 0, 0));
    }

    #[test]
    fn held_positions_survive_reroll_from_any_source() {
        let prev = Hand::from_array([2, 2, 5, 6, 1]).unwrap();
        let hold = HoldMask::new(&[true, true, false, false, false]).unwrap();
        let mut src = EventKeyedRoller;
        for turn in 0..12u8 {
            let next = prev.reroll(&hold, src.roll5(key(5, turn, 1))).unwrap();
            assert_eq!(next.dice()[0], 2);
            assert_eq!(next.dice()[1], 2);
        }
    }
}
