//! KO analysis over a 16-roll distribution.
//!
//! Multi-hit probabilities are exact: the convolution counts roll
//! combinations in `u128` (16^16 fits) and only divides at the end. Sums at
//! or above the target HP are collapsed into one bucket, so the work is
//! bounded by `hits * hp * 16`. Hit counts are capped at
//! [`MAX_KO_HIT_BOUND`], the largest count whose combinations fit in `u128`.

use std::collections::BTreeMap;

use super::formula::ROLL_COUNT;
use crate::config::MAX_KO_HIT_BOUND;
use super::DamageDistribution;

/// KO figures for one distribution against one HP value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KoSummary {
    pub ko_probability: f64,
    pub guaranteed_ko_hits: Option<u8>,
    pub probable_ko: BTreeMap<u8, f64>,
}

/// Smallest `n` with `n * min >= hp`, if it is within `bound`.
pub fn guaranteed_ko_hits(rolls: &DamageDistribution, hp: u16, bound: u8) -> Option<u8> {
    let min = rolls.min() as u32;
    if min == 0 {
        return None;
    }
    let hits = (hp as u32).div_ceil(min);
    (hits <= bound as u32).then_some(hits as u8)
}

/// Fraction of the 16 rolls that KO in one hit.
pub fn ko_probability(rolls: &DamageDistribution, hp: u16) -> f64 {
    let hits = rolls.iter().filter(|&&d| d >= hp).count();
    hits as f64 / ROLL_COUNT as f64
}

/// Probability that `hits` independent rolls sum to at least `hp`.
///
/// `hits` above [`MAX_KO_HIT_BOUND`] is treated as the cap.
pub fn ko_chance(rolls: &DamageDistribution, hp: u16, hits: u8) -> f64 {
    if hp == 0 {
        return 1.0;
    }
    if hits == 0 {
        return 0.0;
    }
    let hits = hits.min(MAX_KO_HIT_BOUND);

    let target = hp as usize;
    // counts[s] = combinations whose running total is s; counts[target] holds every total >= hp.
    let mut counts = vec![0u128; target + 1];
    counts[0] = 1;
    for _ in 0..hits {
        let mut next = vec![0u128; target + 1];
        for (sum, &count) in counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            if sum == target {
                next[target] += count * ROLL_COUNT as u128;
                continue;
            }
            for &damage in rolls.iter() {
                next[(sum + damage as usize).min(target)] += count;
            }
        }
        counts = next;
    }

    let total = (ROLL_COUNT as u128).pow(hits as u32);
    counts[target] as f64 / total as f64
}

/// KO chance for every hit count in `1..=bound`, with `bound` capped at
/// [`MAX_KO_HIT_BOUND`].
pub fn ko_table(rolls: &DamageDistribution, hp: u16, bound: u8) -> BTreeMap<u8, f64> {
    (1..=bound.min(MAX_KO_HIT_BOUND)).map(|n| (n, ko_chance(rolls, hp, n))).collect()
}

/// Guaranteed hits, one-hit probability and the probable-KO table.
///
/// The table covers hit counts below the guaranteed count, or every count up
/// to `bound` when nothing is guaranteed.
pub fn analyze(rolls: &DamageDistribution, hp: u16, bound: u8) -> KoSummary {
    let guaranteed = guaranteed_ko_hits(rolls, hp, bound);
    let last = guaranteed.map_or(bound, |n| n.saturating_sub(1));
    KoSummary {
        ko_probability: ko_probability(rolls, hp),
        guaranteed_ko_hits: guaranteed,
        probable_ko: ko_table(rolls, hp, last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn spread(rolls: [u16; ROLL_COUNT]) -> DamageDistribution {
        DamageDistribution::new(rolls)
    }

    fn linear(start: u16) -> DamageDistribution {
        spread(std::array::from_fn(|i| start + i as u16))
    }

    #[test]
    fn test_guaranteed_matches_brute_force() {
        for start in [1u16, 7, 40, 85] {
            let rolls = linear(start);
            for hp in 1..=400u16 {
                let expected = (1..=4u8).find(|&n| n as u32 * rolls.min() as u32 >= hp as u32);
                assert_eq!(guaranteed_ko_hits(&rolls, hp, 4), expected, "start {start} hp {hp}");
            }
        }
    }

    #[test]
    fn test_zero_damage_never_kos() {
        let rolls = spread([0; ROLL_COUNT]);
        let summary = analyze(&rolls, 100, 4);
        assert_eq!(summary.guaranteed_ko_hits, None);
        assert_eq!(summary.ko_probability, 0.0);
        assert_eq!(summary.probable_ko.len(), 4);
        assert!(summary.probable_ko.values().all(|&p| p == 0.0));
    }

    #[test]
    fn test_one_hit_fraction() {
        // 85..=100: rolls >= 95 are 95..=100, six of them.
        let rolls = linear(85);
        assert_eq!(ko_probability(&rolls, 95), 6.0 / 16.0);
        assert_eq!(ko_chance(&rolls, 95, 1), 6.0 / 16.0);
        assert_eq!(ko_probability(&rolls, 101), 0.0);
    }

    #[test]
    fn test_two_hit_convolution_by_hand() {
        // Rolls 10..=25. Pairs summing to >= 48: a + b >= 48 with a, b in 10..=25.
        // For a = 23: b = 25 (1). a = 24: b >= 24 (2). a = 25: b >= 23 (3). Total 6.
        let rolls = linear(10);
        assert_eq!(ko_chance(&rolls, 48, 2), 6.0 / 256.0);

        // Every pair reaches 20.
        assert_eq!(ko_chance(&rolls, 20, 2), 1.0);
    }

    #[test]
    fn test_convolution_matches_enumeration() {
        let rolls = spread([3, 3, 4, 4, 5, 5, 5, 6, 6, 7, 7, 7, 8, 8, 9, 10]);
        for hp in [10u16, 14, 17, 20] {
            let mut ko = 0u32;
            for a in rolls.iter() {
                for b in rolls.iter() {
                    if a + b >= hp {
                        ko += 1;
                    }
                }
            }
            assert_eq!(ko_chance(&rolls, hp, 2), ko as f64 / 256.0, "hp {hp}");
        }
    }

    #[test]
    fn test_probable_ko_stops_before_guaranteed() {
        let rolls = linear(40);
        // min 40: 100 HP is a guaranteed 3HKO
        let summary = analyze(&rolls, 100, 4);
        assert_eq!(summary.guaranteed_ko_hits, Some(3));
        assert_eq!(summary.probable_ko.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(summary.probable_ko[&1], 0.0);
        // two hits: a + b >= 100 with a, b in 40..=55
        let expected = {
            let mut ko = 0u32;
            for a in 40..=55u32 {
                for b in 40..=55u32 {
                    if a + b >= 100 {
                        ko += 1;
                    }
                }
            }
            ko as f64 / 256.0
        };
        assert_eq!(summary.probable_ko[&2], expected);
    }

    #[test]
    fn test_bound_caps_guaranteed() {
        let rolls = linear(10);
        assert_eq!(guaranteed_ko_hits(&rolls, 100, 4), None);
        assert_eq!(guaranteed_ko_hits(&rolls, 100, 10), Some(10));
        assert_eq!(analyze(&rolls, 100, 4).probable_ko.len(), 4);
    }

    #[test]
    fn test_hit_counts_above_cap() {
        let rolls = spread([1; ROLL_COUNT]);
        assert_eq!(ko_chance(&rolls, 10, 40), 1.0);
        // Capped at 16 hits of 1 damage.
        assert_eq!(ko_chance(&rolls, 17, 40), 0.0);
        assert_eq!(ko_table(&rolls, 17, 40).len(), MAX_KO_HIT_BOUND as usize);

        let summary = analyze(&rolls, 10, 40);
        assert_eq!(summary.guaranteed_ko_hits, Some(10));
        assert_eq!(summary.probable_ko.len(), 9);
        assert_eq!(analyze(&rolls, 200, 255).probable_ko.len(), MAX_KO_HIT_BOUND as usize);
    }

    #[test]
    fn test_ko_chance_is_monotone_in_hits() {
        let rolls = linear(30);
        let table = ko_table(&rolls, 150, 6);
        for pair in table.values().collect::<Vec<_>>().windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert_eq!(table[&6], 1.0);
    }
}
