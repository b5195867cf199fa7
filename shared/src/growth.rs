//! Synthetic plant growth series
//!
//! Generates illustrative height, leaf-count and health curves for the
//! growth tracker, plus the summary metrics shown above the chart.
//!
//! The curve shape is tied to the plant name: the sum of its character
//! codes offsets the seasonal growth wave, so the same plant always shows
//! the same rhythm. All other variation comes from one injected generator.

use crate::validation::{clamp_percent, round2};
use chrono::{Datelike, Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Default window shown by the growth tracker
pub const DEFAULT_GROWTH_DAYS: u32 = 30;

/// Longest window a growth series may span
pub const MAX_GROWTH_DAYS: u32 = 365;

/// Leaves gained per elapsed day before random variation
const LEAVES_PER_DAY: f64 = 0.15;

/// One day of a growth series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthSample {
    pub day_index: u32,
    pub date: NaiveDate,
    pub height_cm: f64,
    pub leaf_count: u32,
    pub health_score: f64,
}

/// Direction of growth over the last week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthTrend {
    Up,
    Down,
    Neutral,
}

/// Headline metrics for a growth series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthSummary {
    pub growth_percentage: i64,
    pub trend: GrowthTrend,
    pub latest_height_cm: f64,
    pub latest_leaf_count: u32,
    pub health_score: i64,
}

/// Sum of the UTF-16 code units of a plant name
pub fn name_seed(plant_name: &str) -> u64 {
    plant_name.encode_utf16().map(u64::from).sum()
}

/// Generate `days + 1` samples ending on `end_date`, oldest first
///
/// A window reaching before the earliest representable date starts on that
/// date instead, so the series always covers consecutive days.
pub fn generate_growth_series<R: Rng + ?Sized>(
    plant_name: &str,
    days: u32,
    end_date: NaiveDate,
    rng: &mut R,
) -> Vec<GrowthSample> {
    let seed = name_seed(plant_name) as f64;
    let base_height = rng.gen_range(5.0..15.0);
    let base_leaves = rng.gen_range(3.0..8.0);
    let height_rate = rng.gen_range(0.2..0.7);

    let start_date = end_date
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN);

    start_date
        .iter_days()
        .zip(0..=days)
        .map(|(date, day_index)| {
            let days_ago = days - day_index;
            let elapsed = f64::from(day_index);

            let growth_factor = 1.0 + ((f64::from(date.day()) + seed) / 10.0).sin() * 0.3;
            let random_factor = rng.gen_range(0.8..1.2);

            // Dips mid-window and recovers toward the ends
            let window_position = if days == 0 {
                0.0
            } else {
                f64::from(days_ago) / f64::from(days)
            };
            let health = 70.0 + 20.0 * (window_position * PI).sin() + rng.gen_range(0.0..10.0);

            let height = base_height + elapsed * height_rate * growth_factor * random_factor;
            let leaves = (base_leaves + elapsed * LEAVES_PER_DAY * random_factor).floor();

            GrowthSample {
                day_index,
                date,
                height_cm: round2(height.max(0.0)),
                leaf_count: leaves.max(0.0) as u32,
                health_score: round2(clamp_percent(health)),
            }
        })
        .collect()
}

/// Generate a reproducible series from a single seeded stream
///
/// Without an explicit seed the plant name seeds the stream, so a plant
/// always gets the same curve.
pub fn growth_series(
    plant_name: &str,
    days: u32,
    end_date: NaiveDate,
    seed: Option<u64>,
) -> Vec<GrowthSample> {
    let mut rng = StdRng::seed_from_u64(seed.unwrap_or_else(|| name_seed(plant_name)));
    generate_growth_series(plant_name, days, end_date, &mut rng)
}

/// Percent height change from the first to the last sample, rounded
pub fn growth_percentage(series: &[GrowthSample]) -> i64 {
    match (series.first(), series.last()) {
        (Some(first), Some(last)) if series.len() >= 2 && first.height_cm > 0.0 => {
            ((last.height_cm - first.height_cm) / first.height_cm * 100.0).round() as i64
        }
        _ => 0,
    }
}

/// Trend over the most recent seven samples
///
/// Up when height grew by more than 5%, down when it shrank by more than 2%.
pub fn recent_trend(series: &[GrowthSample]) -> GrowthTrend {
    if series.len() < 7 {
        return GrowthTrend::Neutral;
    }
    let recent = &series[series.len() - 7..];
    let week_ago = recent[0].height_cm;
    let current = recent[recent.len() - 1].height_cm;

    if current > week_ago * 1.05 {
        GrowthTrend::Up
    } else if current < week_ago * 0.98 {
        GrowthTrend::Down
    } else {
        GrowthTrend::Neutral
    }
}

/// Summary metrics for the tracker header
pub fn summarize_growth(series: &[GrowthSample]) -> GrowthSummary {
    let latest = series.last();
    GrowthSummary {
        growth_percentage: growth_percentage(series),
        trend: recent_trend(series),
        latest_height_cm: latest.map(|s| (s.height_cm * 10.0).round() / 10.0).unwrap_or(0.0),
        latest_leaf_count: latest.map(|s| s.leaf_count).unwrap_or(0),
        health_score: latest.map(|s| s.health_score.round() as i64).unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn end_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    fn sample(day_index: u32, height_cm: f64) -> GrowthSample {
        GrowthSample {
            day_index,
            date: end_date(),
            height_cm,
            leaf_count: 5,
            health_score: 80.0,
        }
    }

    #[test]
    fn test_name_seed_sums_char_codes() {
        // R(82) + o(111) + s(115) + e(101)
        assert_eq!(name_seed("Rose"), 409);
        assert_eq!(name_seed(""), 0);
    }

    #[test]
    fn test_series_shape() {
        let series = growth_series("Rose", 30, end_date(), Some(42));

        assert_eq!(series.len(), 31);
        let indices: Vec<u32> = series.iter().map(|s| s.day_index).collect();
        assert_eq!(indices, (0..=30).collect::<Vec<_>>());
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 5, 31).unwrap());
        assert_eq!(series[30].date, end_date());

        for pair in series.windows(2) {
            assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
        }
    }

    #[test]
    fn test_same_seed_same_series() {
        let a = growth_series("Rose", 30, end_date(), Some(7));
        let b = growth_series("Rose", 30, end_date(), Some(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_name_seeds_stream_by_default() {
        let a = growth_series("Basil", 14, end_date(), None);
        let b = growth_series("Basil", 14, end_date(), None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_day_window() {
        let series = growth_series("Mint", 0, end_date(), Some(1));
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].day_index, 0);
        assert_eq!(summarize_growth(&series).growth_percentage, 0);
    }

    #[test]
    fn test_window_before_earliest_date_starts_there() {
        let end = NaiveDate::MIN.checked_add_days(Days::new(2)).unwrap();
        let series = growth_series("Rose", 5, end, Some(1));

        assert_eq!(series.len(), 6);
        assert_eq!(series[0].date, NaiveDate::MIN);
        for pair in series.windows(2) {
            assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
        }
    }

    #[test]
    fn test_growth_percentage() {
        let series = vec![sample(0, 10.0), sample(1, 12.0), sample(2, 15.0)];
        assert_eq!(growth_percentage(&series), 50);
        assert_eq!(growth_percentage(&series[..1]), 0);
        assert_eq!(growth_percentage(&[]), 0);
    }

    #[test]
    fn test_recent_trend() {
        let rising: Vec<_> = (0..7).map(|i| sample(i, 10.0 + i as f64)).collect();
        assert_eq!(recent_trend(&rising), GrowthTrend::Up);

        let falling: Vec<_> = (0..7).map(|i| sample(i, 10.0 - i as f64 * 0.5)).collect();
        assert_eq!(recent_trend(&falling), GrowthTrend::Down);

        let flat: Vec<_> = (0..7).map(|i| sample(i, 10.0 + i as f64 * 0.01)).collect();
        assert_eq!(recent_trend(&flat), GrowthTrend::Neutral);

        assert_eq!(recent_trend(&rising[..6]), GrowthTrend::Neutral);
    }

    #[test]
    fn test_summary_uses_latest_sample() {
        let series = vec![sample(0, 10.0), sample(1, 12.345)];
        let summary = summarize_growth(&series);
        assert_eq!(summary.latest_height_cm, 12.3);
        assert_eq!(summary.latest_leaf_count, 5);
        assert_eq!(summary.health_score, 80);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: health stays a percentage and leaves never drop below the base count
        #[test]
        fn prop_series_values_in_range(seed in any::<u64>(), days in 1u32..120) {
            let series = growth_series("Tomato", days, end_date(), Some(seed));
            prop_assert_eq!(series.len(), days as usize + 1);
            for s in &series {
                prop_assert!((0.0..=100.0).contains(&s.health_score));
                prop_assert!(s.height_cm >= 5.0);
                prop_assert!(s.leaf_count >= 3);
            }
        }

        /// Property: the plant ends the window taller than it started
        #[test]
        fn prop_height_trends_upward(seed in any::<u64>(), days in 5u32..60) {
            let series = growth_series("Rose", days, end_date(), Some(seed));
            let first = series.first().unwrap().height_cm;
            let last = series.last().unwrap().height_cm;
            prop_assert!(last > first);
            prop_assert!(growth_percentage(&series) >= 0);
        }
    }
}
