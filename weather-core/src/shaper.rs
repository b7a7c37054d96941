//! Forecast shaping: reduce a fine-grained forecast series to one current
//! sample plus up to five daily samples, each the entry nearest local noon
//! for its calendar day.

use std::collections::BTreeMap;

use chrono::Timelike;

use crate::model::{ForecastEntry, ForecastSample, ForecastSeries};

/// Number of daily samples following the current one.
const FORECAST_DAYS: usize = 5;

const DATE_FORMAT: &str = "%m/%d/%Y";

/// Shape a raw forecast series into `[current, day1..day5]`.
///
/// The first raw entry becomes the current sample. Entries are then
/// bucketed by calendar day and each day keeps the entry whose hour is
/// strictly closer to 12:00 than the best so far, so ties keep the
/// first-seen entry. The earliest day is dropped (it is today, already
/// covered by the current sample) and up to five subsequent days are
/// emitted in ascending date order.
pub fn shape_forecast(series: &ForecastSeries) -> Vec<ForecastSample> {
    let Some(current) = series.entries.first() else {
        return Vec::new();
    };

    let mut samples = vec![sample_from(&series.city, current)];

    let mut daily: BTreeMap<chrono::NaiveDate, &ForecastEntry> = BTreeMap::new();
    for entry in &series.entries {
        daily
            .entry(entry.timestamp.date())
            .and_modify(|best| {
                if noon_distance(entry) < noon_distance(*best) {
                    *best = entry;
                }
            })
            .or_insert(entry);
    }

    samples.extend(
        daily
            .values()
            .skip(1)
            .take(FORECAST_DAYS)
            .map(|entry| sample_from(&series.city, entry)),
    );

    samples
}

fn noon_distance(entry: &ForecastEntry) -> u32 {
    entry.timestamp.hour().abs_diff(12)
}

fn sample_from(city: &str, entry: &ForecastEntry) -> ForecastSample {
    ForecastSample {
        city: city.to_string(),
        date: entry.timestamp.format(DATE_FORMAT).to_string(),
        icon: entry.icon.clone(),
        icon_description: entry.description.clone(),
        temp_f: entry.temperature.round() as i64,
        wind_speed: entry.wind_speed.round() as i64,
        humidity: entry.humidity.round() as i64,
    }
}
