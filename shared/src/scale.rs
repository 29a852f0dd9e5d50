use chrono::{Datelike, Days, NaiveDate};

use crate::extent::Extents;

pub type Rgb = (u8, u8, u8);

/// Diverging 13-step ramp, cool to warm. Cell fill and legend swatches both
/// draw from this table; the legend is always exactly this many swatches.
pub const PALETTE: [Rgb; 13] = [
    (8, 69, 148),    // #084594
    (33, 113, 181),  // #2171b5
    (66, 146, 198),  // #4292c6
    (107, 174, 214), // #6baed6
    (158, 202, 225), // #9ecae1
    (247, 251, 255), // #f7fbff
    (247, 234, 216), // #f7ead8
    (253, 212, 158), // #fdd49e
    (253, 187, 132), // #fdbb84
    (252, 141, 89),  // #fc8d59
    (239, 101, 72),  // #ef6548
    (178, 24, 43),   // #b2182b
    (140, 3, 8),     // #8c0308
];

fn jan_first(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Linear-in-time mapping from dates onto a pixel/cell range. The domain is
/// January 1 of the first year through January 1 of the year after the last,
/// so the final year keeps a full-width column.
#[derive(Debug, Clone, Copy)]
pub struct TimeScale {
    min_year: i32,
    max_year: i32,
    origin: NaiveDate,
    span_days: f64,
    range_start: f64,
    range_len: f64,
}

impl TimeScale {
    pub fn new(extents: &Extents, range_start: f64, range_end: f64) -> Self {
        let origin = jan_first(extents.min_year);
        let end = jan_first(extents.max_year + 1);
        let span_days = f64::from(end.num_days_from_ce() - origin.num_days_from_ce()).max(1.0);

        Self {
            min_year: extents.min_year,
            max_year: extents.max_year,
            origin,
            span_days,
            range_start,
            range_len: range_end - range_start,
        }
    }

    pub fn map(&self, date: NaiveDate) -> f64 {
        let days = f64::from(date.num_days_from_ce() - self.origin.num_days_from_ce());
        (days / self.span_days).mul_add(self.range_len, self.range_start)
    }

    /// Column position of a year: the x of its January 1
    pub fn map_year(&self, year: i32) -> f64 {
        self.map(jan_first(year))
    }

    /// Inverse lookup for hit-testing. Positions outside the range, or
    /// resolving outside the data years, are not on the chart.
    pub fn year_at(&self, position: f64) -> Option<i32> {
        if self.range_len <= 0.0 {
            return None;
        }

        let t = (position - self.range_start) / self.range_len;
        if !(0.0..1.0).contains(&t) {
            return None;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let days = (t * self.span_days).floor() as u64;
        let year = self
            .origin
            .checked_add_days(Days::new(days))
            .map_or(self.min_year, |date| date.year());

        (self.min_year..=self.max_year).contains(&year).then_some(year)
    }

    /// Uniform per-year column width: the usable range divided by the year
    /// span, the whole range when the dataset covers a single year.
    pub fn column_width(&self) -> f64 {
        let years = self.max_year - self.min_year;
        if years == 0 {
            self.range_len
        } else {
            self.range_len / f64::from(years)
        }
    }
}

/// Equal-width discrete bands with no inter-band padding; one band per month.
#[derive(Debug, Clone, Copy)]
pub struct BandScale {
    bands: usize,
    range_start: f64,
    range_len: f64,
}

impl BandScale {
    pub fn new(bands: usize, range_start: f64, range_end: f64) -> Self {
        Self {
            bands,
            range_start,
            range_len: range_end - range_start,
        }
    }

    pub fn months(range_start: f64, range_end: f64) -> Self {
        Self::new(12, range_start, range_end)
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn band_start(&self, index: usize) -> f64 {
        (index as f64 / self.bands as f64).mul_add(self.range_len, self.range_start)
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn bandwidth(&self) -> f64 {
        if self.bands == 0 {
            0.0
        } else {
            self.range_len / self.bands as f64
        }
    }

    pub fn index_at(&self, position: f64) -> Option<usize> {
        if self.range_len <= 0.0 || self.bands == 0 {
            return None;
        }

        let t = (position - self.range_start) / self.range_len;
        if !(0.0..1.0).contains(&t) {
            return None;
        }

        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = ((t * self.bands as f64).floor() as usize).min(self.bands - 1);
        Some(index)
    }
}

/// Step function from the continuous temperature domain into the palette.
/// The minimum maps to the first color, the maximum into the last band, and
/// the bands tile the domain with no gaps. A zero-width domain (single-point
/// dataset) collapses onto the first color.
#[derive(Debug, Clone, Copy)]
pub struct QuantizeScale {
    min: f64,
    max: f64,
}

impl QuantizeScale {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub const fn from_extents(extents: &Extents) -> Self {
        Self::new(extents.min_temp, extents.max_temp)
    }

    pub const fn band_count() -> usize {
        PALETTE.len()
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn band(&self, value: f64) -> usize {
        if self.max <= self.min {
            return 0;
        }

        let steps = PALETTE.len() as f64;
        let raw = ((value - self.min) / (self.max - self.min) * steps).floor();
        (raw.max(0.0) as usize).min(PALETTE.len() - 1)
    }

    pub fn color(&self, value: f64) -> Rgb {
        PALETTE[self.band(value)]
    }

    /// Lower boundary of a band
    #[allow(clippy::cast_precision_loss)]
    pub fn boundary(&self, band: usize) -> f64 {
        let t = band as f64 / PALETTE.len() as f64;
        t.mul_add(self.max - self.min, self.min)
    }

    /// Legend tick values: the exact lower boundary of every second band,
    /// then the domain maximum.
    pub fn legend_ticks(&self) -> Vec<f64> {
        let mut ticks: Vec<f64> = (0..PALETTE.len()).step_by(2).map(|band| self.boundary(band)).collect();
        ticks.push(self.max);
        ticks
    }
}

/// Plain linear mapping, used only to place legend ticks under the swatches.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    min: f64,
    max: f64,
    range_start: f64,
    range_len: f64,
}

impl LinearScale {
    pub const fn new(min: f64, max: f64, range_start: f64, range_end: f64) -> Self {
        Self {
            min,
            max,
            range_start,
            range_len: range_end - range_start,
        }
    }

    pub fn map(&self, value: f64) -> f64 {
        if self.max <= self.min {
            return self.range_start;
        }

        let t = (value - self.min) / (self.max - self.min);
        t.mul_add(self.range_len, self.range_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extents() -> Extents {
        Extents {
            min_year: 1753,
            max_year: 2015,
            min_temp: 1.68,
            max_temp: 13.89,
        }
    }

    #[test]
    fn time_scale_pins_the_domain_edges() {
        let scale = TimeScale::new(&extents(), 60.0, 840.0);
        assert!((scale.map_year(1753) - 60.0).abs() < 1e-9);
        // Jan 1 of the year after the last year closes the range
        assert!((scale.map_year(2016) - 840.0).abs() < 1e-9);
    }

    #[test]
    fn x_position_is_monotonic_in_year() {
        let scale = TimeScale::new(&extents(), 0.0, 200.0);
        let mut last = f64::NEG_INFINITY;
        for year in 1753..=2015 {
            let x = scale.map_year(year);
            assert!(x >= last, "year {year} moved backwards");
            last = x;
        }
    }

    #[test]
    fn year_at_inverts_map_year() {
        let scale = TimeScale::new(&extents(), 10.0, 910.0);
        for year in [1753, 1800, 1901, 2015] {
            let x = scale.map_year(year);
            assert_eq!(scale.year_at(x + 0.5), Some(year));
        }
        assert_eq!(scale.year_at(9.0), None);
        assert_eq!(scale.year_at(911.0), None);
    }

    #[test]
    fn column_width_divides_the_usable_range_by_the_year_span() {
        let scale = TimeScale::new(&extents(), 60.0, 840.0);
        assert!((scale.column_width() - 780.0 / 262.0).abs() < 1e-9);
    }

    #[test]
    fn single_year_dataset_gets_one_full_width_column() {
        let single = Extents {
            min_year: 1900,
            max_year: 1900,
            min_temp: 7.5,
            max_temp: 7.5,
        };
        let scale = TimeScale::new(&single, 0.0, 100.0);
        assert!((scale.column_width() - 100.0).abs() < 1e-9);
        assert_eq!(scale.year_at(50.0), Some(1900));
    }

    #[test]
    fn band_scale_produces_exactly_twelve_month_rows() {
        let scale = BandScale::months(60.0, 440.0);
        let starts: Vec<f64> = (0..12).map(|i| scale.band_start(i)).collect();
        assert_eq!(starts.len(), 12);
        assert!((starts[0] - 60.0).abs() < 1e-9);
        assert!((scale.bandwidth() - 380.0 / 12.0).abs() < 1e-9);
        for (index, start) in starts.iter().enumerate() {
            assert_eq!(scale.index_at(start + 0.1), Some(index));
        }
        assert_eq!(scale.index_at(59.0), None);
        assert_eq!(scale.index_at(440.0), None);
    }

    #[test]
    fn quantize_covers_the_domain_without_gaps() {
        let scale = QuantizeScale::new(1.68, 13.89);
        assert_eq!(scale.band(1.68), 0);
        assert_eq!(scale.color(1.68), PALETTE[0]);
        assert_eq!(scale.band(13.89), 12);
        for band in 0..13 {
            // every lower boundary lands in its own band: no gaps, no overlap
            assert_eq!(scale.band(scale.boundary(band) + 1e-9), band);
        }
    }

    #[test]
    fn quantize_degenerate_domain_uses_the_first_color() {
        let scale = QuantizeScale::new(7.5, 7.5);
        assert_eq!(scale.band(7.5), 0);
        assert_eq!(scale.band(100.0), 0);
    }

    #[test]
    fn legend_ticks_are_even_boundaries_plus_the_maximum() {
        let scale = QuantizeScale::new(0.0, 13.0);
        let ticks = scale.legend_ticks();
        assert_eq!(ticks.len(), 8);
        assert!((ticks[0] - 0.0).abs() < 1e-9);
        for (i, tick) in ticks.iter().take(7).enumerate() {
            assert!((tick - scale.boundary(i * 2)).abs() < 1e-9);
        }
        assert!((ticks[7] - 13.0).abs() < 1e-9);
    }

    #[test]
    fn linear_scale_maps_the_legend_domain() {
        let scale = LinearScale::new(1.0, 3.0, 0.0, 300.0);
        assert!((scale.map(1.0) - 0.0).abs() < 1e-9);
        assert!((scale.map(2.0) - 150.0).abs() < 1e-9);
        assert!((scale.map(3.0) - 300.0).abs() < 1e-9);
    }
}
