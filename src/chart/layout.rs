/// Coordinate mapping for a plot with two y axes sharing one x axis.
///
/// Plot space y is `log10(score)`. The diversity axis is linear over
/// `[0, 100]` and is stretched over the same vertical extent as the score
/// axis, so both axes use the whole plot height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualAxisLayout {
    pub log_min: f64,
    pub log_max: f64,
}

pub const DIVERSITY_DOMAIN: (f64, f64) = (0.0, 100.0);
/// Spacing of labelled diversity ticks, in percent
pub const DIVERSITY_TICK_STEP: f64 = 10.0;

/// Share of the log span added above and below the data
const LOG_MARGIN: f64 = 0.05;
/// Half-width in decades used when every score is the same
const FLAT_HALF_SPAN: f64 = 0.5;

impl DualAxisLayout {
    /// Fit the score axis to a set of positive scores.
    /// Returns `None` when there are no scores to fit.
    pub fn fit<I>(scores: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let (min, max) = scores
            .into_iter()
            .map(f64::log10)
            .fold(None, |range: Option<(f64, f64)>, v| match range {
                Some((min, max)) => Some((min.min(v), max.max(v))),
                None => Some((v, v)),
            })?;

        let span = max - min;
        if span <= f64::EPSILON {
            return Some(Self {
                log_min: min - FLAT_HALF_SPAN,
                log_max: max + FLAT_HALF_SPAN,
            });
        }

        Some(Self {
            log_min: min - span * LOG_MARGIN,
            log_max: max + span * LOG_MARGIN,
        })
    }

    pub fn span(&self) -> f64 {
        self.log_max - self.log_min
    }

    /// Score axis domain in data units
    pub fn score_domain(&self) -> (f64, f64) {
        (10f64.powf(self.log_min), 10f64.powf(self.log_max))
    }

    pub fn score_to_plot(&self, score: f64) -> f64 {
        score.log10()
    }

    pub fn plot_to_score(&self, y: f64) -> f64 {
        10f64.powf(y)
    }

    pub fn diversity_to_plot(&self, pct: f64) -> f64 {
        let (lo, hi) = DIVERSITY_DOMAIN;
        self.log_min + (pct - lo) / (hi - lo) * self.span()
    }

    pub fn plot_to_diversity(&self, y: f64) -> f64 {
        let (lo, hi) = DIVERSITY_DOMAIN;
        lo + (y - self.log_min) / self.span() * (hi - lo)
    }

    /// Plot-space positions of the diversity ticks, bottom to top
    pub fn diversity_ticks(&self) -> Vec<f64> {
        let (lo, hi) = DIVERSITY_DOMAIN;
        let count = ((hi - lo) / DIVERSITY_TICK_STEP).round() as usize;
        (0..=count)
            .map(|i| self.diversity_to_plot(lo + i as f64 * DIVERSITY_TICK_STEP))
            .collect()
    }

    /// The percentage of the diversity tick at `y`, if one sits there
    pub fn diversity_tick_at(&self, y: f64) -> Option<f64> {
        let (lo, hi) = DIVERSITY_DOMAIN;
        let pct = self.plot_to_diversity(y);
        let snapped = (pct / DIVERSITY_TICK_STEP).round() * DIVERSITY_TICK_STEP;
        if (pct - snapped).abs() < 1e-6 && (lo..=hi).contains(&snapped) {
            Some(snapped)
        } else {
            None
        }
    }
}

/// Label for a score axis tick
pub fn format_score(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-2..1e5).contains(&magnitude) {
        format!("{:.1e}", value)
    } else if magnitude >= 100.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Label for a diversity axis tick. Ticks outside the fixed domain are left blank.
pub fn format_diversity(pct: f64) -> String {
    let (lo, hi) = DIVERSITY_DOMAIN;
    if pct < lo - 1e-6 || pct > hi + 1e-6 {
        String::new()
    } else {
        format!("{:.0}%", pct)
    }
}
