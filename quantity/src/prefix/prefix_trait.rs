/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub trait Prefix: Sized + Copy + 'static {
    const BASE: u64;
    const SCALE: &'static [Self];

    fn power(&self) -> i32;
    fn symbol(&self) -> &'static str;
    fn name(&self) -> &'static str;

    fn multiplier(&self) -> f64 {
        (Self::BASE as f64).powi(self.power())
    }

    /// Exact match against the short or long label.
    fn from_label(label: &str) -> Option<Self> {
        Self::SCALE
            .iter()
            .find(|p| p.symbol() == label || p.name() == label)
            .copied()
    }

    /// The largest prefix whose multiplier does not exceed
    /// `v^(1/exp)`, found by binary search over the ascending scale.
    /// Below the smallest entry, the smallest entry is returned.
    ///
    /// Note that the scalar channel is f64 throughout; at magnitudes
    /// of exa/exbi and above, conversions involving 64-bit integer
    /// values are subject to rounding.
    fn for_value(v: f64, exp: i32) -> Self {
        let target = v.powf(1.0 / exp as f64);
        match Self::SCALE.partition_point(|p| p.multiplier() <= target) {
            0 => Self::SCALE[0],
            n => Self::SCALE[n - 1],
        }
    }
}
