//! Quality presets.
//!
//! Each of the eleven quality levels maps to a fixed bundle of filter
//! parameters trading CPU cost for stopband attenuation.

use crate::window::{WindowFunction, KAISER10, KAISER12, KAISER6, KAISER8};

/// Highest quality level accepted by the resampler.
pub const MAX_QUALITY: u8 = 10;

/// Filter parameters for one quality level.
pub(crate) struct QualityProfile {
    /// Filter length before ratio scaling. Always a multiple of four.
    pub base_length: usize,
    /// Resolution of the oversampled table when one is used.
    pub oversample: u32,
    /// Cutoff bandwidth when reducing the sample rate.
    pub downsample_bandwidth: f32,
    /// Cutoff bandwidth when raising the sample rate.
    pub upsample_bandwidth: f32,
    /// Window applied to the ideal sinc kernel.
    pub window: &'static WindowFunction,
}

/// Per-level parameters, indexed by quality.
///
/// The up-sampling bandwidth is wider than the down-sampling one: when
/// up-sampling the spectrum can be assumed to be attenuated near Nyquist
/// already, and any aliasing that close to Nyquist is masked by the content
/// just below it.
pub(crate) static QUALITY_MAP: [QualityProfile; 11] = [
    profile(8, 4, 0.830, 0.860, &KAISER6),     // Q0
    profile(16, 4, 0.850, 0.880, &KAISER6),    // Q1
    profile(32, 4, 0.882, 0.910, &KAISER6),    // Q2,  ~60 dB stopband
    profile(48, 8, 0.895, 0.917, &KAISER8),    // Q3,  ~80 dB stopband
    profile(64, 8, 0.921, 0.940, &KAISER8),    // Q4,  ~80 dB stopband
    profile(80, 16, 0.922, 0.940, &KAISER10),  // Q5, ~100 dB stopband
    profile(96, 16, 0.940, 0.945, &KAISER10),  // Q6
    profile(128, 16, 0.950, 0.950, &KAISER10), // Q7
    profile(160, 16, 0.960, 0.960, &KAISER10), // Q8
    profile(192, 32, 0.968, 0.968, &KAISER12), // Q9
    profile(256, 32, 0.975, 0.975, &KAISER12), // Q10
];

const fn profile(
    base_length: usize,
    oversample: u32,
    downsample_bandwidth: f32,
    upsample_bandwidth: f32,
    window: &'static WindowFunction,
) -> QualityProfile {
    QualityProfile {
        base_length,
        oversample,
        downsample_bandwidth,
        upsample_bandwidth,
        window,
    }
}
