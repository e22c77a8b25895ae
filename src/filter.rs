//! Sinc filter table construction.
//!
//! A table is rebuilt only when the ratio or quality actually changes, never
//! per sample. Depending on how many distinct phases the reduced ratio needs,
//! the builder picks whichever representation costs less memory:
//!
//! - **Direct**: one precomputed tap row per phase (`filt_len × den_rate`
//!   entries), used when the denominator is small.
//! - **Oversampled**: the continuous windowed sinc sampled at `oversample`
//!   resolution with a four-sample guard band on each side, combined at run
//!   time by cubic interpolation.

use crate::kernel::Kernel;
use crate::quality::QUALITY_MAP;
use crate::window::windowed_sinc;

/// A built filter: the tap table plus everything the kernels need to run it.
pub(crate) struct SincFilter {
    /// Flattened tap table; layout depends on the selected [`Kernel`].
    pub taps: Vec<f32>,
    /// Filter length after ratio scaling. Always a multiple of four.
    pub filt_len: usize,
    /// Resolution of the oversampled table (meaningful for the interpolated
    /// kernels only).
    pub oversample: u32,
    /// Reduced ratio denominator; bounds the fractional phase numerator.
    pub den_rate: u32,
    /// Normalised cutoff actually used, after down-ratio attenuation.
    pub cutoff: f32,
    /// Kernel variant selected for this table, fixed until the next rebuild.
    pub kernel: Kernel,
    /// Whole input samples to advance per output sample.
    pub int_advance: usize,
    /// Fractional advance per output sample, as a numerator over `den_rate`.
    pub frac_advance: u32,
}

impl SincFilter {
    /// Builds the filter table for a reduced `num/den` ratio at `quality`.
    ///
    /// Cost is `O(filt_len × phases)`; callers are expected to rebuild lazily.
    pub fn build(num: u32, den: u32, quality: u8) -> SincFilter {
        let profile = &QUALITY_MAP[quality as usize];
        let mut oversample = profile.oversample;
        let mut filt_len = profile.base_length;

        let cutoff = if num > den {
            // Down-sampling: squeeze the passband under the output Nyquist
            // and stretch the kernel to match, keeping a multiple of four.
            filt_len = filt_len * num as usize / den as usize;
            filt_len &= !0x3;
            if 2 * den < num {
                oversample >>= 1;
            }
            if 4 * den < num {
                oversample >>= 1;
            }
            if 8 * den < num {
                oversample >>= 1;
            }
            if 16 * den < num {
                oversample >>= 1;
            }
            oversample = oversample.max(1);
            profile.downsample_bandwidth * den as f32 / num as f32
        } else {
            profile.upsample_bandwidth
        };

        let (taps, kernel) = if den <= oversample {
            // Few phases: precompute a full tap row for each of them.
            let mut taps = vec![0.0f32; filt_len * den as usize];
            for (phase, row) in taps.chunks_exact_mut(filt_len).enumerate() {
                for (j, tap) in row.iter_mut().enumerate() {
                    let x = (j as i64 - filt_len as i64 / 2 + 1) as f32
                        - phase as f32 / den as f32;
                    *tap = windowed_sinc(cutoff, x, filt_len, profile.window);
                }
            }
            let kernel = if quality > 8 {
                Kernel::DirectDouble
            } else {
                Kernel::DirectSingle
            };
            (taps, kernel)
        } else {
            // Many phases: sample the continuous kernel once, interpolate at
            // run time. Four guard entries on each side feed the cubic blend.
            let mut taps = vec![0.0f32; filt_len * oversample as usize + 8];
            for i in -4..(oversample as i64 * filt_len as i64 + 4) {
                let x = i as f32 / oversample as f32 - filt_len as f32 / 2.0;
                taps[(i + 4) as usize] = windowed_sinc(cutoff, x, filt_len, profile.window);
            }
            let kernel = if quality > 8 {
                Kernel::InterpolateDouble
            } else {
                Kernel::InterpolateSingle
            };
            (taps, kernel)
        };

        SincFilter {
            taps,
            filt_len,
            oversample,
            den_rate: den,
            cutoff,
            kernel,
            int_advance: (num / den) as usize,
            frac_advance: num % den,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn small_denominator_selects_direct_table() {
        // 8 kHz -> 16 kHz reduces to 1:2; two phases fit a direct table.
        let f = SincFilter::build(1, 2, 5);
        assert_eq!(f.kernel, Kernel::DirectSingle);
        assert_eq!(f.filt_len, 80);
        assert_eq!(f.taps.len(), 160);
        assert_eq!(f.int_advance, 0);
        assert_eq!(f.frac_advance, 1);
    }

    #[test]
    fn large_denominator_selects_oversampled_table() {
        // 44.1 kHz -> 48 kHz reduces to 147:160; far too many phases to store.
        let f = SincFilter::build(147, 160, 5);
        assert_eq!(f.kernel, Kernel::InterpolateSingle);
        assert_eq!(f.filt_len, 80);
        assert_eq!(f.taps.len(), 80 * 16 + 8);
    }

    #[test]
    fn high_quality_uses_double_accumulation() {
        assert_eq!(SincFilter::build(1, 2, 10).kernel, Kernel::DirectDouble);
        assert_eq!(
            SincFilter::build(147, 160, 9).kernel,
            Kernel::InterpolateDouble
        );
    }

    #[test]
    fn downsampling_scales_length_and_cutoff() {
        // 2:1 decimation at Q5 doubles the kernel and halves the cutoff.
        let f = SincFilter::build(2, 1, 5);
        assert_eq!(f.filt_len, 160);
        assert!((f.cutoff - 0.922 / 2.0).abs() < 1e-6);
        assert_eq!(f.int_advance, 2);
        assert_eq!(f.frac_advance, 0);
    }

    #[test]
    fn heavy_downsampling_halves_oversample() {
        // 48:1 passes every threshold; 16x oversampling collapses to 1x.
        let f = SincFilter::build(48, 1, 5);
        assert_eq!(f.oversample, 1);
        // Scaled length stays a multiple of four.
        assert_eq!(f.filt_len % 4, 0);
    }

    #[test]
    fn direct_table_rows_peak_at_cutoff() {
        let f = SincFilter::build(1, 2, 5);
        // Phase zero puts a tap exactly on the kernel origin.
        let center = f.filt_len / 2 - 1;
        assert_eq!(f.taps[center], f.cutoff);
    }

    #[test]
    fn direct_table_has_unit_dc_gain() {
        let f = SincFilter::build(1, 2, 7);
        for row in f.taps.chunks_exact(f.filt_len) {
            let gain: f32 = row.iter().sum();
            assert!(
                (0.85..1.15).contains(&gain),
                "phase gain {gain} out of range"
            );
        }
    }
}
