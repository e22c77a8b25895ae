//! Convolution kernels, the hot path.
//!
//! Four variants cover the two table layouts times two accumulator widths.
//! The variant is chosen once per table rebuild and dispatched through
//! [`Kernel`]; nothing is re-decided per sample. Double accumulation is
//! selected above quality 8, trading CPU for reduced rounding error.
//!
//! All variants share the same contract: consume history starting at the
//! channel cursor, emit into `out` with the caller's stride, and stop as soon
//! as either the input history or the output capacity runs out. The caller
//! infers consumed input from the updated cursor.

use crate::channel::ChannelState;
use crate::filter::SincFilter;
use crate::math::cubic_coef;

/// Kernel variant, fixed at table-build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Kernel {
    DirectSingle,
    DirectDouble,
    InterpolateSingle,
    InterpolateDouble,
}

impl SincFilter {
    /// Runs the selected kernel for one channel and returns the number of
    /// output samples produced.
    ///
    /// `mem` is the channel's history region; the first `in_len` samples of
    /// it (beyond the retained window) are available as input. Output sample
    /// `k` lands at `out[out_base + k * out_stride]`.
    pub fn run(
        &self,
        state: &mut ChannelState,
        mem: &[f32],
        in_len: usize,
        out: &mut [f32],
        out_base: usize,
        out_stride: usize,
        out_len: usize,
    ) -> usize {
        match self.kernel {
            Kernel::DirectSingle => {
                self.direct::<f32>(state, mem, in_len, out, out_base, out_stride, out_len)
            }
            Kernel::DirectDouble => {
                self.direct::<f64>(state, mem, in_len, out, out_base, out_stride, out_len)
            }
            Kernel::InterpolateSingle => {
                self.interpolate::<f32>(state, mem, in_len, out, out_base, out_stride, out_len)
            }
            Kernel::InterpolateDouble => {
                self.interpolate::<f64>(state, mem, in_len, out, out_base, out_stride, out_len)
            }
        }
    }

    /// Direct kernel: dot-product of the phase's precomputed tap row against
    /// the history window at the cursor.
    #[allow(clippy::too_many_arguments)]
    fn direct<A: Accumulate>(
        &self,
        state: &mut ChannelState,
        mem: &[f32],
        in_len: usize,
        out: &mut [f32],
        out_base: usize,
        out_stride: usize,
        out_len: usize,
    ) -> usize {
        let n = self.filt_len;
        let mut cursor = state.cursor;
        let mut frac = state.frac;
        let mut produced = 0;

        while cursor < in_len && produced < out_len {
            let taps = &self.taps[frac as usize * n..][..n];
            let window = &mem[cursor..cursor + n];
            out[out_base + out_stride * produced] = A::dot(taps, window);
            produced += 1;

            cursor += self.int_advance;
            frac += self.frac_advance;
            if frac >= self.den_rate {
                frac -= self.den_rate;
                cursor += 1;
            }
        }

        state.cursor = cursor;
        state.frac = frac;
        produced
    }

    /// Interpolated kernel: four partial dot-products at neighbouring table
    /// offsets, blended with cubic coefficients for the sub-phase fraction.
    #[allow(clippy::too_many_arguments)]
    fn interpolate<A: Accumulate>(
        &self,
        state: &mut ChannelState,
        mem: &[f32],
        in_len: usize,
        out: &mut [f32],
        out_base: usize,
        out_stride: usize,
        out_len: usize,
    ) -> usize {
        let n = self.filt_len;
        let oversample = self.oversample as usize;
        let den = self.den_rate as u64;
        let mut cursor = state.cursor;
        let mut frac = state.frac;
        let mut produced = 0;

        while cursor < in_len && produced < out_len {
            let window = &mem[cursor..cursor + n];
            let scaled = frac as u64 * self.oversample as u64;
            let offset = (scaled / den) as usize;
            let sub = (scaled % den) as f32 / den as f32;

            let mut accum = A::zero();
            for (j, &sample) in window.iter().enumerate() {
                // Base lands at least 2 past the leading guard entries, so
                // the -2..=+1 gather always stays inside the table.
                let base = 4 + (j + 1) * oversample - offset;
                A::gather4(&mut accum, sample, &self.taps[base - 2..base + 2]);
            }
            out[out_base + out_stride * produced] = A::blend(accum, cubic_coef(sub));
            produced += 1;

            cursor += self.int_advance;
            frac += self.frac_advance;
            if frac >= self.den_rate {
                frac -= self.den_rate;
                cursor += 1;
            }
        }

        state.cursor = cursor;
        state.frac = frac;
        produced
    }
}

/// Accumulator width used by a kernel variant.
trait Accumulate {
    type Acc: Copy;

    fn zero() -> [Self::Acc; 4];
    fn dot(taps: &[f32], window: &[f32]) -> f32;
    fn gather4(accum: &mut [Self::Acc; 4], sample: f32, taps: &[f32]);
    fn blend(accum: [Self::Acc; 4], coef: [f32; 4]) -> f32;
}

impl Accumulate for f32 {
    type Acc = f32;

    #[inline]
    fn zero() -> [f32; 4] {
        [0.0; 4]
    }

    #[inline]
    fn dot(taps: &[f32], window: &[f32]) -> f32 {
        let mut sum = 0.0f32;
        for (tap, sample) in taps.iter().zip(window) {
            sum += tap * sample;
        }
        sum
    }

    #[inline]
    fn gather4(accum: &mut [f32; 4], sample: f32, taps: &[f32]) {
        accum[0] += sample * taps[0];
        accum[1] += sample * taps[1];
        accum[2] += sample * taps[2];
        accum[3] += sample * taps[3];
    }

    #[inline]
    fn blend(accum: [f32; 4], coef: [f32; 4]) -> f32 {
        coef[0] * accum[0] + coef[1] * accum[1] + coef[2] * accum[2] + coef[3] * accum[3]
    }
}

impl Accumulate for f64 {
    type Acc = f64;

    #[inline]
    fn zero() -> [f64; 4] {
        [0.0; 4]
    }

    #[inline]
    fn dot(taps: &[f32], window: &[f32]) -> f32 {
        // Four independent accumulators; the filter length is always a
        // multiple of four.
        let mut accum = [0.0f64; 4];
        for (taps4, win4) in taps.chunks_exact(4).zip(window.chunks_exact(4)) {
            accum[0] += taps4[0] as f64 * win4[0] as f64;
            accum[1] += taps4[1] as f64 * win4[1] as f64;
            accum[2] += taps4[2] as f64 * win4[2] as f64;
            accum[3] += taps4[3] as f64 * win4[3] as f64;
        }
        (accum[0] + accum[1] + accum[2] + accum[3]) as f32
    }

    #[inline]
    fn gather4(accum: &mut [f64; 4], sample: f32, taps: &[f32]) {
        let sample = sample as f64;
        accum[0] += sample * taps[0] as f64;
        accum[1] += sample * taps[1] as f64;
        accum[2] += sample * taps[2] as f64;
        accum[3] += sample * taps[3] as f64;
    }

    #[inline]
    fn blend(accum: [f64; 4], coef: [f32; 4]) -> f32 {
        (coef[0] as f64 * accum[0]
            + coef[1] as f64 * accum[1]
            + coef[2] as f64 * accum[2]
            + coef[3] as f64 * accum[3]) as f32
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn run_dc(filter: &SincFilter, in_len: usize) -> Vec<f32> {
        let mut state = ChannelState::default();
        let mem = vec![1.0f32; filter.filt_len - 1 + in_len];
        let mut out = vec![0.0f32; 4 * in_len + 8];
        let len = out.len();
        let produced = filter.run(&mut state, &mem, in_len, &mut out, 0, 1, len);
        out.truncate(produced);
        out
    }

    #[test]
    fn direct_kernel_preserves_dc() {
        let filter = SincFilter::build(1, 2, 5);
        for sample in run_dc(&filter, 64) {
            assert!((sample - 1.0).abs() < 0.1, "DC came out as {sample}");
        }
    }

    #[test]
    fn interpolated_kernel_preserves_dc() {
        let filter = SincFilter::build(147, 160, 5);
        for sample in run_dc(&filter, 64) {
            assert!((sample - 1.0).abs() < 0.1, "DC came out as {sample}");
        }
    }

    #[test]
    fn double_accumulation_stays_close_to_single() {
        let single = SincFilter::build(147, 160, 8);
        let mut double = SincFilter::build(147, 160, 8);
        double.kernel = Kernel::InterpolateDouble;

        let n = single.filt_len;
        let mem: Vec<f32> = (0..n - 1 + 64)
            .map(|i| (i as f32 * 0.37).sin() * 0.5)
            .collect();

        let mut out_a = vec![0.0f32; 128];
        let mut out_b = vec![0.0f32; 128];
        let mut st_a = ChannelState::default();
        let mut st_b = ChannelState::default();
        let made_a = single.run(&mut st_a, &mem, 64, &mut out_a, 0, 1, 128);
        let made_b = double.run(&mut st_b, &mem, 64, &mut out_b, 0, 1, 128);

        assert_eq!(made_a, made_b);
        assert_eq!(st_a.cursor, st_b.cursor);
        assert_eq!(st_a.frac, st_b.frac);
        for (a, b) in out_a[..made_a].iter().zip(&out_b[..made_b]) {
            assert!((a - b).abs() < 1e-4);
        }
    }

    #[test]
    fn kernel_stops_at_output_capacity() {
        let filter = SincFilter::build(1, 2, 3);
        let mut state = ChannelState::default();
        let mem = vec![0.0f32; filter.filt_len - 1 + 100];
        let mut out = vec![0.0f32; 10];
        let produced = filter.run(&mut state, &mem, 100, &mut out, 0, 1, 10);
        assert_eq!(produced, 10);
        // 1:2 up-sampling consumes one input sample per two outputs.
        assert_eq!(state.cursor, 5);
    }

    #[test]
    fn kernel_stops_at_input_exhaustion() {
        let filter = SincFilter::build(1, 2, 3);
        let mut state = ChannelState::default();
        let mem = vec![0.0f32; filter.filt_len - 1 + 16];
        let mut out = vec![0.0f32; 1000];
        let produced = filter.run(&mut state, &mem, 16, &mut out, 0, 1, 1000);
        assert_eq!(produced, 32);
        assert_eq!(state.cursor, 16);
    }
}
