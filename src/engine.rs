//! The resampler engine.
//!
//! Composes one filter table with per-channel streaming state and exposes
//! interleaved and parallel (de-interleaved) entry points. Both share a
//! single per-channel routine parameterised by stride and offset, which is
//! what guarantees the two modes are numerically identical.
//!
//! Processing follows a short-read/short-write contract: a call consumes and
//! produces as much as fits, reports both counts, and leaves the rest to the
//! next call. Beyond `filt_len - 1` history samples per channel (plus any
//! magic samples pending after a filter-length change) the engine buffers
//! nothing.

use num_rational::Ratio;

use crate::channel::ChannelState;
use crate::common::{ChannelCount, Sample, SampleRate};
use crate::filter::SincFilter;
use crate::quality::MAX_QUALITY;

/// Granularity of the per-channel history buffer, in frames. Input chunks
/// larger than this are processed in slices of this size.
const BUFFER_SIZE: usize = 160;

/// Errors returned by [`Resampler`] construction and reconfiguration.
///
/// Processing itself never fails: zero-length inputs and outputs clamp to
/// zero work, keeping the per-sample hot path free of error branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResampleError {
    /// Quality level outside `0..=10`.
    #[error("quality must be between 0 and {MAX_QUALITY} (got {0})")]
    QualityOutOfRange(u8),
    /// Engines need at least one channel.
    #[error("channel count must not be zero")]
    NoChannels,
    /// Sample rates and ratio terms must be nonzero.
    #[error("sample rates and ratio terms must not be zero")]
    ZeroRate,
}

/// Frames consumed and produced by one processing call.
///
/// Either count can fall short of what the caller offered; unconsumed input
/// must be resubmitted on the next call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Processed {
    /// Input frames consumed.
    pub input_frames: usize,
    /// Output frames produced.
    pub output_frames: usize,
}

/// Streaming multi-channel sample rate converter.
///
/// An engine owns all of its state; independent instances can run on
/// separate threads. Configuration changes and processing calls on the same
/// instance must be serialised by the caller (enforced by `&mut self`).
///
/// # Example
///
/// ```
/// use rateshift::Resampler;
///
/// let mut resampler = Resampler::new(1, 44100, 48000, 5)?;
/// let input = vec![0.0f32; 441];
/// let mut output = vec![0.0f32; 512];
/// let done = resampler.process_interleaved(&input, &mut output);
/// assert!(done.output_frames <= 512);
/// # Ok::<(), rateshift::ResampleError>(())
/// ```
pub struct Resampler {
    channels: ChannelCount,
    in_rate: SampleRate,
    out_rate: SampleRate,
    /// Reduced ratio: `num_rate` input samples per `den_rate` output samples.
    num_rate: u32,
    den_rate: u32,
    quality: u8,
    filter: SincFilter,
    state: Vec<ChannelState>,
    /// History arena: one `mem_alloc_size` region per channel.
    mem: Vec<Sample>,
    mem_alloc_size: usize,
    started: bool,
    rebuilds: u64,
}

impl Resampler {
    /// Creates an engine converting `in_rate` to `out_rate`.
    ///
    /// `quality` ranges from 0 (fastest) to 10 (best); 5 is a good default
    /// for most uses.
    pub fn new(
        channels: ChannelCount,
        in_rate: SampleRate,
        out_rate: SampleRate,
        quality: u8,
    ) -> Result<Resampler, ResampleError> {
        Self::new_frac(channels, in_rate, out_rate, in_rate, out_rate, quality)
    }

    /// Creates an engine with an explicit fractional ratio.
    ///
    /// `num / den` is the conversion ratio in lowest or non-lowest terms;
    /// `in_rate` and `out_rate` are only reported back by [`Self::rate`].
    pub fn new_frac(
        channels: ChannelCount,
        num: u32,
        den: u32,
        in_rate: SampleRate,
        out_rate: SampleRate,
        quality: u8,
    ) -> Result<Resampler, ResampleError> {
        if channels == 0 {
            return Err(ResampleError::NoChannels);
        }
        if num == 0 || den == 0 || in_rate == 0 || out_rate == 0 {
            return Err(ResampleError::ZeroRate);
        }
        if quality > MAX_QUALITY {
            return Err(ResampleError::QualityOutOfRange(quality));
        }

        let (num, den) = Ratio::new(num, den).into_raw();
        let filter = SincFilter::build(num, den, quality);
        let mem_alloc_size = filter.filt_len - 1 + BUFFER_SIZE;
        let mem = vec![0.0; channels as usize * mem_alloc_size];

        Ok(Resampler {
            channels,
            in_rate,
            out_rate,
            num_rate: num,
            den_rate: den,
            quality,
            filter,
            state: vec![ChannelState::default(); channels as usize],
            mem,
            mem_alloc_size,
            started: false,
            rebuilds: 1,
        })
    }

    /// Changes the quality level, rebuilding the filter table in place.
    ///
    /// Idempotent: setting the current level again does nothing. On error
    /// the existing state is left untouched.
    pub fn set_quality(&mut self, quality: u8) -> Result<(), ResampleError> {
        if quality > MAX_QUALITY {
            return Err(ResampleError::QualityOutOfRange(quality));
        }
        if quality == self.quality {
            return Ok(());
        }
        self.quality = quality;
        self.update_filter();
        Ok(())
    }

    /// Changes the conversion rates, rebuilding the filter table in place.
    pub fn set_rate(
        &mut self,
        in_rate: SampleRate,
        out_rate: SampleRate,
    ) -> Result<(), ResampleError> {
        self.set_rate_frac(in_rate, out_rate, in_rate, out_rate)
    }

    /// Changes the conversion ratio, rebuilding the filter table in place.
    ///
    /// Per-channel fractional cursors are rescaled proportionally so the
    /// stream stays phase-continuous across the change.
    pub fn set_rate_frac(
        &mut self,
        num: u32,
        den: u32,
        in_rate: SampleRate,
        out_rate: SampleRate,
    ) -> Result<(), ResampleError> {
        if num == 0 || den == 0 || in_rate == 0 || out_rate == 0 {
            return Err(ResampleError::ZeroRate);
        }
        let (num, den) = Ratio::new(num, den).into_raw();
        if self.in_rate == in_rate
            && self.out_rate == out_rate
            && self.num_rate == num
            && self.den_rate == den
        {
            return Ok(());
        }

        let old_den = self.den_rate;
        self.in_rate = in_rate;
        self.out_rate = out_rate;
        self.num_rate = num;
        self.den_rate = den;
        for st in &mut self.state {
            st.frac = (st.frac as u64 * den as u64 / old_den as u64) as u32;
            // Safety net for rounding at the top of the range.
            if st.frac >= den {
                st.frac = den - 1;
            }
        }

        tracing::debug!(num, den, in_rate, out_rate, "resampling ratio changed");
        self.update_filter();
        Ok(())
    }

    /// Number of channels this engine was built for.
    pub fn channels(&self) -> ChannelCount {
        self.channels
    }

    /// The `(input, output)` sample rates as given at construction.
    pub fn rate(&self) -> (SampleRate, SampleRate) {
        (self.in_rate, self.out_rate)
    }

    /// The conversion ratio reduced to lowest terms, as `(num, den)`.
    pub fn ratio(&self) -> (u32, u32) {
        (self.num_rate, self.den_rate)
    }

    /// Current quality level.
    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Algorithmic latency on the input side, in input samples.
    pub fn input_latency(&self) -> usize {
        self.filter.filt_len / 2
    }

    /// Algorithmic latency on the output side, in output samples.
    pub fn output_latency(&self) -> usize {
        ((self.filter.filt_len / 2) * self.den_rate as usize + self.num_rate as usize / 2)
            / self.num_rate as usize
    }

    /// Input frames needed to produce at least `output_frames` output frames
    /// in the steady state (ignoring start-up latency).
    pub fn input_frames_for(&self, output_frames: usize) -> usize {
        let needed = output_frames as u64 * self.num_rate as u64 + self.den_rate as u64 - 1;
        (needed / self.den_rate as u64) as usize
    }

    /// Advances each channel past the filter's leading zeros so the first
    /// output sample corresponds to the first input sample.
    ///
    /// Call right after construction, before feeding data; otherwise the
    /// first [`Self::input_latency`] input samples emerge as near-silence.
    pub fn skip_zeros(&mut self) {
        let half = self.filter.filt_len / 2;
        for st in &mut self.state {
            st.cursor = half;
        }
    }

    /// Resets all streaming state, discarding buffered history.
    ///
    /// The filter table is kept; the engine behaves as if freshly built.
    pub fn reset(&mut self) {
        self.mem.fill(0.0);
        for st in &mut self.state {
            *st = ChannelState::default();
        }
        self.started = false;
    }

    /// Resamples interleaved (channel-major per frame) audio.
    ///
    /// Consumes at most `input.len() / channels` frames and produces at most
    /// `output.len() / channels` frames; the returned [`Processed`] reports
    /// the exact counts.
    pub fn process_interleaved(&mut self, input: &[Sample], output: &mut [Sample]) -> Processed {
        let channels = self.channels as usize;
        let in_frames = input.len() / channels;
        let out_frames = output.len() / channels;
        self.run_interleaved(Some(input), in_frames, output, out_frames)
    }

    /// Flush variant of [`Self::process_interleaved`]: feeds `input_frames`
    /// virtual zero samples per channel, draining buffered history.
    pub fn drain_interleaved(&mut self, input_frames: usize, output: &mut [Sample]) -> Processed {
        let channels = self.channels as usize;
        let out_frames = output.len() / channels;
        self.run_interleaved(None, input_frames, output, out_frames)
    }

    /// Resamples de-interleaved audio, one buffer per channel.
    ///
    /// All channels consume and produce the same frame counts; capacities
    /// are clamped to the shortest input and output buffer.
    ///
    /// # Panics
    ///
    /// Panics if `input` or `output` does not hold exactly one buffer per
    /// channel.
    pub fn process_parallel(
        &mut self,
        input: &[&[Sample]],
        output: &mut [&mut [Sample]],
    ) -> Processed {
        assert_eq!(input.len(), self.channels as usize);
        let in_frames = input.iter().map(|ch| ch.len()).min().unwrap_or(0);
        self.run_parallel(Some(input), in_frames, output)
    }

    /// Flush variant of [`Self::process_parallel`].
    pub fn drain_parallel(
        &mut self,
        input_frames: usize,
        output: &mut [&mut [Sample]],
    ) -> Processed {
        self.run_parallel(None, input_frames, output)
    }

    fn run_interleaved(
        &mut self,
        input: Option<&[Sample]>,
        in_frames: usize,
        output: &mut [Sample],
        out_frames: usize,
    ) -> Processed {
        let channels = self.channels as usize;
        // The first channel clamps the shared input count to what it actually
        // consumed; the remaining channels then consume exactly that much.
        let mut in_len = in_frames;
        let mut out_len = out_frames;
        for ch in 0..channels {
            self.process_channel(
                ch, input, channels, ch, &mut in_len, output, channels, ch, &mut out_len,
            );
            if ch + 1 != channels {
                out_len = out_frames;
            }
        }
        Processed {
            input_frames: in_len,
            output_frames: out_len,
        }
    }

    fn run_parallel(
        &mut self,
        input: Option<&[&[Sample]]>,
        in_frames: usize,
        output: &mut [&mut [Sample]],
    ) -> Processed {
        let channels = self.channels as usize;
        assert_eq!(output.len(), channels);
        let out_frames = output.iter().map(|ch| ch.len()).min().unwrap_or(0);

        let mut in_len = in_frames;
        let mut out_len = out_frames;
        for ch in 0..channels {
            self.process_channel(
                ch,
                input.map(|bufs| bufs[ch]),
                1,
                0,
                &mut in_len,
                &mut *output[ch],
                1,
                0,
                &mut out_len,
            );
            if ch + 1 != channels {
                out_len = out_frames;
            }
        }
        Processed {
            input_frames: in_len,
            output_frames: out_len,
        }
    }

    /// Streams one channel: drain pending magic samples, then alternate
    /// copying caller input into the history tail and convolving it out.
    ///
    /// `in_len` and `out_len` are in/out: capacity on entry, frames consumed
    /// and produced on return.
    #[allow(clippy::too_many_arguments)]
    fn process_channel(
        &mut self,
        ch: usize,
        input: Option<&[Sample]>,
        in_stride: usize,
        in_base: usize,
        in_len: &mut usize,
        out: &mut [Sample],
        out_stride: usize,
        out_base: usize,
        out_len: &mut usize,
    ) {
        let mut ilen = *in_len;
        let mut olen = *out_len;
        let filt_offs = self.filter.filt_len - 1;
        let xlen = self.mem_alloc_size - filt_offs;
        let mut in_pos = in_base;
        let mut out_pos = out_base;

        if self.state[ch].magic != 0 {
            let produced = self.drain_magic(ch, out, out_pos, out_stride, olen);
            olen -= produced;
            out_pos += produced * out_stride;
        }
        // Only accept new input once the magic samples are fully drained.
        if self.state[ch].magic == 0 {
            while ilen > 0 && olen > 0 {
                let mut ichunk = ilen.min(xlen);
                let mut ochunk = olen;

                let mem = &mut self.mem[ch * self.mem_alloc_size..][..self.mem_alloc_size];
                match input {
                    Some(input) => {
                        for j in 0..ichunk {
                            mem[filt_offs + j] = input[in_pos + j * in_stride];
                        }
                    }
                    // Null input signals flush mode: feed zeros.
                    None => mem[filt_offs..filt_offs + ichunk].fill(0.0),
                }

                self.process_native(ch, &mut ichunk, out, out_pos, out_stride, &mut ochunk);
                ilen -= ichunk;
                olen -= ochunk;
                out_pos += ochunk * out_stride;
                in_pos += ichunk * in_stride;
            }
        }
        *in_len -= ilen;
        *out_len -= olen;
    }

    /// Convolves out of the history buffer, then shifts the buffer left by
    /// the consumed count, keeping the last `filt_len - 1` samples as the
    /// next call's convolution window.
    fn process_native(
        &mut self,
        ch: usize,
        in_len: &mut usize,
        out: &mut [Sample],
        out_base: usize,
        out_stride: usize,
        out_len: &mut usize,
    ) {
        self.started = true;
        let alloc = self.mem_alloc_size;
        let base = ch * alloc;
        let n = self.filter.filt_len;

        let produced = self.filter.run(
            &mut self.state[ch],
            &self.mem[base..base + alloc],
            *in_len,
            out,
            out_base,
            out_stride,
            *out_len,
        );

        let st = &mut self.state[ch];
        if st.cursor < *in_len {
            *in_len = st.cursor;
        }
        *out_len = produced;
        st.cursor -= *in_len;

        let consumed = *in_len;
        self.mem.copy_within(base + consumed..base + consumed + n - 1, base);
    }

    /// Consumes pending magic samples as virtual input, producing output
    /// without accepting any caller data. Returns frames produced.
    fn drain_magic(
        &mut self,
        ch: usize,
        out: &mut [Sample],
        out_base: usize,
        out_stride: usize,
        out_len: usize,
    ) -> usize {
        let n = self.filter.filt_len;
        let mut consumed = self.state[ch].magic;
        let mut produced = out_len;
        self.process_native(ch, &mut consumed, out, out_base, out_stride, &mut produced);

        let st = &mut self.state[ch];
        st.magic -= consumed;
        let left = st.magic;
        if left > 0 {
            // Not all virtual input fit; slide the remainder down behind the
            // retained history window for the next call.
            let base = ch * self.mem_alloc_size;
            self.mem
                .copy_within(base + n - 1 + consumed..base + n - 1 + consumed + left, base + n - 1);
        }
        produced
    }

    /// Rebuilds the filter table for the current ratio and quality, then
    /// migrates per-channel history across any filter-length change.
    ///
    /// Growing the filter first re-inserts pending magic samples as if the
    /// previous shrink never happened, then pads the window with leading
    /// zeros and advances the cursor by half the length delta. Shrinking
    /// turns the now-excess leading history into magic samples instead of
    /// discarding it, so no audio is lost or duplicated.
    fn update_filter(&mut self) {
        let old_length = self.filter.filt_len;
        self.filter = SincFilter::build(self.num_rate, self.den_rate, self.quality);
        self.rebuilds += 1;
        tracing::debug!(
            filt_len = self.filter.filt_len,
            oversample = self.filter.oversample,
            kernel = ?self.filter.kernel,
            cutoff = self.filter.cutoff,
            "rebuilt sinc filter table"
        );

        let filt_len = self.filter.filt_len;
        let channels = self.channels as usize;

        if !self.started {
            // Nothing streamed yet: size the arena for the new filter and
            // start from silence.
            self.mem_alloc_size = filt_len - 1 + BUFFER_SIZE;
            self.mem = vec![0.0; channels * self.mem_alloc_size];
            return;
        }

        if filt_len > old_length {
            self.grow_history(old_length);
        } else if filt_len < old_length {
            self.shrink_history(old_length);
        }
    }

    fn grow_history(&mut self, old_length: usize) {
        let filt_len = self.filter.filt_len;
        let channels = self.channels as usize;
        let old_alloc = self.mem_alloc_size;
        let new_alloc = old_alloc.max(filt_len - 1 + BUFFER_SIZE);

        if new_alloc > old_alloc {
            let mut grown = vec![0.0; channels * new_alloc];
            for ch in 0..channels {
                grown[ch * new_alloc..][..old_alloc]
                    .copy_from_slice(&self.mem[ch * old_alloc..][..old_alloc]);
            }
            self.mem = grown;
            self.mem_alloc_size = new_alloc;
        }
        let alloc = self.mem_alloc_size;

        for ch in 0..channels {
            let st = &mut self.state[ch];
            let mem = &mut self.mem[ch * alloc..][..alloc];
            let magic = st.magic;

            // Re-insert pending magic samples where they came from, as if
            // the previous shrink had never happened.
            let olen = old_length + 2 * magic;
            if magic > 0 {
                let kept = (old_length - 1 + magic).min(alloc - magic);
                mem.copy_within(0..kept, magic);
                mem[..magic].fill(0.0);
                st.magic = 0;
            }

            if filt_len > olen {
                // Still longer than the augmented history: shift it to the
                // end of the new window and zero-pad the leading gap.
                mem.copy_within(0..olen - 1, filt_len - olen);
                mem[..filt_len - olen].fill(0.0);
                st.cursor += (filt_len - olen) / 2;
            } else {
                // The augmented history already covers the new window; the
                // overshoot becomes magic samples again.
                st.magic = (olen - filt_len) / 2;
                let count = (filt_len - 1 + st.magic).min(alloc - st.magic);
                mem.copy_within(st.magic..st.magic + count, 0);
            }
        }
    }

    fn shrink_history(&mut self, old_length: usize) {
        let filt_len = self.filter.filt_len;
        let alloc = self.mem_alloc_size;

        for ch in 0..self.channels as usize {
            let st = &mut self.state[ch];
            let mem = &mut self.mem[ch * alloc..][..alloc];

            // The leading samples no longer covered by the shorter window
            // become magic samples, consumed as virtual input next call.
            let delta = (old_length - filt_len) / 2;
            let count = (filt_len - 1 + delta + st.magic).min(alloc - delta);
            mem.copy_within(delta..delta + count, 0);
            st.magic += delta;
        }
    }

    #[cfg(test)]
    pub(crate) fn table_rebuilds(&self) -> u64 {
        self.rebuilds
    }

    #[cfg(test)]
    pub(crate) fn magic_samples(&self, ch: usize) -> usize {
        self.state[ch].magic
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_invalid_arguments() {
        assert!(matches!(
            Resampler::new(0, 44100, 48000, 5),
            Err(ResampleError::NoChannels)
        ));
        assert!(matches!(
            Resampler::new(2, 0, 48000, 5),
            Err(ResampleError::ZeroRate)
        ));
        assert!(matches!(
            Resampler::new(2, 44100, 0, 5),
            Err(ResampleError::ZeroRate)
        ));
        assert!(matches!(
            Resampler::new(2, 44100, 48000, 11),
            Err(ResampleError::QualityOutOfRange(11))
        ));
        assert!(matches!(
            Resampler::new_frac(2, 0, 1, 44100, 48000, 5),
            Err(ResampleError::ZeroRate)
        ));
    }

    #[test]
    fn ratio_is_reduced_to_lowest_terms() {
        let rs = Resampler::new(1, 44100, 48000, 5).unwrap();
        assert_eq!(rs.ratio(), (147, 160));
        let rs = Resampler::new(1, 8000, 16000, 5).unwrap();
        assert_eq!(rs.ratio(), (1, 2));
    }

    #[test]
    fn set_quality_is_idempotent() {
        let mut rs = Resampler::new(2, 44100, 48000, 5).unwrap();
        let builds = rs.table_rebuilds();
        rs.set_quality(5).unwrap();
        rs.set_quality(5).unwrap();
        assert_eq!(rs.table_rebuilds(), builds);
        rs.set_quality(7).unwrap();
        assert_eq!(rs.table_rebuilds(), builds + 1);
    }

    #[test]
    fn set_rate_is_idempotent() {
        let mut rs = Resampler::new(2, 44100, 48000, 5).unwrap();
        let builds = rs.table_rebuilds();
        rs.set_rate(44100, 48000).unwrap();
        rs.set_rate_frac(147, 160, 44100, 48000).unwrap();
        assert_eq!(rs.table_rebuilds(), builds);
    }

    #[test]
    fn failed_reconfiguration_leaves_state_untouched() {
        let mut rs = Resampler::new(2, 44100, 48000, 5).unwrap();
        let builds = rs.table_rebuilds();
        assert!(rs.set_quality(42).is_err());
        assert!(rs.set_rate(0, 48000).is_err());
        assert_eq!(rs.quality(), 5);
        assert_eq!(rs.rate(), (44100, 48000));
        assert_eq!(rs.table_rebuilds(), builds);
    }

    #[test]
    fn doubling_rate_doubles_sample_count() {
        // 1 ch, 8 kHz -> 16 kHz, quality 5: 160 zeros in, 320 samples out,
        // everything consumed in one call, no magic samples involved.
        let mut rs = Resampler::new(1, 8000, 16000, 5).unwrap();
        let input = [0.0f32; 160];
        let mut output = [1.0f32; 400];
        let done = rs.process_interleaved(&input, &mut output);
        assert_eq!(
            done,
            Processed {
                input_frames: 160,
                output_frames: 320
            }
        );
        assert_eq!(rs.magic_samples(0), 0);
        assert!(output[..320].iter().all(|s| *s == 0.0));
    }

    #[test]
    fn halving_rate_halves_sample_count() {
        // 2 ch interleaved, 44.1 kHz -> 22.05 kHz, quality 10.
        let mut rs = Resampler::new(2, 44100, 22050, 10).unwrap();
        let input = vec![0.0f32; 2 * 1000];
        let mut output = vec![0.0f32; 2 * 700];
        let done = rs.process_interleaved(&input, &mut output);
        assert_eq!(done.input_frames, 1000);
        // Allow up to half a filter length of start-up shortfall.
        let slack = rs.input_latency() / 2;
        assert!(
            (500 - slack..=500).contains(&done.output_frames),
            "got {} frames",
            done.output_frames
        );
    }

    #[test]
    fn zero_length_io_is_a_no_op() {
        let mut rs = Resampler::new(2, 48000, 44100, 5).unwrap();
        let mut output = vec![0.0f32; 64];
        let done = rs.process_interleaved(&[], &mut output);
        assert_eq!(done.input_frames, 0);
        assert_eq!(done.output_frames, 0);

        let input = vec![0.0f32; 64];
        let done = rs.process_interleaved(&input, &mut []);
        assert_eq!(done.output_frames, 0);
    }

    #[test]
    fn latencies_are_conserved() {
        for (from, to) in [(48000, 44100), (44100, 48000)] {
            let rs = Resampler::new(1, from, to, 5).unwrap();
            let (num, den) = rs.ratio();
            let expected = (rs.input_latency() * den as usize + num as usize / 2) / num as usize;
            assert_eq!(rs.output_latency(), expected);
        }
    }

    #[test]
    fn input_frames_for_covers_requested_output() {
        let rs = Resampler::new(1, 44100, 48000, 5).unwrap();
        // 160 output frames need 147 input frames at 147:160.
        assert_eq!(rs.input_frames_for(160), 147);
        assert_eq!(rs.input_frames_for(161), 148);

        let rs = Resampler::new(1, 48000, 16000, 5).unwrap();
        assert_eq!(rs.input_frames_for(100), 300);
    }

    #[test]
    fn reset_restores_initial_behaviour() {
        let mut rs = Resampler::new(1, 32000, 48000, 4).unwrap();
        let input: Vec<f32> = (0..256).map(|i| (i as f32 * 0.1).sin()).collect();
        let mut first = vec![0.0f32; 512];
        let a = rs.process_interleaved(&input, &mut first);

        rs.reset();
        let mut second = vec![0.0f32; 512];
        let b = rs.process_interleaved(&input, &mut second);

        assert_eq!(a, b);
        assert_eq!(first, second);
    }

    #[test]
    fn skip_zeros_removes_leading_silence() {
        let mut rs = Resampler::new(1, 44100, 44100, 5).unwrap();
        rs.skip_zeros();
        let input = vec![0.5f32; 200];
        let mut output = vec![0.0f32; 200];
        let done = rs.process_interleaved(&input, &mut output);
        // 1:1 passthrough with the delay skipped: signal from the start.
        assert!(done.output_frames > 0);
        assert!(output[0].abs() > 0.2, "still silent: {}", output[0]);
    }
}
