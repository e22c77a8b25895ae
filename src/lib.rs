//! Streaming band-limited sample rate conversion.
//!
//! `rateshift` converts f32 audio between sampling rates at any rational
//! ratio, using windowed-sinc interpolation for anti-aliased, perceptually
//! clean output. It is built for chunked, real-time use: feed it arbitrarily
//! sized pieces of a stream and it keeps the signal continuous across calls,
//! across quality changes, and across ratio changes.
//!
//! # Quick start
//!
//! ```
//! use rateshift::Resampler;
//!
//! // Stereo, 44.1 kHz -> 48 kHz, quality 5 (0 = fastest, 10 = best).
//! let mut resampler = Resampler::new(2, 44100, 48000, 5)?;
//!
//! let input = vec![0.0f32; 2 * 441]; // interleaved frames
//! let mut output = vec![0.0f32; 2 * 512];
//! let done = resampler.process_interleaved(&input, &mut output);
//!
//! // Short reads and writes are normal: resubmit what was not consumed.
//! assert!(done.input_frames <= 441);
//! assert!(done.output_frames <= 512);
//! # Ok::<(), rateshift::ResampleError>(())
//! ```
//!
//! # Chunked streaming
//!
//! A processing call consumes and produces as much as fits and reports both
//! counts in [`Processed`]; unconsumed input must be offered again on the
//! next call. This makes the engine a direct fit for fixed-size real-time
//! callbacks, with no unbounded buffering on either side. To flush the tail
//! of a finite stream, use [`Resampler::drain_interleaved`] (or
//! [`Resampler::drain_parallel`]) to push the last buffered samples out with
//! virtual silence.
//!
//! # Threading
//!
//! An engine owns all of its state, so separate instances can run on
//! separate threads freely. A single instance is `&mut self` throughout:
//! configuration changes and processing are serialised by the borrow checker.

mod channel;
mod common;
mod engine;
mod filter;
mod kernel;
pub mod math;
mod quality;
mod window;

pub use common::{ChannelCount, Sample, SampleRate};
pub use engine::{Processed, ResampleError, Resampler};
pub use quality::MAX_QUALITY;
