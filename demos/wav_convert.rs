//! Converts a WAV file to a different sample rate.
//!
//! ```text
//! cargo run --example wav_convert -- input.wav output.wav 48000 [quality]
//! ```

use rateshift::Resampler;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let (input_path, output_path, target_rate) = match (args.next(), args.next(), args.next()) {
        (Some(i), Some(o), Some(r)) => (i, o, r.parse::<u32>()?),
        _ => {
            eprintln!("usage: wav_convert <input.wav> <output.wav> <rate> [quality]");
            std::process::exit(2);
        }
    };
    let quality: u8 = args.next().map(|q| q.parse()).transpose()?.unwrap_or(5);

    let mut reader = hound::WavReader::open(&input_path)?;
    let spec = reader.spec();
    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().collect::<Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let scale = 1.0 / (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|s| s as f32 * scale))
                .collect::<Result<_, _>>()?
        }
    };

    let channels = spec.channels;
    let mut resampler = Resampler::new(channels, spec.sample_rate, target_rate, quality)?;
    resampler.skip_zeros();

    let mut writer = hound::WavWriter::create(
        &output_path,
        hound::WavSpec {
            channels,
            sample_rate: target_rate,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        },
    )?;

    let mut out = vec![0.0f32; channels as usize * 8192];
    let mut offset = 0;
    while offset < samples.len() {
        let done = resampler.process_interleaved(&samples[offset..], &mut out);
        offset += channels as usize * done.input_frames;
        for &sample in &out[..channels as usize * done.output_frames] {
            writer.write_sample(sample)?;
        }
        if done.input_frames == 0 && done.output_frames == 0 {
            break;
        }
    }

    // Push the trailing half-window out with silence.
    let done = resampler.drain_interleaved(resampler.input_latency(), &mut out);
    for &sample in &out[..channels as usize * done.output_frames] {
        writer.write_sample(sample)?;
    }

    writer.finalize()?;
    println!(
        "{input_path}: {} Hz -> {output_path}: {target_rate} Hz (quality {quality})",
        spec.sample_rate
    );
    Ok(())
}
