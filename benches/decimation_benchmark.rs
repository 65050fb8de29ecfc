//! Timing harness for the preprocessing chain
//!
//! Measures mono reduction and decimation on a few buffer lengths, plus the
//! cursor-driven in-place filter pattern the buffer is designed for.

use audio_data::{AudioChannelOps, AudioData, AudioDecimation, AudioFormat, DecimationMethod};
use std::time::Instant;

/// Generate interleaved stereo test data (440 Hz left, 660 Hz right)
fn generate_test_audio(duration_seconds: f64, frame_rate: u32) -> AudioData {
    let frames = (duration_seconds * f64::from(frame_rate)) as usize;
    let mut samples = Vec::with_capacity(frames * 2);
    for i in 0..frames {
        let t = i as f64 / f64::from(frame_rate);
        samples.push(((2.0 * std::f64::consts::PI * 440.0 * t).sin() * 0.5) as f32);
        samples.push(((2.0 * std::f64::consts::PI * 660.0 * t).sin() * 0.5) as f32);
    }
    AudioData::from_interleaved(samples, AudioFormat::stereo(frame_rate).expect("valid format"))
        .expect("finite samples")
}

/// Three-tap moving average run in place through the cursor pair
fn cursor_filter(audio: &mut AudioData) {
    let mut history = [0.0f32; 2];
    audio.reset_cursors();
    while audio.read_cursor_in_bounds() {
        let current = audio.sample_at_read_cursor();
        audio.set_sample_at_write_cursor((current + history[0] + history[1]) / 3.0);
        history = [current, history[0]];
        audio.advance_read_cursor(1);
        audio.advance_write_cursor(1);
    }
}

fn benchmark(duration: f64, label: &str) {
    let frame_rate = 44100;
    let source = generate_test_audio(duration, frame_rate);
    println!(
        "Benchmarking {}: {:.1}s audio, {} samples",
        label,
        duration,
        source.sample_count()
    );

    let iterations = 10;

    let mut total = 0.0;
    for _ in 0..iterations {
        let mut audio = source.clone();
        let start = Instant::now();
        audio.reduce_to_mono();
        total += start.elapsed().as_secs_f64();
    }
    println!("  reduce_to_mono:      {:.3}ms", total / iterations as f64 * 1000.0);

    for method in [DecimationMethod::Shortcut, DecimationMethod::BlockMean] {
        let mut total = 0.0;
        for _ in 0..iterations {
            let mut audio = source.clone();
            audio.reduce_to_mono();
            let start = Instant::now();
            audio.decimate(10, method).expect("mono input");
            total += start.elapsed().as_secs_f64();
        }
        println!(
            "  decimate x10 {:<9} {:.3}ms",
            format!("{method:?}:"),
            total / iterations as f64 * 1000.0
        );
    }

    let mut total = 0.0;
    for _ in 0..iterations {
        let mut audio = source.clone();
        audio.reduce_to_mono();
        let start = Instant::now();
        cursor_filter(&mut audio);
        total += start.elapsed().as_secs_f64();
    }
    println!("  cursor filter:       {:.3}ms", total / iterations as f64 * 1000.0);
}

fn main() {
    println!("Preprocessing Benchmark");
    println!("=======================");

    benchmark(5.0, "Short clip");
    benchmark(30.0, "Medium clip");
    benchmark(180.0, "Full track");
}
