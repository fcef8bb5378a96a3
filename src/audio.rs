//! Audio file loading and resampling for batch transcription.
//!
//! Decodes WAV recordings, downmixes to mono, and resamples to the 16kHz
//! rate the speech models expect. Decoding failures are per-file: the batch
//! driver logs them and moves on.

use std::path::Path;

use audioadapter_buffers::direct::SequentialSliceOfVecs;
use rubato::audioadapter::Adapter;
use rubato::{Fft, FixedSync, Resampler};

use crate::error::{LexivoxError, Result};

/// Target sample rate for speech recognition models.
pub const TARGET_SAMPLE_RATE: u32 = 16000;

/// Input samples fed to the resampler per processing chunk.
const RESAMPLE_CHUNK: usize = 1024;

/// Audio buffer containing mono f32 samples at a known sample rate.
#[derive(Debug, Clone)]
pub struct AudioBuffer {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl AudioBuffer {
    /// Create a new audio buffer.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Duration of the buffer in seconds.
    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / self.sample_rate as f32
    }
}

/// Convert multi-channel interleaved samples to mono by averaging all channels.
pub fn to_mono(samples: &[f32], channels: u16) -> Vec<f32> {
    if channels == 1 {
        return samples.to_vec();
    }

    let channels = channels as usize;
    samples
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}

/// Resampler for converting audio between sample rates.
pub struct AudioResampler {
    resampler: Fft<f32>,
    chunk_size_in: usize,
}

impl AudioResampler {
    /// Create a new resampler.
    ///
    /// # Arguments
    /// * `input_rate` - Input sample rate in Hz
    /// * `output_rate` - Output sample rate in Hz
    /// * `chunk_size` - Number of input samples per processing chunk
    pub fn new(input_rate: u32, output_rate: u32, chunk_size: usize) -> Result<Self> {
        let resampler = Fft::new(
            input_rate as usize,
            output_rate as usize,
            chunk_size,
            1, // sub_chunks
            1, // channels
            FixedSync::Input,
        )
        .map_err(|e| LexivoxError::AudioRead(e.to_string()))?;

        Ok(Self {
            resampler,
            chunk_size_in: chunk_size,
        })
    }

    /// Resample audio data. Input length must be a multiple of chunk_size.
    pub fn process(&mut self, input: &[f32]) -> Result<Vec<f32>> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let mut output = Vec::new();
        let input_chunks = input.chunks_exact(self.chunk_size_in);

        for chunk in input_chunks {
            let input_vecs = vec![chunk.to_vec()];
            let input_adapter =
                SequentialSliceOfVecs::new(&input_vecs, 1, chunk.len()).expect("valid input");
            let resampled = self
                .resampler
                .process(&input_adapter, 0, None)
                .map_err(|e| LexivoxError::AudioRead(e.to_string()))?;

            // Extract samples from the InterleavedOwned buffer
            for frame_idx in 0..resampled.frames() {
                output.push(resampled.read_sample(0, frame_idx).unwrap_or(0.0));
            }
        }

        Ok(output)
    }

    /// Get the required input chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size_in
    }
}

/// Load a WAV file as a mono [`AudioBuffer`] at its native sample rate.
pub fn load_wav(path: &Path) -> Result<AudioBuffer> {
    let mut reader =
        hound::WavReader::open(path).map_err(|e| LexivoxError::AudioRead(e.to_string()))?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| LexivoxError::AudioRead(e.to_string()))?,
        hound::SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<_, _>>()
                .map_err(|e| LexivoxError::AudioRead(e.to_string()))?
        }
    };

    let mono = to_mono(&samples, spec.channels);
    Ok(AudioBuffer::new(mono, spec.sample_rate))
}

/// Resample a buffer to [`TARGET_SAMPLE_RATE`].
///
/// The tail is zero-padded to a whole resampler chunk; the padding decodes
/// as trailing silence.
pub fn resample_to_target(buffer: AudioBuffer) -> Result<Vec<f32>> {
    if buffer.sample_rate == TARGET_SAMPLE_RATE {
        return Ok(buffer.samples);
    }

    let mut resampler = AudioResampler::new(buffer.sample_rate, TARGET_SAMPLE_RATE, RESAMPLE_CHUNK)?;
    let chunk = resampler.chunk_size();

    let mut samples = buffer.samples;
    let remainder = samples.len() % chunk;
    if remainder != 0 {
        samples.resize(samples.len() + (chunk - remainder), 0.0);
    }

    resampler.process(&samples)
}

/// Decode an audio file into 16kHz mono f32 samples ready for transcription.
///
/// Only WAV recordings can be decoded; anything else fails with
/// [`LexivoxError::UnsupportedAudio`].
pub fn load_for_transcription(path: &Path) -> Result<Vec<f32>> {
    let is_wav = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"));
    if !is_wav {
        return Err(LexivoxError::UnsupportedAudio(path.to_path_buf()));
    }

    let buffer = load_wav(path)?;
    resample_to_target(buffer)
}

#[cfg(test)]
#[path = "audio_test.rs"]
mod tests;
