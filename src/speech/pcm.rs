use super::SpeechError;
use std::path::Path;

/// Little-endian 32-bit float samples. A trailing partial sample is an error.
pub fn decode_f32le(bytes: &[u8]) -> Result<Vec<f32>, SpeechError> {
    if bytes.len() % 4 != 0 {
        return Err(SpeechError::Encoding(format!(
            "PCM payload of {} bytes is not a whole number of f32 samples",
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Scale to 16-bit and write a mono WAV file.
pub fn write_wav_f32_mono(path: &Path, samples: &[f32], sample_rate: u32) -> Result<(), SpeechError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)
        .map_err(|e| SpeechError::Encoding(format!("failed to create wav writer: {e}")))?;

    for &s in samples {
        let clamped = s.clamp(-1.0, 1.0);
        let v = (clamped * i16::MAX as f32).round() as i16;
        writer
            .write_sample(v)
            .map_err(|e| SpeechError::Encoding(format!("failed to write wav sample: {e}")))?;
    }
    writer
        .finalize()
        .map_err(|e| SpeechError::Encoding(format!("failed to finalize wav: {e}")))?;
    Ok(())
}
