// Audio file decoding via Symphonia.
//
// Decodes an entire file to mono f32 at its native sample rate — the input
// the analysis pipeline consumes. Stereo and multichannel audio is averaged
// down to mono; corrupted packets are skipped with a warning rather than
// aborting the whole decode.

use std::path::Path;
use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::conv::FromSample;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::AnalysisError;

/// A fully decoded mono recording, ready for chord analysis
#[derive(Debug, Clone)]
pub struct MonoAudio {
    /// Mono samples in [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// Native sample rate of the source (e.g. 44100, 48000)
    pub sample_rate: u32,
}

impl MonoAudio {
    /// Duration of the recording in seconds
    pub fn duration_seconds(&self) -> f32 {
        if self.sample_rate == 0 {
            0.0
        } else {
            self.samples.len() as f32 / self.sample_rate as f32
        }
    }
}

/// Decode an audio file to mono f32 samples.
///
/// Probes the container format (WAV, MP3, FLAC, OGG, ...), decodes every
/// packet of the default audio track, converts each sample format to f32 and
/// mixes all channels down to mono. The samples are not resampled; they stay
/// at the file's native rate, which the analysis carries alongside them.
pub fn decode_to_mono(path: &Path) -> Result<MonoAudio, AnalysisError> {
    let file = std::fs::File::open(path)
        .map_err(|e| AnalysisError::Decode(format!("failed to open {}: {}", path.display(), e)))?;

    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension() {
        hint.with_extension(&ext.to_string_lossy());
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| AnalysisError::Decode(format!("unsupported format: {}", e)))?;

    let mut format_reader = probed.format;

    let track = format_reader
        .default_track()
        .ok_or_else(|| AnalysisError::Decode("no audio tracks found".to_string()))?;

    let track_id = track.id;
    let sample_rate = track.codec_params.sample_rate.unwrap_or(44100);

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| AnalysisError::Decode(format!("unsupported codec: {}", e)))?;

    let mut samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format_reader.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break; // end of file
            }
            Err(e) => return Err(AnalysisError::Decode(format!("error reading packet: {}", e))),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            Err(symphonia::core::errors::Error::DecodeError(msg)) => {
                // Corrupted packet: skip it and keep going
                eprintln!("[decoder] Skipping corrupted packet: {}", msg);
                continue;
            }
            Err(e) => return Err(AnalysisError::Decode(format!("decode error: {}", e))),
        };

        append_mono(&decoded, &mut samples);
    }

    Ok(MonoAudio {
        samples,
        sample_rate,
    })
}

/// Append one decoded buffer to the output, converted to f32 and mixed to mono
fn append_mono(decoded: &AudioBufferRef, out: &mut Vec<f32>) {
    match decoded {
        AudioBufferRef::U8(buf) => mix_into(buf, out),
        AudioBufferRef::U16(buf) => mix_into(buf, out),
        AudioBufferRef::U24(buf) => mix_into(buf, out),
        AudioBufferRef::U32(buf) => mix_into(buf, out),
        AudioBufferRef::S8(buf) => mix_into(buf, out),
        AudioBufferRef::S16(buf) => mix_into(buf, out),
        AudioBufferRef::S24(buf) => mix_into(buf, out),
        AudioBufferRef::S32(buf) => mix_into(buf, out),
        AudioBufferRef::F32(buf) => mix_into(buf, out),
        AudioBufferRef::F64(buf) => mix_into(buf, out),
    }
}

/// Convert any sample format to f32 and average all channels to mono
fn mix_into<S>(buf: &symphonia::core::audio::AudioBuffer<S>, out: &mut Vec<f32>)
where
    S: symphonia::core::sample::Sample,
    f32: FromSample<S>,
{
    let channels = buf.spec().channels.count();
    let frames = buf.frames();

    if channels == 0 || frames == 0 {
        return;
    }

    if channels == 1 {
        out.extend(buf.chan(0).iter().map(|&s| f32::from_sample(s)));
        return;
    }

    let base = out.len();
    out.resize(base + frames, 0.0);
    let scale = 1.0 / channels as f32;
    for ch in 0..channels {
        for (i, &sample) in buf.chan(ch).iter().enumerate() {
            out[base + i] += f32::from_sample(sample) * scale;
        }
    }
}
