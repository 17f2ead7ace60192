//! Deterministic WAV encoder.
//!
//! Writes 16-bit mono PCM WAV files with no timestamps or metadata chunks,
//! so identical buffers always encode to identical bytes. The BLAKE3 hash
//! of the PCM payload identifies a render independently of the header.

mod format;
mod pcm;
mod result;
mod writer;


pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data, pcm16_to_samples};
pub use result::WavResult;
pub use writer::{samples_to_pcm16, wav_header, write_wav_to_vec, WAV_HEADER_LEN};
