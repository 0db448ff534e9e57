// +-----------------------------------------------------------------------------------------------+
// | Copyright 2016 Sean Kerr                                                                      |
// |                                                                                               |
// | Licensed under the Apache License, Version 2.0 (the "License");                               |
// | you may not use this file except in compliance with the License.                              |
// | You may obtain a copy of the License at                                                       |
// |                                                                                               |
// |  http://www.apache.org/licenses/LICENSE-2.0                                                   |
// |                                                                                               |
// | Unless required by applicable law or agreed to in writing, software                           |
// | distributed under the License is distributed on an "AS IS" BASIS,                             |
// | WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.                      |
// | See the License for the specific language governing permissions and                           |
// | limitations under the License.                                                                |
// +-----------------------------------------------------------------------------------------------+
// | Author: Sean Kerr <sean@metatomic.io>                                                         |
// +-----------------------------------------------------------------------------------------------+

use crate::decode_buffer::DecodeBuffer;
use crate::decode_status::DecodeStatus;
use crate::http2::*;
use crate::http2::payload::DecodePayload;

use rand::rngs::StdRng;
use rand::{ Rng, SeedableRng };

macro_rules! pack_bytes {
    ($buffer:expr, $bytes:expr) => ({
        $buffer.extend_from_slice($bytes);
    });
}

macro_rules! pack_u8 {
    ($buffer:expr, $byte:expr) => ({
        $buffer.push($byte);
    });
}

macro_rules! pack_u16 {
    ($buffer:expr, $bytes:expr) => ({
        $buffer.push(($bytes as u16 >> 8) as u8);
        $buffer.push(($bytes as u16 & 0xFF) as u8);
    });
}

macro_rules! pack_u32 {
    ($buffer:expr, $bytes:expr) => ({
        $buffer.push(($bytes as u32 >> 24) as u8);
        $buffer.push((($bytes as u32 >> 16) & 0xFF) as u8);
        $buffer.push((($bytes as u32 >> 8) & 0xFF) as u8);
        $buffer.push(($bytes as u32 & 0xFF) as u8);
    });
}

macro_rules! pack_frame_header {
    ($buffer:expr, $length:expr, $frame_type:expr, $flags:expr, $stream_id:expr) => ({
        // payload length and type
        pack_u32!($buffer, (($length as u32) << 8) | ($frame_type as u32));

        pack_u8!($buffer, $flags);

        // reserved bit and stream id
        pack_u32!($buffer, $stream_id);
    });
}

// -------------------------------------------------------------------------------------------------

/// Count of random chunkings tried by `assert_resumable()`.
const RANDOM_SPLITS: usize = 50;

/// Outcome of decoding a stream.
#[derive(Debug,PartialEq)]
pub struct Decoded {
    /// Byte count reported by the decoder.
    pub byte_count: usize,

    /// Errors in the order they were returned.
    pub errors: Vec<FrameError>,

    /// Collected frames.
    pub frames: Vec<FrameParts>,

    /// Final decoder state.
    pub state: DecoderState
}

/// Feed `chunks` to `decoder`, resuming after every error.
pub fn decode_chunks_with(mut decoder: Http2FrameDecoder<FramePartsCollector>,
                          chunks: &[&[u8]]) -> Decoded {
    let mut errors = Vec::new();

    for chunk in chunks {
        let mut offset = 0;

        loop {
            let before = decoder.byte_count();

            match decoder.resume(&chunk[offset..]) {
                Ok(length) => {
                    assert_eq!(offset + length, chunk.len());
                    break;
                },
                Err(error) => {
                    offset += decoder.byte_count() - before;

                    errors.push(error);
                }
            }
        }
    }

    Decoded{
        byte_count: decoder.byte_count(),
        errors:     errors,
        state:      decoder.state(),
        frames:     decoder.into_listener().into_frames()
    }
}

/// Feed `chunks` to a new decoder.
pub fn decode_chunks(chunks: &[&[u8]]) -> Decoded {
    decode_chunks_with(Http2FrameDecoder::new(FramePartsCollector::new()), chunks)
}

/// Decode `stream` in a single chunk.
pub fn decode(stream: &[u8]) -> Decoded {
    decode_chunks(&[stream])
}

/// Decode `stream` split at each of the ascending offsets in `points`.
pub fn decode_split_at(stream: &[u8], points: &[usize]) -> Decoded {
    let mut chunks = Vec::new();
    let mut start  = 0;

    for &point in points {
        chunks.push(&stream[start..point]);

        start = point;
    }

    chunks.push(&stream[start..]);

    decode_chunks(&chunks)
}

/// Split `stream` into non-empty chunks of random length.
pub fn random_chunks<'a>(stream: &'a [u8], rng: &mut StdRng) -> Vec<&'a [u8]> {
    let mut chunks = Vec::new();
    let mut offset = 0;

    while offset < stream.len() {
        let length = rng.random_range(1..=stream.len() - offset);

        chunks.push(&stream[offset..offset + length]);

        offset += length;
    }

    chunks
}

/// Decode `stream` in one chunk, and check that every two-chunk split, a byte at a time, and a
/// number of random chunkings all produce the same outcome.
pub fn assert_resumable(stream: &[u8]) -> Decoded {
    let expected = decode(stream);

    for point in 1..stream.len() {
        assert_eq!(decode_split_at(stream, &[point]), expected, "split at {}", point);
    }

    let bytes = stream.chunks(1).collect::<Vec<&[u8]>>();

    assert_eq!(decode_chunks(&bytes), expected, "one byte at a time");

    let mut rng = StdRng::seed_from_u64(0x0048_5454_5032);

    for _ in 0..RANDOM_SPLITS {
        let chunks = random_chunks(stream, &mut rng);

        assert_eq!(decode_chunks(&chunks), expected, "chunk lengths {:?}",
                   chunks.iter().map(|chunk| chunk.len()).collect::<Vec<usize>>());
    }

    expected
}

/// Run payload decoder `D` directly over the payload `chunks`, returning the status of each
/// call along with the collected parts of the frame.
///
/// Decoding stops at the first call that does not return `DecodeStatus::InProgress`.
pub fn decode_payload<D>(header: FrameHeader, chunks: &[&[u8]]) -> (Vec<DecodeStatus>, FrameParts)
where D: DecodePayload + Default {
    let mut decoder  = D::default();
    let mut state    = FrameDecoderState::new(FramePartsCollector::new());
    let mut statuses = Vec::new();

    state.set_frame_header(header);

    assert!(state.listener_mut().on_frame_header(&header));

    for (index, chunk) in chunks.iter().enumerate() {
        let mut db = DecodeBuffer::new(chunk);

        let status = if index == 0 {
            decoder.start_decoding_payload(&mut state, &mut db)
        } else {
            decoder.resume_decoding_payload(&mut state, &mut db)
        };

        statuses.push(status);

        if status != DecodeStatus::InProgress {
            break;
        }
    }

    let mut frames = state.into_listener().into_frames();

    assert_eq!(frames.len(), 1);

    (statuses, frames.remove(0))
}

/// Create a frame header.
pub fn header(payload_length: u32, frame_type: FrameType, flags: u8, stream_id: u32)
-> FrameHeader {
    FrameHeader::new(payload_length, frame_type, Flags::from_u8(flags), stream_id)
}

// -------------------------------------------------------------------------------------------------

mod data;
mod frame_decoder;
mod frame_error;
mod headers;
mod ping;
mod priority_update;
