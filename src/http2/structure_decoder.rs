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

//! Incremental reader for fixed-size structures split across stream chunks.

use crate::decode_buffer::DecodeBuffer;
use crate::decode_status::DecodeStatus;
use crate::http2::frame_header::FRAME_HEADER_SIZE;
use crate::http2::structures::Structure;

/// Size of the largest structure, the frame header.
const BUFFER_SIZE: usize = FRAME_HEADER_SIZE;

/// Accumulates the bytes of one fixed-size structure across calls.
///
/// When the whole structure is available it is decoded in place and nothing is copied. Only a
/// structure that straddles two chunks passes through the internal buffer.
#[derive(Debug,Default)]
pub struct StructureDecoder {
    buffer: [u8; BUFFER_SIZE],
    offset: usize
}

impl StructureDecoder {
    /// Create a new `StructureDecoder`.
    pub fn new() -> StructureDecoder {
        StructureDecoder::default()
    }

    /// Start decoding `S`, without a payload bound.
    ///
    /// Returns `true` once `out` holds the decoded structure.
    pub fn start<S: Structure>(&mut self, out: &mut S, db: &mut DecodeBuffer) -> bool {
        if db.remaining() >= S::ENCODED_SIZE {
            *out = S::decode(db);

            return true;
        }

        self.offset = 0;
        self.fill_buffer(db, S::ENCODED_SIZE, usize::MAX);

        false
    }

    /// Resume decoding `S`, without a payload bound.
    pub fn resume<S: Structure>(&mut self, out: &mut S, db: &mut DecodeBuffer) -> bool {
        if self.fill_buffer(db, S::ENCODED_SIZE, usize::MAX) == 0 {
            *out = self.decode_buffer();

            return true;
        }

        false
    }

    /// Start decoding `S` from a payload with `remaining_payload` bytes left.
    ///
    /// Returns `DecodeStatus::Error` when the payload ends before the structure does.
    pub fn start_in_payload<S: Structure>(&mut self, out: &mut S, db: &mut DecodeBuffer,
                                          remaining_payload: &mut usize) -> DecodeStatus {
        if db.remaining() >= S::ENCODED_SIZE && *remaining_payload >= S::ENCODED_SIZE {
            *out = S::decode(db);

            *remaining_payload -= S::ENCODED_SIZE;

            return DecodeStatus::Done;
        }

        self.offset = 0;

        self.copy_in_payload(db, S::ENCODED_SIZE, remaining_payload);

        if *remaining_payload == 0 && self.offset < S::ENCODED_SIZE {
            return DecodeStatus::Error;
        }

        DecodeStatus::InProgress
    }

    /// Resume decoding `S` from a payload with `remaining_payload` bytes left.
    pub fn resume_in_payload<S: Structure>(&mut self, out: &mut S, db: &mut DecodeBuffer,
                                           remaining_payload: &mut usize) -> DecodeStatus {
        self.copy_in_payload(db, S::ENCODED_SIZE, remaining_payload);

        if self.offset == S::ENCODED_SIZE {
            *out = self.decode_buffer();

            DecodeStatus::Done
        } else if *remaining_payload > 0 {
            DecodeStatus::InProgress
        } else {
            DecodeStatus::Error
        }
    }

    /// Retrieve the count of bytes buffered so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Copy bytes of a structure bounded by the payload.
    fn copy_in_payload(&mut self, db: &mut DecodeBuffer, target_size: usize,
                       remaining_payload: &mut usize) {
        let before = db.remaining();

        self.fill_buffer(db, target_size, *remaining_payload);

        *remaining_payload -= before - db.remaining();
    }

    /// Copy up to `limit` bytes towards `target_size`, returning the count still needed.
    fn fill_buffer(&mut self, db: &mut DecodeBuffer, target_size: usize, limit: usize) -> usize {
        debug_assert!(target_size <= BUFFER_SIZE);
        debug_assert!(self.offset <= target_size);

        let needed = target_size - self.offset;
        let length = db.min_length_remaining(if needed < limit { needed } else { limit });

        self.buffer[self.offset..self.offset + length].copy_from_slice(&db.cursor()[..length]);

        db.advance_cursor(length);

        self.offset += length;

        needed - length
    }

    /// Decode the buffered bytes.
    fn decode_buffer<S: Structure>(&self) -> S {
        let mut db = DecodeBuffer::new(&self.buffer[..S::ENCODED_SIZE]);

        S::decode(&mut db)
    }
}
