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

//! Bounds-checked cursor over a chunk of stream data.

use byte_slice::ByteStream;
use std::fmt;

/// Non-owning cursor over a chunk of stream data.
///
/// `DecodeBuffer` never copies the bytes it wraps. Slices handed out by
/// [`cursor()`](struct.DecodeBuffer.html#method.cursor) borrow the caller's chunk directly.
///
/// Advancing past the end of the chunk is a bug in the decoder, not malformed input, and is
/// caught by debug assertions only.
pub struct DecodeBuffer<'a> {
    context: ByteStream<'a>
}

impl<'a> DecodeBuffer<'a> {
    /// Create a new `DecodeBuffer` positioned at the start of `stream`.
    pub fn new(stream: &'a [u8]) -> DecodeBuffer<'a> {
        DecodeBuffer{
            context: ByteStream::new(stream)
        }
    }

    /// Create a new `DecodeBuffer` over at most `length` bytes starting at the cursor.
    ///
    /// The subset is independent of `self`. Once it has been consumed, advance `self` by
    /// [`subset.offset()`](struct.DecodeBuffer.html#method.offset).
    pub fn subset(&self, length: usize) -> DecodeBuffer<'a> {
        let length = self.min_length_remaining(length);

        DecodeBuffer::new(&self.cursor()[..length])
    }

    /// Retrieve the count of bytes not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        bs_available!(self.context)
    }

    /// Retrieve the smaller of `length` and the count of remaining bytes.
    #[inline]
    pub fn min_length_remaining(&self, length: usize) -> usize {
        if length < self.remaining() {
            length
        } else {
            self.remaining()
        }
    }

    /// Indicates that unconsumed bytes remain.
    #[inline]
    pub fn has_data(&self) -> bool {
        !bs_is_eos!(self.context)
    }

    /// Indicates that every byte has been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        bs_is_eos!(self.context)
    }

    /// Retrieve the count of bytes consumed so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.context.stream_index
    }

    /// Retrieve the unconsumed bytes.
    #[inline]
    pub fn cursor(&self) -> &'a [u8] {
        let stream: &'a [u8] = self.context.stream;

        &stream[self.context.stream_index..]
    }

    /// Consume `length` bytes.
    #[inline]
    pub fn advance_cursor(&mut self, length: usize) {
        debug_assert!(
            length <= self.remaining(),
            "advance of {} exceeds {} remaining bytes",
            length,
            self.remaining()
        );

        bs_jump!(self.context, length);
    }

    /// Decode a `u8`.
    #[inline]
    pub fn decode_u8(&mut self) -> u8 {
        debug_assert!(self.remaining() >= 1);

        let byte = self.context.stream[self.context.stream_index];

        bs_jump!(self.context, 1);

        byte
    }

    /// Decode a big-endian `u16`.
    pub fn decode_u16(&mut self) -> u16 {
        let high = self.decode_u8() as u16;

        (high << 8) | self.decode_u8() as u16
    }

    /// Decode a big-endian 24 bit unsigned integer.
    pub fn decode_u24(&mut self) -> u32 {
        let high = self.decode_u8() as u32;

        (high << 16) | self.decode_u16() as u32
    }

    /// Decode a big-endian 31 bit unsigned integer, dropping the reserved high bit.
    pub fn decode_u31(&mut self) -> u32 {
        self.decode_u32() & 0x7FFF_FFFF
    }

    /// Decode a big-endian `u32`.
    pub fn decode_u32(&mut self) -> u32 {
        let high = self.decode_u16() as u32;

        (high << 16) | self.decode_u16() as u32
    }
}

impl<'a> fmt::Debug for DecodeBuffer<'a> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "DecodeBuffer(offset: {}, remaining: {})",
            self.offset(),
            self.remaining()
        )
    }
}
