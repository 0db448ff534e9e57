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

use std::fmt;

use crate::decode_buffer::DecodeBuffer;
use crate::http2::flags::Flags;
use crate::http2::frame_type::FrameType;
use crate::http2::structures::Structure;

/// Size of the common frame header.
pub const FRAME_HEADER_SIZE: usize = 9;

/// Largest payload length the 24 bit length field can express.
pub const MAX_ALLOWED_FRAME_SIZE: usize = (1 << 24) - 1;

/// Payload limit in effect until a peer advertises `SETTINGS_MAX_FRAME_SIZE`.
pub const DEFAULT_MAX_FRAME_SIZE: usize = 16_384;

/// Common 9 byte frame header.
///
/// The reserved bit of the stream identifier is always cleared.
#[derive(Clone,Copy,PartialEq,Eq)]
pub struct FrameHeader {
    flags:          Flags,
    frame_type:     FrameType,
    payload_length: u32,
    stream_id:      u32
}

impl Default for FrameHeader {
    fn default() -> FrameHeader {
        FrameHeader::new(0, FrameType::Data, Flags::default(), 0)
    }
}

impl FrameHeader {
    /// Create a new `FrameHeader`.
    ///
    /// `payload_length` is truncated to 24 bits and `stream_id` to 31 bits.
    pub fn new(payload_length: u32, frame_type: FrameType, flags: Flags, stream_id: u32)
    -> FrameHeader {
        FrameHeader{
            flags:          flags,
            frame_type:     frame_type,
            payload_length: payload_length & 0xFF_FFFF,
            stream_id:      stream_id & 0x7FFF_FFFF
        }
    }

    /// Retrieve the frame flags.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Retrieve the frame type.
    pub fn frame_type(&self) -> FrameType {
        self.frame_type
    }

    /// Retrieve the payload length.
    pub fn payload_length(&self) -> u32 {
        self.payload_length
    }

    /// Retrieve the stream identifier.
    pub fn stream_id(&self) -> u32 {
        self.stream_id
    }

    /// Retrieve the frame size including this header.
    pub fn frame_size(&self) -> usize {
        FRAME_HEADER_SIZE + self.payload_length as usize
    }

    /// Indicates that the frame is padded. Only `DATA`, `HEADERS` and `PUSH_PROMISE` frames can be.
    pub fn is_padded(&self) -> bool {
        self.frame_type.is_paddable() && self.flags.is_padded()
    }

    /// Indicates that a `HEADERS` frame carries priority fields.
    pub fn has_priority(&self) -> bool {
        self.frame_type == FrameType::Headers && self.flags.is_priority()
    }

    /// Indicates that a `SETTINGS` or `PING` frame is an acknowledgement.
    pub fn is_ack(&self) -> bool {
        match self.frame_type {
            FrameType::Settings | FrameType::Ping => self.flags.is_ack(),
            _ => false
        }
    }

    /// Indicates that a `DATA` or `HEADERS` frame ends its stream.
    pub fn is_end_stream(&self) -> bool {
        match self.frame_type {
            FrameType::Data | FrameType::Headers => self.flags.is_end_stream(),
            _ => false
        }
    }

    /// Indicates that a `HEADERS`, `PUSH_PROMISE` or `CONTINUATION` frame ends its header block.
    pub fn is_end_headers(&self) -> bool {
        self.frame_type.carries_header_block() && self.flags.is_end_headers()
    }

    /// Clear every flag outside of `mask`.
    pub fn retain_flags(&mut self, mask: u8) {
        self.flags = self.flags.retain(mask);
    }
}

impl Structure for FrameHeader {
    const ENCODED_SIZE: usize = FRAME_HEADER_SIZE;

    fn decode(db: &mut DecodeBuffer) -> FrameHeader {
        let payload_length = db.decode_u24();
        let frame_type     = FrameType::from_u8(db.decode_u8());
        let flags          = Flags::from_u8(db.decode_u8());
        let stream_id      = db.decode_u31();

        FrameHeader::new(payload_length, frame_type, flags, stream_id)
    }
}

impl fmt::Display for FrameHeader {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "{} frame (flags: {}, payload_length: {}, stream_id: {})",
            self.frame_type,
            self.flags,
            self.payload_length,
            self.stream_id
        )
    }
}

impl fmt::Debug for FrameHeader {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "FrameHeader(flags: {:?}, frame_type: {:?}, payload_length: {}, stream_id: {})",
            self.flags,
            self.frame_type,
            self.payload_length,
            self.stream_id
        )
    }
}
