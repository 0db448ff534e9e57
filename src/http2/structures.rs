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

//! Fixed-size structures found at the start of frame payloads.

use crate::decode_buffer::DecodeBuffer;
use crate::http2::error_code::ErrorCode;
use crate::http2::setting::Setting;

/// Type that has a fixed-size wire encoding.
pub trait Structure: Sized {
    /// Count of bytes on the wire.
    const ENCODED_SIZE: usize;

    /// Decode the structure.
    ///
    /// `db` must hold at least `ENCODED_SIZE` bytes. Exactly `ENCODED_SIZE` bytes are consumed.
    fn decode(db: &mut DecodeBuffer) -> Self;
}

/// Stream dependency and weight carried by `PRIORITY` frames and prioritized `HEADERS` frames.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub struct PriorityFields {
    /// Stream this stream depends on.
    pub stream_dependency: u32,

    /// Weight in the range `1..=256`. The wire carries the weight minus one.
    pub weight: u32,

    /// Indicates the dependency is exclusive.
    pub is_exclusive: bool
}

impl Default for PriorityFields {
    fn default() -> PriorityFields {
        PriorityFields{
            stream_dependency: 0,
            weight:            16,
            is_exclusive:      false
        }
    }
}

impl Structure for PriorityFields {
    const ENCODED_SIZE: usize = 5;

    fn decode(db: &mut DecodeBuffer) -> PriorityFields {
        let dependency = db.decode_u32();
        let weight     = db.decode_u8() as u32 + 1;

        PriorityFields{
            stream_dependency: dependency & 0x7FFF_FFFF,
            weight:            weight,
            is_exclusive:      dependency & 0x8000_0000 == 0x8000_0000
        }
    }
}

/// Payload of a `RST_STREAM` frame.
#[derive(Clone,Copy,Debug,Default,PartialEq,Eq)]
pub struct RstStreamFields {
    /// Reason the stream was reset.
    pub error_code: ErrorCode
}

impl Structure for RstStreamFields {
    const ENCODED_SIZE: usize = 4;

    fn decode(db: &mut DecodeBuffer) -> RstStreamFields {
        RstStreamFields{
            error_code: ErrorCode::from_u32(db.decode_u32())
        }
    }
}

/// One identifier/value pair of a `SETTINGS` frame.
#[derive(Clone,Copy,Debug,Default,PartialEq,Eq)]
pub struct SettingFields {
    /// Setting identifier.
    pub parameter: u16,

    /// Setting value.
    pub value: u32
}

impl SettingFields {
    /// Retrieve the interpreted setting.
    pub fn setting(&self) -> Setting {
        Setting::new(self.parameter, self.value)
    }
}

impl Structure for SettingFields {
    const ENCODED_SIZE: usize = 6;

    fn decode(db: &mut DecodeBuffer) -> SettingFields {
        let parameter = db.decode_u16();

        SettingFields{
            parameter: parameter,
            value:     db.decode_u32()
        }
    }
}

/// Fixed part of a `PUSH_PROMISE` frame payload.
#[derive(Clone,Copy,Debug,Default,PartialEq,Eq)]
pub struct PushPromiseFields {
    /// Stream reserved by the promise.
    pub promised_stream_id: u32
}

impl Structure for PushPromiseFields {
    const ENCODED_SIZE: usize = 4;

    fn decode(db: &mut DecodeBuffer) -> PushPromiseFields {
        PushPromiseFields{
            promised_stream_id: db.decode_u31()
        }
    }
}

/// Payload of a `PING` frame.
#[derive(Clone,Copy,Debug,Default,PartialEq,Eq)]
pub struct PingFields {
    /// Opaque data echoed back by the acknowledgement.
    pub opaque_bytes: [u8; 8]
}

impl Structure for PingFields {
    const ENCODED_SIZE: usize = 8;

    fn decode(db: &mut DecodeBuffer) -> PingFields {
        let mut opaque_bytes = [0; 8];

        opaque_bytes.copy_from_slice(&db.cursor()[..8]);
        db.advance_cursor(8);

        PingFields{
            opaque_bytes: opaque_bytes
        }
    }
}

/// Fixed part of a `GOAWAY` frame payload.
#[derive(Clone,Copy,Debug,Default,PartialEq,Eq)]
pub struct GoAwayFields {
    /// Highest stream the sender may have acted on.
    pub last_stream_id: u32,

    /// Reason the connection is being closed.
    pub error_code: ErrorCode
}

impl Structure for GoAwayFields {
    const ENCODED_SIZE: usize = 8;

    fn decode(db: &mut DecodeBuffer) -> GoAwayFields {
        let last_stream_id = db.decode_u31();

        GoAwayFields{
            last_stream_id: last_stream_id,
            error_code:     ErrorCode::from_u32(db.decode_u32())
        }
    }
}

/// Payload of a `WINDOW_UPDATE` frame.
#[derive(Clone,Copy,Debug,Default,PartialEq,Eq)]
pub struct WindowUpdateFields {
    /// Window size increment. Zero is a protocol error the decoder does not judge.
    pub window_size_increment: u32
}

impl Structure for WindowUpdateFields {
    const ENCODED_SIZE: usize = 4;

    fn decode(db: &mut DecodeBuffer) -> WindowUpdateFields {
        WindowUpdateFields{
            window_size_increment: db.decode_u31()
        }
    }
}

/// Fixed part of an `ALTSVC` frame payload.
#[derive(Clone,Copy,Debug,Default,PartialEq,Eq)]
pub struct AltSvcFields {
    /// Length of the origin that follows.
    pub origin_length: u16
}

impl Structure for AltSvcFields {
    const ENCODED_SIZE: usize = 2;

    fn decode(db: &mut DecodeBuffer) -> AltSvcFields {
        AltSvcFields{
            origin_length: db.decode_u16()
        }
    }
}

/// Fixed part of a `PRIORITY_UPDATE` frame payload.
#[derive(Clone,Copy,Debug,Default,PartialEq,Eq)]
pub struct PriorityUpdateFields {
    /// Stream whose priority is being updated.
    pub prioritized_stream_id: u32
}

impl Structure for PriorityUpdateFields {
    const ENCODED_SIZE: usize = 4;

    fn decode(db: &mut DecodeBuffer) -> PriorityUpdateFields {
        PriorityUpdateFields{
            prioritized_stream_id: db.decode_u31()
        }
    }
}
