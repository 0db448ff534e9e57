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

/// Data frame type.
pub const FR_DATA: u8 = 0x0;

/// Headers frame type.
pub const FR_HEADERS: u8 = 0x1;

/// Priority frame type.
pub const FR_PRIORITY: u8 = 0x2;

/// Reset stream frame type.
pub const FR_RST_STREAM: u8 = 0x3;

/// Settings frame type.
pub const FR_SETTINGS: u8 = 0x4;

/// Push promise frame type.
pub const FR_PUSH_PROMISE: u8 = 0x5;

/// Ping frame type.
pub const FR_PING: u8 = 0x6;

/// Go away frame type.
pub const FR_GO_AWAY: u8 = 0x7;

/// Window update frame type.
pub const FR_WINDOW_UPDATE: u8 = 0x8;

/// Continuation frame type.
pub const FR_CONTINUATION: u8 = 0x9;

/// Alternative service frame type (RFC 7838).
pub const FR_ALT_SVC: u8 = 0xA;

/// Priority update frame type (RFC 9218).
pub const FR_PRIORITY_UPDATE: u8 = 0x10;

/// Frame types.
#[derive(Clone,Copy,PartialEq,Eq,Hash)]
pub enum FrameType {
    /// Data frame.
    Data,

    /// Headers frame.
    Headers,

    /// Priority frame.
    Priority,

    /// Reset stream frame.
    RstStream,

    /// Settings frame.
    Settings,

    /// Push promise frame.
    PushPromise,

    /// Ping frame.
    Ping,

    /// Go away frame.
    GoAway,

    /// Window update frame.
    WindowUpdate,

    /// Continuation frame.
    Continuation,

    /// Alternative service frame.
    AltSvc,

    /// Priority update frame.
    PriorityUpdate,

    /// Frame of a type this decoder does not interpret. Its payload is passed through as-is.
    Unknown(u8)
}

impl FrameType {
    /// Create a new `FrameType` from a `u8`.
    pub fn from_u8(byte: u8) -> FrameType {
        match byte {
            FR_DATA            => FrameType::Data,
            FR_HEADERS         => FrameType::Headers,
            FR_PRIORITY        => FrameType::Priority,
            FR_RST_STREAM      => FrameType::RstStream,
            FR_SETTINGS        => FrameType::Settings,
            FR_PUSH_PROMISE    => FrameType::PushPromise,
            FR_PING            => FrameType::Ping,
            FR_GO_AWAY         => FrameType::GoAway,
            FR_WINDOW_UPDATE   => FrameType::WindowUpdate,
            FR_CONTINUATION    => FrameType::Continuation,
            FR_ALT_SVC         => FrameType::AltSvc,
            FR_PRIORITY_UPDATE => FrameType::PriorityUpdate,
            _                  => FrameType::Unknown(byte)
        }
    }

    /// Convert this frame type to a byte value.
    pub fn as_byte(&self) -> u8 {
        match *self {
            FrameType::Data           => FR_DATA,
            FrameType::Headers        => FR_HEADERS,
            FrameType::Priority       => FR_PRIORITY,
            FrameType::RstStream      => FR_RST_STREAM,
            FrameType::Settings       => FR_SETTINGS,
            FrameType::PushPromise    => FR_PUSH_PROMISE,
            FrameType::Ping           => FR_PING,
            FrameType::GoAway         => FR_GO_AWAY,
            FrameType::WindowUpdate   => FR_WINDOW_UPDATE,
            FrameType::Continuation   => FR_CONTINUATION,
            FrameType::AltSvc         => FR_ALT_SVC,
            FrameType::PriorityUpdate => FR_PRIORITY_UPDATE,
            FrameType::Unknown(byte)  => byte
        }
    }

    /// Indicates that frames of this type may carry the padded flag.
    pub fn is_paddable(&self) -> bool {
        match *self {
            FrameType::Data | FrameType::Headers | FrameType::PushPromise => true,
            _ => false
        }
    }

    /// Indicates that frames of this type carry an HPACK header block fragment.
    pub fn carries_header_block(&self) -> bool {
        match *self {
            FrameType::Headers | FrameType::PushPromise | FrameType::Continuation => true,
            _ => false
        }
    }

    /// Indicates that this is a `FrameType::Unknown`.
    pub fn is_unknown(&self) -> bool {
        match *self {
            FrameType::Unknown(_) => true,
            _ => false
        }
    }

    /// Retrieve the name used by RFC 7540 and its extensions.
    fn name(&self) -> &'static str {
        match *self {
            FrameType::Data           => "DATA",
            FrameType::Headers        => "HEADERS",
            FrameType::Priority       => "PRIORITY",
            FrameType::RstStream      => "RST_STREAM",
            FrameType::Settings       => "SETTINGS",
            FrameType::PushPromise    => "PUSH_PROMISE",
            FrameType::Ping           => "PING",
            FrameType::GoAway         => "GOAWAY",
            FrameType::WindowUpdate   => "WINDOW_UPDATE",
            FrameType::Continuation   => "CONTINUATION",
            FrameType::AltSvc         => "ALTSVC",
            FrameType::PriorityUpdate => "PRIORITY_UPDATE",
            FrameType::Unknown(_)     => "UNKNOWN"
        }
    }
}

impl fmt::Debug for FrameType {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FrameType::Unknown(byte) => {
                write!(formatter, "FrameType::Unknown({:#04x})", byte)
            },
            _ => {
                write!(formatter, "FrameType::{}", self.name())
            }
        }
    }
}

impl fmt::Display for FrameType {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FrameType::Unknown(byte) => {
                write!(formatter, "UNKNOWN({:#04x})", byte)
            },
            _ => {
                write!(formatter, "{}", self.name())
            }
        }
    }
}
