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

/// No error code.
pub const E_NO_ERROR: u32 = 0x0;

/// Protocol error code.
pub const E_PROTOCOL: u32 = 0x1;

/// Internal error code.
pub const E_INTERNAL: u32 = 0x2;

/// Flow control error code.
pub const E_FLOW_CONTROL: u32 = 0x3;

/// Settings timeout error code.
pub const E_SETTINGS_TIMEOUT: u32 = 0x4;

/// Stream closed error code.
pub const E_STREAM_CLOSED: u32 = 0x5;

/// Frame size error code.
pub const E_FRAME_SIZE: u32 = 0x6;

/// Refused stream error code.
pub const E_REFUSED_STREAM: u32 = 0x7;

/// Cancel error code.
pub const E_CANCEL: u32 = 0x8;

/// Compression error code.
pub const E_COMPRESSION: u32 = 0x9;

/// Connect error code.
pub const E_CONNECT: u32 = 0xA;

/// Enhance your calm error code.
pub const E_ENHANCE_YOUR_CALM: u32 = 0xB;

/// Inadequate security error code.
pub const E_INADEQUATE_SECURITY: u32 = 0xC;

/// HTTP/1.1 required error code.
pub const E_HTTP_1_1_REQUIRED: u32 = 0xD;

/// Error codes carried by RST_STREAM and GOAWAY frames.
#[derive(Clone,Copy,PartialEq,Eq,Hash)]
pub enum ErrorCode {
    /// No error.
    NoError,

    /// Protocol error.
    Protocol,

    /// Internal error.
    Internal,

    /// Flow control error.
    FlowControl,

    /// Settings timeout error.
    SettingsTimeout,

    /// Stream closed error.
    StreamClosed,

    /// Frame size error.
    FrameSize,

    /// Refused stream error.
    RefusedStream,

    /// Cancel error.
    Cancel,

    /// Compression error.
    Compression,

    /// Connect error.
    Connect,

    /// Enhance your calm error.
    EnhanceYourCalm,

    /// Inadequate security error.
    InadequateSecurity,

    /// HTTP/1.1 required error.
    Http11Required,

    /// Error code not defined by RFC 7540. Must be treated as `Internal` by peers, but the raw
    /// value is preserved.
    Unknown(u32)
}

impl Default for ErrorCode {
    fn default() -> ErrorCode {
        ErrorCode::NoError
    }
}

impl ErrorCode {
    /// Create a new `ErrorCode` from a `u32`.
    pub fn from_u32(code: u32) -> ErrorCode {
        match code {
            E_NO_ERROR            => ErrorCode::NoError,
            E_PROTOCOL            => ErrorCode::Protocol,
            E_INTERNAL            => ErrorCode::Internal,
            E_FLOW_CONTROL        => ErrorCode::FlowControl,
            E_SETTINGS_TIMEOUT    => ErrorCode::SettingsTimeout,
            E_STREAM_CLOSED       => ErrorCode::StreamClosed,
            E_FRAME_SIZE          => ErrorCode::FrameSize,
            E_REFUSED_STREAM      => ErrorCode::RefusedStream,
            E_CANCEL              => ErrorCode::Cancel,
            E_COMPRESSION         => ErrorCode::Compression,
            E_CONNECT             => ErrorCode::Connect,
            E_ENHANCE_YOUR_CALM   => ErrorCode::EnhanceYourCalm,
            E_INADEQUATE_SECURITY => ErrorCode::InadequateSecurity,
            E_HTTP_1_1_REQUIRED   => ErrorCode::Http11Required,
            _                     => ErrorCode::Unknown(code)
        }
    }

    /// Convert this error code to its wire value.
    pub fn as_u32(&self) -> u32 {
        match *self {
            ErrorCode::NoError            => E_NO_ERROR,
            ErrorCode::Protocol           => E_PROTOCOL,
            ErrorCode::Internal           => E_INTERNAL,
            ErrorCode::FlowControl        => E_FLOW_CONTROL,
            ErrorCode::SettingsTimeout    => E_SETTINGS_TIMEOUT,
            ErrorCode::StreamClosed       => E_STREAM_CLOSED,
            ErrorCode::FrameSize          => E_FRAME_SIZE,
            ErrorCode::RefusedStream      => E_REFUSED_STREAM,
            ErrorCode::Cancel             => E_CANCEL,
            ErrorCode::Compression        => E_COMPRESSION,
            ErrorCode::Connect            => E_CONNECT,
            ErrorCode::EnhanceYourCalm    => E_ENHANCE_YOUR_CALM,
            ErrorCode::InadequateSecurity => E_INADEQUATE_SECURITY,
            ErrorCode::Http11Required     => E_HTTP_1_1_REQUIRED,
            ErrorCode::Unknown(code)      => code
        }
    }

    /// Indicates that this is an `ErrorCode::Unknown`.
    pub fn is_unknown(&self) -> bool {
        match *self {
            ErrorCode::Unknown(_) => true,
            _ => false
        }
    }

    /// Retrieve the name used by RFC 7540.
    fn name(&self) -> &'static str {
        match *self {
            ErrorCode::NoError            => "NO_ERROR",
            ErrorCode::Protocol           => "PROTOCOL_ERROR",
            ErrorCode::Internal           => "INTERNAL_ERROR",
            ErrorCode::FlowControl        => "FLOW_CONTROL_ERROR",
            ErrorCode::SettingsTimeout    => "SETTINGS_TIMEOUT",
            ErrorCode::StreamClosed       => "STREAM_CLOSED",
            ErrorCode::FrameSize          => "FRAME_SIZE_ERROR",
            ErrorCode::RefusedStream      => "REFUSED_STREAM",
            ErrorCode::Cancel             => "CANCEL",
            ErrorCode::Compression        => "COMPRESSION_ERROR",
            ErrorCode::Connect            => "CONNECT_ERROR",
            ErrorCode::EnhanceYourCalm    => "ENHANCE_YOUR_CALM",
            ErrorCode::InadequateSecurity => "INADEQUATE_SECURITY",
            ErrorCode::Http11Required     => "HTTP_1_1_REQUIRED",
            ErrorCode::Unknown(_)         => "UNKNOWN"
        }
    }
}

impl fmt::Debug for ErrorCode {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "ErrorCode::{}({:#x})", self.name(), self.as_u32())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ErrorCode::Unknown(code) => {
                write!(formatter, "UNKNOWN({:#x})", code)
            },
            _ => {
                write!(formatter, "{}", self.name())
            }
        }
    }
}
