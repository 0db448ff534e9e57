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

use thiserror::Error;

use crate::http2::error_code::ErrorCode;
use crate::http2::frame_header::FrameHeader;
use crate::http2::frame_type::FrameType;

/// Protocol errors detected while decoding a frame.
///
/// The listener is told about each of these through its own callback before the decoder returns
/// `DecodeStatus::Error`. The decoder never closes streams or connections itself; callers use
/// [`error_code()`](#method.error_code) and
/// [`is_connection_error()`](#method.is_connection_error) to decide what to tear down.
#[derive(Clone,Copy,Debug,Error,PartialEq,Eq)]
pub enum FrameError {
    /// The pad length of a padded frame claims more bytes than the payload holds.
    #[error("padding of {header} is {missing_length} bytes longer than its payload")]
    PaddingTooLong {
        /// Header of the failed frame.
        header: FrameHeader,

        /// Count of bytes missing from the payload.
        missing_length: usize
    },

    /// The payload size does not suit the frame type, or exceeds the maximum payload size.
    #[error("invalid payload size for {header}")]
    FrameSize {
        /// Header of the failed frame.
        header: FrameHeader
    },

    /// The listener declined the frame from `on_frame_header()`.
    #[error("{header} was rejected by the listener")]
    Rejected {
        /// Header of the failed frame.
        header: FrameHeader
    }
}

impl FrameError {
    /// Retrieve the header of the failed frame.
    pub fn header(&self) -> &FrameHeader {
        match *self {
              FrameError::PaddingTooLong { ref header, .. }
            | FrameError::FrameSize { ref header }
            | FrameError::Rejected { ref header } => header
        }
    }

    /// Retrieve the error code a peer should be sent for this error.
    pub fn error_code(&self) -> ErrorCode {
        match *self {
            FrameError::FrameSize { .. } => ErrorCode::FrameSize,
            _                            => ErrorCode::Protocol
        }
    }

    /// Indicates that the error must be treated as a connection error rather than a stream
    /// error.
    ///
    /// Frame size errors are stream errors unless the frame could alter connection state: a
    /// `SETTINGS` frame, any frame on stream 0, or a frame carrying a header block.
    pub fn is_connection_error(&self) -> bool {
        match *self {
            FrameError::FrameSize { ref header } => {
                   header.stream_id() == 0
                || header.frame_type() == FrameType::Settings
                || header.frame_type().carries_header_block()
            },
            _ => true
        }
    }
}
