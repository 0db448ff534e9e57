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

//! Push oriented, resumable HTTP/2 frame decoder.
//!
//! Bytes are fed to [`Http2FrameDecoder`](http2/struct.Http2FrameDecoder.html) in chunks of any
//! size. Each frame is decoded incrementally and reported piece by piece to a
//! [`FrameDecoderListener`](http2/trait.FrameDecoderListener.html), so payloads are never
//! buffered and a frame may straddle any number of chunks.
//!
//! The decoder checks everything that can be checked within a single frame: padding, fixed
//! payload sizes, and the maximum payload size. Stream states, flow control, and header
//! decompression are left to the layers above it.
//!
//! # Example
//!
//! ```
//! use http2_decode_box::http2::{ ErrorCode, FramePartsCollector, Http2FrameDecoder };
//!
//! let mut decoder = Http2FrameDecoder::new(FramePartsCollector::new());
//!
//! // RST_STREAM frame on stream 1 with CANCEL
//! decoder.resume(&[0, 0, 4, 3, 0, 0, 0, 0, 1,
//!                  0, 0, 0, 8]).unwrap();
//!
//! let frames = decoder.into_listener().into_frames();
//!
//! assert_eq!(frames[0].received_header.stream_id(), 1);
//! assert_eq!(frames[0].rst_stream_error_code, Some(ErrorCode::Cancel));
//! ```

#![crate_name = "http2_decode_box"]

#[macro_use]
extern crate byte_slice;

#[macro_use]
extern crate log;

pub mod decode_buffer;
pub mod decode_status;
pub mod http2;

#[cfg(test)]
mod test;

/// Crate major version.
pub const VERSION_MAJOR: &str = env!("CARGO_PKG_VERSION_MAJOR");

/// Crate minor version.
pub const VERSION_MINOR: &str = env!("CARGO_PKG_VERSION_MINOR");

/// Crate patch version.
pub const VERSION_PATCH: &str = env!("CARGO_PKG_VERSION_PATCH");
