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

use crate::http2::*;

use crate::http2::test::*;

#[test]
fn error_code() {
    let frame = header(9, FrameType::Ping, 0, 0);

    assert_eq!(FrameError::FrameSize { header: frame }.error_code(), ErrorCode::FrameSize);
    assert_eq!(FrameError::Rejected { header: frame }.error_code(), ErrorCode::Protocol);
    assert_eq!(FrameError::PaddingTooLong { header: frame, missing_length: 1 }.error_code(),
               ErrorCode::Protocol);
}

#[test]
fn error_header() {
    let frame = header(3, FrameType::Data, FL_PADDED, 7);
    let error = FrameError::PaddingTooLong { header: frame, missing_length: 2 };

    assert_eq!(*error.header(), frame);
}

#[test]
fn frame_size_scope() {
    let stream = |frame_type, stream_id| {
        FrameError::FrameSize { header: header(1, frame_type, 0, stream_id) }.is_connection_error()
    };

    assert!(!stream(FrameType::Data, 1));
    assert!(!stream(FrameType::RstStream, 1));
    assert!(!stream(FrameType::WindowUpdate, 1));
    assert!(!stream(FrameType::Priority, 3));
    assert!(stream(FrameType::Headers, 1));
    assert!(stream(FrameType::PushPromise, 1));
    assert!(stream(FrameType::Continuation, 1));
    assert!(stream(FrameType::WindowUpdate, 0));
    assert!(stream(FrameType::Ping, 0));
}

#[test]
fn always_connection_errors() {
    let frame = header(1, FrameType::Data, FL_PADDED, 1);

    assert!(FrameError::PaddingTooLong { header: frame, missing_length: 1 }.is_connection_error());
    assert!(FrameError::Rejected { header: frame }.is_connection_error());
}

#[test]
fn display() {
    let frame = header(9, FrameType::Ping, 0, 0);

    assert_eq!(format!("{}", FrameError::FrameSize { header: frame }),
               "invalid payload size for PING frame (flags: 0x00, payload_length: 9, stream_id: 0)");

    assert_eq!(format!("{}", FrameError::PaddingTooLong { header: frame, missing_length: 4 }),
               "padding of PING frame (flags: 0x00, payload_length: 9, stream_id: 0) is 4 bytes \
                longer than its payload");
}
