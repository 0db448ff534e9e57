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

use crate::decode_status::DecodeStatus;
use crate::http2::*;
use crate::http2::payload::HeadersPayloadDecoder;

use crate::http2::test::*;

#[test]
fn headers() {
    let mut v = Vec::new();

    pack_frame_header!(v, 6, FR_HEADERS, FL_END_HEADERS | FL_END_STREAM, 1);
    pack_bytes!(v, b"\x82\x86\x84\x41\x8a\x08");

    let decoded = assert_resumable(&v);

    assert!(decoded.errors.is_empty());

    let frame = &decoded.frames[0];

    assert!(frame.received_header.is_end_headers());
    assert!(frame.received_header.is_end_stream());
    assert_eq!(frame.payload, b"\x82\x86\x84\x41\x8a\x08");
    assert_eq!(frame.priority, None);
    assert!(frame.ended);
}

#[test]
fn headers_fast_path() {
    let header = header(3, FrameType::Headers, FL_END_HEADERS, 1);

    let (statuses, frame) = decode_payload::<HeadersPayloadDecoder>(header, &[b"abc"]);

    assert_eq!(statuses, vec![DecodeStatus::Done]);
    assert_eq!(frame.payload, b"abc");
}

#[test]
fn headers_priority() {
    let mut v = Vec::new();

    pack_frame_header!(v, 8, FR_HEADERS, FL_PRIORITY | FL_END_HEADERS, 3);

    // exclusive bit and stream dependency
    pack_u32!(v, 0x8000_0001u32);

    // weight
    pack_u8!(v, 255);

    pack_bytes!(v, b"abc");

    let decoded = assert_resumable(&v);

    assert!(decoded.errors.is_empty());

    let frame = &decoded.frames[0];

    assert_eq!(frame.priority, Some(PriorityFields{
        stream_dependency: 1,
        weight:            256,
        is_exclusive:      true
    }));

    assert_eq!(frame.payload, b"abc");
    assert!(frame.ended);
}

#[test]
fn headers_padded_priority() {
    let mut v = Vec::new();

    pack_frame_header!(v, 12, FR_HEADERS, FL_PADDED | FL_PRIORITY, 5);
    pack_u8!(v, 2);
    pack_u32!(v, 0x0000_0003);
    pack_u8!(v, 15);
    pack_bytes!(v, b"abcd");
    pack_bytes!(v, &[0, 0]);

    let decoded = assert_resumable(&v);

    assert!(decoded.errors.is_empty());

    let frame = &decoded.frames[0];

    assert_eq!(frame.pad_length, Some(2));
    assert_eq!(frame.priority, Some(PriorityFields{
        stream_dependency: 3,
        weight:            16,
        is_exclusive:      false
    }));

    assert_eq!(frame.payload, b"abcd");
    assert_eq!(frame.padding, vec![0, 0]);
}

#[test]
fn headers_priority_too_short() {
    let mut v = Vec::new();

    pack_frame_header!(v, 4, FR_HEADERS, FL_PRIORITY, 1);
    pack_u32!(v, 1);

    let decoded = assert_resumable(&v);

    assert!(decoded.frames[0].frame_size_error);
    assert_eq!(decoded.frames[0].priority, None);
    assert_eq!(decoded.errors.len(), 1);
    assert!(decoded.errors[0].is_connection_error());
}

#[test]
fn headers_padding_too_long() {
    let mut v = Vec::new();

    pack_frame_header!(v, 3, FR_HEADERS, FL_PADDED, 1);
    pack_u8!(v, 200);
    pack_bytes!(v, b"ab");

    let decoded = assert_resumable(&v);

    assert_eq!(decoded.frames[0].missing_length, Some(198));
    assert!(decoded.frames[0].payload.is_empty());
    assert_eq!(decoded.errors[0].error_code(), ErrorCode::Protocol);
    assert_eq!(decoded.byte_count, 12);
}

#[test]
fn headers_priority_split_status() {
    let header = header(7, FrameType::Headers, FL_PRIORITY, 1);

    let (statuses, frame) = decode_payload::<HeadersPayloadDecoder>(
        header,
        &[&[0, 0], &[0, 7, 0], &[b'x', b'y']]
    );

    assert_eq!(statuses, vec![DecodeStatus::InProgress,
                              DecodeStatus::InProgress,
                              DecodeStatus::Done]);

    assert_eq!(frame.priority.map(|priority| priority.stream_dependency), Some(7));
    assert_eq!(frame.payload, b"xy");
}
