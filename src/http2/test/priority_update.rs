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
fn priority_update() {
    let mut v = Vec::new();

    pack_frame_header!(v, 10, FR_PRIORITY_UPDATE, 0, 0);

    // reserved bit and prioritized stream id
    pack_u32!(v, 0x8000_0005u32);

    pack_bytes!(v, b"u=1, i");

    let decoded = assert_resumable(&v);

    assert!(decoded.errors.is_empty());
    assert_eq!(decoded.byte_count, v.len());
    assert_eq!(decoded.state, DecoderState::StartDecodingHeader);
    assert_eq!(decoded.frames.len(), 1);

    let frame = &decoded.frames[0];

    assert_eq!(frame.priority_update, Some(PriorityUpdateFields{ prioritized_stream_id: 5 }));
    assert_eq!(frame.payload, b"u=1, i");
    assert!(frame.ended);
}

#[test]
fn priority_update_without_field_value() {
    let mut v = Vec::new();

    pack_frame_header!(v, 4, FR_PRIORITY_UPDATE, 0xFF, 0);
    pack_u32!(v, 1);

    let decoded = assert_resumable(&v);

    let frame = &decoded.frames[0];

    assert!(frame.header.map_or(false, |header| header.flags().is_empty()));
    assert!(frame.payload.is_empty());
    assert!(frame.ended);
}

#[test]
fn priority_update_too_short() {
    let mut v = Vec::new();

    pack_frame_header!(v, 2, FR_PRIORITY_UPDATE, 0, 0);
    pack_u16!(v, 1);

    let decoded = assert_resumable(&v);

    assert!(decoded.frames[0].frame_size_error);
    assert_eq!(decoded.frames[0].priority_update, None);
}

#[test]
fn priority_update_field_value_bounded_by_length() {
    let mut v = Vec::new();

    pack_frame_header!(v, 6, FR_PRIORITY_UPDATE, 0, 0);
    pack_u32!(v, 3);
    pack_bytes!(v, b"u=");

    pack_frame_header!(v, 8, FR_PING, 0, 0);
    pack_bytes!(v, b"pingpong");

    let decoded = assert_resumable(&v);

    assert!(decoded.errors.is_empty());
    assert_eq!(decoded.state, DecoderState::StartDecodingHeader);
    assert_eq!(decoded.frames.len(), 2);
    assert_eq!(decoded.frames[0].payload, b"u=");
    assert_eq!(decoded.frames[1].ping.map(|ping| ping.opaque_bytes), Some(*b"pingpong"));
}
