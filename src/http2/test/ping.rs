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
use crate::http2::payload::PingPayloadDecoder;

use crate::http2::test::*;

fn ping_frame(length: u32, flags: u8, opaque: &[u8]) -> Vec<u8> {
    let mut v = Vec::new();

    pack_frame_header!(v, length, FR_PING, flags, 0);
    pack_bytes!(v, opaque);

    v
}

#[test]
fn ping() {
    let decoded = assert_resumable(&ping_frame(8, 0, b"abcdefgh"));

    assert!(decoded.errors.is_empty());

    let frame = &decoded.frames[0];

    assert_eq!(frame.ping.map(|ping| ping.opaque_bytes), Some(*b"abcdefgh"));
    assert!(!frame.ack);
    assert!(frame.ended);
}

#[test]
fn ping_ack() {
    let decoded = assert_resumable(&ping_frame(8, FL_ACK, &[1, 2, 3, 4, 5, 6, 7, 8]));

    assert!(decoded.errors.is_empty());

    let frame = &decoded.frames[0];

    assert_eq!(frame.ping.map(|ping| ping.opaque_bytes), Some([1, 2, 3, 4, 5, 6, 7, 8]));
    assert!(frame.ack);
    assert!(frame.header.map_or(false, |header| header.is_ack()));
}

#[test]
fn ping_fast_path() {
    let header = header(8, FrameType::Ping, FL_ACK, 0);

    let (statuses, frame) = decode_payload::<PingPayloadDecoder>(header, &[b"01234567"]);

    assert_eq!(statuses, vec![DecodeStatus::Done]);
    assert!(frame.ack);
}

#[test]
fn ping_split() {
    let header = header(8, FrameType::Ping, 0, 0);

    let (statuses, frame) = decode_payload::<PingPayloadDecoder>(
        header,
        &[b"012", b"3", b"4567"]
    );

    assert_eq!(statuses, vec![DecodeStatus::InProgress,
                              DecodeStatus::InProgress,
                              DecodeStatus::Done]);

    assert_eq!(frame.ping.map(|ping| ping.opaque_bytes), Some(*b"01234567"));
}

#[test]
fn ping_too_long() {
    let decoded = assert_resumable(&ping_frame(9, 0, b"abcdefghi"));

    let frame = &decoded.frames[0];

    assert!(frame.frame_size_error);
    assert_eq!(frame.ping, None);
    assert_eq!(decoded.errors, vec![FrameError::FrameSize{ header: frame.received_header }]);
    assert_eq!(decoded.byte_count, 18);
}

#[test]
fn ping_too_short() {
    let decoded = assert_resumable(&ping_frame(7, 0, b"abcdefg"));

    let frame = &decoded.frames[0];

    assert!(frame.frame_size_error);
    assert_eq!(frame.ping, None);
    assert_eq!(decoded.errors.len(), 1);
    assert!(decoded.errors[0].is_connection_error());
}

#[test]
fn ping_too_short_status() {
    let header = header(7, FrameType::Ping, 0, 0);

    let (statuses, frame) = decode_payload::<PingPayloadDecoder>(header, &[b"012", b"3456"]);

    assert_eq!(statuses, vec![DecodeStatus::InProgress, DecodeStatus::Error]);
    assert!(frame.frame_size_error);
}

#[test]
fn ping_empty() {
    let decoded = decode(&ping_frame(0, 0, b""));

    assert!(decoded.frames[0].frame_size_error);
    assert_eq!(decoded.errors.len(), 1);
}
