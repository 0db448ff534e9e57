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
use crate::http2::payload::DataPayloadDecoder;

use crate::http2::test::*;

#[test]
fn data_round_trip() {
    let mut v = Vec::new();

    pack_frame_header!(v, 10, FR_DATA, FL_END_STREAM, 1);
    pack_bytes!(v, b"0123456789");

    let decoded = assert_resumable(&v);

    assert!(decoded.errors.is_empty());
    assert_eq!(decoded.frames.len(), 1);
    assert_eq!(decoded.byte_count, 19);
    assert_eq!(decoded.state, DecoderState::StartDecodingHeader);

    let frame = &decoded.frames[0];

    assert_eq!(frame.received_header.payload_length(), 10);
    assert_eq!(frame.received_header.stream_id(), 1);
    assert!(frame.received_header.is_end_stream());
    assert_eq!(frame.payload, b"0123456789");
    assert!(frame.padding.is_empty());
    assert_eq!(frame.pad_length, None);
    assert!(frame.ended);
}

#[test]
fn data_fast_path() {
    let header = header(10, FrameType::Data, FL_END_STREAM, 1);

    let (statuses, frame) = decode_payload::<DataPayloadDecoder>(header, &[b"0123456789"]);

    assert_eq!(statuses, vec![DecodeStatus::Done]);
    assert_eq!(frame.header, Some(header));
    assert_eq!(frame.payload, b"0123456789");
    assert!(frame.ended);
}

#[test]
fn data_split_payload() {
    let header = header(10, FrameType::Data, 0, 1);

    let (statuses, frame) = decode_payload::<DataPayloadDecoder>(
        header,
        &[b"012", b"", b"3456", b"789"]
    );

    assert_eq!(statuses, vec![DecodeStatus::InProgress,
                              DecodeStatus::InProgress,
                              DecodeStatus::InProgress,
                              DecodeStatus::Done]);

    assert_eq!(frame.payload, b"0123456789");
    assert!(frame.ended);
}

#[test]
fn data_zero_length() {
    let mut v = Vec::new();

    pack_frame_header!(v, 0, FR_DATA, 0, 3);

    let decoded = assert_resumable(&v);

    assert!(decoded.errors.is_empty());
    assert_eq!(decoded.frames.len(), 1);
    assert!(decoded.frames[0].header.is_some());
    assert!(decoded.frames[0].payload.is_empty());
    assert!(decoded.frames[0].ended);
}

#[test]
fn data_padded() {
    let mut v = Vec::new();

    pack_frame_header!(v, 14, FR_DATA, FL_PADDED | FL_END_STREAM, 1);
    pack_u8!(v, 3);
    pack_bytes!(v, b"0123456789");
    pack_bytes!(v, &[0, 0, 0]);

    let decoded = assert_resumable(&v);

    assert!(decoded.errors.is_empty());

    let frame = &decoded.frames[0];

    assert_eq!(frame.pad_length, Some(3));
    assert_eq!(frame.payload, b"0123456789");
    assert_eq!(frame.padding, vec![0, 0, 0]);
    assert!(frame.ended);
}

#[test]
fn data_padded_only_pad_length() {
    let mut v = Vec::new();

    pack_frame_header!(v, 1, FR_DATA, FL_PADDED, 1);
    pack_u8!(v, 0);

    let decoded = assert_resumable(&v);

    assert!(decoded.errors.is_empty());
    assert_eq!(decoded.frames[0].pad_length, Some(0));
    assert!(decoded.frames[0].payload.is_empty());
    assert!(decoded.frames[0].ended);
}

#[test]
fn data_padding_too_long() {
    let mut v = Vec::new();

    pack_frame_header!(v, 5, FR_DATA, FL_PADDED, 1);
    pack_u8!(v, 5);
    pack_bytes!(v, b"abcd");

    let decoded = assert_resumable(&v);

    assert_eq!(decoded.frames.len(), 1);

    let frame = &decoded.frames[0];

    assert_eq!(frame.missing_length, Some(1));
    assert!(frame.payload.is_empty());
    assert!(!frame.frame_size_error);

    assert_eq!(decoded.errors.len(), 1);

    match decoded.errors[0] {
        FrameError::PaddingTooLong { ref header, missing_length } => {
            assert_eq!(header.frame_type(), FrameType::Data);
            assert_eq!(missing_length, 1);
        },
        ref error => panic!("unexpected error: {}", error)
    }

    // the rest of the frame has been discarded
    assert_eq!(decoded.byte_count, 14);
    assert_eq!(decoded.state, DecoderState::StartDecodingHeader);
}

#[test]
fn data_padding_too_long_status() {
    let header = header(5, FrameType::Data, FL_PADDED, 1);

    let (statuses, frame) = decode_payload::<DataPayloadDecoder>(header, &[&[5, 0, 0, 0, 0]]);

    assert_eq!(statuses, vec![DecodeStatus::Error]);
    assert_eq!(frame.missing_length, Some(1));
    assert!(frame.payload.is_empty());
}

#[test]
fn data_padded_without_pad_length() {
    let mut v = Vec::new();

    pack_frame_header!(v, 0, FR_DATA, FL_PADDED, 1);

    let decoded = decode(&v);

    assert!(decoded.frames[0].frame_size_error);
    assert_eq!(decoded.errors.len(), 1);
    assert_eq!(decoded.errors[0].error_code(), ErrorCode::FrameSize);
}

#[test]
fn data_undefined_flags_cleared() {
    let mut v = Vec::new();

    pack_frame_header!(v, 2, FR_DATA, 0xFF & !FL_PADDED, 1);
    pack_bytes!(v, b"hi");

    let decoded = decode(&v);
    let frame   = &decoded.frames[0];

    assert_eq!(frame.received_header.flags().as_byte(), 0xF7);
    assert_eq!(frame.header.map(|header| header.flags().as_byte()), Some(FL_END_STREAM));
}
