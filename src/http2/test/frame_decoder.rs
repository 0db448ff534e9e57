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

use crate::decode_buffer::DecodeBuffer;
use crate::decode_status::DecodeStatus;
use crate::http2::*;

use crate::http2::test::*;

/// A connection preface worth of frames.
fn conversation() -> Vec<u8> {
    let mut v = Vec::new();

    pack_frame_header!(v, 6, FR_SETTINGS, 0, 0);
    pack_u16!(v, S_MAX_FRAME_SIZE);
    pack_u32!(v, 32_768);

    pack_frame_header!(v, 4, FR_WINDOW_UPDATE, 0, 0);
    pack_u32!(v, 65_535);

    pack_frame_header!(v, 0, FR_SETTINGS, FL_ACK, 0);

    pack_frame_header!(v, 7, FR_HEADERS, FL_END_HEADERS | FL_PADDED, 1);
    pack_u8!(v, 2);
    pack_bytes!(v, b"\x82\x86\x84\x41");
    pack_bytes!(v, &[0, 0]);

    pack_frame_header!(v, 5, FR_DATA, FL_END_STREAM, 1);
    pack_bytes!(v, b"hello");

    pack_frame_header!(v, 8, FR_PING, 0, 0);
    pack_bytes!(v, b"pingping");

    pack_frame_header!(v, 8, FR_GO_AWAY, 0, 0);
    pack_u32!(v, 1);
    pack_u32!(v, E_NO_ERROR);

    v
}

#[test]
fn multiple_frames() {
    let stream  = conversation();
    let decoded = assert_resumable(&stream);

    assert!(decoded.errors.is_empty());
    assert_eq!(decoded.byte_count, stream.len());

    let types = decoded.frames.iter()
                              .map(|frame| frame.received_header.frame_type())
                              .collect::<Vec<FrameType>>();

    assert_eq!(types, vec![FrameType::Settings,
                           FrameType::WindowUpdate,
                           FrameType::Settings,
                           FrameType::Headers,
                           FrameType::Data,
                           FrameType::Ping,
                           FrameType::GoAway]);

    assert!(decoded.frames.iter().all(|frame| frame.ended && !frame.has_error()));
    assert_eq!(decoded.frames[3].payload, b"\x82\x86\x84\x41");
    assert_eq!(decoded.frames[4].payload, b"hello");
}

#[test]
fn reserved_bit_masked() {
    let mut v = Vec::new();

    pack_frame_header!(v, 0, FR_DATA, 0, 0xFFFF_FFFFu32);

    let decoded = decode(&v);

    assert_eq!(decoded.frames[0].received_header.stream_id(), 0x7FFF_FFFF);
    assert_eq!(decoded.frames[0].header.map(|header| header.stream_id()), Some(0x7FFF_FFFF));
}

#[test]
fn header_split() {
    let mut decoder = Http2FrameDecoder::new(FramePartsCollector::new());

    assert_eq!(decoder.resume(&[0, 0, 1, FR_DATA]), Ok(4));
    assert_eq!(decoder.state(), DecoderState::ResumeDecodingHeader);
    assert!(decoder.listener().frames().is_empty());

    assert_eq!(decoder.resume(&[0, 0, 0, 0, 1]), Ok(5));
    assert_eq!(decoder.state(), DecoderState::ResumeDecodingPayload);
    assert_eq!(decoder.listener().frames().len(), 1);

    assert_eq!(decoder.resume(b"x"), Ok(1));
    assert_eq!(decoder.state(), DecoderState::StartDecodingHeader);
    assert_eq!(decoder.byte_count(), 10);
    assert!(decoder.listener().frames()[0].ended);
}

#[test]
fn decode_frame_one_at_a_time() {
    let mut v = Vec::new();

    pack_frame_header!(v, 2, FR_DATA, 0, 1);
    pack_bytes!(v, b"ab");
    pack_frame_header!(v, 2, FR_DATA, 0, 3);
    pack_bytes!(v, b"cd");

    let mut decoder = Http2FrameDecoder::new(FramePartsCollector::new());
    let mut db      = DecodeBuffer::new(&v);

    assert_eq!(decoder.decode_frame(&mut db), DecodeStatus::Done);
    assert_eq!(db.offset(), 11);
    assert_eq!(decoder.listener().frames().len(), 1);

    assert_eq!(decoder.decode_frame(&mut db), DecodeStatus::Done);
    assert!(db.is_empty());
    assert_eq!(decoder.listener().frames()[1].payload, b"cd");
}

#[test]
fn decode_frame_in_progress() {
    let mut decoder = Http2FrameDecoder::new(FramePartsCollector::new());
    let mut db      = DecodeBuffer::new(&[0, 0, 3, FR_DATA, 0, 0, 0, 0, 1, b'a']);

    assert_eq!(decoder.decode_frame(&mut db), DecodeStatus::InProgress);
    assert!(db.is_empty());

    let mut db = DecodeBuffer::new(b"bc");

    assert_eq!(decoder.decode_frame(&mut db), DecodeStatus::Done);
    assert_eq!(decoder.listener().frames()[0].payload, b"abc");
}

#[test]
fn payload_does_not_read_into_next_frame() {
    let mut v = Vec::new();

    pack_frame_header!(v, 3, FR_UNKNOWN_TEST, 0, 1);
    pack_bytes!(v, b"abc");
    pack_frame_header!(v, 3, FR_CONTINUATION, FL_END_HEADERS, 1);
    pack_bytes!(v, b"def");

    let decoded = assert_resumable(&v);

    assert_eq!(decoded.frames[0].payload, b"abc");
    assert_eq!(decoded.frames[1].payload, b"def");
}

const FR_UNKNOWN_TEST: u8 = 0x42;

#[test]
fn rejected_frame() {
    let mut v = Vec::new();

    pack_frame_header!(v, 5, FR_DATA, 0, 1);
    pack_bytes!(v, b"hello");

    let mut collector = FramePartsCollector::new();

    collector.set_accept_frames(false);

    let mut decoder = Http2FrameDecoder::new(collector);

    match decoder.resume(&v) {
        Err(FrameError::Rejected { header }) => {
            assert_eq!(header.frame_type(), FrameType::Data);
        },
        result => panic!("unexpected result: {:?}", result)
    }

    assert_eq!(decoder.byte_count(), 9);
    assert_eq!(decoder.state(), DecoderState::DiscardPayload);

    assert_eq!(decoder.resume(&v[9..]), Ok(5));
    assert_eq!(decoder.state(), DecoderState::StartDecodingHeader);

    let frames = decoder.into_listener().into_frames();

    assert_eq!(frames.len(), 1);
    assert!(frames[0].rejected);
    assert_eq!(frames[0].header, None);
    assert!(frames[0].payload.is_empty());
}

#[test]
fn rejected_frame_resumable() {
    let mut v = Vec::new();

    pack_frame_header!(v, 5, FR_PING, 0, 0);
    pack_bytes!(v, b"hello");

    let mut collector = FramePartsCollector::new();

    collector.set_accept_frames(false);

    let one = decode_chunks_with(Http2FrameDecoder::new(collector.clone()), &[&v]);

    for point in 1..v.len() {
        let split = decode_chunks_with(Http2FrameDecoder::new(collector.clone()),
                                       &[&v[..point], &v[point..]]);

        assert_eq!(split, one);
    }

    assert_eq!(one.errors.len(), 1);
    assert!(one.frames[0].rejected);
}

#[test]
fn maximum_payload_size_exceeded() {
    let mut v = Vec::new();

    pack_frame_header!(v, 11, FR_DATA, 0, 1);
    pack_bytes!(v, b"hello world");
    pack_frame_header!(v, 10, FR_DATA, 0, 1);
    pack_bytes!(v, b"0123456789");

    let decoder = Http2FrameDecoder::with_maximum_payload_size(FramePartsCollector::new(), 10);
    let decoded = decode_chunks_with(decoder, &[&v]);

    assert_eq!(decoded.frames.len(), 2);
    assert!(decoded.frames[0].frame_size_error);
    assert!(decoded.frames[0].payload.is_empty());
    assert_eq!(decoded.frames[1].payload, b"0123456789");
    assert_eq!(decoded.errors.len(), 1);
    assert_eq!(decoded.errors[0].error_code(), ErrorCode::FrameSize);

    // stream error
    assert!(!decoded.errors[0].is_connection_error());
}

#[test]
fn default_maximum_payload_size() {
    let mut v = Vec::new();

    pack_frame_header!(v, DEFAULT_MAX_FRAME_SIZE + 1, FR_SETTINGS, 0, 0);

    let decoded = decode(&v);

    assert!(decoded.frames[0].frame_size_error);
    assert!(decoded.errors[0].is_connection_error());
    assert_eq!(decoded.state, DecoderState::DiscardPayload);
}

#[test]
fn maximum_payload_size_clamped() {
    let mut decoder = Http2FrameDecoder::new(NoOpListener);

    assert_eq!(decoder.maximum_payload_size(), DEFAULT_MAX_FRAME_SIZE);

    decoder.set_maximum_payload_size(usize::MAX);

    assert_eq!(decoder.maximum_payload_size(), MAX_ALLOWED_FRAME_SIZE);

    decoder.set_maximum_payload_size(100);

    assert_eq!(decoder.maximum_payload_size(), 100);
}

#[test]
fn error_then_valid_frame() {
    let mut v = Vec::new();

    pack_frame_header!(v, 9, FR_PING, 0, 0);
    pack_bytes!(v, b"123456789");
    pack_frame_header!(v, 8, FR_PING, FL_ACK, 0);
    pack_bytes!(v, b"12345678");

    let decoded = assert_resumable(&v);

    assert_eq!(decoded.frames.len(), 2);
    assert!(decoded.frames[0].frame_size_error);
    assert!(decoded.frames[1].ack);
    assert_eq!(decoded.frames[1].ping.map(|ping| ping.opaque_bytes), Some(*b"12345678"));
    assert_eq!(decoded.errors.len(), 1);
}

#[test]
fn resume_stops_at_error() {
    let mut v = Vec::new();

    pack_frame_header!(v, 2, FR_RST_STREAM, 0, 1);
    pack_bytes!(v, &[0, 0]);
    pack_frame_header!(v, 0, FR_DATA, 0, 1);

    let mut decoder = Http2FrameDecoder::new(FramePartsCollector::new());

    assert!(decoder.resume(&v).is_err());
    assert_eq!(decoder.byte_count(), 11);
    assert_eq!(decoder.listener().frames().len(), 1);

    assert_eq!(decoder.resume(&v[11..]), Ok(9));
    assert_eq!(decoder.listener().frames().len(), 2);
}

#[test]
fn reset() {
    let mut decoder = Http2FrameDecoder::new(FramePartsCollector::new());

    assert_eq!(decoder.resume(&[0, 0, 5, FR_DATA, 0, 0, 0, 0, 1, b'a']), Ok(10));
    assert_eq!(decoder.state(), DecoderState::ResumeDecodingPayload);

    decoder.reset();
    decoder.listener_mut().clear();

    assert_eq!(decoder.state(), DecoderState::StartDecodingHeader);
    assert_eq!(decoder.byte_count(), 0);

    assert_eq!(decoder.resume(&[0, 0, 1, FR_DATA, 0, 0, 0, 0, 3, b'z']), Ok(10));

    let frames = decoder.listener().frames();

    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].received_header.stream_id(), 3);
    assert_eq!(frames[0].payload, b"z");
}

#[test]
fn logging_listener() {
    let stream  = conversation();
    let mut one = Http2FrameDecoder::new(LoggingListener::new(FramePartsCollector::new()));
    let two     = decode(&stream);

    assert_eq!(one.resume(&stream), Ok(stream.len()));
    assert_eq!(one.into_listener().into_inner().into_frames(), two.frames);
}

#[test]
fn no_op_listener() {
    let stream      = conversation();
    let mut decoder = Http2FrameDecoder::new(NoOpListener);

    for chunk in stream.chunks(3) {
        assert_eq!(decoder.resume(chunk), Ok(chunk.len()));
    }

    assert_eq!(decoder.byte_count(), stream.len());
}

#[test]
fn empty_chunk() {
    let mut decoder = Http2FrameDecoder::new(FramePartsCollector::new());

    assert_eq!(decoder.resume(&[]), Ok(0));
    assert_eq!(decoder.state(), DecoderState::StartDecodingHeader);
}
