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

//! HTTP/2 frame decoder.

use crate::decode_buffer::DecodeBuffer;
use crate::decode_status::DecodeStatus;
use crate::http2::flags::{ FL_ACK, FL_END_HEADERS, FL_END_STREAM, FL_PADDED, FL_PRIORITY };
use crate::http2::frame_decoder_state::FrameDecoderState;
use crate::http2::frame_error::FrameError;
use crate::http2::frame_header::{ DEFAULT_MAX_FRAME_SIZE, MAX_ALLOWED_FRAME_SIZE };
use crate::http2::frame_type::FrameType;
use crate::http2::listener::FrameDecoderListener;
use crate::http2::payload::{ DecodePayload, PayloadDecoder };

use std::fmt;

/// Decoder states.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum DecoderState {
    /// Ready to decode the header of the next frame.
    StartDecodingHeader,

    /// The frame header is split across chunks.
    ResumeDecodingHeader,

    /// The frame payload is split across chunks.
    ResumeDecodingPayload,

    /// Skipping the remainder of a frame that failed.
    DiscardPayload
}

impl fmt::Display for DecoderState {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecoderState::StartDecodingHeader   => write!(formatter, "StartDecodingHeader"),
            DecoderState::ResumeDecodingHeader  => write!(formatter, "ResumeDecodingHeader"),
            DecoderState::ResumeDecodingPayload => write!(formatter, "ResumeDecodingPayload"),
            DecoderState::DiscardPayload        => write!(formatter, "DiscardPayload")
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Retrieve the flags defined for `frame_type`, or `None` when the type is unknown and its
/// flags are passed through untouched.
fn defined_flags(frame_type: FrameType) -> Option<u8> {
    match frame_type {
        FrameType::Data           => Some(FL_END_STREAM | FL_PADDED),
        FrameType::Headers        => Some(FL_END_STREAM | FL_END_HEADERS | FL_PADDED | FL_PRIORITY),
        FrameType::Settings       => Some(FL_ACK),
        FrameType::PushPromise    => Some(FL_END_HEADERS | FL_PADDED),
        FrameType::Ping           => Some(FL_ACK),
        FrameType::Continuation   => Some(FL_END_HEADERS),
        FrameType::Priority
        | FrameType::RstStream
        | FrameType::GoAway
        | FrameType::WindowUpdate
        | FrameType::AltSvc
        | FrameType::PriorityUpdate => Some(0),
        FrameType::Unknown(_)     => None
    }
}

// -------------------------------------------------------------------------------------------------

/// HTTP/2 frame decoder.
///
/// Push oriented: bytes are supplied in chunks of any size, and every part of every frame is
/// reported to the listener as soon as it has been decoded. Nothing is buffered other than the
/// bytes of a fixed-size field that straddles two chunks.
///
/// The decoder does not track stream or connection state. It only validates what can be
/// validated within a single frame: payload sizes, padding, and the payload size limit.
///
/// # Examples
///
/// ```
/// use http2_decode_box::http2::{ FramePartsCollector, Http2FrameDecoder };
///
/// let mut decoder = Http2FrameDecoder::new(FramePartsCollector::new());
///
/// // PING frame
/// let frame = [0, 0, 8, 6, 0, 0, 0, 0, 0,
///              1, 2, 3, 4, 5, 6, 7, 8];
///
/// assert_eq!(decoder.resume(&frame[..5]), Ok(5));
/// assert_eq!(decoder.resume(&frame[5..]), Ok(12));
///
/// let frames = decoder.listener().frames();
///
/// assert_eq!(frames.len(), 1);
/// assert_eq!(frames[0].ping.map(|ping| ping.opaque_bytes), Some([1, 2, 3, 4, 5, 6, 7, 8]));
/// ```
pub struct Http2FrameDecoder<L: FrameDecoderListener> {
    /// Total byte count processed.
    byte_count: usize,

    /// Per-frame state, including the listener.
    frame_state: FrameDecoderState<L>,

    /// Largest accepted payload.
    maximum_payload_size: usize,

    /// Decoder of the current frame payload.
    payload_decoder: Option<PayloadDecoder>,

    /// Current state.
    state: DecoderState
}

impl<L: FrameDecoderListener> Http2FrameDecoder<L> {
    /// Create a new `Http2FrameDecoder` that accepts payloads up to the default
    /// `SETTINGS_MAX_FRAME_SIZE` of 16,384 bytes.
    pub fn new(listener: L) -> Http2FrameDecoder<L> {
        Http2FrameDecoder::with_maximum_payload_size(listener, DEFAULT_MAX_FRAME_SIZE)
    }

    /// Create a new `Http2FrameDecoder` that accepts payloads up to `maximum_payload_size`.
    ///
    /// # Arguments
    ///
    /// **`listener`**
    ///
    /// The listener implementation.
    ///
    /// **`maximum_payload_size`**
    ///
    /// The largest accepted payload. Clamped to `MAX_ALLOWED_FRAME_SIZE`.
    pub fn with_maximum_payload_size(listener: L, maximum_payload_size: usize)
    -> Http2FrameDecoder<L> {
        let mut decoder = Http2FrameDecoder{
            byte_count:           0,
            frame_state:          FrameDecoderState::new(listener),
            maximum_payload_size: DEFAULT_MAX_FRAME_SIZE,
            payload_decoder:      None,
            state:                DecoderState::StartDecodingHeader
        };

        decoder.set_maximum_payload_size(maximum_payload_size);
        decoder
    }

    /// Retrieve the largest accepted payload.
    pub fn maximum_payload_size(&self) -> usize {
        self.maximum_payload_size
    }

    /// Set the largest accepted payload, usually to the peer's advertised
    /// `SETTINGS_MAX_FRAME_SIZE`.
    ///
    /// Values above `MAX_ALLOWED_FRAME_SIZE` are clamped.
    pub fn set_maximum_payload_size(&mut self, maximum_payload_size: usize) {
        self.maximum_payload_size = if maximum_payload_size > MAX_ALLOWED_FRAME_SIZE {
            MAX_ALLOWED_FRAME_SIZE
        } else {
            maximum_payload_size
        };
    }

    /// Retrieve the total byte count processed since the instantiation of `Http2FrameDecoder`,
    /// or since the last call to `reset()`.
    ///
    /// The byte count is updated when `resume()` completes.
    pub fn byte_count(&self) -> usize {
        self.byte_count
    }

    /// Retrieve the current state.
    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Retrieve the listener.
    pub fn listener(&self) -> &L {
        self.frame_state.listener()
    }

    /// Retrieve the listener mutably.
    pub fn listener_mut(&mut self) -> &mut L {
        self.frame_state.listener_mut()
    }

    /// Consume the decoder, returning the listener.
    pub fn into_listener(self) -> L {
        self.frame_state.into_listener()
    }

    /// Reset `Http2FrameDecoder` to its initial state, ready for the first byte of a frame.
    ///
    /// The listener and the maximum payload size are kept.
    pub fn reset(&mut self) {
        self.byte_count      = 0;
        self.payload_decoder = None;
        self.state           = DecoderState::StartDecodingHeader;

        self.frame_state.take_error();
    }

    /// Resume decoding an additional chunk of data.
    ///
    /// Frames are decoded until `stream` has been exhausted, in which case the length of
    /// `stream` is returned, or until a frame fails.
    ///
    /// On failure the bytes consumed so far are added to `byte_count()`, and the rest of
    /// `stream` must be supplied again. The remainder of the failed frame is then discarded and
    /// decoding carries on with the next frame.
    ///
    /// # Arguments
    ///
    /// **`stream`**
    ///
    /// The stream of data to be decoded.
    pub fn resume(&mut self, stream: &[u8]) -> Result<usize, FrameError> {
        let mut db = DecodeBuffer::new(stream);

        while db.has_data() {
            if self.decode_frame(&mut db) == DecodeStatus::Error {
                self.byte_count += db.offset();

                match self.frame_state.take_error() {
                    Some(error) => return Err(error),
                    None => debug_assert!(false, "decode error without a recorded error")
                }
            }
        }

        self.byte_count += db.offset();

        Ok(db.offset())
    }

    /// Decode at most one frame from `db`.
    ///
    /// Returns `DecodeStatus::Done` once a frame, or the remainder of a failed frame, has been
    /// consumed. Returns `DecodeStatus::InProgress` when `db` has been exhausted mid-frame, and
    /// `DecodeStatus::Error` when the current frame failed.
    pub fn decode_frame(&mut self, db: &mut DecodeBuffer) -> DecodeStatus {
        trace!("decode_frame: state={}, remaining={}", self.state, db.remaining());

        match self.state {
            DecoderState::StartDecodingHeader => {
                if self.frame_state.start_decoding_frame_header(db) {
                    return self.start_decoding_payload(db);
                }

                self.state = DecoderState::ResumeDecodingHeader;

                DecodeStatus::InProgress
            },
            DecoderState::ResumeDecodingHeader => {
                if self.frame_state.resume_decoding_frame_header(db) {
                    return self.start_decoding_payload(db);
                }

                DecodeStatus::InProgress
            },
            DecoderState::ResumeDecodingPayload => {
                self.resume_decoding_payload(db)
            },
            DecoderState::DiscardPayload => {
                self.discard_payload(db)
            }
        }
    }

    /// Validate the decoded frame header and start on its payload.
    fn start_decoding_payload(&mut self, db: &mut DecodeBuffer) -> DecodeStatus {
        let header = *self.frame_state.frame_header();

        trace!("start_decoding_payload: {}", header);

        if !self.frame_state.listener_mut().on_frame_header(&header) {
            self.frame_state.initialize_remainders();
            self.state = DecoderState::DiscardPayload;

            return self.frame_state.report_rejected();
        }

        if header.payload_length() as usize > self.maximum_payload_size {
            self.frame_state.initialize_remainders();
            self.state = DecoderState::DiscardPayload;

            return self.frame_state.report_frame_size_error();
        }

        if let Some(mask) = defined_flags(header.frame_type()) {
            self.frame_state.retain_flags(mask);
        }

        let mut decoder = PayloadDecoder::for_frame_type(header.frame_type());
        let mut subset  = db.subset(header.payload_length() as usize);
        let status      = decoder.start_decoding_payload(&mut self.frame_state, &mut subset);

        db.advance_cursor(subset.offset());

        self.payload_decoder = Some(decoder);

        self.handle_payload_status(status)
    }

    /// Continue with the payload of the current frame.
    fn resume_decoding_payload(&mut self, db: &mut DecodeBuffer) -> DecodeStatus {
        let remaining  = self.frame_state.remaining_total_payload();
        let mut subset = db.subset(remaining);

        let status = match self.payload_decoder {
            Some(ref mut decoder) => {
                decoder.resume_decoding_payload(&mut self.frame_state, &mut subset)
            },
            None => {
                debug_assert!(false, "resuming a payload without a payload decoder");

                return self.discard_payload(db);
            }
        };

        db.advance_cursor(subset.offset());

        self.handle_payload_status(status)
    }

    /// Transition according to the status of the payload decoder.
    fn handle_payload_status(&mut self, status: DecodeStatus) -> DecodeStatus {
        match status {
            DecodeStatus::Done => {
                self.payload_decoder = None;
                self.state           = DecoderState::StartDecodingHeader;
            },
            DecodeStatus::InProgress => {
                self.state = DecoderState::ResumeDecodingPayload;
            },
            DecodeStatus::Error => {
                self.payload_decoder = None;
                self.state           = DecoderState::DiscardPayload;
            }
        }

        trace!("payload status: {}, next state: {}", status, self.state);

        status
    }

    /// Skip the remainder of a failed frame.
    fn discard_payload(&mut self, db: &mut DecodeBuffer) -> DecodeStatus {
        self.frame_state.fold_padding_into_payload();

        let available = self.frame_state.available_payload(db);

        if available > 0 {
            db.advance_cursor(available);

            self.frame_state.consume_payload(available);
        }

        if self.frame_state.remaining_payload() == 0 {
            trace!("discarded remainder of {}", self.frame_state.frame_header());

            self.state = DecoderState::StartDecodingHeader;

            return DecodeStatus::Done;
        }

        DecodeStatus::InProgress
    }
}

impl<L: FrameDecoderListener + fmt::Debug> fmt::Debug for Http2FrameDecoder<L> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter,
               "Http2FrameDecoder(byte_count: {}, maximum_payload_size: {}, state: {}, {:?})",
               self.byte_count,
               self.maximum_payload_size,
               self.state,
               self.frame_state)
    }
}
