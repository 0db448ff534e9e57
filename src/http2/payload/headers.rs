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

//! `HEADERS` payload decoder.

use crate::decode_buffer::DecodeBuffer;
use crate::decode_status::DecodeStatus;
use crate::http2::frame_decoder_state::FrameDecoderState;
use crate::http2::frame_type::FrameType;
use crate::http2::listener::FrameDecoderListener;
use crate::http2::payload::DecodePayload;
use crate::http2::structures::PriorityFields;

/// Payload decoding states.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum HeadersPayloadState {
    /// Reading the pad length field.
    ReadPadLength,

    /// Starting on the priority fields.
    StartDecodingPriorityFields,

    /// Delivering the header block fragment.
    ReadPayload,

    /// Skipping trailing padding.
    SkipPadding,

    /// Resuming the priority fields split across chunks.
    ResumeDecodingPriorityFields
}

/// Decodes the payload of a `HEADERS` frame.
#[derive(Debug)]
pub struct HeadersPayloadDecoder {
    payload_state:   HeadersPayloadState,
    priority_fields: PriorityFields
}

impl HeadersPayloadDecoder {
    /// Create a new `HeadersPayloadDecoder`.
    pub fn new() -> HeadersPayloadDecoder {
        HeadersPayloadDecoder{
            payload_state:   HeadersPayloadState::ReadPadLength,
            priority_fields: PriorityFields::default()
        }
    }

    /// Retrieve the current state.
    pub fn payload_state(&self) -> HeadersPayloadState {
        self.payload_state
    }
}

impl Default for HeadersPayloadDecoder {
    fn default() -> HeadersPayloadDecoder {
        HeadersPayloadDecoder::new()
    }
}

impl DecodePayload for HeadersPayloadDecoder {
    fn start_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                       state: &mut FrameDecoderState<L>,
                                                       db: &mut DecodeBuffer) -> DecodeStatus {
        let header       = *state.frame_header();
        let total_length = header.payload_length() as usize;

        debug_assert_eq!(header.frame_type(), FrameType::Headers);
        debug_assert!(db.remaining() <= total_length);

        state.initialize_remainders();

        if !header.is_padded() && !header.has_priority() && db.remaining() == total_length {
            // the entire unpadded payload is available
            state.listener_mut().on_headers_start(&header);

            if total_length > 0 {
                state.listener_mut().on_hpack_fragment(&db.cursor()[..total_length]);

                db.advance_cursor(total_length);
                state.consume_payload(total_length);
            }

            state.listener_mut().on_headers_end();

            return DecodeStatus::Done;
        }

        self.payload_state = if header.is_padded() {
            HeadersPayloadState::ReadPadLength
        } else if header.has_priority() {
            HeadersPayloadState::StartDecodingPriorityFields
        } else {
            HeadersPayloadState::ReadPayload
        };

        state.listener_mut().on_headers_start(&header);

        self.resume_decoding_payload(state, db)
    }

    fn resume_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                        state: &mut FrameDecoderState<L>,
                                                        db: &mut DecodeBuffer) -> DecodeStatus {
        debug_assert!(db.remaining() <= state.remaining_total_payload());

        loop {
            match self.payload_state {
                HeadersPayloadState::ReadPadLength => {
                    let status = state.read_pad_length(db, true);

                    if status != DecodeStatus::Done {
                        return status;
                    }

                    self.payload_state = if state.frame_header().has_priority() {
                        HeadersPayloadState::StartDecodingPriorityFields
                    } else {
                        HeadersPayloadState::ReadPayload
                    };
                },
                HeadersPayloadState::StartDecodingPriorityFields => {
                    let status = state.start_decoding_structure_in_payload(
                        &mut self.priority_fields,
                        db
                    );

                    if status != DecodeStatus::Done {
                        self.payload_state = HeadersPayloadState::ResumeDecodingPriorityFields;

                        return status;
                    }

                    state.listener_mut().on_headers_priority(&self.priority_fields);

                    self.payload_state = HeadersPayloadState::ReadPayload;
                },
                HeadersPayloadState::ResumeDecodingPriorityFields => {
                    let status = state.resume_decoding_structure_in_payload(
                        &mut self.priority_fields,
                        db
                    );

                    if status != DecodeStatus::Done {
                        return status;
                    }

                    state.listener_mut().on_headers_priority(&self.priority_fields);

                    self.payload_state = HeadersPayloadState::ReadPayload;
                },
                HeadersPayloadState::ReadPayload => {
                    let available = state.available_payload(db);

                    if available > 0 {
                        state.listener_mut().on_hpack_fragment(&db.cursor()[..available]);

                        db.advance_cursor(available);
                        state.consume_payload(available);
                    }

                    if state.remaining_payload() > 0 {
                        return DecodeStatus::InProgress;
                    }

                    self.payload_state = HeadersPayloadState::SkipPadding;
                },
                HeadersPayloadState::SkipPadding => {
                    if state.skip_padding(db) {
                        state.listener_mut().on_headers_end();

                        return DecodeStatus::Done;
                    }

                    return DecodeStatus::InProgress;
                }
            }
        }
    }
}
