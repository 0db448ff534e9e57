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

//! `PUSH_PROMISE` payload decoder.

use crate::decode_buffer::DecodeBuffer;
use crate::decode_status::DecodeStatus;
use crate::http2::frame_decoder_state::FrameDecoderState;
use crate::http2::frame_type::FrameType;
use crate::http2::listener::FrameDecoderListener;
use crate::http2::payload::DecodePayload;
use crate::http2::structures::PushPromiseFields;

/// Payload decoding states.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum PushPromisePayloadState {
    /// Reading the pad length field.
    ReadPadLength,

    /// Starting on the promised stream id.
    StartDecodingPushPromiseFields,

    /// Delivering the header block fragment.
    ReadPayload,

    /// Skipping trailing padding.
    SkipPadding,

    /// Resuming the promised stream id split across chunks.
    ResumeDecodingPushPromiseFields
}

/// Decodes the payload of a `PUSH_PROMISE` frame.
///
/// The pad length is not reported on its own. It is folded into the `total_padding_length`
/// argument of `on_push_promise_start()`, which is only executed once the promised stream id
/// is known.
#[derive(Debug)]
pub struct PushPromisePayloadDecoder {
    payload_state:       PushPromisePayloadState,
    push_promise_fields: PushPromiseFields
}

impl PushPromisePayloadDecoder {
    /// Create a new `PushPromisePayloadDecoder`.
    pub fn new() -> PushPromisePayloadDecoder {
        PushPromisePayloadDecoder{
            payload_state:       PushPromisePayloadState::ReadPadLength,
            push_promise_fields: PushPromiseFields::default()
        }
    }

    /// Retrieve the current state.
    pub fn payload_state(&self) -> PushPromisePayloadState {
        self.payload_state
    }

    fn report_push_promise<L: FrameDecoderListener>(&self, state: &mut FrameDecoderState<L>) {
        let header = *state.frame_header();

        let total_padding_length = if header.is_padded() {
            1 + state.remaining_padding()
        } else {
            0
        };

        state.listener_mut().on_push_promise_start(
            &header,
            &self.push_promise_fields,
            total_padding_length
        );
    }
}

impl Default for PushPromisePayloadDecoder {
    fn default() -> PushPromisePayloadDecoder {
        PushPromisePayloadDecoder::new()
    }
}

impl DecodePayload for PushPromisePayloadDecoder {
    fn start_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                       state: &mut FrameDecoderState<L>,
                                                       db: &mut DecodeBuffer) -> DecodeStatus {
        let header = *state.frame_header();

        debug_assert_eq!(header.frame_type(), FrameType::PushPromise);
        debug_assert!(db.remaining() <= header.payload_length() as usize);

        state.initialize_remainders();

        self.payload_state = if header.is_padded() {
            PushPromisePayloadState::ReadPadLength
        } else {
            PushPromisePayloadState::StartDecodingPushPromiseFields
        };

        self.resume_decoding_payload(state, db)
    }

    fn resume_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                        state: &mut FrameDecoderState<L>,
                                                        db: &mut DecodeBuffer) -> DecodeStatus {
        debug_assert!(db.remaining() <= state.remaining_total_payload());

        loop {
            match self.payload_state {
                PushPromisePayloadState::ReadPadLength => {
                    let status = state.read_pad_length(db, false);

                    if status != DecodeStatus::Done {
                        return status;
                    }

                    self.payload_state = PushPromisePayloadState::StartDecodingPushPromiseFields;
                },
                PushPromisePayloadState::StartDecodingPushPromiseFields => {
                    let status = state.start_decoding_structure_in_payload(
                        &mut self.push_promise_fields,
                        db
                    );

                    if status != DecodeStatus::Done {
                        self.payload_state =
                            PushPromisePayloadState::ResumeDecodingPushPromiseFields;

                        return status;
                    }

                    self.report_push_promise(state);

                    self.payload_state = PushPromisePayloadState::ReadPayload;
                },
                PushPromisePayloadState::ResumeDecodingPushPromiseFields => {
                    let status = state.resume_decoding_structure_in_payload(
                        &mut self.push_promise_fields,
                        db
                    );

                    if status != DecodeStatus::Done {
                        return status;
                    }

                    self.report_push_promise(state);

                    self.payload_state = PushPromisePayloadState::ReadPayload;
                },
                PushPromisePayloadState::ReadPayload => {
                    let available = state.available_payload(db);

                    if available > 0 {
                        state.listener_mut().on_hpack_fragment(&db.cursor()[..available]);

                        db.advance_cursor(available);
                        state.consume_payload(available);
                    }

                    if state.remaining_payload() > 0 {
                        return DecodeStatus::InProgress;
                    }

                    self.payload_state = PushPromisePayloadState::SkipPadding;
                },
                PushPromisePayloadState::SkipPadding => {
                    if state.skip_padding(db) {
                        state.listener_mut().on_push_promise_end();

                        return DecodeStatus::Done;
                    }

                    return DecodeStatus::InProgress;
                }
            }
        }
    }
}
