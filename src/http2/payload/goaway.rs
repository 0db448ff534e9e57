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

//! `GOAWAY` payload decoder.

use crate::decode_buffer::DecodeBuffer;
use crate::decode_status::DecodeStatus;
use crate::http2::frame_decoder_state::FrameDecoderState;
use crate::http2::frame_type::FrameType;
use crate::http2::listener::FrameDecoderListener;
use crate::http2::payload::DecodePayload;
use crate::http2::structures::GoAwayFields;

/// Payload decoding states.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum GoAwayPayloadState {
    /// Starting on the last stream id and error code.
    StartDecodingFixedFields,

    /// Delivering the opaque debug data.
    ReadOpaqueData,

    /// Resuming the fixed fields split across chunks.
    ResumeDecodingFixedFields
}

/// Decodes the payload of a `GOAWAY` frame.
#[derive(Debug)]
pub struct GoAwayPayloadDecoder {
    go_away_fields: GoAwayFields,
    payload_state:  GoAwayPayloadState
}

impl GoAwayPayloadDecoder {
    /// Create a new `GoAwayPayloadDecoder`.
    pub fn new() -> GoAwayPayloadDecoder {
        GoAwayPayloadDecoder{
            go_away_fields: GoAwayFields::default(),
            payload_state:  GoAwayPayloadState::StartDecodingFixedFields
        }
    }

    /// Retrieve the current state.
    pub fn payload_state(&self) -> GoAwayPayloadState {
        self.payload_state
    }
}

impl Default for GoAwayPayloadDecoder {
    fn default() -> GoAwayPayloadDecoder {
        GoAwayPayloadDecoder::new()
    }
}

impl DecodePayload for GoAwayPayloadDecoder {
    fn start_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                       state: &mut FrameDecoderState<L>,
                                                       db: &mut DecodeBuffer) -> DecodeStatus {
        debug_assert_eq!(state.frame_header().frame_type(), FrameType::GoAway);
        debug_assert!(db.remaining() <= state.frame_header().payload_length() as usize);

        state.initialize_remainders();

        self.payload_state = GoAwayPayloadState::StartDecodingFixedFields;

        self.resume_decoding_payload(state, db)
    }

    fn resume_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                        state: &mut FrameDecoderState<L>,
                                                        db: &mut DecodeBuffer) -> DecodeStatus {
        debug_assert!(db.remaining() <= state.remaining_payload());

        loop {
            match self.payload_state {
                GoAwayPayloadState::StartDecodingFixedFields => {
                    let status = state.start_decoding_structure_in_payload(
                        &mut self.go_away_fields,
                        db
                    );

                    if status != DecodeStatus::Done {
                        self.payload_state = GoAwayPayloadState::ResumeDecodingFixedFields;

                        return status;
                    }

                    let header = *state.frame_header();

                    state.listener_mut().on_go_away_start(&header, &self.go_away_fields);

                    self.payload_state = GoAwayPayloadState::ReadOpaqueData;
                },
                GoAwayPayloadState::ResumeDecodingFixedFields => {
                    let status = state.resume_decoding_structure_in_payload(
                        &mut self.go_away_fields,
                        db
                    );

                    if status != DecodeStatus::Done {
                        return status;
                    }

                    let header = *state.frame_header();

                    state.listener_mut().on_go_away_start(&header, &self.go_away_fields);

                    self.payload_state = GoAwayPayloadState::ReadOpaqueData;
                },
                GoAwayPayloadState::ReadOpaqueData => {
                    let available = state.available_payload(db);

                    if available > 0 {
                        state.listener_mut().on_go_away_opaque_data(&db.cursor()[..available]);

                        db.advance_cursor(available);
                        state.consume_payload(available);
                    }

                    if state.remaining_payload() > 0 {
                        return DecodeStatus::InProgress;
                    }

                    state.listener_mut().on_go_away_end();

                    return DecodeStatus::Done;
                }
            }
        }
    }
}
