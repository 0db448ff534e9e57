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

//! `PRIORITY_UPDATE` payload decoder.

use crate::decode_buffer::DecodeBuffer;
use crate::decode_status::DecodeStatus;
use crate::http2::frame_decoder_state::FrameDecoderState;
use crate::http2::frame_type::FrameType;
use crate::http2::listener::FrameDecoderListener;
use crate::http2::payload::DecodePayload;
use crate::http2::structures::PriorityUpdateFields;

/// Payload decoding states.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum PriorityUpdatePayloadState {
    /// Starting on the prioritized stream id.
    StartDecodingFixedFields,

    /// Delivering the priority field value.
    ReadPriorityFieldValue,

    /// Resuming the prioritized stream id split across chunks.
    ResumeDecodingFixedFields
}

/// Decodes the payload of a `PRIORITY_UPDATE` frame.
#[derive(Debug)]
pub struct PriorityUpdatePayloadDecoder {
    payload_state:          PriorityUpdatePayloadState,
    priority_update_fields: PriorityUpdateFields
}

impl PriorityUpdatePayloadDecoder {
    /// Create a new `PriorityUpdatePayloadDecoder`.
    pub fn new() -> PriorityUpdatePayloadDecoder {
        PriorityUpdatePayloadDecoder{
            payload_state:          PriorityUpdatePayloadState::StartDecodingFixedFields,
            priority_update_fields: PriorityUpdateFields::default()
        }
    }

    /// Retrieve the current state.
    pub fn payload_state(&self) -> PriorityUpdatePayloadState {
        self.payload_state
    }
}

impl Default for PriorityUpdatePayloadDecoder {
    fn default() -> PriorityUpdatePayloadDecoder {
        PriorityUpdatePayloadDecoder::new()
    }
}

impl DecodePayload for PriorityUpdatePayloadDecoder {
    fn start_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                       state: &mut FrameDecoderState<L>,
                                                       db: &mut DecodeBuffer) -> DecodeStatus {
        debug_assert_eq!(state.frame_header().frame_type(), FrameType::PriorityUpdate);
        debug_assert!(db.remaining() <= state.frame_header().payload_length() as usize);

        state.initialize_remainders();

        self.payload_state = PriorityUpdatePayloadState::StartDecodingFixedFields;

        self.resume_decoding_payload(state, db)
    }

    fn resume_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                        state: &mut FrameDecoderState<L>,
                                                        db: &mut DecodeBuffer) -> DecodeStatus {
        debug_assert!(db.remaining() <= state.remaining_payload());

        loop {
            match self.payload_state {
                PriorityUpdatePayloadState::StartDecodingFixedFields
                | PriorityUpdatePayloadState::ResumeDecodingFixedFields => {
                    let status = if self.payload_state
                                 == PriorityUpdatePayloadState::StartDecodingFixedFields {
                        state.start_decoding_structure_in_payload(
                            &mut self.priority_update_fields,
                            db
                        )
                    } else {
                        state.resume_decoding_structure_in_payload(
                            &mut self.priority_update_fields,
                            db
                        )
                    };

                    if status != DecodeStatus::Done {
                        self.payload_state = PriorityUpdatePayloadState::ResumeDecodingFixedFields;

                        return status;
                    }

                    let header = *state.frame_header();

                    state.listener_mut().on_priority_update_start(
                        &header,
                        &self.priority_update_fields
                    );

                    self.payload_state = PriorityUpdatePayloadState::ReadPriorityFieldValue;
                },
                PriorityUpdatePayloadState::ReadPriorityFieldValue => {
                    let available = state.available_payload(db);

                    if available > 0 {
                        state.listener_mut().on_priority_update_payload(
                            &db.cursor()[..available]
                        );

                        db.advance_cursor(available);
                        state.consume_payload(available);
                    }

                    if state.remaining_payload() > 0 {
                        return DecodeStatus::InProgress;
                    }

                    state.listener_mut().on_priority_update_end();

                    return DecodeStatus::Done;
                }
            }
        }
    }
}
