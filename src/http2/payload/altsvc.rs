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

//! `ALTSVC` payload decoder.

use crate::decode_buffer::DecodeBuffer;
use crate::decode_status::DecodeStatus;
use crate::http2::frame_decoder_state::FrameDecoderState;
use crate::http2::frame_type::FrameType;
use crate::http2::listener::FrameDecoderListener;
use crate::http2::payload::DecodePayload;
use crate::http2::structures::{ AltSvcFields, Structure };

/// Payload decoding states.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum AltSvcPayloadState {
    /// Starting on the origin length.
    StartDecodingStruct,

    /// Delivering the origin and then the field value.
    DecodingStrings,

    /// Resuming the origin length split across chunks.
    ResumeDecodingStruct
}

/// Decodes the payload of an `ALTSVC` frame.
///
/// The payload is a 2-byte origin length, the origin, and the field value filling out the rest.
#[derive(Debug)]
pub struct AltSvcPayloadDecoder {
    alt_svc_fields: AltSvcFields,
    payload_state:  AltSvcPayloadState
}

impl AltSvcPayloadDecoder {
    /// Create a new `AltSvcPayloadDecoder`.
    pub fn new() -> AltSvcPayloadDecoder {
        AltSvcPayloadDecoder{
            alt_svc_fields: AltSvcFields::default(),
            payload_state:  AltSvcPayloadState::StartDecodingStruct
        }
    }

    /// Retrieve the current state.
    pub fn payload_state(&self) -> AltSvcPayloadState {
        self.payload_state
    }

    /// Validate the origin length and report the start of the frame.
    fn handle_decoded_struct<L: FrameDecoderListener>(&mut self,
                                                      state: &mut FrameDecoderState<L>)
    -> DecodeStatus {
        let origin_length = self.alt_svc_fields.origin_length as usize;

        if origin_length > state.remaining_payload() {
            return state.report_frame_size_error();
        }

        let header       = *state.frame_header();
        let value_length = state.remaining_payload() - origin_length;

        state.listener_mut().on_alt_svc_start(&header, origin_length, value_length);

        self.payload_state = AltSvcPayloadState::DecodingStrings;

        DecodeStatus::Done
    }

    /// Deliver the available portion of the origin, followed by the field value.
    fn decode_strings<L: FrameDecoderListener>(&mut self, state: &mut FrameDecoderState<L>,
                                               db: &mut DecodeBuffer) -> DecodeStatus {
        let origin_length = self.alt_svc_fields.origin_length as usize;
        let value_length  = state.frame_header().payload_length() as usize
                          - origin_length
                          - AltSvcFields::ENCODED_SIZE;

        if state.remaining_payload() > value_length {
            let remaining_origin = state.remaining_payload() - value_length;
            let available        = db.min_length_remaining(remaining_origin);

            if available > 0 {
                state.listener_mut().on_alt_svc_origin_data(&db.cursor()[..available]);

                db.advance_cursor(available);
                state.consume_payload(available);
            }

            if available < remaining_origin {
                return DecodeStatus::InProgress;
            }
        }

        let available = state.available_payload(db);

        if available > 0 {
            state.listener_mut().on_alt_svc_value_data(&db.cursor()[..available]);

            db.advance_cursor(available);
            state.consume_payload(available);
        }

        if state.remaining_payload() == 0 {
            state.listener_mut().on_alt_svc_end();

            return DecodeStatus::Done;
        }

        DecodeStatus::InProgress
    }
}

impl Default for AltSvcPayloadDecoder {
    fn default() -> AltSvcPayloadDecoder {
        AltSvcPayloadDecoder::new()
    }
}

impl DecodePayload for AltSvcPayloadDecoder {
    fn start_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                       state: &mut FrameDecoderState<L>,
                                                       db: &mut DecodeBuffer) -> DecodeStatus {
        debug_assert_eq!(state.frame_header().frame_type(), FrameType::AltSvc);
        debug_assert!(db.remaining() <= state.frame_header().payload_length() as usize);

        state.initialize_remainders();

        self.payload_state = AltSvcPayloadState::StartDecodingStruct;

        self.resume_decoding_payload(state, db)
    }

    fn resume_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                        state: &mut FrameDecoderState<L>,
                                                        db: &mut DecodeBuffer) -> DecodeStatus {
        debug_assert!(db.remaining() <= state.remaining_payload());

        let status = match self.payload_state {
            AltSvcPayloadState::StartDecodingStruct => {
                state.start_decoding_structure_in_payload(&mut self.alt_svc_fields, db)
            },
            AltSvcPayloadState::ResumeDecodingStruct => {
                state.resume_decoding_structure_in_payload(&mut self.alt_svc_fields, db)
            },
            AltSvcPayloadState::DecodingStrings => {
                return self.decode_strings(state, db);
            }
        };

        if status != DecodeStatus::Done {
            self.payload_state = AltSvcPayloadState::ResumeDecodingStruct;

            return status;
        }

        if self.handle_decoded_struct(state) != DecodeStatus::Done {
            return DecodeStatus::Error;
        }

        self.decode_strings(state, db)
    }
}
