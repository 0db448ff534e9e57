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

//! `PRIORITY` payload decoder.

use crate::decode_buffer::DecodeBuffer;
use crate::decode_status::DecodeStatus;
use crate::http2::frame_decoder_state::FrameDecoderState;
use crate::http2::frame_type::FrameType;
use crate::http2::listener::FrameDecoderListener;
use crate::http2::payload::DecodePayload;
use crate::http2::structures::PriorityFields;

/// Decodes the payload of a `PRIORITY` frame.
#[derive(Debug,Default)]
pub struct PriorityPayloadDecoder {
    priority_fields: PriorityFields
}

impl PriorityPayloadDecoder {
    /// Create a new `PriorityPayloadDecoder`.
    pub fn new() -> PriorityPayloadDecoder {
        PriorityPayloadDecoder::default()
    }

    fn handle_status<L: FrameDecoderListener>(&mut self, state: &mut FrameDecoderState<L>,
                                              status: DecodeStatus) -> DecodeStatus {
        if status == DecodeStatus::Done {
            if state.remaining_payload() == 0 {
                let header = *state.frame_header();

                state.listener_mut().on_priority_frame(&header, &self.priority_fields);

                return DecodeStatus::Done;
            }

            // payload is too long
            return state.report_frame_size_error();
        }

        status
    }
}

impl DecodePayload for PriorityPayloadDecoder {
    fn start_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                       state: &mut FrameDecoderState<L>,
                                                       db: &mut DecodeBuffer) -> DecodeStatus {
        debug_assert_eq!(state.frame_header().frame_type(), FrameType::Priority);

        state.initialize_remainders();

        let status = state.start_decoding_structure_in_payload(&mut self.priority_fields, db);

        self.handle_status(state, status)
    }

    fn resume_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                        state: &mut FrameDecoderState<L>,
                                                        db: &mut DecodeBuffer) -> DecodeStatus {
        let status = state.resume_decoding_structure_in_payload(&mut self.priority_fields, db);

        self.handle_status(state, status)
    }
}
