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

//! `WINDOW_UPDATE` payload decoder.

use crate::decode_buffer::DecodeBuffer;
use crate::decode_status::DecodeStatus;
use crate::http2::frame_decoder_state::FrameDecoderState;
use crate::http2::frame_type::FrameType;
use crate::http2::listener::FrameDecoderListener;
use crate::http2::payload::DecodePayload;
use crate::http2::structures::{ Structure, WindowUpdateFields };

/// Decodes the payload of a `WINDOW_UPDATE` frame.
#[derive(Debug,Default)]
pub struct WindowUpdatePayloadDecoder {
    window_update_fields: WindowUpdateFields
}

impl WindowUpdatePayloadDecoder {
    /// Create a new `WindowUpdatePayloadDecoder`.
    pub fn new() -> WindowUpdatePayloadDecoder {
        WindowUpdatePayloadDecoder::default()
    }

    fn handle_status<L: FrameDecoderListener>(&mut self, state: &mut FrameDecoderState<L>,
                                              status: DecodeStatus) -> DecodeStatus {
        if status == DecodeStatus::Done {
            if state.remaining_payload() == 0 {
                let header = *state.frame_header();

                state.listener_mut().on_window_update(
                    &header,
                    self.window_update_fields.window_size_increment
                );

                return DecodeStatus::Done;
            }

            return state.report_frame_size_error();
        }

        status
    }
}

impl DecodePayload for WindowUpdatePayloadDecoder {
    fn start_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                       state: &mut FrameDecoderState<L>,
                                                       db: &mut DecodeBuffer) -> DecodeStatus {
        let header       = *state.frame_header();
        let total_length = header.payload_length() as usize;

        debug_assert_eq!(header.frame_type(), FrameType::WindowUpdate);

        state.initialize_remainders();

        if db.remaining() == WindowUpdateFields::ENCODED_SIZE
        && total_length == WindowUpdateFields::ENCODED_SIZE {
            // the entire payload is available
            let increment = db.decode_u31();

            state.consume_payload(WindowUpdateFields::ENCODED_SIZE);
            state.listener_mut().on_window_update(&header, increment);

            return DecodeStatus::Done;
        }

        let status = state.start_decoding_structure_in_payload(
            &mut self.window_update_fields,
            db
        );

        self.handle_status(state, status)
    }

    fn resume_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                        state: &mut FrameDecoderState<L>,
                                                        db: &mut DecodeBuffer) -> DecodeStatus {
        let status = state.resume_decoding_structure_in_payload(
            &mut self.window_update_fields,
            db
        );

        self.handle_status(state, status)
    }
}
