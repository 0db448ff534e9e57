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

//! `PING` payload decoder.

use crate::decode_buffer::DecodeBuffer;
use crate::decode_status::DecodeStatus;
use crate::http2::frame_decoder_state::FrameDecoderState;
use crate::http2::frame_type::FrameType;
use crate::http2::listener::FrameDecoderListener;
use crate::http2::payload::DecodePayload;
use crate::http2::structures::{ PingFields, Structure };

/// Decodes the payload of a `PING` frame.
#[derive(Debug,Default)]
pub struct PingPayloadDecoder {
    ping_fields: PingFields
}

impl PingPayloadDecoder {
    /// Create a new `PingPayloadDecoder`.
    pub fn new() -> PingPayloadDecoder {
        PingPayloadDecoder::default()
    }

    /// Finish the frame once the opaque data has been decoded, or pass the status through.
    fn handle_status<L: FrameDecoderListener>(&mut self, state: &mut FrameDecoderState<L>,
                                              status: DecodeStatus) -> DecodeStatus {
        if status == DecodeStatus::Done {
            if state.remaining_payload() == 0 {
                report_ping(state, &self.ping_fields);

                return DecodeStatus::Done;
            }

            // payload is too long
            return state.report_frame_size_error();
        }

        debug_assert!(
               (status == DecodeStatus::InProgress && state.remaining_payload() > 0)
            || (status == DecodeStatus::Error && state.remaining_payload() == 0)
        );

        status
    }
}

impl DecodePayload for PingPayloadDecoder {
    fn start_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                       state: &mut FrameDecoderState<L>,
                                                       db: &mut DecodeBuffer) -> DecodeStatus {
        let total_length = state.frame_header().payload_length() as usize;

        debug_assert_eq!(state.frame_header().frame_type(), FrameType::Ping);
        debug_assert!(db.remaining() <= total_length);

        state.initialize_remainders();

        if db.remaining() == PingFields::ENCODED_SIZE && total_length == PingFields::ENCODED_SIZE {
            // the entire payload is available
            let ping = PingFields::decode(db);

            state.consume_payload(PingFields::ENCODED_SIZE);

            report_ping(state, &ping);

            return DecodeStatus::Done;
        }

        let status = state.start_decoding_structure_in_payload(&mut self.ping_fields, db);

        self.handle_status(state, status)
    }

    fn resume_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                        state: &mut FrameDecoderState<L>,
                                                        db: &mut DecodeBuffer) -> DecodeStatus {
        let status = state.resume_decoding_structure_in_payload(&mut self.ping_fields, db);

        self.handle_status(state, status)
    }
}

/// Execute `on_ping()` or `on_ping_ack()` depending on the ack flag.
fn report_ping<L: FrameDecoderListener>(state: &mut FrameDecoderState<L>, ping: &PingFields) {
    let header = *state.frame_header();

    if header.is_ack() {
        state.listener_mut().on_ping_ack(&header, ping);
    } else {
        state.listener_mut().on_ping(&header, ping);
    }
}
