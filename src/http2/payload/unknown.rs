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

//! Payload decoder for frames of an unknown type.

use crate::decode_buffer::DecodeBuffer;
use crate::decode_status::DecodeStatus;
use crate::http2::frame_decoder_state::FrameDecoderState;
use crate::http2::listener::FrameDecoderListener;
use crate::http2::payload::DecodePayload;

/// Delivers the payload of an unknown frame as-is.
///
/// Unknown frames must be ignored by an endpoint, but the listener still gets to see them, so
/// that extensions can be layered above the decoder.
#[derive(Debug,Default)]
pub struct UnknownPayloadDecoder;

impl UnknownPayloadDecoder {
    /// Create a new `UnknownPayloadDecoder`.
    pub fn new() -> UnknownPayloadDecoder {
        UnknownPayloadDecoder
    }
}

impl DecodePayload for UnknownPayloadDecoder {
    fn start_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                       state: &mut FrameDecoderState<L>,
                                                       db: &mut DecodeBuffer) -> DecodeStatus {
        let header = *state.frame_header();

        debug_assert!(header.frame_type().is_unknown());
        debug_assert!(db.remaining() <= header.payload_length() as usize);

        state.initialize_remainders();
        state.listener_mut().on_unknown_start(&header);

        self.resume_decoding_payload(state, db)
    }

    fn resume_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                        state: &mut FrameDecoderState<L>,
                                                        db: &mut DecodeBuffer) -> DecodeStatus {
        debug_assert!(db.remaining() <= state.remaining_payload());

        let available = state.available_payload(db);

        if available > 0 {
            state.listener_mut().on_unknown_payload(&db.cursor()[..available]);

            db.advance_cursor(available);
            state.consume_payload(available);
        }

        if state.remaining_payload() == 0 {
            state.listener_mut().on_unknown_end();

            return DecodeStatus::Done;
        }

        DecodeStatus::InProgress
    }
}
