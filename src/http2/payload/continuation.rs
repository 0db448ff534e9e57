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

//! `CONTINUATION` payload decoder.

use crate::decode_buffer::DecodeBuffer;
use crate::decode_status::DecodeStatus;
use crate::http2::frame_decoder_state::FrameDecoderState;
use crate::http2::frame_type::FrameType;
use crate::http2::listener::FrameDecoderListener;
use crate::http2::payload::DecodePayload;

/// Decodes the payload of a `CONTINUATION` frame. The entire payload is a header block fragment.
#[derive(Debug,Default)]
pub struct ContinuationPayloadDecoder;

impl ContinuationPayloadDecoder {
    /// Create a new `ContinuationPayloadDecoder`.
    pub fn new() -> ContinuationPayloadDecoder {
        ContinuationPayloadDecoder
    }
}

impl DecodePayload for ContinuationPayloadDecoder {
    fn start_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                       state: &mut FrameDecoderState<L>,
                                                       db: &mut DecodeBuffer) -> DecodeStatus {
        let header = *state.frame_header();

        debug_assert_eq!(header.frame_type(), FrameType::Continuation);
        debug_assert!(db.remaining() <= header.payload_length() as usize);

        state.initialize_remainders();
        state.listener_mut().on_continuation_start(&header);

        self.resume_decoding_payload(state, db)
    }

    fn resume_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                        state: &mut FrameDecoderState<L>,
                                                        db: &mut DecodeBuffer) -> DecodeStatus {
        debug_assert!(db.remaining() <= state.remaining_payload());

        let available = state.available_payload(db);

        if available > 0 {
            state.listener_mut().on_hpack_fragment(&db.cursor()[..available]);

            db.advance_cursor(available);
            state.consume_payload(available);
        }

        if state.remaining_payload() == 0 {
            state.listener_mut().on_continuation_end();

            return DecodeStatus::Done;
        }

        DecodeStatus::InProgress
    }
}
