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

//! `DATA` payload decoder.

use crate::decode_buffer::DecodeBuffer;
use crate::decode_status::DecodeStatus;
use crate::http2::frame_decoder_state::FrameDecoderState;
use crate::http2::frame_type::FrameType;
use crate::http2::listener::FrameDecoderListener;
use crate::http2::payload::DecodePayload;

/// Payload decoding states.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum DataPayloadState {
    /// Reading the pad length field.
    ReadPadLength,

    /// Delivering the payload.
    ReadPayload,

    /// Skipping trailing padding.
    SkipPadding
}

/// Decodes the payload of a `DATA` frame.
#[derive(Debug)]
pub struct DataPayloadDecoder {
    payload_state: DataPayloadState
}

impl DataPayloadDecoder {
    /// Create a new `DataPayloadDecoder`.
    pub fn new() -> DataPayloadDecoder {
        DataPayloadDecoder{
            payload_state: DataPayloadState::ReadPadLength
        }
    }

    /// Retrieve the current state.
    pub fn payload_state(&self) -> DataPayloadState {
        self.payload_state
    }
}

impl Default for DataPayloadDecoder {
    fn default() -> DataPayloadDecoder {
        DataPayloadDecoder::new()
    }
}

impl DecodePayload for DataPayloadDecoder {
    fn start_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                       state: &mut FrameDecoderState<L>,
                                                       db: &mut DecodeBuffer) -> DecodeStatus {
        let header       = *state.frame_header();
        let total_length = header.payload_length() as usize;

        debug_assert_eq!(header.frame_type(), FrameType::Data);
        debug_assert!(db.remaining() <= total_length);

        state.initialize_remainders();

        if !header.is_padded() && db.remaining() == total_length {
            // the entire payload is available
            state.listener_mut().on_data_start(&header);

            if total_length > 0 {
                state.listener_mut().on_data_payload(&db.cursor()[..total_length]);

                db.advance_cursor(total_length);
                state.consume_payload(total_length);
            }

            state.listener_mut().on_data_end();

            return DecodeStatus::Done;
        }

        self.payload_state = if header.is_padded() {
            DataPayloadState::ReadPadLength
        } else {
            DataPayloadState::ReadPayload
        };

        state.listener_mut().on_data_start(&header);

        self.resume_decoding_payload(state, db)
    }

    fn resume_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                        state: &mut FrameDecoderState<L>,
                                                        db: &mut DecodeBuffer) -> DecodeStatus {
        debug_assert!(db.remaining() <= state.remaining_total_payload());

        loop {
            match self.payload_state {
                DataPayloadState::ReadPadLength => {
                    let status = state.read_pad_length(db, true);

                    if status != DecodeStatus::Done {
                        return status;
                    }

                    self.payload_state = DataPayloadState::ReadPayload;
                },
                DataPayloadState::ReadPayload => {
                    let available = state.available_payload(db);

                    if available > 0 {
                        state.listener_mut().on_data_payload(&db.cursor()[..available]);

                        db.advance_cursor(available);
                        state.consume_payload(available);
                    }

                    if state.remaining_payload() > 0 {
                        return DecodeStatus::InProgress;
                    }

                    self.payload_state = DataPayloadState::SkipPadding;
                },
                DataPayloadState::SkipPadding => {
                    if state.skip_padding(db) {
                        state.listener_mut().on_data_end();

                        return DecodeStatus::Done;
                    }

                    return DecodeStatus::InProgress;
                }
            }
        }
    }
}
