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

//! `SETTINGS` payload decoder.

use crate::decode_buffer::DecodeBuffer;
use crate::decode_status::DecodeStatus;
use crate::http2::frame_decoder_state::FrameDecoderState;
use crate::http2::frame_type::FrameType;
use crate::http2::listener::FrameDecoderListener;
use crate::http2::payload::DecodePayload;
use crate::http2::structures::SettingFields;

/// Decodes the payload of a `SETTINGS` frame.
///
/// Each setting is reported as soon as all six of its bytes are available.
#[derive(Debug,Default)]
pub struct SettingsPayloadDecoder {
    setting_fields: SettingFields
}

impl SettingsPayloadDecoder {
    /// Create a new `SettingsPayloadDecoder`.
    pub fn new() -> SettingsPayloadDecoder {
        SettingsPayloadDecoder::default()
    }

    /// Decode settings until the payload or the buffer runs out.
    fn start_decoding_settings<L: FrameDecoderListener>(&mut self,
                                                        state: &mut FrameDecoderState<L>,
                                                        db: &mut DecodeBuffer) -> DecodeStatus {
        while state.remaining_payload() > 0 {
            let status = state.start_decoding_structure_in_payload(&mut self.setting_fields, db);

            if status != DecodeStatus::Done {
                // either waiting on more bytes, or a trailing partial setting
                return status;
            }

            state.listener_mut().on_setting(&self.setting_fields);
        }

        state.listener_mut().on_settings_end();

        DecodeStatus::Done
    }
}

impl DecodePayload for SettingsPayloadDecoder {
    fn start_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                       state: &mut FrameDecoderState<L>,
                                                       db: &mut DecodeBuffer) -> DecodeStatus {
        let header       = *state.frame_header();
        let total_length = header.payload_length() as usize;

        debug_assert_eq!(header.frame_type(), FrameType::Settings);
        debug_assert!(db.remaining() <= total_length);

        state.initialize_remainders();

        if header.is_ack() {
            if total_length == 0 {
                state.listener_mut().on_settings_ack(&header);

                return DecodeStatus::Done;
            }

            return state.report_frame_size_error();
        }

        state.listener_mut().on_settings_start(&header);

        self.start_decoding_settings(state, db)
    }

    fn resume_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                        state: &mut FrameDecoderState<L>,
                                                        db: &mut DecodeBuffer) -> DecodeStatus {
        debug_assert!(db.remaining() <= state.remaining_payload());

        let status = state.resume_decoding_structure_in_payload(&mut self.setting_fields, db);

        if status != DecodeStatus::Done {
            return status;
        }

        state.listener_mut().on_setting(&self.setting_fields);

        self.start_decoding_settings(state, db)
    }
}
