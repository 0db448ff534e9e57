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

//! HTTP/2 frame decoder, listeners, errors, and types.

mod collector;
mod error_code;
mod flags;
mod frame_decoder;
mod frame_decoder_state;
mod frame_error;
mod frame_header;
mod frame_type;
mod listener;
mod setting;
mod structure_decoder;
mod structures;

pub mod payload;

pub use crate::http2::collector::{ FrameParts, FramePartsCollector };
pub use crate::http2::error_code::{ ErrorCode,
                                    E_CANCEL,
                                    E_COMPRESSION,
                                    E_CONNECT,
                                    E_ENHANCE_YOUR_CALM,
                                    E_FLOW_CONTROL,
                                    E_FRAME_SIZE,
                                    E_HTTP_1_1_REQUIRED,
                                    E_INADEQUATE_SECURITY,
                                    E_INTERNAL,
                                    E_NO_ERROR,
                                    E_PROTOCOL,
                                    E_REFUSED_STREAM,
                                    E_SETTINGS_TIMEOUT,
                                    E_STREAM_CLOSED };
pub use crate::http2::flags::{ Flags,
                               FL_ACK,
                               FL_END_HEADERS,
                               FL_END_STREAM,
                               FL_PADDED,
                               FL_PRIORITY };
pub use crate::http2::frame_decoder::{ DecoderState, Http2FrameDecoder };
pub use crate::http2::frame_decoder_state::FrameDecoderState;
pub use crate::http2::frame_error::FrameError;
pub use crate::http2::frame_header::{ FrameHeader,
                                      DEFAULT_MAX_FRAME_SIZE,
                                      FRAME_HEADER_SIZE,
                                      MAX_ALLOWED_FRAME_SIZE };
pub use crate::http2::frame_type::{ FrameType,
                                    FR_ALT_SVC,
                                    FR_CONTINUATION,
                                    FR_DATA,
                                    FR_GO_AWAY,
                                    FR_HEADERS,
                                    FR_PING,
                                    FR_PRIORITY,
                                    FR_PRIORITY_UPDATE,
                                    FR_PUSH_PROMISE,
                                    FR_RST_STREAM,
                                    FR_SETTINGS,
                                    FR_WINDOW_UPDATE };
pub use crate::http2::listener::{ FrameDecoderListener, LoggingListener, NoOpListener };
pub use crate::http2::setting::{ Setting,
                                 S_ENABLE_PUSH,
                                 S_HEADER_TABLE_SIZE,
                                 S_INITIAL_WINDOW_SIZE,
                                 S_MAX_CONCURRENT_STREAMS,
                                 S_MAX_FRAME_SIZE,
                                 S_MAX_HEADER_LIST_SIZE };
pub use crate::http2::structure_decoder::StructureDecoder;
pub use crate::http2::structures::{ AltSvcFields,
                                    GoAwayFields,
                                    PingFields,
                                    PriorityFields,
                                    PriorityUpdateFields,
                                    PushPromiseFields,
                                    RstStreamFields,
                                    SettingFields,
                                    Structure,
                                    WindowUpdateFields };

#[cfg(test)]
mod test;
