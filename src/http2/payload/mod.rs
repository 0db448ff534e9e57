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

//! Payload decoders, one per frame type.

mod altsvc;
mod continuation;
mod data;
mod goaway;
mod headers;
mod ping;
mod priority;
mod priority_update;
mod push_promise;
mod rst_stream;
mod settings;
mod unknown;
mod window_update;

pub use crate::http2::payload::altsvc::{ AltSvcPayloadDecoder, AltSvcPayloadState };
pub use crate::http2::payload::continuation::ContinuationPayloadDecoder;
pub use crate::http2::payload::data::{ DataPayloadDecoder, DataPayloadState };
pub use crate::http2::payload::goaway::{ GoAwayPayloadDecoder, GoAwayPayloadState };
pub use crate::http2::payload::headers::{ HeadersPayloadDecoder, HeadersPayloadState };
pub use crate::http2::payload::ping::PingPayloadDecoder;
pub use crate::http2::payload::priority::PriorityPayloadDecoder;
pub use crate::http2::payload::priority_update::{ PriorityUpdatePayloadDecoder,
                                                  PriorityUpdatePayloadState };
pub use crate::http2::payload::push_promise::{ PushPromisePayloadDecoder,
                                               PushPromisePayloadState };
pub use crate::http2::payload::rst_stream::RstStreamPayloadDecoder;
pub use crate::http2::payload::settings::SettingsPayloadDecoder;
pub use crate::http2::payload::unknown::UnknownPayloadDecoder;
pub use crate::http2::payload::window_update::WindowUpdatePayloadDecoder;

use crate::decode_buffer::DecodeBuffer;
use crate::decode_status::DecodeStatus;
use crate::http2::frame_decoder_state::FrameDecoderState;
use crate::http2::frame_type::FrameType;
use crate::http2::listener::FrameDecoderListener;

/// Resumable decoding of a single frame payload.
///
/// Both methods receive a buffer that holds no bytes beyond the end of the current frame, and
/// report the frame to the listener owned by `state`.
///
/// `DecodeStatus::Done` is returned once the whole payload, padding included, has been
/// consumed and the terminal callback has been executed. `DecodeStatus::InProgress` means the
/// buffer has been exhausted and `resume_decoding_payload()` must be executed with the next
/// chunk. `DecodeStatus::Error` means the listener has been notified of a protocol error.
pub trait DecodePayload {
    /// Start decoding the payload of the frame whose header is held by `state`.
    fn start_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                       state: &mut FrameDecoderState<L>,
                                                       db: &mut DecodeBuffer) -> DecodeStatus;

    /// Resume decoding a payload that returned `DecodeStatus::InProgress`.
    fn resume_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                        state: &mut FrameDecoderState<L>,
                                                        db: &mut DecodeBuffer) -> DecodeStatus;
}

/// Payload decoder for each frame type.
#[derive(Debug)]
pub enum PayloadDecoder {
    /// `ALTSVC` payload decoder.
    AltSvc(AltSvcPayloadDecoder),

    /// `CONTINUATION` payload decoder.
    Continuation(ContinuationPayloadDecoder),

    /// `DATA` payload decoder.
    Data(DataPayloadDecoder),

    /// `GOAWAY` payload decoder.
    GoAway(GoAwayPayloadDecoder),

    /// `HEADERS` payload decoder.
    Headers(HeadersPayloadDecoder),

    /// `PING` payload decoder.
    Ping(PingPayloadDecoder),

    /// `PRIORITY` payload decoder.
    Priority(PriorityPayloadDecoder),

    /// `PRIORITY_UPDATE` payload decoder.
    PriorityUpdate(PriorityUpdatePayloadDecoder),

    /// `PUSH_PROMISE` payload decoder.
    PushPromise(PushPromisePayloadDecoder),

    /// `RST_STREAM` payload decoder.
    RstStream(RstStreamPayloadDecoder),

    /// `SETTINGS` payload decoder.
    Settings(SettingsPayloadDecoder),

    /// Decoder for frames of an unknown type.
    Unknown(UnknownPayloadDecoder),

    /// `WINDOW_UPDATE` payload decoder.
    WindowUpdate(WindowUpdatePayloadDecoder)
}

impl PayloadDecoder {
    /// Create the payload decoder for `frame_type`.
    pub fn for_frame_type(frame_type: FrameType) -> PayloadDecoder {
        match frame_type {
            FrameType::AltSvc         => PayloadDecoder::AltSvc(AltSvcPayloadDecoder::new()),
            FrameType::Continuation   => PayloadDecoder::Continuation(
                                             ContinuationPayloadDecoder::new()
                                         ),
            FrameType::Data           => PayloadDecoder::Data(DataPayloadDecoder::new()),
            FrameType::GoAway         => PayloadDecoder::GoAway(GoAwayPayloadDecoder::new()),
            FrameType::Headers        => PayloadDecoder::Headers(HeadersPayloadDecoder::new()),
            FrameType::Ping           => PayloadDecoder::Ping(PingPayloadDecoder::new()),
            FrameType::Priority       => PayloadDecoder::Priority(PriorityPayloadDecoder::new()),
            FrameType::PriorityUpdate => PayloadDecoder::PriorityUpdate(
                                             PriorityUpdatePayloadDecoder::new()
                                         ),
            FrameType::PushPromise    => PayloadDecoder::PushPromise(
                                             PushPromisePayloadDecoder::new()
                                         ),
            FrameType::RstStream      => PayloadDecoder::RstStream(RstStreamPayloadDecoder::new()),
            FrameType::Settings       => PayloadDecoder::Settings(SettingsPayloadDecoder::new()),
            FrameType::Unknown(_)     => PayloadDecoder::Unknown(UnknownPayloadDecoder::new()),
            FrameType::WindowUpdate   => PayloadDecoder::WindowUpdate(
                                             WindowUpdatePayloadDecoder::new()
                                         )
        }
    }
}

impl DecodePayload for PayloadDecoder {
    fn start_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                       state: &mut FrameDecoderState<L>,
                                                       db: &mut DecodeBuffer) -> DecodeStatus {
        match *self {
            PayloadDecoder::AltSvc(ref mut d)         => d.start_decoding_payload(state, db),
            PayloadDecoder::Continuation(ref mut d)   => d.start_decoding_payload(state, db),
            PayloadDecoder::Data(ref mut d)           => d.start_decoding_payload(state, db),
            PayloadDecoder::GoAway(ref mut d)         => d.start_decoding_payload(state, db),
            PayloadDecoder::Headers(ref mut d)        => d.start_decoding_payload(state, db),
            PayloadDecoder::Ping(ref mut d)           => d.start_decoding_payload(state, db),
            PayloadDecoder::Priority(ref mut d)       => d.start_decoding_payload(state, db),
            PayloadDecoder::PriorityUpdate(ref mut d) => d.start_decoding_payload(state, db),
            PayloadDecoder::PushPromise(ref mut d)    => d.start_decoding_payload(state, db),
            PayloadDecoder::RstStream(ref mut d)      => d.start_decoding_payload(state, db),
            PayloadDecoder::Settings(ref mut d)       => d.start_decoding_payload(state, db),
            PayloadDecoder::Unknown(ref mut d)        => d.start_decoding_payload(state, db),
            PayloadDecoder::WindowUpdate(ref mut d)   => d.start_decoding_payload(state, db)
        }
    }

    fn resume_decoding_payload<L: FrameDecoderListener>(&mut self,
                                                        state: &mut FrameDecoderState<L>,
                                                        db: &mut DecodeBuffer) -> DecodeStatus {
        match *self {
            PayloadDecoder::AltSvc(ref mut d)         => d.resume_decoding_payload(state, db),
            PayloadDecoder::Continuation(ref mut d)   => d.resume_decoding_payload(state, db),
            PayloadDecoder::Data(ref mut d)           => d.resume_decoding_payload(state, db),
            PayloadDecoder::GoAway(ref mut d)         => d.resume_decoding_payload(state, db),
            PayloadDecoder::Headers(ref mut d)        => d.resume_decoding_payload(state, db),
            PayloadDecoder::Ping(ref mut d)           => d.resume_decoding_payload(state, db),
            PayloadDecoder::Priority(ref mut d)       => d.resume_decoding_payload(state, db),
            PayloadDecoder::PriorityUpdate(ref mut d) => d.resume_decoding_payload(state, db),
            PayloadDecoder::PushPromise(ref mut d)    => d.resume_decoding_payload(state, db),
            PayloadDecoder::RstStream(ref mut d)      => d.resume_decoding_payload(state, db),
            PayloadDecoder::Settings(ref mut d)       => d.resume_decoding_payload(state, db),
            PayloadDecoder::Unknown(ref mut d)        => d.resume_decoding_payload(state, db),
            PayloadDecoder::WindowUpdate(ref mut d)   => d.resume_decoding_payload(state, db)
        }
    }
}
