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

//! Listener that collects the decoded parts of every frame.

use crate::http2::error_code::ErrorCode;
use crate::http2::frame_header::FrameHeader;
use crate::http2::listener::FrameDecoderListener;
use crate::http2::structures::{ GoAwayFields,
                                PingFields,
                                PriorityFields,
                                PriorityUpdateFields,
                                PushPromiseFields,
                                SettingFields };

/// Everything reported about a single frame.
///
/// Variable length data is concatenated, so the parts of a frame are identical no matter how
/// the input was split into chunks.
#[derive(Clone,Debug,Default,PartialEq,Eq)]
pub struct FrameParts {
    /// Header as passed to `on_frame_header()`, with the flags as received.
    pub received_header: FrameHeader,

    /// Header as passed to the first frame-specific callback, with undefined flags cleared.
    pub header: Option<FrameHeader>,

    /// `DATA` payload, header block fragments, `GOAWAY` opaque data, `PRIORITY_UPDATE` field
    /// value, or unknown payload.
    pub payload: Vec<u8>,

    /// Skipped padding.
    pub padding: Vec<u8>,

    /// Pad length reported by `on_pad_length()`.
    pub pad_length: Option<usize>,

    /// Priority of a `PRIORITY` frame, or of a `HEADERS` frame with the `PRIORITY` flag.
    pub priority: Option<PriorityFields>,

    /// `RST_STREAM` error code.
    pub rst_stream_error_code: Option<ErrorCode>,

    /// `SETTINGS` entries in order.
    pub settings: Vec<SettingFields>,

    /// Indicates `on_settings_ack()` or `on_ping_ack()` was executed.
    pub ack: bool,

    /// `PUSH_PROMISE` fields.
    pub push_promise: Option<PushPromiseFields>,

    /// Total padding length reported by `on_push_promise_start()`.
    pub total_padding_length: Option<usize>,

    /// `PING` opaque data.
    pub ping: Option<PingFields>,

    /// `GOAWAY` fixed fields.
    pub go_away: Option<GoAwayFields>,

    /// `WINDOW_UPDATE` increment.
    pub window_update_increment: Option<u32>,

    /// `ALTSVC` origin and field value lengths.
    pub alt_svc_lengths: Option<(usize, usize)>,

    /// `ALTSVC` origin.
    pub alt_svc_origin: Vec<u8>,

    /// `ALTSVC` field value.
    pub alt_svc_value: Vec<u8>,

    /// `PRIORITY_UPDATE` fixed fields.
    pub priority_update: Option<PriorityUpdateFields>,

    /// Missing length reported by `on_padding_too_long()`.
    pub missing_length: Option<usize>,

    /// Indicates `on_frame_size_error()` was executed.
    pub frame_size_error: bool,

    /// Indicates `on_frame_header()` returned `false`.
    pub rejected: bool,

    /// Indicates a terminal callback was executed.
    pub ended: bool
}

impl FrameParts {
    /// Create a new `FrameParts` for a frame that has just begun.
    pub fn new(received_header: FrameHeader) -> FrameParts {
        FrameParts{
            received_header: received_header,
            ..FrameParts::default()
        }
    }

    /// Indicates that a protocol error was reported for this frame.
    pub fn has_error(&self) -> bool {
        self.frame_size_error || self.missing_length.is_some() || self.rejected
    }
}

// -------------------------------------------------------------------------------------------------

/// Listener that records a `FrameParts` for each frame.
///
/// Intended for tests: it panics when a callback arrives out of order, such as a payload
/// callback for a frame whose terminal callback has already been executed.
#[derive(Clone,Debug)]
pub struct FramePartsCollector {
    /// Indicates frames are accepted by `on_frame_header()`.
    accept_frames: bool,

    /// Collected frames.
    frames: Vec<FrameParts>
}

impl FramePartsCollector {
    /// Create a new `FramePartsCollector` that accepts every frame.
    pub fn new() -> FramePartsCollector {
        FramePartsCollector{
            accept_frames: true,
            frames:        Vec::new()
        }
    }

    /// Set whether `on_frame_header()` accepts frames.
    pub fn set_accept_frames(&mut self, accept_frames: bool) {
        self.accept_frames = accept_frames;
    }

    /// Retrieve the collected frames.
    pub fn frames(&self) -> &[FrameParts] {
        &self.frames
    }

    /// Consume the collector, returning the collected frames.
    pub fn into_frames(self) -> Vec<FrameParts> {
        self.frames
    }

    /// Discard the collected frames.
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Retrieve the frame currently being decoded.
    fn current(&mut self, callback: &str) -> &mut FrameParts {
        let parts = match self.frames.last_mut() {
            Some(parts) => parts,
            None => panic!("{}() before on_frame_header()", callback)
        };

        if parts.ended {
            panic!("{}() after the end of {}", callback, parts.received_header);
        }

        parts
    }

    /// Record the header of the first frame-specific callback.
    fn start(&mut self, callback: &str, header: &FrameHeader) -> &mut FrameParts {
        let parts = self.current(callback);

        assert!(parts.header.is_none(), "{}() executed twice for {}", callback, header);
        assert_eq!(parts.received_header.frame_type(), header.frame_type());

        parts.header = Some(*header);
        parts
    }

    /// Record the terminal callback.
    fn end(&mut self, callback: &str) -> &mut FrameParts {
        let parts = self.current(callback);

        assert!(parts.header.is_some(), "{}() without a start callback", callback);

        parts.ended = true;
        parts
    }

    /// Record an error callback, which ends the frame.
    fn error(&mut self, callback: &str, header: &FrameHeader) -> &mut FrameParts {
        let parts = self.current(callback);

        assert_eq!(parts.received_header.frame_type(), header.frame_type());

        parts.ended = true;
        parts
    }
}

impl Default for FramePartsCollector {
    fn default() -> FramePartsCollector {
        FramePartsCollector::new()
    }
}

impl FrameDecoderListener for FramePartsCollector {
    fn on_frame_header(&mut self, header: &FrameHeader) -> bool {
        if let Some(parts) = self.frames.last() {
            assert!(parts.ended, "on_frame_header() before the end of {}", parts.received_header);
        }

        let mut parts = FrameParts::new(*header);

        if !self.accept_frames {
            parts.rejected = true;
            parts.ended    = true;
        }

        self.frames.push(parts);
        self.accept_frames
    }

    fn on_data_start(&mut self, header: &FrameHeader) {
        self.start("on_data_start", header);
    }

    fn on_data_payload(&mut self, data: &[u8]) {
        self.current("on_data_payload").payload.extend_from_slice(data);
    }

    fn on_data_end(&mut self) {
        self.end("on_data_end");
    }

    fn on_headers_start(&mut self, header: &FrameHeader) {
        self.start("on_headers_start", header);
    }

    fn on_headers_priority(&mut self, priority: &PriorityFields) {
        let parts = self.current("on_headers_priority");

        assert!(parts.priority.is_none());

        parts.priority = Some(*priority);
    }

    fn on_hpack_fragment(&mut self, fragment: &[u8]) {
        self.current("on_hpack_fragment").payload.extend_from_slice(fragment);
    }

    fn on_headers_end(&mut self) {
        self.end("on_headers_end");
    }

    fn on_priority_frame(&mut self, header: &FrameHeader, priority: &PriorityFields) {
        self.start("on_priority_frame", header).priority = Some(*priority);
        self.end("on_priority_frame");
    }

    fn on_continuation_start(&mut self, header: &FrameHeader) {
        self.start("on_continuation_start", header);
    }

    fn on_continuation_end(&mut self) {
        self.end("on_continuation_end");
    }

    fn on_pad_length(&mut self, trailing_length: usize) {
        let parts = self.current("on_pad_length");

        assert!(parts.pad_length.is_none());

        parts.pad_length = Some(trailing_length);
    }

    fn on_padding(&mut self, padding: &[u8]) {
        self.current("on_padding").padding.extend_from_slice(padding);
    }

    fn on_rst_stream(&mut self, header: &FrameHeader, error_code: ErrorCode) {
        self.start("on_rst_stream", header).rst_stream_error_code = Some(error_code);
        self.end("on_rst_stream");
    }

    fn on_settings_start(&mut self, header: &FrameHeader) {
        self.start("on_settings_start", header);
    }

    fn on_setting(&mut self, setting: &SettingFields) {
        self.current("on_setting").settings.push(*setting);
    }

    fn on_settings_end(&mut self) {
        self.end("on_settings_end");
    }

    fn on_settings_ack(&mut self, header: &FrameHeader) {
        self.start("on_settings_ack", header).ack = true;
        self.end("on_settings_ack");
    }

    fn on_push_promise_start(&mut self, header: &FrameHeader, promise: &PushPromiseFields,
                             total_padding_length: usize) {
        let parts = self.start("on_push_promise_start", header);

        parts.push_promise         = Some(*promise);
        parts.total_padding_length = Some(total_padding_length);
    }

    fn on_push_promise_end(&mut self) {
        self.end("on_push_promise_end");
    }

    fn on_ping(&mut self, header: &FrameHeader, ping: &PingFields) {
        self.start("on_ping", header).ping = Some(*ping);
        self.end("on_ping");
    }

    fn on_ping_ack(&mut self, header: &FrameHeader, ping: &PingFields) {
        let parts = self.start("on_ping_ack", header);

        parts.ping = Some(*ping);
        parts.ack  = true;

        self.end("on_ping_ack");
    }

    fn on_go_away_start(&mut self, header: &FrameHeader, go_away: &GoAwayFields) {
        self.start("on_go_away_start", header).go_away = Some(*go_away);
    }

    fn on_go_away_opaque_data(&mut self, data: &[u8]) {
        self.current("on_go_away_opaque_data").payload.extend_from_slice(data);
    }

    fn on_go_away_end(&mut self) {
        self.end("on_go_away_end");
    }

    fn on_window_update(&mut self, header: &FrameHeader, increment: u32) {
        self.start("on_window_update", header).window_update_increment = Some(increment);
        self.end("on_window_update");
    }

    fn on_alt_svc_start(&mut self, header: &FrameHeader, origin_length: usize,
                        value_length: usize) {
        self.start("on_alt_svc_start", header).alt_svc_lengths = Some((origin_length,
                                                                       value_length));
    }

    fn on_alt_svc_origin_data(&mut self, data: &[u8]) {
        let parts = self.current("on_alt_svc_origin_data");

        assert!(parts.alt_svc_value.is_empty(), "origin data after value data");

        parts.alt_svc_origin.extend_from_slice(data);
    }

    fn on_alt_svc_value_data(&mut self, data: &[u8]) {
        self.current("on_alt_svc_value_data").alt_svc_value.extend_from_slice(data);
    }

    fn on_alt_svc_end(&mut self) {
        self.end("on_alt_svc_end");
    }

    fn on_priority_update_start(&mut self, header: &FrameHeader,
                                priority_update: &PriorityUpdateFields) {
        self.start("on_priority_update_start", header).priority_update = Some(*priority_update);
    }

    fn on_priority_update_payload(&mut self, data: &[u8]) {
        self.current("on_priority_update_payload").payload.extend_from_slice(data);
    }

    fn on_priority_update_end(&mut self) {
        self.end("on_priority_update_end");
    }

    fn on_unknown_start(&mut self, header: &FrameHeader) {
        self.start("on_unknown_start", header);
    }

    fn on_unknown_payload(&mut self, data: &[u8]) {
        self.current("on_unknown_payload").payload.extend_from_slice(data);
    }

    fn on_unknown_end(&mut self) {
        self.end("on_unknown_end");
    }

    fn on_padding_too_long(&mut self, header: &FrameHeader, missing_length: usize) {
        self.error("on_padding_too_long", header).missing_length = Some(missing_length);
    }

    fn on_frame_size_error(&mut self, header: &FrameHeader) {
        self.error("on_frame_size_error", header).frame_size_error = true;
    }
}
