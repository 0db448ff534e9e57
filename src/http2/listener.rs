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

//! HTTP/2 frame decoder callback trait.

use crate::http2::error_code::ErrorCode;
use crate::http2::frame_header::FrameHeader;
use crate::http2::structures::{ GoAwayFields,
                                PingFields,
                                PriorityFields,
                                PriorityUpdateFields,
                                PushPromiseFields,
                                SettingFields };

/// Type that handles HTTP/2 frame decoder events.
///
/// Every slice handed to a callback borrows the chunk being decoded and is only valid for the
/// duration of the call. Copy it if it must be retained.
///
/// Callbacks that deliver variable-length data may be executed any number of times per frame,
/// including with an empty slice, depending on how the stream was split into chunks. Concatenate
/// the slices to recover the data.
///
/// Once a frame's terminal callback has been executed (`on_*_end()`, `on_ping()`,
/// `on_ping_ack()`, `on_priority_frame()`, `on_rst_stream()`, `on_settings_ack()`,
/// `on_window_update()`, `on_padding_too_long()` or `on_frame_size_error()`), nothing further is
/// reported for that frame.
pub trait FrameDecoderListener {
    /// Callback that is executed when a frame header has been decoded, before its payload.
    ///
    /// The flags are reported as they appeared on the wire. Flags that are undefined for the
    /// frame type are cleared before any other callback sees the header.
    ///
    /// **Arguments:**
    ///
    /// **`header`**
    ///
    /// The frame header.
    ///
    /// **Returns:**
    ///
    /// `true` when the payload should be decoded, `false` to discard the payload and fail the
    /// frame with [`FrameError::Rejected`](enum.FrameError.html#variant.Rejected).
    fn on_frame_header(&mut self, header: &FrameHeader) -> bool;

    /// Callback that is executed when a `DATA` frame has been located.
    ///
    /// **Arguments:**
    ///
    /// **`header`**
    ///
    /// The frame header.
    fn on_data_start(&mut self, header: &FrameHeader);

    /// Callback that is executed when a portion of a `DATA` frame payload has been located.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire payload.
    ///
    /// **Arguments:**
    ///
    /// **`data`**
    ///
    /// The data.
    fn on_data_payload(&mut self, data: &[u8]);

    /// Callback that is executed when a `DATA` frame has been decoded.
    fn on_data_end(&mut self);

    /// Callback that is executed when a `HEADERS` frame has been located.
    fn on_headers_start(&mut self, header: &FrameHeader);

    /// Callback that is executed when the priority fields of a `HEADERS` frame have been decoded.
    fn on_headers_priority(&mut self, priority: &PriorityFields);

    /// Callback that is executed when a portion of an HPACK header block fragment has been
    /// located in a `HEADERS`, `PUSH_PROMISE` or `CONTINUATION` frame.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire fragment.
    ///
    /// **Arguments:**
    ///
    /// **`fragment`**
    ///
    /// The fragment.
    fn on_hpack_fragment(&mut self, fragment: &[u8]);

    /// Callback that is executed when a `HEADERS` frame has been decoded.
    fn on_headers_end(&mut self);

    /// Callback that is executed when a `PRIORITY` frame has been decoded.
    fn on_priority_frame(&mut self, header: &FrameHeader, priority: &PriorityFields);

    /// Callback that is executed when a `CONTINUATION` frame has been located.
    fn on_continuation_start(&mut self, header: &FrameHeader);

    /// Callback that is executed when a `CONTINUATION` frame has been decoded.
    fn on_continuation_end(&mut self);

    /// Callback that is executed when the pad length field of a `DATA` or `HEADERS` frame has
    /// been decoded.
    ///
    /// **Arguments:**
    ///
    /// **`trailing_length`**
    ///
    /// The count of padding bytes that follow the payload. This excludes the pad length field.
    fn on_pad_length(&mut self, trailing_length: usize);

    /// Callback that is executed when trailing padding has been skipped.
    ///
    /// *Note:* This may be executed multiple times in order to skip all of the padding.
    fn on_padding(&mut self, padding: &[u8]);

    /// Callback that is executed when a `RST_STREAM` frame has been decoded.
    fn on_rst_stream(&mut self, header: &FrameHeader, error_code: ErrorCode);

    /// Callback that is executed when a non-acknowledgement `SETTINGS` frame has been located.
    fn on_settings_start(&mut self, header: &FrameHeader);

    /// Callback that is executed for each setting of a `SETTINGS` frame.
    fn on_setting(&mut self, setting: &SettingFields);

    /// Callback that is executed when a non-acknowledgement `SETTINGS` frame has been decoded.
    fn on_settings_end(&mut self);

    /// Callback that is executed when a `SETTINGS` acknowledgement has been decoded.
    fn on_settings_ack(&mut self, header: &FrameHeader);

    /// Callback that is executed when the fixed fields of a `PUSH_PROMISE` frame have been
    /// decoded.
    ///
    /// **Arguments:**
    ///
    /// **`header`**
    ///
    /// The frame header.
    ///
    /// **`promise`**
    ///
    /// The promised stream.
    ///
    /// **`total_padding_length`**
    ///
    /// The count of padding bytes, including the pad length field. `0` when not padded.
    fn on_push_promise_start(&mut self, header: &FrameHeader, promise: &PushPromiseFields,
                             total_padding_length: usize);

    /// Callback that is executed when a `PUSH_PROMISE` frame has been decoded.
    fn on_push_promise_end(&mut self);

    /// Callback that is executed when a `PING` frame has been decoded.
    fn on_ping(&mut self, header: &FrameHeader, ping: &PingFields);

    /// Callback that is executed when a `PING` acknowledgement has been decoded.
    fn on_ping_ack(&mut self, header: &FrameHeader, ping: &PingFields);

    /// Callback that is executed when the fixed fields of a `GOAWAY` frame have been decoded.
    fn on_go_away_start(&mut self, header: &FrameHeader, go_away: &GoAwayFields);

    /// Callback that is executed when a portion of `GOAWAY` debug data has been located.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire segment.
    fn on_go_away_opaque_data(&mut self, data: &[u8]);

    /// Callback that is executed when a `GOAWAY` frame has been decoded.
    fn on_go_away_end(&mut self);

    /// Callback that is executed when a `WINDOW_UPDATE` frame has been decoded.
    fn on_window_update(&mut self, header: &FrameHeader, increment: u32);

    /// Callback that is executed when the origin length of an `ALTSVC` frame has been decoded.
    ///
    /// **Arguments:**
    ///
    /// **`header`**
    ///
    /// The frame header.
    ///
    /// **`origin_length`**
    ///
    /// The length of the origin.
    ///
    /// **`value_length`**
    ///
    /// The length of the field value.
    fn on_alt_svc_start(&mut self, header: &FrameHeader, origin_length: usize,
                        value_length: usize);

    /// Callback that is executed when a portion of an `ALTSVC` origin has been located.
    fn on_alt_svc_origin_data(&mut self, data: &[u8]);

    /// Callback that is executed when a portion of an `ALTSVC` field value has been located.
    fn on_alt_svc_value_data(&mut self, data: &[u8]);

    /// Callback that is executed when an `ALTSVC` frame has been decoded.
    fn on_alt_svc_end(&mut self);

    /// Callback that is executed when the fixed fields of a `PRIORITY_UPDATE` frame have been
    /// decoded.
    fn on_priority_update_start(&mut self, header: &FrameHeader,
                                priority_update: &PriorityUpdateFields);

    /// Callback that is executed when a portion of a `PRIORITY_UPDATE` priority field value has
    /// been located.
    fn on_priority_update_payload(&mut self, data: &[u8]);

    /// Callback that is executed when a `PRIORITY_UPDATE` frame has been decoded.
    fn on_priority_update_end(&mut self);

    /// Callback that is executed when a frame of an unknown type has been located.
    fn on_unknown_start(&mut self, header: &FrameHeader);

    /// Callback that is executed when a portion of an unknown frame payload has been located.
    fn on_unknown_payload(&mut self, data: &[u8]);

    /// Callback that is executed when a frame of an unknown type has been decoded.
    fn on_unknown_end(&mut self);

    /// Callback that is executed when the padding of a frame does not fit in its payload.
    ///
    /// This is a connection error of type `PROTOCOL_ERROR`.
    ///
    /// **Arguments:**
    ///
    /// **`header`**
    ///
    /// The frame header.
    ///
    /// **`missing_length`**
    ///
    /// The count of bytes the payload would need to grow by to hold the padding.
    fn on_padding_too_long(&mut self, header: &FrameHeader, missing_length: usize);

    /// Callback that is executed when a frame payload is too short or too long for its type, or
    /// exceeds the maximum payload size.
    fn on_frame_size_error(&mut self, header: &FrameHeader);
}

// -------------------------------------------------------------------------------------------------

/// Listener that discards every event and accepts every frame.
#[derive(Clone,Copy,Debug,Default)]
pub struct NoOpListener;

impl FrameDecoderListener for NoOpListener {
    fn on_frame_header(&mut self, _header: &FrameHeader) -> bool {
        true
    }

    fn on_data_start(&mut self, _header: &FrameHeader) {}
    fn on_data_payload(&mut self, _data: &[u8]) {}
    fn on_data_end(&mut self) {}
    fn on_headers_start(&mut self, _header: &FrameHeader) {}
    fn on_headers_priority(&mut self, _priority: &PriorityFields) {}
    fn on_hpack_fragment(&mut self, _fragment: &[u8]) {}
    fn on_headers_end(&mut self) {}
    fn on_priority_frame(&mut self, _header: &FrameHeader, _priority: &PriorityFields) {}
    fn on_continuation_start(&mut self, _header: &FrameHeader) {}
    fn on_continuation_end(&mut self) {}
    fn on_pad_length(&mut self, _trailing_length: usize) {}
    fn on_padding(&mut self, _padding: &[u8]) {}
    fn on_rst_stream(&mut self, _header: &FrameHeader, _error_code: ErrorCode) {}
    fn on_settings_start(&mut self, _header: &FrameHeader) {}
    fn on_setting(&mut self, _setting: &SettingFields) {}
    fn on_settings_end(&mut self) {}
    fn on_settings_ack(&mut self, _header: &FrameHeader) {}

    fn on_push_promise_start(&mut self, _header: &FrameHeader, _promise: &PushPromiseFields,
                             _total_padding_length: usize) {}

    fn on_push_promise_end(&mut self) {}
    fn on_ping(&mut self, _header: &FrameHeader, _ping: &PingFields) {}
    fn on_ping_ack(&mut self, _header: &FrameHeader, _ping: &PingFields) {}
    fn on_go_away_start(&mut self, _header: &FrameHeader, _go_away: &GoAwayFields) {}
    fn on_go_away_opaque_data(&mut self, _data: &[u8]) {}
    fn on_go_away_end(&mut self) {}
    fn on_window_update(&mut self, _header: &FrameHeader, _increment: u32) {}

    fn on_alt_svc_start(&mut self, _header: &FrameHeader, _origin_length: usize,
                        _value_length: usize) {}

    fn on_alt_svc_origin_data(&mut self, _data: &[u8]) {}
    fn on_alt_svc_value_data(&mut self, _data: &[u8]) {}
    fn on_alt_svc_end(&mut self) {}

    fn on_priority_update_start(&mut self, _header: &FrameHeader,
                                _priority_update: &PriorityUpdateFields) {}

    fn on_priority_update_payload(&mut self, _data: &[u8]) {}
    fn on_priority_update_end(&mut self) {}
    fn on_unknown_start(&mut self, _header: &FrameHeader) {}
    fn on_unknown_payload(&mut self, _data: &[u8]) {}
    fn on_unknown_end(&mut self) {}
    fn on_padding_too_long(&mut self, _header: &FrameHeader, _missing_length: usize) {}
    fn on_frame_size_error(&mut self, _header: &FrameHeader) {}
}

// -------------------------------------------------------------------------------------------------

/// Listener that logs every event at `trace` level before forwarding it to a wrapped listener.
///
/// Variable-length data is logged by length only.
#[derive(Debug,Default)]
pub struct LoggingListener<L> {
    listener: L
}

impl<L: FrameDecoderListener> LoggingListener<L> {
    /// Create a new `LoggingListener` forwarding to `listener`.
    pub fn new(listener: L) -> LoggingListener<L> {
        LoggingListener{
            listener: listener
        }
    }

    /// Retrieve the wrapped listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Retrieve the wrapped listener mutably.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Unwrap the wrapped listener.
    pub fn into_inner(self) -> L {
        self.listener
    }
}

impl<L: FrameDecoderListener> FrameDecoderListener for LoggingListener<L> {
    fn on_frame_header(&mut self, header: &FrameHeader) -> bool {
        let accepted = self.listener.on_frame_header(header);

        trace!("on_frame_header: {}, accepted={}", header, accepted);

        accepted
    }

    fn on_data_start(&mut self, header: &FrameHeader) {
        trace!("on_data_start: {}", header);

        self.listener.on_data_start(header);
    }

    fn on_data_payload(&mut self, data: &[u8]) {
        trace!("on_data_payload: len={}", data.len());

        self.listener.on_data_payload(data);
    }

    fn on_data_end(&mut self) {
        trace!("on_data_end");

        self.listener.on_data_end();
    }

    fn on_headers_start(&mut self, header: &FrameHeader) {
        trace!("on_headers_start: {}", header);

        self.listener.on_headers_start(header);
    }

    fn on_headers_priority(&mut self, priority: &PriorityFields) {
        trace!("on_headers_priority: {:?}", priority);

        self.listener.on_headers_priority(priority);
    }

    fn on_hpack_fragment(&mut self, fragment: &[u8]) {
        trace!("on_hpack_fragment: len={}", fragment.len());

        self.listener.on_hpack_fragment(fragment);
    }

    fn on_headers_end(&mut self) {
        trace!("on_headers_end");

        self.listener.on_headers_end();
    }

    fn on_priority_frame(&mut self, header: &FrameHeader, priority: &PriorityFields) {
        trace!("on_priority_frame: {}, {:?}", header, priority);

        self.listener.on_priority_frame(header, priority);
    }

    fn on_continuation_start(&mut self, header: &FrameHeader) {
        trace!("on_continuation_start: {}", header);

        self.listener.on_continuation_start(header);
    }

    fn on_continuation_end(&mut self) {
        trace!("on_continuation_end");

        self.listener.on_continuation_end();
    }

    fn on_pad_length(&mut self, trailing_length: usize) {
        trace!("on_pad_length: trailing_length={}", trailing_length);

        self.listener.on_pad_length(trailing_length);
    }

    fn on_padding(&mut self, padding: &[u8]) {
        trace!("on_padding: len={}", padding.len());

        self.listener.on_padding(padding);
    }

    fn on_rst_stream(&mut self, header: &FrameHeader, error_code: ErrorCode) {
        trace!("on_rst_stream: {}, error_code={}", header, error_code);

        self.listener.on_rst_stream(header, error_code);
    }

    fn on_settings_start(&mut self, header: &FrameHeader) {
        trace!("on_settings_start: {}", header);

        self.listener.on_settings_start(header);
    }

    fn on_setting(&mut self, setting: &SettingFields) {
        trace!("on_setting: {}", setting.setting());

        self.listener.on_setting(setting);
    }

    fn on_settings_end(&mut self) {
        trace!("on_settings_end");

        self.listener.on_settings_end();
    }

    fn on_settings_ack(&mut self, header: &FrameHeader) {
        trace!("on_settings_ack: {}", header);

        self.listener.on_settings_ack(header);
    }

    fn on_push_promise_start(&mut self, header: &FrameHeader, promise: &PushPromiseFields,
                             total_padding_length: usize) {
        trace!(
            "on_push_promise_start: {}, {:?}, total_padding_length={}",
            header,
            promise,
            total_padding_length
        );

        self.listener.on_push_promise_start(header, promise, total_padding_length);
    }

    fn on_push_promise_end(&mut self) {
        trace!("on_push_promise_end");

        self.listener.on_push_promise_end();
    }

    fn on_ping(&mut self, header: &FrameHeader, ping: &PingFields) {
        trace!("on_ping: {}, {:?}", header, ping);

        self.listener.on_ping(header, ping);
    }

    fn on_ping_ack(&mut self, header: &FrameHeader, ping: &PingFields) {
        trace!("on_ping_ack: {}, {:?}", header, ping);

        self.listener.on_ping_ack(header, ping);
    }

    fn on_go_away_start(&mut self, header: &FrameHeader, go_away: &GoAwayFields) {
        trace!("on_go_away_start: {}, {:?}", header, go_away);

        self.listener.on_go_away_start(header, go_away);
    }

    fn on_go_away_opaque_data(&mut self, data: &[u8]) {
        trace!("on_go_away_opaque_data: len={}", data.len());

        self.listener.on_go_away_opaque_data(data);
    }

    fn on_go_away_end(&mut self) {
        trace!("on_go_away_end");

        self.listener.on_go_away_end();
    }

    fn on_window_update(&mut self, header: &FrameHeader, increment: u32) {
        trace!("on_window_update: {}, increment={}", header, increment);

        self.listener.on_window_update(header, increment);
    }

    fn on_alt_svc_start(&mut self, header: &FrameHeader, origin_length: usize,
                        value_length: usize) {
        trace!(
            "on_alt_svc_start: {}, origin_length={}, value_length={}",
            header,
            origin_length,
            value_length
        );

        self.listener.on_alt_svc_start(header, origin_length, value_length);
    }

    fn on_alt_svc_origin_data(&mut self, data: &[u8]) {
        trace!("on_alt_svc_origin_data: len={}", data.len());

        self.listener.on_alt_svc_origin_data(data);
    }

    fn on_alt_svc_value_data(&mut self, data: &[u8]) {
        trace!("on_alt_svc_value_data: len={}", data.len());

        self.listener.on_alt_svc_value_data(data);
    }

    fn on_alt_svc_end(&mut self) {
        trace!("on_alt_svc_end");

        self.listener.on_alt_svc_end();
    }

    fn on_priority_update_start(&mut self, header: &FrameHeader,
                                priority_update: &PriorityUpdateFields) {
        trace!("on_priority_update_start: {}, {:?}", header, priority_update);

        self.listener.on_priority_update_start(header, priority_update);
    }

    fn on_priority_update_payload(&mut self, data: &[u8]) {
        trace!("on_priority_update_payload: len={}", data.len());

        self.listener.on_priority_update_payload(data);
    }

    fn on_priority_update_end(&mut self) {
        trace!("on_priority_update_end");

        self.listener.on_priority_update_end();
    }

    fn on_unknown_start(&mut self, header: &FrameHeader) {
        trace!("on_unknown_start: {}", header);

        self.listener.on_unknown_start(header);
    }

    fn on_unknown_payload(&mut self, data: &[u8]) {
        trace!("on_unknown_payload: len={}", data.len());

        self.listener.on_unknown_payload(data);
    }

    fn on_unknown_end(&mut self) {
        trace!("on_unknown_end");

        self.listener.on_unknown_end();
    }

    fn on_padding_too_long(&mut self, header: &FrameHeader, missing_length: usize) {
        trace!("on_padding_too_long: {}, missing_length={}", header, missing_length);

        self.listener.on_padding_too_long(header, missing_length);
    }

    fn on_frame_size_error(&mut self, header: &FrameHeader) {
        trace!("on_frame_size_error: {}", header);

        self.listener.on_frame_size_error(header);
    }
}
