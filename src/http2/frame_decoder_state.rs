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

//! Per-frame decoding state shared by the payload decoders.

use crate::decode_buffer::DecodeBuffer;
use crate::decode_status::DecodeStatus;
use crate::http2::frame_error::FrameError;
use crate::http2::frame_header::FrameHeader;
use crate::http2::listener::FrameDecoderListener;
use crate::http2::structure_decoder::StructureDecoder;
use crate::http2::structures::Structure;

/// State of the frame being decoded.
///
/// Tracks how much of the current payload and padding is still to come, owns the listener the
/// payload decoders report to, and holds the partial bytes of a fixed-size structure split
/// across chunks.
///
/// `remaining_payload` and `remaining_padding` only ever decrease while a frame is decoded.
#[derive(Debug)]
pub struct FrameDecoderState<L> {
    error:              Option<FrameError>,
    frame_header:       FrameHeader,
    listener:           L,
    remaining_padding:  usize,
    remaining_payload:  usize,
    structure_decoder:  StructureDecoder
}

impl<L: FrameDecoderListener> FrameDecoderState<L> {
    /// Create a new `FrameDecoderState` reporting to `listener`.
    pub fn new(listener: L) -> FrameDecoderState<L> {
        FrameDecoderState{
            error:             None,
            frame_header:      FrameHeader::default(),
            listener:          listener,
            remaining_padding: 0,
            remaining_payload: 0,
            structure_decoder: StructureDecoder::new()
        }
    }

    /// Retrieve the listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Retrieve the listener mutably.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Consume the state, returning the listener.
    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Retrieve the header of the current frame.
    pub fn frame_header(&self) -> &FrameHeader {
        &self.frame_header
    }

    /// Replace the header of the current frame.
    pub fn set_frame_header(&mut self, header: FrameHeader) {
        self.frame_header = header;
    }

    /// Clear the flags of the current frame that are not part of `mask`.
    pub fn retain_flags(&mut self, mask: u8) {
        self.frame_header.retain_flags(mask);
    }

    /// Retrieve the count of payload bytes, excluding padding, not yet decoded.
    pub fn remaining_payload(&self) -> usize {
        self.remaining_payload
    }

    /// Retrieve the count of padding bytes not yet skipped.
    pub fn remaining_padding(&self) -> usize {
        self.remaining_padding
    }

    /// Retrieve the count of payload and padding bytes not yet decoded.
    pub fn remaining_total_payload(&self) -> usize {
        self.remaining_payload + self.remaining_padding
    }

    /// Take the most recent protocol error.
    pub fn take_error(&mut self) -> Option<FrameError> {
        self.error.take()
    }

    /// Prepare for the payload of the current frame. The padding is assumed to be absent until
    /// a pad length has been read.
    pub fn initialize_remainders(&mut self) {
        self.remaining_payload = self.frame_header.payload_length() as usize;
        self.remaining_padding = 0;
    }

    /// Retrieve the count of payload bytes available in `db`.
    pub fn available_payload(&self, db: &DecodeBuffer) -> usize {
        db.min_length_remaining(self.remaining_payload)
    }

    /// Retrieve the count of padding bytes available in `db`.
    pub fn available_padding(&self, db: &DecodeBuffer) -> usize {
        db.min_length_remaining(self.remaining_padding)
    }

    /// Record that `amount` payload bytes have been decoded.
    pub fn consume_payload(&mut self, amount: usize) {
        debug_assert!(
            amount <= self.remaining_payload,
            "consumed {} of {} remaining payload bytes",
            amount,
            self.remaining_payload
        );

        self.remaining_payload -= amount;
    }

    /// Read the pad length field of a padded frame.
    ///
    /// Must be executed before any other payload byte is consumed. When `report_pad_length` is
    /// `true`, `on_pad_length()` is executed.
    pub fn read_pad_length(&mut self, db: &mut DecodeBuffer, report_pad_length: bool)
    -> DecodeStatus {
        debug_assert!(self.frame_header.is_padded());
        debug_assert_eq!(self.remaining_padding, 0);

        if db.has_data() {
            let total_payload = self.remaining_payload;
            let pad_length    = db.decode_u8() as usize;
            let total_padding = pad_length + 1;

            if total_padding <= total_payload {
                self.remaining_padding = pad_length;
                self.remaining_payload = total_payload - total_padding;

                if report_pad_length {
                    self.listener.on_pad_length(pad_length);
                }

                return DecodeStatus::Done;
            }

            // the rest of the frame can still be discarded
            self.remaining_payload = total_payload - 1;

            return self.report_padding_too_long(total_padding - total_payload);
        }

        if self.remaining_payload == 0 {
            // no room for the pad length field itself
            return self.report_frame_size_error();
        }

        DecodeStatus::InProgress
    }

    /// Skip the available padding, executing `on_padding()` with the skipped bytes.
    ///
    /// Returns `true` once all of the padding has been skipped.
    pub fn skip_padding(&mut self, db: &mut DecodeBuffer) -> bool {
        debug_assert_eq!(self.remaining_payload, 0);

        let available = self.available_padding(db);

        if available > 0 {
            self.listener.on_padding(&db.cursor()[..available]);

            db.advance_cursor(available);

            self.remaining_padding -= available;
        }

        self.remaining_padding == 0
    }

    /// Report that the current frame has an invalid payload size.
    pub fn report_frame_size_error(&mut self) -> DecodeStatus {
        debug!("frame size error: {}", self.frame_header);

        self.listener.on_frame_size_error(&self.frame_header);
        self.error = Some(FrameError::FrameSize{ header: self.frame_header });

        DecodeStatus::Error
    }

    /// Report that the padding of the current frame does not fit in its payload.
    fn report_padding_too_long(&mut self, missing_length: usize) -> DecodeStatus {
        debug!("padding too long by {} bytes: {}", missing_length, self.frame_header);

        self.listener.on_padding_too_long(&self.frame_header, missing_length);
        self.error = Some(FrameError::PaddingTooLong{
            header:         self.frame_header,
            missing_length: missing_length
        });

        DecodeStatus::Error
    }

    /// Report that the listener declined the current frame.
    pub fn report_rejected(&mut self) -> DecodeStatus {
        debug!("frame rejected by listener: {}", self.frame_header);

        self.error = Some(FrameError::Rejected{ header: self.frame_header });

        DecodeStatus::Error
    }

    /// Start decoding the header of the next frame.
    ///
    /// Returns `true` once the header is complete.
    pub fn start_decoding_frame_header(&mut self, db: &mut DecodeBuffer) -> bool {
        self.structure_decoder.start(&mut self.frame_header, db)
    }

    /// Resume decoding the header of the next frame.
    pub fn resume_decoding_frame_header(&mut self, db: &mut DecodeBuffer) -> bool {
        self.structure_decoder.resume(&mut self.frame_header, db)
    }

    /// Start decoding a fixed-size structure from the payload.
    ///
    /// A payload that ends before the structure does is reported as a frame size error.
    pub fn start_decoding_structure_in_payload<S: Structure>(&mut self, out: &mut S,
                                                             db: &mut DecodeBuffer)
    -> DecodeStatus {
        let status = self.structure_decoder.start_in_payload(out, db,
                                                             &mut self.remaining_payload);

        if status.is_error() {
            return self.report_frame_size_error();
        }

        status
    }

    /// Resume decoding a fixed-size structure from the payload.
    pub fn resume_decoding_structure_in_payload<S: Structure>(&mut self, out: &mut S,
                                                              db: &mut DecodeBuffer)
    -> DecodeStatus {
        let status = self.structure_decoder.resume_in_payload(out, db,
                                                              &mut self.remaining_payload);

        if status.is_error() {
            return self.report_frame_size_error();
        }

        status
    }

    /// Move any remaining padding into the payload, so that it can be discarded.
    pub fn fold_padding_into_payload(&mut self) {
        self.remaining_payload += self.remaining_padding;
        self.remaining_padding  = 0;
    }
}
