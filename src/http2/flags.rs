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

use std::fmt;

/// `ACK` flag of `SETTINGS` and `PING` frames.
pub const FL_ACK: u8 = 0x1;

/// `END_STREAM` flag of `DATA` and `HEADERS` frames. Shares its bit with `FL_ACK`.
pub const FL_END_STREAM: u8 = 0x1;

/// `END_HEADERS` flag of `HEADERS`, `PUSH_PROMISE` and `CONTINUATION` frames.
pub const FL_END_HEADERS: u8 = 0x4;

/// `PADDED` flag of `DATA`, `HEADERS` and `PUSH_PROMISE` frames.
pub const FL_PADDED: u8 = 0x8;

/// `PRIORITY` flag of `HEADERS` frames.
pub const FL_PRIORITY: u8 = 0x20;

/// Names of the defined flag bits, in bit order.
const FLAG_NAMES: [(u8, &str); 4] = [(FL_END_STREAM,  "END_STREAM/ACK"),
                                     (FL_END_HEADERS, "END_HEADERS"),
                                     (FL_PADDED,      "PADDED"),
                                     (FL_PRIORITY,    "PRIORITY")];

/// Flags octet of a frame header.
///
/// Which bits mean anything depends on the frame type, so the predicates only test bits. The frame
/// decoder clears the bits a known frame type does not define before its payload is decoded.
#[derive(Clone,Copy,Default,PartialEq,Eq,Hash)]
pub struct Flags {
    bits: u8
}

impl Flags {
    /// Create a new `Flags` from the raw octet.
    pub fn from_u8(byte: u8) -> Flags {
        Flags{
            bits: byte
        }
    }

    /// Retrieve the raw octet.
    pub fn as_byte(&self) -> u8 {
        self.bits
    }

    /// Retrieve a copy with every bit outside of `mask` cleared.
    pub fn retain(&self, mask: u8) -> Flags {
        Flags::from_u8(self.bits & mask)
    }

    /// Indicates that every bit of `mask` is set.
    #[inline]
    fn contains(&self, mask: u8) -> bool {
        self.bits & mask == mask
    }

    /// Indicates that no bit is set.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Indicates that the `ACK` bit is set.
    pub fn is_ack(&self) -> bool {
        self.contains(FL_ACK)
    }

    pub fn is_end_headers(&self) -> bool {
        self.contains(FL_END_HEADERS)
    }

    pub fn is_end_stream(&self) -> bool {
        self.contains(FL_END_STREAM)
    }

    pub fn is_padded(&self) -> bool {
        self.contains(FL_PADDED)
    }

    pub fn is_priority(&self) -> bool {
        self.contains(FL_PRIORITY)
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "Flags({:#04x}", self.bits)?;

        let mut separator = ": ";

        for &(bit, name) in FLAG_NAMES.iter() {
            if self.contains(bit) {
                write!(formatter, "{}{}", separator, name)?;

                separator = " | ";
            }
        }

        write!(formatter, ")")
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{:#04x}", self.bits)
    }
}
