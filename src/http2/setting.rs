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

/// Header table size setting.
pub const S_HEADER_TABLE_SIZE: u16 = 0x1;

/// Enable push setting.
pub const S_ENABLE_PUSH: u16 = 0x2;

/// Maximum concurrent streams setting.
pub const S_MAX_CONCURRENT_STREAMS: u16 = 0x3;

/// Initial window size setting.
pub const S_INITIAL_WINDOW_SIZE: u16 = 0x4;

/// Maximum frame size setting.
pub const S_MAX_FRAME_SIZE: u16 = 0x5;

/// Maximum header list size setting.
pub const S_MAX_HEADER_LIST_SIZE: u16 = 0x6;

/// Available settings.
///
/// The decoder reports settings as raw identifier/value pairs. `Setting` is the interpreted view
/// of such a pair. Identifiers that RFC 7540 does not define are kept along with their value so
/// they can be ignored as the RFC requires.
#[derive(Clone,Copy,PartialEq,Eq)]
pub enum Setting {
    /// Enable push setting.
    EnablePush(u32),

    /// Header table size setting.
    HeaderTableSize(u32),

    /// Initial window size setting.
    InitialWindowSize(u32),

    /// Maximum concurrent streams setting.
    MaxConcurrentStreams(u32),

    /// Maximum frame size setting.
    MaxFrameSize(u32),

    /// Maximum header list size setting.
    MaxHeaderListSize(u32),

    /// Unsupported setting identifier and value.
    Unsupported(u16, u32)
}

impl Setting {
    /// Create a new `Setting`.
    pub fn new(id: u16, value: u32) -> Setting {
        match id {
            S_HEADER_TABLE_SIZE      => Setting::HeaderTableSize(value),
            S_ENABLE_PUSH            => Setting::EnablePush(value),
            S_MAX_CONCURRENT_STREAMS => Setting::MaxConcurrentStreams(value),
            S_INITIAL_WINDOW_SIZE    => Setting::InitialWindowSize(value),
            S_MAX_FRAME_SIZE         => Setting::MaxFrameSize(value),
            S_MAX_HEADER_LIST_SIZE   => Setting::MaxHeaderListSize(value),
            _                        => Setting::Unsupported(id, value)
        }
    }

    /// Retrieve the identifier.
    pub fn id(&self) -> u16 {
        match *self {
            Setting::HeaderTableSize(_)      => S_HEADER_TABLE_SIZE,
            Setting::EnablePush(_)           => S_ENABLE_PUSH,
            Setting::MaxConcurrentStreams(_) => S_MAX_CONCURRENT_STREAMS,
            Setting::InitialWindowSize(_)    => S_INITIAL_WINDOW_SIZE,
            Setting::MaxFrameSize(_)         => S_MAX_FRAME_SIZE,
            Setting::MaxHeaderListSize(_)    => S_MAX_HEADER_LIST_SIZE,
            Setting::Unsupported(id, _)      => id
        }
    }

    /// Format this for debug and display purposes.
    fn format(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Setting::EnablePush(x) => {
                write!(formatter, "<Setting::EnablePush: {}>", x)
            },
            Setting::HeaderTableSize(x) => {
                write!(formatter, "<Setting::HeaderTableSize: {}>", x)
            },
            Setting::InitialWindowSize(x) => {
                write!(formatter, "<Setting::InitialWindowSize: {}>", x)
            },
            Setting::MaxConcurrentStreams(x) => {
                write!(formatter, "<Setting::MaxConcurrentStreams: {}>", x)
            },
            Setting::MaxFrameSize(x) => {
                write!(formatter, "<Setting::MaxFrameSize: {}>", x)
            },
            Setting::MaxHeaderListSize(x) => {
                write!(formatter, "<Setting::MaxHeaderListSize: {}>", x)
            },
            Setting::Unsupported(id, x) => {
                write!(formatter, "<Setting::Unsupported({:#x}): {}>", id, x)
            }
        }
    }

    /// Indicates that this a `Setting::Unsupported`.
    pub fn is_unsupported(&self) -> bool {
        match *self {
            Setting::Unsupported(_, _) => true,
            _ => false
        }
    }

    /// Retrieve the value.
    pub fn value(&self) -> u32 {
        match *self {
              Setting::EnablePush(x)
            | Setting::HeaderTableSize(x)
            | Setting::InitialWindowSize(x)
            | Setting::MaxConcurrentStreams(x)
            | Setting::MaxFrameSize(x)
            | Setting::MaxHeaderListSize(x)
            | Setting::Unsupported(_, x) => {
                x
            }
        }
    }
}

impl fmt::Debug for Setting {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        self.format(formatter)
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        self.format(formatter)
    }
}
