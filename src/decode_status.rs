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

//! Decode step results.

use std::fmt;

/// Result of a single decode step.
///
/// A decode step never blocks and never buffers payload data. When it runs out of input it
/// returns [`DecodeStatus::InProgress`](enum.DecodeStatus.html#variant.InProgress) and the
/// caller is expected to resume with the next chunk of the stream.
#[derive(Clone,Copy,PartialEq,Eq)]
pub enum DecodeStatus {
    /// The frame, or the part of the frame being decoded, is complete.
    Done,

    /// Additional stream data is expected. No data has been lost, and nothing already reported
    /// will be reported again.
    InProgress,

    /// The frame is malformed. The listener has already been told why, and no further callback
    /// will be executed for the frame.
    Error
}

impl DecodeStatus {
    /// Indicates that the step completed.
    pub fn is_done(&self) -> bool {
        *self == DecodeStatus::Done
    }

    /// Indicates that more data is needed.
    pub fn is_in_progress(&self) -> bool {
        *self == DecodeStatus::InProgress
    }

    /// Indicates that the step failed.
    pub fn is_error(&self) -> bool {
        *self == DecodeStatus::Error
    }
}

impl fmt::Debug for DecodeStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecodeStatus::Done => {
                write!(formatter, "DecodeStatus::Done")
            },
            DecodeStatus::InProgress => {
                write!(formatter, "DecodeStatus::InProgress")
            },
            DecodeStatus::Error => {
                write!(formatter, "DecodeStatus::Error")
            }
        }
    }
}

impl fmt::Display for DecodeStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecodeStatus::Done => {
                write!(formatter, "done")
            },
            DecodeStatus::InProgress => {
                write!(formatter, "in progress")
            },
            DecodeStatus::Error => {
                write!(formatter, "error")
            }
        }
    }
}
