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

use crate::decode_status::DecodeStatus;

#[test]
fn predicates() {
    assert!(DecodeStatus::Done.is_done());
    assert!(!DecodeStatus::Done.is_in_progress());
    assert!(DecodeStatus::InProgress.is_in_progress());
    assert!(!DecodeStatus::InProgress.is_error());
    assert!(DecodeStatus::Error.is_error());
    assert!(!DecodeStatus::Error.is_done());
}

#[test]
fn display() {
    assert_eq!(format!("{}", DecodeStatus::Done), "done");
    assert_eq!(format!("{}", DecodeStatus::InProgress), "in progress");
    assert_eq!(format!("{:?}", DecodeStatus::Error), "DecodeStatus::Error");
}
