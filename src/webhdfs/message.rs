// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! WebHDFS response messages
//!
//! Every wrapper mirrors the fixed key path the namenode puts the payload
//! under, so a missing key fails decoding instead of yielding a default.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct BooleanResp {
    pub boolean: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct PathResp {
    pub path: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct LocationResp {
    pub location: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct FileStatusWrapper {
    pub file_status: FileStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct FileStatusesWrapper {
    pub file_statuses: FileStatuses,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct FileStatuses {
    pub file_status: Vec<FileStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct FileChecksumWrapper {
    pub file_checksum: FileChecksum,
}

/// FileStatus describes a file or directory on HDFS.
///
/// Returned by [`WebhdfsClient::status`](crate::WebhdfsClient::status) and,
/// one per child, by [`WebhdfsClient::listdir`](crate::WebhdfsClient::listdir).
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileStatus {
    /// Last access time in milliseconds since epoch.
    #[serde(default)]
    pub access_time: i64,
    /// Block size in bytes, `0` for directories.
    #[serde(default)]
    pub block_size: u64,
    /// Owning group.
    #[serde(default)]
    pub group: String,
    /// Length in bytes, `0` for directories.
    pub length: u64,
    /// Last modification time in milliseconds since epoch.
    pub modification_time: i64,
    /// Owning user.
    #[serde(default)]
    pub owner: String,
    /// Name of the entry relative to the listed directory.
    ///
    /// Empty when the status is fetched for the path itself.
    pub path_suffix: String,
    /// Octal permission like `755`.
    #[serde(default)]
    pub permission: String,
    /// Replication factor, `0` for directories.
    #[serde(default)]
    pub replication: u16,
    /// Type of this entry.
    #[serde(rename = "type")]
    pub ty: FileType,
    /// Number of children, only reported by newer namenodes.
    pub children_num: Option<u64>,
    /// Inode id, only reported by newer namenodes.
    pub file_id: Option<u64>,
    /// Storage policy id, only reported by newer namenodes.
    pub storage_policy: Option<u8>,
    /// Link target, only present for symlinks.
    pub symlink: Option<String>,
}

/// FileType is the `type` of a [`FileStatus`].
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    /// A directory.
    Directory,
    /// A regular file.
    #[default]
    File,
    /// A symbolic link.
    Symlink,
}

/// FileChecksum is the checksum of a file as computed by the datanodes.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileChecksum {
    /// Algorithm name, like `MD5-of-1MD5-of-512CRC32C`.
    pub algorithm: String,
    /// Hex encoded checksum bytes.
    pub bytes: String,
    /// Length of the checksum bytes.
    pub length: u64,
}
