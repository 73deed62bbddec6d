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

use std::fmt::Display;
use std::fmt::Formatter;

use http::Method;

/// WebhdfsOp is the `op` code sent to the namenode.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
#[non_exhaustive]
pub enum WebhdfsOp {
    /// List a directory.
    ListStatus,
    /// Create a directory hierarchy.
    Mkdirs,
    /// Delete a file or directory.
    Delete,
    /// Rename a file or directory.
    Rename,
    /// Get the home directory of the user.
    GetHomeDirectory,
    /// Read a file.
    Open,
    /// Get the status of a file or directory.
    GetFileStatus,
    /// Set permission of a file or directory.
    SetPermission,
    /// Create a file, redirected to a datanode.
    Create,
    /// Append to a file, redirected to a datanode.
    Append,
    /// Set replication factor of a file.
    SetReplication,
    /// Get checksum of a file, redirected to a datanode.
    GetFileChecksum,
}

impl WebhdfsOp {
    /// Convert self into static str.
    pub fn into_static(self) -> &'static str {
        self.into()
    }

    /// The http method the namenode expects for this op.
    pub fn method(&self) -> Method {
        match self {
            WebhdfsOp::ListStatus
            | WebhdfsOp::GetHomeDirectory
            | WebhdfsOp::Open
            | WebhdfsOp::GetFileStatus
            | WebhdfsOp::GetFileChecksum => Method::GET,
            WebhdfsOp::Mkdirs
            | WebhdfsOp::Rename
            | WebhdfsOp::SetPermission
            | WebhdfsOp::Create
            | WebhdfsOp::SetReplication => Method::PUT,
            WebhdfsOp::Append => Method::POST,
            WebhdfsOp::Delete => Method::DELETE,
        }
    }

    /// Check if this op is served by a datanode after a redirect.
    pub fn is_two_step(&self) -> bool {
        matches!(
            self,
            WebhdfsOp::Create | WebhdfsOp::Append | WebhdfsOp::GetFileChecksum
        )
    }
}

impl Display for WebhdfsOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.into_static())
    }
}

impl From<WebhdfsOp> for &'static str {
    fn from(v: WebhdfsOp) -> &'static str {
        match v {
            WebhdfsOp::ListStatus => "LISTSTATUS",
            WebhdfsOp::Mkdirs => "MKDIRS",
            WebhdfsOp::Delete => "DELETE",
            WebhdfsOp::Rename => "RENAME",
            WebhdfsOp::GetHomeDirectory => "GETHOMEDIRECTORY",
            WebhdfsOp::Open => "OPEN",
            WebhdfsOp::GetFileStatus => "GETFILESTATUS",
            WebhdfsOp::SetPermission => "SETPERMISSION",
            WebhdfsOp::Create => "CREATE",
            WebhdfsOp::Append => "APPEND",
            WebhdfsOp::SetReplication => "SETREPLICATION",
            WebhdfsOp::GetFileChecksum => "GETFILECHECKSUM",
        }
    }
}
