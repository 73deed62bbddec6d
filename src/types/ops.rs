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

//! Ops provides the operation args struct like [`OpOpen`] for user.
//!
//! Every field is optional. A field left unset is not sent to the namenode
//! at all, so the namenode falls back to its own default.

/// Args for `mkdir` operation.
#[derive(Debug, Clone, Default)]
pub struct OpMkdir {
    permission: Option<String>,
}

impl OpMkdir {
    /// Create a new `OpMkdir`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the octal permission (like `755`) of created directories.
    pub fn with_permission(mut self, permission: &str) -> Self {
        self.permission = Some(permission.to_string());
        self
    }

    /// Get the permission of this mkdir operation.
    pub fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }
}

/// Args for `remove` operation.
#[derive(Debug, Clone, Default)]
pub struct OpDelete {
    recursive: Option<bool>,
}

impl OpDelete {
    /// Create a new `OpDelete`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delete the content of sub directories too.
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = Some(recursive);
        self
    }

    /// Get the recursive flag of this delete operation.
    pub fn recursive(&self) -> Option<bool> {
        self.recursive
    }
}

/// Args for `open` operation.
#[derive(Debug, Clone, Default)]
pub struct OpOpen {
    offset: Option<u64>,
    length: Option<u64>,
    buffer_size: Option<u64>,
}

impl OpOpen {
    /// Create a new `OpOpen`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting byte position.
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Get the offset of this open operation.
    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    /// Set the number of bytes to be read.
    pub fn with_length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    /// Get the length of this open operation.
    pub fn length(&self) -> Option<u64> {
        self.length
    }

    /// Set the size of the buffer used to transfer the data.
    pub fn with_buffer_size(mut self, buffer_size: u64) -> Self {
        self.buffer_size = Some(buffer_size);
        self
    }

    /// Get the buffer size of this open operation.
    pub fn buffer_size(&self) -> Option<u64> {
        self.buffer_size
    }
}

/// Args for `create` operation.
#[derive(Debug, Clone, Default)]
pub struct OpCreate {
    overwrite: Option<bool>,
    permission: Option<String>,
    replication: Option<i32>,
    block_size: Option<u64>,
    buffer_size: Option<u64>,
}

impl OpCreate {
    /// Create a new `OpCreate`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content if the file already exists.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = Some(overwrite);
        self
    }

    /// Get the overwrite flag of this create operation.
    pub fn overwrite(&self) -> Option<bool> {
        self.overwrite
    }

    /// Set the octal permission of the created file.
    pub fn with_permission(mut self, permission: &str) -> Self {
        self.permission = Some(permission.to_string());
        self
    }

    /// Get the permission of this create operation.
    pub fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }

    /// Set the replication factor of the created file.
    pub fn with_replication(mut self, replication: i32) -> Self {
        self.replication = Some(replication);
        self
    }

    /// Get the replication of this create operation.
    pub fn replication(&self) -> Option<i32> {
        self.replication
    }

    /// Set the block size of the created file.
    pub fn with_block_size(mut self, block_size: u64) -> Self {
        self.block_size = Some(block_size);
        self
    }

    /// Get the block size of this create operation.
    pub fn block_size(&self) -> Option<u64> {
        self.block_size
    }

    /// Set the size of the buffer used to transfer the data.
    pub fn with_buffer_size(mut self, buffer_size: u64) -> Self {
        self.buffer_size = Some(buffer_size);
        self
    }

    /// Get the buffer size of this create operation.
    pub fn buffer_size(&self) -> Option<u64> {
        self.buffer_size
    }
}

/// Args for `append` operation.
#[derive(Debug, Clone, Default)]
pub struct OpAppend {
    buffer_size: Option<u64>,
}

impl OpAppend {
    /// Create a new `OpAppend`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size of the buffer used to transfer the data.
    pub fn with_buffer_size(mut self, buffer_size: u64) -> Self {
        self.buffer_size = Some(buffer_size);
        self
    }

    /// Get the buffer size of this append operation.
    pub fn buffer_size(&self) -> Option<u64> {
        self.buffer_size
    }
}
