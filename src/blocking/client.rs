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

use std::path::Path;

use bytes::Bytes;
use tokio::runtime::Handle;

use crate::*;

/// Blocking version of [`crate::WebhdfsClient`].
///
/// # Notes
///
/// Every call blocks the current thread until the async call finishes on
/// the runtime behind the handle, so it must not be used inside an async
/// context. Fetch the handle first and call from a blocking thread instead.
///
/// # Example
///
/// ```no_run
/// use webhdfs::Result;
/// use webhdfs::WebhdfsClient;
///
/// fn main() -> Result<()> {
///     let runtime = tokio::runtime::Runtime::new().expect("runtime must build");
///     let client = WebhdfsClient::builder().host("namenode").build()?;
///
///     let client = webhdfs::blocking::WebhdfsClient::with_handle(
///         runtime.handle().clone(),
///         client,
///     );
///     let home = client.environ_home()?;
///     println!("home is {home}");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct WebhdfsClient {
    handle: Handle,
    client: crate::WebhdfsClient,
}

impl WebhdfsClient {
    /// Create a blocking client on the runtime of current context.
    ///
    /// Fails with [`ErrorKind::Unexpected`] outside of a tokio runtime.
    pub fn new(client: crate::WebhdfsClient) -> Result<Self> {
        let handle = Handle::try_current().map_err(|err| {
            Error::new(ErrorKind::Unexpected, "failed to get current tokio runtime")
                .with_operation("blocking::WebhdfsClient::new")
                .set_source(err)
        })?;

        Ok(Self { handle, client })
    }

    /// Create a blocking client on given runtime.
    pub fn with_handle(handle: Handle, client: crate::WebhdfsClient) -> Self {
        Self { handle, client }
    }

    /// See [`crate::WebhdfsClient::listdir`].
    pub fn listdir(&self, path: &str) -> Result<Vec<FileStatus>> {
        self.handle.block_on(self.client.listdir(path))
    }

    /// See [`crate::WebhdfsClient::mkdir`].
    pub fn mkdir(&self, path: &str) -> Result<bool> {
        self.handle.block_on(self.client.mkdir(path))
    }

    /// See [`crate::WebhdfsClient::mkdir_with`].
    pub fn mkdir_with(&self, path: &str, args: OpMkdir) -> Result<bool> {
        self.handle.block_on(self.client.mkdir_with(path, args))
    }

    /// See [`crate::WebhdfsClient::remove`].
    pub fn remove(&self, path: &str) -> Result<bool> {
        self.handle.block_on(self.client.remove(path))
    }

    /// See [`crate::WebhdfsClient::remove_with`].
    pub fn remove_with(&self, path: &str, args: OpDelete) -> Result<bool> {
        self.handle.block_on(self.client.remove_with(path, args))
    }

    /// See [`crate::WebhdfsClient::rename`].
    pub fn rename(&self, src: &str, dst: &str) -> Result<bool> {
        self.handle.block_on(self.client.rename(src, dst))
    }

    /// See [`crate::WebhdfsClient::environ_home`].
    pub fn environ_home(&self) -> Result<String> {
        self.handle.block_on(self.client.environ_home())
    }

    /// See [`crate::WebhdfsClient::open`].
    pub fn open(&self, path: &str) -> Result<Bytes> {
        self.handle.block_on(self.client.open(path))
    }

    /// See [`crate::WebhdfsClient::open_with`].
    pub fn open_with(&self, path: &str, args: OpOpen) -> Result<Bytes> {
        self.handle.block_on(self.client.open_with(path, args))
    }

    /// See [`crate::WebhdfsClient::status`].
    pub fn status(&self, path: &str) -> Result<FileStatus> {
        self.handle.block_on(self.client.status(path))
    }

    /// See [`crate::WebhdfsClient::chmod`].
    pub fn chmod(&self, path: &str, permission: &str) -> Result<()> {
        self.handle.block_on(self.client.chmod(path, permission))
    }

    /// See [`crate::WebhdfsClient::set_replication`].
    pub fn set_replication(&self, path: &str, replication: i32) -> Result<bool> {
        self.handle
            .block_on(self.client.set_replication(path, replication))
    }

    /// See [`crate::WebhdfsClient::create`].
    pub fn create(&self, path: &str, data: impl Into<Bytes>) -> Result<()> {
        self.handle.block_on(self.client.create(path, data))
    }

    /// See [`crate::WebhdfsClient::create_with`].
    pub fn create_with(&self, path: &str, data: impl Into<Bytes>, args: OpCreate) -> Result<()> {
        self.handle
            .block_on(self.client.create_with(path, data, args))
    }

    /// See [`crate::WebhdfsClient::append`].
    pub fn append(&self, path: &str, data: impl Into<Bytes>) -> Result<()> {
        self.handle.block_on(self.client.append(path, data))
    }

    /// See [`crate::WebhdfsClient::append_with`].
    pub fn append_with(&self, path: &str, data: impl Into<Bytes>, args: OpAppend) -> Result<()> {
        self.handle
            .block_on(self.client.append_with(path, data, args))
    }

    /// See [`crate::WebhdfsClient::get_checksum`].
    pub fn get_checksum(&self, path: &str) -> Result<FileChecksum> {
        self.handle.block_on(self.client.get_checksum(path))
    }

    /// See [`crate::WebhdfsClient::copy_from_local`].
    pub fn copy_from_local(
        &self,
        local_path: impl AsRef<Path>,
        hdfs_path: &str,
        args: OpCreate,
    ) -> Result<()> {
        self.handle
            .block_on(self.client.copy_from_local(local_path, hdfs_path, args))
    }

    /// See [`crate::WebhdfsClient::copy_to_local`].
    pub fn copy_to_local(
        &self,
        hdfs_path: &str,
        local_path: impl AsRef<Path>,
        args: OpOpen,
    ) -> Result<()> {
        self.handle
            .block_on(self.client.copy_to_local(hdfs_path, local_path, args))
    }
}
