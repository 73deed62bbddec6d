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

use std::collections::HashMap;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use http::Method;
use http::Uri;
use log::debug;

use super::config::WebhdfsConfig;
use super::core::WebhdfsCore;
use super::core::WebhdfsQuery;
use super::core::WEBHDFS_CONTEXT_ROOT;
use super::error::parse_error;
use super::message::BooleanResp;
use super::message::FileChecksum;
use super::message::FileChecksumWrapper;
use super::message::FileStatus;
use super::message::FileStatusWrapper;
use super::message::FileStatusesWrapper;
use super::message::PathResp;
use super::operation::WebhdfsOp;
use crate::raw::*;
use crate::*;

const WEBHDFS_DEFAULT_HOST: &str = "127.0.0.1";
const WEBHDFS_DEFAULT_PORT: u16 = 9870;

/// Builder for [`WebhdfsClient`].
///
/// # Example
///
/// ```no_run
/// use webhdfs::Result;
/// use webhdfs::WebhdfsBuilder;
///
/// # async fn test() -> Result<()> {
/// let client = WebhdfsBuilder::default()
///     .host("namenode.example.com")
///     .port(9870)
///     .user_name("hadoop")
///     .build()?;
///
/// let entries = client.listdir("/user/hadoop").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Default, Clone)]
pub struct WebhdfsBuilder {
    config: WebhdfsConfig,
    http_client: Option<HttpClient>,
}

impl Debug for WebhdfsBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhdfsBuilder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl WebhdfsBuilder {
    /// Create a builder from given config.
    pub fn from_config(config: WebhdfsConfig) -> Self {
        Self {
            config,
            http_client: None,
        }
    }

    /// Create a builder from string pairs like `host`, `port`, `user_name`.
    pub fn from_map(map: HashMap<String, String>) -> Result<Self> {
        WebhdfsConfig::from_iter(map).map(Self::from_config)
    }

    /// Set the hostname of the namenode, default to `127.0.0.1`.
    ///
    /// Hosts like `https://namenode.example.com` are accepted to switch
    /// scheme. A trailing `/` is trimmed. An empty host is rejected by
    /// [`WebhdfsBuilder::build`].
    pub fn host(mut self, host: &str) -> Self {
        self.config.host = Some(host.trim_end_matches('/').to_string());
        self
    }

    /// Set the http port of the namenode, default to `9870`.
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = Some(port);
        self
    }

    /// Set the user name sent with every namenode request.
    pub fn user_name(mut self, user_name: &str) -> Self {
        if !user_name.is_empty() {
            self.config.user_name = Some(user_name.to_string());
        }
        self
    }

    /// Specify the http client used to talk with namenode and datanodes.
    ///
    /// The client must not follow redirects by itself.
    pub fn http_client(mut self, client: HttpClient) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<WebhdfsClient> {
        debug!("start building client: {:?}", self);

        let host = match self.config.host {
            Some(host) if host.is_empty() => {
                return Err(
                    Error::new(ErrorKind::ConfigInvalid, "host is empty")
                        .with_operation("WebhdfsBuilder::build"),
                )
            }
            Some(host) => host,
            None => WEBHDFS_DEFAULT_HOST.to_string(),
        };
        let port = self.config.port.unwrap_or(WEBHDFS_DEFAULT_PORT);

        // check scheme
        let authority = if host.starts_with("http://") || host.starts_with("https://") {
            format!("{host}:{port}")
        } else {
            format!("http://{host}:{port}")
        };
        authority.parse::<Uri>().map_err(|err| {
            Error::new(ErrorKind::ConfigInvalid, "namenode address is invalid")
                .with_operation("WebhdfsBuilder::build")
                .with_context("address", &authority)
                .set_source(err)
        })?;

        let endpoint = format!("{authority}{WEBHDFS_CONTEXT_ROOT}");
        debug!("client use endpoint {endpoint}");

        let client = match self.http_client {
            Some(client) => client,
            None => HttpClient::new()?,
        };

        Ok(WebhdfsClient {
            core: Arc::new(WebhdfsCore {
                endpoint,
                user_name: self.config.user_name,
                client,
            }),
        })
    }
}

/// Client for the [WebHDFS](https://hadoop.apache.org/docs/stable/hadoop-project-dist/hadoop-hdfs/WebHDFS.html) REST API.
///
/// Every call is one namenode request, plus one datanode request for
/// `create`, `append` and `get_checksum`. The client keeps no state between
/// calls and is cheap to clone.
#[derive(Debug, Clone)]
pub struct WebhdfsClient {
    core: Arc<WebhdfsCore>,
}

impl WebhdfsClient {
    /// Create a new builder.
    pub fn builder() -> WebhdfsBuilder {
        WebhdfsBuilder::default()
    }

    /// Base url of the namenode like `http://127.0.0.1:9870/webhdfs/v1`.
    pub fn namenode_url(&self) -> &str {
        &self.core.endpoint
    }

    /// User name sent with every namenode request.
    pub fn user_name(&self) -> Option<&str> {
        self.core.user_name.as_deref()
    }

    /// List all the contents of a directory.
    pub async fn listdir(&self, path: &str) -> Result<Vec<FileStatus>> {
        debug!("webhdfs listing {path}");
        let query = WebhdfsQuery::new(WebhdfsOp::ListStatus);

        let resp = self.core.webhdfs_send(path, &query).await?;
        let statuses = match resp.status() {
            status if status.is_success() => {
                serde_json::from_slice::<FileStatusesWrapper>(resp.body())
                    .map_err(new_json_deserialize_error)?
                    .file_statuses
                    .file_status
            }
            _ => return Err(parse_error(resp, Hop::Namenode).with_operation(query.op())),
        };

        Ok(statuses)
    }

    /// Create a directory hierarchy, like `mkdir -p`.
    pub async fn mkdir(&self, path: &str) -> Result<bool> {
        self.mkdir_with(path, OpMkdir::new()).await
    }

    /// Create a directory hierarchy with extra args.
    pub async fn mkdir_with(&self, path: &str, args: OpMkdir) -> Result<bool> {
        debug!("webhdfs creating directory {path}");
        let query =
            WebhdfsQuery::new(WebhdfsOp::Mkdirs).push_opt("permission", args.permission());

        self.boolean_request(path, query).await
    }

    /// Delete a file or an empty directory.
    ///
    /// Returns `false` if the namenode didn't delete anything, for example
    /// when the path doesn't exist.
    pub async fn remove(&self, path: &str) -> Result<bool> {
        self.remove_with(path, OpDelete::new()).await
    }

    /// Delete a file or directory with extra args.
    pub async fn remove_with(&self, path: &str, args: OpDelete) -> Result<bool> {
        debug!("webhdfs deleting {path}");
        let query = WebhdfsQuery::new(WebhdfsOp::Delete).push_opt("recursive", args.recursive());

        self.boolean_request(path, query).await
    }

    /// Rename a file or directory.
    pub async fn rename(&self, src: &str, dst: &str) -> Result<bool> {
        debug!("webhdfs renaming {src} to {dst}");
        let query = WebhdfsQuery::new(WebhdfsOp::Rename).push("destination", normalize_path(dst));

        self.boolean_request(src, query).await
    }

    /// Get the home directory of the user.
    pub async fn environ_home(&self) -> Result<String> {
        debug!("webhdfs getting home directory");
        let query = WebhdfsQuery::new(WebhdfsOp::GetHomeDirectory);

        let resp = self.core.webhdfs_send("/", &query).await?;
        match resp.status() {
            status if status.is_success() => {
                let resp = serde_json::from_slice::<PathResp>(resp.body())
                    .map_err(new_json_deserialize_error)?;
                Ok(resp.path)
            }
            _ => Err(parse_error(resp, Hop::Namenode).with_operation(query.op())),
        }
    }

    /// Read the whole file.
    pub async fn open(&self, path: &str) -> Result<Bytes> {
        self.open_with(path, OpOpen::new()).await
    }

    /// Read a file with extra args like offset and length.
    pub async fn open_with(&self, path: &str, args: OpOpen) -> Result<Bytes> {
        debug!("webhdfs opening {path}");
        let query = WebhdfsQuery::new(WebhdfsOp::Open)
            .push_opt("offset", args.offset())
            .push_opt("length", args.length())
            .push_opt("buffersize", args.buffer_size());

        let (resp, hop) = self.core.webhdfs_send_following(path, &query).await?;
        match resp.status() {
            status if status.is_success() => Ok(resp.into_body()),
            _ => Err(parse_error(resp, hop).with_operation(query.op())),
        }
    }

    /// Get the status of a file or directory.
    pub async fn status(&self, path: &str) -> Result<FileStatus> {
        debug!("webhdfs getting status of {path}");
        let query = WebhdfsQuery::new(WebhdfsOp::GetFileStatus);

        let (resp, hop) = self.core.webhdfs_send_following(path, &query).await?;
        match resp.status() {
            status if status.is_success() => {
                let status = serde_json::from_slice::<FileStatusWrapper>(resp.body())
                    .map_err(new_json_deserialize_error)?
                    .file_status;
                Ok(status)
            }
            _ => Err(parse_error(resp, hop).with_operation(query.op())),
        }
    }

    /// Set the octal permission (like `755`) of a file or directory.
    ///
    /// The namenode answers with an empty body, success is the status alone
    /// and is returned as `Ok(())`.
    pub async fn chmod(&self, path: &str, permission: &str) -> Result<()> {
        debug!("webhdfs setting permission of {path} to {permission}");
        let query = WebhdfsQuery::new(WebhdfsOp::SetPermission).push("permission", permission);

        let resp = self.core.webhdfs_send(path, &query).await?;
        match resp.status() {
            status if status.is_success() => Ok(()),
            _ => Err(parse_error(resp, Hop::Namenode).with_operation(query.op())),
        }
    }

    /// Set the replication factor of a file.
    ///
    /// The factor is not checked here, a non-positive factor is rejected by
    /// the namenode.
    pub async fn set_replication(&self, path: &str, replication: i32) -> Result<bool> {
        debug!("webhdfs setting replication factor of {path} to {replication}");
        let query = WebhdfsQuery::new(WebhdfsOp::SetReplication).push("replication", replication);

        self.boolean_request(path, query).await
    }

    /// Create a new file with given content.
    ///
    /// Success is returned as `Ok(())`, every failure is an `Err`.
    pub async fn create(&self, path: &str, data: impl Into<Bytes>) -> Result<()> {
        self.create_with(path, data, OpCreate::new()).await
    }

    /// Create a new file with extra args like overwrite.
    pub async fn create_with(
        &self,
        path: &str,
        data: impl Into<Bytes>,
        args: OpCreate,
    ) -> Result<()> {
        debug!("webhdfs creating {path}");
        let query = WebhdfsQuery::new(WebhdfsOp::Create)
            .push_opt("overwrite", args.overwrite())
            .push_opt("permission", args.permission())
            .push_opt("replication", args.replication())
            .push_opt("blocksize", args.block_size())
            .push_opt("buffersize", args.buffer_size());

        self.two_step_write(path, query, Method::PUT, data.into())
            .await
    }

    /// Append content to the end of a file.
    ///
    /// Success is returned as `Ok(())`, every failure is an `Err`.
    pub async fn append(&self, path: &str, data: impl Into<Bytes>) -> Result<()> {
        self.append_with(path, data, OpAppend::new()).await
    }

    /// Append content with extra args.
    pub async fn append_with(
        &self,
        path: &str,
        data: impl Into<Bytes>,
        args: OpAppend,
    ) -> Result<()> {
        debug!("webhdfs appending to {path}");
        let query =
            WebhdfsQuery::new(WebhdfsOp::Append).push_opt("buffersize", args.buffer_size());

        self.two_step_write(path, query, Method::POST, data.into())
            .await
    }

    /// Get the checksum of a file.
    pub async fn get_checksum(&self, path: &str) -> Result<FileChecksum> {
        debug!("webhdfs getting checksum of {path}");
        let query = WebhdfsQuery::new(WebhdfsOp::GetFileChecksum);

        let location = self
            .core
            .webhdfs_init_redirect(path, &query)
            .await
            .map_err(|err| err.with_operation(query.op()))?;

        let resp = self
            .core
            .webhdfs_send_datanode(Method::GET, &location, Bytes::new())
            .await
            .map_err(|err| err.with_operation(query.op()))?;
        match resp.status() {
            status if status.is_success() => {
                let checksum = serde_json::from_slice::<FileChecksumWrapper>(resp.body())
                    .map_err(new_json_deserialize_error)?
                    .file_checksum;
                Ok(checksum)
            }
            _ => Err(parse_error(resp, Hop::Datanode).with_operation(query.op())),
        }
    }

    /// Copy a file from the local filesystem to hdfs.
    pub async fn copy_from_local(
        &self,
        local_path: impl AsRef<Path>,
        hdfs_path: &str,
        args: OpCreate,
    ) -> Result<()> {
        let local_path = local_path.as_ref();
        debug!(
            "webhdfs copying local file {} to {hdfs_path}",
            local_path.display()
        );

        let exists = tokio::fs::try_exists(local_path)
            .await
            .map_err(|err| new_local_io_error(err, local_path))?;
        if !exists {
            return Err(Error::new(
                ErrorKind::NotFound,
                format!("the local file {} doesn't exist", local_path.display()),
            )
            .with_operation("copy_from_local"));
        }

        let data = tokio::fs::read(local_path)
            .await
            .map_err(|err| new_local_io_error(err, local_path))?;

        self.create_with(hdfs_path, data, args).await
    }

    /// Copy a file from hdfs to the local filesystem, replacing the local
    /// file if it exists.
    pub async fn copy_to_local(
        &self,
        hdfs_path: &str,
        local_path: impl AsRef<Path>,
        args: OpOpen,
    ) -> Result<()> {
        let local_path = local_path.as_ref();
        debug!(
            "webhdfs copying {hdfs_path} to local file {}",
            local_path.display()
        );

        let data = self.open_with(hdfs_path, args).await?;

        tokio::fs::write(local_path, data)
            .await
            .map_err(|err| new_local_io_error(err, local_path))
    }

    async fn boolean_request(&self, path: &str, query: WebhdfsQuery) -> Result<bool> {
        let resp = self.core.webhdfs_send(path, &query).await?;

        match resp.status() {
            status if status.is_success() => {
                let resp = serde_json::from_slice::<BooleanResp>(resp.body())
                    .map_err(new_json_deserialize_error)?;
                Ok(resp.boolean)
            }
            _ => Err(parse_error(resp, Hop::Namenode).with_operation(query.op())),
        }
    }

    async fn two_step_write(
        &self,
        path: &str,
        query: WebhdfsQuery,
        method: Method,
        data: Bytes,
    ) -> Result<()> {
        let location = self
            .core
            .webhdfs_init_redirect(path, &query)
            .await
            .map_err(|err| err.with_operation(query.op()))?;

        let resp = self
            .core
            .webhdfs_send_datanode(method, &location, data)
            .await
            .map_err(|err| err.with_operation(query.op()))?;
        match resp.status() {
            status if status.is_success() => Ok(()),
            _ => Err(parse_error(resp, Hop::Datanode).with_operation(query.op())),
        }
    }
}

fn new_local_io_error(err: std::io::Error, path: &Path) -> Error {
    let kind = match err.kind() {
        std::io::ErrorKind::NotFound => ErrorKind::NotFound,
        std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
        _ => ErrorKind::Unexpected,
    };

    Error::new(kind, "local file io failed")
        .with_context("local_path", path.display())
        .set_source(err)
}
