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

//! A thin client for Hadoop's [WebHDFS](https://hadoop.apache.org/docs/stable/hadoop-project-dist/hadoop-hdfs/WebHDFS.html) REST API.
//!
//! - Every method maps to one request against the namenode. `create`,
//!   `append` and `get_checksum` send a second request to the datanode the
//!   namenode redirects to.
//! - Errors carry the http status and which hop failed, see [`Error`].
//! - A synchronous client lives at [`blocking::WebhdfsClient`].
//!
//! # Quick Start
//!
//! ```no_run
//! use webhdfs::OpCreate;
//! use webhdfs::Result;
//! use webhdfs::WebhdfsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = WebhdfsClient::builder()
//!         .host("namenode.example.com")
//!         .port(9870)
//!         .user_name("hadoop")
//!         .build()?;
//!
//!     // Write data
//!     client
//!         .create_with("/tmp/hello.txt", "Hello, ", OpCreate::new().with_overwrite(true))
//!         .await?;
//!     client.append("/tmp/hello.txt", "World!").await?;
//!
//!     // Read data
//!     let bs = client.open("/tmp/hello.txt").await?;
//!     assert_eq!(bs.as_ref(), b"Hello, World!");
//!
//!     // Fetch metadata
//!     let status = client.status("/tmp/hello.txt").await?;
//!     println!("length: {}", status.length);
//!
//!     // Delete
//!     client.remove("/tmp/hello.txt").await?;
//!
//!     Ok(())
//! }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]
// Deny unused qualifications.
#![deny(unused_qualifications)]

// Private module with public types, they will be accessed via `webhdfs::Xxxx`
mod types;
pub use types::*;

pub mod raw;

mod webhdfs;
pub use webhdfs::*;

pub mod blocking;
