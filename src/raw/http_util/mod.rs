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

//! http_util contains the util types and functions that used across webhdfs.
//!
//! # NOTE
//!
//! This mod is not a part of the stable API. We expose them out to make
//! it easier to plug in custom transports.

mod client;
pub use client::HttpClient;
pub use client::HttpFetch;
pub use client::HttpFetchDyn;
pub use client::HttpFetcher;

mod header;
pub use header::parse_header_to_str;
pub use header::parse_location;

mod uri;
pub use uri::percent_encode_path;

mod error;
pub use error::new_request_build_error;
pub use error::new_response_build_error;
pub use error::with_error_response_context;
