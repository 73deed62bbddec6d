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

use bytes::Bytes;
use http::response::Parts;
use http::Response;
use http::StatusCode;
use serde::Deserialize;

use crate::raw::*;
use crate::*;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WebHdfsErrorWrapper {
    pub remote_exception: WebHdfsError,
}

/// WebHdfsError is the error message returned by WebHdfs service
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct WebHdfsError {
    exception: String,
    message: String,
    java_class_name: String,
}

pub(super) fn parse_error(resp: Response<Bytes>, hop: Hop) -> Error {
    let (parts, body) = resp.into_parts();
    let s = String::from_utf8_lossy(&body);
    parse_error_msg(&parts, &s, hop)
}

pub(super) fn parse_error_msg(parts: &Parts, body: &str, hop: Hop) -> Error {
    let (mut kind, retryable) = match parts.status {
        StatusCode::NOT_FOUND => (ErrorKind::NotFound, false),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => (ErrorKind::PermissionDenied, false),
        // passing invalid arguments will return BAD_REQUEST
        // should be un-retryable
        StatusCode::BAD_REQUEST => (ErrorKind::Unexpected, false),
        StatusCode::INTERNAL_SERVER_ERROR
        | StatusCode::BAD_GATEWAY
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::GATEWAY_TIMEOUT => (ErrorKind::Unexpected, true),
        _ => (ErrorKind::Unexpected, false),
    };

    let message = match serde_json::from_str::<WebHdfsErrorWrapper>(body) {
        Ok(wh_error) => {
            let remote = wh_error.remote_exception;
            // The namenode answers 403 for both "exists" and "denied", only
            // the exception name tells them apart.
            match remote.exception.as_str() {
                "FileNotFoundException" => kind = ErrorKind::NotFound,
                "FileAlreadyExistsException" => kind = ErrorKind::AlreadyExists,
                "AccessControlException" | "SecurityException" => {
                    kind = ErrorKind::PermissionDenied
                }
                _ => {}
            }
            format!("{}: {}", remote.exception, remote.message)
        }
        Err(_) => body.to_owned(),
    };

    let mut err = Error::new(kind, message).with_hop(hop);

    err = with_error_response_context(err, parts);

    if retryable {
        err = err.set_temporary();
    }

    err
}

/// Create a new error for a two-step operation whose first hop didn't
/// point us to a datanode.
pub(super) fn new_missing_redirect_error(status: StatusCode) -> Error {
    Error::new(
        ErrorKind::MissingRedirect,
        "namenode response doesn't carry a datanode location",
    )
    .with_hop(Hop::Namenode)
    .with_http_status(status)
}
