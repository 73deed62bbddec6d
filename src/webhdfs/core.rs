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

use std::fmt::Debug;
use std::fmt::Formatter;

use bytes::Bytes;
use http::header::CONTENT_LENGTH;
use http::header::CONTENT_TYPE;
use http::Method;
use http::Request;
use http::Response;
use log::debug;

use super::error::new_missing_redirect_error;
use super::error::parse_error;
use super::message::LocationResp;
use super::operation::WebhdfsOp;
use crate::raw::*;
use crate::*;

/// The path every WebHDFS endpoint lives under.
pub(super) const WEBHDFS_CONTEXT_ROOT: &str = "/webhdfs/v1";

/// How many redirects a read will follow before giving up.
const MAX_REDIRECTS: usize = 10;

/// WebhdfsQuery is the query string of a namenode request.
///
/// Parameters are kept in insertion order. A parameter without value is
/// never added, so the namenode sees it as absent instead of empty.
#[derive(Debug, Clone)]
pub struct WebhdfsQuery {
    op: WebhdfsOp,
    params: Vec<(&'static str, String)>,
}

impl WebhdfsQuery {
    /// Create a new query for given op.
    pub fn new(op: WebhdfsOp) -> Self {
        Self {
            op,
            params: Vec::new(),
        }
    }

    /// Get the op of this query.
    pub fn op(&self) -> WebhdfsOp {
        self.op
    }

    /// Add a parameter.
    pub fn push(mut self, key: &'static str, value: impl ToString) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    /// Add a parameter only if it has a value.
    pub fn push_opt<T: ToString>(self, key: &'static str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    /// Render the query string, `user.name` goes last.
    pub fn to_query_string(&self, user_name: Option<&str>) -> String {
        let mut query = format!("op={}", self.op);
        for (k, v) in &self.params {
            query += &format!("&{k}={}", percent_encode_path(v));
        }
        if let Some(user) = user_name {
            query += &format!("&user.name={}", percent_encode_path(user));
        }
        query
    }
}

/// WebhdfsCore holds the immutable settings of a client and sends its
/// requests.
#[derive(Clone)]
pub struct WebhdfsCore {
    /// Base namenode url like `http://127.0.0.1:9870/webhdfs/v1`.
    pub endpoint: String,
    pub user_name: Option<String>,
    pub client: HttpClient,
}

impl Debug for WebhdfsCore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhdfsCore")
            .field("endpoint", &self.endpoint)
            .field("user_name", &self.user_name)
            .finish()
    }
}

impl WebhdfsCore {
    /// Build the namenode url of given path and query.
    pub fn webhdfs_url(&self, path: &str, query: &WebhdfsQuery) -> String {
        let p = normalize_path(path);

        format!(
            "{}{}?{}",
            self.endpoint,
            percent_encode_path(&p),
            query.to_query_string(self.user_name.as_deref())
        )
    }

    pub fn webhdfs_request(&self, path: &str, query: &WebhdfsQuery) -> Result<Request<Bytes>> {
        let url = self.webhdfs_url(path, query);
        let method = query.op().method();
        debug!("webhdfs send {method} {url}");

        Request::builder()
            .method(method)
            .uri(&url)
            .body(Bytes::new())
            .map_err(new_request_build_error)
    }

    /// Send a request to the namenode without following redirects.
    pub async fn webhdfs_send(&self, path: &str, query: &WebhdfsQuery) -> Result<Response<Bytes>> {
        let req = self.webhdfs_request(path, query)?;
        self.send(req, Hop::Namenode).await
    }

    /// Send a request to the namenode, following redirects to datanodes.
    ///
    /// Returns the final response and the hop that produced it.
    pub async fn webhdfs_send_following(
        &self,
        path: &str,
        query: &WebhdfsQuery,
    ) -> Result<(Response<Bytes>, Hop)> {
        debug_assert_eq!(query.op().method(), Method::GET, "only reads follow redirects");

        let mut resp = self.webhdfs_send(path, query).await?;
        let mut hop = Hop::Namenode;

        for _ in 0..MAX_REDIRECTS {
            if !resp.status().is_redirection() {
                return Ok((resp, hop));
            }
            let location = match parse_location(resp.headers())? {
                Some(location) => location.to_string(),
                None => return Ok((resp, hop)),
            };
            debug!("webhdfs follow redirect to {location}");

            hop = Hop::Datanode;
            let req = Request::get(&location)
                .body(Bytes::new())
                .map_err(new_request_build_error)?;
            resp = self.send(req, hop).await?;
        }

        if resp.status().is_redirection() {
            return Err(
                Error::new(ErrorKind::Unexpected, "too many redirects")
                    .with_context("max_redirects", MAX_REDIRECTS)
                    .with_hop(hop),
            );
        }
        Ok((resp, hop))
    }

    /// Run the first hop of a two-step operation and return the datanode
    /// location the namenode points us to.
    ///
    /// WebHDFS has a two-step create/append to prevent clients to send out
    /// data before the namenode accepts it. Our http client never follows
    /// the redirect by itself, so the 3xx response is observed here.
    pub async fn webhdfs_init_redirect(&self, path: &str, query: &WebhdfsQuery) -> Result<String> {
        debug_assert!(query.op().is_two_step(), "{} is not a two-step op", query.op());

        let resp = self.webhdfs_send(path, query).await?;
        let status = resp.status();

        if !status.is_success() && !status.is_redirection() {
            return Err(parse_error(resp, Hop::Namenode));
        }

        if let Some(location) = parse_location(resp.headers())? {
            debug!("webhdfs {} redirected to {location}", query.op());
            return Ok(location.to_string());
        }

        // Namenodes asked with `noredirect=true` and some gateways answer
        // 200 with the location in body instead.
        if status.is_success() {
            if let Ok(resp) = serde_json::from_slice::<LocationResp>(resp.body()) {
                debug!("webhdfs {} redirected to {}", query.op(), resp.location);
                return Ok(resp.location);
            }
        }

        Err(new_missing_redirect_error(status))
    }

    /// Build the second hop request of a two-step operation.
    pub fn webhdfs_datanode_request(
        &self,
        method: Method,
        location: &str,
        body: Bytes,
    ) -> Result<Request<Bytes>> {
        debug!("webhdfs send {method} {location}");

        let mut req = Request::builder().method(method.clone()).uri(location);

        if method != Method::GET {
            req = req
                .header(CONTENT_TYPE, "application/octet-stream")
                .header(CONTENT_LENGTH, body.len());
        }

        req.body(body).map_err(new_request_build_error)
    }

    /// Send the second hop request of a two-step operation.
    pub async fn webhdfs_send_datanode(
        &self,
        method: Method,
        location: &str,
        body: Bytes,
    ) -> Result<Response<Bytes>> {
        let req = self.webhdfs_datanode_request(method, location, body)?;
        self.send(req, Hop::Datanode).await
    }

    async fn send(&self, req: Request<Bytes>, hop: Hop) -> Result<Response<Bytes>> {
        self.client
            .send(req)
            .await
            .map_err(|err| err.with_hop(hop))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn new_core(user_name: Option<&str>) -> WebhdfsCore {
        WebhdfsCore {
            endpoint: format!("http://namenode:9870{WEBHDFS_CONTEXT_ROOT}"),
            user_name: user_name.map(|v| v.to_string()),
            client: HttpClient::new().expect("http client must build"),
        }
    }

    #[test]
    fn test_query_omits_absent_params() {
        let query = WebhdfsQuery::new(WebhdfsOp::Open)
            .push_opt("offset", Some(10))
            .push_opt::<u64>("length", None)
            .push_opt("buffersize", Some(4096));

        assert_eq!(
            query.to_query_string(None),
            "op=OPEN&offset=10&buffersize=4096"
        );
    }

    #[test]
    fn test_query_with_user_name() {
        let query = WebhdfsQuery::new(WebhdfsOp::Delete).push("recursive", true);

        assert_eq!(
            query.to_query_string(Some("fabio")),
            "op=DELETE&recursive=true&user.name=fabio"
        );
    }

    #[test]
    fn test_webhdfs_url() {
        let core = new_core(Some("fabio"));
        let query = WebhdfsQuery::new(WebhdfsOp::Rename).push("destination", "/tmp/new name");

        assert_eq!(
            core.webhdfs_url("tmp//old name", &query),
            "http://namenode:9870/webhdfs/v1/tmp/old%20name?op=RENAME&destination=/tmp/new%20name&user.name=fabio"
        );
    }

    #[test]
    fn test_webhdfs_request() -> Result<()> {
        let core = new_core(None);
        let req = core.webhdfs_request("/foo", &WebhdfsQuery::new(WebhdfsOp::Mkdirs))?;

        assert_eq!(req.method(), Method::PUT);
        assert_eq!(
            req.uri().to_string(),
            "http://namenode:9870/webhdfs/v1/foo?op=MKDIRS"
        );
        assert!(req.body().is_empty());
        Ok(())
    }

    #[test]
    fn test_webhdfs_datanode_request() -> Result<()> {
        let core = new_core(None);
        let req = core.webhdfs_datanode_request(
            Method::PUT,
            "http://datanode:9864/webhdfs/v1/foo?op=CREATE&namenoderpcaddress=nn:8020",
            Bytes::from("foobar"),
        )?;

        assert_eq!(req.method(), Method::PUT);
        assert_eq!(
            req.headers().get(CONTENT_TYPE).map(|v| v.as_bytes()),
            Some(&b"application/octet-stream"[..])
        );
        assert_eq!(
            req.headers().get(CONTENT_LENGTH).map(|v| v.as_bytes()),
            Some(&b"6"[..])
        );
        assert_eq!(req.body(), &Bytes::from("foobar"));

        let req = core.webhdfs_datanode_request(
            Method::GET,
            "http://datanode:9864/webhdfs/v1/foo?op=GETFILECHECKSUM",
            Bytes::new(),
        )?;
        assert!(req.headers().get(CONTENT_TYPE).is_none());
        Ok(())
    }
}
