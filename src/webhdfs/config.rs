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

use serde::Deserialize;
use serde::Serialize;

use super::backend::WebhdfsBuilder;
use crate::raw::*;
use crate::*;

/// Config for WebHDFS client.
#[derive(Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
#[non_exhaustive]
pub struct WebhdfsConfig {
    /// Hostname of the namenode, default to `127.0.0.1`.
    ///
    /// A `http://` or `https://` prefix picks the scheme, `http` if absent.
    pub host: Option<String>,
    /// Http port of the namenode, default to `9870`.
    pub port: Option<u16>,
    /// Name of the user sent as `user.name` with every namenode request.
    pub user_name: Option<String>,
}

impl Debug for WebhdfsConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhdfsConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user_name", &self.user_name)
            .finish_non_exhaustive()
    }
}

impl WebhdfsConfig {
    /// Deserialize config from string pairs, keys are case-insensitive.
    ///
    /// ```
    /// # use webhdfs::WebhdfsConfig;
    /// let cfg = WebhdfsConfig::from_iter([
    ///     ("host".to_string(), "namenode".to_string()),
    ///     ("port".to_string(), "50070".to_string()),
    /// ])
    /// .unwrap();
    /// assert_eq!(cfg.port, Some(50070));
    /// ```
    pub fn from_iter(iter: impl IntoIterator<Item = (String, String)>) -> Result<Self> {
        let map: HashMap<String, String> = iter.into_iter().collect();

        Self::deserialize(ConfigDeserializer::new(map)).map_err(|err| {
            Error::new(ErrorKind::ConfigInvalid, "failed to deserialize config")
                .with_operation("WebhdfsConfig::from_iter")
                .set_source(err)
        })
    }

    /// Convert this config into a builder.
    pub fn into_builder(self) -> WebhdfsBuilder {
        WebhdfsBuilder::from_config(self)
    }
}
