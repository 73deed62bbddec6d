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
use std::env;

use rand::RngCore;
use webhdfs::WebhdfsBuilder;
use webhdfs::WebhdfsClient;

/// Init a client from `WEBHDFS_*` environment variables.
///
/// - If `WEBHDFS_HOST` is set, construct a new client with `WEBHDFS_PORT`
///   and `WEBHDFS_USER_NAME` as well.
/// - Else, returns a `None` to represent no valid config for client.
pub fn init_client() -> Option<WebhdfsClient> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenvy::dotenv();

    let cfg = env::vars()
        .filter_map(|(k, v)| {
            k.to_lowercase()
                .strip_prefix("webhdfs_")
                .map(|k| (k.to_string(), v))
        })
        .collect::<HashMap<String, String>>();

    if cfg.get("host").map(|v| v.is_empty()).unwrap_or(true) {
        return None;
    }

    let client = WebhdfsBuilder::from_map(cfg)
        .expect("config must be valid")
        .build()
        .expect("client must build");
    Some(client)
}

/// Working directory of behavior tests, `WEBHDFS_ROOT` or `/tmp`.
pub fn test_root() -> String {
    env::var("WEBHDFS_ROOT")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "/tmp".to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Generate a random path under the test root.
pub fn gen_path() -> String {
    format!("{}/{}", test_root(), uuid::Uuid::new_v4())
}

pub fn gen_fixed_bytes(size: usize) -> Vec<u8> {
    let mut content = vec![0; size];
    rand::thread_rng().fill_bytes(&mut content);

    content
}
