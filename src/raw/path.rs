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

/// Make sure all hdfs paths are sent in the same absolute form.
///
/// # Normalize Rules
///
/// - All whitespace will be trimmed: ` /abc/def ` => `/abc/def`
/// - Leading `/` will be added if missing: `abc` => `/abc`
/// - Internal // will be replaced by /: `/abc///def` => `/abc/def`
/// - Trailing / will be trimmed: `/abc/` => `/abc`
/// - Empty path will be `/`: `` => `/`
pub fn normalize_path(path: &str) -> String {
    let p = path
        .trim()
        .split('/')
        .filter(|v| !v.is_empty())
        .collect::<Vec<&str>>()
        .join("/");

    format!("/{p}")
}

/// Get the base name of given path.
///
/// The base name is what the namenode reports as `pathSuffix` when listing
/// the parent directory.
pub fn get_basename(path: &str) -> &str {
    let path = path.trim_end_matches('/');

    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Get the parent directory of given path.
pub fn get_parent(path: &str) -> String {
    let path = normalize_path(path);

    match path.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => path[..idx].to_string(),
    }
}
