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

use anyhow::Result;
use webhdfs::blocking::WebhdfsClient;

use webhdfs::raw::get_basename;
use webhdfs::raw::get_parent;

use super::utils::*;

/// Content read back through the blocking client equals what was written.
pub fn test_blocking_create_open(client: WebhdfsClient) -> Result<()> {
    let path = gen_path();
    let content = gen_fixed_bytes(1024);

    client.create(&path, content.clone())?;

    let bs = client.open(&path)?;
    assert!(bs == content, "read content");

    client.remove(&path).expect("remove must succeed");
    Ok(())
}

pub fn test_blocking_mkdir_listdir(client: WebhdfsClient) -> Result<()> {
    let path = gen_path();

    assert!(client.mkdir(&path)?);
    let entries = client.listdir(&get_parent(&path))?;
    assert!(entries.iter().any(|e| e.path_suffix == get_basename(&path)));

    client.remove(&path).expect("remove must succeed");
    Ok(())
}
