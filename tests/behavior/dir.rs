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
use webhdfs::OpDelete;
use webhdfs::OpMkdir;
use webhdfs::WebhdfsClient;

use webhdfs::raw::get_basename;
use webhdfs::raw::get_parent;

use super::utils::*;

/// Home directory should be an absolute path.
pub async fn test_environ_home(client: WebhdfsClient) -> Result<()> {
    let home = client.environ_home().await?;

    assert!(home.starts_with('/'), "home {home} must be absolute");
    Ok(())
}

/// Created directory shows up in its parent and is gone after remove.
pub async fn test_mkdir_listdir_remove(client: WebhdfsClient) -> Result<()> {
    let path = gen_path();

    assert!(client.mkdir(&path).await?);

    let entries = client.listdir(&get_parent(&path)).await?;
    assert!(entries.iter().any(|e| e.path_suffix == get_basename(&path)));

    assert!(client.remove(&path).await?);

    let entries = client.listdir(&get_parent(&path)).await?;
    assert!(!entries.iter().any(|e| e.path_suffix == get_basename(&path)));
    Ok(())
}

/// Directory created with permission reports that permission.
pub async fn test_mkdir_with_permission(client: WebhdfsClient) -> Result<()> {
    let path = gen_path();

    client
        .mkdir_with(&path, OpMkdir::new().with_permission("700"))
        .await?;

    let status = client.status(&path).await?;
    assert_eq!(status.permission, "700");

    client.remove(&path).await.expect("remove must succeed");
    Ok(())
}

/// Removing a path that doesn't exist returns false.
pub async fn test_remove_not_existing(client: WebhdfsClient) -> Result<()> {
    let path = gen_path();

    assert!(!client.remove(&path).await?);
    Ok(())
}

/// Non-empty directory can be removed recursively.
pub async fn test_remove_recursive(client: WebhdfsClient) -> Result<()> {
    let path = gen_path();
    client.mkdir(&format!("{path}/a/b")).await?;
    client.create(&format!("{path}/a/file"), "data").await?;

    assert!(
        client
            .remove_with(&path, OpDelete::new().with_recursive(true))
            .await?
    );

    let err = client.status(&path).await.expect_err("path must be gone");
    assert_eq!(err.kind(), webhdfs::ErrorKind::NotFound);
    Ok(())
}

/// Renamed file shows up under its new name only.
pub async fn test_rename(client: WebhdfsClient) -> Result<()> {
    let src = gen_path();
    let dst = gen_path();
    client.create(&src, "rename me").await?;

    assert!(client.rename(&src, &dst).await?);

    let entries = client.listdir(&get_parent(&dst)).await?;
    assert!(entries.iter().any(|e| e.path_suffix == get_basename(&dst)));
    assert!(!entries.iter().any(|e| e.path_suffix == get_basename(&src)));

    client.remove(&dst).await.expect("remove must succeed");
    Ok(())
}

/// Listing a missing directory returns NotFound.
pub async fn test_listdir_not_existing(client: WebhdfsClient) -> Result<()> {
    let path = gen_path();

    let err = client.listdir(&path).await.expect_err("listing must fail");
    assert_eq!(err.kind(), webhdfs::ErrorKind::NotFound);
    assert_eq!(err.hop(), Some(webhdfs::Hop::Namenode));
    Ok(())
}
