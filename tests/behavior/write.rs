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
use webhdfs::ErrorKind;
use webhdfs::OpCreate;
use webhdfs::OpOpen;
use webhdfs::WebhdfsClient;

use super::utils::*;

/// Content read back equals what was written.
pub async fn test_create_open(client: WebhdfsClient) -> Result<()> {
    let path = gen_path();
    let content = gen_fixed_bytes(64 * 1024);

    client.create(&path, content.clone()).await?;

    let bs = client.open(&path).await?;
    assert_eq!(bs.len(), content.len(), "read size");
    assert!(bs == content, "read content");

    client.remove(&path).await.expect("remove must succeed");
    Ok(())
}

/// Overwriting replaces the content.
pub async fn test_create_overwrite(client: WebhdfsClient) -> Result<()> {
    let path = gen_path();

    client.create(&path, "first").await?;
    client
        .create_with(&path, "second", OpCreate::new().with_overwrite(true))
        .await?;

    let bs = client.open(&path).await?;
    assert_eq!(bs.as_ref(), b"second");

    client.remove(&path).await.expect("remove must succeed");
    Ok(())
}

/// Creating an existing file without overwrite fails with AlreadyExists.
pub async fn test_create_existing_without_overwrite(client: WebhdfsClient) -> Result<()> {
    let path = gen_path();

    client.create(&path, "first").await?;
    let err = client
        .create_with(&path, "second", OpCreate::new().with_overwrite(false))
        .await
        .expect_err("create must fail");
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);

    let bs = client.open(&path).await?;
    assert_eq!(bs.as_ref(), b"first");

    client.remove(&path).await.expect("remove must succeed");
    Ok(())
}

/// Appended content follows the existing content.
pub async fn test_append(client: WebhdfsClient) -> Result<()> {
    let path = gen_path();

    client.create(&path, "foo").await?;
    client.append(&path, "bar").await?;

    let bs = client.open(&path).await?;
    assert_eq!(bs.as_ref(), b"foobar");

    client.remove(&path).await.expect("remove must succeed");
    Ok(())
}

/// Reading with offset and length returns that range only.
pub async fn test_open_range(client: WebhdfsClient) -> Result<()> {
    let path = gen_path();
    let content = gen_fixed_bytes(4096);
    client.create(&path, content.clone()).await?;

    let bs = client
        .open_with(&path, OpOpen::new().with_offset(100).with_length(1000))
        .await?;
    assert!(bs == content[100..1100], "read range content");

    client.remove(&path).await.expect("remove must succeed");
    Ok(())
}

/// Reading a missing file returns NotFound.
pub async fn test_open_not_existing(client: WebhdfsClient) -> Result<()> {
    let path = gen_path();

    let err = client.open(&path).await.expect_err("open must fail");
    assert_eq!(err.kind(), ErrorKind::NotFound);
    Ok(())
}

/// Local file survives a trip to hdfs and back.
pub async fn test_copy_local_roundtrip(client: WebhdfsClient) -> Result<()> {
    let path = gen_path();
    let content = gen_fixed_bytes(8 * 1024);

    let dir = tempfile::tempdir()?;
    let src = dir.path().join("src");
    let dst = dir.path().join("dst");
    tokio::fs::write(&src, &content).await?;

    client
        .copy_from_local(&src, &path, OpCreate::new())
        .await?;
    client.copy_to_local(&path, &dst, OpOpen::new()).await?;

    assert!(tokio::fs::read(&dst).await? == content, "copied content");

    client.remove(&path).await.expect("remove must succeed");
    Ok(())
}

/// Copying a missing local file fails before talking to the namenode.
pub async fn test_copy_from_local_not_existing(client: WebhdfsClient) -> Result<()> {
    let path = gen_path();
    let dir = tempfile::tempdir()?;

    let err = client
        .copy_from_local(dir.path().join("nothing"), &path, OpCreate::new())
        .await
        .expect_err("copy must fail");
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = client.status(&path).await.expect_err("nothing is written");
    assert_eq!(err.kind(), ErrorKind::NotFound);
    Ok(())
}
