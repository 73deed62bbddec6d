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
use webhdfs::FileType;
use webhdfs::WebhdfsClient;

use webhdfs::raw::get_basename;
use webhdfs::raw::get_parent;

use super::utils::*;

/// Status of a file reports its type and length.
pub async fn test_status(client: WebhdfsClient) -> Result<()> {
    let path = gen_path();
    client.create(&path, "Hello, World!").await?;

    let status = client.status(&path).await?;
    assert_eq!(status.ty, FileType::File);
    assert_eq!(status.length, 13);
    assert_eq!(status.path_suffix, "");

    client.remove(&path).await.expect("remove must succeed");
    Ok(())
}

/// Status of a directory reports a directory.
pub async fn test_status_dir(client: WebhdfsClient) -> Result<()> {
    let path = gen_path();
    client.mkdir(&path).await?;

    let status = client.status(&path).await?;
    assert_eq!(status.ty, FileType::Directory);
    assert_eq!(status.length, 0);

    client.remove(&path).await.expect("remove must succeed");
    Ok(())
}

/// New replication factor is reported by status.
pub async fn test_set_replication(client: WebhdfsClient) -> Result<()> {
    let path = gen_path();
    client.create(&path, "replicate me").await?;

    assert!(client.set_replication(&path, 2).await?);

    let status = client.status(&path).await?;
    assert_eq!(status.replication, 2);

    client.remove(&path).await.expect("remove must succeed");
    Ok(())
}

/// Negative replication factor is rejected by the namenode.
pub async fn test_set_replication_negative(client: WebhdfsClient) -> Result<()> {
    let path = gen_path();
    client.create(&path, "replicate me").await?;

    let err = client
        .set_replication(&path, -1)
        .await
        .expect_err("negative replication must fail");
    assert!(err.http_status().is_some());

    client.remove(&path).await.expect("remove must succeed");
    Ok(())
}

/// New permission shows up in the parent listing.
pub async fn test_chmod(client: WebhdfsClient) -> Result<()> {
    let path = gen_path();
    client.create(&path, "chmod me").await?;

    client.chmod(&path, "600").await?;

    let entries = client.listdir(&get_parent(&path)).await?;
    let entry = entries
        .iter()
        .find(|e| e.path_suffix == get_basename(&path))
        .expect("entry must be listed");
    assert_eq!(entry.permission, "600");

    client.remove(&path).await.expect("remove must succeed");
    Ok(())
}

/// Checksum of a file carries algorithm and bytes.
pub async fn test_get_checksum(client: WebhdfsClient) -> Result<()> {
    let path = gen_path();
    client.create(&path, gen_fixed_bytes(1024)).await?;

    let checksum = client.get_checksum(&path).await?;
    assert!(!checksum.algorithm.is_empty());
    assert!(!checksum.bytes.is_empty());
    assert_eq!(checksum.length as usize * 2, checksum.bytes.len());

    client.remove(&path).await.expect("remove must succeed");
    Ok(())
}
