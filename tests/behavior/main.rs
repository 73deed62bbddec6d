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

/// Generate async test cases running against a live namenode.
///
/// Every case is skipped with a warning when `WEBHDFS_HOST` is unset.
macro_rules! behavior_tests {
    ($name:ident, $group:ident: $($(#[$meta:meta])* $test:ident),* $(,)?) => {
        mod $name {
            $(
                #[tokio::test]
                $(
                    #[$meta]
                )*
                async fn $test() -> anyhow::Result<()> {
                    match $crate::utils::init_client() {
                        Some(client) => $crate::$group::$test(client).await,
                        None => {
                            log::warn!("webhdfs not initiated, ignored");
                            Ok(())
                        }
                    }
                }
            )*
        }
    };
}

/// Generate blocking test cases, each on a dedicated runtime.
macro_rules! behavior_blocking_tests {
    ($name:ident, $group:ident: $($(#[$meta:meta])* $test:ident),* $(,)?) => {
        mod $name {
            $(
                #[test]
                $(
                    #[$meta]
                )*
                fn $test() -> anyhow::Result<()> {
                    let runtime = tokio::runtime::Builder::new_multi_thread()
                        .enable_all()
                        .build()?;
                    match $crate::utils::init_client() {
                        Some(client) => {
                            let client = webhdfs::blocking::WebhdfsClient::with_handle(
                                runtime.handle().clone(),
                                client,
                            );
                            $crate::$group::$test(client)
                        }
                        None => {
                            log::warn!("webhdfs not initiated, ignored");
                            Ok(())
                        }
                    }
                }
            )*
        }
    };
}

mod blocking;
mod dir;
mod meta;
mod utils;
mod write;

behavior_tests!(
    webhdfs_dir,
    dir: test_environ_home,
    test_mkdir_listdir_remove,
    test_mkdir_with_permission,
    test_remove_not_existing,
    test_remove_recursive,
    test_rename,
    test_listdir_not_existing,
);

behavior_tests!(
    webhdfs_write,
    write: test_create_open,
    test_create_overwrite,
    test_create_existing_without_overwrite,
    test_append,
    test_open_range,
    test_open_not_existing,
    test_copy_local_roundtrip,
    test_copy_from_local_not_existing,
);

behavior_tests!(
    webhdfs_meta,
    meta: test_status,
    test_status_dir,
    test_set_replication,
    test_set_replication_negative,
    test_chmod,
    test_get_checksum,
);

behavior_blocking_tests!(
    webhdfs_blocking,
    blocking: test_blocking_create_open,
    test_blocking_mkdir_listdir,
);
