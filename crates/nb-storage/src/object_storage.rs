//! Bucket-backed object store client for profile pictures.
//!
//! Objects live under `{base_url}/{bucket}/{key}`. Every call forwards the
//! caller's provider id token as a bearer credential, so access control
//! stays with the identity provider.

use crate::{Result as StorageResult, StorageError};

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use reqwest::{Client as ReqwestClient, StatusCode};

/// Object key for a user's profile picture. One picture per user,
/// overwritten on every upload.
pub fn profile_pic_key(user_id: i64) -> String {
    format!("images/profile_pic_{user_id}.jpg")
}

#[derive(Debug, Clone)]
pub struct ObjectStorage {
    base_url: String,
    bucket: String,
    http: ReqwestClient,
}

impl ObjectStorage {
    pub fn new(base_url: &str, bucket: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bucket: bucket.to_string(),
            http: ReqwestClient::new(),
        }
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.bucket, key)
    }

    /// PUT an object, replacing any previous content under the key.
    pub async fn upload(&self, key: &str, data: Vec<u8>, id_token: &str) -> StorageResult<()> {
        debug!("Storage upload: {} ({} bytes)", key, data.len());

        let response = self
            .http
            .put(self.object_url(key))
            .header("Authorization", format!("Bearer {id_token}"))
            .header("Content-Type", "image/jpeg")
            .body(data)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StorageError::UnexpectedStatus {
                status: status.as_u16(),
                key: key.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// GET an object's bytes. A missing key is a typed NotFound.
    pub async fn download(&self, key: &str, id_token: &str) -> StorageResult<Vec<u8>> {
        debug!("Storage download: {key}");

        let response = self
            .http
            .get(self.object_url(key))
            .header("Authorization", format!("Bearer {id_token}"))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StorageError::NotFound {
                key: key.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if !status.is_success() {
            return Err(StorageError::UnexpectedStatus {
                status: status.as_u16(),
                key: key.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
