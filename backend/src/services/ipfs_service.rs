use crate::models::{IpfsUploadResult, PinnedFile, VideoMetadata};
use crate::services::latency::Latency;
use crate::utils::{now_rfc3339, random_cid, random_thumbnail_cid};
use anyhow::Result;
use log::{info, warn};
use url::Url;

pub const DEFAULT_GATEWAY: &str = "ipfs.io";

const UPLOAD_VIDEO_DELAY_MS: u64 = 2000;
const UPLOAD_THUMBNAIL_DELAY_MS: u64 = 1000;
const PIN_DELAY_MS: u64 = 500;

#[cfg(feature = "pinata")]
const PINATA_UPLOAD_URL: &str = "https://uploads.pinata.cloud/v3/files";

/// Mock content-addressed storage client. With the `pinata` feature and a
/// JWT configured, [`IpfsClient::pin_file`] uploads to Pinata instead.
#[derive(Debug, Clone)]
pub struct IpfsClient {
    gateway: String,
    pinata_jwt: Option<String>,
    latency: Latency,
}

/// Reduces a configured gateway (`ipfs.io`, `https://x.mypinata.cloud/`)
/// to a bare host. Unusable values fall back to the public gateway.
pub fn normalize_gateway(gateway: &str) -> String {
    let trimmed = gateway.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return DEFAULT_GATEWAY.to_string();
    }
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    match Url::parse(&candidate) {
        Ok(url) => match url.host_str() {
            Some(host) => match url.port() {
                Some(port) => format!("{host}:{port}"),
                None => host.to_string(),
            },
            None => DEFAULT_GATEWAY.to_string(),
        },
        Err(e) => {
            warn!("Ignoring invalid IPFS gateway {gateway:?}: {e}");
            DEFAULT_GATEWAY.to_string()
        }
    }
}

impl Default for IpfsClient {
    fn default() -> Self {
        Self::new(DEFAULT_GATEWAY, None, Latency::default())
    }
}

impl IpfsClient {
    pub fn new(gateway: &str, pinata_jwt: Option<String>, latency: Latency) -> Self {
        IpfsClient {
            gateway: normalize_gateway(gateway),
            pinata_jwt: pinata_jwt.filter(|jwt| !jwt.trim().is_empty()),
            latency,
        }
    }

    pub fn gateway(&self) -> &str {
        &self.gateway
    }

    /// True when pins go to Pinata rather than the simulated store.
    pub fn pins_remotely(&self) -> bool {
        cfg!(feature = "pinata") && self.pinata_jwt.is_some()
    }

    pub fn gateway_url(&self, hash: &str) -> String {
        format!("https://{}/ipfs/{}", self.gateway, hash)
    }

    fn result_for(&self, hash: String, size: u64) -> IpfsUploadResult {
        IpfsUploadResult {
            url: self.gateway_url(&hash),
            hash,
            size,
        }
    }

    pub async fn upload_video(
        &self,
        file_name: &str,
        size: u64,
        metadata: &VideoMetadata,
    ) -> IpfsUploadResult {
        info!(
            "Uploading video to IPFS: {file_name} ({size} bytes, title {:?})",
            metadata.title
        );
        self.latency.wait(UPLOAD_VIDEO_DELAY_MS).await;
        let result = self.result_for(random_cid(), size);
        info!("Video stored at {}", result.url);
        result
    }

    pub async fn upload_thumbnail(&self, file_name: &str, size: u64) -> IpfsUploadResult {
        info!("Uploading thumbnail to IPFS: {file_name} ({size} bytes)");
        self.latency.wait(UPLOAD_THUMBNAIL_DELAY_MS).await;
        let result = self.result_for(random_thumbnail_cid(), size);
        info!("Thumbnail stored at {}", result.url);
        result
    }

    pub fn get_video_metadata(&self, hash: &str) -> VideoMetadata {
        info!("Fetching metadata for hash: {hash}");
        VideoMetadata {
            title: "Sample Video".to_string(),
            description: "A sample video stored on IPFS".to_string(),
            category: "education".to_string(),
            tags: vec!["web3".to_string(), "ipfs".to_string()],
            duration: None,
            thumbnail: None,
            creator: "0x1234...5678".to_string(),
            created_at: now_rfc3339(),
        }
    }

    pub async fn pin_content(&self, hash: &str) -> bool {
        info!("Pinning content: {hash}");
        self.latency.wait(PIN_DELAY_MS).await;
        true
    }

    /// Pins a freshly selected file and returns its content id and gateway URL.
    /// `bytes` is only needed when [`IpfsClient::pins_remotely`] is true.
    pub async fn pin_file(
        &self,
        file_name: &str,
        content_type: &str,
        size: u64,
        bytes: Option<Vec<u8>>,
    ) -> Result<PinnedFile> {
        info!("Pinning {file_name} ({content_type}, {size} bytes)");

        let cid = match (&self.pinata_jwt, bytes) {
            #[cfg(feature = "pinata")]
            (Some(jwt), Some(bytes)) if self.pins_remotely() => {
                pinata::upload(jwt, file_name, content_type, bytes).await?
            }
            _ => {
                let metadata = VideoMetadata {
                    title: file_name.to_string(),
                    created_at: now_rfc3339(),
                    ..Default::default()
                };
                self.upload_video(file_name, size, &metadata).await.hash
            }
        };

        let pinned = PinnedFile {
            gateway_url: self.gateway_url(&cid),
            cid,
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            size,
        };
        info!("Pinned {} as {}", pinned.file_name, pinned.cid);
        Ok(pinned)
    }
}

#[cfg(feature = "pinata")]
mod pinata {
    use super::PINATA_UPLOAD_URL;
    use anyhow::{anyhow, Result};
    use log::error;
    use reqwest::multipart::{Form, Part};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct UploadResponse {
        data: UploadedFile,
    }

    #[derive(Deserialize)]
    struct UploadedFile {
        cid: String,
    }

    pub async fn upload(
        jwt: &str,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = Form::new().part("file", part).text("network", "public");

        let response = reqwest::Client::new()
            .post(PINATA_UPLOAD_URL)
            .bearer_auth(jwt)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Pinata rejected upload of {file_name}: {status} {body}");
            return Err(anyhow!("Pinata upload failed with status {status}"));
        }

        let uploaded: UploadResponse = response.json().await?;
        Ok(uploaded.data.cid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> IpfsClient {
        IpfsClient::new(DEFAULT_GATEWAY, None, Latency::none())
    }

    #[test]
    fn gateway_is_reduced_to_host() {
        assert_eq!(normalize_gateway("ipfs.io"), "ipfs.io");
        assert_eq!(
            normalize_gateway("https://demo.mypinata.cloud/"),
            "demo.mypinata.cloud"
        );
        assert_eq!(normalize_gateway("localhost:8081"), "localhost:8081");
        assert_eq!(normalize_gateway("   "), DEFAULT_GATEWAY);
    }

    #[test]
    fn gateway_url_shape() {
        assert_eq!(client().gateway_url("QmAbc"), "https://ipfs.io/ipfs/QmAbc");
    }

    #[tokio::test]
    async fn video_upload_fabricates_cid() {
        let result = client()
            .upload_video("clip.mp4", 1024, &VideoMetadata::default())
            .await;
        assert!(result.hash.starts_with("Qm"));
        assert_eq!(result.size, 1024);
        assert_eq!(result.url, format!("https://ipfs.io/ipfs/{}", result.hash));
    }

    #[tokio::test]
    async fn thumbnail_hash_has_suffix() {
        let result = client().upload_thumbnail("thumb.png", 10).await;
        assert!(result.hash.ends_with("thumb"));
    }

    #[tokio::test]
    async fn pin_without_jwt_is_simulated() {
        let client = client();
        assert!(!client.pins_remotely());
        let pinned = client
            .pin_file("clip.mp4", "video/mp4", 64, None)
            .await
            .unwrap();
        assert_eq!(pinned.size, 64);
        assert_eq!(pinned.cid.len(), 46);
        assert!(pinned.gateway_url.ends_with(&pinned.cid));
        assert!(client.pin_content(&pinned.cid).await);
    }

    #[tokio::test]
    async fn simulated_pin_ignores_supplied_bytes() {
        let pinned = client()
            .pin_file("clip.mp4", "video/mp4", 3, Some(vec![1, 2, 3]))
            .await
            .unwrap();
        assert_eq!(pinned.size, 3);
        assert!(pinned.cid.starts_with("Qm"));
    }

    #[test]
    fn blank_jwt_counts_as_unset() {
        let client = IpfsClient::new("ipfs.io", Some(" ".to_string()), Latency::none());
        assert!(!client.pins_remotely());
    }
}
