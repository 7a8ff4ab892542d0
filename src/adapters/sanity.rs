use crate::domain::model::ImageRef;
use crate::domain::ports::{ConfigProvider, ContentFetch};
use crate::utils::error::{ContentError, Result};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Sanity 風格查詢 API 的 HTTP 客戶端。
/// 每個控制器以注入方式取得，不用模組級單例。
#[derive(Debug, Clone)]
pub struct SanityClient {
    client: Client,
    query_url: Url,
}

impl SanityClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let base = Url::parse(config.api_base())?;
        let query_url = base.join(&format!(
            "v{}/data/query/{}",
            config.api_version(),
            config.dataset()
        ))?;

        Ok(Self {
            client: Client::new(),
            query_url,
        })
    }
}

#[async_trait]
impl ContentFetch for SanityClient {
    async fn fetch(&self, query: &str) -> Result<Vec<serde_json::Value>> {
        let mut url = self.query_url.clone();
        url.query_pairs_mut().append_pair("query", query);

        tracing::debug!("Content query: {}", query);
        let response = self.client.get(url).send().await?;
        tracing::debug!("Content response status: {}", response.status());

        let body: serde_json::Value = response.error_for_status()?.json().await?;

        match body.get("result") {
            Some(serde_json::Value::Array(items)) => Ok(items.clone()),
            // 單一對象包成一筆
            Some(single) if !single.is_null() => Ok(vec![single.clone()]),
            _ => Err(ContentError::ResponseError {
                message: "query response has no result field".to_string(),
            }),
        }
    }
}

/// 資產參照到完整 URL 的純函數映射，無網路呼叫。
/// "image-<id>-<dims>-<ext>" → "{cdn}/images/{project}/{dataset}/<id>-<dims>.<ext>"
pub fn resolve_image_url<C: ConfigProvider>(config: &C, image: &ImageRef) -> Result<String> {
    let reference = image.as_str();
    let body = reference
        .strip_prefix("image-")
        .ok_or_else(|| ContentError::ImageRefError {
            reference: reference.to_string(),
        })?;

    let (file, ext) = body.rsplit_once('-').ok_or_else(|| ContentError::ImageRefError {
        reference: reference.to_string(),
    })?;

    if file.is_empty() || ext.is_empty() {
        return Err(ContentError::ImageRefError {
            reference: reference.to_string(),
        });
    }

    Ok(format!(
        "{}/images/{}/{}/{}.{}",
        config.cdn_base().trim_end_matches('/'),
        config.project_id(),
        config.dataset(),
        file,
        ext
    ))
}
