use crate::utils::error::Result;
use async_trait::async_trait;

/// 內容查詢端口：傳入查詢表達式，回傳一批 JSON 記錄。
/// 控制器只讀不寫；失敗以 Err 呈現，沒有結構化錯誤碼。
#[async_trait]
pub trait ContentFetch: Send + Sync {
    async fn fetch(&self, query: &str) -> Result<Vec<serde_json::Value>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn project_id(&self) -> &str;
    fn dataset(&self) -> &str;
    fn api_version(&self) -> &str;
    fn cdn_base(&self) -> &str;
}
