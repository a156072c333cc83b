use crate::utils::error::Result;

/// 讀取前端靜態資源 (landing page、/static 下的檔案)
pub trait AssetStore: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn index_file(&self) -> &str;
    fn static_dir(&self) -> &str;
}
