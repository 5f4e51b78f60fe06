//! 后台加载任务
//!
//! 在 tokio 运行时中读取国家集合，结果通过通道交给主循环。
//! 主循环每轮 `try_recv`，不会阻塞渲染。

use std::sync::Arc;

use countries_core::{CoreResult, CountryRecord, CountryRepository};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// 一次加载的结果
pub type LoadResult = CoreResult<Vec<CountryRecord>>;

/// 国家集合加载器
pub struct CountryLoader {
    repository: Arc<dyn CountryRepository>,
    handle: Handle,
    tx: UnboundedSender<LoadResult>,
}

impl CountryLoader {
    /// 创建加载器，返回接收端
    pub fn new(
        repository: Arc<dyn CountryRepository>,
        handle: Handle,
    ) -> (Self, UnboundedReceiver<LoadResult>) {
        let (tx, rx) = unbounded_channel();
        (
            Self {
                repository,
                handle,
                tx,
            },
            rx,
        )
    }

    /// 启动一次加载
    pub fn spawn_load(&self) {
        let repository = Arc::clone(&self.repository);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = repository.find_all().await;
            if let Err(e) = &result {
                if e.is_expected() {
                    log::warn!("Country collection load failed: {e}");
                } else {
                    log::error!("Country collection load failed: {e}");
                }
            }
            // 接收端已关闭说明应用正在退出
            let _ = tx.send(result);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use countries_core::CoreError;

    struct FixedRepository(Vec<CountryRecord>);

    #[async_trait]
    impl CountryRepository for FixedRepository {
        async fn find_all(&self) -> CoreResult<Vec<CountryRecord>> {
            Ok(self.0.clone())
        }
    }

    struct FailingRepository;

    #[async_trait]
    impl CountryRepository for FailingRepository {
        async fn find_all(&self) -> CoreResult<Vec<CountryRecord>> {
            Err(CoreError::StorageError("disk gone".to_string()))
        }
    }

    #[tokio::test]
    async fn delivers_loaded_collection() {
        let repo = Arc::new(FixedRepository(vec![CountryRecord::named("Peru")]));
        let (loader, mut rx) = CountryLoader::new(repo, Handle::current());
        loader.spawn_load();

        let loaded = rx.recv().await.unwrap().unwrap();
        assert_eq!(loaded[0].name, "Peru");
    }

    #[tokio::test]
    async fn delivers_errors() {
        let (loader, mut rx) = CountryLoader::new(Arc::new(FailingRepository), Handle::current());
        loader.spawn_load();

        assert!(rx.recv().await.unwrap().is_err());
    }
}
