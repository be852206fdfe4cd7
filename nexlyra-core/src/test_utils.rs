//! 测试辅助模块
//!
//! 提供 mock 协作者实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::{ContentSurface, SettingsStore, WindowAction, WindowController};

// ===== MockSettingsStore =====

pub struct MockSettingsStore {
    values: RwLock<HashMap<String, String>>,
    /// 记录所有写入（按顺序）
    writes: RwLock<Vec<(String, String)>>,
    /// 如果 Some，所有访问返回此错误
    fail_with: RwLock<Option<String>>,
}

impl MockSettingsStore {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            writes: RwLock::new(Vec::new()),
            fail_with: RwLock::new(None),
        }
    }

    /// Seed a value without recording a write.
    pub async fn seed(&self, key: &str, value: &str) {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
    }

    /// All writes made through the trait, in order.
    pub async fn writes(&self) -> Vec<(String, String)> {
        self.writes.read().await.clone()
    }

    /// Make every subsequent access fail with a storage error.
    pub async fn fail_with(&self, msg: &str) {
        *self.fail_with.write().await = Some(msg.to_string());
    }
}

#[async_trait]
impl SettingsStore for MockSettingsStore {
    async fn get(&self, key: &str) -> CoreResult<Option<String>> {
        if let Some(ref msg) = *self.fail_with.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        if let Some(ref msg) = *self.fail_with.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        self.writes
            .write()
            .await
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}

// ===== MockContentSurface =====

pub struct MockContentSurface {
    loads: RwLock<Vec<String>>,
    clear_count: RwLock<usize>,
    back_count: RwLock<usize>,
    /// 如果 Some，下一次 load 返回 NavigationAborted
    fail_next_load: RwLock<Option<String>>,
}

impl MockContentSurface {
    pub fn new() -> Self {
        Self {
            loads: RwLock::new(Vec::new()),
            clear_count: RwLock::new(0),
            back_count: RwLock::new(0),
            fail_next_load: RwLock::new(None),
        }
    }

    /// Addresses passed to `load`, in order (including aborted loads).
    pub async fn loads(&self) -> Vec<String> {
        self.loads.read().await.clone()
    }

    pub async fn clear_count(&self) -> usize {
        *self.clear_count.read().await
    }

    pub async fn back_count(&self) -> usize {
        *self.back_count.read().await
    }

    /// Make the next `load` report an aborted navigation.
    pub async fn fail_next_load(&self, msg: &str) {
        *self.fail_next_load.write().await = Some(msg.to_string());
    }
}

#[async_trait]
impl ContentSurface for MockContentSurface {
    async fn load(&self, address: &str) -> CoreResult<()> {
        self.loads.write().await.push(address.to_string());
        if let Some(msg) = self.fail_next_load.write().await.take() {
            return Err(CoreError::NavigationAborted(msg));
        }
        Ok(())
    }

    async fn clear(&self) -> CoreResult<()> {
        *self.clear_count.write().await += 1;
        Ok(())
    }

    async fn back(&self) -> CoreResult<()> {
        *self.back_count.write().await += 1;
        Ok(())
    }
}

// ===== MockWindowController =====

pub struct MockWindowController {
    actions: RwLock<Vec<WindowAction>>,
}

impl MockWindowController {
    pub fn new() -> Self {
        Self {
            actions: RwLock::new(Vec::new()),
        }
    }

    /// Actions applied through the trait, in order.
    pub async fn actions(&self) -> Vec<WindowAction> {
        self.actions.read().await.clone()
    }
}

#[async_trait]
impl WindowController for MockWindowController {
    async fn apply(&self, action: WindowAction) {
        self.actions.write().await.push(action);
    }
}

// ===== 工厂方法 =====

/// A `ServiceContext` over mocks, with handles to each mock kept out for
/// assertions.
pub struct TestContext {
    pub ctx: Arc<ServiceContext>,
    pub store: Arc<MockSettingsStore>,
    pub surface: Arc<MockContentSurface>,
    pub controller: Arc<MockWindowController>,
}

/// 创建测试用 `ServiceContext`
pub fn create_test_context() -> TestContext {
    let store = Arc::new(MockSettingsStore::new());
    let surface = Arc::new(MockContentSurface::new());
    let controller = Arc::new(MockWindowController::new());

    let ctx = Arc::new(ServiceContext::new(
        store.clone(),
        surface.clone(),
        controller.clone(),
    ));

    TestContext {
        ctx,
        store,
        surface,
        controller,
    }
}
