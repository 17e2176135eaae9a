// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;

use crate::domain::models::session::AnalysisSession;

/// 会话存储
///
/// 以会话标识区分调用方。处理请求时先取出会话快照，用例结束后整体写回，
/// 同一会话的并发请求以最后写入者为准。
/// 会话数量有上限，超出时淘汰最久未访问的会话。
#[derive(Debug)]
pub struct SessionStore {
    sessions: Mutex<LruCache<String, AnalysisSession>>,
}

impl SessionStore {
    /// `capacity` 为 0 时按 1 处理
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            sessions: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// 取出会话快照，不存在时返回空会话
    pub fn load(&self, session_id: &str) -> AnalysisSession {
        self.sessions
            .lock()
            .get(session_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn save(&self, session_id: &str, session: AnalysisSession) {
        self.sessions.lock().put(session_id.to_string(), session);
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}
