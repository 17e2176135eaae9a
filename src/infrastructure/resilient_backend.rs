// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{counter, histogram};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use crate::infrastructure::backend_client::{AnalysisBackend, BackendAnalysis, BackendError};
use crate::infrastructure::metrics::{BACKEND_ATTEMPTS_TOTAL, BACKEND_DURATION_SECONDS};
use crate::utils::retry_policy::{run_with_retry, RetryOutcome, RetryPolicy};

/// 带重试的后端调用
///
/// 包装任意 [`AnalysisBackend`]，按 [`RetryPolicy`] 重试可恢复的失败。
/// 返回值附带重试轨迹，调用方据此得知尝试次数和退避间隔。
#[derive(Clone)]
pub struct ResilientBackend {
    inner: Arc<dyn AnalysisBackend>,
    policy: RetryPolicy,
}

impl ResilientBackend {
    pub fn new(inner: Arc<dyn AnalysisBackend>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub async fn call(&self, text: &str) -> RetryOutcome<BackendAnalysis, BackendError> {
        let started = Instant::now();
        let inner = &self.inner;

        let outcome = run_with_retry(&self.policy, |attempt| async move {
            counter!(BACKEND_ATTEMPTS_TOTAL).increment(1);
            info!("Backend attempt {}", attempt);
            inner.analyze(text).await
        })
        .await;

        histogram!(BACKEND_DURATION_SECONDS).record(started.elapsed().as_secs_f64());

        match &outcome.result {
            Ok(_) => info!(
                "Backend call succeeded after {} attempt(s)",
                outcome.trace.attempts
            ),
            Err(e) => warn!(
                "Backend call failed after {} attempt(s): {}",
                outcome.trace.attempts, e
            ),
        }

        outcome
    }
}
