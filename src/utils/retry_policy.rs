// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// 重试策略配置
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// 最大尝试次数（包含第一次）
    pub max_attempts: u32,
    /// 初始退避时间
    pub initial_backoff: Duration,
    /// 最大退避时间
    pub max_backoff: Duration,
    /// 退避乘数
    pub backoff_multiplier: f64,
    /// 抖动因子 (0.0-1.0)
    pub jitter_factor: f64,
    /// 是否启用抖动
    pub enable_jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::backend()
    }
}

impl RetryPolicy {
    /// 后端分析调用的重试策略：3 次尝试，1s 起步，翻倍，上限 5s，无抖动
    pub fn backend() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(5),
            backoff_multiplier: 2.0,
            jitter_factor: 0.1,
            enable_jitter: false,
        }
    }

    /// 计算第 `attempt` 次失败之后的退避时间（attempt 从 1 开始）
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(i32::MAX as u32) as i32;
        let backoff_secs = self.initial_backoff.as_secs_f64() * self.backoff_multiplier.powi(exponent);

        // 限制最大退避时间
        let capped_backoff = backoff_secs.min(self.max_backoff.as_secs_f64());

        let final_backoff = if self.enable_jitter {
            let jitter_range = capped_backoff * self.jitter_factor;
            if jitter_range > 0.0 {
                let jitter = rand::random_range(-jitter_range..jitter_range);
                (capped_backoff + jitter).max(0.0)
            } else {
                capped_backoff
            }
        } else {
            capped_backoff
        };

        Duration::from_secs_f64(final_backoff)
    }

    /// 第 `attempt` 次尝试失败后是否还有剩余次数
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

/// 错误分类器给出的重试决策
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// 暂时性错误，可以重试
    Retry,
    /// 永久性错误，立即停止
    Stop,
}

/// 可被重试循环分类的错误
pub trait Retryable {
    fn retry_decision(&self) -> RetryDecision;
}

/// 一次重试调用的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryState {
    /// 正在进行第 `attempt` 次尝试
    Attempting { attempt: u32 },
    /// 第 `attempt` 次失败后等待 `delay`
    Backoff { attempt: u32, delay: Duration },
    /// 遇到永久性错误而停止
    PermanentFailure { attempt: u32 },
    /// 所有尝试均已用完
    Exhausted { attempts: u32 },
    /// 第 `attempt` 次尝试成功
    Succeeded { attempt: u32 },
}

impl RetryState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RetryState::PermanentFailure { .. }
                | RetryState::Exhausted { .. }
                | RetryState::Succeeded { .. }
        )
    }
}

/// 重试状态机
///
/// 只负责状态迁移，不执行任何 I/O，可以独立测试
#[derive(Debug, Clone)]
pub struct RetryMachine {
    policy: RetryPolicy,
    state: RetryState,
}

impl RetryMachine {
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            state: RetryState::Attempting { attempt: 1 },
        }
    }

    pub fn state(&self) -> RetryState {
        self.state
    }

    /// 当前尝试序号；终止状态下返回最后一次尝试的序号
    pub fn attempt(&self) -> u32 {
        match self.state {
            RetryState::Attempting { attempt }
            | RetryState::Backoff { attempt, .. }
            | RetryState::PermanentFailure { attempt }
            | RetryState::Succeeded { attempt } => attempt,
            RetryState::Exhausted { attempts } => attempts,
        }
    }

    pub fn on_success(&mut self) -> RetryState {
        if let RetryState::Attempting { attempt } = self.state {
            self.state = RetryState::Succeeded { attempt };
        }
        self.state
    }

    pub fn on_failure(&mut self, decision: RetryDecision) -> RetryState {
        if let RetryState::Attempting { attempt } = self.state {
            self.state = match decision {
                RetryDecision::Stop => RetryState::PermanentFailure { attempt },
                RetryDecision::Retry if self.policy.should_retry(attempt) => RetryState::Backoff {
                    attempt,
                    delay: self.policy.calculate_backoff(attempt),
                },
                RetryDecision::Retry => RetryState::Exhausted { attempts: attempt },
            };
        }
        self.state
    }

    pub fn on_backoff_elapsed(&mut self) -> RetryState {
        if let RetryState::Backoff { attempt, .. } = self.state {
            self.state = RetryState::Attempting {
                attempt: attempt + 1,
            };
        }
        self.state
    }
}

/// 一次重试调用的执行轨迹
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryTrace {
    /// 实际执行的尝试次数
    pub attempts: u32,
    /// 每次退避实际等待的时长
    pub delays: Vec<Duration>,
    /// 终止状态
    pub final_state: RetryState,
}

/// 带轨迹的重试结果
#[derive(Debug)]
pub struct RetryOutcome<T, E> {
    pub result: Result<T, E>,
    pub trace: RetryTrace,
}

/// 按策略执行异步操作，直到成功、遇到永久错误或次数耗尽
///
/// `operation` 接收当前尝试序号（从 1 开始）。退避等待使用非阻塞的
/// `tokio::time::sleep`，不会被单次请求的超时取消。耗尽后返回最后一次的错误。
pub async fn run_with_retry<T, E, F, Fut>(policy: &RetryPolicy, mut operation: F) -> RetryOutcome<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable + Display,
{
    let mut machine = RetryMachine::new(policy.clone());
    let mut delays = Vec::new();

    loop {
        let attempt = machine.attempt();
        debug!("Attempt {}/{} starting", attempt, policy.max_attempts);

        let error = match operation(attempt).await {
            Ok(value) => {
                let final_state = machine.on_success();
                return RetryOutcome {
                    result: Ok(value),
                    trace: RetryTrace {
                        attempts: attempt,
                        delays,
                        final_state,
                    },
                };
            }
            Err(error) => error,
        };

        warn!("Attempt {}/{} failed: {}", attempt, policy.max_attempts, error);

        match machine.on_failure(error.retry_decision()) {
            RetryState::Backoff { delay, .. } => {
                debug!("Waiting {:?} before retry", delay);
                delays.push(delay);
                tokio::time::sleep(delay).await;
                machine.on_backoff_elapsed();
            }
            final_state => {
                if let RetryState::PermanentFailure { .. } = final_state {
                    warn!("Not retrying due to permanent error");
                }
                return RetryOutcome {
                    result: Err(error),
                    trace: RetryTrace {
                        attempts: attempt,
                        delays,
                        final_state,
                    },
                };
            }
        }
    }
}
