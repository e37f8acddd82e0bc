//! Operator session and backend connection bookkeeping
//!
//! A `TerminalSession` owns the auth token for one signed-in operator and
//! tracks the realtime connection's reconnect schedule. Nothing here does
//! I/O; callers feed in connection events and act on the returned delays.

use crate::config::AppConfig;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::time::Duration;
use thiserror::Error;

/// Disconnect reason reported when the server closes the connection
pub const SERVER_DISCONNECT: &str = "io server disconnect";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Authentication token is empty")]
    EmptyToken,

    #[error("Session has ended")]
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    Connected,
    #[default]
    Disconnected,
}

/// Exponential backoff for realtime reconnects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectPolicy {
    pub base_delay: Duration,
    pub max_attempts: u32,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            base_delay: Duration::from_millis(1000),
            max_attempts: 5,
        }
    }
}

impl ReconnectPolicy {
    pub fn new(base_delay: Duration, max_attempts: u32) -> Self {
        Self {
            base_delay,
            max_attempts,
        }
    }

    /// Delay before the given 1-based attempt, `None` past the limit
    pub fn delay_for(&self, attempt: u32) -> Option<Duration> {
        if attempt == 0 || attempt > self.max_attempts {
            return None;
        }
        let factor = 2u32.checked_pow(attempt - 1)?;
        self.base_delay.checked_mul(factor)
    }
}

/// Signed-in operator session
#[derive(Debug)]
pub struct TerminalSession {
    token: Option<String>,
    started_at: DateTime<Utc>,
    timeout: ChronoDuration,
    socket_url: String,
    state: ConnectionState,
    policy: ReconnectPolicy,
    reconnect_attempts: u32,
}

impl TerminalSession {
    /// Open a session starting now
    pub fn start(config: &AppConfig, token: impl Into<String>) -> Result<Self, SessionError> {
        Self::start_at(config, token, Utc::now())
    }

    /// Open a session with an explicit start time
    pub fn start_at(
        config: &AppConfig,
        token: impl Into<String>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(SessionError::EmptyToken);
        }

        let timeout = i64::try_from(config.session_timeout)
            .map(ChronoDuration::seconds)
            .unwrap_or(ChronoDuration::MAX);

        tracing::info!(
            socket_url = %config.backend_socket_url,
            timeout_secs = config.session_timeout,
            "terminal session started"
        );

        Ok(Self {
            token: Some(token),
            started_at,
            timeout,
            socket_url: config.backend_socket_url.clone(),
            state: ConnectionState::Disconnected,
            policy: ReconnectPolicy::default(),
            reconnect_attempts: 0,
        })
    }

    pub fn with_reconnect_policy(mut self, policy: ReconnectPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Drop the token and mark the connection closed
    pub fn end(&mut self) {
        if self.token.take().is_some() {
            tracing::info!("terminal session ended");
        }
        self.state = ConnectionState::Disconnected;
        self.reconnect_attempts = 0;
    }

    pub fn is_active(&self) -> bool {
        self.token.is_some()
    }

    /// `Bearer <token>` for backend requests
    pub fn authorization_header(&self) -> Result<String, SessionError> {
        self.token
            .as_ref()
            .map(|token| format!("Bearer {}", token))
            .ok_or(SessionError::Ended)
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.started_at
            .checked_add_signed(self.timeout)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }

    pub fn socket_url(&self) -> &str {
        &self.socket_url
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.state
    }

    pub fn reconnect_attempts(&self) -> u32 {
        self.reconnect_attempts
    }

    pub fn on_connected(&mut self) {
        self.state = ConnectionState::Connected;
        self.reconnect_attempts = 0;
        tracing::info!(url = %self.socket_url, "connected to realtime server");
    }

    /// Returns the delay before the next reconnect, if one should happen
    pub fn on_disconnected(&mut self, reason: &str) -> Option<Duration> {
        self.state = ConnectionState::Disconnected;
        tracing::warn!(reason, "disconnected from realtime server");

        if reason == SERVER_DISCONNECT {
            self.schedule_reconnect()
        } else {
            None
        }
    }

    pub fn on_connect_error(&mut self, error: &str) -> Option<Duration> {
        self.state = ConnectionState::Disconnected;
        tracing::warn!(error, "realtime connection error");
        self.schedule_reconnect()
    }

    fn schedule_reconnect(&mut self) -> Option<Duration> {
        if !self.is_active() {
            return None;
        }

        let Some(delay) = self.policy.delay_for(self.reconnect_attempts + 1) else {
            tracing::error!(
                attempts = self.reconnect_attempts,
                "max reconnection attempts reached"
            );
            return None;
        };

        self.reconnect_attempts += 1;
        tracing::info!(
            attempt = self.reconnect_attempts,
            max = self.policy.max_attempts,
            delay_ms = delay.as_millis() as u64,
            "scheduling reconnect"
        );
        Some(delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn started() -> TerminalSession {
        let at = Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap();
        TerminalSession::start_at(&AppConfig::testing(), "abc123", at).unwrap()
    }

    #[test]
    fn test_policy_delays() {
        let policy = ReconnectPolicy::default();
        let delays: Vec<_> = (1..=5)
            .map(|n| policy.delay_for(n).unwrap().as_millis())
            .collect();
        assert_eq!(delays, vec![1000, 2000, 4000, 8000, 16000]);
        assert_eq!(policy.delay_for(0), None);
        assert_eq!(policy.delay_for(6), None);
    }

    #[test]
    fn test_authorization_header() {
        let mut session = started();
        assert_eq!(session.authorization_header().unwrap(), "Bearer abc123");

        session.end();
        assert!(!session.is_active());
        assert_eq!(session.authorization_header(), Err(SessionError::Ended));
    }

    #[test]
    fn test_empty_token_rejected() {
        let result = TerminalSession::start(&AppConfig::testing(), "  ");
        assert_eq!(result.unwrap_err(), SessionError::EmptyToken);
    }

    #[test]
    fn test_expiry() {
        let session = started();
        let start = session.started_at();
        assert!(!session.is_expired(start + ChronoDuration::seconds(3599)));
        assert!(session.is_expired(start + ChronoDuration::seconds(3600)));
    }

    #[test]
    fn test_client_disconnect_does_not_reconnect() {
        let mut session = started();
        session.on_connected();
        assert_eq!(session.connection_state(), ConnectionState::Connected);

        assert_eq!(session.on_disconnected("transport close"), None);
        assert_eq!(session.connection_state(), ConnectionState::Disconnected);
        assert_eq!(session.reconnect_attempts(), 0);
    }

    #[test]
    fn test_reconnect_backoff_until_exhausted() {
        let mut session = started();

        assert_eq!(
            session.on_disconnected(SERVER_DISCONNECT),
            Some(Duration::from_millis(1000))
        );
        assert_eq!(
            session.on_connect_error("timeout"),
            Some(Duration::from_millis(2000))
        );
        for _ in 0..3 {
            assert!(session.on_connect_error("timeout").is_some());
        }
        assert_eq!(session.reconnect_attempts(), 5);
        assert_eq!(session.on_connect_error("timeout"), None);

        session.on_connected();
        assert_eq!(session.reconnect_attempts(), 0);
        assert_eq!(
            session.on_connect_error("timeout"),
            Some(Duration::from_millis(1000))
        );
    }

    #[test]
    fn test_no_reconnect_after_end() {
        let mut session = started();
        session.end();
        assert_eq!(session.on_connect_error("refused"), None);
    }
}
