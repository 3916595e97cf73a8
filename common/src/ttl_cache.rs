//! TTL 캐시
//!
//! 키 → (값, 저장 시각) 맵. 저장 후 TTL이 지나면 만료로 보고 다시 가져온다.
//! 수동 무효화는 없다. 시각은 호출자가 넘겨준다 (테스트에서 고정 가능).

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// 저장 시각이 붙은 값
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stamped<V> {
    pub value: V,
    pub stored_at: DateTime<Utc>,
}

impl<V> Stamped<V> {
    /// `0 <= now - stored_at < ttl` 이면 신선 (미래 시각에 저장된 값은 만료로 본다)
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        let age = now.signed_duration_since(self.stored_at);
        Duration::zero() <= age && age < ttl
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtlCache<K: Eq + Hash, V> {
    ttl_seconds: i64,
    entries: HashMap<K, Stamped<V>>,
}

impl<K: Eq + Hash, V> TtlCache<K, V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl_seconds: ttl.num_seconds(),
            entries: HashMap::new(),
        }
    }

    /// 파일에서 읽어온 캐시에 현재 TTL을 적용
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl_seconds = ttl.num_seconds();
        self
    }

    pub fn ttl(&self) -> Duration {
        Duration::seconds(self.ttl_seconds)
    }

    /// 신선한 값만 반환 (만료됐으면 `None`)
    pub fn get_fresh(&self, key: &K, now: DateTime<Utc>) -> Option<&V> {
        let ttl = self.ttl();
        self.entries
            .get(key)
            .filter(|entry| entry.is_fresh(now, ttl))
            .map(|entry| &entry.value)
    }

    /// 값 저장. 만료된 다른 항목은 이때 정리한다.
    pub fn insert(&mut self, key: K, value: V, now: DateTime<Utc>) {
        self.prune(now);
        self.entries.insert(key, Stamped { value, stored_at: now });
    }

    /// 만료 항목 제거
    pub fn prune(&mut self, now: DateTime<Utc>) {
        let ttl = self.ttl();
        self.entries.retain(|_, entry| entry.is_fresh(now, ttl));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
