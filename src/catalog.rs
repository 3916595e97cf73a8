//! 모델 목록 캐시
//!
//! API 키별로 생성 가능 모델 목록을 1시간 동안 파일에 캐시한다.
//! 키는 SHA-256 해시로만 저장한다. 조회 실패는 캐시하지 않는다.

use crate::error::Result;
use crate::gemini::GeminiClient;
use chrono::{DateTime, Duration, Utc};
use major_compass_common::{generation_capable_models, TtlCache};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const CACHE_FILE_NAME: &str = "models-cache.json";

/// 캐시 유효 시간
pub fn catalog_ttl() -> Duration {
    Duration::hours(1)
}

/// 캐시 파일 구조
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogCacheFile {
    /// 버전 (호환성 확인용)
    version: u32,
    /// API 키 해시 → 모델 ID 목록
    models: TtlCache<String, Vec<String>>,
}

impl CatalogCacheFile {
    const CURRENT_VERSION: u32 = 1;

    pub fn cache_path(dir: &Path) -> PathBuf {
        dir.join(CACHE_FILE_NAME)
    }

    /// 캐시 파일 읽기 (없거나 깨졌으면 빈 캐시)
    pub fn load(dir: &Path) -> Self {
        let cache_path = Self::cache_path(dir);
        if !cache_path.exists() {
            return Self::default();
        }

        let file = match File::open(&cache_path) {
            Ok(f) => f,
            Err(_) => return Self::default(),
        };

        match serde_json::from_reader::<_, CatalogCacheFile>(BufReader::new(file)) {
            Ok(cache) if cache.version == Self::CURRENT_VERSION => Self {
                version: cache.version,
                models: cache.models.with_ttl(catalog_ttl()),
            },
            Ok(_) => {
                warn!("모델 캐시 버전 불일치, 새로 만듭니다");
                Self::default()
            }
            Err(e) => {
                warn!("모델 캐시 읽기 실패: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;
        let file = File::create(Self::cache_path(dir))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    pub fn get(&self, api_key: &str, now: DateTime<Utc>) -> Option<&Vec<String>> {
        self.models.get_fresh(&key_digest(api_key), now)
    }

    pub fn insert(&mut self, api_key: &str, models: Vec<String>, now: DateTime<Utc>) {
        self.models.insert(key_digest(api_key), models, now);
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl Default for CatalogCacheFile {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            models: TtlCache::new(catalog_ttl()),
        }
    }
}

/// API 키의 SHA-256 해시 (hex)
pub fn key_digest(api_key: &str) -> String {
    hex::encode(Sha256::digest(api_key.as_bytes()))
}

/// 모델 목록 조회 결과
///
/// 실패해도 화면은 계속 진행한다 (빈 목록 + 오류 메시지).
#[derive(Debug, Clone, Default)]
pub struct CatalogLookup {
    pub models: Vec<String>,
    pub error: Option<String>,
    pub from_cache: bool,
}

/// 캐시 경유 모델 목록 조회
pub async fn lookup_models(client: &GeminiClient, cache_dir: &Path) -> CatalogLookup {
    let now = Utc::now();
    let mut cache = CatalogCacheFile::load(cache_dir);

    if let Some(models) = cache.get(client.api_key(), now) {
        debug!(count = models.len(), "모델 목록 캐시 적중");
        return CatalogLookup {
            models: models.clone(),
            error: None,
            from_cache: true,
        };
    }

    debug!("모델 목록 캐시 없음, API 조회");
    match client.list_models().await {
        Ok(all) => {
            let models = generation_capable_models(&all);
            cache.insert(client.api_key(), models.clone(), now);
            if let Err(e) = cache.save(cache_dir) {
                warn!("모델 캐시 저장 실패: {}", e);
            }
            CatalogLookup {
                models,
                error: None,
                from_cache: false,
            }
        }
        Err(e) => CatalogLookup {
            models: Vec::new(),
            error: Some(e.to_string()),
            from_cache: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_digest_is_stable_hex() {
        let digest = key_digest("AIzaSyExample");
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, key_digest("AIzaSyExample"));
        assert_ne!(digest, key_digest("another-key"));
        assert!(!digest.contains("AIza"));
    }
}
