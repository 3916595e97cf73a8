//! 고등학교 기하 교육과정 카탈로그
//!
//! 대단원 → 소단원 목록. 순서는 교과서 순서를 따른다.

use crate::error::{Error, Result};

/// 기하 대단원
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryUnit {
    pub name: &'static str,
    pub topics: &'static [&'static str],
}

/// 기하 과목 단원 구성
pub const GEOMETRY_UNITS: &[GeometryUnit] = &[
    GeometryUnit {
        name: "I. 이차곡선",
        topics: &[
            "포물선의 방정식",
            "타원의 방정식",
            "쌍곡선의 방정식",
            "이차곡선의 접선",
        ],
    },
    GeometryUnit {
        name: "II. 평면벡터",
        topics: &[
            "벡터의 덧셈과 뺄셈",
            "벡터의 실수배",
            "위치벡터",
            "평면벡터의 성분",
            "평면벡터의 내적",
            "직선과 원의 방정식(벡터 활용)",
        ],
    },
    GeometryUnit {
        name: "III. 공간도형과 공간좌표",
        topics: &[
            "직선과 평면의 위치 관계",
            "삼수선의 정리",
            "정사영",
            "공간좌표",
            "구의 방정식",
        ],
    },
];

impl GeometryUnit {
    /// 단원 번호 (로마 숫자, 예: "II")
    pub fn numeral(&self) -> &'static str {
        self.name.split('.').next().unwrap_or(self.name)
    }

    /// 이 단원의 소단원이면 정식 이름을 돌려준다
    pub fn topic(&self, name: &str) -> Option<&'static str> {
        self.topics.iter().copied().find(|t| *t == name)
    }

    pub fn has_topic(&self, topic: &str) -> bool {
        self.topic(topic).is_some()
    }
}

/// 대단원 검색
///
/// 전체 이름("II. 평면벡터") 또는 로마 숫자("II", 대소문자 무시)를 받는다.
pub fn find_unit(query: &str) -> Result<&'static GeometryUnit> {
    let query = query.trim();
    GEOMETRY_UNITS
        .iter()
        .find(|unit| unit.name == query || unit.numeral().eq_ignore_ascii_case(query))
        .ok_or_else(|| Error::UnknownUnit(query.to_string()))
}
