//! Major Compass Common Library
//!
//! CLI와 테스트가 공유하는 타입과 순수 로직 (네트워크/파일 I/O 없음)

pub mod types;
pub mod error;
pub mod curriculum;
pub mod form;
pub mod prompts;
pub mod interpreter;
pub mod export;
pub mod catalog;
pub mod ttl_cache;

pub use types::{Interpretation, Recommendation};
pub use error::{Error, Result};
pub use curriculum::{find_unit, GeometryUnit, GEOMETRY_UNITS};
pub use form::{LinkRequest, StudentProfile};
pub use prompts::{build_link_prompt, build_recommendation_prompt, link_prompt_for, recommendation_prompt_for};
pub use interpreter::{interpret_recommendations, parse_payload, resolve_shape, strip_code_fence};
pub use export::{format_recommendation, to_plain_text};
pub use catalog::{default_model, default_model_index, generation_capable_models, ModelInfo};
pub use ttl_cache::TtlCache;
