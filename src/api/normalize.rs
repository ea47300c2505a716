//! Turns a raw zero-click body into a [`Response`].
//!
//! The upstream payload is loosely typed in two places. Icon dimensions are
//! either numbers or `""`, and `RelatedTopics` holds flat links or named
//! groups of links depending on the response `Type`. Both are decoded
//! permissively first and resolved afterwards.

use serde_json::Value;

use super::{
    ddg_dto::{DisambiguationDto, LinkDto, ResponseDto},
    utils::{decode_first, parse_response_object},
};
use crate::{
    error::Result,
    models::{Category, LinkSection, Response},
};

pub fn normalize(body: &[u8]) -> Result<Response> {
    // Only the first JSON value counts; trailing bytes are ignored.
    let Some(data) = decode_first::<Value>(body) else {
        tracing::debug!("empty body, returning an empty response");
        return Ok(Response::default());
    };
    let data = data?;
    let dto = parse_response_object::<ResponseDto<LinkDto>>(data)?;
    let mut response = Response::from(dto);

    if response.category == Category::Disambiguation {
        // Group headers decode as empty links in the flat pass.
        response.related_topics.retain(|link| !link.is_empty());
        response.related_topic_sections = decode_sections(body);
    }

    Ok(response)
}

/// Reads `RelatedTopics` as named groups. A body that does not fit that
/// shape yields no sections rather than an error.
pub fn decode_sections(body: &[u8]) -> Vec<LinkSection> {
    match decode_first::<DisambiguationDto>(body).unwrap_or_else(|| Ok(Default::default())) {
        Ok(dto) => dto
            .related_topics
            .into_iter()
            .filter(|group| !group.name.is_empty())
            .map(LinkSection::from)
            .collect(),
        Err(err) => {
            tracing::debug!(error = %err, "could not decode related topic sections");
            Vec::new()
        }
    }
}

/// Resolves an icon height or width. Numbers are truncated, everything else
/// (including the empty string) is 0.
pub fn dimension(raw: &Value) -> u32 {
    match raw {
        Value::Number(n) => n.as_f64().map_or(0, |px| px as u32),
        _ => 0,
    }
}
