use derive_getters::Getters;
use serde::Serialize;

use super::{Category, Link, LinkSection};
use crate::api::ddg_dto::{RelatedTopicDto, ResponseDto};

/// The normalized answer for one zero-click query.
///
/// Serializing a `Response` emits the upstream wire shape again, with icon
/// dimensions as integers and related topic sections folded back into
/// `RelatedTopics`.
#[derive(Clone, Debug, Default, Eq, Getters, PartialEq, Serialize)]
#[serde(into = "ResponseDto<RelatedTopicDto>")]
pub struct Response {
    /// Topic summary, may contain HTML.
    pub(crate) abstract_html: String,
    pub(crate) abstract_text: String,
    pub(crate) abstract_source: String,
    pub(crate) abstract_url: String,
    pub(crate) image: String,
    pub(crate) heading: String,

    pub(crate) answer: String,
    /// e.g. calc, color, digest, info, ip, iploc, phone, pw, rand, regexp,
    /// unicode, upc or zip.
    pub(crate) answer_type: String,

    pub(crate) definition: String,
    pub(crate) definition_source: String,
    pub(crate) definition_url: String,

    /// Flat related topics. Empty for most disambiguation responses.
    pub(crate) related_topics: Vec<Link>,
    /// Grouped related topics, only populated for disambiguation responses.
    pub(crate) related_topic_sections: Vec<LinkSection>,

    /// External links.
    pub(crate) results: Vec<Link>,

    pub(crate) category: Category,

    /// Target of a `!bang` query.
    pub(crate) redirect: String,
}

impl Response {
    pub fn is_empty(&self) -> bool {
        self.abstract_html.is_empty()
            && self.abstract_text.is_empty()
            && self.answer.is_empty()
            && self.definition.is_empty()
            && self.redirect.is_empty()
            && self.related_topics.is_empty()
            && self.related_topic_sections.is_empty()
            && self.results.is_empty()
    }

    pub fn is_disambiguation(&self) -> bool {
        self.category == Category::Disambiguation
    }
}
