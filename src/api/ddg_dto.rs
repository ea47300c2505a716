use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{normalize::dimension, utils::nullable};
use crate::models::{Category, Icon, Link, LinkSection, Response};

// Any field may also arrive as `null`, which reads as its empty value.

/// Upstream response body. `T` is the element shape assumed for
/// `RelatedTopics`, which the API does not fix.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct ResponseDto<T> {
    #[serde(deserialize_with = "nullable")]
    pub r#abstract: String,
    #[serde(deserialize_with = "nullable")]
    pub abstract_text: String,
    #[serde(deserialize_with = "nullable")]
    pub abstract_source: String,
    #[serde(rename = "AbstractURL", deserialize_with = "nullable")]
    pub abstract_url: String,
    #[serde(deserialize_with = "nullable")]
    pub image: String,
    #[serde(deserialize_with = "nullable")]
    pub heading: String,
    #[serde(deserialize_with = "nullable")]
    pub answer: String,
    #[serde(deserialize_with = "nullable")]
    pub answer_type: String,
    #[serde(deserialize_with = "nullable")]
    pub definition: String,
    #[serde(deserialize_with = "nullable")]
    pub definition_source: String,
    #[serde(rename = "DefinitionURL", deserialize_with = "nullable")]
    pub definition_url: String,
    #[serde(
        deserialize_with = "nullable",
        bound(deserialize = "T: Deserialize<'de>")
    )]
    pub related_topics: Vec<T>,
    #[serde(deserialize_with = "nullable")]
    pub results: Vec<LinkDto>,
    #[serde(deserialize_with = "nullable")]
    pub r#type: Category,
    #[serde(deserialize_with = "nullable")]
    pub redirect: String,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct LinkDto {
    #[serde(deserialize_with = "nullable")]
    pub result: String,
    #[serde(rename = "FirstURL", deserialize_with = "nullable")]
    pub first_url: String,
    #[serde(deserialize_with = "nullable")]
    pub icon: IconDto,
    #[serde(deserialize_with = "nullable")]
    pub text: String,
}

// Height and Width arrive either as numbers or as "".
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct IconDto {
    #[serde(rename = "URL", deserialize_with = "nullable")]
    pub url: String,
    pub height: Value,
    pub width: Value,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct TopicGroupDto {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub topics: Vec<LinkDto>,
}

/// Second-pass view of a disambiguation body, reading `RelatedTopics` as
/// named groups.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct DisambiguationDto {
    #[serde(deserialize_with = "nullable")]
    pub related_topics: Vec<TopicGroupDto>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum RelatedTopicDto {
    Link(LinkDto),
    Group(TopicGroupDto),
}

impl From<IconDto> for Icon {
    fn from(dto: IconDto) -> Self {
        Icon::new(dto.url, dimension(&dto.height), dimension(&dto.width))
    }
}

impl From<Icon> for IconDto {
    fn from(icon: Icon) -> Self {
        let (url, height, width) = icon.dissolve();
        Self {
            url,
            height: Value::from(height),
            width: Value::from(width),
        }
    }
}

impl From<LinkDto> for Link {
    fn from(dto: LinkDto) -> Self {
        Link::new(dto.result, dto.first_url, dto.icon.into(), dto.text)
    }
}

impl From<Link> for LinkDto {
    fn from(link: Link) -> Self {
        let (result, first_url, icon, text) = link.dissolve();
        Self {
            result,
            first_url,
            icon: icon.into(),
            text,
        }
    }
}

impl From<TopicGroupDto> for LinkSection {
    fn from(dto: TopicGroupDto) -> Self {
        LinkSection::new(dto.name, dto.topics.into_iter().map(Link::from).collect())
    }
}

impl From<LinkSection> for TopicGroupDto {
    fn from(section: LinkSection) -> Self {
        let (name, topics) = section.dissolve();
        Self {
            name,
            topics: topics.into_iter().map(LinkDto::from).collect(),
        }
    }
}

impl From<ResponseDto<LinkDto>> for Response {
    fn from(dto: ResponseDto<LinkDto>) -> Self {
        Response {
            abstract_html: dto.r#abstract,
            abstract_text: dto.abstract_text,
            abstract_source: dto.abstract_source,
            abstract_url: dto.abstract_url,
            image: dto.image,
            heading: dto.heading,
            answer: dto.answer,
            answer_type: dto.answer_type,
            definition: dto.definition,
            definition_source: dto.definition_source,
            definition_url: dto.definition_url,
            related_topics: dto.related_topics.into_iter().map(Link::from).collect(),
            related_topic_sections: Vec::new(),
            results: dto.results.into_iter().map(Link::from).collect(),
            category: dto.r#type,
            redirect: dto.redirect,
        }
    }
}

impl From<Response> for ResponseDto<RelatedTopicDto> {
    fn from(response: Response) -> Self {
        let related_topics = response
            .related_topics
            .into_iter()
            .map(|link| RelatedTopicDto::Link(link.into()))
            .chain(
                response
                    .related_topic_sections
                    .into_iter()
                    .map(|section| RelatedTopicDto::Group(section.into())),
            )
            .collect();

        Self {
            r#abstract: response.abstract_html,
            abstract_text: response.abstract_text,
            abstract_source: response.abstract_source,
            abstract_url: response.abstract_url,
            image: response.image,
            heading: response.heading,
            answer: response.answer,
            answer_type: response.answer_type,
            definition: response.definition,
            definition_source: response.definition_source,
            definition_url: response.definition_url,
            related_topics,
            results: response.results.into_iter().map(LinkDto::from).collect(),
            r#type: response.category,
            redirect: response.redirect,
        }
    }
}
