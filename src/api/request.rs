use derive_getters::Getters;
use reqwest::{
    Method,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};
use url::Url;

use crate::{error::Result, models::QueryOptions};

pub const API_HOST: &str = "api.duckduckgo.com";

pub const CLIENT_NAME: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A fully built zero-click request, ready to hand to a transport.
#[derive(Clone, Debug, Getters)]
pub struct Request {
    method: Method,
    url: Url,
    headers: HeaderMap,
}

pub fn build_request(host: &str, query: &str, options: &QueryOptions) -> Result<Request> {
    let scheme = if options.secure { "https" } else { "http" };
    let base = format!("{}://{}/", scheme, host);

    let mut params = vec![("q", query), ("format", "json")];
    params.extend(options.flag_params().map(|name| (name, "1")));
    let url = Url::parse_with_params(&base, &params)?;

    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_NAME));

    Ok(Request {
        method: Method::GET,
        url,
        headers,
    })
}
