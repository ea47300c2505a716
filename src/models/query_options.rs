/// Per-call options for a zero-click query.
///
/// Every flag defaults to off, which matches the API's own defaults: plain
/// HTTP, HTML kept in text fields, disambiguation results included and
/// `!bang` redirects followed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct QueryOptions {
    pub secure: bool,
    pub no_html: bool,
    pub skip_disambig: bool,
    pub no_redirect: bool,
}

impl QueryOptions {
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_no_html(mut self, no_html: bool) -> Self {
        self.no_html = no_html;
        self
    }

    pub fn with_skip_disambig(mut self, skip_disambig: bool) -> Self {
        self.skip_disambig = skip_disambig;
        self
    }

    pub fn with_no_redirect(mut self, no_redirect: bool) -> Self {
        self.no_redirect = no_redirect;
        self
    }

    /// Names of the query parameters switched on by these options.
    pub(crate) fn flag_params(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.no_html, "no_html"),
            (self.skip_disambig, "skip_disambig"),
            (self.no_redirect, "no_redirect"),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, name)| name)
    }
}
