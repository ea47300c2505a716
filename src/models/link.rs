use derive_getters::{Dissolve, Getters};
use derive_new::new;

use super::Icon;

#[derive(Clone, Debug, Default, Dissolve, Eq, Getters, PartialEq, new)]
pub struct Link {
    /// HTML snippet linking to the target.
    result: String,
    first_url: String,
    icon: Icon,
    text: String,
}

impl Link {
    /// True when the HTML snippet is empty, regardless of the other fields.
    /// Topic group headers decode into such links.
    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }
}
