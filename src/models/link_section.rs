use derive_getters::{Dissolve, Getters};
use derive_new::new;

use super::Link;

/// A named group of related topics, as returned for disambiguation queries.
#[derive(Clone, Debug, Default, Dissolve, Eq, Getters, PartialEq, new)]
pub struct LinkSection {
    name: String,
    topics: Vec<Link>,
}
