use derive_getters::{Dissolve, Getters};
use derive_new::new;

#[derive(Clone, Debug, Default, Dissolve, Eq, Getters, PartialEq, new)]
pub struct Icon {
    url: String,
    height: u32,
    width: u32,
}
