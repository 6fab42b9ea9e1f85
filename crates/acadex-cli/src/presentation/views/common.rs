use std::fmt;

use crate::presentation::view_models::{CreateView, MessageViewModel};

impl CreateView for MessageViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(MessageView { data: self })
    }
}

struct MessageView<'a> {
    data: &'a MessageViewModel,
}

impl<'a> fmt::Display for MessageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.message)
    }
}
