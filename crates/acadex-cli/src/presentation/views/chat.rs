use std::fmt;

use crate::presentation::view_models::{AskViewModel, CreateView};

impl CreateView for AskViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(AskView { data: self })
    }
}

struct AskView<'a> {
    data: &'a AskViewModel,
}

impl<'a> fmt::Display for AskView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "[{}] {}", self.data.model, self.data.prompt)?;
        writeln!(f)?;
        writeln!(f, "{}", self.data.reply)
    }
}
