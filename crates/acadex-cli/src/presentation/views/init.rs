use std::fmt;

use crate::presentation::view_models::{CreateView, InitViewModel};

impl CreateView for InitViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(InitView { data: self })
    }
}

struct InitView<'a> {
    data: &'a InitViewModel,
}

impl<'a> fmt::Display for InitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // `created == false` means --force replaced an existing file.
        if !self.data.created {
            writeln!(f, "Replaced the existing config.")?;
        }
        writeln!(f, "{:<8} {}", "Config:", self.data.config_path)?;
        writeln!(f, "{:<8} {}", "Server:", self.data.server)
    }
}
