use std::fmt;

use crate::presentation::formatters::{format_date, format_relative};
use crate::presentation::view_models::{
    CreateView, LoginViewModel, ProfileViewModel, RegisterViewModel,
};

// --------------------------------------------------------
// Login View
// --------------------------------------------------------

impl CreateView for LoginViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(LoginView { data: self })
    }
}

struct LoginView<'a> {
    data: &'a LoginViewModel,
}

impl<'a> fmt::Display for LoginView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:<10} {}", "Account:", self.data.identifier)?;
        writeln!(f, "{:<10} {}", "Server:", self.data.server)
    }
}

// --------------------------------------------------------
// Profile View (whoami)
// --------------------------------------------------------

impl CreateView for ProfileViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ProfileView { data: self })
    }
}

struct ProfileView<'a> {
    data: &'a ProfileViewModel,
}

impl<'a> fmt::Display for ProfileView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:<12} {}", "Name:", self.data.name)?;
        writeln!(f, "{:<12} {}", "Username:", self.data.username)?;
        writeln!(f, "{:<12} {}", "Email:", self.data.email)?;
        writeln!(f, "{:<12} {}", "Role:", self.data.role)?;
        writeln!(
            f,
            "{:<12} {}",
            "Status:",
            if self.data.active { "active" } else { "deactivated" }
        )?;

        if let Some(faculty) = &self.data.faculty {
            writeln!(f, "{:<12} {}", "Faculty:", faculty)?;
        }
        if let Some(department) = &self.data.department {
            writeln!(f, "{:<12} {}", "Department:", department)?;
        }
        if let Some(level) = &self.data.level {
            writeln!(f, "{:<12} {}", "Level:", level)?;
        }
        if let Some(created) = &self.data.created_at {
            writeln!(
                f,
                "{:<12} {} ({})",
                "Joined:",
                format_date(created),
                format_relative(created)
            )?;
        }

        writeln!(f, "{:<12} {}", "Id:", self.data.id)
    }
}

// --------------------------------------------------------
// Register View
// --------------------------------------------------------

impl CreateView for RegisterViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(RegisterView { data: self })
    }
}

struct RegisterView<'a> {
    data: &'a RegisterViewModel,
}

impl<'a> fmt::Display for RegisterView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.data.message.is_empty() {
            writeln!(f, "{}", self.data.message)?;
            writeln!(f)?;
        }
        writeln!(f, "{:<10} {}", "Name:", self.data.name)?;
        writeln!(f, "{:<10} {}", "Username:", self.data.username)?;
        writeln!(f, "{:<10} {}", "Email:", self.data.email)?;
        writeln!(f, "{:<10} {}", "Server:", self.data.server)
    }
}
