//! Dashboard page

use std::fmt;

use crate::models::User;

pub const TITLE: &str = "Career Recommendation Portal";

const INTRO: &str = "Your career dashboard is ready. Here you can explore course recommendations, \
check college details, and find job opportunities that match your profile.";

/// Static dashboard cards: title, description, action
pub const CARDS: [(&str, &str, &str); 3] = [
    (
        "Course Recommendations",
        "Explore courses that match your interests and skills.",
        "View Courses",
    ),
    (
        "College Information",
        "Find details about top colleges and their offerings.",
        "Explore Colleges",
    ),
    (
        "Job Opportunities",
        "Discover job openings that match your profile.",
        "Find Jobs",
    ),
];

/// Landing page for a logged-in user
pub struct Dashboard<'a> {
    user: &'a User,
}

impl<'a> Dashboard<'a> {
    pub fn new(user: &'a User) -> Self {
        Self { user }
    }

    /// Render as plain text
    pub fn render(user: &User) -> String {
        Dashboard::new(user).to_string()
    }
}

impl fmt::Display for Dashboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(TITLE.len());

        writeln!(f, "{TITLE}\n{rule}\n")?;
        writeln!(f, "Welcome back, {}!", self.user.display_name())?;
        writeln!(f, "{INTRO}")?;

        for (title, description, action) in CARDS {
            writeln!(f, "\n[ {title} ]\n  {description}\n  > {action}")?;
        }
        Ok(())
    }
}
