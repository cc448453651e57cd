/// Entries of the header navigation.
pub const NAV_ITEMS: [&str; 5] = ["Home", "Notes", "Meet the Staff", "About", "More"];

/// Entries of the footer's quick links column.
pub const QUICK_LINKS: [&str; 6] = [
    "FAQ",
    "About Us",
    "Blog",
    "Code of Conduct",
    "Privacy Policy",
    "Terms of Use and Conditions",
];

pub const SOCIAL_URL: &str = "https://linktr.ee/studybubbly";
pub const CONTACT_EMAIL: &str = "cpstudentbubble@gmail.com";

/// Header hrefs only dash the first space: "Meet the Staff" -> "/meet-the staff".
pub fn nav_href(label: &str) -> String {
    format!("/{}", label.to_lowercase().replacen(' ', "-", 1))
}

/// Footer hrefs dash every space.
pub fn footer_href(label: &str) -> String {
    format!("/{}", label.to_lowercase().replace(' ', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_hrefs_replace_first_space_only() {
        assert_eq!(nav_href("Home"), "/home");
        assert_eq!(nav_href("Meet the Staff"), "/meet-the staff");
    }

    #[test]
    fn footer_hrefs_replace_every_space() {
        let hrefs: Vec<String> = QUICK_LINKS.iter().map(|l| footer_href(l)).collect();
        assert_eq!(hrefs, vec![
            "/faq",
            "/about-us",
            "/blog",
            "/code-of-conduct",
            "/privacy-policy",
            "/terms-of-use-and-conditions",
        ]);
    }
}
