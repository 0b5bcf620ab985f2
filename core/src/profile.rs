#[derive(Clone, Copy, Debug)]
pub struct OwnerProfile {
    pub name: &'static str,
    pub title: &'static str,
    pub university: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub project_link: &'static str,
}

pub const OWNER_PROFILE: OwnerProfile = OwnerProfile {
    name: "Ahmad Herzalla",
    title: "Computer Systems Engineering student",
    university: "Palestine Technical University - Kadoorie (PTUK)",
    location: "Jenin, West Bank",
    email: "ahmadherzalla31@gmail.com",
    phone: "+970568789593",
    project_link: "https://github.com/Ahmed-Herzalla0",
};

pub const HEADSHOT_FALLBACK: &str = "./images/profile-placeholder.jpg";

pub fn compose_about_text(extra: Option<&str>) -> String {
    let intro = format!(
        "Hi, I'm {}, a {} at {}.",
        OWNER_PROFILE.name, OWNER_PROFILE.title, OWNER_PROFILE.university
    );
    let focus = format!(
        "Based in {}, I enjoy building accessible, data-driven interfaces and continually sharpening my problem-solving skills.",
        OWNER_PROFILE.location
    );
    let outreach = format!(
        "Reach me at {} or {}, and explore my projects on GitHub: {}.",
        OWNER_PROFILE.email, OWNER_PROFILE.phone, OWNER_PROFILE.project_link
    );
    let mut parts = vec![intro, focus, outreach];
    let extra = extra.map(str::trim).unwrap_or("");
    if !extra.is_empty() {
        parts.push(extra.to_string());
    }
    parts.join(" ")
}
