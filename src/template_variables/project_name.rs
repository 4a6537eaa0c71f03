use chrono::{Local, Timelike};

/// Placeholder used when no project name was given, e.g. `project-temp-14-7`
pub fn default_project_name() -> String {
    default_project_name_at(&Local::now())
}

pub fn default_project_name_at(time: &impl Timelike) -> String {
    format!("project-temp-{}-{}", time.hour(), time.second())
}
