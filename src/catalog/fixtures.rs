use chrono::NaiveDate;

use crate::models::{Course, Department};

fn course(id: &str, code: &str, name: &str, department: Department, (y, m, d): (i32, u32, u32)) -> Course {
    Course {
        id: id.to_string(),
        code: code.to_string(),
        name: name.to_string(),
        department,
        last_updated: NaiveDate::from_ymd_opt(y, m, d).expect("fixture date"),
    }
}

pub fn featured_courses() -> Vec<Course> {
    vec![
        course("cs-1110", "CS:1110", "Introduction to Computer Science", Department::ComputerScience, (2025, 4, 1)),
        course("math-1850", "MATH:1850", "Calculus I", Department::Mathematics, (2025, 3, 15)),
        course("engl-1200", "ENGL:1200", "Creative Writing", Department::English, (2025, 3, 28)),
        course("biol-1411", "BIOL:1411", "Foundations of Biology", Department::Biology, (2025, 4, 12)),
    ]
}

pub fn recent_uploads() -> Vec<Course> {
    vec![
        course("chem-1110", "CHEM:1110", "Principles of Chemistry I", Department::Chemistry, (2025, 4, 15)),
        course("hist-1010", "HIST:1010", "Issues in Human History", Department::History, (2025, 4, 14)),
        course("psych-1001", "PSY:1001", "Elementary Psychology", Department::Psychology, (2025, 4, 13)),
        course("phil-1033", "PHIL:1033", "Philosophy and Human Nature", Department::Philosophy, (2025, 4, 12)),
    ]
}
