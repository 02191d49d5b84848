use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Department;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub code: String,
    pub name: String,
    pub department: Department,
    pub last_updated: NaiveDate,
}

impl Course {
    pub fn href(&self) -> String {
        format!("/course/{}", self.id)
    }
}
