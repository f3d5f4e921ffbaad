//! Display rows for each destination sheet
//!
//! Column order is fixed by the sheet headers. Columns the bot fills in later
//! (Telegram IDs, grades, notes) are written as empty strings.

use super::records::{Broadcast, LogEntry, Parent, Student, Teacher};
use super::translate::{
    BROADCAST_STATUS, BROADCAST_TARGET, PARENT_LINK_STATUS, STUDENT_USER_TYPE, TEACHER_STATUS,
    USER_TYPE,
};

/// A record that maps onto one sheet row without outside context
pub trait SheetRow {
    fn to_row(&self) -> Vec<String>;
}

impl SheetRow for Student {
    fn to_row(&self) -> Vec<String> {
        vec![
            self.full_name.clone(),
            self.phone_number.clone(),
            self.grade_year.clone(),
            self.subjects.clone(),
            self.teachers.clone(),
            STUDENT_USER_TYPE.to_string(),
            self.registered_at.clone(),
            String::new(), // TelegramID
            self.student_id.clone(),
            String::new(), // absences
            String::new(), // grades
            String::new(), // alerts
            String::new(), // notes
        ]
    }
}

impl SheetRow for Teacher {
    fn to_row(&self) -> Vec<String> {
        vec![
            self.full_name.clone(),
            self.subjects.clone(),
            self.phone_number.clone(),
            TEACHER_STATUS.translate(&self.status),
            self.teacher_id.clone(),
        ]
    }
}

impl SheetRow for Broadcast {
    fn to_row(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.message.clone(),
            BROADCAST_TARGET.translate(&self.target),
            BROADCAST_STATUS.translate(&self.status),
            self.created_at.clone(),
            self.broadcast_id.clone(),
        ]
    }
}

impl SheetRow for LogEntry {
    fn to_row(&self) -> Vec<String> {
        vec![
            USER_TYPE.translate(&self.user_type),
            self.user_id.clone(),
            self.action.clone(),
            self.timestamp.clone(),
            self.log_id.clone(),
        ]
    }
}

/// Student records searched when resolving a parent's linked child
#[derive(Debug, Clone, Copy)]
pub struct StudentDirectory<'a> {
    students: &'a [Student],
}

impl<'a> StudentDirectory<'a> {
    pub fn new(students: &'a [Student]) -> Self {
        Self { students }
    }

    /// Phone number of the first student with `student_id`, or `""`
    pub fn phone_for(&self, student_id: &str) -> &'a str {
        self.students
            .iter()
            .find(|s| s.student_id == student_id)
            .map(|s| s.phone_number.as_str())
            .unwrap_or("")
    }
}

/// Parent rows carry the linked child's phone number
pub fn parent_row(parent: &Parent, students: &StudentDirectory<'_>) -> Vec<String> {
    vec![
        parent.full_name.clone(),
        parent.phone_number.clone(),
        students.phone_for(&parent.linked_students).to_string(),
        PARENT_LINK_STATUS.translate(&parent.verified),
        parent.registered_at.clone(),
        String::new(), // TelegramID
        parent.parent_id.clone(),
    ]
}
