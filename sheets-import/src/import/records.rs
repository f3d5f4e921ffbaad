//! Typed rows of the CSV exports
//!
//! Field names match the CSV headers. Extra columns are ignored; a missing
//! column fails the decode.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Student {
    pub full_name: String,
    pub phone_number: String,
    pub grade_year: String,
    pub subjects: String,
    pub teachers: String,
    pub registered_at: String,
    pub student_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Parent {
    pub full_name: String,
    pub phone_number: String,
    /// `student_id` of the linked child
    pub linked_students: String,
    /// `"True"` once the parent confirmed the link
    pub verified: String,
    pub registered_at: String,
    pub parent_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Teacher {
    pub full_name: String,
    pub subjects: String,
    pub phone_number: String,
    pub status: String,
    pub teacher_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Broadcast {
    pub title: String,
    pub message: String,
    /// all / students / parents
    pub target: String,
    /// sent / pending / failed
    pub status: String,
    pub created_at: String,
    pub broadcast_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogEntry {
    /// student / parent / teacher / admin
    pub user_type: String,
    pub user_id: String,
    pub action: String,
    pub timestamp: String,
    pub log_id: String,
}
