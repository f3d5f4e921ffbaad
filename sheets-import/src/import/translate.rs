//! Fixed translation tables from stored codes to Arabic display strings

/// What a [`ValueMap`] returns when no entry matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Return the raw value unchanged
    PassThrough,
    /// Return a fixed value
    Default(&'static str),
}

/// Exact-match lookup table with a fallback
#[derive(Debug, Clone, Copy)]
pub struct ValueMap {
    entries: &'static [(&'static str, &'static str)],
    fallback: Fallback,
}

impl ValueMap {
    pub const fn new(entries: &'static [(&'static str, &'static str)], fallback: Fallback) -> Self {
        Self { entries, fallback }
    }

    pub fn get(&self, raw: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(from, _)| *from == raw)
            .map(|(_, to)| *to)
    }

    pub fn translate(&self, raw: &str) -> String {
        match (self.get(raw), self.fallback) {
            (Some(mapped), _) => mapped.to_string(),
            (None, Fallback::PassThrough) => raw.to_string(),
            (None, Fallback::Default(value)) => value.to_string(),
        }
    }
}

/// User type written on every student row
pub const STUDENT_USER_TYPE: &str = "طالب";

pub const BROADCAST_TARGET: ValueMap = ValueMap::new(
    &[
        ("all", "الجميع"),
        ("students", "الطلاب"),
        ("parents", "الأولياء"),
    ],
    Fallback::PassThrough,
);

pub const BROADCAST_STATUS: ValueMap = ValueMap::new(
    &[
        ("sent", "تم الإرسال"),
        ("pending", "قيد الانتظار"),
        ("failed", "فشل"),
    ],
    Fallback::PassThrough,
);

pub const USER_TYPE: ValueMap = ValueMap::new(
    &[
        ("student", STUDENT_USER_TYPE),
        ("parent", "ولي أمر"),
        ("teacher", "أستاذ"),
        ("admin", "مدير"),
    ],
    Fallback::PassThrough,
);

pub const PARENT_LINK_STATUS: ValueMap =
    ValueMap::new(&[("True", "تم الربط")], Fallback::Default("غير مسجل"));

pub const TEACHER_STATUS: ValueMap =
    ValueMap::new(&[("active", "نشط")], Fallback::Default("غير نشط"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values_translate() {
        assert_eq!(BROADCAST_TARGET.translate("all"), "الجميع");
        assert_eq!(BROADCAST_TARGET.translate("students"), "الطلاب");
        assert_eq!(BROADCAST_TARGET.translate("parents"), "الأولياء");
        assert_eq!(BROADCAST_STATUS.translate("sent"), "تم الإرسال");
        assert_eq!(BROADCAST_STATUS.translate("pending"), "قيد الانتظار");
        assert_eq!(BROADCAST_STATUS.translate("failed"), "فشل");
        assert_eq!(USER_TYPE.translate("student"), "طالب");
        assert_eq!(USER_TYPE.translate("parent"), "ولي أمر");
        assert_eq!(USER_TYPE.translate("teacher"), "أستاذ");
        assert_eq!(USER_TYPE.translate("admin"), "مدير");
    }

    #[test]
    fn test_unknown_values_pass_through() {
        for raw in ["", "ALL", "Students", "scheduled", "guest", "  sent"] {
            assert_eq!(BROADCAST_TARGET.translate(raw), raw);
            assert_eq!(BROADCAST_STATUS.translate(raw), raw);
            assert_eq!(USER_TYPE.translate(raw), raw);
        }
    }

    #[test]
    fn test_boolean_like_fields_use_default() {
        assert_eq!(PARENT_LINK_STATUS.translate("True"), "تم الربط");
        assert_eq!(PARENT_LINK_STATUS.translate("true"), "غير مسجل");
        assert_eq!(PARENT_LINK_STATUS.translate("False"), "غير مسجل");
        assert_eq!(PARENT_LINK_STATUS.translate(""), "غير مسجل");

        assert_eq!(TEACHER_STATUS.translate("active"), "نشط");
        assert_eq!(TEACHER_STATUS.translate("inactive"), "غير نشط");
        assert_eq!(TEACHER_STATUS.translate("Active"), "غير نشط");
    }

    #[test]
    fn test_get_reports_missing_entries() {
        assert_eq!(USER_TYPE.get("admin"), Some("مدير"));
        assert_eq!(USER_TYPE.get("root"), None);
    }
}
