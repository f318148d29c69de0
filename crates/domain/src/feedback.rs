#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Delete,
}

/// Outcome of a user action, shown as a short notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    SessionCreated,
    SessionRenamed,
    SessionDeleted,
    ExerciseAdded,
    ExerciseRemoved,
    NotesSaved,
    DataCleared,
    ImportSucceeded,
    ImportFailed(String),
    ImportInputMissing,
    ExportSucceeded,
}

impl Feedback {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Feedback::SessionCreated => "جلسه با موفقیت ایجاد شد".to_string(),
            Feedback::SessionRenamed => "نام جلسه با موفقیت تغییر یافت".to_string(),
            Feedback::SessionDeleted => "جلسه با موفقیت حذف شد".to_string(),
            Feedback::ExerciseAdded => "تمرین به جلسه اضافه شد".to_string(),
            Feedback::ExerciseRemoved => "تمرین از جلسه حذف شد".to_string(),
            Feedback::NotesSaved => "یادداشت ذخیره شد".to_string(),
            Feedback::DataCleared => "تمام داده‌ها پاک شدند".to_string(),
            Feedback::ImportSucceeded => "داده‌ها با موفقیت وارد شدند".to_string(),
            Feedback::ImportFailed(reason) => format!("خطا در تجزیه JSON: {reason}"),
            Feedback::ImportInputMissing => {
                "لطفاً کد JSON را وارد کنید یا یک فایل انتخاب کنید.".to_string()
            }
            Feedback::ExportSucceeded => "فایل پشتیبان ذخیره شد".to_string(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FeedbackKind {
        match self {
            Feedback::SessionCreated
            | Feedback::SessionRenamed
            | Feedback::ExerciseAdded
            | Feedback::NotesSaved
            | Feedback::ImportSucceeded
            | Feedback::ExportSucceeded => FeedbackKind::Success,
            Feedback::SessionDeleted
            | Feedback::ExerciseRemoved
            | Feedback::DataCleared
            | Feedback::ImportFailed(_)
            | Feedback::ImportInputMissing => FeedbackKind::Delete,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Feedback::SessionCreated, FeedbackKind::Success)]
    #[case(Feedback::SessionRenamed, FeedbackKind::Success)]
    #[case(Feedback::SessionDeleted, FeedbackKind::Delete)]
    #[case(Feedback::DataCleared, FeedbackKind::Delete)]
    #[case(Feedback::ImportSucceeded, FeedbackKind::Success)]
    #[case(Feedback::ImportFailed(String::new()), FeedbackKind::Delete)]
    #[case(Feedback::ImportInputMissing, FeedbackKind::Delete)]
    fn test_feedback_kind(#[case] feedback: Feedback, #[case] expected: FeedbackKind) {
        assert_eq!(feedback.kind(), expected);
    }

    #[test]
    fn test_feedback_message() {
        assert_eq!(
            Feedback::SessionDeleted.message(),
            "جلسه با موفقیت حذف شد".to_string()
        );
        assert_eq!(
            Feedback::ImportFailed("expected value".to_string()).message(),
            "خطا در تجزیه JSON: expected value".to_string()
        );
    }
}
