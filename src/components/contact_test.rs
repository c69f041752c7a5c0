use super::*;

#[test]
fn status_class_marks_outcome() {
    assert_eq!(status_class(&SubmitStatus::Idle), "form-status");
    assert_eq!(status_class(&SubmitStatus::Sent), "form-status success");
    assert_eq!(status_class(&SubmitStatus::Failed("x".into())), "form-status error");
}

#[test]
fn submit_button_reports_sending() {
    assert_eq!(submit_label(true), "Sending...");
    assert_eq!(submit_label(false), "Send Message");
}
