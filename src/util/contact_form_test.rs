use super::*;

fn valid_form() -> ContactForm {
    ContactForm {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Hello".to_owned(),
        message: "I would like to talk about a project.".to_owned(),
    }
}

#[test]
fn valid_form_passes() {
    assert_eq!(valid_form().validate(), Ok(()));
}

#[test]
fn nine_character_message_is_too_short() {
    let form = ContactForm { message: "123456789".to_owned(), ..valid_form() };
    let err = form.validate().expect_err("message is too short");
    assert_eq!(err, ContactError::MessageTooShort);
    assert!(err.to_string().contains("must be at least 10 characters"));
}

#[test]
fn ten_characters_is_enough() {
    let form = ContactForm { message: "1234567890".to_owned(), ..valid_form() };
    assert_eq!(form.validate(), Ok(()));
}

#[test]
fn message_length_ignores_padding() {
    let form = ContactForm { message: "   short    ".to_owned(), ..valid_form() };
    assert_eq!(form.validate(), Err(ContactError::MessageTooShort));
}

#[test]
fn rules_apply_in_priority_order() {
    let empty = ContactForm::default();
    assert_eq!(empty.validate(), Err(ContactError::MissingName));

    let form = ContactForm { name: "Ada".to_owned(), ..ContactForm::default() };
    assert_eq!(form.validate(), Err(ContactError::MissingEmail));

    let form = ContactForm { email: "not-an-email".to_owned(), ..form };
    assert_eq!(form.validate(), Err(ContactError::InvalidEmail));

    let form = ContactForm { email: "ada@example.com".to_owned(), ..form };
    assert_eq!(form.validate(), Err(ContactError::MissingSubject));

    let form = ContactForm { subject: "Hi".to_owned(), ..form };
    assert_eq!(form.validate(), Err(ContactError::MissingMessage));

    let form = ContactForm { message: "short".to_owned(), ..form };
    assert_eq!(form.validate(), Err(ContactError::MessageTooShort));
}

#[test]
fn whitespace_only_fields_are_missing() {
    let form = ContactForm { name: "   ".to_owned(), ..valid_form() };
    assert_eq!(form.validate(), Err(ContactError::MissingName));
}

#[test]
fn email_shapes() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last+tag@mail.example.org"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("ada@"));
    assert!(!is_valid_email("ada@example"));
    assert!(!is_valid_email("ada@.com"));
    assert!(!is_valid_email("ada@example."));
    assert!(!is_valid_email("ada@@example.com"));
    assert!(!is_valid_email("ada lovelace@example.com"));
}

#[test]
fn trimmed_strips_every_field() {
    let form = ContactForm {
        name: " Ada ".to_owned(),
        email: " ada@example.com\n".to_owned(),
        subject: "\tHi".to_owned(),
        message: "Hello there ".to_owned(),
    };
    let trimmed = form.trimmed();
    assert_eq!(trimmed.name, "Ada");
    assert_eq!(trimmed.email, "ada@example.com");
    assert_eq!(trimmed.subject, "Hi");
    assert_eq!(trimmed.message, "Hello there");
}
