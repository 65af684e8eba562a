use super::*;

fn filled_form() -> SignUpForm {
    SignUpForm {
        avatar: String::new(),
        first_name: " Tania ".to_owned(),
        last_name: "Andrew".to_owned(),
        username: "tandrew".to_owned(),
        email: "tania@example.com ".to_owned(),
        password: "hunter2222".to_owned(),
    }
}

#[test]
fn validate_sign_up_input_trims_and_builds_payload() {
    let data = validate_sign_up_input(&filled_form()).unwrap();
    assert_eq!(data.first_name, "Tania");
    assert_eq!(data.email, "tania@example.com");
    assert_eq!(data.password, "hunter2222");
    assert_eq!(data.avatar, None);
}

#[test]
fn validate_sign_up_input_keeps_avatar_url() {
    let form = SignUpForm { avatar: " https://img.test/a.png ".to_owned(), ..filled_form() };
    let data = validate_sign_up_input(&form).unwrap();
    assert_eq!(data.avatar.as_deref(), Some("https://img.test/a.png"));
}

#[test]
fn validate_sign_up_input_requires_identity_fields() {
    let form = SignUpForm { username: "  ".to_owned(), ..filled_form() };
    assert_eq!(validate_sign_up_input(&form), Err("Fill in name, username and email."));
}

#[test]
fn validate_sign_up_input_rejects_email_without_at() {
    let form = SignUpForm { email: "tania.example.com".to_owned(), ..filled_form() };
    assert_eq!(validate_sign_up_input(&form), Err("Enter a valid email address."));
}

#[test]
fn validate_sign_up_input_rejects_short_password() {
    let form = SignUpForm { password: "short".to_owned(), ..filled_form() };
    assert_eq!(validate_sign_up_input(&form), Err("Password must be at least 8 characters."));
}
