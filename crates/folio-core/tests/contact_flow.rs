use folio_core::SiteConfig;
use folio_core::config::DEFAULT_CONTACT_ADDRESS;
use folio_core::contact::{self, ContactForm, NoticeKind};

const BLANKS: [&str; 4] = ["", "   ", "\n\t ", "\u{FEFF}"];

const REFERENCE_MAILTO: &str = concat!(
    "mailto:prajjwal.singhpratap@gmail.com",
    "?subject=Contact%20from%20Jane",
    "&body=Name%3A%20Jane%0AEmail%3A%20jane%40example.com%0A%0AMessage%3A%0AHi",
);

#[test]
fn test_every_blank_combination_is_blocked() {
    let filled = ["Jane", "jane@example.com", "Hi"];

    // Each bit picks a blank value instead of the filled one for that field
    for mask in 1u8..8 {
        for blank in BLANKS {
            let pick = |bit: u8, value: &str| {
                if mask & bit != 0 {
                    blank.to_string()
                } else {
                    value.to_string()
                }
            };
            let form = ContactForm::new(pick(1, filled[0]), pick(2, filled[1]), pick(4, filled[2]));
            let outcome = contact::submit(&form, DEFAULT_CONTACT_ADDRESS);

            assert_eq!(outcome.notice.kind, NoticeKind::Error, "mask {mask:03b}");
            assert_eq!(outcome.notice.text, "Please fill in all fields.");
            assert!(outcome.navigate_to.is_none());
        }
    }
}

#[test]
fn test_invalid_email_blocked_with_valid_other_fields() {
    let form = ContactForm::new("Jane", "not-an-email", "Hi");
    let outcome = contact::submit(&form, DEFAULT_CONTACT_ADDRESS);

    assert_eq!(outcome.notice.kind, NoticeKind::Error);
    assert_eq!(outcome.notice.text, "Please enter a valid email address.");
    assert!(outcome.navigate_to.is_none());
}

#[test]
fn test_valid_submission_hands_off_to_mail_client() {
    let config = SiteConfig::default();
    let form = ContactForm::new("Jane", "jane@example.com", "Hi");
    let outcome = contact::submit(&form, &config.contact.address);

    assert_eq!(outcome.notice.kind, NoticeKind::Success);
    assert_eq!(outcome.notice.text, "Opening email client...");
    assert_eq!(outcome.navigate_to.as_deref(), Some(REFERENCE_MAILTO));
}

#[test]
fn test_configured_address_is_used() {
    let config = SiteConfig::from_toml_str("[contact]\naddress = \"hello@example.net\"").unwrap();
    let form = ContactForm::new("Ana", "ana@example.com", "Olá & bem-vindo?");
    let outcome = contact::submit(&form, &config.contact.address);

    let uri = outcome.navigate_to.unwrap();
    assert!(uri.starts_with("mailto:hello@example.net?subject=Contact%20from%20Ana&body="));
    assert!(uri.ends_with("Ol%C3%A1%20%26%20bem-vindo%3F"));
}
