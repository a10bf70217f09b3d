use super::*;

fn provider(key: &str, color: Option<&str>) -> IdentityProvider {
    IdentityProvider {
        key: key.to_owned(),
        name: key.to_uppercase(),
        icon_path: Some(format!("/static/{key}.svg")),
        background_color: color.map(str::to_owned),
    }
}

#[test]
fn provider_link_starts_external_flow_under_base_url() {
    assert_eq!(provider_init_url("/sonar", &provider("github", None)), "/sonar/sessions/init/github");
    assert_eq!(provider_init_url("", &provider("saml", None)), "/sessions/init/saml");
}

#[test]
fn provider_style_uses_background_color_when_set() {
    assert_eq!(provider_style(&provider("github", Some("#444444"))), "background-color: #444444");
    assert_eq!(provider_style(&provider("github", None)), "");
}

#[test]
fn credentials_are_forwarded_as_typed() {
    assert_eq!(credentials(" admin ", " pw "), (" admin ".to_owned(), " pw ".to_owned()));
    assert_eq!(credentials("", ""), (String::new(), String::new()));
}
