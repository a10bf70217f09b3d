use super::*;

fn github() -> IdentityProvider {
    IdentityProvider {
        key: "github".to_owned(),
        name: "GitHub".to_owned(),
        icon_path: None,
        background_color: Some("#444444".to_owned()),
    }
}

#[test]
fn starts_loading_without_providers() {
    assert_eq!(LoginFormState::default(), LoginFormState::Loading);
    assert!(LoginFormState::Loading.providers().is_none());
}

#[test]
fn successful_fetch_makes_form_ready() {
    let state = LoginFormState::Loading.resolve(Ok(vec![github()]));
    assert_eq!(state.providers().map(<[IdentityProvider]>::len), Some(1));
}

#[test]
fn empty_provider_list_still_renders_form() {
    let state = LoginFormState::Loading.resolve(Ok(Vec::new()));
    assert_eq!(state.providers(), Some(&[][..]));
}

#[test]
fn failed_fetch_keeps_loading() {
    let state = LoginFormState::Loading.resolve(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(state, LoginFormState::Loading);
}

#[test]
fn redirect_prefers_return_to() {
    assert_eq!(redirect_target(Some("/project/issues?id=x"), "/sonar/"), "/project/issues?id=x");
}

#[test]
fn redirect_falls_back_to_home_for_missing_or_empty_return_to() {
    assert_eq!(redirect_target(None, "/sonar/"), "/sonar/");
    assert_eq!(redirect_target(Some(""), "/"), "/");
}
