use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("arguments should parse")
}

#[test]
fn activity_arguments_map_to_options() {
    let cli = parse(&["sonar-web", "activity", "my_project", "--category", "VERSION", "--page", "2", "--page-size", "50"]);
    let Command::Activity(args) = cli.command else {
        panic!("expected activity command");
    };
    assert_eq!(args.project, "my_project");
    assert_eq!(args.options(), ActivityOptions::default().with_category("VERSION").with_page(2, 50));
}

#[test]
fn activity_without_flags_sends_only_project() {
    let cli = parse(&["sonar-web", "activity", "my_project"]);
    let Command::Activity(args) = cli.command else {
        panic!("expected activity command");
    };
    let query = wire::activity_query(&args.project, Some(&args.options()));
    assert_eq!(query, vec![("project", "my_project".to_owned())]);
}

#[test]
fn base_url_defaults_to_local_server() {
    let cli = parse(&["sonar-web", "--base-url", "http://ci.example/sonar/", "providers"]);
    assert_eq!(cli.base_url, "http://ci.example/sonar/");
    assert_eq!(
        endpoint_url(&cli.base_url, wire::IDENTITY_PROVIDERS),
        "http://ci.example/sonar/api/users/identity_providers"
    );
}

#[test]
fn recognize_parses_verb_case_insensitively() {
    let cli = parse(&["sonar-web", "routes", "recognize", "/api/events/5", "--verb", "delete"]);
    let Command::Routes(RoutesCommand { command: RoutesSubcommand::Recognize { path, verb } }) = cli.command else {
        panic!("expected routes recognize");
    };
    assert_eq!(path, "/api/events/5");
    assert_eq!(verb, Verb::Delete);
}

#[test]
fn recognize_rejects_unknown_verb() {
    assert!(Cli::try_parse_from(["sonar-web", "routes", "recognize", "/api", "--verb", "PATCH"]).is_err());
}

#[test]
fn route_listing_has_one_line_per_route() {
    let table = routing::legacy::legacy_routes().expect("legacy table");
    let lines = route_listing(&table);
    assert_eq!(lines.len(), table.routes().len());
    assert!(lines[0].contains("api/events#index"));
    assert!(lines.last().is_some_and(|line| line.contains(":controller#:action")));
}

#[tokio::test]
async fn activity_goes_through_the_shared_client_and_reports_network_failure() {
    // Port 9 (discard) is closed on test hosts, so the connect is refused.
    let transport = HttpTransport::new("http://127.0.0.1:9");
    let err = get_project_activity(&transport, "my_project", None).await.expect_err("nothing listens");
    assert!(matches!(err, ApiError::Network(_)));
}

#[test]
fn api_errors_surface_unchanged() {
    let err = CliError::from(ApiError::Status { path: wire::IDENTITY_PROVIDERS.to_owned(), status: 401 });
    assert_eq!(err.to_string(), "/api/users/identity_providers returned HTTP 401");
}
