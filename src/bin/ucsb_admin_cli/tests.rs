#![deny(clippy::all, clippy::pedantic)]

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use httpmock::MockServer;
use reqwest::Url;
use tempfile::NamedTempFile;
use tracing::level_filters::LevelFilter;
use ucsb_admin::config::{BackendSettings, CacheSettings, LogFormat, LoggingSettings, Settings};
use ucsb_admin::resources::HelpRequest;

use crate::args::{
    Cli, HelpRequestFields, HelpRequestsCmd, OrganizationFields, OrganizationsCmd, OutputFormat,
};
use crate::client::{CliError, Ctx, build_ctx_from_cli};
use crate::handlers::{help_requests, organizations, whoami};

fn settings(url: &str, session_file: Option<PathBuf>) -> Settings {
    Settings {
        backend: BackendSettings {
            url: Url::parse(url).expect("url"),
            session_file,
            request_timeout: Duration::from_secs(5),
        },
        logging: LoggingSettings {
            level: LevelFilter::WARN,
            format: LogFormat::Compact,
        },
        cache: CacheSettings {
            capacity: NonZeroUsize::new(16).expect("capacity"),
        },
    }
}

fn ctx(server: &MockServer) -> Ctx {
    let cli = Cli::parse_from(["ucsb-admin-cli", "--format", "json", "whoami"]);
    build_ctx_from_cli(&cli, &settings(&server.base_url(), None)).expect("ctx")
}

fn tmp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tmp file");
    std::io::Write::write_all(&mut file, contents.as_bytes()).expect("write tmp");
    file
}

const HELP_REQUEST_17: &str = r#"{"id":17,"requesterEmail":"cgaucho@ucsb.edu","teamId":"s22-5pm-3","tableOrBreakoutRoom":"7","requestTime":"2022-04-20T17:35","explanation":"Need help with Swagger-ui","solved":false}"#;

#[tokio::test]
async fn session_file_takes_precedence_over_env() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/api/currentUser")
            .header("cookie", "JSESSIONID=from-file");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"user":{"id":1,"email":"phtcon@ucsb.edu"},"roles":[{"authority":"ROLE_USER"}]}"#);
    });

    let file = tmp_file("from-file\n");
    let cli = Cli::parse_from(["ucsb-admin-cli", "--session", "from-env", "whoami"]);
    let ctx = build_ctx_from_cli(
        &cli,
        &settings(&server.base_url(), Some(file.path().to_path_buf())),
    )?;

    whoami::handle(&ctx).await?;
    mock.assert();
    Ok(())
}

#[test]
fn missing_session_file_fails() {
    let cli = Cli::parse_from(["ucsb-admin-cli", "whoami"]);
    let err = build_ctx_from_cli(
        &cli,
        &settings(
            "http://localhost:8080",
            Some(PathBuf::from("/nonexistent/session")),
        ),
    )
    .err()
    .expect("missing file should fail");
    assert!(matches!(err, CliError::App(_)));
}

#[test]
fn create_requires_fields() {
    let fields = HelpRequestFields {
        requester_email: Some("a@ucsb.edu".into()),
        ..Default::default()
    };
    let err = help_requests::new_record(fields).expect_err("team id missing");
    assert!(matches!(err, CliError::MissingField("--team-id")));
}

#[test]
fn update_overlays_only_given_fields() {
    let current: HelpRequest = serde_json::from_str(HELP_REQUEST_17).expect("fixture");
    let fields = HelpRequestFields {
        solved: Some(true),
        ..Default::default()
    };
    let updated = help_requests::apply(fields, current.clone());
    assert!(updated.solved);
    assert_eq!(updated.id, Some(17));
    assert_eq!(updated.team_id, current.team_id);
}

#[test]
fn local_datetime_is_validated() {
    assert_eq!(
        crate::io::parse_local_datetime("2022-04-20T17:35").as_deref(),
        Ok("2022-04-20T17:35")
    );
    assert!(crate::io::parse_local_datetime("2022-04-20T17:35:10").is_ok());
    assert!(crate::io::parse_local_datetime("2022-13-01T00:00").is_err());
    assert!(crate::io::parse_local_datetime("yesterday").is_err());
}

#[test]
fn bad_datetime_is_rejected_by_parser() {
    let result = Cli::try_parse_from([
        "ucsb-admin-cli",
        "help-requests",
        "create",
        "--request-time",
        "noon",
    ]);
    assert!(result.is_err());
}

#[tokio::test]
async fn create_posts_form_fields_as_params() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/api/helprequests/post")
            .query_param("requesterEmail", "a@ucsb.edu")
            .query_param("teamId", "t1")
            .query_param("tableOrBreakoutRoom", "A")
            .query_param("explanation", "e")
            .query_param("solved", "false")
            .query_param_missing("requestTime");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"id":1,"requesterEmail":"a@ucsb.edu","teamId":"t1","tableOrBreakoutRoom":"A","explanation":"e","solved":false}"#);
    });

    let cmd = HelpRequestsCmd::Create {
        fields: HelpRequestFields {
            requester_email: Some("a@ucsb.edu".into()),
            team_id: Some("t1".into()),
            table_or_breakout_room: Some("A".into()),
            explanation: Some("e".into()),
            ..Default::default()
        },
    };
    help_requests::handle(&ctx(&server), cmd).await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn update_loads_then_puts_merged_record() -> Result<(), CliError> {
    let server = MockServer::start();
    let get = server.mock(|when, then| {
        when.method("GET")
            .path("/api/helprequests")
            .query_param("id", "17");
        then.status(200)
            .header("content-type", "application/json")
            .body(HELP_REQUEST_17);
    });
    let put = server.mock(|when, then| {
        when.method("PUT")
            .path("/api/helprequests")
            .query_param("id", "17")
            .json_body_includes(r#"{"solved":true,"teamId":"s22-5pm-3"}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(HELP_REQUEST_17.replace("\"solved\":false", "\"solved\":true"));
    });

    let cmd = HelpRequestsCmd::Update {
        id: "17".into(),
        fields: HelpRequestFields {
            solved: Some(true),
            ..Default::default()
        },
    };
    help_requests::handle(&ctx(&server), cmd).await?;
    get.assert();
    put.assert();
    Ok(())
}

#[tokio::test]
async fn delete_sends_identity() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("DELETE")
            .path("/api/helprequests")
            .query_param("id", "1");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"message":"HelpRequest with id 1 deleted"}"#);
    });

    help_requests::handle(&ctx(&server), HelpRequestsCmd::Delete { id: "1".into() }).await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn non_numeric_id_is_rejected_before_request() {
    let server = MockServer::start();
    let err = help_requests::handle(&ctx(&server), HelpRequestsCmd::Get { id: "abc".into() })
        .await
        .expect_err("invalid id");
    assert!(matches!(err, CliError::InvalidInput(_)));
}

#[tokio::test]
async fn failed_mutation_surfaces_page_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("POST").path("/api/ucsborganization/post");
        then.status(403).body("Forbidden");
    });

    let cmd = OrganizationsCmd::Create {
        org_code: "DS".into(),
        fields: OrganizationFields {
            org_translation_short: Some("Data Sci".into()),
            org_translation: Some("Data Science Club".into()),
            inactive: None,
        },
    };
    let err = organizations::handle(&ctx(&server), cmd)
        .await
        .expect_err("forbidden");
    assert!(matches!(err, CliError::Page(_)));
    assert!(err.to_string().contains("403"));
}

#[tokio::test]
async fn missing_organization_is_a_query_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET")
            .path("/api/ucsborganization")
            .query_param("orgCode", "ZZ");
        then.status(404)
            .body(r#"{"message":"UCSBOrganization with id ZZ not found"}"#);
    });

    let err = organizations::handle(
        &ctx(&server),
        OrganizationsCmd::Get {
            org_code: "ZZ".into(),
        },
    )
    .await
    .expect_err("not found");
    assert!(matches!(err, CliError::Query(ref text) if text.contains("404")));
}

#[test]
fn format_flag_parses() {
    let cli = Cli::parse_from(["ucsb-admin-cli", "articles", "list", "--format", "json"]);
    assert_eq!(cli.format, OutputFormat::Json);
}
