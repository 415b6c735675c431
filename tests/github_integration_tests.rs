use mockito::{Matcher, Server};
use rendertemplates::config::GlobalConfig;
use rendertemplates::constants::github;
use rendertemplates::error::Error;
use rendertemplates::loader::GithubLoader;
use rendertemplates::template::{Pipeline, PipelineOptions};
use std::fs;
use tempfile::TempDir;
use test_log::test;

fn loader(server: &Server, base_path: &str) -> GithubLoader {
    GithubLoader::new(base_path, Some("token".into()))
        .unwrap()
        .with_api_url(&server.url())
        .unwrap()
}

#[test]
fn test_config_loaded_from_github() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/repos/kyma-project/test-infra/contents/templates/config.yaml")
        .match_query(Matcher::UrlEncoded("ref".into(), github::REF.into()))
        .match_header("accept", github::RAW_MEDIA_TYPE)
        .with_status(200)
        .with_body("global:\n  region: eu\n")
        .create();

    let config = GlobalConfig::load(&loader(&server, github::CONFIG_DIR), github::CONFIG_FILE).unwrap();

    mock.assert();
    assert_eq!(config.global["region"], "eu");
}

#[test]
fn test_remote_template_is_fetched_once() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/repos/kyma-project/test-infra/contents/templates/templates/job.tpl")
        .match_query(Matcher::UrlEncoded("ref".into(), github::REF.into()))
        .match_header("authorization", "Bearer token")
        .with_status(200)
        .with_body("name: {{ Values.name }}\n")
        .expect(1)
        .create();

    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("jobs.yaml");
    fs::write(
        &data_file,
        "templates:\n  - fromTo:\n      - {from: job.tpl, to: a.yaml}\n      - {from: job.tpl, to: b.yaml}\n    render:\n      - values: {name: build}\n",
    )
    .unwrap();

    let loader = loader(&server, github::TEMPLATES_DIR);
    let mut pipeline = Pipeline::new(&loader, PipelineOptions::default());
    let rendered = pipeline.run(GlobalConfig::default(), &[&data_file], dir.path().to_path_buf()).unwrap();

    mock.assert();
    assert_eq!(rendered.len(), 2);
    for name in ["a.yaml", "b.yaml"] {
        assert_eq!(
            fs::read_to_string(dir.path().join(name)).unwrap(),
            "# Code generated by rendertemplates. DO NOT EDIT.\n\nname: build\n"
        );
    }
}

#[test]
fn test_missing_remote_template_aborts() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", Matcher::Any)
        .with_status(404)
        .create();

    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("jobs.yaml");
    fs::write(
        &data_file,
        "templates:\n  - fromTo: [{from: gone.tpl, to: gone.yaml}]\n    render: [{values: {}}]\n",
    )
    .unwrap();

    let loader = loader(&server, github::TEMPLATES_DIR);
    let err = Pipeline::new(&loader, PipelineOptions::default())
        .run(GlobalConfig::default(), &[&data_file], dir.path().to_path_buf())
        .unwrap_err();

    mock.assert();
    match err {
        Error::RenderError { e, .. } => assert!(matches!(*e, Error::SourceFetchError { .. })),
        other => panic!("Expected RenderError, got: {other:?}"),
    }
    assert!(!dir.path().join("gone.yaml").exists());
}
