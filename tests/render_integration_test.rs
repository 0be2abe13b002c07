use anyhow::Result;
use httpmock::prelude::*;
use profile_page::core::mounts::ids;
use profile_page::{
    CliConfig, Document, HttpProfileLoader, LocalStorage, PagePipeline, PageRenderer, PageShell,
    ProfileError, TomlConfig,
};
use tempfile::TempDir;

fn config_for(server: &MockServer, output_path: &str) -> CliConfig {
    CliConfig {
        base_url: server.url("/"),
        output_path: output_path.to_string(),
        year: Some(2024),
        timeout_seconds: 5,
        ..CliConfig::default()
    }
}

fn renderer_for(
    config: CliConfig,
) -> Result<PageRenderer<PagePipeline<HttpProfileLoader, LocalStorage, CliConfig>>> {
    let loader = HttpProfileLoader::from_config(&config)?;
    let storage = LocalStorage::new(config.output_path.clone());
    let shell = PageShell::new(config.stylesheet.clone());
    Ok(PageRenderer::new(
        PagePipeline::new(loader, storage, config),
        shell,
    ))
}

fn read_output(output_path: &str) -> Result<String> {
    let full_path = std::path::Path::new(output_path).join("index.html");
    Ok(std::fs::read_to_string(full_path)?)
}

fn text_of(doc: &Document, id: &str) -> String {
    doc.get_element_by_id(id)
        .map(|node| doc.text_content(node))
        .unwrap_or_default()
}

#[tokio::test]
async fn test_end_to_end_render_with_real_http() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/data/profile.json")
            .header("cache-control", "no-store");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "pageTitle": "CV",
                "name": "Jane Mariner",
                "role": "Chief Officer",
                "links": [
                    {"text": "Print", "type": "print", "primary": true},
                    {"text": "LinkedIn", "href": "https://linkedin.example/jane", "type": "external"}
                ],
                "summary": ["One", "Two"],
                "seaService": [{"period": "2020", "vessel": "MV A", "rank": "C/O", "bullets": ["Cargo ops"]}],
                "projects": [{"name": "X", "bullets": ["did a thing"], "href": "https://e.g/x", "hrefText": "repo"}],
                "skills": ["ECDIS", "Rust"],
                "certificates": [{"k": "STCW", "v": "II/2"}],
                "education": [{"name": "Academy", "year": 2012}],
                "highlights": ["Safe"]
            }));
    });

    let renderer = renderer_for(config_for(&server, &output_path))?;
    let written = renderer.run().await?;

    api_mock.assert();
    assert!(written.ends_with("index.html"));

    let html = read_output(&output_path)?;
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("<title>CV</title>"));
    assert!(html.contains(r#"<h1 id="name">Jane Mariner</h1>"#));
    assert!(html.contains(
        r##"<a class="btn primary" href="#" onclick="event.preventDefault(); window.print();">Print</a>"##
    ));
    assert!(html.contains(
        r#"<a class="btn" href="https://linkedin.example/jane" target="_blank" rel="noreferrer">LinkedIn</a>"#
    ));
    assert!(html.contains(r#"<ul id="summary"><li>One</li><li>Two</li></ul>"#));
    assert!(html.contains(r#"<div class="hint">Link: <a href="https://e.g/x" target="_blank" rel="noreferrer">repo</a></div>"#));
    assert!(html.contains(r#"<div class="when">2012</div>"#));
    assert!(html.contains(r#"<span id="y">2024</span> <span id="footer-name">Jane Mariner</span>"#));
    assert!(!html.contains("Failed to load profile"));

    Ok(())
}

#[tokio::test]
async fn test_http_404_writes_diagnostic_page_only() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/data/profile.json");
        then.status(404);
    });

    let renderer = renderer_for(config_for(&server, &output_path))?;
    let err = renderer.run().await.unwrap_err();

    api_mock.assert();
    assert!(matches!(err, ProfileError::Status { status: 404, .. }));
    assert_eq!(err.exit_code(), 2);

    let html = read_output(&output_path)?;
    assert!(html.contains("<h1>Failed to load profile</h1>"));
    assert!(html.contains("HTTP 404</pre>"));
    for id in ids::ALL {
        assert!(
            !html.contains(&format!("id=\"{}\"", id)),
            "mount point #{} should not survive",
            id
        );
    }

    Ok(())
}

#[tokio::test]
async fn test_invalid_json_shows_parse_error_verbatim() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/data/profile.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("{\"name\": \"Jane\",}");
    });

    let temp_dir = TempDir::new()?;
    let renderer = renderer_for(config_for(&server, temp_dir.path().to_str().unwrap()))?;
    let (page, err) = renderer.render().await.unwrap_err();

    api_mock.assert();
    assert!(matches!(err, ProfileError::Parse(_)));

    let expected = serde_json::from_str::<serde_json::Value>("{\"name\": \"Jane\",}")
        .unwrap_err()
        .to_string();
    let html = page.to_html();
    assert!(html.contains(&expected));
    assert!(html.contains("<h1>Failed to load profile</h1>"));
    assert!(page.get_element_by_id(ids::NAME).is_none());

    Ok(())
}

#[tokio::test]
async fn test_sparse_profile_renders_defaults() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/cv/data/profile.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "name": "A. Engineer", "skills": ["Go", "Rust"] }));
    });

    let temp_dir = TempDir::new()?;
    let config = CliConfig {
        base_url: server.url("/cv"),
        ..config_for(&server, temp_dir.path().to_str().unwrap())
    };
    let page = renderer_for(config)?.render().await.map_err(|(_, e)| e)?;

    assert_eq!(text_of(&page, ids::NAME), "A. Engineer");
    assert_eq!(text_of(&page, ids::SKILLS), "GoRust");
    assert_eq!(text_of(&page, ids::SUMMARY), "");
    assert_eq!(text_of(&page, ids::PAGE_TITLE), "Resume");
    assert_eq!(text_of(&page, ids::SUMMARY_TITLE), "Summary");
    assert_eq!(text_of(&page, ids::FOOTER_NAME), "A. Engineer");

    let pdf_link = page.get_element_by_id(ids::PDF_LINK).unwrap();
    assert_eq!(page.get_attribute(pdf_link, "href"), Some("./resume.pdf"));

    Ok(())
}

#[tokio::test]
async fn test_toml_config_drives_render() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/site/profile.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "name": "T. Oml" }));
    });

    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().replace('\\', "/");
    let config = TomlConfig::from_toml_str(&format!(
        r#"
[site]
base_url = "{}"
profile_path = "site/profile.json"
stylesheet = "css/cv.css"
year = 2001

[output]
output_path = "{}"
output_file = "cv.html"
"#,
        server.url("/"),
        output_path
    ))?;

    let loader = HttpProfileLoader::from_config(&config)?;
    let storage = LocalStorage::new(output_path.clone());
    let renderer = PageRenderer::new(
        PagePipeline::new(loader, storage, config),
        PageShell::new("css/cv.css"),
    );
    renderer.run().await?;

    api_mock.assert();
    let html = std::fs::read_to_string(std::path::Path::new(&output_path).join("cv.html"))?;
    assert!(html.contains(r#"<link rel="stylesheet" href="css/cv.css">"#));
    assert!(html.contains(r#"<span id="y">2001</span> <span id="footer-name">T. Oml</span>"#));

    Ok(())
}
