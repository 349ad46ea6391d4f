use clap::CommandFactory;
use theme::search::SearchIndexEntry;

use super::*;

fn scenario() -> SearchIndex {
    SearchIndex::new(vec![
        SearchIndexEntry {
            title: "Alpha Guide".into(),
            description: String::new(),
            tags: vec!["intro".into()],
            html: String::new(),
            slug: "alpha".into(),
        },
        SearchIndexEntry {
            title: "Beta".into(),
            description: "beta notes".into(),
            tags: Vec::new(),
            html: String::new(),
            slug: "beta".into(),
        },
    ])
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn search_args_parse() {
    let argv = ["sitekit-cli", "search", "--index", "idx.json", "--variant", "overlay", "alp"];
    let cli = Cli::try_parse_from(argv).unwrap();
    let Command::Search(args) = cli.command else {
        panic!("expected search command");
    };
    assert_eq!(args.source.index, "idx.json");
    assert!(matches!(args.variant, VariantArg::Overlay));
    assert_eq!(args.query, "alp");
}

#[test]
fn remote_sources_are_detected() {
    assert!(is_remote("https://example.com/static/search_index.json"));
    assert!(is_remote("http://127.0.0.1:5277/static/search_index.json"));
    assert!(!is_remote("public/static/search_index.json"));
}

#[test]
fn renders_links_like_the_page() {
    for variant in [SearchVariant::Inline, SearchVariant::Overlay] {
        let lines = render_search(scenario(), variant, "alp").unwrap();
        assert_eq!(lines, vec!["Alpha Guide\talpha.html".to_owned()]);
    }
}

#[test]
fn short_query_is_hidden() {
    assert_eq!(render_search(scenario(), SearchVariant::Inline, "al").unwrap(), vec!["(hidden)".to_owned()]);
}

#[test]
fn no_match_prints_placeholder() {
    let lines = render_search(scenario(), SearchVariant::Inline, "xyz123").unwrap();
    assert_eq!(lines, vec!["No results found".to_owned()]);
}

#[tokio::test]
async fn missing_file_is_a_read_error() {
    let err = load_index("definitely/not/here.json").await.unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
}

#[tokio::test]
async fn local_file_loads() {
    let path = std::env::temp_dir().join(format!("sitekit-cli-{}.json", std::process::id()));
    std::fs::write(&path, r#"[{"title":"Beta","slug":"beta"}]"#).unwrap();
    let index = load_index(&path.display().to_string()).await.unwrap();
    assert_eq!(index.len(), 1);
    std::fs::remove_file(path).unwrap();
}
