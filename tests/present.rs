// tests/present.rs
//
// Static presenters over small views: HTML (both flavors), text, JSON.

use dmm_dashboard::loader::{self, LoadError};
use dmm_dashboard::present::{
    html::escape, HtmlFlavor, HtmlPresenter, JsonPresenter, NullPresenter, Presenter, TextPresenter,
};
use dmm_dashboard::record::{Flag, Record};
use dmm_dashboard::view::{FilterPatch, SortKey, ViewModel};

fn dataset() -> Vec<Record> {
    vec![
        Record {
            city: Some("Paris".into()),
            website: Some("https://gallica.bnf.fr".into()),
            iiif: Flag::True,
            ..Record::new("Alpha", "FR")
        },
        Record {
            city: Some("Berlin".into()),
            free_license: Flag::True,
            is_part_of: Flag::True,
            is_part_of_project_name: Some("Europeana <EU>".into()),
            is_part_of_url: Some("https://europeana.eu/?a=1&b=2".into()),
            ..Record::new("Beta & Sons", "DE")
        },
    ]
}

fn render(flavor: HtmlFlavor, vm: &ViewModel) -> String {
    let mut p = HtmlPresenter::new(flavor);
    p.present(&vm.view());
    p.into_html()
}

#[test]
fn html_initial_view_has_stats_options_and_rows() {
    let mut vm = ViewModel::new();
    let mut p = HtmlPresenter::new(HtmlFlavor::Generic);
    p.present(&vm.initialize(dataset()));
    let html = p.html();

    assert!(html.contains(r#"<span id="statTotal" class="fs-3 fw-bold">2</span>"#));
    assert!(html.contains(r#"id="statIIIF" class="fs-3 fw-bold">1<"#));
    assert!(html.contains(r#"id="statProjects" class="fs-3 fw-bold">1<"#));
    assert!(html.contains(r#"<select id="nationSelect""#));
    assert!(html.contains(r#"<option value="All">All</option>"#));
    assert!(html.contains(r#"<option value="DE">DE</option>"#));
    assert!(html.contains(r#"<span id="showingCount">2</span>"#));
    assert!(html.contains(r#"<tbody id="tableBody">"#));
    assert_eq!(html.matches("<tr><td>").count(), 2);

    // Alpha sorts first
    let a = html.find("Alpha").unwrap();
    let b = html.find("Beta &amp; Sons").unwrap();
    assert!(a < b);
}

#[test]
fn html_escapes_record_text() {
    let mut vm = ViewModel::new();
    vm.initialize(dataset());
    let html = render(HtmlFlavor::Generic, &vm);

    assert!(html.contains("Beta &amp; Sons"));
    assert!(html.contains("Europeana &lt;EU&gt;"));
    assert!(html.contains(r#"href="https://europeana.eu/?a=1&amp;b=2""#));
    assert!(!html.contains("<EU>"));
    assert_eq!(escape(r#"<a href="x">'"#), "&lt;a href=&quot;x&quot;&gt;&#39;");
}

#[test]
fn html_badges_and_links_per_flavor() {
    let mut vm = ViewModel::new();
    vm.initialize(dataset());

    let generic = render(HtmlFlavor::Generic, &vm);
    assert!(generic.contains("bg-iiif"));
    assert!(generic.contains("bg-free"));
    assert!(generic.contains(r#"href="https://gallica.bnf.fr""#));
    assert!(generic.contains("No URL"));
    assert!(!generic.contains("Standard Access"));

    let docs = render(HtmlFlavor::Docs, &vm);
    assert!(docs.contains("badge--iiif"));
    assert!(docs.contains("badge--open"));
    assert!(docs.contains(r#"class="visit-none">No URL"#));
}

#[test]
fn html_standard_access_when_no_badges() {
    let mut vm = ViewModel::new();
    vm.initialize(vec![Record::new("Plain", "IT")]);

    assert!(render(HtmlFlavor::Generic, &vm).contains("fst-italic\">Standard Access"));
    assert!(render(HtmlFlavor::Docs, &vm).contains("badge--standard\">Standard Access"));
}

#[test]
fn html_sort_indicator_and_aria() {
    let mut vm = ViewModel::new();
    vm.initialize(dataset());
    vm.set_sort(SortKey::Nation);
    vm.set_sort(SortKey::Nation);

    let generic = render(HtmlFlavor::Generic, &vm);
    assert!(generic.contains(r#"<th class="sortable active" data-sort="nation" data-sort-direction="desc">Location</th>"#));
    assert!(generic.contains(r#"<th class="sortable" data-sort="library">Library</th>"#));
    assert!(!generic.contains("aria-sort"));

    let docs = render(HtmlFlavor::Docs, &vm);
    assert!(docs.contains(r#"data-sort="nation" data-sort-direction="desc" aria-sort="descending""#));
    assert!(docs.contains(r#"data-sort="library" aria-sort="none""#));
}

#[test]
fn html_empty_state_replaces_table() {
    let mut vm = ViewModel::new();
    vm.initialize(dataset());
    vm.set_filter(FilterPatch::default().search("no such library"));

    let html = render(HtmlFlavor::Docs, &vm);
    assert!(html.contains(r#"<div id="emptyState""#));
    assert!(html.contains(r#"<span id="showingCount">0</span>"#));
    assert!(!html.contains("<table"));
    // options only come with initialize
    assert!(!html.contains("nationSelect"));
}

#[test]
fn html_load_failure_shows_message() {
    let err = loader::parse_records("not json", "<inline>").unwrap_err();
    let mut p = HtmlPresenter::new(HtmlFlavor::Generic);
    p.load_failed(&err);

    assert!(p.html().contains("Error loading data"));
    assert!(p.html().contains("malformed dataset in &lt;inline&gt;"));
}

#[test]
fn text_table_lists_visible_rows() {
    let mut vm = ViewModel::new();
    let mut p = TextPresenter::new();
    p.present(&vm.initialize(dataset()));
    let text = p.text();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Libraries: 2  Nations: 2  IIIF: 1  Projects: 1");
    assert_eq!(lines[1], "Nation options: DE, FR");
    assert_eq!(lines[2], "Project options: Europeana <EU>");
    assert!(lines[3].starts_with("Library"));
    assert!(lines[4].starts_with("Alpha "));
    assert!(lines[4].contains("IIIF"));
    assert!(lines[4].ends_with("https://gallica.bnf.fr"));
    assert!(lines[5].contains("Open"));
    assert!(lines[5].ends_with("No URL"));
    assert_eq!(lines.last(), Some(&"Showing 2"));
}

#[test]
fn text_empty_state() {
    let mut vm = ViewModel::new();
    vm.initialize(dataset());
    let mut p = TextPresenter::new();
    p.present(&vm.set_filter(FilterPatch::default().nation("NL")));

    assert_eq!(
        p.text(),
        "Libraries: 0  Nations: 0  IIIF: 0  Projects: 0\nNo libraries match the current filters.\n"
    );
}

#[test]
fn text_load_failure() {
    let err = LoadError::Transport { location: "data.json".into(), reason: "not found".into() };
    let mut p = TextPresenter::new();
    p.load_failed(&err);
    assert_eq!(p.text(), "Error loading data: failed to load data.json: not found\n");
}

#[test]
fn json_exports_visible_rows_in_order() {
    let mut vm = ViewModel::new();
    vm.initialize(dataset());
    vm.set_sort(SortKey::Library);
    vm.set_sort(SortKey::Library);

    let mut p = JsonPresenter::new();
    p.present(&vm.view());
    let v: serde_json::Value = serde_json::from_str(p.json()).unwrap();
    let names: Vec<&str> = v.as_array().unwrap().iter().map(|r| r["library"].as_str().unwrap()).collect();
    assert_eq!(names, ["Beta & Sons", "Alpha"]);
    assert_eq!(v[0]["is_part_of"], true);
}

#[test]
fn null_presenter_accepts_anything() {
    let mut vm = ViewModel::new();
    let mut p = NullPresenter;
    p.present(&vm.initialize(dataset()));
    p.load_failed(&LoadError::Transport { location: "x".into(), reason: "y".into() });
}
