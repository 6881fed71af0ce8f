//! Render Pipeline Integration Tests
//!
//! Loads the fixture document from disk and runs it through the full
//! load → render → initial collapse pipeline, then drives the controller.

use portfolio_cv::interaction::{ClickTarget, DomPatch, ToggleState};
use portfolio_cv::lookup::find_publication;
use portfolio_cv::render::sections::featured::featured_publications;
use portfolio_cv::{App, CvData, DataStore, Mount, Page, RenderOptions};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/cv-data.json");
const TEMPLATE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/index.template.html");
const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/cv-data.json");

async fn load_fixture() -> CvData {
    DataStore::load(FIXTURE).await.expect("fixture should load")
}

fn options(page_size: usize, batch_size: usize) -> RenderOptions {
    RenderOptions {
        highlight_authors: vec!["Jordan Lee".to_string()],
        page_size,
        batch_size,
    }
}

async fn rendered_page(options: RenderOptions) -> (App, Page) {
    let mut app = App::from_data(load_fixture().await, options);
    let template = std::fs::read_to_string(TEMPLATE).expect("template should exist");
    let mut page = Page::from_template(template);
    app.render_page(&mut page);
    (app, page)
}

// ============================================================================
// Data and lookup
// ============================================================================

#[tokio::test]
async fn test_featured_is_year_descending_and_stable() {
    let data = load_fixture().await;
    let ids: Vec<&str> = featured_publications(&data).iter().map(|p| p.id.as_str()).collect();
    // c-rl and w-tie tie on 2022; conferences come first
    assert_eq!(ids, vec!["c-vision", "c-rl", "w-tie"]);
}

#[tokio::test]
async fn test_find_publication_prefers_conferences() {
    let data = load_fixture().await;
    let paper = find_publication(Some(&data), "c-rl").unwrap();
    assert_eq!(paper.title, "Replay Without Regret");
    assert!(find_publication(Some(&data), "c-missing").is_none());
    assert!(find_publication(None, "c-rl").is_none());
}

// ============================================================================
// Page rendering
// ============================================================================

#[tokio::test]
async fn test_full_page_fills_mounts() {
    let (_, page) = rendered_page(RenderOptions::default()).await;
    let html = page.render();

    assert!(!html.contains("<!-- mount:featured-container -->"));
    assert!(!html.contains("<!-- mount:talks-list -->"));
    assert!(!html.contains("<!-- mount:ui-patches -->"));
    // No research goal paragraph in the fixture
    assert!(html.contains("<!-- mount:about-research-goal -->"));
}

#[tokio::test]
async fn test_optional_fields_absent() {
    let (_, page) = rendered_page(RenderOptions::default()).await;
    let featured = page.content(Mount::Featured).unwrap();

    assert_eq!(featured.matches("class=\"featured-paper\"").count(), 3);
    assert_eq!(featured.matches("class=\"paper-image\"").count(), 1);
    assert_eq!(featured.matches("class=\"paper-abstract\"").count(), 1);
    assert!(featured.contains("id=\"abstract-btn-conferences-c-vision\""));
    assert!(featured.contains("CVPR 2024 · Oral"));

    // Industry positions render without mentors
    let industry = page.content(Mount::IndustryExperience).unwrap();
    assert!(!industry.contains("Mentors:"));
}

#[tokio::test]
async fn test_data_is_escaped() {
    let (_, page) = rendered_page(RenderOptions::default()).await;
    let industry = page.content(Mount::IndustryExperience).unwrap();
    assert!(industry.contains("Acme &amp; Co"));

    let featured = page.content(Mount::Featured).unwrap();
    assert!(featured.contains("&lt;b&gt;plasticity&lt;/b&gt;"));

    // Trusted paragraph goes in verbatim
    let current = page.content(Mount::AboutCurrent).unwrap();
    assert!(current.contains("<em>continual learning</em>"));
}

#[tokio::test]
async fn test_dates_and_highlighting() {
    let (_, page) = rendered_page(options(5, 5)).await;

    let research = page.content(Mount::ResearchExperience).unwrap();
    assert!(research.contains("Sep 2021–Present"));
    assert!(research.contains(r#"<a href="https://example.org/rivera" target="_blank"><span class="mentor">Dr. Rivera</span></a>"#));

    let press = page.content(Mount::Press).unwrap();
    assert!(press.contains("March 5, 2024"));

    let conferences = page.content(Mount::Conferences).unwrap();
    assert!(conferences.contains(r#"<strong class="author-self">Jordan Lee</strong>"#));
}

#[tokio::test]
async fn test_document_highlight_without_env_config() {
    // Only the document's about_config names the owner
    let (_, page) = rendered_page(RenderOptions::default()).await;
    let conferences = page.content(Mount::Conferences).unwrap();
    assert!(conferences.contains(r#"<strong class="author-self">Jordan Lee</strong>"#));
    assert!(!conferences.contains(r#"<strong class="author-self">Sam Park</strong>"#));
}

#[tokio::test]
async fn test_shipped_sample_renders() {
    let data = DataStore::load(SAMPLE).await.expect("sample should load");
    let fixture = load_fixture().await;
    assert_ne!(data, fixture);

    let mut app = App::from_data(data, RenderOptions::default());
    let template = std::fs::read_to_string(TEMPLATE).expect("template should exist");
    let mut page = Page::from_template(template);
    app.render_page(&mut page);

    for mount in [Mount::Featured, Mount::Conferences, Mount::AboutItems, Mount::UiPatches] {
        assert!(page.content(mount).is_some(), "{} left empty", mount.name());
    }
    let featured = page.content(Mount::Featured).unwrap();
    assert!(featured.contains(r#"<strong class="author-self">Alex Morgan</strong>"#));
}

#[tokio::test]
async fn test_about_items() {
    let (_, page) = rendered_page(RenderOptions::default()).await;
    let about = page.content(Mount::AboutItems).unwrap();

    // position, PhD, BSc, award, service, one interest, one past area;
    // the dangling position pointer is skipped
    assert!(about.contains("data-id=\"about-6\""));
    assert!(!about.contains("data-id=\"about-7\""));

    assert!(about.contains("PhD at"));
    assert!(about.contains("2021-2026 (expected)"));
    assert!(about.contains("BSc from"));
    assert!(about.contains("GPA: 3.9"));
    assert!(about.contains("Research Intern at"));
    assert!(about.contains("(continual RL)"));
    assert!(about.contains("Invited to <a href=\"https://example.org/hlf\" target=\"_blank\" data-no-toggle>Heidelberg Laureate Forum</a>"));

    let cta = page.content(Mount::HeroCta).unwrap();
    assert!(cta.contains(r##"<a href="#featured">featured projects</a>"##));
}

// ============================================================================
// Interaction
// ============================================================================

#[tokio::test]
async fn test_initial_collapse_after_render() {
    let (app, page) = rendered_page(RenderOptions::default()).await;
    let controller = &app.state().controller;

    for section in ["publications", "research-experience", "awards", "talks"] {
        assert_eq!(controller.section_state(section), Some(ToggleState::Collapsed));
    }
    assert_eq!(controller.subsection_state("workshops"), Some(ToggleState::Collapsed));

    let patches: Vec<serde_json::Value> =
        serde_json::from_str(page.content(Mount::UiPatches).unwrap()).unwrap();
    assert!(patches
        .iter()
        .any(|p| p["selector"] == "#talks .section-content" && p["value"] == "0"));
}

#[tokio::test]
async fn test_item_toggle_round_trip() {
    let (mut app, _) = rendered_page(RenderOptions::default()).await;
    let controller = app.controller_mut();

    let list = "research-exp-list";

    controller.click_item(list, "r-mila", ClickTarget::Region);
    assert_eq!(controller.item_state(list, "r-mila"), Some(ToggleState::Expanded));
    controller.click_item(list, "r-mila", ClickTarget::Region);
    assert_eq!(controller.item_state(list, "r-mila"), Some(ToggleState::Collapsed));

    assert!(controller.click_item(list, "r-mila", ClickTarget::Hyperlink).is_empty());
    assert_eq!(controller.item_state(list, "r-mila"), Some(ToggleState::Collapsed));

    // About items use their own markup contract
    let patches = controller.click_item("about-items", "about-0", ClickTarget::Region);
    assert!(patches.contains(&DomPatch::add_class("#about-items [data-id=\"about-0\"]", "expanded")));
}

#[tokio::test]
async fn test_shared_id_in_two_lists() {
    // c-rl appears in both conferences and workshops
    let (mut app, page) = rendered_page(RenderOptions::default()).await;
    let html = page.render();
    assert!(html.contains(r#"<ul id="conferences-list">"#));
    assert!(html.contains(r#"id="workshops-list""#));

    let controller = app.controller_mut();
    let patches = controller.click_item("workshops-list", "c-rl", ClickTarget::Region);
    assert!(patches.contains(&DomPatch::display(
        "#workshops-list [data-id=\"c-rl\"] .item-details",
        true
    )));
    assert_eq!(controller.item_state("workshops-list", "c-rl"), Some(ToggleState::Expanded));
    assert_eq!(controller.item_state("conferences-list", "c-rl"), Some(ToggleState::Collapsed));

    // The featured card and its abstract are keyed by sub-collection too
    let featured = page.content(Mount::Featured).unwrap();
    assert!(featured.contains(r#"data-id="featured-conferences-c-rl""#));
    assert!(!featured.contains(r#"data-id="featured-workshops-c-rl""#));
}

#[tokio::test]
async fn test_pagination_cycle() {
    // 7 conferences, 2 visible, then batches of 2: batches 1..=3
    let (mut app, page) = rendered_page(options(2, 2)).await;
    let conferences = page.content(Mount::Conferences).unwrap();
    assert!(conferences.contains("data-batch=\"3\""));
    assert!(!conferences.contains("data-batch=\"4\""));

    let controller = app.controller_mut();
    let label = |patches: &[DomPatch]| {
        patches.iter().find_map(|p| match p {
            DomPatch::SetText { text, .. } => Some(text.clone()),
            _ => None,
        })
    };

    assert_eq!(label(&controller.show_more("conferences-list")), None);
    assert_eq!(label(&controller.show_more("conferences-list")), None);
    assert_eq!(label(&controller.show_more("conferences-list")), Some("Show less".to_string()));

    let reset = controller.show_more("conferences-list");
    assert_eq!(label(&reset), Some("Show more".to_string()));
    assert!(reset.contains(&DomPatch::display("#conferences-list [data-batch]", false)));
}

#[tokio::test]
async fn test_abstract_toggle() {
    let (mut app, _) = rendered_page(RenderOptions::default()).await;
    let controller = app.controller_mut();

    let shown = controller.toggle_abstract("conferences-c-vision");
    assert!(shown.contains(&DomPatch::text("#abstract-btn-conferences-c-vision", "Hide Abstract")));
    let hidden = controller.toggle_abstract("conferences-c-vision");
    assert!(hidden.contains(&DomPatch::text("#abstract-btn-conferences-c-vision", "Show Abstract")));
    assert!(controller.toggle_abstract("conferences-c-rl").is_empty());
}
