//! Integration tests for the extractor pipeline

use arxiv_harvest::config::ExtractorConfig;
use arxiv_harvest::extract::run_extraction;
use arxiv_harvest::output::render_report;
use arxiv_harvest::storage::{FsPageStore, PageStore};
use arxiv_harvest::Record;
use tempfile::TempDir;

const PAGE_ONE: &str = r##"<html><body><ol class="breathe-horizontal">
<li class="arxiv-result">
  <p class="list-title is-inline-block"><a href="https://arxiv.org/abs/2501.00001">arXiv:2501.00001</a></p>
  <div class="tags is-inline-block">
    <span class="tag is-small is-link tooltip is-tooltip-top" data-tooltip="Neurons and Cognition">q-bio.NC</span>
  </div>
  <p class="title is-5 mathjax">First paper</p>
  <p class="authors"><span>Authors:</span> <a href="/a/1">Ada Lovelace</a>, <a href="/a/2">Alan Turing</a></p>
  <p class="abstract mathjax">
    <span id="2501.00001v1-abstract-short">Short&hellip; <a class="is-size-7">More</a></span>
    <span id="2501.00001v1-abstract-full">The full abstract. <a class="is-size-7">Less</a></span>
  </p>
  <p class="is-size-7"><span>Submitted</span> 5 January, 2025; <span>originally announced</span> January 2025.</p>
</li>
<li class="arxiv-result">
  <p class="title is-5 mathjax">Second paper</p>
  <p class="is-size-7"><span>Submitted</span> 9 Febr, 2025; <span>originally announced</span> February 2025.</p>
</li>
</ol></body></html>"##;

const PAGE_TWO: &str = r##"<html><body><ol>
<li class="arxiv-result">
  <p class="list-title"><a href="https://arxiv.org/abs/2502.00003">arXiv:2502.00003</a></p>
  <p class="title">Third paper</p>
  <p class="abstract"><span id="2502.00003v1-abstract-short">Only short. <a class="is-size-7">More</a></span></p>
</li>
</ol></body></html>"##;

fn extractor_config(tmp: &TempDir) -> ExtractorConfig {
    ExtractorConfig {
        input_dir: tmp.path().join("pages").to_string_lossy().into_owned(),
        report_path: tmp.path().join("out").join("report.md").to_string_lossy().into_owned(),
        file_extension: "html".to_string(),
    }
}

fn seed_pages(tmp: &TempDir) {
    let mut store = FsPageStore::create(tmp.path().join("pages")).unwrap();
    store.write_page("page_0001.html", PAGE_ONE).unwrap();
    store.write_page("page_0002.html", PAGE_TWO).unwrap();
    store.write_page("README.txt", "not a page").unwrap();
}

#[test]
fn test_report_from_stored_pages() {
    let tmp = TempDir::new().unwrap();
    seed_pages(&tmp);

    let summary = run_extraction(&extractor_config(&tmp)).unwrap();
    assert_eq!(summary.pages_read, 2);
    assert_eq!(summary.records, 3);

    let report = std::fs::read_to_string(tmp.path().join("out").join("report.md")).unwrap();
    let expected = "\
### Title: First paper
> **arXiv**: arXiv:2501.00001
> **Authors**: Ada Lovelace, Alan Turing
> **First submission**: 2025-01-05
> **First announcement**: 2025-01
> **Categories**: q-bio.NC
> **Abstract**: The full abstract.

### Title: Second paper
> **arXiv**: 
> **Authors**: 
> **First submission**: 9 Febr, 2025
> **First announcement**: 2025-02
> **Categories**: 
> **Abstract**: 

### Title: Third paper
> **arXiv**: arXiv:2502.00003
> **Authors**: 
> **First submission**: 
> **First announcement**: 
> **Categories**: 
> **Abstract**: Only short.

";
    assert_eq!(report, expected);
}

#[test]
fn test_rerun_produces_identical_report() {
    let tmp = TempDir::new().unwrap();
    seed_pages(&tmp);
    let config = extractor_config(&tmp);
    let report_path = tmp.path().join("out").join("report.md");

    run_extraction(&config).unwrap();
    let first = std::fs::read(&report_path).unwrap();
    run_extraction(&config).unwrap();
    let second = std::fs::read(&report_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_empty_directory_gives_empty_report() {
    let tmp = TempDir::new().unwrap();
    FsPageStore::create(tmp.path().join("pages")).unwrap();

    let summary = run_extraction(&extractor_config(&tmp)).unwrap();

    assert_eq!(summary.pages_read, 0);
    assert_eq!(summary.records, 0);
    assert_eq!(
        std::fs::read_to_string(tmp.path().join("out").join("report.md")).unwrap(),
        render_report(&Vec::<Record>::new())
    );
}
