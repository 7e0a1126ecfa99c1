//! Fixtures shared by the integration tests

use product_grid::config::SourceConfig;

/// One organic search result in the current results-page markup.
#[allow(dead_code)]
pub fn result_item(n: usize) -> String {
    format!(
        r#"<div data-asin="B{n:04}" data-component-type="s-search-result" class="sg-col-4-of-24 s-result-item s-asin">
  <div class="s-product-image-container">
    <img class="s-image" src="https://m.media-amazon.com/images/I/{n}.jpg" alt="Result {n}">
  </div>
  <h2 class="a-size-base-plus a-spacing-none">
    <a class="a-link-normal s-line-clamp-4" href="/Result-{n}/dp/B{n:04}/ref=sr_1_{n}">
      <span class="a-text-normal">Result {n}</span>
    </a>
  </h2>
  <span class="a-price" data-a-size="xl"><span class="a-offscreen">${n}.49</span></span>
</div>"#
    )
}

/// A results page holding `count` organic results.
#[allow(dead_code)]
pub fn results_page(count: usize) -> String {
    let items: Vec<String> = (1..=count).map(result_item).collect();
    format!(
        r#"<!DOCTYPE html>
<html lang="en-us">
<head><title>Amazon.com : lamp</title></head>
<body>
  <div class="s-main-slot s-result-list s-search-results sg-row">
    {}
  </div>
</body>
</html>"#,
        items.join("\n")
    )
}

/// Source configuration pointed at a local mock server.
#[allow(dead_code)]
pub fn source_config(base_url: &str) -> SourceConfig {
    SourceConfig {
        base_url: base_url.to_string(),
        ..SourceConfig::default()
    }
}
