//! Search box, loading indicator, error banner and result grid.
//!
//! The presenter owns the UI state machine; where results come from
//! ([`ResultsProvider`]) and how they are drawn ([`ResultsView`]) are injected.

mod provider;
mod terminal;

pub use provider::{mock_results, ApiResultsProvider, MockResultsProvider, ResultsProvider};
pub use terminal::TerminalView;

use tracing::{error, info};

use crate::models::ProductRecord;

pub const EMPTY_TERM_MESSAGE: &str = "Please enter a search term";
pub const NO_RESULTS_MESSAGE: &str = "No results found for your search term";
const FETCH_FAILED_PREFIX: &str = "An error occurred while fetching results.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Click,
    KeyPress(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterState {
    Idle,
    Loading,
    Success { count: usize },
    Error { message: String },
}

/// One cell of the result grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridItem {
    pub image_src: String,
    pub alt: String,
    pub title: String,
    pub link: Option<String>,
    pub price: Option<String>,
}

impl From<&ProductRecord> for GridItem {
    fn from(record: &ProductRecord) -> Self {
        Self {
            image_src: record.image_url.clone(),
            alt: record.title.clone(),
            title: record.title.clone(),
            link: record.link().map(str::to_string),
            price: record.price.as_ref().map(|p| p.to_string()),
        }
    }
}

/// The elements the presenter drives: image grid, loading indicator and error
/// message.
pub trait ResultsView {
    fn clear_grid(&mut self);
    fn append_item(&mut self, item: &GridItem);
    fn show_loading(&mut self);
    fn hide_loading(&mut self);
    fn show_error(&mut self, message: &str);
    fn hide_error(&mut self);
}

pub struct Presenter<V: ResultsView> {
    provider: Box<dyn ResultsProvider>,
    view: V,
    state: PresenterState,
}

impl<V: ResultsView> Presenter<V> {
    pub fn new(provider: Box<dyn ResultsProvider>, view: V) -> Self {
        Self {
            provider,
            view,
            state: PresenterState::Idle,
        }
    }

    pub fn state(&self) -> &PresenterState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Button clicks and Enter in the search field start a search.
    pub async fn handle_event(&mut self, event: UiEvent, input: &str) {
        match event {
            UiEvent::Click => self.perform_search(input).await,
            UiEvent::KeyPress(key) if key == "Enter" => self.perform_search(input).await,
            UiEvent::KeyPress(_) => {}
        }
    }

    pub async fn perform_search(&mut self, input: &str) {
        let term = input.trim();
        if term.is_empty() {
            self.view.show_error(EMPTY_TERM_MESSAGE);
            self.state = PresenterState::Idle;
            return;
        }

        self.view.clear_grid();
        self.view.hide_error();
        self.view.show_loading();
        self.state = PresenterState::Loading;

        let outcome = self.provider.fetch(term).await;

        let state = match outcome {
            Ok(products) => self.display_results(&products),
            Err(e) => {
                error!("Error fetching results for '{}': {:#}", term, e);
                let message = format!("{} {}", FETCH_FAILED_PREFIX, e);
                self.view.show_error(&message);
                PresenterState::Error { message }
            }
        };

        self.state = state;
        self.view.hide_loading();
    }

    fn display_results(&mut self, products: &[ProductRecord]) -> PresenterState {
        if products.is_empty() {
            self.view.show_error(NO_RESULTS_MESSAGE);
            return PresenterState::Error {
                message: NO_RESULTS_MESSAGE.to_string(),
            };
        }

        for product in products {
            self.view.append_item(&GridItem::from(product));
        }

        info!("Rendered {} results", products.len());
        PresenterState::Success {
            count: products.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Price, ProductId};
    use anyhow::anyhow;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum ViewOp {
        ClearGrid,
        Append(GridItem),
        ShowLoading,
        HideLoading,
        ShowError(String),
        HideError,
    }

    #[derive(Default)]
    struct RecordingView {
        ops: Vec<ViewOp>,
    }

    impl RecordingView {
        fn cells(&self) -> Vec<&GridItem> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    ViewOp::Append(item) => Some(item),
                    _ => None,
                })
                .collect()
        }
    }

    impl ResultsView for RecordingView {
        fn clear_grid(&mut self) {
            self.ops.push(ViewOp::ClearGrid);
        }
        fn append_item(&mut self, item: &GridItem) {
            self.ops.push(ViewOp::Append(item.clone()));
        }
        fn show_loading(&mut self) {
            self.ops.push(ViewOp::ShowLoading);
        }
        fn hide_loading(&mut self) {
            self.ops.push(ViewOp::HideLoading);
        }
        fn show_error(&mut self, message: &str) {
            self.ops.push(ViewOp::ShowError(message.to_string()));
        }
        fn hide_error(&mut self) {
            self.ops.push(ViewOp::HideError);
        }
    }

    enum Scripted {
        Records(Vec<ProductRecord>),
        Failure(&'static str),
    }

    struct ScriptedProvider {
        reply: Scripted,
        calls: Arc<AtomicUsize>,
        terms: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedProvider {
        fn new(reply: Scripted) -> (Self, Arc<AtomicUsize>, Arc<Mutex<Vec<String>>>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let terms = Arc::new(Mutex::new(Vec::new()));
            let provider = Self {
                reply,
                calls: Arc::clone(&calls),
                terms: Arc::clone(&terms),
            };
            (provider, calls, terms)
        }
    }

    #[async_trait]
    impl ResultsProvider for ScriptedProvider {
        async fn fetch(&self, term: &str) -> anyhow::Result<Vec<ProductRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.terms.lock().unwrap().push(term.to_string());
            match &self.reply {
                Scripted::Records(records) => Ok(records.clone()),
                Scripted::Failure(message) => Err(anyhow!(*message)),
            }
        }
    }

    fn record(n: usize, url: &str) -> ProductRecord {
        ProductRecord {
            id: ProductId::Ordinal(n),
            title: format!("Lamp {}", n),
            image_url: format!("https://m.media-amazon.com/images/I/{}.jpg", n),
            url: Some(url.to_string()),
            price: Some(Price(format!("${}.00", n))),
        }
    }

    #[tokio::test]
    async fn empty_input_never_reaches_the_provider() {
        let (provider, calls, _) = ScriptedProvider::new(Scripted::Records(vec![record(1, "#")]));
        let mut presenter = Presenter::new(Box::new(provider), RecordingView::default());

        presenter.handle_event(UiEvent::Click, "   ").await;

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(presenter.state(), &PresenterState::Idle);
        assert_eq!(
            presenter.view().ops,
            vec![ViewOp::ShowError(EMPTY_TERM_MESSAGE.to_string())]
        );
    }

    #[tokio::test]
    async fn successful_search_renders_cells_in_order() {
        let records = vec![record(1, "https://www.amazon.com/dp/1"), record(2, "#")];
        let (provider, _, terms) = ScriptedProvider::new(Scripted::Records(records));
        let mut presenter = Presenter::new(Box::new(provider), RecordingView::default());

        presenter
            .handle_event(UiEvent::KeyPress("Enter".to_string()), "  desk lamp ")
            .await;

        assert_eq!(terms.lock().unwrap().clone(), vec!["desk lamp".to_string()]);
        assert_eq!(presenter.state(), &PresenterState::Success { count: 2 });

        let ops = &presenter.view().ops;
        assert_eq!(
            &ops[..3],
            &[ViewOp::ClearGrid, ViewOp::HideError, ViewOp::ShowLoading]
        );
        assert_eq!(ops.last(), Some(&ViewOp::HideLoading));

        let cells = presenter.view().cells();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].title, "Lamp 1");
        assert_eq!(cells[0].alt, "Lamp 1");
        assert_eq!(cells[0].link.as_deref(), Some("https://www.amazon.com/dp/1"));
        assert_eq!(cells[0].price.as_deref(), Some("$1.00"));
        assert_eq!(cells[1].link, None);
    }

    #[tokio::test]
    async fn other_keys_do_not_search() {
        let (provider, calls, _) = ScriptedProvider::new(Scripted::Records(vec![record(1, "#")]));
        let mut presenter = Presenter::new(Box::new(provider), RecordingView::default());

        presenter
            .handle_event(UiEvent::KeyPress("a".to_string()), "lamp")
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(presenter.view().ops.is_empty());
    }

    #[tokio::test]
    async fn empty_results_show_the_no_results_message() {
        let (provider, _, _) = ScriptedProvider::new(Scripted::Records(Vec::new()));
        let mut presenter = Presenter::new(Box::new(provider), RecordingView::default());

        presenter.handle_event(UiEvent::Click, "lamp").await;

        assert_eq!(
            presenter.state(),
            &PresenterState::Error {
                message: NO_RESULTS_MESSAGE.to_string()
            }
        );
        let ops = &presenter.view().ops;
        assert!(ops.contains(&ViewOp::ShowError(NO_RESULTS_MESSAGE.to_string())));
        assert_eq!(ops.last(), Some(&ViewOp::HideLoading));
    }

    #[tokio::test]
    async fn provider_failure_is_wrapped_and_loading_cleared() {
        let (provider, _, _) = ScriptedProvider::new(Scripted::Failure(
            "No products found or Amazon blocked the request",
        ));
        let mut presenter = Presenter::new(Box::new(provider), RecordingView::default());

        presenter.handle_event(UiEvent::Click, "lamp").await;

        let expected = "An error occurred while fetching results. \
                        No products found or Amazon blocked the request"
            .to_string();
        assert_eq!(
            presenter.state(),
            &PresenterState::Error {
                message: expected.clone()
            }
        );
        let ops = &presenter.view().ops;
        assert!(ops.contains(&ViewOp::ShowError(expected)));
        assert_eq!(ops.last(), Some(&ViewOp::HideLoading));
        assert!(presenter.view().cells().is_empty());
    }

    #[tokio::test]
    async fn new_search_clears_the_previous_grid() {
        let (provider, calls, _) = ScriptedProvider::new(Scripted::Records(vec![record(1, "#")]));
        let mut presenter = Presenter::new(Box::new(provider), RecordingView::default());

        presenter.handle_event(UiEvent::Click, "lamp").await;
        presenter.handle_event(UiEvent::Click, "desk").await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        let clears = presenter
            .view()
            .ops
            .iter()
            .filter(|op| **op == ViewOp::ClearGrid)
            .count();
        assert_eq!(clears, 2);
    }

    #[tokio::test]
    async fn mock_provider_fills_the_grid() {
        let provider = MockResultsProvider::new(Duration::ZERO);
        let mut presenter = Presenter::new(Box::new(provider), RecordingView::default());

        presenter.handle_event(UiEvent::Click, "shoes").await;

        assert_eq!(presenter.state(), &PresenterState::Success { count: 12 });
        let cells = presenter.view().cells();
        assert_eq!(cells[0].title, "shoes - Product 1");
        assert_eq!(cells[11].title, "shoes - Product 12");
        assert!(cells.iter().all(|cell| cell.link.is_none()));
    }
}
