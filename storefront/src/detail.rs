//! Reactive state of the product detail page.
//!
//! The page owns one `RwSignal<DetailView>`. Route changes, the size
//! selector and the quantity counter all go through the functions here.

use brew_commerce::prelude::*;
use brew_observability::StructuredLogger;
use leptos::callback::Callback;
use leptos::prelude::*;

/// Apply a route parameter change and log where the view ended up.
pub fn follow_route(
    detail: RwSignal<DetailView>,
    catalog: &Catalog,
    slug: Option<&str>,
    logger: &StructuredLogger,
) {
    detail.update(|view| view.on_route(catalog, slug));

    let logger = match slug {
        Some(slug) => logger.clone().with_route(product_path(slug)),
        None => logger.clone(),
    };
    detail.with_untracked(|view| log_resolution(&logger, view));
}

fn log_resolution(logger: &StructuredLogger, view: &DetailView) {
    match view {
        DetailView::Resolving => logger.debug("product detail waiting for slug"),
        DetailView::NotFound { slug } => logger
            .info_builder("product not found")
            .field("slug", slug.as_str())
            .emit(),
        DetailView::Loaded(selection) => logger
            .debug_builder("product detail resolved")
            .field("slug", selection.product().slug.as_str())
            .field("size", selection.selected_size().name.as_str())
            .field_i64("quantity", i64::from(selection.quantity().get()))
            .emit(),
    }
}

/// The chosen size, if a product is loaded.
pub fn selected_size(detail: RwSignal<DetailView>) -> Memo<Option<Size>> {
    Memo::new(move |_| detail.with(|view| view.selection().map(|s| s.selected_size().clone())))
}

/// Current quantity; 1 while nothing is loaded.
pub fn quantity(detail: RwSignal<DetailView>) -> Memo<u32> {
    Memo::new(move |_| detail.with(|view| view.selection().map_or(1, |s| s.quantity().get())))
}

/// Formatted total, empty while nothing is loaded.
pub fn total_display(detail: RwSignal<DetailView>) -> Memo<String> {
    Memo::new(move |_| {
        detail.with(|view| {
            view.selection()
                .and_then(|s| s.total().ok())
                .map(|total| total.display())
                .unwrap_or_default()
        })
    })
}

/// Handlers the detail page passes to the size selector and the counter.
#[derive(Clone, Copy)]
pub struct DetailActions {
    pub on_select: Callback<Size>,
    pub on_plus: Callback<()>,
    pub on_min: Callback<()>,
}

impl DetailActions {
    pub fn new(detail: RwSignal<DetailView>, logger: StructuredLogger) -> Self {
        let on_select = Callback::new(move |size: Size| {
            detail.update(|view| {
                if let Some(selection) = view.selection_mut() {
                    if let Err(err) = selection.select_size(&size.name) {
                        logger
                            .warn_builder("size selection rejected")
                            .field("error", err.to_string())
                            .emit();
                    }
                }
            });
        });
        let on_plus = Callback::new(move |()| {
            detail.update(|view| {
                if let Some(selection) = view.selection_mut() {
                    selection.increment();
                }
            });
        });
        let on_min = Callback::new(move |()| {
            detail.update(|view| {
                if let Some(selection) = view.selection_mut() {
                    selection.decrement();
                }
            });
        });

        Self {
            on_select,
            on_plus,
            on_min,
        }
    }
}
