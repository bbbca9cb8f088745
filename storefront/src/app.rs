//! Application shell, routes and pages.

use brew_commerce::prelude::*;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

use crate::components::{CatalogCard, QuantityCounter, SizeSelector};
use crate::detail::{follow_route, quantity, selected_size, total_display, DetailActions};
use crate::motion::{Motion, PageTransition, Transition, TransitionLink};
use crate::state::Storefront;

// ============================================================================
// Shell (SSR entry point)
// ============================================================================

#[cfg(feature = "ssr")]
pub fn shell(options: leptos::config::LeptosOptions) -> impl IntoView {
    use leptos::hydration::{AutoReload, HydrationScripts};

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options=options.clone() root=""/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

// ============================================================================
// App Component
// ============================================================================

/// The storefront over the embedded settings and coffee catalog.
#[component]
pub fn App() -> impl IntoView {
    view! { <StorefrontApp storefront=Storefront::load()/> }
}

/// The storefront over explicitly supplied state.
#[component]
pub fn StorefrontApp(storefront: Storefront) -> impl IntoView {
    provide_meta_context();
    provide_context(PageTransition::new(&storefront.config.motion));

    let title = storefront.config.store.title.clone();
    let description = storefront.config.store.description.clone();
    provide_context(storefront);

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Stylesheet id="leptos" href="/pkg/brew_storefront.css"/>
        <Meta name="description" content=description/>
        <Title text=title/>

        <Router>
            <main class="storefront">
                <Routes fallback>
                    <Route path=path!("") view=ProductListPage/>
                    <Route path=path!("/product/:slug") view=ProductDetailPage/>
                </Routes>
            </main>
        </Router>
    }
}

// ============================================================================
// Pages
// ============================================================================

/// All products as navigable cards.
#[component]
fn ProductListPage() -> impl IntoView {
    let storefront = expect_context::<Storefront>();
    let cards = product_cards(&storefront.catalog);
    let card_motion = Transition::fade_up().with_stagger(storefront.config.motion.list_stagger());

    storefront
        .logger
        .debug_builder("product list rendered")
        .field_i64("products", cards.len() as i64)
        .emit();

    view! {
        <section class="product-list">
            <Motion transition=Transition::fade_up() class="product-list__heading">
                <h2>{storefront.config.store.heading.clone()}</h2>
            </Motion>
            <div class="product-grid">
                {cards.into_iter().enumerate().map(|(index, card)| {
                    view! {
                        <Motion transition=card_motion index=index class="product-grid__item">
                            <CatalogCard card=card/>
                        </Motion>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// One product, resolved from the `slug` route parameter.
#[component]
fn ProductDetailPage() -> impl IntoView {
    let storefront = expect_context::<Storefront>();
    let params = use_params_map();
    let slug = Memo::new(move |_| params.with(|p| p.get("slug")));

    let detail = RwSignal::new(DetailView::resolve(
        &storefront.catalog,
        slug.get_untracked().as_deref(),
    ));

    let catalog = storefront.catalog.clone();
    let logger = storefront.logger.clone();
    Effect::new(move |_| {
        let slug = slug.get();
        follow_route(detail, &catalog, slug.as_deref(), &logger);
    });

    let product = Memo::new(move |_| detail.with(|view| view.product().cloned()));

    view! {
        {move || product.get().map(|product| view! { <ProductDetail product=product detail=detail/> })}
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_wasi::response::ResponseOptions>() {
            resp.set_status(leptos_wasi::prelude::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href=HOME_PATH>"Back to Product List"</a>
        </div>
    }
}

// ============================================================================
// Product Detail
// ============================================================================

#[component]
fn ProductDetail(product: Product, detail: RwSignal<DetailView>) -> impl IntoView {
    let storefront = expect_context::<Storefront>();
    let block = Transition::fade_up().with_stagger(storefront.config.motion.detail_stagger());

    let selected = selected_size(detail);
    let quantity = quantity(detail);
    let total = total_display(detail);
    let DetailActions {
        on_select,
        on_plus,
        on_min,
    } = DetailActions::new(detail, storefront.logger.clone());

    let image_src = product.image_src();
    let title = product.title.clone();
    let image_alt = title.clone();
    let description = product.description.clone();
    let sizes = product.sizes().to_vec();

    view! {
        <Motion transition=Transition::page() class="product-detail">
            <div class="product-detail__media">
                <Motion transition=Transition::slide_in()>
                    <img src=image_src alt=image_alt width="485" height="485"/>
                </Motion>
            </div>
            <div class="product-detail__info">
                <Motion transition=block index=0>
                    <TransitionLink href=HOME_PATH class="product-detail__back">
                        "Back to Product List"
                    </TransitionLink>
                </Motion>
                <Motion transition=block index=1>
                    <h1 class="product-detail__title">{title}</h1>
                </Motion>
                <Motion transition=block index=2>
                    <p class="product-detail__description">{description}</p>
                </Motion>
                <Motion transition=block index=3>
                    <SizeSelector
                        sizes=sizes
                        selected=selected
                        on_select=on_select
                        stagger=storefront.config.motion.detail_stagger()
                    />
                </Motion>
                <Motion transition=block index=4 class="product-detail__purchase">
                    <QuantityCounter count=quantity on_plus=on_plus on_min=on_min/>
                    // Re-created on each quantity change so the scale-in replays.
                    {move || {
                        quantity.track();
                        view! {
                            <Motion transition=Transition::scale_in() class="product-detail__total">
                                {move || total.get()}
                            </Motion>
                        }
                    }}
                </Motion>
                <Motion transition=block index=5 class="product-detail__actions">
                    <button type="button" class="btn btn--primary">"Add to Cart"</button>
                    <button type="button" class="btn btn--outline" aria-label="Add to favorites">
                        "\u{2665}"
                    </button>
                </Motion>
            </div>
        </Motion>
    }
}
