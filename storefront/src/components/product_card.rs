use brew_commerce::browse::ProductCard;
use leptos::prelude::*;

use crate::motion::{Motion, Transition};

/// A navigable product tile on the list page.
#[component]
pub fn CatalogCard(card: ProductCard) -> impl IntoView {
    let ProductCard {
        title,
        thumbnail,
        price,
        href,
        ..
    } = card;
    let image_alt = title.clone();
    let image = Transition::slide_in().with_duration(600);

    view! {
        <a href=href class="product-card">
            <Motion transition=image class="product-card__media">
                <img src=thumbnail alt=image_alt width="185" height="185"/>
            </Motion>
            <div class="product-card__info">
                <span class="product-card__title">{title}</span>
                <span class="product-card__price">{price}</span>
            </div>
        </a>
    }
}
