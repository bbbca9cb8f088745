use brew_commerce::catalog::Size;
use brew_commerce::browse::SizeOption;
use leptos::callback::{Callable, Callback};
use leptos::prelude::*;

use crate::motion::{Motion, Stagger, Transition};

/// Lists a product's sizes and reports clicks.
///
/// Holds no selection of its own: the owner passes the current size in
/// and decides what a click does.
#[component]
pub fn SizeSelector(
    sizes: Vec<Size>,
    #[prop(into)] selected: Signal<Option<Size>>,
    #[prop(optional)] on_select: Option<Callback<Size>>,
    #[prop(optional)] stagger: Option<Stagger>,
) -> impl IntoView {
    let row = Transition::fade_up().with_stagger(stagger.unwrap_or_default());
    let options = selected.with_untracked(|current| SizeOption::list(&sizes, current.as_ref()));

    let rows = options
        .into_iter()
        .enumerate()
        .map(|(index, option)| {
            let SizeOption { size, price, .. } = option;
            let name = size.name.clone();
            let is_selected =
                move || selected.with(|current| current.as_ref().is_some_and(|s| s.name == name));
            let row_class = {
                let is_selected = is_selected.clone();
                move || {
                    if is_selected() {
                        "size-option size-option--selected"
                    } else {
                        "size-option"
                    }
                }
            };
            let label = size.name.clone();
            let click = row_click(size, on_select);

            view! {
                <li>
                    <Motion transition=row index=index>
                        <button
                            type="button"
                            class=row_class
                            aria-pressed=move || is_selected().to_string()
                            on:click=move |_| click()
                        >
                            <span class="size-option__radio"></span>
                            <span class="size-option__name">{label}</span>
                            <span class="size-option__price">{price}</span>
                        </button>
                    </Motion>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="size-selector">
            <p class="size-selector__label">"Choose Size : "</p>
            <ul class="size-selector__list">{rows}</ul>
        </div>
    }
}

/// Click handler of one selector row: reports that row's size.
pub fn row_click(size: Size, on_select: Option<Callback<Size>>) -> impl Fn() + Clone + 'static {
    move || {
        if let Some(on_select) = on_select {
            on_select.run(size.clone());
        }
    }
}
