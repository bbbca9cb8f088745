use leptos::callback::{Callable, Callback};
use leptos::prelude::*;

/// Shows a quantity between a minus and a plus button.
///
/// The count is read-only here; the owner applies the bounds.
#[component]
pub fn QuantityCounter(
    #[prop(into)] count: Signal<u32>,
    on_plus: Callback<()>,
    on_min: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="counter">
            <button
                type="button"
                class="counter__button"
                aria-label="Decrease quantity"
                on:click=move |_| on_min.run(())
            >
                "-"
            </button>
            <input
                class="counter__value"
                type="text"
                readonly=true
                aria-label="Quantity"
                prop:value=move || count.get().to_string()
            />
            <button
                type="button"
                class="counter__button"
                aria-label="Increase quantity"
                on:click=move |_| on_plus.run(())
            >
                "+"
            </button>
        </div>
    }
}
