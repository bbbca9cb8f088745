//! End-to-end browsing flows over the shipped coffee catalog.

use brew_commerce::prelude::*;

#[test]
fn list_then_detail_then_quantity() {
    let catalog = Catalog::coffee_shop().unwrap();

    // List view: pick the card for Brown Sugar and follow its link.
    let cards = product_cards(&catalog);
    let card = cards.iter().find(|c| c.title == "Brown Sugar").unwrap();
    assert_eq!(card.price, "$24.99");

    let slug = parse_product_path(&card.href).unwrap();
    let mut view = DetailView::default();
    view.on_route(&catalog, Some(slug));

    let selection = view.selection_mut().unwrap();
    assert_eq!(selection.product().title, "Brown Sugar");
    assert_eq!(selection.selected_size().name, "Medium");
    assert_eq!(selection.selected_size().price_display(), "$24.99");
    assert_eq!(selection.quantity().get(), 1);
    assert_eq!(selection.total().unwrap().display(), "$24.99");

    selection.increment();
    selection.increment();
    assert_eq!(selection.total().unwrap().display(), "$74.97");
}

#[test]
fn unknown_slug_renders_nothing() {
    let catalog = Catalog::coffee_shop().unwrap();
    let view = DetailView::resolve(&catalog, Some("espresso"));
    assert!(view.product().is_none());
    assert!(view.selection().is_none());
}

#[test]
fn size_change_from_medium_to_large() {
    let catalog = Catalog::coffee_shop().unwrap();
    let mut view = DetailView::resolve(&catalog, Some("americano"));
    let selection = view.selection_mut().unwrap();

    let large = selection
        .size_options()
        .into_iter()
        .find(|o| o.size.name == "Large")
        .unwrap();
    assert!(!large.selected);

    selection.select_size(&large.size.name).unwrap();
    assert_eq!(selection.selected_size().name, "Large");
    assert_eq!(selection.total().unwrap().display(), "$30.99");
    assert!(selection
        .size_options()
        .iter()
        .any(|o| o.size.name == "Large" && o.selected));
}

#[test]
fn every_card_link_routes_back_to_its_product() {
    let catalog = Catalog::coffee_shop().unwrap();
    for card in product_cards(&catalog) {
        let slug = parse_product_path(&card.href).unwrap();
        let view = DetailView::resolve(&catalog, Some(slug));
        assert_eq!(view.product().unwrap().title, card.title);
    }
}

#[test]
fn decrement_at_one_is_a_no_op() {
    let catalog = Catalog::coffee_shop().unwrap();
    let mut view = DetailView::resolve(&catalog, Some("mocha-latte"));
    let selection = view.selection_mut().unwrap();

    selection.decrement();
    assert_eq!(selection.quantity(), Quantity::ONE);
    assert_eq!(selection.total().unwrap().display(), "$24.99");
}

#[test]
fn catalog_from_custom_config() {
    let config = CatalogConfig::from_toml_str(
        r#"
[[products]]
slug = "drip"
title = "Drip"
thumbnail = "products/drip.png"

[[products.sizes]]
name = "Regular"
price = 3
"#,
    )
    .unwrap();
    let catalog = Catalog::from_config(&config).unwrap();

    assert_eq!(product_cards(&catalog)[0].price, "$3.00");

    let view = DetailView::resolve(&catalog, Some("drip"));
    assert_eq!(view.selection().unwrap().selected_size().name, "Regular");
    assert!(catalog.find_by_slug("brown-sugar").is_none());
}
