use eatme_order::{
    AddOnId, CatalogError, Menu, SelectionState, SiteConfig, SiteDataSource, decode_message,
};

struct EmbeddedData;

impl SiteDataSource for EmbeddedData {
    fn load_menu(&self) -> Result<Menu, CatalogError> {
        Menu::from_json(include_str!("../../eatme-web/static/assets/data/menu.json"))
    }

    fn load_site_config(&self) -> Result<SiteConfig, CatalogError> {
        SiteConfig::from_json(include_str!("../../eatme-web/static/assets/data/site.json"))
    }
}

fn open(item_id: &str) -> (Menu, SiteConfig, SelectionState) {
    let menu = EmbeddedData.load_menu().expect("menu data");
    let site = EmbeddedData.load_site_config().expect("site config");
    let mut state = SelectionState::new();
    state.open(menu.entry_for(item_id).expect("menu item"));
    (menu, site, state)
}

#[test]
fn configured_order_produces_matching_total_and_link() {
    let (menu, site, mut state) = open("jollof-chicken");
    state.increment();
    state.increment();
    state.toggle_add_on(&AddOnId::from("extra-chicken"));
    state.toggle_add_on(&AddOnId::from("extra-sauce"));

    let quote = state.quote(&menu.add_ons, &site);
    assert_eq!(quote.total, (45 + 5 + 15) * 3);
    assert_eq!(quote.total_label, "GH₵ 195");

    let decoded = decode_message(&quote.link).expect("text parameter");
    assert_eq!(decoded, quote.message);
    assert!(decoded.contains("*3x Jollof Rice & Chicken*"));
    assert!(decoded.contains("Day: Monday"));
    assert!(decoded.contains("Extras: extra sauce, extra chicken"));
    assert!(decoded.contains("*Total: GH₵ 195*"));
}

#[test]
fn single_plain_item_matches_unit_price() {
    let (menu, site, state) = open("waakye");
    let quote = state.quote(&menu.add_ons, &site);
    assert_eq!(quote.total, 40);
    assert!(quote.message.contains("1x Waakye Special"));
    assert!(quote.message.contains("Total: GH₵ 40"));
}

#[test]
fn items_outside_day_sections_skip_day_line() {
    let (menu, site, state) = open("sobolo");
    assert!(state.current().available_day.is_empty());
    let quote = state.quote(&menu.add_ons, &site);
    assert!(!quote.message.contains("Day:"));
}

#[test]
fn unchecking_add_on_restores_total() {
    let (menu, site, mut state) = open("banku-tilapia");
    let before = state.quote(&menu.add_ons, &site).total;
    let cheese = AddOnId::from("extra-cheese");
    state.toggle_add_on(&cheese);
    assert_eq!(state.quote(&menu.add_ons, &site).total, before + 10);
    state.toggle_add_on(&cheese);
    assert_eq!(state.quote(&menu.add_ons, &site).total, before);
}

#[test]
fn reopening_discards_previous_configuration() {
    let (menu, site, mut state) = open("suya-skewers");
    state.set_quantity(8);
    state.toggle_add_on(&AddOnId::from("boiled-egg"));
    state.open(menu.entry_for("kelewele").expect("kelewele"));
    let quote = state.quote(&menu.add_ons, &site);
    assert_eq!(quote.total, 15);
    assert!(quote.add_on_labels.is_empty());
}
