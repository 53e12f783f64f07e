use eatme_order::{AddOnId, Menu, SelectionState, parse_price};
use std::rc::Rc;
use yew::prelude::*;

/// Handle to the active selection plus the actions the modal can perform.
#[derive(Clone, PartialEq)]
pub struct OrderController {
    pub selection: UseStateHandle<SelectionState>,
    pub open_item: Callback<AttrValue>,
    pub close: Callback<()>,
    pub increment: Callback<()>,
    pub decrement: Callback<()>,
    pub toggle_add_on: Callback<AddOnId>,
}

fn update(selection: &UseStateHandle<SelectionState>, apply: impl FnOnce(&mut SelectionState)) {
    let mut next = (**selection).clone();
    apply(&mut next);
    selection.set(next);
}

#[hook]
pub fn use_order_controller(menu: Rc<Menu>) -> OrderController {
    let selection = use_state(SelectionState::default);

    let open_item = {
        let selection = selection.clone();
        let menu = menu.clone();
        Callback::from(move |item_id: AttrValue| {
            let Some(entry) = menu.entry_for(&item_id) else {
                log::warn!("Menu item {item_id} is not in the catalog");
                return;
            };
            if parse_price(&entry.price_text).is_none() {
                log::warn!(
                    "Price label {:?} for {} has no digits; ordering it at 0",
                    entry.price_text,
                    entry.name
                );
            }
            update(&selection, |state| state.open(entry));
        })
    };

    let close = {
        let selection = selection.clone();
        Callback::from(move |()| update(&selection, SelectionState::reset))
    };

    let increment = {
        let selection = selection.clone();
        Callback::from(move |()| update(&selection, SelectionState::increment))
    };

    let decrement = {
        let selection = selection.clone();
        Callback::from(move |()| update(&selection, SelectionState::decrement))
    };

    let toggle_add_on = {
        let selection = selection.clone();
        Callback::from(move |id: AddOnId| {
            if menu.add_ons.find(&id).is_none() {
                log::warn!("Add-on {id} is not in the catalog");
                return;
            }
            update(&selection, |state| state.toggle_add_on(&id));
        })
    };

    OrderController {
        selection,
        open_item,
        close,
        increment,
        decrement,
        toggle_add_on,
    }
}
