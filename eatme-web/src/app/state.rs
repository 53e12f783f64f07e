use crate::components::toast::ToastMessage;
use crate::data::SiteData;
use eatme_order::Menu;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub data: Rc<SiteData>,
    pub menu: Rc<Menu>,
    pub mobile_open: UseStateHandle<bool>,
    pub toast: UseStateHandle<Option<ToastMessage>>,
}

#[hook]
pub fn use_app_state(data: Rc<SiteData>) -> AppState {
    let menu = use_memo(data.clone(), |data| data.menu.clone());
    AppState {
        data,
        menu,
        mobile_open: use_state(|| false),
        toast: use_state(|| None::<ToastMessage>),
    }
}
