use crate::components::reveal::Reveal;
use eatme_order::MessagingEndpoint;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub brand: AttrValue,
    pub messaging: MessagingEndpoint,
}

/// Contact cards and the page footer.
#[function_component(Footer)]
pub fn footer(props: &Props) -> Html {
    let chat = format!(
        "{}/{}",
        props.messaging.base_url.trim_end_matches('/'),
        props.messaging.destination_id
    );
    html! {
        <>
            <section id="contact" class="contact">
                <div class="section-header">
                    <span class="section-eyebrow">{"Say hello"}</span>
                    <h2 class="section-title">{"Contact"}</h2>
                </div>
                <Reveal class={classes!("contact-grid")}>
                    <div class="contact-card stagger-child">
                        <h4>{"WhatsApp"}</h4>
                        <a href={chat} target="_blank" rel="noopener noreferrer">
                            { format!("+{}", props.messaging.destination_id) }
                        </a>
                    </div>
                    <div class="contact-card stagger-child">
                        <h4>{"Hours"}</h4>
                        <p>{"Mon, Wed, Fri · 11:00 to 20:00"}</p>
                    </div>
                </Reveal>
            </section>
            <footer class="footer">
                <p>{ format!("© {} · Satisfy your cravings", props.brand) }</p>
            </footer>
        </>
    }
}
