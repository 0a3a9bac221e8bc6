//! Site footer: quick links, contact, services and copyright.

use leptos::prelude::*;

use crate::data::hotel::{HOTEL, SERVICES};
use crate::state::ui::Section;
use crate::util::scroll::scroll_to_section;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <div>
                    <h3 class="site-footer__brand">{HOTEL.name}</h3>
                    <p>{HOTEL.footer_blurb}</p>
                </div>
                <div>
                    <h4>"Enlaces Rápidos"</h4>
                    <ul>
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <li>
                                        <button class="site-footer__link" on:click=move |_| scroll_to_section(section.id())>
                                            {section.label()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h4>"Contacto"</h4>
                    <ul>
                        <li>{HOTEL.full_address()}</li>
                        <li><a href=HOTEL.phone_href>{HOTEL.phone_display}</a></li>
                        <li><a href=HOTEL.mailto_href()>{HOTEL.email}</a></li>
                    </ul>
                </div>
                <div>
                    <h4>"Servicios"</h4>
                    <ul>{SERVICES.iter().map(|service| view! { <li>{*service}</li> }).collect_view()}</ul>
                </div>
            </div>
            <p class="site-footer__copyright">
                {format!("© {} {}. Todos los derechos reservados.", HOTEL.copyright_year, HOTEL.name)}
            </p>
        </footer>
    }
}
