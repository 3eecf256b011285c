use log::{debug, error, info};
use web_sys::{window, Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::{self, normalize_whatsapp_number};

pub const SUBJECTS: [&str; 5] = [
    "Direito Civil",
    "Direito de Família",
    "Direito Trabalhista",
    "Direito do Consumidor",
    "Outro assunto",
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Por favor, informe seu nome.");
        }
        if self.message.trim().is_empty() {
            return Err("Por favor, escreva sua mensagem.");
        }
        Ok(())
    }

    /// Plain-text body sent to the firm's WhatsApp.
    pub fn to_text(&self) -> String {
        let mut lines = vec![format!("Olá! Meu nome é {}.", self.name.trim())];
        if !self.phone.trim().is_empty() {
            lines.push(format!("Telefone: {}", self.phone.trim()));
        }
        if !self.subject.trim().is_empty() {
            lines.push(format!("Assunto: {}", self.subject.trim()));
        }
        lines.push(String::new());
        lines.push(self.message.trim().to_string());
        lines.join("\n")
    }
}

pub fn whatsapp_link(number: &str, text: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        normalize_whatsapp_number(number),
        urlencoding::encode(text)
    )
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub whatsapp_number: String,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let subject = use_state(String::new);
    let message = use_state(String::new);
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let name = name.clone();
        let phone = phone.clone();
        let subject = subject.clone();
        let message = message.clone();
        let error = error.clone();
        let number = props.whatsapp_number.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let contact = ContactMessage {
                name: (*name).clone(),
                phone: (*phone).clone(),
                subject: (*subject).clone(),
                message: (*message).clone(),
            };
            if let Err(msg) = contact.validate() {
                error.set(Some(msg.to_string()));
                return;
            }
            error.set(None);

            let link = whatsapp_link(&number, &contact.to_text());
            info!("Opening WhatsApp contact link");
            if let Some(window) = window() {
                let _ = window.open_with_url_and_target(&link, "_blank");
            }
        })
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <div class="form-group">
                <label for="contact-name">{"Nome"}</label>
                <input
                    id="contact-name"
                    type="text"
                    placeholder="Seu nome completo"
                    value={(*name).clone()}
                    oninput={Callback::from({
                        let name = name.clone();
                        move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            name.set(input.value());
                        }
                    })}
                />
            </div>
            <div class="form-group">
                <label for="contact-phone">{"Telefone"}</label>
                <input
                    id="contact-phone"
                    type="tel"
                    placeholder="(00) 00000-0000"
                    value={(*phone).clone()}
                    oninput={Callback::from({
                        let phone = phone.clone();
                        move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            phone.set(input.value());
                        }
                    })}
                />
            </div>
            <div class="form-group">
                <label for="contact-subject">{"Assunto"}</label>
                <select
                    id="contact-subject"
                    onchange={Callback::from({
                        let subject = subject.clone();
                        move |e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            subject.set(select.value());
                        }
                    })}
                >
                    <option value="" selected={subject.is_empty()}>{"Selecione um assunto"}</option>
                    { for SUBJECTS.iter().map(|s| html! {
                        <option value={*s} selected={*subject == *s}>{*s}</option>
                    }) }
                </select>
            </div>
            <div class="form-group">
                <label for="contact-message">{"Mensagem"}</label>
                <textarea
                    id="contact-message"
                    rows="5"
                    placeholder="Conte brevemente o seu caso"
                    value={(*message).clone()}
                    oninput={Callback::from({
                        let message = message.clone();
                        move |e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            message.set(input.value());
                        }
                    })}
                />
            </div>
            {
                if let Some(error_message) = (*error).as_ref() {
                    html! { <p class="form-error">{error_message}</p> }
                } else {
                    html! {}
                }
            }
            <button type="submit" class="btn-whatsapp">{"Enviar pelo WhatsApp"}</button>
        </form>
    }
}

pub fn mount_contact_form(document: &Document) {
    let Some(host) = document.get_element_by_id(config::CONTACT_FORM_ID) else {
        debug!("No #{} on this page", config::CONTACT_FORM_ID);
        return;
    };

    let whatsapp_number = host
        .get_attribute("data-whatsapp")
        .filter(|n| !normalize_whatsapp_number(n).is_empty())
        .unwrap_or_else(|| config::WHATSAPP_NUMBER.to_string());

    // The component renders its own <form>; a form host would nest them.
    let root = if is_form_element(&host.tag_name()) {
        match replace_with_wrapper(document, &host) {
            Some(wrapper) => wrapper,
            None => return,
        }
    } else {
        host.set_inner_html("");
        host
    };

    yew::Renderer::<ContactForm>::with_root_and_props(root, ContactFormProps { whatsapp_number })
        .render();
}

fn is_form_element(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("form")
}

// Swaps `host` for an empty <div> carrying its id and classes.
fn replace_with_wrapper(document: &Document, host: &Element) -> Option<Element> {
    let wrapper = match document.create_element("div") {
        Ok(wrapper) => wrapper,
        Err(e) => {
            error!("Failed to create contact form wrapper: {:?}", e);
            return None;
        }
    };
    wrapper.set_id(&host.id());
    wrapper.set_class_name(&host.class_name());

    if let Err(e) = host.replace_with_with_node_1(&wrapper) {
        error!("Failed to replace contact form host: {:?}", e);
        return None;
    }
    debug!("Replaced <form id=\"{}\"> host with a wrapper", config::CONTACT_FORM_ID);
    Some(wrapper)
}
