use leptos::{ev, html, prelude::*};

use crate::contact::{
    ContactForm, ContactTransport, Field, SimulatedTransport, SubmitStatus, SUBMIT_LATENCY,
};
use crate::content::{ChannelIcon, ContactChannel, CONTACT_CHANNELS, SAFE_LINK_REL};
use crate::nav::Section;
use crate::reveal::CONTACT_TIMING;
use crate::timers::Timers;

use super::animate::{use_section_reveal, Entrance};

fn channel_icon(icon: ChannelIcon) -> &'static str {
    match icon {
        ChannelIcon::Mail => "✉",
        ChannelIcon::Github => "⌥",
        ChannelIcon::Languages => "🌐",
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(section_ref, CONTACT_TIMING);
    let timers = Timers::new();
    let form = RwSignal::new(ContactForm::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(ContactForm::submit) {
            Some(Ok(message)) => timers.schedule(SUBMIT_LATENCY, move || {
                let result = SimulatedTransport.deliver(&message);
                if let Err(err) = &result {
                    log::error!("contact delivery failed: {err:?}");
                }
                form.update(|f| f.finish(result));
            }),
            Some(Err(blocked)) => log::debug!("submit rejected: {blocked}"),
            None => {}
        }
    };

    let status = Signal::derive(move || form.with(ContactForm::status));
    let disabled = Signal::derive(move || form.with(ContactForm::is_submit_disabled));

    view! {
        <section
            node_ref=section_ref
            id=Section::Contact.id()
            class="py-20 bg-gradient-to-br from-gray-900 via-slate-900 to-green-900/20 relative overflow-hidden"
        >
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_80%_80%,rgba(34,197,94,0.05),transparent_50%)]"></div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class=Entrance::FadeUp.class("transition-all duration-1000 ease-out", reveal.visible)>
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-white mb-4">
                            "¿Trabajamos " <span class="text-green-400">"juntos?"</span>
                        </h2>
                        <p class="text-lg text-gray-400 max-w-3xl mx-auto">
                            "Estoy abierto a nuevas oportunidades. No dudes en escribirme."
                        </p>
                    </div>

                    <div class="grid md:grid-cols-2 gap-12">
                        <div class=Entrance::FromLeft
                            .class("space-y-6 transition-all duration-1000 delay-200 ease-out", reveal.visible)>
                            <h3 class="text-2xl font-bold text-white mb-6">"Información de contacto"</h3>
                            {CONTACT_CHANNELS
                                .iter()
                                .map(|channel| view! { <ChannelCard channel /> })
                                .collect_view()}
                        </div>

                        <div class=Entrance::FromRight
                            .class(
                                "bg-gradient-to-br from-gray-800/50 to-gray-900/50 p-8 rounded-2xl border border-green-800/30 backdrop-blur-sm transition-all duration-1000 ease-out",
                                reveal.children,
                            )>
                            <form on:submit=on_submit class="space-y-6" novalidate>
                                <FormField form field=Field::Name label="Nombre" placeholder="Tu nombre" />
                                <FormField
                                    form
                                    field=Field::Email
                                    label="Email"
                                    placeholder="tu@email.com"
                                />
                                <FormField
                                    form
                                    field=Field::Message
                                    label="Mensaje"
                                    placeholder="Cuéntame sobre tu proyecto..."
                                />

                                <button
                                    type="submit"
                                    disabled=move || disabled.get()
                                    class="w-full inline-flex items-center justify-center gap-2 bg-gradient-to-r from-green-600 to-green-700 text-white px-6 py-3 rounded-lg hover:from-green-700 hover:to-green-800 transition-all duration-300 shadow-lg shadow-green-900/30 disabled:opacity-50 disabled:cursor-not-allowed"
                                >
                                    <Show
                                        when=move || disabled.get()
                                        fallback=|| view! { "Enviar Mensaje" }
                                    >
                                        <span class="w-4 h-4 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                                        "Enviando..."
                                    </Show>
                                </button>

                                <Show when=move || status.get() == SubmitStatus::Success>
                                    <div class="p-4 bg-green-900/30 border border-green-700/50 rounded-lg text-green-400">
                                        "¡Mensaje enviado correctamente! Te responderé pronto."
                                    </div>
                                </Show>
                                <Show when=move || status.get() == SubmitStatus::Error>
                                    <div class="flex items-start justify-between gap-4 p-4 bg-red-900/30 border border-red-700/50 rounded-lg text-red-400">
                                        <span>
                                            {move || {
                                                form.with(|f| f.last_error().map(ToString::to_string))
                                                    .unwrap_or_default()
                                            }}
                                        </span>
                                        <button
                                            type="button"
                                            aria-label="Cerrar"
                                            on:click=move |_| form.update(ContactForm::dismiss_error)
                                        >
                                            "✕"
                                        </button>
                                    </div>
                                </Show>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ChannelCard(channel: &'static ContactChannel) -> impl IntoView {
    let body = view! {
        <div class="w-12 h-12 bg-gradient-to-br from-green-600/20 to-green-800/20 rounded-lg flex items-center justify-center border border-green-700/30 text-green-400 text-xl">
            {channel_icon(channel.icon)}
        </div>
        <div>
            <h4 class="font-semibold text-white">{channel.title}</h4>
            <p class="text-gray-400">{channel.content}</p>
        </div>
    };
    let card = "flex items-center gap-4 p-4 bg-gray-800/30 rounded-xl border border-green-800/30 hover:border-green-600/50 transition-all duration-300";

    match channel.href {
        Some(href) if channel.opens_new_context() => view! {
            <a href=href target="_blank" rel=SAFE_LINK_REL class=card>
                {body}
            </a>
        }
        .into_any(),
        Some(href) => view! {
            <a href=href class=card>
                {body}
            </a>
        }
        .into_any(),
        None => view! { <div class=card>{body}</div> }.into_any(),
    }
}

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_string());
    let error = move || form.with(|f| f.error(field));
    let on_input = move |ev: ev::Event| form.update(|f| f.edit(field, event_target_value(&ev)));
    let input_class = move || {
        let border = if error().is_some() {
            "border-red-500 focus:border-red-500"
        } else {
            "border-gray-700 focus:border-green-500"
        };
        format!(
            "w-full px-4 py-3 bg-gray-900/50 border {border} rounded-lg text-white placeholder-gray-500 focus:outline-none transition-colors duration-200"
        )
    };

    let control = match field {
        Field::Message => view! {
            <textarea
                id=field.key()
                name=field.key()
                rows="5"
                placeholder=placeholder
                class=move || format!("{} resize-none", input_class())
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        Field::Email => view! {
            <input
                type="email"
                id=field.key()
                name=field.key()
                placeholder=placeholder
                class=input_class
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
        Field::Name => view! {
            <input
                type="text"
                id=field.key()
                name=field.key()
                placeholder=placeholder
                class=input_class
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
    };

    view! {
        <div>
            <label for=field.key() class="block text-sm font-medium text-gray-300 mb-2">
                {label}
            </label>
            {control}
            {move || {
                error().map(|err| view! { <p class="mt-1 text-sm text-red-400">{err.to_string()}</p> })
            }}
        </div>
    }
}
