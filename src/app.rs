mod about;
mod animate;
mod contact;
mod experience;
mod hero;
mod navigation;
mod projects;
mod technologies;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use contact::Contact;
use experience::Experience;
use hero::Hero;
use navigation::Navigation;
use projects::Projects;
use technologies::Technologies;

use crate::content::{OWNER_NAME, OWNER_ROLE, OWNER_SURNAME};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-900 font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=format!("Joaquin Peredo - {OWNER_ROLE}") />
        <Meta
            name="description"
            content=format!(
                "Portafolio profesional de {OWNER_NAME} {OWNER_SURNAME}, desarrollador backend especializado en Node.js, Express, PostgreSQL y APIs REST.",
            )
        />
        <Meta
            name="keywords"
            content="desarrollador backend, Node.js, Express, PostgreSQL, API REST, JavaScript, TypeScript"
        />

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole portfolio, one section after another.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <main class="min-h-screen bg-gradient-to-br from-gray-900 via-slate-900 to-green-900">
            <Navigation />
            <Hero />
            <About />
            <Experience />
            <Projects />
            <Technologies />
            <Contact />
        </main>
    }
}
