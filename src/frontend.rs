use std::rc::Rc;

use web_sys::window;
use yew::prelude::*;

use crate::config::EffectsConfig;
use crate::effects::{self, Effects};
use crate::logging;

const MOUNT_POINT_ID: &str = "app";
const OWNER_NAME: &str = "Harinath Annavarapu";

const NAV_ITEMS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

const STATS: [(&str, &str); 3] = [
    ("15+", "Years of experience"),
    ("50+", "Projects delivered"),
    ("98%", "Client satisfaction"),
];

const SKILLS: [(&str, &str); 4] = [
    ("Architecture", "Distributed systems, event-driven design, domain modelling."),
    ("Backend", "Rust, Java, Go and the services around them."),
    ("Frontend", "WebAssembly, TypeScript and accessible interfaces."),
    ("Cloud", "Kubernetes, observability and cost-aware infrastructure."),
];

const PROJECTS: [(&str, &str); 3] = [
    ("Payments Platform", "Ledger and settlement services handling millions of daily events."),
    ("Data Mesh", "Self-serve data products with lineage and quality contracts."),
    ("Design System", "Component library shared by a dozen product teams."),
];

const CONTACTS: [(&str, &str, &str); 3] = [
    ("Email", "mailto:hello@example.com", "hello@example.com"),
    ("GitHub", "https://github.com/", "github.com"),
    ("LinkedIn", "https://www.linkedin.com/", "linkedin.com"),
];

#[derive(Properties, PartialEq)]
struct CardProps {
    class: &'static str,
    title: AttrValue,
    body: AttrValue,
}

#[function_component(Card)]
fn card(props: &CardProps) -> Html {
    html! {
        <article class={props.class}>
            <h3>{props.title.clone()}</h3>
            <p>{props.body.clone()}</p>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<EffectsConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    {
        let config = props.config.clone();
        use_effect_with((), move |_| {
            let installed = match Effects::install(&config) {
                Ok(effects) => Some(effects),
                Err(err) => {
                    tracing::error!(%err, "page effects not installed");
                    None
                }
            };
            move || drop(installed)
        });
    }

    let first_role = props.config.roles.first().cloned().unwrap_or_default();

    html! {
        <>
            <div class="bg-animation" aria-hidden="true"></div>
            <nav>
                <a class="logo" href="#home">{"HA"}</a>
                <ul class="nav-links">
                    { for NAV_ITEMS.iter().map(|(id, label)| html! {
                        <li><a href={format!("#{id}")}>{*label}</a></li>
                    }) }
                </ul>
            </nav>

            <main>
                <section id="home" class="section hero">
                    <h1>{OWNER_NAME}</h1>
                    <p class="role">{first_role}</p>
                    <div class="hero-actions">
                        <a class="btn btn-primary" href="#projects">{"View work"}</a>
                        <a class="btn btn-secondary" href="#contact">{"Get in touch"}</a>
                    </div>
                </section>

                <section id="about" class="section">
                    <h2>{"About"}</h2>
                    <p>
                        {"I design and build systems that stay fast, observable and boring to operate."}
                    </p>
                    <div class="stats">
                        { for STATS.iter().map(|(value, label)| html! {
                            <div class="stat">
                                <span class="stat-number">{*value}</span>
                                <span class="stat-label">{*label}</span>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="skills" class="section">
                    <h2>{"Skills"}</h2>
                    <div class="card-grid">
                        { for SKILLS.iter().map(|(title, body)| html! {
                            <Card class="skill-card" title={*title} body={*body} />
                        }) }
                    </div>
                </section>

                <section id="projects" class="section">
                    <h2>{"Projects"}</h2>
                    <div class="card-grid">
                        { for PROJECTS.iter().map(|(title, body)| html! {
                            <Card class="project-card" title={*title} body={*body} />
                        }) }
                    </div>
                </section>

                <section id="contact" class="section">
                    <h2>{"Contact"}</h2>
                    <ul class="contact-list">
                        { for CONTACTS.iter().map(|(label, href, text)| html! {
                            <li class="contact-item">
                                <span class="muted">{*label}</span>
                                <a href={*href} target="_blank" rel="noopener noreferrer">{*text}</a>
                            </li>
                        }) }
                    </ul>
                    <button class="btn btn-primary" type="button">{"Say hello"}</button>
                </section>
            </main>
        </>
    }
}

pub fn run() {
    let (config, config_error) = effects::load_config();
    logging::init(config.log_level);
    if let Some(err) = config_error {
        tracing::warn!(%err, "using default effect settings");
    }

    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_POINT_ID))
    else {
        tracing::error!("missing #{MOUNT_POINT_ID} mount point");
        return;
    };

    yew::Renderer::<App>::with_root_and_props(
        root,
        AppProps {
            config: Rc::new(config),
        },
    )
    .render();
}
