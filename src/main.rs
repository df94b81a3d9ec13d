use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use stylist::css;
use stylist::yew::Global;

mod config;
mod content;
mod components {
    pub mod animation;
    pub mod card;
    pub mod contact_form;
    pub mod footer;
    pub mod icons;
    pub mod viewport;
}
mod pages {
    pub mod approach;
    pub mod home;
    pub mod not_found;
}

use components::animation::{stagger_delay, Offset, TextReveal, ROW_STAGGER_MS};
use components::icons::{icon_for, Icon};
use content::{NavItem, NavTarget, NAV_ITEMS};
use pages::{
    approach::ApproachPage,
    home::Home,
    not_found::NotFound,
};


#[derive(Clone, Copy, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/approach")]
    Approach,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Approach => {
            info!("Rendering Approach page");
            html! { <ApproachPage /> }
        },
        Route::NotFound => {
            info!("No route matched, rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


fn nav_link(item: &NavItem, onclick: Callback<MouseEvent>) -> Html {
    match item.target {
        NavTarget::Page(route) => html! {
            <div {onclick}>
                <Link<Route> to={route} classes="text-gray-300 hover:text-blue-400">
                    { item.label }
                </Link<Route>>
            </div>
        },
        NavTarget::Anchor(_) => html! {
            <a href={item.href()} class="text-gray-300 hover:text-blue-400" {onclick}>
                { item.label }
            </a>
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor clicks must keep their default action, so only close the menu
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        classes!("nav-links", "mobile-menu-open")
    } else {
        classes!("nav-links")
    };

    html! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-black/80 backdrop-blur-sm px-6 py-4">
            <TextReveal offset={Offset::Y(-20)} delay_ms={0} class="max-w-7xl mx-auto flex items-center justify-between">
                <div class="nav-brand flex items-center space-x-2">
                    { icon_for(Icon::TrendingUp, "h-8 w-8 text-blue-500") }
                    <Link<Route> to={Route::Home} classes="text-white text-xl font-bold">
                        { config::BRAND_NAME }
                    </Link<Route>>
                </div>

                <button class="burger-menu md:hidden" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ITEMS.iter().enumerate().map(|(i, item)| html! {
                        <TextReveal
                            key={item.label}
                            offset={Offset::Y(-20)}
                            duration_ms={300}
                            delay_ms={stagger_delay(i, ROW_STAGGER_MS)}
                            class="nav-item"
                        >
                            { nav_link(item, close_menu.clone()) }
                        </TextReveal>
                    }) }
                </div>
            </TextReveal>
        </nav>
    }
}


fn global_style() -> Html {
    html! {
        <Global css={css!(r#"
            html {
                scroll-behavior: smooth;
            }
            body {
                margin: 0;
                background: #000;
            }
            .press-button, .press-button-subtle {
                transition: transform 0.2s ease, background-color 0.2s ease;
            }
            .press-button:hover { transform: scale(1.05); }
            .press-button:active { transform: scale(0.95); }
            .press-button-subtle:hover { transform: scale(1.02); }
            .press-button-subtle:active { transform: scale(0.98); }

            .nav-brand, .nav-item a {
                transition: transform 0.25s cubic-bezier(0.34, 1.56, 0.64, 1);
            }
            .nav-item a {
                display: inline-block;
            }
            .nav-brand:hover { transform: scale(1.05); }
            .nav-item a:hover { transform: scale(1.1); }

            .nav-links {
                display: none;
            }
            .burger-menu {
                display: flex;
                flex-direction: column;
                gap: 4px;
                background: none;
                border: none;
                cursor: pointer;
            }
            .burger-menu span {
                width: 24px;
                height: 2px;
                background: #d1d5db;
            }
            .nav-links.mobile-menu-open {
                display: flex;
                flex-direction: column;
                gap: 1rem;
                position: absolute;
                top: 100%;
                left: 0;
                right: 0;
                padding: 1rem 1.5rem;
                background: rgba(0, 0, 0, 0.9);
            }
            @media (min-width: 768px) {
                .burger-menu {
                    display: none;
                }
                .nav-links, .nav-links.mobile-menu-open {
                    display: flex;
                    flex-direction: row;
                    gap: 2rem;
                    position: static;
                    padding: 0;
                    background: none;
                }
            }
        "#)} />
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            { global_style() }
            <div class="min-h-screen bg-black">
                <Nav />
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;
    use yew_router::history::{AnyHistory, History, MemoryHistory};
    use yew_router::Router;

    #[derive(Properties, PartialEq)]
    struct ShellAtProps {
        path: &'static str,
    }

    // The app shell with an in-memory history standing in for the browser
    #[function_component(ShellAt)]
    fn shell_at(props: &ShellAtProps) -> Html {
        let history = use_memo(
            |path| {
                let history = MemoryHistory::new();
                history.push(*path);
                AnyHistory::from(history)
            },
            props.path,
        );

        html! {
            <Router history={(*history).clone()}>
                <Nav />
                <Switch<Route> render={switch} />
            </Router>
        }
    }

    async fn render_at(path: &'static str) -> String {
        yew::ServerRenderer::<ShellAt>::with_props(move || ShellAtProps { path })
            .hydratable(false)
            .render()
            .await
    }

    fn nav_markup(html: &str) -> &str {
        let start = html.find("<nav").expect("nav bar");
        let end = html.find("</nav>").expect("nav bar end");
        &html[start..end]
    }

    #[tokio::test]
    async fn nav_bar_is_identical_on_every_route() {
        let home = render_at("/").await;
        let approach = render_at("/approach").await;

        let nav = nav_markup(&home);
        assert_eq!(nav, nav_markup(&approach));
        assert!(nav.contains("Upsurge Capital"), "{}", nav);
        for item in NAV_ITEMS {
            assert!(nav.contains(item.label), "missing {:?}", item.label);
            assert!(nav.contains(&format!("href=\"{}\"", item.href())), "missing {:?}", item.href());
        }
    }

    #[tokio::test]
    async fn approach_route_renders_philosophy_page() {
        let html = render_at("/approach").await;
        let heading = html.find("<h1").expect("page heading");
        assert!(html[heading..].starts_with("<h1 class=\"text-5xl md:text-6xl font-bold mb-6\">Our Investment Philosophy"), "{}", html);
        assert_eq!(html.matches("<h3").count(), 6);
        assert!(!html.contains("id=\"contact\""));
    }

    #[tokio::test]
    async fn home_route_renders_landing_sections() {
        let html = render_at("/").await;
        assert!(html.contains("id=\"services\""));
        assert!(html.contains("id=\"contact\""));
        assert!(!html.contains("Our Investment Philosophy"));
    }

    #[tokio::test]
    async fn unknown_route_renders_not_found_page() {
        let html = render_at("/no-such-page").await;
        assert!(html.contains("Page not found"), "{}", html);
    }

    #[test]
    fn routes_map_to_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Approach.to_path(), "/approach");
    }

    #[test]
    fn known_paths_are_recognized() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/approach"), Some(Route::Approach));
    }

    #[test]
    fn unknown_path_falls_back_to_not_found() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }

    #[test]
    fn nav_links_include_approach_page() {
        let pages: Vec<Route> = NAV_ITEMS
            .iter()
            .filter_map(|item| match item.target {
                NavTarget::Page(route) => Some(route),
                NavTarget::Anchor(_) => None,
            })
            .collect();
        assert_eq!(pages, vec![Route::Approach]);
    }
}
