//! Root application component with routing and context providers.
//!
//! DESIGN
//! ======
//! The session machinery (token store, refresh coordinator, authorized
//! client) is single-threaded by construction (`Rc` interior), so it is
//! not held in Leptos context; the browser build keeps one instance in a
//! thread-local composition root and components reach it inside their
//! event handlers and spawned tasks. Send-safe values (auth state signal,
//! route guard, config) are provided via context as usual.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::guard::RouteGuard;
use crate::components::guarded::Guarded;
use crate::components::layout::AppLayout;
use crate::config::ClientConfig;
use crate::pages::dashboard::DashboardPage;
use crate::pages::finance::FinancePage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::resource::ResourcePage;
use crate::pages::resources::{
    CROPS_RESOURCE, FIELDS_RESOURCE, INVENTORY_RESOURCE, TASKS_RESOURCE, USERS_RESOURCE,
};
use crate::state::auth::AuthState;

/// Browser transport used by the composed runtime.
#[cfg(feature = "hydrate")]
pub type ClientTransport = crate::net::gloo::GlooTransport;

/// The composed session core for the browser.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
pub struct ClientRuntime {
    pub session: crate::auth::Session<ClientTransport>,
    pub api: crate::net::ApiClient<ClientTransport>,
}

#[cfg(feature = "hydrate")]
impl ClientRuntime {
    fn new(config: &ClientConfig) -> Self {
        use std::rc::Rc;

        let transport =
            crate::net::gloo::GlooTransport::new(config.api_base.clone(), config.request_timeout_ms);
        let store = crate::auth::token_store::default_token_store();
        let events = crate::auth::SessionEvents::new();
        let generation = crate::auth::AuthGeneration::new();
        let refresh = crate::auth::RefreshCoordinator::new(
            transport.clone(),
            Rc::clone(&store),
            events.clone(),
            generation.clone(),
        );
        let session = crate::auth::Session::new(
            transport.clone(),
            Rc::clone(&store),
            events.clone(),
            generation.clone(),
        );
        let api = crate::net::ApiClient::new(transport, store, refresh, generation);
        Self { session, api }
    }
}

#[cfg(feature = "hydrate")]
thread_local! {
    static RUNTIME: std::cell::RefCell<Option<ClientRuntime>> = const { std::cell::RefCell::new(None) };
}

/// Run `f` against the browser session runtime, composing it on first use.
#[cfg(feature = "hydrate")]
pub fn with_runtime<R>(f: impl FnOnce(&ClientRuntime) -> R) -> R {
    RUNTIME.with(|slot| {
        let mut slot = slot.borrow_mut();
        let runtime = slot.get_or_insert_with(|| ClientRuntime::new(&ClientConfig::default()));
        f(runtime)
    })
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared contexts, restores the persisted session once, and
/// sets up client-side routing with guarded pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::default();
    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    provide_context(Arc::new(RouteGuard::from_config(&config)));
    provide_context(config);

    #[cfg(feature = "hydrate")]
    {
        // Decode the persisted token once; until then the guard defers.
        Effect::new(move || {
            if !auth.get_untracked().loading {
                return;
            }
            let user = with_runtime(|runtime| runtime.session.bootstrap());
            auth.set(AuthState {
                user,
                loading: false,
            });
        });

        // Forced logouts (terminal refresh failure) land here.
        let mut subscription = with_runtime(|runtime| runtime.session.events().subscribe());
        leptos::task::spawn_local(async move {
            while subscription.session_ended().await {
                auth.set(AuthState {
                    user: None,
                    loading: false,
                });
            }
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/agrisync-client.css"/>
        <Title text="AgriSync"/>

        <Router>
            <Routes fallback=|| {
                view! {
                    <Guarded route="dashboard">
                        <AppLayout><DashboardPage/></AppLayout>
                    </Guarded>
                }
            }>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <Guarded route="login"><LoginPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <Guarded route="register"><RegisterPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <Guarded route="dashboard">
                                <AppLayout><DashboardPage/></AppLayout>
                            </Guarded>
                        }
                    }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <Guarded route="dashboard">
                                <AppLayout><DashboardPage/></AppLayout>
                            </Guarded>
                        }
                    }
                />
                <Route
                    path=StaticSegment("fields")
                    view=|| {
                        view! {
                            <Guarded route="fields">
                                <AppLayout><ResourcePage descriptor=&FIELDS_RESOURCE/></AppLayout>
                            </Guarded>
                        }
                    }
                />
                <Route
                    path=StaticSegment("crops")
                    view=|| {
                        view! {
                            <Guarded route="crops">
                                <AppLayout><ResourcePage descriptor=&CROPS_RESOURCE/></AppLayout>
                            </Guarded>
                        }
                    }
                />
                <Route
                    path=StaticSegment("tasks")
                    view=|| {
                        view! {
                            <Guarded route="tasks">
                                <AppLayout><ResourcePage descriptor=&TASKS_RESOURCE/></AppLayout>
                            </Guarded>
                        }
                    }
                />
                <Route
                    path=StaticSegment("finance")
                    view=|| {
                        view! {
                            <Guarded route="finance">
                                <AppLayout><FinancePage/></AppLayout>
                            </Guarded>
                        }
                    }
                />
                <Route
                    path=StaticSegment("inventory")
                    view=|| {
                        view! {
                            <Guarded route="inventory">
                                <AppLayout><ResourcePage descriptor=&INVENTORY_RESOURCE/></AppLayout>
                            </Guarded>
                        }
                    }
                />
                <Route
                    path=StaticSegment("users")
                    view=|| {
                        view! {
                            <Guarded route="users">
                                <AppLayout><ResourcePage descriptor=&USERS_RESOURCE/></AppLayout>
                            </Guarded>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
