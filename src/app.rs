use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::components::*;
use leptos_router::hooks::use_params_map;
use leptos_router::path;

use crate::models::document::DocumentSummary;

/// HTML document wrapping the app for server-side rendering.
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

/// Summaries of every catalog document, for the home page grid.
#[server]
pub async fn list_catalog() -> Result<Vec<DocumentSummary>, ServerFnError> {
    use crate::models::document::Document;
    use crate::state::AppState;

    let state = use_context::<AppState>()
        .ok_or_else(|| ServerFnError::new("AppState not found in context"))?;
    Ok(state.catalog.documents.iter().map(Document::summary).collect())
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/libdev.css"/>
        <Title text="LibDev - Developer Reference"/>

        <Router>
            <nav class="top-nav">
                <a class="logo" href="/">"LibDev"</a>
                <crate::components::search_bar::SearchBar />
            </nav>
            <main>
                <Routes fallback=|| view! { "Page not found." }.into_view()>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/docs/:id") view=DocumentPage/>
                    <Route path=path!("/libraries/:id") view=LibraryPage/>
                    <Route path=path!("/articles/:slug") view=ArticlePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let summaries = Resource::new(|| (), |_| async move { list_catalog().await });

    view! {
        <h1>"LibDev"</h1>
        <p>"Commands, examples and libraries for the tools you use every day."</p>
        <Suspense fallback=|| view! { <p>"Loading catalog..."</p> }>
            {move || summaries.get().map(|res| match res {
                Ok(docs) => view! {
                    <div class="catalog-grid">
                        {docs.into_iter().map(|doc| view! {
                            <a class=format!("catalog-card {}", doc.color_class) href=format!("/docs/{}", doc.id)>
                                <span class="icon">{doc.icon}</span>
                                <h2>{doc.title}</h2>
                                <p>{doc.description}</p>
                                <span class="count">{format!("{} commands", doc.command_count)}</span>
                            </a>
                        }).collect_view()}
                    </div>
                }.into_any(),
                Err(e) => view! { <p class="error">"Error loading catalog: " {e.to_string()}</p> }.into_any(),
            })}
        </Suspense>
    }
}

#[component]
fn DocumentPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.get().get("id").unwrap_or_default();

    view! {
        <crate::components::document_view::DocumentView id=id() />
    }
}

#[component]
fn LibraryPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.get().get("id").unwrap_or_default();

    view! {
        <crate::components::document_view::LibraryView id=id() />
    }
}

#[component]
fn ArticlePage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();

    view! {
        <crate::components::article_view::ArticleView slug=slug() />
    }
}
