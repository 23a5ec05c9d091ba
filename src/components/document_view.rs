use leptos::prelude::*;

use crate::models::document::Document;

#[server]
pub async fn get_catalog_document(id: String) -> Result<Document, ServerFnError> {
    use crate::state::AppState;
    let state = leptos::prelude::use_context::<AppState>()
        .ok_or_else(|| ServerFnError::new("AppState not found in context"))?;

    state
        .catalog
        .find_document(&id)
        .cloned()
        .ok_or_else(|| ServerFnError::new(format!("Document '{}' not found", id)))
}

/// A registered library, presented the way `library:<id>` search shows it.
#[server]
pub async fn get_library_document(id: String) -> Result<Document, ServerFnError> {
    use crate::state::AppState;
    let state = leptos::prelude::use_context::<AppState>()
        .ok_or_else(|| ServerFnError::new("AppState not found in context"))?;

    state
        .catalog
        .find_library(&id)
        .map(crate::search::library::to_document)
        .ok_or_else(|| ServerFnError::new(format!("Library '{}' not found", id)))
}

#[component]
pub fn LibraryView(id: String) -> impl IntoView {
    let document = Resource::new(
        move || id.clone(),
        |id| async move { get_library_document(id).await },
    );

    view! {
        <Suspense fallback=|| view! { <p>"Loading..."</p> }>
            {move || document.get().map(|res| match res {
                Ok(doc) => view! { <DocumentBody doc=doc /> }.into_any(),
                Err(e) => view! { <p class="error">"Error: " {e.to_string()}</p> }.into_any(),
            })}
        </Suspense>
    }
}

#[component]
pub fn DocumentView(id: String) -> impl IntoView {
    let document = Resource::new(
        move || id.clone(),
        |id| async move { get_catalog_document(id).await },
    );

    view! {
        <Suspense fallback=|| view! { <p>"Loading..."</p> }>
            {move || document.get().map(|res| {
                match res {
                    Ok(doc) => view! { <DocumentBody doc=doc /> }.into_any(),
                    Err(e) => view! { <p class="error">"Error: " {e.to_string()}</p> }.into_any(),
                }
            })}
        </Suspense>
    }
}

#[component]
fn DocumentBody(doc: Document) -> impl IntoView {
    let Document {
        title,
        description,
        icon,
        color_class,
        categories,
        commands,
        examples,
        resources,
        ..
    } = doc;

    view! {
        <article class=format!("document {}", color_class)>
            <header>
                <span class="icon">{icon}</span>
                <h1>{title}</h1>
                <p class="description">{description}</p>
            </header>

            {categories.into_iter().map(|category| view! {
                <section class="category">
                    <h2>{category.name}</h2>
                    <CommandList commands=category.commands />
                </section>
            }).collect_view()}

            {(!commands.is_empty()).then(|| view! {
                <section class="category">
                    <h2>"Commands"</h2>
                    <CommandList commands=commands />
                </section>
            })}

            {(!examples.is_empty()).then(|| view! {
                <section class="examples">
                    <h2>"Examples"</h2>
                    {examples.into_iter().map(|example| view! {
                        <h3>{example.title}</h3>
                        <pre><code>{example.code}</code></pre>
                    }).collect_view()}
                </section>
            })}

            {(!resources.is_empty()).then(|| view! {
                <section class="resources">
                    <h2>"Resources"</h2>
                    <ul>
                        {resources.into_iter().map(|resource| view! {
                            <li>
                                <a href=resource.url target="_blank" rel="noopener noreferrer">{resource.title}</a>
                            </li>
                        }).collect_view()}
                    </ul>
                </section>
            })}
        </article>
    }
}

#[component]
fn CommandList(commands: Vec<crate::models::document::Command>) -> impl IntoView {
    view! {
        <dl class="commands">
            {commands.into_iter().map(|cmd| view! {
                <dt><code>{cmd.syntax}</code></dt>
                <dd>{cmd.description}</dd>
            }).collect_view()}
        </dl>
    }
}
