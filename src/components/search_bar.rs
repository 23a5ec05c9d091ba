use leptos::prelude::*;

use crate::models::search::ScoredDocument;

#[server]
pub async fn search_catalog_fn(q: String) -> Result<Vec<ScoredDocument>, ServerFnError> {
    use crate::state::AppState;
    let state = use_context::<AppState>()
        .ok_or_else(|| ServerFnError::new("AppState not found in context"))?;
    Ok(crate::search::engine::search_catalog(&state.catalog, &q))
}

#[server]
pub async fn suggestions_fn(q: String) -> Result<Vec<String>, ServerFnError> {
    use crate::state::AppState;
    let state = use_context::<AppState>()
        .ok_or_else(|| ServerFnError::new("AppState not found in context"))?;
    Ok(crate::search::suggest::suggestions(&state.catalog, &q))
}

#[component]
pub fn SearchBar() -> impl IntoView {
    let (query, set_query) = signal(String::new());

    let search_results = Resource::new(
        move || query.get(),
        |q| async move {
            if q.trim().is_empty() {
                return Ok(Vec::new());
            }
            search_catalog_fn(q).await
        },
    );
    let suggestions = Resource::new(move || query.get(), |q| async move { suggestions_fn(q).await });

    view! {
        <div class="search-container">
            <input
                type="text"
                list="search-suggestions"
                placeholder="Search commands, or library:<id>..."
                on:input=move |ev| set_query.set(event_target_value(&ev))
                prop:value=query
            />
            <datalist id="search-suggestions">
                <Suspense>
                    {move || suggestions.get().and_then(Result::ok).map(|items| {
                        items.into_iter().map(|s| view! { <option value=s></option> }).collect_view()
                    })}
                </Suspense>
            </datalist>
            <div class="search-results">
                <Suspense fallback=|| view! { <p>"Searching..."</p> }>
                    {move || search_results.get().and_then(|res| {
                        match res {
                            Ok(docs) => {
                                if docs.is_empty() && !query.get().trim().is_empty() {
                                    Some(view! { <p>"No results found."</p> }.into_any())
                                } else if docs.is_empty() {
                                    None
                                } else {
                                    Some(view! {
                                        <ul>
                                            {docs.into_iter().map(|doc| {
                                                let href = doc.href();
                                                view! {
                                                    <li>
                                                        <a href=href>
                                                            <span class="icon">{doc.document.icon}</span>
                                                            {doc.document.title}
                                                        </a>
                                                        <span class="score">{doc.score}</span>
                                                    </li>
                                                }
                                            }).collect_view()}
                                        </ul>
                                    }.into_any())
                                }
                            }
                            Err(e) => {
                                Some(view! { <p class="error">"Search Error: " {e.to_string()}</p> }.into_any())
                            }
                        }
                    })}
                </Suspense>
            </div>
        </div>
    }
}
