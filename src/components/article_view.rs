use leptos::prelude::*;

use crate::db::models::RenderedArticle;

#[server]
pub async fn get_article_html(slug: String) -> Result<RenderedArticle, ServerFnError> {
    use crate::api::articles::get_rendered_article;
    use crate::state::AppState;

    let state = leptos::prelude::use_context::<AppState>()
        .ok_or_else(|| ServerFnError::new("AppState not found in context"))?;

    get_rendered_article(state.article_repo.as_ref(), &slug)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn ArticleView(slug: String) -> impl IntoView {
    let article = Resource::new(
        move || slug.clone(),
        |s| async move { get_article_html(s).await },
    );

    view! {
        <Suspense fallback=|| view! { <p>"Loading..."</p> }>
            {move || article.get().map(|res| match res {
                Ok(rendered) => view! {
                    <article class="article">
                        <header>
                            <span class="kind">{rendered.article.kind.to_string()}</span>
                            <h1>{rendered.article.title}</h1>
                            <p class="summary">{rendered.article.summary}</p>
                            <ul class="tags">
                                {rendered.article.tags.into_iter().map(|tag| view! { <li>{tag}</li> }).collect_view()}
                            </ul>
                        </header>
                        <div class="article-body" inner_html=rendered.html></div>
                    </article>
                }.into_any(),
                Err(e) => view! { <p class="error">"Error: " {e.to_string()}</p> }.into_any(),
            })}
        </Suspense>
    }
}
