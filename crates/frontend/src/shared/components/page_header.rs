use leptos::prelude::*;

/// PageHeader component - title, subtitle and an actions slot for list pages
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Shows a "Loading..." marker next to the title while set
    #[prop(into)]
    busy: Signal<bool>,

    /// Action controls rendered on the right
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <p class="page__subtitle">{s}</p>
                })}
            </div>
            <Show when=move || busy.get()>
                <span class="page__busy">"Loading..."</span>
            </Show>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
