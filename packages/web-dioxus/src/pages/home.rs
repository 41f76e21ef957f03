//! Home page — the host around the listing card.
//!
//! Owns the state the card does not: the query input, the
//! loading/error sequencing around a fetch, the scan history, and the
//! export action.

use dioxus::prelude::*;

use intel::Listing;

use crate::components::{ListingCard, ListingCardSkeleton};

/// Home page - query input plus the current intelligence report
#[component]
pub fn Home() -> Element {
    let mut query = use_signal(String::new);
    let mut current = use_signal(|| Option::<Listing>::None);
    let mut history = use_signal(Vec::<Listing>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut is_loading = use_signal(|| false);

    let mut run_scan = move || {
        let q = query().trim().to_string();
        if q.is_empty() || is_loading() {
            return;
        }
        is_loading.set(true);
        error.set(None);
        spawn(async move {
            match extract_listing(q).await {
                Ok(listing) => {
                    history.write().insert(0, listing.clone());
                    current.set(Some(listing));
                }
                Err(e) => {
                    error.set(Some(scan_error_message(e)));
                }
            }
            is_loading.set(false);
        });
    };

    // Host-owned export: hand the record to the browser as a JSON download
    let on_export = move |listing: Listing| {
        tracing::info!(id = %listing.id, name = %listing.name, "exporting listing intel");
        if let Ok(json) = serde_json::to_string_pretty(&listing) {
            let script = format!(
                r#"const blob = new Blob([{json:?}], {{ type: "application/json" }});
const url = URL.createObjectURL(blob);
const a = document.createElement("a");
a.href = url;
a.download = "intel-{id}.json";
a.click();
URL.revokeObjectURL(url);"#,
                json = json,
                id = listing.id,
            );
            document::eval(&script);
        }
    };

    let scan_history = history();
    let error_message = error();
    let current_listing = current();

    rsx! {
        div {
            class: "min-h-screen bg-slate-950 text-slate-200",

            // Hero / query bar
            header {
                class: "border-b border-white/5",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10",
                    div {
                        class: "text-center max-w-2xl mx-auto",
                        h1 {
                            class: "text-4xl font-black text-white tracking-tight mb-3",
                            "Whop Intel"
                        }
                        p {
                            class: "text-slate-400 mb-8",
                            "AI market intelligence for any Whop product. Paste a link or type a product name."
                        }

                        div {
                            class: "flex gap-3",
                            input {
                                r#type: "text",
                                placeholder: "https://whop.com/... or a product name",
                                value: "{query}",
                                oninput: move |e| query.set(e.value()),
                                onkeydown: move |e| {
                                    if e.key() == Key::Enter {
                                        run_scan();
                                    }
                                },
                                class: "flex-1 px-5 py-3.5 bg-slate-900 border border-slate-800 rounded-xl text-slate-100 placeholder-slate-600 focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:border-transparent transition-all"
                            }
                            button {
                                onclick: move |_| run_scan(),
                                disabled: is_loading(),
                                class: "px-6 py-3.5 bg-indigo-600 text-white rounded-xl hover:bg-indigo-500 disabled:opacity-50 disabled:cursor-not-allowed transition-colors font-bold",
                                if is_loading() { "Scanning..." } else { "Run Scan" }
                            }
                        }

                        // Scan history
                        if !scan_history.is_empty() {
                            div {
                                class: "mt-6 flex flex-wrap items-center justify-center gap-2",
                                span {
                                    class: "text-[10px] font-black text-slate-600 uppercase tracking-widest",
                                    "Recent:"
                                }
                                for listing in scan_history.iter() {
                                    {
                                        let selected = listing.clone();
                                        rsx! {
                                            button {
                                                key: "{listing.id}",
                                                class: "px-3 py-1 text-xs bg-slate-900 border border-slate-800 rounded-full text-slate-400 hover:text-white hover:border-indigo-500/50 transition-all",
                                                onclick: move |_| current.set(Some(selected.clone())),
                                                "{listing.name}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Main content
            main {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",

                if is_loading() {
                    ListingCardSkeleton {}
                }

                else if let Some(message) = error_message {
                    div {
                        class: "text-center py-12",
                        div {
                            class: "inline-flex items-center justify-center w-16 h-16 rounded-full bg-red-500/10 mb-4",
                            svg {
                                class: "w-8 h-8 text-red-400",
                                fill: "none",
                                stroke: "currentColor",
                                view_box: "0 0 24 24",
                                path {
                                    stroke_linecap: "round",
                                    stroke_linejoin: "round",
                                    stroke_width: "2",
                                    d: "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z"
                                }
                            }
                        }
                        h3 { class: "text-lg font-medium text-white mb-2", "Scan failed" }
                        p { class: "text-slate-500", "{message}" }
                    }
                }

                else if let Some(listing) = current_listing {
                    ListingCard {
                        listing: listing.clone(),
                        on_export: on_export,
                    }
                }

                else {
                    div {
                        class: "text-center py-24",
                        h3 { class: "text-xl font-semibold text-slate-400 mb-2", "No scans yet" }
                        p {
                            class: "text-slate-600 max-w-md mx-auto",
                            "Run a scan to get pricing, sentiment, competitors, and growth analysis for any listing."
                        }
                    }
                }
            }
        }
    }
}

/// The message shown in the error banner.
///
/// Server-side failures carry the message the fetcher produced; render
/// it bare instead of `ServerFnError`'s "error running server function"
/// wrapper. Transport-level failures keep their full Display.
fn scan_error_message(e: ServerFnError) -> String {
    match e {
        ServerFnError::ServerError(message) => message,
        other => other.to_string(),
    }
}

/// Server function: run one extraction round trip against Gemini.
#[server]
async fn extract_listing(query: String) -> Result<Listing, ServerFnError> {
    use intel::{GeminiModel, ListingFetcher};

    let model = GeminiModel::from_env().map_err(|e| ServerFnError::new(e.to_string()))?;
    let fetcher = ListingFetcher::new(model);

    fetcher
        .fetch(&query)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_message_renders_bare() {
        let message =
            "Intelligence engine encountered a data block. Please try a different product name.";
        let e = ServerFnError::new(message);
        assert_eq!(scan_error_message(e), message);
    }
}
