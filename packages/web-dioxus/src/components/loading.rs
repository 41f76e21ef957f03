//! Loading skeleton shown while a scan runs

use dioxus::prelude::*;

/// Skeleton placeholder shown while a scan is running
#[component]
pub fn ListingCardSkeleton() -> Element {
    rsx! {
        div {
            class: "space-y-6 animate-pulse",
            div {
                class: "flex justify-between items-center px-2",
                div { class: "h-6 w-40 bg-slate-800 rounded-full" }
                div { class: "h-8 w-28 bg-slate-800 rounded-xl" }
            }
            div {
                class: "rounded-[32px] p-10 border border-white/5 bg-slate-900/50",
                div { class: "h-5 w-24 bg-slate-800 rounded-full mb-6" }
                div { class: "h-12 w-2/3 bg-slate-800 rounded mb-6" }
                div {
                    class: "space-y-2 mb-10",
                    div { class: "h-4 w-full bg-slate-800 rounded" }
                    div { class: "h-4 w-5/6 bg-slate-800 rounded" }
                }
                div {
                    class: "grid grid-cols-2 sm:grid-cols-4 gap-6",
                    for i in 0..4 {
                        div { key: "{i}", class: "h-8 bg-slate-800 rounded" }
                    }
                }
            }
            div {
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4",
                for i in 0..4 {
                    div { key: "{i}", class: "h-32 bg-slate-900/50 border border-white/5 rounded-3xl" }
                }
            }
        }
    }
}
