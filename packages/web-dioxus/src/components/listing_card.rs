//! Listing card component — renders one market-intelligence record.
//!
//! Pure function of its props: no state, no network. Odd or missing
//! values render as empty regions rather than failing.

use dioxus::prelude::*;

use intel::{Listing, SentimentBreakdown};

use crate::components::radar_chart::{RadarChart, RadarPoint};

/// Props for ListingCard
#[derive(Props, Clone, PartialEq)]
pub struct ListingCardProps {
    pub listing: Listing,
    /// Host-owned export action; the card only triggers it
    pub on_export: EventHandler<Listing>,
}

/// Listing card displaying one extracted listing.
#[component]
pub fn ListingCard(props: ListingCardProps) -> Element {
    let listing = &props.listing;
    let on_export = props.on_export;
    let export_listing = props.listing.clone();

    let chart_data = radar_data(&listing.sentiment_breakdown);
    let confidence = confidence_class(listing.confidence_score);
    let stats = stat_bars(&listing.sentiment_breakdown);

    rsx! {
        div {
            class: "space-y-6 animate-fade-in pb-20",

            // Top Action Bar
            div {
                class: "flex justify-between items-center px-2",
                div {
                    class: "flex items-center gap-3",
                    div {
                        class: "flex items-center gap-2 px-3 py-1 rounded-full border text-[10px] font-black uppercase tracking-widest {confidence}",
                        "AI Confidence: {listing.confidence_score}%"
                    }
                    span {
                        class: "text-[9px] text-slate-600 font-bold",
                        "Extracted {format_extracted_at(&listing.extracted_at)}"
                    }
                }
                button {
                    onclick: move |_| on_export.call(export_listing.clone()),
                    class: "flex items-center gap-2 text-[10px] font-black uppercase tracking-widest text-slate-400 hover:text-white bg-slate-800/50 px-4 py-2 rounded-xl border border-slate-700/50 transition-all hover:bg-indigo-600 hover:border-indigo-500 active:scale-95",
                    svg {
                        class: "w-3.5 h-3.5",
                        fill: "none",
                        stroke: "currentColor",
                        view_box: "0 0 24 24",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: "M4 16v2a2 2 0 002 2h12a2 2 0 002-2v-2M12 4v12m0 0l-4-4m4 4l4-4"
                        }
                    }
                    "Export Intel"
                }
            }

            // Hero Card
            div {
                class: "glass-morphism rounded-[32px] p-8 md:p-10 border border-white/10 shadow-3xl relative overflow-hidden",

                div {
                    class: "relative flex flex-col lg:flex-row justify-between gap-10",
                    div {
                        class: "flex-1",
                        div {
                            class: "flex items-center gap-3 mb-6",
                            span {
                                class: "px-3 py-1 bg-white/5 text-slate-400 text-[9px] font-black uppercase tracking-widest rounded-full border border-white/5",
                                "{listing.category}"
                            }
                            if let Some(creator) = &listing.creator {
                                span {
                                    class: "text-[10px] text-slate-500 font-bold",
                                    "by "
                                    span {
                                        class: "text-indigo-400",
                                        "{creator_handle(creator)}"
                                    }
                                }
                            }
                        }

                        h2 {
                            class: "text-5xl font-black text-white mb-6 tracking-tight leading-tight",
                            "{listing.name}"
                        }

                        p {
                            class: "text-slate-400 leading-relaxed text-lg max-w-3xl font-medium",
                            "{listing.description}"
                        }

                        // Headline stat bars
                        div {
                            class: "mt-10 grid grid-cols-2 sm:grid-cols-4 gap-6",
                            for stat in stats {
                                div {
                                    p {
                                        class: "text-[9px] font-black text-slate-500 uppercase tracking-widest mb-2",
                                        "{stat.label}"
                                    }
                                    div {
                                        class: "flex items-end gap-2",
                                        span {
                                            class: "text-xl font-bold text-white leading-none",
                                            "{stat.value}"
                                        }
                                        div {
                                            class: "flex-1 h-1.5 bg-slate-800 rounded-full mb-1",
                                            div {
                                                class: "h-full {stat.color} rounded-full",
                                                style: "width: {stat.value}%",
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    // Radar panel
                    div {
                        class: "w-full lg:w-80 glass-morphism rounded-3xl p-6 border border-white/5 bg-white/2 flex flex-col items-center shadow-xl",
                        h3 {
                            class: "text-[10px] font-black text-slate-500 uppercase tracking-[0.2em] mb-4",
                            "Competency Radar"
                        }
                        div {
                            class: "w-full h-56",
                            RadarChart { data: chart_data }
                        }
                        div {
                            class: "mt-4 flex flex-col items-center",
                            div {
                                class: "text-4xl font-black text-white",
                                "{listing.sentiment_score}"
                                span { class: "text-slate-500 text-sm ml-1", "/ 10" }
                            }
                            p {
                                class: "text-[9px] font-black text-indigo-400 uppercase tracking-widest mt-1",
                                "Global Sentiment"
                            }
                        }
                    }
                }
            }

            // Pricing Grid
            div {
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4",
                for plan in listing.plans.iter() {
                    div {
                        class: "glass-morphism p-6 rounded-3xl border border-white/5 hover:border-indigo-500/50 transition-all hover:-translate-y-1 duration-300",
                        div {
                            class: "flex justify-between items-start mb-4",
                            span {
                                class: "text-[9px] font-black text-slate-500 uppercase tracking-widest",
                                "{plan.cycle}"
                            }
                        }
                        h4 {
                            class: "text-white text-sm font-bold truncate mb-1",
                            "{plan.name}"
                        }
                        div {
                            class: "flex items-baseline gap-1",
                            span {
                                class: "text-3xl font-black text-white",
                                "{plan.currency}{plan.price}"
                            }
                        }
                    }
                }
            }

            div {
                class: "grid grid-cols-1 lg:grid-cols-12 gap-6",

                // Left Col: Competitive
                div {
                    class: "lg:col-span-5 space-y-6",
                    div {
                        class: "glass-morphism p-8 rounded-3xl border border-white/5",
                        h3 {
                            class: "text-sm font-black text-white uppercase tracking-widest mb-8",
                            "Competitive Edge"
                        }
                        div {
                            class: "space-y-4",
                            for comp in listing.competitors.iter() {
                                div {
                                    class: "p-5 bg-white/2 rounded-2xl border border-white/5 hover:bg-white/5 transition-all",
                                    div {
                                        class: "flex justify-between items-center mb-3",
                                        h4 {
                                            class: "font-bold text-slate-200 text-sm",
                                            "{comp.name}"
                                        }
                                        span {
                                            class: "text-[9px] bg-slate-800 text-slate-400 px-2 py-1 rounded font-black tracking-widest uppercase",
                                            "{comp.price_range}"
                                        }
                                    }
                                    div {
                                        class: "flex gap-3",
                                        div { class: "flex-shrink-0 w-1 bg-indigo-500/30 rounded-full" }
                                        p {
                                            class: "text-xs text-slate-500 leading-relaxed italic",
                                            "{comp.advantage}"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "p-8 bg-indigo-600/10 border border-indigo-500/20 rounded-[32px] relative overflow-hidden",
                        h4 {
                            class: "text-[10px] font-black text-indigo-400 uppercase tracking-widest mb-4",
                            "Trajectory Analysis"
                        }
                        p {
                            class: "text-sm text-slate-300 leading-relaxed font-medium relative z-10",
                            "{listing.growth_potential}"
                        }
                    }
                }

                // Right Col: Features & Sentiment
                div {
                    class: "lg:col-span-7 space-y-6",
                    div {
                        class: "glass-morphism p-8 rounded-3xl border border-white/5",
                        h3 {
                            class: "text-sm font-black text-white uppercase tracking-widest mb-8",
                            "Technical Feature Stack"
                        }
                        div {
                            class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                            for feat in listing.features.iter() {
                                div {
                                    class: "flex items-start gap-3 p-3 bg-white/2 rounded-xl border border-white/5 hover:bg-white/5 transition-colors",
                                    div {
                                        class: "w-5 h-5 rounded-full bg-emerald-500/10 flex items-center justify-center text-emerald-500 flex-shrink-0",
                                        svg {
                                            class: "w-3 h-3",
                                            fill: "none",
                                            stroke: "currentColor",
                                            view_box: "0 0 24 24",
                                            path {
                                                stroke_linecap: "round",
                                                stroke_linejoin: "round",
                                                stroke_width: "3",
                                                d: "M5 13l4 4L19 7"
                                            }
                                        }
                                    }
                                    span {
                                        class: "text-xs text-slate-300 font-medium",
                                        "{feat}"
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 gap-6",
                        div {
                            class: "glass-morphism p-8 rounded-3xl border border-white/5",
                            h4 {
                                class: "text-[10px] font-black text-emerald-400 uppercase tracking-widest mb-6",
                                "Market Strengths"
                            }
                            ul {
                                class: "space-y-4",
                                for pro in listing.pros.iter() {
                                    li {
                                        class: "text-xs text-slate-400 flex items-start gap-3",
                                        span { class: "w-1.5 h-1.5 rounded-full bg-emerald-500 mt-1.5 flex-shrink-0" }
                                        "{pro}"
                                    }
                                }
                            }
                        }
                        div {
                            class: "glass-morphism p-8 rounded-3xl border border-white/5",
                            h4 {
                                class: "text-[10px] font-black text-red-400 uppercase tracking-widest mb-6",
                                "Core Vulnerabilities"
                            }
                            ul {
                                class: "space-y-4",
                                for con in listing.cons.iter() {
                                    li {
                                        class: "text-xs text-slate-400 flex items-start gap-3",
                                        span { class: "w-1.5 h-1.5 rounded-full bg-red-500 mt-1.5 flex-shrink-0" }
                                        "{con}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Sources Section — omitted entirely when there are no sources
            if !listing.sources.is_empty() {
                div {
                    class: "glass-morphism rounded-3xl p-8 border border-white/5",
                    div {
                        class: "flex items-center justify-between mb-8",
                        h4 {
                            class: "text-[10px] font-black text-slate-500 uppercase tracking-[0.3em]",
                            "Evidence & Grounding"
                        }
                        span {
                            class: "text-[9px] font-bold text-slate-600 italic",
                            "Data validated via Google Search"
                        }
                    }
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-3",
                        for source in listing.sources.iter() {
                            a {
                                href: "{source.uri}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "flex items-center gap-3 p-4 bg-white/2 rounded-2xl border border-white/5 hover:bg-white/5 hover:border-indigo-500/20 transition-all overflow-hidden",
                                div {
                                    class: "w-8 h-8 rounded-xl bg-indigo-500/10 flex items-center justify-center text-indigo-400 flex-shrink-0",
                                    svg {
                                        class: "w-3.5 h-3.5",
                                        fill: "none",
                                        stroke: "currentColor",
                                        view_box: "0 0 24 24",
                                        path {
                                            stroke_linecap: "round",
                                            stroke_linejoin: "round",
                                            stroke_width: "2",
                                            d: "M13.828 10.172a4 4 0 010 5.656l-3 3a4 4 0 01-5.656-5.656l1.5-1.5M10.172 13.828a4 4 0 010-5.656l3-3a4 4 0 015.656 5.656l-1.5 1.5"
                                        }
                                    }
                                }
                                div {
                                    class: "flex-1 min-w-0",
                                    p {
                                        class: "text-[10px] text-slate-400 truncate font-black uppercase tracking-wider mb-0.5",
                                        "{source.title}"
                                    }
                                    p {
                                        class: "text-[8px] text-slate-600 truncate font-medium",
                                        "{source.uri}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Confidence badge band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    Positive,
    Caution,
    Negative,
}

/// Band a confidence score. Thresholds are strict greater-than.
pub fn confidence_band(score: f64) -> ConfidenceBand {
    if score > 80.0 {
        ConfidenceBand::Positive
    } else if score > 50.0 {
        ConfidenceBand::Caution
    } else {
        ConfidenceBand::Negative
    }
}

/// Badge classes for a confidence score.
pub fn confidence_class(score: f64) -> &'static str {
    match confidence_band(score) {
        ConfidenceBand::Positive => "text-emerald-400 bg-emerald-500/10 border-emerald-500/20",
        ConfidenceBand::Caution => "text-amber-400 bg-amber-500/10 border-amber-500/20",
        ConfidenceBand::Negative => "text-red-400 bg-red-500/10 border-red-500/20",
    }
}

/// Five-axis radar dataset from the four sentiment sub-scores.
///
/// The Growth axis is a fixed presentation stand-in (85), not derived
/// from the listing's growth narrative.
pub fn radar_data(breakdown: &SentimentBreakdown) -> Vec<RadarPoint> {
    vec![
        RadarPoint { subject: "Value", value: breakdown.value_for_money, full_mark: 100.0 },
        RadarPoint { subject: "Quality", value: breakdown.quality, full_mark: 100.0 },
        RadarPoint { subject: "Support", value: breakdown.support, full_mark: 100.0 },
        RadarPoint { subject: "Ease", value: breakdown.ease_of_use, full_mark: 100.0 },
        RadarPoint { subject: "Growth", value: 85.0, full_mark: 100.0 },
    ]
}

/// Compact timestamp for the card header.
pub fn format_extracted_at(ts: &chrono::DateTime<chrono::Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Display handle for a creator: lowercased, whitespace stripped, `@`-prefixed.
pub fn creator_handle(creator: &str) -> String {
    let compact: String = creator
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    format!("@{compact}")
}

/// One headline stat bar.
pub struct StatBar {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

/// The four headline stat bars, in display order.
pub fn stat_bars(breakdown: &SentimentBreakdown) -> [StatBar; 4] {
    [
        StatBar { label: "Value", value: breakdown.value_for_money, color: "bg-emerald-500" },
        StatBar { label: "Support", value: breakdown.support, color: "bg-blue-500" },
        StatBar { label: "Ease", value: breakdown.ease_of_use, color: "bg-purple-500" },
        StatBar { label: "Quality", value: breakdown.quality, color: "bg-amber-500" },
    ]
}
