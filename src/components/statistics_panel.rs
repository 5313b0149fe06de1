//! Statistics Panel Component

use comic_admin_core::catalog::{CatalogStats, Count};
use leptos::prelude::*;

/// Bar list; widths relative to the first (largest) entry
fn ranking_card(title: &'static str, counts: &[Count]) -> AnyView {
    let max = counts.first().map(|c| c.count).unwrap_or(1).max(1);
    let entries = counts
        .iter()
        .map(|entry| {
            let width = format!("width: {}%", entry.count * 100 / max);
            view! {
                <li class="stat-row">
                    <span class="stat-label">{entry.label.clone()}</span>
                    <span class="stat-bar"><span class="stat-fill" style=width></span></span>
                    <span class="stat-count">{entry.count}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="card stat-card">
            <h4>{title}</h4>
            <ul class="stat-list">{entries}</ul>
        </div>
    }
    .into_any()
}

#[component]
pub fn StatisticsPanel(stats: Memo<CatalogStats>) -> impl IntoView {
    view! {
        <section class="statistics">
            <h3>"Statistics"</h3>
            <div class="stats-grid">
                {move || stats.with(|s| ranking_card("Top Authors", &s.authors))}
                {move || stats.with(|s| ranking_card("Top Publishers", &s.publishers))}
                {move || stats.with(|s| ranking_card("Top Genres", &s.genres))}
                {move || stats.with(|s| {
                    let (available, unavailable) = (s.available, s.unavailable);
                    let percentage = format!("{:.1}% available", s.available_percentage());
                    view! {
                        <div class="card stat-card">
                            <h4>"Availability"</h4>
                            <p>"Available: " {available}</p>
                            <p>"Unavailable: " {unavailable}</p>
                            <p class="muted">{percentage}</p>
                        </div>
                    }
                })}
            </div>
            {move || stats.with(|s| ranking_card("Condition Distribution", &s.conditions))}
        </section>
    }
}
